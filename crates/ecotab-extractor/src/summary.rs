//! Descriptive statistics over the final table

use crate::lexicon::Lexicon;
use ecotab_domain::FinalTable;
use serde::Serialize;

/// Row count for one summary category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Category label from the lexicon
    pub label: String,
    /// Rows assigned to it
    pub count: usize,
}

/// Overview of a final table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    /// Total rows
    pub total_rows: usize,

    /// Distinct indicator names
    pub distinct_indicators: usize,

    /// Most frequent period; ties go to the one seen first
    pub dominant_period: Option<String>,

    /// Per-category counts, in order of first appearance
    pub categories: Vec<CategoryCount>,

    /// Category with the most rows; ties go to the one seen first
    pub dominant_category: Option<String>,
}

/// Label for an indicator: the first category rule with a keyword in it, or the fallback
pub fn categorize<'a>(indicator: &str, lexicon: &'a Lexicon) -> &'a str {
    let lower = indicator.to_lowercase();
    lexicon
        .categories
        .iter()
        .find(|rule| {
            rule.keywords
                .iter()
                .any(|k| lower.contains(k.to_lowercase().as_str()))
        })
        .map(|rule| rule.label.as_str())
        .unwrap_or(lexicon.fallback_category.as_str())
}

/// Summarize a final table
pub fn summarize(table: &FinalTable, lexicon: &Lexicon) -> TableSummary {
    let mut indicators: Vec<&str> = Vec::new();
    let mut periods: Vec<(&str, usize)> = Vec::new();
    let mut categories: Vec<CategoryCount> = Vec::new();

    for row in table {
        if !indicators.contains(&row.indicator.as_str()) {
            indicators.push(row.indicator.as_str());
        }

        match periods.iter_mut().find(|(p, _)| *p == row.period) {
            Some((_, count)) => *count += 1,
            None => periods.push((row.period.as_str(), 1)),
        }

        let label = categorize(&row.indicator, lexicon);
        match categories.iter_mut().find(|c| c.label == label) {
            Some(category) => category.count += 1,
            None => categories.push(CategoryCount {
                label: label.to_string(),
                count: 1,
            }),
        }
    }

    let dominant_period = first_max(periods.iter().map(|(p, n)| (*p, *n))).map(str::to_string);
    let dominant_category =
        first_max(categories.iter().map(|c| (c.label.as_str(), c.count))).map(str::to_string);

    TableSummary {
        total_rows: table.len(),
        distinct_indicators: indicators.len(),
        dominant_period,
        categories,
        dominant_category,
    }
}

/// Highest count, keeping the earliest entry on ties
fn first_max<'a>(entries: impl Iterator<Item = (&'a str, usize)>) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for (key, count) in entries {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecotab_domain::ValidatedRecord;

    fn table(rows: &[(&str, &str, &str)]) -> FinalTable {
        FinalTable::from_rows(
            rows.iter()
                .map(|(i, v, p)| ValidatedRecord::new(*i, *v, *p, "phrase source"))
                .collect(),
        )
    }

    #[test]
    fn test_summary_counts() {
        let lexicon = Lexicon::french();
        let summary = summarize(
            &table(&[
                ("Agriculture", "3,1%", "premier trimestre 2025"),
                ("Inflation", "2,2%", "Q1 2025"),
                ("Inflation", "2,5%", "Q2 2025"),
                ("PIB national", "4,2%", "Q1 2025"),
                ("Taux directeur", "2,75%", "2025"),
            ]),
            &lexicon,
        );

        assert_eq!(summary.total_rows, 5);
        assert_eq!(summary.distinct_indicators, 4);
        assert_eq!(summary.dominant_period.as_deref(), Some("Q1 2025"));
        assert_eq!(
            summary.categories,
            vec![
                CategoryCount { label: "Secteurs économiques".to_string(), count: 1 },
                CategoryCount { label: "Inflation/Prix".to_string(), count: 2 },
                CategoryCount { label: "Croissance/PIB".to_string(), count: 1 },
                CategoryCount { label: "Taux d'intérêt".to_string(), count: 1 },
            ]
        );
        assert_eq!(summary.dominant_category.as_deref(), Some("Inflation/Prix"));
    }

    #[test]
    fn test_ties_go_to_first_seen() {
        let lexicon = Lexicon::french();
        let summary = summarize(
            &table(&[
                ("Exportations", "5%", "2024"),
                ("Indice boursier", "1,2%", "2025"),
            ]),
            &lexicon,
        );
        assert_eq!(summary.dominant_period.as_deref(), Some("2024"));
        assert_eq!(summary.dominant_category.as_deref(), Some("Commerce extérieur"));
    }

    #[test]
    fn test_category_rule_order() {
        let lexicon = Lexicon::french();
        // matches both growth and rate rules; growth comes first
        assert_eq!(categorize("Taux de croissance", &lexicon), "Croissance/PIB");
        assert_eq!(categorize("Prix à la production", &lexicon), "Inflation/Prix");
        assert_eq!(categorize("Crédit bancaire", &lexicon), "Autres");
    }

    #[test]
    fn test_empty_table() {
        let summary = summarize(&FinalTable::default(), &Lexicon::french());
        assert_eq!(summary, TableSummary::default());
        assert!(summary.dominant_period.is_none());
    }
}
