//! Heuristic relevance scoring and the quality filter

use crate::lexicon::{lowered, Lexicon};
use ecotab_domain::{ScoredRecord, ValidatedRecord};

const PRIORITY_INDICATOR_POINTS: i32 = 2;
const PRIORITY_SECTOR_POINTS: i32 = 1;
const UNIT_POINTS: i32 = 1;
const RECENCY_POINTS: i32 = 1;
const CONTACT_PENALTY: i32 = -5;

/// Scores validated records and drops those below the threshold
pub struct QualityScorer {
    priority_indicators: Vec<String>,
    priority_sectors: Vec<String>,
    unit_markers: Vec<String>,
    recency_markers: Vec<String>,
    contact_markers: Vec<String>,
    min_score: i32,
}

impl QualityScorer {
    /// Create a scorer from the lexicon lists
    pub fn new(lexicon: &Lexicon, min_score: i32) -> Self {
        Self {
            priority_indicators: distinct(lowered(&lexicon.priority_indicators)),
            priority_sectors: distinct(lowered(&lexicon.priority_sectors)),
            unit_markers: lexicon.unit_markers.clone(),
            recency_markers: lowered(&lexicon.recency_markers),
            contact_markers: lowered(&lexicon.contact_markers),
            min_score,
        }
    }

    /// Minimum score a record needs to be kept
    pub fn min_score(&self) -> i32 {
        self.min_score
    }

    /// Score one record
    ///
    /// Priority indicators count +2 and priority sectors +1, once per distinct
    /// term found in the indicator or the sentence. A unit marker in the value
    /// and a recency marker in the sentence add +1 each. A contact marker in the
    /// sentence costs 5.
    pub fn score(&self, record: &ValidatedRecord) -> i32 {
        let indicator = record.indicator.to_lowercase();
        let sentence = record.sentence.to_lowercase();
        let in_either = |term: &str| indicator.contains(term) || sentence.contains(term);

        let mut score = 0;
        score += PRIORITY_INDICATOR_POINTS
            * self.priority_indicators.iter().filter(|t| in_either(t.as_str())).count() as i32;
        score += PRIORITY_SECTOR_POINTS
            * self.priority_sectors.iter().filter(|t| in_either(t.as_str())).count() as i32;

        if self.unit_markers.iter().any(|m| record.value.contains(m.as_str())) {
            score += UNIT_POINTS;
        }
        if self.recency_markers.iter().any(|m| sentence.contains(m.as_str())) {
            score += RECENCY_POINTS;
        }
        if self.contact_markers.iter().any(|m| sentence.contains(m.as_str())) {
            score += CONTACT_PENALTY;
        }

        score
    }

    /// Attach a score to each record, preserving order
    pub fn score_all(&self, records: Vec<ValidatedRecord>) -> Vec<ScoredRecord> {
        records
            .into_iter()
            .map(|record| {
                let score = self.score(&record);
                ScoredRecord { record, score }
            })
            .collect()
    }

    /// Keep records scoring at least `min_score`, in their original order
    pub fn filter(&self, records: Vec<ValidatedRecord>) -> Vec<ValidatedRecord> {
        self.score_all(records)
            .into_iter()
            .filter(|scored| scored.score >= self.min_score)
            .map(|scored| scored.record)
            .collect()
    }
}

fn distinct(terms: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(terms.len());
    for term in terms {
        if !seen.contains(&term) {
            seen.push(term);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> QualityScorer {
        QualityScorer::new(&Lexicon::french(), 2)
    }

    fn gdp_record() -> ValidatedRecord {
        ValidatedRecord::new(
            "PIB national",
            "4,2%",
            "Q1 2025",
            "L'économie nationale aurait enregistré une progression de 4,2% au premier trimestre 2025",
        )
    }

    #[test]
    fn test_gdp_record_scores_four() {
        let scorer = scorer();
        assert_eq!(scorer.score(&gdp_record()), 4);
        assert_eq!(scorer.filter(vec![gdp_record()]).len(), 1);
    }

    #[test]
    fn test_low_score_dropped() {
        let record = ValidatedRecord::new(
            "Construction",
            "12 chantiers",
            "Non spécifiée",
            "Le secteur de la construction a ouvert 12 chantiers",
        );
        let scorer = scorer();
        assert_eq!(scorer.score(&record), 1);
        assert!(scorer.filter(vec![record]).is_empty());
    }

    #[test]
    fn test_term_counted_once_across_fields() {
        // "inflation" appears in both fields but scores once
        let record = ValidatedRecord::new(
            "Inflation",
            "2",
            "Non spécifiée",
            "L'inflation reste contenue selon la banque",
        );
        assert_eq!(scorer().score(&record), 2);
    }

    #[test]
    fn test_several_priority_terms_accumulate() {
        let record = ValidatedRecord::new(
            "Exportations industrie",
            "+3 points",
            "2024",
            "Les exportations de l'industrie et de la manufacture ont gagné 3 points en 2024",
        );
        // export +2, industrie +1, manufacture +1, "point" +1, 2024 +1
        assert_eq!(scorer().score(&record), 6);
    }

    #[test]
    fn test_contact_penalty() {
        let record = ValidatedRecord::new(
            "Croissance",
            "3%",
            "2025",
            "Pour le détail de la croissance 2025, contact presse",
        );
        // croissance +2, % +1, 2025 +1, contact -5
        assert_eq!(scorer().score(&record), -1);
        assert!(scorer().filter(vec![record]).is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let records = vec![
            ValidatedRecord::new("Inflation", "2%", "2025", "L'inflation à 2% en 2025"),
            ValidatedRecord::new("Construction", "12", "x", "Construction de 12 logements"),
            ValidatedRecord::new("PIB", "3%", "2024", "Le PIB a crû de 3% en 2024"),
        ];
        let kept = scorer().filter(records);
        let names: Vec<&str> = kept.iter().map(|r| r.indicator.as_str()).collect();
        assert_eq!(names, vec!["Inflation", "PIB"]);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let strict = QualityScorer::new(&Lexicon::french(), 5);
        assert_eq!(strict.min_score(), 5);
        assert!(strict.filter(vec![gdp_record()]).is_empty());
    }

    #[test]
    fn test_score_all_attaches_scores() {
        let scored = scorer().score_all(vec![gdp_record()]);
        assert_eq!(scored[0].score, 4);
        assert_eq!(scored[0].record, gdp_record());
    }
}
