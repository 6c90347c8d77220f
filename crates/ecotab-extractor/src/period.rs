//! Period inference from free text
//!
//! An ordered cascade of pattern rules, evaluated against the lowercased
//! sentence. The first rule that matches decides the period, so quarters win
//! over months, months over bare years, and bare years over frequency words,
//! regardless of where each appears in the sentence. Within one rule the
//! leftmost match is taken.

use crate::error::ExtractorError;
use crate::lexicon::{lowered, PeriodVocabulary};
use regex::{Captures, Regex};

/// Pattern family a rule belongs to, in cascade order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodFamily {
    /// Quarter 1 to 4 with its year
    Quarter(u8),
    /// Month name with its year
    Month,
    /// Year within the configured range
    Year,
    /// Frequency word such as "annuel"
    Frequency,
}

/// Result of a successful cascade match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodMatch {
    /// Family of the winning rule
    pub family: PeriodFamily,
    /// Extracted period text
    pub period: String,
}

struct PeriodRule {
    family: PeriodFamily,
    matcher: Regex,
    extract: fn(&Captures<'_>) -> String,
}

/// Ordered period inference cascade built from a `PeriodVocabulary`
pub struct PeriodCascade {
    rules: Vec<PeriodRule>,
    unspecified: String,
}

fn alternation(terms: &[String]) -> String {
    terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|")
}

fn whole_span(caps: &Captures<'_>) -> String {
    caps[0].to_string()
}

/// Ordinal phrases are returned as matched; codes are canonicalised to `Q1 2025`
fn quarter_span(caps: &Captures<'_>) -> String {
    match (caps.name("code"), caps.name("year")) {
        (Some(code), Some(year)) => format!("{} {}", code.as_str().to_uppercase(), year.as_str()),
        _ => caps[0].to_string(),
    }
}

impl PeriodCascade {
    /// Build the cascade; empty vocabulary lists simply contribute no rule
    pub fn new(vocabulary: &PeriodVocabulary) -> Result<Self, ExtractorError> {
        if vocabulary.first_year > vocabulary.last_year {
            return Err(ExtractorError::Config(format!(
                "first_year {} is after last_year {}",
                vocabulary.first_year, vocabulary.last_year
            )));
        }

        let mut rules = Vec::new();
        let codes = lowered(&vocabulary.quarter_codes);

        for (i, ordinals) in vocabulary.quarters.iter().enumerate().take(4) {
            let quarter = i as u8 + 1;
            let ordinals = lowered(ordinals);
            let quarter_codes: Vec<String> =
                codes.iter().map(|c| format!("{}{}", c, quarter)).collect();

            let mut branches = Vec::new();
            if !ordinals.is_empty() {
                branches.push(format!("(?:{})", alternation(&ordinals)));
            }
            if !quarter_codes.is_empty() {
                branches.push(format!("(?P<code>{})", alternation(&quarter_codes)));
            }
            if branches.is_empty() {
                continue;
            }

            let pattern = format!(r"\b(?:{})\s+(?P<year>\d{{4}})\b", branches.join("|"));
            rules.push(PeriodRule {
                family: PeriodFamily::Quarter(quarter),
                matcher: Regex::new(&pattern)?,
                extract: quarter_span,
            });
        }

        let months = lowered(&vocabulary.months);
        if !months.is_empty() {
            let pattern = format!(r"\b(?:{})\s+\d{{4}}\b", alternation(&months));
            rules.push(PeriodRule {
                family: PeriodFamily::Month,
                matcher: Regex::new(&pattern)?,
                extract: whole_span,
            });
        }

        let years: Vec<String> = (vocabulary.first_year..=vocabulary.last_year)
            .map(|y| y.to_string())
            .collect();
        rules.push(PeriodRule {
            family: PeriodFamily::Year,
            matcher: Regex::new(&format!(r"\b(?:{})\b", years.join("|")))?,
            extract: whole_span,
        });

        let frequencies = lowered(&vocabulary.frequencies);
        if !frequencies.is_empty() {
            rules.push(PeriodRule {
                family: PeriodFamily::Frequency,
                matcher: Regex::new(&format!(r"\b(?:{})\b", alternation(&frequencies)))?,
                extract: whole_span,
            });
        }

        Ok(Self {
            rules,
            unspecified: vocabulary.unspecified.clone(),
        })
    }

    /// Run the cascade, returning the winning family and period
    pub fn classify(&self, sentence: &str) -> Option<PeriodMatch> {
        let lowered = sentence.to_lowercase();
        self.rules.iter().find_map(|rule| {
            rule.matcher.captures(&lowered).map(|caps| PeriodMatch {
                family: rule.family,
                period: (rule.extract)(&caps),
            })
        })
    }

    /// Infer a period, falling back to the "unspecified" sentinel
    pub fn infer(&self, sentence: &str) -> String {
        self.classify(sentence)
            .map(|m| m.period)
            .unwrap_or_else(|| self.unspecified.clone())
    }

    /// The sentinel returned when nothing matches
    pub fn unspecified(&self) -> &str {
        &self.unspecified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn french() -> PeriodCascade {
        PeriodCascade::new(&Lexicon::french().periods).unwrap()
    }

    #[test]
    fn test_ordinal_quarter() {
        let cascade = french();
        assert_eq!(
            cascade.infer("Les activités agricoles ont progressé de 3,1% au premier trimestre 2025"),
            "premier trimestre 2025"
        );
    }

    #[test]
    fn test_accent_stripped_quarter() {
        let cascade = french();
        assert_eq!(
            cascade.infer("Repli au deuxieme trimestre 2024 des importations"),
            "deuxieme trimestre 2024"
        );
        assert_eq!(
            cascade.infer("Au Quatrième Trimestre 2023, le déficit s'est creusé"),
            "quatrième trimestre 2023"
        );
    }

    #[test]
    fn test_quarter_codes_are_canonical() {
        let cascade = french();
        assert_eq!(cascade.infer("Croissance de 4,2% en Q1 2025"), "Q1 2025");
        assert_eq!(cascade.infer("hausse observée au t3 2024"), "T3 2024");
    }

    #[test]
    fn test_quarter_order_beats_position() {
        let cascade = french();
        let found = cascade
            .classify("Après le T4 2024, le PIB a rebondi au T1 2025")
            .unwrap();
        assert_eq!(found.family, PeriodFamily::Quarter(1));
        assert_eq!(found.period, "T1 2025");
    }

    #[test]
    fn test_leftmost_within_family() {
        let cascade = french();
        assert_eq!(
            cascade.infer("Q1 2024 puis premier trimestre 2025"),
            "Q1 2024"
        );
    }

    #[test]
    fn test_quarter_beats_year() {
        let cascade = french();
        let found = cascade
            .classify("En 2024, puis au premier trimestre 2025")
            .unwrap();
        assert_eq!(found.family, PeriodFamily::Quarter(1));
    }

    #[test]
    fn test_month() {
        let cascade = french();
        assert_eq!(cascade.infer("L'inflation en Février 2025 a ralenti"), "février 2025");
        assert_eq!(cascade.infer("fin aout 2024"), "aout 2024");
    }

    #[test]
    fn test_month_beats_year() {
        let cascade = french();
        let found = cascade.classify("Depuis 2023 et jusqu'en mars 2025").unwrap();
        assert_eq!(found.family, PeriodFamily::Month);
        assert_eq!(found.period, "mars 2025");
    }

    #[test]
    fn test_bare_year() {
        let cascade = french();
        assert_eq!(cascade.infer("Une croissance de 2% en 2024."), "2024");
    }

    #[test]
    fn test_year_out_of_range_ignored() {
        let cascade = french();
        assert_eq!(cascade.infer("Une croissance de 2% en 2019."), "Non spécifiée");
        assert_eq!(cascade.infer("Référence 120245 interne"), "Non spécifiée");
    }

    #[test]
    fn test_frequency_word() {
        let cascade = french();
        let found = cascade.classify("Le glissement annuel des prix reste modéré").unwrap();
        assert_eq!(found.family, PeriodFamily::Frequency);
        assert_eq!(found.period, "annuel");
    }

    #[test]
    fn test_frequency_requires_whole_word() {
        let cascade = french();
        assert_eq!(cascade.infer("Les annuelles perspectives"), "Non spécifiée");
    }

    #[test]
    fn test_unspecified() {
        let cascade = french();
        assert_eq!(cascade.infer("Aucune date ici"), "Non spécifiée");
        assert!(cascade.classify("Aucune date ici").is_none());
        assert_eq!(cascade.unspecified(), "Non spécifiée");
    }

    #[test]
    fn test_english_cascade() {
        let cascade = PeriodCascade::new(&Lexicon::english().periods).unwrap();
        assert_eq!(cascade.infer("GDP grew 2% in the First Quarter 2025"), "first quarter 2025");
        assert_eq!(cascade.infer("Exports fell in q2 2024"), "Q2 2024");
        assert_eq!(cascade.infer("Prices in January 2025"), "january 2025");
        assert_eq!(cascade.infer("The semi-annual report"), "semi-annual");
        assert_eq!(cascade.infer("nothing"), "unspecified");
    }

    #[test]
    fn test_inverted_year_range_rejected() {
        let mut vocabulary = Lexicon::french().periods;
        vocabulary.first_year = 2030;
        vocabulary.last_year = 2020;
        assert!(matches!(
            PeriodCascade::new(&vocabulary),
            Err(ExtractorError::Config(_))
        ));
    }

    #[test]
    fn test_empty_lists_skip_rules() {
        let mut vocabulary = Lexicon::french().periods;
        vocabulary.quarters.clear();
        vocabulary.months.clear();
        vocabulary.frequencies.clear();
        let cascade = PeriodCascade::new(&vocabulary).unwrap();
        assert_eq!(cascade.infer("premier trimestre 2025"), "2025");
        assert_eq!(cascade.infer("annuel"), "Non spécifiée");
    }
}
