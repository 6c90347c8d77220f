//! Field validation for candidate records

use crate::error::ExtractorError;
use crate::lexicon::{lowered, Lexicon};
use ecotab_domain::CandidateRecord;
use regex::Regex;
use std::fmt;

/// Length thresholds applied by the last validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    /// Shortest accepted indicator, in characters
    pub min_indicator_chars: usize,

    /// Shortest accepted sentence, in characters
    pub min_sentence_chars: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_indicator_chars: 3,
            min_sentence_chars: 20,
        }
    }
}

/// Reasons for rejection, one per rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Indicator echoes a column header word
    HeaderEcho(String),

    /// Neither indicator nor sentence mentions an economic term
    NoEconomicTerm,

    /// Value holds no number
    NonNumericValue(String),

    /// Indicator or sentence contains an exclusion marker
    ExcludedTerm(String),

    /// A field is below its minimum length
    TooShort {
        /// Field name
        field: &'static str,
        /// Actual length in characters
        len: usize,
        /// Required minimum
        min: usize,
    },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::HeaderEcho(word) => write!(f, "indicator echoes header word '{}'", word),
            RejectionReason::NoEconomicTerm => write!(f, "no economic vocabulary term"),
            RejectionReason::NonNumericValue(value) => write!(f, "value '{}' has no number", value),
            RejectionReason::ExcludedTerm(term) => write!(f, "contains excluded term '{}'", term),
            RejectionReason::TooShort { field, len, min } => {
                write!(f, "{} too short ({} < {} chars)", field, len, min)
            }
        }
    }
}

/// Accepts or rejects candidate records against the economic-domain rules
pub struct FieldValidator {
    header_echoes: Vec<String>,
    vocabulary: Vec<String>,
    exclusions: Vec<String>,
    number: Regex,
    rules: ValidationRules,
}

impl FieldValidator {
    /// Create a validator from the lexicon lists and length thresholds
    pub fn new(lexicon: &Lexicon, rules: ValidationRules) -> Result<Self, ExtractorError> {
        Ok(Self {
            header_echoes: lowered(&lexicon.header_echoes),
            vocabulary: lowered(&lexicon.economic_vocabulary),
            exclusions: lowered(&lexicon.exclusions),
            number: Regex::new(r"[+-]?\d+(?:[.,]\d+)?")?,
            rules,
        })
    }

    /// Run the rules in order, stopping at the first failure
    ///
    /// 1. header echo in the indicator
    /// 2. economic term in indicator or sentence
    /// 3. number in the value
    /// 4. exclusion term in indicator or sentence
    /// 5. minimum indicator and sentence lengths
    ///
    /// Both schemas share this path; a legacy record has no period to check.
    pub fn check(&self, candidate: &CandidateRecord) -> Result<(), RejectionReason> {
        let indicator = candidate.indicator();
        let value = candidate.value();
        let sentence = candidate.sentence();

        let indicator_lower = indicator.to_lowercase();
        if let Some(word) = first_contained(&self.header_echoes, &indicator_lower) {
            return Err(RejectionReason::HeaderEcho(word.to_string()));
        }

        let text = format!("{} {}", indicator, sentence).to_lowercase();
        if first_contained(&self.vocabulary, &text).is_none() {
            return Err(RejectionReason::NoEconomicTerm);
        }

        if !self.number.is_match(value) {
            return Err(RejectionReason::NonNumericValue(value.to_string()));
        }

        if let Some(term) = first_contained(&self.exclusions, &text) {
            return Err(RejectionReason::ExcludedTerm(term.to_string()));
        }

        let indicator_len = indicator.chars().count();
        if indicator_len < self.rules.min_indicator_chars {
            return Err(RejectionReason::TooShort {
                field: "indicator",
                len: indicator_len,
                min: self.rules.min_indicator_chars,
            });
        }

        let sentence_len = sentence.chars().count();
        if sentence_len < self.rules.min_sentence_chars {
            return Err(RejectionReason::TooShort {
                field: "sentence",
                len: sentence_len,
                min: self.rules.min_sentence_chars,
            });
        }

        Ok(())
    }

    /// Whether the candidate passes every rule
    pub fn is_valid(&self, candidate: &CandidateRecord) -> bool {
        self.check(candidate).is_ok()
    }
}

fn first_contained<'a>(terms: &'a [String], text: &str) -> Option<&'a str> {
    terms
        .iter()
        .find(|term| text.contains(term.as_str()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> FieldValidator {
        FieldValidator::new(&Lexicon::french(), ValidationRules::default()).unwrap()
    }

    fn rich(indicator: &str, value: &str, period: &str, sentence: &str) -> CandidateRecord {
        CandidateRecord::Rich {
            indicator: indicator.to_string(),
            value: value.to_string(),
            period: period.to_string(),
            sentence: sentence.to_string(),
        }
    }

    fn legacy(indicator: &str, value: &str, sentence: &str) -> CandidateRecord {
        CandidateRecord::Legacy {
            indicator: indicator.to_string(),
            value: value.to_string(),
            sentence: sentence.to_string(),
        }
    }

    #[test]
    fn test_accepts_gdp_record() {
        let record = rich(
            "PIB national",
            "4,2%",
            "Q1 2025",
            "Le PIB national a progressé de 4,2% au premier trimestre 2025",
        );
        assert!(validator().is_valid(&record));
    }

    #[test]
    fn test_rejects_phone_record() {
        let record = rich(
            "Téléphone",
            "01 23 45 67",
            "2025",
            "Pour toute question sur le PIB, appelez le standard",
        );
        assert_eq!(
            validator().check(&record),
            Err(RejectionReason::ExcludedTerm("téléphone".to_string()))
        );
    }

    #[test]
    fn test_rejects_contact_line_with_blank_period() {
        let record = rich(
            "Téléphone",
            "06-1234",
            "",
            "Contactez notre service au téléphone pour toute question.",
        );
        assert_eq!(
            validator().check(&record),
            Err(RejectionReason::ExcludedTerm("téléphone".to_string()))
        );
    }

    #[test]
    fn test_rejects_header_echo() {
        let record = rich("Secteur", "3%", "2025", "Le secteur agricole a progressé de 3%");
        assert_eq!(
            validator().check(&record),
            Err(RejectionReason::HeaderEcho("secteur".to_string()))
        );
    }

    #[test]
    fn test_header_echo_checked_before_vocabulary() {
        let record = legacy("Valeur", "abc", "rien");
        assert!(matches!(
            validator().check(&record),
            Err(RejectionReason::HeaderEcho(_))
        ));
    }

    #[test]
    fn test_rejects_without_economic_term() {
        let record = legacy("Météo", "25", "Il a fait 25 degrés à Dakar ce week-end");
        assert_eq!(validator().check(&record), Err(RejectionReason::NoEconomicTerm));
    }

    #[test]
    fn test_vocabulary_found_in_sentence_only() {
        let record = legacy("Ventes", "+1.5", "Les ventes soutiennent la consommation des ménages");
        assert!(validator().is_valid(&record));
    }

    #[test]
    fn test_rejects_non_numeric_value() {
        let record = legacy("Inflation", "en hausse", "L'inflation reste en hausse sur la période");
        assert_eq!(
            validator().check(&record),
            Err(RejectionReason::NonNumericValue("en hausse".to_string()))
        );
    }

    #[test]
    fn test_numeric_value_forms() {
        let v = validator();
        let sentence = "Le taux directeur a été relevé récemment";
        for value in ["-0,5", "+2", "3.25 points", "environ 7"] {
            assert!(v.is_valid(&legacy("Taux directeur", value, sentence)), "{}", value);
        }
    }

    #[test]
    fn test_rejects_excluded_term_in_sentence() {
        let record = legacy("Croissance", "2%", "Voir page 12 pour le détail de la croissance");
        assert_eq!(
            validator().check(&record),
            Err(RejectionReason::ExcludedTerm("page".to_string()))
        );
    }

    #[test]
    fn test_rejects_short_indicator() {
        let record = legacy("TX", "2%", "Le taux de change a baissé de 2% cette année");
        assert_eq!(
            validator().check(&record),
            Err(RejectionReason::TooShort {
                field: "indicator",
                len: 2,
                min: 3
            })
        );
    }

    #[test]
    fn test_rejects_short_sentence() {
        let record = legacy("Inflation", "2%", "Inflation à 2%");
        assert!(matches!(
            validator().check(&record),
            Err(RejectionReason::TooShort { field: "sentence", .. })
        ));
    }

    #[test]
    fn test_lengths_count_characters() {
        // "Coût" is 4 characters but 5 bytes
        let v = FieldValidator::new(
            &Lexicon::french(),
            ValidationRules {
                min_indicator_chars: 5,
                min_sentence_chars: 10,
            },
        )
        .unwrap();
        let record = legacy("Coût", "3%", "Coût de la construction");
        assert!(matches!(
            v.check(&record),
            Err(RejectionReason::TooShort { field: "indicator", len: 4, .. })
        ));
    }

    #[test]
    fn test_rejection_display() {
        let reason = RejectionReason::TooShort {
            field: "sentence",
            len: 12,
            min: 20,
        };
        assert_eq!(reason.to_string(), "sentence too short (12 < 20 chars)");
    }
}
