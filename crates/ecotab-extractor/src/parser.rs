//! Parse generation-service output into indicator records

use crate::period::PeriodCascade;
use crate::validator::FieldValidator;
use ecotab_domain::{CandidateRecord, PeriodSource, ValidatedRecord};
use tracing::debug;

/// Parse one response line into a candidate record
///
/// Lines without `|` are not records. Surrounding pipes and whitespace are
/// stripped before splitting. Four or more fields give a rich record (extras
/// ignored), exactly three give a legacy record, anything else is dropped.
pub fn parse_line(line: &str) -> Option<CandidateRecord> {
    let line = line.trim();
    if !line.contains('|') {
        return None;
    }

    let stripped = line.trim_matches(|c: char| c == '|' || c.is_whitespace());
    let fields: Vec<&str> = stripped.split('|').map(str::trim).collect();

    match fields.as_slice() {
        [indicator, value, period, sentence, ..] => Some(CandidateRecord::Rich {
            indicator: indicator.to_string(),
            value: value.to_string(),
            period: period.to_string(),
            sentence: sentence.to_string(),
        }),
        [indicator, value, sentence] => Some(CandidateRecord::Legacy {
            indicator: indicator.to_string(),
            value: value.to_string(),
            sentence: sentence.to_string(),
        }),
        _ => None,
    }
}

/// Parse every line of a response into unvalidated candidates
pub fn parse_candidates(response: &str) -> Vec<CandidateRecord> {
    response.lines().filter_map(parse_line).collect()
}

/// Records accepted from one response, plus what was dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Validated records in line order
    pub records: Vec<ValidatedRecord>,

    /// Non-blank lines that were not records
    pub lines_skipped: usize,

    /// Candidates rejected by field validation
    pub candidates_rejected: usize,
}

/// Line parser with inline validation and period inference
pub struct ResponseParser {
    validator: FieldValidator,
    periods: PeriodCascade,
}

impl ResponseParser {
    /// Create a parser from a validator and period cascade
    pub fn new(validator: FieldValidator, periods: PeriodCascade) -> Self {
        Self { validator, periods }
    }

    /// Parse a full response
    pub fn parse(&self, response: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();

        for line in response.lines().filter(|l| !l.trim().is_empty()) {
            let Some(candidate) = parse_line(line) else {
                debug!("Skipping non-record line: {}", line.trim());
                outcome.lines_skipped += 1;
                continue;
            };

            if let Err(reason) = self.validator.check(&candidate) {
                debug!("Rejected '{}': {}", candidate.indicator(), reason);
                outcome.candidates_rejected += 1;
                continue;
            }

            outcome.records.push(self.complete(candidate));
        }

        outcome
    }

    /// Fill in the period, inferring it when the line stated none
    fn complete(&self, candidate: CandidateRecord) -> ValidatedRecord {
        let schema = candidate.schema();
        let (period, source) = match candidate.explicit_period() {
            Some(period) => (period.to_string(), PeriodSource::Explicit),
            None => match self.periods.classify(candidate.sentence()) {
                Some(found) => (found.period, PeriodSource::Inferred),
                None => (self.periods.unspecified().to_string(), PeriodSource::Unspecified),
            },
        };

        let (indicator, value, sentence) = match candidate {
            CandidateRecord::Rich {
                indicator,
                value,
                sentence,
                ..
            }
            | CandidateRecord::Legacy {
                indicator,
                value,
                sentence,
            } => (indicator, value, sentence),
        };

        ValidatedRecord::new(indicator, value, period, sentence).with_origin(schema, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::validator::ValidationRules;
    use ecotab_domain::RecordSchema;

    fn parser() -> ResponseParser {
        let lexicon = Lexicon::french();
        ResponseParser::new(
            FieldValidator::new(&lexicon, ValidationRules::default()).unwrap(),
            PeriodCascade::new(&lexicon.periods).unwrap(),
        )
    }

    #[test]
    fn test_parse_rich_line() {
        let outcome = parser().parse(
            "PIB national|4,2%|Q1 2025|L'économie nationale aurait enregistré une progression de 4,2% du PIB au premier trimestre 2025",
        );
        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.indicator, "PIB national");
        assert_eq!(record.value, "4,2%");
        assert_eq!(record.period, "Q1 2025");
        assert_eq!(record.schema, RecordSchema::Rich);
        assert_eq!(record.period_source, PeriodSource::Explicit);
    }

    #[test]
    fn test_parse_legacy_line_infers_period() {
        let outcome = parser().parse(
            "Agriculture|3,1%|Les activités agricoles ont progressé de 3,1% au premier trimestre 2025",
        );
        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.period, "premier trimestre 2025");
        assert_eq!(record.schema, RecordSchema::Legacy);
        assert_eq!(record.period_source, PeriodSource::Inferred);
    }

    #[test]
    fn test_blank_rich_period_is_kept() {
        let outcome = parser().parse(
            "Inflation|2,2%||L'inflation aurait atteint 2,2% en mars 2025 selon l'institut",
        );
        assert_eq!(outcome.records[0].period, "");
        assert_eq!(outcome.records[0].period_source, PeriodSource::Explicit);
    }

    #[test]
    fn test_unmatched_period_uses_sentinel() {
        let outcome = parser().parse("Inflation|2,2%|L'inflation aurait atteint 2,2% selon l'institut");
        assert_eq!(outcome.records[0].period, "Non spécifiée");
        assert_eq!(outcome.records[0].period_source, PeriodSource::Unspecified);
    }

    #[test]
    fn test_surrounding_pipes_and_extra_fields() {
        let line = "| Taux directeur | 2,75% | 2025 | Le taux directeur a été abaissé à 2,75% en 2025 | note |";
        let candidate = parse_line(line).unwrap();
        assert_eq!(
            candidate,
            CandidateRecord::Rich {
                indicator: "Taux directeur".to_string(),
                value: "2,75%".to_string(),
                period: "2025".to_string(),
                sentence: "Le taux directeur a été abaissé à 2,75% en 2025".to_string(),
            }
        );
    }

    #[test]
    fn test_short_lines_discarded() {
        assert!(parse_line("PIB|4%").is_none());
        assert!(parse_line("pas de séparateur").is_none());
        assert!(parse_line("   ").is_none());
    }

    #[test]
    fn test_counts_skipped_and_rejected() {
        let response = "Voici les indicateurs :\n\
            \n\
            Indicateur|Valeur|Période|Phrase\n\
            PIB|4%\n\
            Croissance|2%|2024|Une croissance de 2% en 2024 pour l'économie\n";
        let outcome = parser().parse(response);
        assert_eq!(outcome.lines_skipped, 2);
        assert_eq!(outcome.candidates_rejected, 1);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].indicator, "Croissance");
    }

    #[test]
    fn test_parse_candidates_keeps_line_order() {
        let candidates = parse_candidates("a|1|b|c\nignored\nd|2|e");
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].schema(), RecordSchema::Rich);
        assert_eq!(candidates[1].schema(), RecordSchema::Legacy);
        assert_eq!(candidates[1].indicator(), "d");
    }
}
