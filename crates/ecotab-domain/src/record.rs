//! Record module - candidate, validated and scored indicator records

/// Line schema a candidate was parsed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordSchema {
    /// `indicator|value|period|sentence`
    Rich,

    /// `indicator|value|sentence` - period must be inferred
    Legacy,
}

impl RecordSchema {
    /// Get the schema name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordSchema::Rich => "rich",
            RecordSchema::Legacy => "legacy",
        }
    }
}

/// An unvalidated indicator guess parsed from one response line
///
/// The two variants carry the historical line schemas. Only the rich schema
/// states a period; legacy records get theirs from period inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateRecord {
    /// Four-field record with an explicit period
    Rich {
        /// Sector or indicator name
        indicator: String,
        /// Value as emitted, e.g. `4,2%`
        value: String,
        /// Period as emitted, e.g. `Q1 2025`
        period: String,
        /// Source sentence the value was read from
        sentence: String,
    },

    /// Three-field record without a period
    Legacy {
        /// Sector or indicator name
        indicator: String,
        /// Value as emitted
        value: String,
        /// Source sentence the value was read from
        sentence: String,
    },
}

impl CandidateRecord {
    /// Sector or indicator name
    pub fn indicator(&self) -> &str {
        match self {
            CandidateRecord::Rich { indicator, .. } | CandidateRecord::Legacy { indicator, .. } => {
                indicator
            }
        }
    }

    /// Extracted value
    pub fn value(&self) -> &str {
        match self {
            CandidateRecord::Rich { value, .. } | CandidateRecord::Legacy { value, .. } => value,
        }
    }

    /// Source sentence
    pub fn sentence(&self) -> &str {
        match self {
            CandidateRecord::Rich { sentence, .. } | CandidateRecord::Legacy { sentence, .. } => {
                sentence
            }
        }
    }

    /// The period as emitted, even when blank; `None` for the legacy schema
    pub fn explicit_period(&self) -> Option<&str> {
        match self {
            CandidateRecord::Rich { period, .. } => Some(period),
            _ => None,
        }
    }

    /// Schema this record was parsed from
    pub fn schema(&self) -> RecordSchema {
        match self {
            CandidateRecord::Rich { .. } => RecordSchema::Rich,
            CandidateRecord::Legacy { .. } => RecordSchema::Legacy,
        }
    }
}

/// Where a validated record's period came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodSource {
    /// Stated by the generation service
    Explicit,

    /// Derived from the sentence by the period cascade
    Inferred,

    /// Nothing matched; the period holds the sentinel value
    Unspecified,
}

/// A candidate that passed field validation and has a period filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    /// Sector or indicator name
    pub indicator: String,

    /// Value as emitted
    pub value: String,

    /// Explicit, inferred or sentinel period
    pub period: String,

    /// Source sentence
    pub sentence: String,

    /// Schema of the originating line
    pub schema: RecordSchema,

    /// Provenance of `period`
    pub period_source: PeriodSource,
}

impl ValidatedRecord {
    /// Create a validated record from its parts
    pub fn new(
        indicator: impl Into<String>,
        value: impl Into<String>,
        period: impl Into<String>,
        sentence: impl Into<String>,
    ) -> Self {
        Self {
            indicator: indicator.into(),
            value: value.into(),
            period: period.into(),
            sentence: sentence.into(),
            schema: RecordSchema::Rich,
            period_source: PeriodSource::Explicit,
        }
    }

    /// Set the originating schema and period provenance
    pub fn with_origin(mut self, schema: RecordSchema, period_source: PeriodSource) -> Self {
        self.schema = schema;
        self.period_source = period_source;
        self
    }

    /// Deduplication key: exact `(indicator, value)`
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.indicator, &self.value)
    }
}

/// A validated record annotated with its relevance score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRecord {
    /// The scored record
    pub record: ValidatedRecord,

    /// Heuristic relevance score (may be negative)
    pub score: i32,
}
