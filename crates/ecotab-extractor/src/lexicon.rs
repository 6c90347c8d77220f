//! Keyword lists and temporal vocabulary used by the pipeline
//!
//! Every list the validator, scorer, period cascade and summary consult lives
//! here as plain data, so the pipeline can be pointed at another language or
//! domain by swapping the lexicon. Terms are matched as lowercase substrings;
//! see each consumer for the exact rule.

use crate::config::Language;
use serde::{Deserialize, Serialize};

/// Complete vocabulary for one document language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Column-header words the generation service tends to echo back as indicators
    pub header_echoes: Vec<String>,

    /// At least one must appear in indicator or sentence for a record to be kept
    pub economic_vocabulary: Vec<String>,

    /// Boilerplate markers that disqualify a record
    pub exclusions: Vec<String>,

    /// Scored +2 each when present
    pub priority_indicators: Vec<String>,

    /// Scored +1 each when present
    pub priority_sectors: Vec<String>,

    /// Value markers scored +1 (percent sign, "point")
    pub unit_markers: Vec<String>,

    /// Sentence markers of a recent, dated figure, scored +1
    pub recency_markers: Vec<String>,

    /// Sentence markers of contact details, scored -5
    pub contact_markers: Vec<String>,

    /// Summary category for indicators no rule matches
    pub fallback_category: String,

    /// Temporal vocabulary for the period cascade
    pub periods: PeriodVocabulary,

    /// Ordered summary category rules; first match wins
    pub categories: Vec<CategoryRule>,
}

/// Temporal vocabulary for period inference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodVocabulary {
    /// Ordinal phrases for Q1..Q4, e.g. `["premier trimestre"]`
    pub quarters: Vec<Vec<String>>,

    /// Code prefixes followed by the quarter digit, e.g. `t` for `T1 2025`
    pub quarter_codes: Vec<String>,

    /// Month names including unaccented spellings
    pub months: Vec<String>,

    /// First year accepted as a bare year
    pub first_year: u16,

    /// Last year accepted as a bare year
    pub last_year: u16,

    /// Standalone frequency words
    pub frequencies: Vec<String>,

    /// Returned when nothing matches
    pub unspecified: String,
}

/// Summary category assigned when the indicator contains one of `keywords`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Display label
    pub label: String,

    /// Lowercase indicator substrings
    pub keywords: Vec<String>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn category(label: &str, keywords: &[&str]) -> CategoryRule {
    CategoryRule {
        label: label.to_string(),
        keywords: words(keywords),
    }
}

impl Lexicon {
    /// Lexicon for the given document language
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::French => Self::french(),
            Language::English => Self::english(),
        }
    }

    /// French economic reports (central bank bulletins, conjuncture notes)
    pub fn french() -> Self {
        Self {
            header_echoes: words(&["secteur", "indicateur", "terme", "valeur"]),
            economic_vocabulary: words(&[
                "pib", "inflation", "croissance", "taux", "export", "import", "indice",
                "bourse", "change", "monétaire", "budgétaire", "déficit", "excédent",
                "investissement", "consommation", "agriculture", "industrie", "service",
                "manufacture", "construction",
            ]),
            exclusions: words(&["téléphone", "adresse", "email", "contact", "page", "référence"]),
            priority_indicators: words(&[
                "pib", "croissance", "inflation", "taux directeur", "export", "import",
                "indice", "change", "bourse", "déficit", "masse monétaire",
            ]),
            priority_sectors: words(&[
                "agriculture", "industrie", "service", "manufacture", "construction",
                "extractive", "hébergement", "bancaire", "financier",
            ]),
            unit_markers: words(&["%", "point"]),
            recency_markers: words(&["trimestre", "annuel", "mensuel", "2024", "2025"]),
            contact_markers: words(&["téléphone", "contact", "adresse", "email"]),
            fallback_category: "Autres".to_string(),
            periods: PeriodVocabulary {
                quarters: vec![
                    words(&["premier trimestre"]),
                    words(&["deuxième trimestre", "deuxieme trimestre"]),
                    words(&["troisième trimestre", "troisieme trimestre"]),
                    words(&["quatrième trimestre", "quatrieme trimestre"]),
                ],
                quarter_codes: words(&["t", "q"]),
                months: words(&[
                    "janvier", "février", "fevrier", "mars", "avril", "mai", "juin",
                    "juillet", "août", "aout", "septembre", "octobre", "novembre",
                    "décembre", "decembre",
                ]),
                first_year: 2020,
                last_year: 2039,
                frequencies: words(&["annuel", "mensuel", "trimestriel", "semestriel"]),
                unspecified: "Non spécifiée".to_string(),
            },
            categories: vec![
                category("Croissance/PIB", &["pib", "croissance"]),
                category("Inflation/Prix", &["inflation", "prix"]),
                category("Taux d'intérêt", &["taux"]),
                category("Commerce extérieur", &["export", "import"]),
                category("Marchés financiers", &["indice", "bourse"]),
                category("Secteurs économiques", &["agriculture", "industrie", "service"]),
            ],
        }
    }

    /// English-language reports
    pub fn english() -> Self {
        Self {
            header_echoes: words(&["sector", "indicator", "term", "value"]),
            economic_vocabulary: words(&[
                "gdp", "inflation", "growth", "rate", "export", "import", "index",
                "stock", "exchange", "monetary", "budget", "deficit", "surplus",
                "investment", "consumption", "agricultur", "industr", "service",
                "manufactur", "construction",
            ]),
            exclusions: words(&["phone", "address", "email", "contact", "page", "reference"]),
            priority_indicators: words(&[
                "gdp", "growth", "inflation", "policy rate", "export", "import", "index",
                "exchange rate", "stock market", "deficit", "money supply",
            ]),
            priority_sectors: words(&[
                "agricultur", "industr", "service", "manufactur", "construction",
                "extractive", "hospitality", "banking", "financial",
            ]),
            unit_markers: words(&["%", "point"]),
            recency_markers: words(&["quarter", "annual", "monthly", "2024", "2025"]),
            contact_markers: words(&["phone", "contact", "address", "email"]),
            fallback_category: "Other".to_string(),
            periods: PeriodVocabulary {
                quarters: vec![
                    words(&["first quarter"]),
                    words(&["second quarter"]),
                    words(&["third quarter"]),
                    words(&["fourth quarter"]),
                ],
                quarter_codes: words(&["q"]),
                months: words(&[
                    "january", "february", "march", "april", "may", "june", "july",
                    "august", "september", "october", "november", "december",
                ]),
                first_year: 2020,
                last_year: 2039,
                frequencies: words(&["annual", "monthly", "quarterly", "semi-annual"]),
                unspecified: "unspecified".to_string(),
            },
            categories: vec![
                category("Growth/GDP", &["gdp", "growth"]),
                category("Inflation/Prices", &["inflation", "price"]),
                category("Interest rates", &["rate"]),
                category("Foreign trade", &["export", "import"]),
                category("Financial markets", &["index", "stock"]),
                category("Economic sectors", &["agricultur", "industr", "service"]),
            ],
        }
    }

    /// Load a custom lexicon from TOML
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse lexicon TOML: {}", e))
    }

    /// Serialize the lexicon to TOML
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize lexicon: {}", e))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::french()
    }
}

/// Lowercase every term so matching against lowercased text is consistent
pub(crate) fn lowered(terms: &[String]) -> Vec<String> {
    terms.iter().map(|t| t.to_lowercase()).collect()
}
