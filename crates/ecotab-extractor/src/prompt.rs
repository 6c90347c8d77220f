//! Prompt construction for indicator extraction

use crate::config::Language;

/// Builds the instruction prompt wrapping one text block
pub struct PromptBuilder {
    text: String,
    language: Language,
}

impl PromptBuilder {
    /// Create a new prompt builder for a block of text
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
        }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let (instructions, text_header, reminder) = match self.language {
            Language::French => (FRENCH_INSTRUCTIONS, "Texte à analyser :", FRENCH_REMINDER),
            Language::English => (ENGLISH_INSTRUCTIONS, "Text to analyze:", ENGLISH_REMINDER),
        };

        let mut prompt = String::with_capacity(instructions.len() + self.text.len() + 256);
        prompt.push_str(instructions);
        prompt.push_str("\n\n");
        prompt.push_str(text_header);
        prompt.push_str("\n---\n");
        prompt.push_str(&self.text);
        prompt.push_str("\n---\n\n");
        prompt.push_str(reminder);
        prompt
    }
}

const FRENCH_INSTRUCTIONS: &str = r#"Vous relevez les indicateurs économiques chiffrés présents dans un rapport.

À RETENIR :
- PIB et croissance, avec leur période
- Inflation (globale, sous-jacente, par poste)
- Taux directeur et conditions monétaires
- Exportations et importations
- Indices boursiers
- Taux de change
- Contributions sectorielles (agriculture, industrie, services, construction)
- Masse monétaire et crédit
- Déficit ou excédent budgétaire

À IGNORER :
- Téléphones, adresses, courriels, contacts
- Années seules sans indicateur associé
- Numéros de page et références documentaires
- Tout chiffre sans lien économique explicite

CONSIGNES :
1. Nommez le secteur ou l'indicateur précisément.
2. Donnez la période (T1 2025, premier trimestre 2025, 2024...).
3. Recopiez la valeur telle qu'elle figure dans le texte.
4. Citez la phrase complète d'où provient la valeur.

FORMAT, une ligne par indicateur :
Indicateur|Valeur|Période|Phrase

EXEMPLES :
PIB national|4,2%|T1 2025|Le PIB national aurait progressé de 4,2% au premier trimestre 2025
Inflation générale|2,2%|T1 2025|L'inflation aurait atteint 2,2% au premier trimestre 2025
Agriculture|3,1%|T1 2025|Les activités agricoles ont progressé de 3,1% au premier trimestre 2025"#;

const FRENCH_REMINDER: &str =
    "Répondez uniquement par des lignes au format demandé, sans titre ni commentaire.";

const ENGLISH_INSTRUCTIONS: &str = r#"You are listing the quantified economic indicators found in a report.

KEEP:
- GDP and growth, with their period
- Inflation (headline, core, by component)
- Policy rate and monetary conditions
- Exports and imports
- Stock market indices
- Exchange rates
- Sector contributions (agriculture, industry, services, construction)
- Money supply and credit
- Budget deficit or surplus

IGNORE:
- Phone numbers, addresses, emails, contacts
- Bare years with no indicator
- Page numbers and document references
- Any figure without an explicit economic meaning

RULES:
1. Name the sector or indicator precisely.
2. Give the period (Q1 2025, first quarter 2025, 2024...).
3. Copy the value exactly as written.
4. Quote the full sentence the value comes from.

FORMAT, one line per indicator:
Indicator|Value|Period|Sentence

EXAMPLES:
National GDP|4.2%|Q1 2025|National GDP is estimated to have grown 4.2% in the first quarter 2025
Headline inflation|2.2%|Q1 2025|Inflation reached 2.2% in the first quarter 2025
Agriculture|3.1%|Q1 2025|Agricultural output rose 3.1% in the first quarter 2025"#;

const ENGLISH_REMINDER: &str =
    "Answer only with lines in the requested format, with no heading or commentary.";
