//! Drug pricing domain types.
//!
//! [`DrugCard`] is both the validated shape handed out by the lookup client
//! and the persisted shape of a favorite.

use serde::{Deserialize, Serialize};

/// Where a generic alternative can be bought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Retailer {
    pub name: String,
    pub url: String,
}

/// A known side effect of a drug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideEffect {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

/// A single priced medication, brand or generic.
///
/// `name` is the identity of a card: favorites, history and alerts all key on it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugCard {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default, alias = "manufacturer", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer: Option<Retailer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub side_effects: Vec<SideEffect>,
}

impl DrugCard {
    /// Price formatted for display, `N/A` when the service had none.
    pub fn display_price(&self) -> String {
        match self.price {
            Some(price) => format!("${:.2}", price),
            None => "N/A".to_string(),
        }
    }
}

/// Outcome of one successful lookup.
///
/// Brand and generics always come from the same query.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SearchResult {
    pub brand: Option<DrugCard>,
    pub generics: Vec<DrugCard>,
}

/// Title-case a raw search string.
///
/// Returns `None` for blank input, which callers treat as "do nothing".
pub fn normalize_query(raw: &str) -> Option<String> {
    let words: Vec<String> = raw
        .trim()
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(title_case_word)
        .collect();

    if words.is_empty() {
        return None;
    }
    Some(words.join(" "))
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_capitalizes() {
        assert_eq!(normalize_query("dramamine  "), Some("Dramamine".to_string()));
        assert_eq!(normalize_query("tylenol pm"), Some("Tylenol Pm".to_string()));
        assert_eq!(normalize_query("ADVIL"), Some("Advil".to_string()));
    }

    #[test]
    fn normalize_collapses_repeated_spaces() {
        assert_eq!(
            normalize_query("  aleve   liquid gels "),
            Some("Aleve Liquid Gels".to_string())
        );
    }

    #[test]
    fn normalize_rejects_blank_input() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("    "), None);
    }

    #[test]
    fn display_price_formats_or_falls_back() {
        let mut card = DrugCard {
            name: "Dramamine".to_string(),
            price: Some(7.5),
            ..Default::default()
        };
        assert_eq!(card.display_price(), "$7.50");
        card.price = None;
        assert_eq!(card.display_price(), "N/A");
    }

    #[test]
    fn manufacturer_is_accepted_as_company() {
        let card: DrugCard =
            serde_json::from_str(r#"{"name": "Advil", "manufacturer": "Pfizer"}"#).unwrap();
        assert_eq!(card.company.as_deref(), Some("Pfizer"));
        assert!(card.conditions.is_empty());
    }
}
