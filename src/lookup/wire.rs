//! Wire shape of the `/drug-info` response.
//!
//! The service builds its payload from optional graph matches, so any field
//! may be `null`. Everything is decoded loosely here and validated into
//! [`DrugCard`]s before it leaves the client.

use serde::Deserialize;

use crate::drug::{DrugCard, Retailer, SearchResult, SideEffect};
use crate::lookup::error::LookupError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DrugInfoResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    brand: Option<WireDrug>,
    #[serde(default)]
    generics: Option<Vec<WireDrug>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDrug {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    price: Option<WirePrice>,
    #[serde(default)]
    quantity: Option<String>,
    #[serde(default)]
    dosage: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    manufacturer: Option<String>,
    #[serde(default)]
    conditions: Option<Vec<String>>,
    #[serde(default)]
    retailer: Option<WireRetailer>,
    #[serde(default)]
    side_effects: Option<Vec<WireSideEffect>>,
}

/// Prices arrive as numbers, but hand-loaded records sometimes carry strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WirePrice {
    Number(f64),
    Text(String),
}

#[derive(Debug, Default, Deserialize)]
struct WireRetailer {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireSideEffect {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    severity: Option<String>,
}

impl DrugInfoResponse {
    pub(crate) fn into_result(self) -> Result<SearchResult, LookupError> {
        // A blank `error` is not a failure.
        if let Some(message) = non_blank(self.error) {
            return Err(LookupError::Service { message });
        }

        let brand = self.brand.and_then(WireDrug::into_card);
        let generics = self
            .generics
            .unwrap_or_default()
            .into_iter()
            .filter_map(WireDrug::into_card)
            .collect();

        Ok(SearchResult { brand, generics })
    }
}

impl WireDrug {
    /// Rows without a name are the placeholder the service emits when a
    /// brand has no generics; they are dropped.
    fn into_card(self) -> Option<DrugCard> {
        let name = non_blank(self.name)?;
        Some(DrugCard {
            name,
            price: self.price.and_then(WirePrice::into_amount),
            quantity: self.quantity.unwrap_or_default(),
            dosage: non_blank(self.dosage),
            description: non_blank(self.description),
            source: self.source.unwrap_or_default(),
            company: non_blank(self.company).or_else(|| non_blank(self.manufacturer)),
            conditions: self.conditions.unwrap_or_default(),
            retailer: self.retailer.and_then(WireRetailer::into_retailer),
            side_effects: self
                .side_effects
                .unwrap_or_default()
                .into_iter()
                .filter_map(|effect| {
                    Some(SideEffect {
                        name: non_blank(effect.name)?,
                        severity: non_blank(effect.severity),
                    })
                })
                .collect(),
        })
    }
}

impl WirePrice {
    fn into_amount(self) -> Option<f64> {
        let amount = match self {
            WirePrice::Number(value) => value,
            WirePrice::Text(text) => text.trim().trim_start_matches('$').parse().ok()?,
        };
        (amount.is_finite() && amount >= 0.0).then_some(amount)
    }
}

impl WireRetailer {
    fn into_retailer(self) -> Option<Retailer> {
        match (non_blank(self.name), non_blank(self.url)) {
            (None, None) => None,
            (name, url) => Some(Retailer {
                name: name.unwrap_or_default(),
                url: url.unwrap_or_default(),
            }),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
