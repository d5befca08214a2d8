//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use medwise::drug::{DrugCard, SearchResult};
use medwise::lookup::{DrugLookup, LookupError};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::Arc;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn drug(name: &str, price: f64) -> DrugCard {
    DrugCard {
        name: name.to_string(),
        price: Some(price),
        quantity: "30 tablets".to_string(),
        dosage: Some("50mg".to_string()),
        source: "GoodRx".to_string(),
        ..Default::default()
    }
}

pub fn found(brand: &str, generics: &[&str]) -> SearchResult {
    SearchResult {
        brand: Some(drug(brand, 12.99)),
        generics: generics.iter().map(|name| drug(name, 3.49)).collect(),
    }
}

/// Body the pricing service returns for a brand with generics.
pub fn drug_info_json(brand: &str, generics: &[&str]) -> String {
    let generics: Vec<serde_json::Value> = generics
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "price": 3.49,
                "quantity": "30 tablets",
                "dosage": "50mg",
                "description": "Generic equivalent",
                "source": "GoodRx",
                "retailer": {"name": "Walgreens", "url": "https://www.walgreens.com"}
            })
        })
        .collect();

    serde_json::json!({
        "brand": {
            "name": brand,
            "price": 12.99,
            "quantity": "30 tablets",
            "dosage": "50mg",
            "description": "Brand medication",
            "source": "GoodRx",
            "company": "Prestige Brands",
            "sideEffects": [{"name": "Drowsiness", "severity": "mild"}]
        },
        "generics": generics
    })
    .to_string()
}

enum Scripted {
    Found(SearchResult),
    ServiceError(String),
    Undecodable,
}

/// Scripted stand-in for the pricing service.
///
/// Answers are consumed in order; when the script runs out the brand is
/// echoed back from the query.
#[derive(Clone, Default)]
pub struct FakeLookup {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_found(self, result: SearchResult) -> Self {
        self.script.lock().push_back(Scripted::Found(result));
        self
    }

    pub fn then_error(self, message: &str) -> Self {
        self.script
            .lock()
            .push_back(Scripted::ServiceError(message.to_string()));
        self
    }

    pub fn then_undecodable(self) -> Self {
        self.script.lock().push_back(Scripted::Undecodable);
        self
    }

    /// Queries received so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().len()
    }
}

#[async_trait]
impl DrugLookup for FakeLookup {
    async fn lookup(&self, query: &str) -> Result<SearchResult, LookupError> {
        self.queries.lock().push(query.to_string());
        let next = self.script.lock().pop_front();
        match next {
            Some(Scripted::Found(result)) => Ok(result),
            Some(Scripted::ServiceError(message)) => Err(LookupError::Service { message }),
            Some(Scripted::Undecodable) => Err(LookupError::Decode {
                source: serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
            }),
            None => Ok(found(query, &[])),
        }
    }
}
