//! Command-line interface.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigError};
use crate::drug::{normalize_query, DrugCard, SearchResult};
use crate::lookup::{DrugLookup, HttpLookupClient};

#[derive(Debug, Parser)]
#[command(
    name = "medwise",
    version,
    about = "Find affordable generic alternatives to brand-name drugs"
)]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the pricing service base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Store favorites and alerts in this directory
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a single brand drug and print it with its generic alternatives
    Lookup {
        /// Brand drug name, e.g. `dramamine` or `tylenol pm`
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.lookup.base_url = base_url.clone();
        }
        if let Some(data_dir) = &self.data_dir {
            config.storage.data_dir = Some(data_dir.clone());
        }
    }
}

/// Run one lookup and render it for stdout.
pub async fn run_lookup(config: &Config, name: &[String], json: bool) -> anyhow::Result<String> {
    let query = normalize_query(&name.join(" ")).ok_or_else(|| anyhow!("Drug name is empty"))?;
    let client = HttpLookupClient::new(&config.lookup).context("Failed to build HTTP client")?;

    let result = client
        .lookup(&query)
        .await
        .map_err(|err| anyhow!(err.user_message()))?;

    if json {
        return serde_json::to_string_pretty(&result).context("Failed to encode result");
    }
    Ok(format_result(&result))
}

/// Plain-text rendering of a lookup result.
pub fn format_result(result: &SearchResult) -> String {
    let mut out = String::new();
    match &result.brand {
        Some(brand) => {
            out.push_str("Brand Drug:\n");
            write_card(&mut out, brand);
        }
        None => out.push_str("No data found for that drug.\n"),
    }

    if !result.generics.is_empty() {
        out.push_str("\nGeneric Alternatives:\n");
        for generic in &result.generics {
            write_card(&mut out, generic);
        }
    }
    out
}

fn write_card(out: &mut String, card: &DrugCard) {
    let _ = writeln!(out, "  {} - {} from {}", card.name, card.display_price(), card.source);
    if let Some(dosage) = &card.dosage {
        let _ = writeln!(out, "    {}, {}", dosage, card.quantity);
    }
    if let Some(company) = &card.company {
        let _ = writeln!(out, "    Manufacturer: {}", company);
    }
    if let Some(retailer) = &card.retailer {
        let _ = writeln!(out, "    Buy at {} ({})", retailer.name, retailer.url);
    }
}
