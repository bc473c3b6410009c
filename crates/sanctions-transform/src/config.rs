//! Normalization configuration.
//!
//! Every "does this column exist" decision goes through these explicit
//! lists rather than ambient presence checks, so a caller can adapt the
//! pipeline to a differently-labelled export without touching transform
//! code.

use serde::{Deserialize, Serialize};

/// Source column names consumed by the field normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Name-part columns merged into Full Name, in merge order.
    pub name_columns: Vec<String>,
    /// Column holding the raw date of birth.
    pub dob_column: String,
    /// Candidate columns scanned for country mentions, in scan order.
    pub country_columns: Vec<String>,
    /// Address-part columns merged into Full Address, in positional order.
    pub address_columns: Vec<String>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            name_columns: (1..=6).map(|idx| format!("Name {idx}")).collect(),
            dob_column: "DOB".to_string(),
            country_columns: vec![
                "Country of Birth".to_string(),
                "Nationality".to_string(),
                "Country".to_string(),
            ],
            address_columns: (1..=6).map(|idx| format!("Address {idx}")).collect(),
        }
    }
}
