//! Cleansing transforms over the sanctions record model.
//!
//! The pipeline is a fixed, acyclic sequence: dedupe raw rows, normalize
//! each retained row, project onto the canonical columns. Every stage is
//! deterministic and produces a new dataset; field-level failures degrade
//! to the missing sentinel instead of discarding records.

pub mod config;
pub mod dedupe;
pub mod normalize;
pub mod project;

pub use config::NormalizeConfig;
pub use dedupe::dedupe_records;
pub use normalize::{extract_countries, merge_address, merge_name, normalize_dataset, normalize_dob};
pub use project::{Projection, project_canonical};
