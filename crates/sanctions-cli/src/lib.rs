//! CLI library components for the sanctions cleansing pipeline.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
