pub mod quality;

pub use quality::{QualityReport, assess_quality};
