pub mod canonical;
pub mod record;

pub use canonical::CanonicalColumn;
pub use record::{CellValue, Dataset, Record};
