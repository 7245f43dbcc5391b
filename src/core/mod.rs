pub mod engine;
pub mod extractor;

pub use crate::domain::model::{CategoryMap, CategoryValue};
pub use crate::domain::ports::{CategorySource, TermSink};
pub use crate::utils::error::Result;
