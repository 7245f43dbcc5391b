// Adapters layer: concrete sources and sinks for the extraction engine.

pub mod sink;
pub mod source;

pub use sink::{OutputFormat, WriterSink};
pub use source::{FileSource, StaticSource};
