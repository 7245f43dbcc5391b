use crate::core::extractor::extract_terms;
use crate::core::{CategorySource, TermSink};
use crate::utils::error::Result;

pub struct TermEngine<S: CategorySource, K: TermSink> {
    source: S,
    sink: K,
}

impl<S: CategorySource, K: TermSink> TermEngine<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }

    /// Load, extract, then emit exactly once.
    pub fn run(&mut self) -> Result<Vec<String>> {
        tracing::info!("Loading categories...");
        let categories = self.source.load()?;
        tracing::info!("Loaded {} categories", categories.len());

        let terms = extract_terms(&categories);
        tracing::info!("Extracted {} terms", terms.len());

        self.sink.emit(&terms)?;
        tracing::debug!("Terms emitted");

        Ok(terms)
    }

    pub fn into_sink(self) -> K {
        self.sink
    }
}
