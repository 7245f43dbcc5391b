use crate::domain::model::CategoryMap;
use crate::utils::error::Result;

/// Where the category map comes from.
pub trait CategorySource {
    fn load(&self) -> Result<CategoryMap>;
}

impl<T: CategorySource + ?Sized> CategorySource for Box<T> {
    fn load(&self) -> Result<CategoryMap> {
        (**self).load()
    }
}

/// Receives the computed terms. Called once per run, after extraction.
pub trait TermSink {
    fn emit(&mut self, terms: &[String]) -> Result<()>;
}

impl<T: TermSink + ?Sized> TermSink for &mut T {
    fn emit(&mut self, terms: &[String]) -> Result<()> {
        (**self).emit(terms)
    }
}
