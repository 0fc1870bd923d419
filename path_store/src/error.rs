use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message} (entry {index})")]
pub struct CatalogError {
    pub code: &'static str,
    pub message: String,
    /// Position of the offending entry in the catalog array.
    pub index: usize,
    pub opening: Option<String>,
}

impl CatalogError {
    pub(crate) fn new(code: &'static str, message: impl Into<String>, index: usize) -> Self {
        Self {
            code,
            message: message.into(),
            index,
            opening: None,
        }
    }

    pub fn with_opening(mut self, opening: impl Into<String>) -> Self {
        self.opening = Some(opening.into());
        self
    }
}
