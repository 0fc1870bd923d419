use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutErrorKind {
    Grouping,
    Geometry,
    Unknown,
}

impl LayoutErrorKind {
    pub(crate) fn from_code(code: &'static str) -> Self {
        match code {
            "E1001" | "E1002" => Self::Grouping,
            "E1101" | "E1102" | "E1103" => Self::Geometry,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{code}: {message}")]
pub struct LayoutError {
    pub code: &'static str,
    pub kind: LayoutErrorKind,
    pub message: String,
    pub field: Option<&'static str>,
}

impl LayoutError {
    pub(crate) fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            kind: LayoutErrorKind::from_code(code),
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }
}
