use thiserror::Error;

pub type Result<T> = std::result::Result<T, PolyError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// No lexical form matched at byte offset `at`.
    #[error("Malformed Polynomial")]
    Malformed { at: usize },
    #[error("Expected: {expected}")]
    Syntax { expected: &'static str },
}

impl PolyError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, PolyError::Malformed { .. })
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, PolyError::Syntax { .. })
    }
}
