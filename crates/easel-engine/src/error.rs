use thiserror::Error;

/// Contract violations raised synchronously by scene operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// A value could not be used where a specific kind was required
    /// (e.g. a fill string that is not a recognized color).
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// `collision` was asked about a pair of shapes it has no rule for.
    #[error("collision between {this} and {other} is not supported")]
    UnsupportedOperand {
        this: &'static str,
        other: &'static str,
    },
}

impl SceneError {
    pub(crate) fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }
}
