#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CoreErrorKind {
    InvalidInput,
    StorageFailure,
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind:?}: {message}")]
pub struct CoreError {
    pub kind: CoreErrorKind,
    pub message: String,
}

impl CoreError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            kind: CoreErrorKind::InvalidInput,
            message: message.into(),
        }
    }
}
