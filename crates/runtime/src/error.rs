/// Runtime errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuntimeError {
    /// Definition or configuration loading failed at the document level
    #[error("content load failed: {0}")]
    LoadFailed(String),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
