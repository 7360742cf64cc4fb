use std::fmt;

#[derive(Debug)]
pub enum ContentError {
    /// An episode was reached twice while walking the parent graph.
    CycleDetected { episode_id: i64 },
    Store(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::CycleDetected { episode_id } => {
                write!(f, "Cycle detected in episode tree at episode {}", episode_id)
            }
            ContentError::Store(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for ContentError {}

impl From<sqlx::Error> for ContentError {
    fn from(e: sqlx::Error) -> Self {
        ContentError::Store(e.to_string())
    }
}

pub type ContentResult<T> = Result<T, ContentError>;
