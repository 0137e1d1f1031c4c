//! Train store error types.

use crate::domain::TrainId;

/// Errors from loading or accessing the train store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading the seed file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not valid JSON for the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A train entry in the seed data is inconsistent
    #[error("invalid train {train}: {message}")]
    InvalidTrain { train: String, message: String },

    /// No train with this id
    #[error("train {0} not found")]
    TrainNotFound(TrainId),

    /// A writer panicked while holding the lock
    #[error("train data lock poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StoreError::InvalidTrain {
            train: "express_2000".into(),
            message: "duplicate seat 1A".into(),
        };
        assert_eq!(err.to_string(), "invalid train express_2000: duplicate seat 1A");

        let err = StoreError::Poisoned;
        assert_eq!(err.to_string(), "train data lock poisoned");

        let err = StoreError::Io {
            path: "trains.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "failed to read trains.json: no such file");
    }
}
