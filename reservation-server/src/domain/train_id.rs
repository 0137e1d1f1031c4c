//! Train identifier type.

use std::fmt;

/// Error returned when constructing an invalid train id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid train id: {reason}")]
pub struct InvalidTrainId {
    reason: &'static str,
}

/// An opaque train identifier (e.g. `"express_2000"`).
///
/// Train ids carry no structure; the only validation is that they are
/// non-empty. Equality is by underlying value.
///
/// # Examples
///
/// ```
/// use reservation_server::domain::TrainId;
///
/// let id = TrainId::new("express_2000").unwrap();
/// assert_eq!(id.as_str(), "express_2000");
///
/// assert!(TrainId::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrainId(String);

impl TrainId {
    /// Create a train id from anything string-like.
    ///
    /// Returns an error if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidTrainId> {
        let id = id.into();
        if id.is_empty() {
            return Err(InvalidTrainId {
                reason: "train id cannot be empty",
            });
        }
        Ok(TrainId(id))
    }

    /// Returns the train id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainId({})", self.0)
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty string is a valid train id and roundtrips
        #[test]
        fn nonempty_roundtrips(s in ".+") {
            let id = TrainId::new(s.clone()).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }
    }
}
