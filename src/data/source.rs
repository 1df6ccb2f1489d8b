use std::fmt;

use async_trait::async_trait;

use crate::core::catalog::{Athlete, AttributeEntry, EntityId, Game, InjuryEntry};

/// Errors a data source can report. Each one surfaces as the "load failed"
/// state, never as an empty roster.
#[derive(Debug)]
pub enum DataError {
    /// The backing file could not be read.
    Io(std::io::Error),
    /// The records were present but malformed.
    Parse(String),
    /// The source is unreachable or did not answer in time.
    Unavailable(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "data I/O error: {e}"),
            DataError::Parse(msg) => write!(f, "data parse error: {msg}"),
            DataError::Unavailable(msg) => write!(f, "data source unavailable: {msg}"),
        }
    }
}

impl std::error::Error for DataError {}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Parse(e.to_string())
    }
}

/// Where roster records come from.
///
/// Every method may resolve later than it is called, so callers must not
/// assume the records are available synchronously.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Short name for logs and the status line.
    fn name(&self) -> &str;

    async fn list_athletes(&self) -> Result<Vec<Athlete>, DataError>;

    async fn list_games(&self) -> Result<Vec<Game>, DataError>;

    /// Measurements for one athlete. An athlete without any yields an empty list.
    async fn athlete_attributes(&self, athlete: &EntityId) -> Result<Vec<AttributeEntry>, DataError>;

    /// Injury categories for one athlete. An athlete without any yields an empty list.
    async fn athlete_injuries(&self, athlete: &EntityId) -> Result<Vec<InjuryEntry>, DataError>;
}
