#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    #[error("invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("translation error: {0}")]
    Translation(String),
    #[error("failed to serialize document: {0}")]
    Serialization(String),
}

pub type MapperResult<T> = std::result::Result<T, MapperError>;
