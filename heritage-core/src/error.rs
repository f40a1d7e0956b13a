/// Errors raised while loading or validating page data.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HeritageError {
    #[error("input is missing the minimum required data")]
    MissingData,
    #[error("could not read data: {0}")]
    Parse(String),
    #[error("timeline key is not a four-digit year: {0:?}")]
    InvalidYear(String),
    #[error("timeline entry for {0} has no text")]
    EmptyEntry(String),
}
