use thiserror::Error;

/// Problems found while reading the host's attribute bag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing attribute `{0}`")]
    MissingAttribute(&'static str),
    #[error("attribute `{field}` is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Failures reported by a chart backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("chart container `{0}` not found")]
    ContainerNotFound(String),
    #[error("series {0} does not exist")]
    UnknownSeries(usize),
    #[error("charting library error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("chart error: {0}")]
    Chart(#[from] ChartError),
    #[error("widget has no chart yet; mount it first")]
    NotAttached,
    #[error("widget is already attached to a chart")]
    AlreadyAttached,
    #[error("config error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
pub type ChartResult<T> = Result<T, ChartError>;
