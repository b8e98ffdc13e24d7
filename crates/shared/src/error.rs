use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Transport,
    Status,
    Decode,
    Validation,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    Transport(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid catalog payload: {0}")]
    Decode(String),
    #[error("items per page must be greater than zero, got {0}")]
    InvalidPageSize(usize),
    #[error("unknown sort field '{0}'")]
    UnknownSortField(String),
    #[error("unknown sort direction '{0}'")]
    UnknownSortDirection(String),
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Transport(_) => ErrorCode::Transport,
            Self::Status(_) => ErrorCode::Status,
            Self::Decode(_) => ErrorCode::Decode,
            Self::InvalidPageSize(_) | Self::UnknownSortField(_) | Self::UnknownSortDirection(_) => {
                ErrorCode::Validation
            }
        }
    }
}
