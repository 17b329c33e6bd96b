use crate::modules::time_entries::adapters::outbound::time_entry_store::StoreError;
use crate::modules::time_entries::core::decision::DecideError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Persistence(StoreError),
}

impl From<DecideError> for ApplicationError {
    fn from(reason: DecideError) -> Self {
        if reason.is_not_found() {
            ApplicationError::NotFound(reason.to_string())
        } else {
            ApplicationError::Validation(reason.to_string())
        }
    }
}

impl From<StoreError> for ApplicationError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Missing { id } => {
                ApplicationError::NotFound(DecideError::EntryNotFound(id).to_string())
            }
            other => ApplicationError::Persistence(other),
        }
    }
}
