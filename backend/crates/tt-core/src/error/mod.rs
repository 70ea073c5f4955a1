use crate::TimerOwner;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{entity} {id} not found {location}")]
    NotFound {
        entity: &'static str,
        id: Uuid,
        location: ErrorLocation,
    },

    #[error("{owner} is not tracking time {location}")]
    NotTracking {
        owner: TimerOwner,
        location: ErrorLocation,
    },

    #[error("{owner} is already tracking time {location}")]
    AlreadyTracking {
        owner: TimerOwner,
        location: ErrorLocation,
    },

    #[error("{owner} has an active timer; stop it first {location}")]
    TrackingActive {
        owner: TimerOwner,
        location: ErrorLocation,
    },

    #[error("Transaction failed: {message} {location}")]
    TransactionFailure {
        message: String,
        retryable: bool,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid timer owner kind: {value} {location}")]
    InvalidOwnerKind {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        CoreError::NotFound {
            entity,
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_tracking(owner: TimerOwner) -> Self {
        CoreError::NotTracking {
            owner,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_tracking(owner: TimerOwner) -> Self {
        CoreError::AlreadyTracking {
            owner,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn tracking_active(owner: TimerOwner) -> Self {
        CoreError::TrackingActive {
            owner,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transaction<S: Into<String>>(message: S, retryable: bool) -> Self {
        CoreError::TransactionFailure {
            message: message.into(),
            retryable,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether a caller may retry the same operation unchanged
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CoreError::TransactionFailure {
                retryable: true,
                ..
            }
        )
    }
}

pub type Result<T> = StdResult<T, CoreError>;
