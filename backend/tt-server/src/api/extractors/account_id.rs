//! Axum extractor for account scoping

use crate::{ApiError, AppState};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

pub const ACCOUNT_ID_HEADER: &str = "X-Account-Id";

/// Extracts the account ID from the request
///
/// Uses the `X-Account-Id` header when present. Without the header the
/// configured default account applies. A header that is not a UUID is
/// rejected rather than silently mapped onto the default account.
pub struct AccountId(pub Uuid);

impl FromRequestParts<AppState> for AccountId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            if let Some(header_value) = parts.headers.get(ACCOUNT_ID_HEADER) {
                let raw = header_value.to_str().unwrap_or_default();
                return match Uuid::parse_str(raw.trim()) {
                    Ok(uuid) => {
                        log::debug!("Using account ID from {} header: {}", ACCOUNT_ID_HEADER, uuid);
                        Ok(AccountId(uuid))
                    }
                    Err(_) => {
                        log::warn!("Invalid UUID in {} header: {:?}", ACCOUNT_ID_HEADER, raw);
                        Err(ApiError::Validation {
                            message: format!("Invalid {} header", ACCOUNT_ID_HEADER),
                            field: Some(ACCOUNT_ID_HEADER.to_string()),
                            location: ErrorLocation::from(Location::caller()),
                        })
                    }
                };
            }

            let account_id = state.api_config.default_account_uuid();
            log::debug!("Using default account ID: {}", account_id);

            Ok(AccountId(account_id))
        }
    }
}
