use std::ops::{Deref, DerefMut};

use axum::{extract::FromRequestParts, http::request::Parts};
use tillpoint_core::AppError;
use tillpoint_db::{DbError, Session};

use crate::state::AppState;

/// Extractor that checks a database session out for the current request.
///
/// The session lives exactly as long as the handler future and goes back to
/// the pool when the handler returns or fails.
#[derive(Debug)]
pub struct DbSession(pub Session);

impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .sessions
            .acquire()
            .await
            .map(DbSession)
            .map_err(session_error)
    }
}

fn session_error(err: DbError) -> AppError {
    if err.is_connectivity() {
        AppError::service_unavailable(err)
    } else {
        AppError::database(err)
    }
}

impl Deref for DbSession {
    type Target = Session;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
