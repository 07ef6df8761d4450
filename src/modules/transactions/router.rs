use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_transaction, get_transaction};

pub fn init_transactions_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_transaction))
        .route("/{id}", get(get_transaction))
}
