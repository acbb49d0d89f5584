use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/create-rooms", post(handlers::room::create_room))
        .route("/api/rooms/:id", get(handlers::room::get_room))
}
