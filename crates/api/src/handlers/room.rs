//! # Room Handlers
//!
//! Room creation turns the submitted weekly availability template into dated
//! slots for the configured horizon and stores the room and every slot in one
//! transaction. Any invalid weekday or time label rejects the whole request.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use chrono::Local;
use roombook_core::{
    errors::BookingError,
    expander,
    models::room::{CreateRoomRequest, CreateRoomResponse, GetRoomResponse},
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    ApiState,
    middleware::{auth, error_handling::AppError},
};

/// Creates a room and its generated availability slots
///
/// # Endpoint
///
/// ```text
/// POST /api/create-rooms
/// ```
///
/// # Steps
///
/// 1. Authenticate the caller and require the `ADMIN` role
/// 2. Parse and validate the room fields
/// 3. Expand the availability template from today's local date
/// 4. Persist the room with all slots
///
/// The body is parsed only after authentication, so anonymous callers get
/// `401` regardless of what they send.
///
/// # Errors
///
/// * `BookingError::Authentication` / `BookingError::Authorization` - caller rejected
/// * `BookingError::Validation` - malformed body or invalid room fields
/// * `BookingError::Expansion` - unknown weekday or malformed time label
/// * `BookingError::Database` - persistence failed
#[axum::debug_handler]
pub async fn create_room(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateRoomResponse>), AppError> {
    let user = auth::require_admin(state.users.as_ref(), &headers).await?;

    let payload: CreateRoomRequest = serde_json::from_slice(&body)
        .map_err(|e| BookingError::Validation(e.to_string()))?;
    payload.validate()?;

    let today = Local::now().date_naive();
    let slots = expander::expand(
        &payload.availability,
        today,
        &payload.timezone,
        &state.expansion,
    )?;
    let slots_created = slots.len();

    let db_room = state
        .rooms
        .create_room_with_slots(payload.new_room(), user.id, slots)
        .await?;

    info!(
        room_id = %db_room.id,
        created_by = %user.id,
        slots = slots_created,
        "Room created"
    );

    let response = CreateRoomResponse {
        message: "Room created successfully".to_string(),
        room: db_room.into(),
        slots_created,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Returns a room together with all of its slots ordered by start time
#[axum::debug_handler]
pub async fn get_room(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetRoomResponse>, AppError> {
    let db_room = state
        .rooms
        .get_room_by_id(id)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Room with ID {} not found", id)))?;

    let slots = state.rooms.get_room_slots(id).await?;

    let response = GetRoomResponse {
        room: db_room.into(),
        slots: slots.into_iter().map(Into::into).collect(),
    };

    Ok(Json(response))
}
