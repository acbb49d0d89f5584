use chrono::{DateTime, NaiveDate, Utc};
use roombook_core::models::{room::Room, slot::SlotResponse};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const ADMIN_ROLE: &str = "ADMIN";
pub const USER_ROLE: &str = "USER";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub external_id: String,
    pub role: String,
    pub token_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DbUser {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRoom {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub location: String,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
}

/// A slot joined with the availability row that anchors it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRoomSlot {
    pub id: Uuid,
    pub availability_id: Uuid,
    pub date: NaiveDate,
    pub timezone: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_booked: bool,
}

impl From<DbRoom> for Room {
    fn from(room: DbRoom) -> Self {
        Room {
            id: room.id,
            name: room.name,
            capacity: room.capacity,
            location: room.location,
            timezone: room.timezone,
            created_at: room.created_at,
        }
    }
}

impl From<DbRoomSlot> for SlotResponse {
    fn from(slot: DbRoomSlot) -> Self {
        SlotResponse {
            id: slot.id,
            availability_id: slot.availability_id,
            date: slot.date,
            timezone: slot.timezone,
            start_time: slot.start_time,
            end_time: slot.end_time,
            is_booked: slot.is_booked,
        }
    }
}
