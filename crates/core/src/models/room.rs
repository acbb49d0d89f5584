use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{BookingError, BookingResult},
    models::slot::SlotResponse,
    template::WeeklyTemplate,
};

pub const DEFAULT_TIMEZONE: &str = "UTC";

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    pub capacity: i32,
    pub location: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    pub availability: WeeklyTemplate,
}

impl CreateRoomRequest {
    /// Checks the top-level room fields. The availability template is
    /// validated separately, during expansion.
    pub fn validate(&self) -> BookingResult<()> {
        if self.name.chars().count() < 3 {
            return Err(BookingError::Validation(
                "Room name must be at least 3 characters".to_string(),
            ));
        }
        if self.capacity < 1 {
            return Err(BookingError::Validation(
                "Capacity must be at least 1".to_string(),
            ));
        }
        if self.location.chars().count() < 3 {
            return Err(BookingError::Validation("Location is required".to_string()));
        }
        if self.timezone.parse::<chrono_tz::Tz>().is_err() {
            return Err(BookingError::Validation(format!(
                "Unknown timezone: {}",
                self.timezone
            )));
        }
        Ok(())
    }

    pub fn new_room(&self) -> NewRoom {
        NewRoom {
            name: self.name.clone(),
            capacity: self.capacity,
            location: self.location.clone(),
            timezone: self.timezone.clone(),
        }
    }
}

/// Room fields ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub name: String,
    pub capacity: i32,
    pub location: String,
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub location: String,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub message: String,
    pub room: Room,
    pub slots_created: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRoomResponse {
    pub room: Room,
    pub slots: Vec<SlotResponse>,
}
