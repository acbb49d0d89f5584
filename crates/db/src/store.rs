//! Storage seams used by the HTTP layer.
//!
//! Handlers talk to [`RoomStore`] and [`UserStore`] rather than to a pool
//! directly, so tests can swap in the mocks from [`crate::mock`].

use async_trait::async_trait;
use eyre::Result;
use roombook_core::{expander::GeneratedSlot, models::room::NewRoom};
use uuid::Uuid;

use crate::{
    DbPool,
    models::{DbRoom, DbRoomSlot, DbUser},
    repositories,
};

#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Persists a room and all of its slots atomically.
    async fn create_room_with_slots(
        &self,
        room: NewRoom,
        created_by: Uuid,
        slots: Vec<GeneratedSlot>,
    ) -> Result<DbRoom>;

    async fn get_room_by_id(&self, id: Uuid) -> Result<Option<DbRoom>>;

    /// Slots of a room ordered by start time.
    async fn get_room_slots(&self, room_id: Uuid) -> Result<Vec<DbRoomSlot>>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user_by_external_id(&self, external_id: &str) -> Result<Option<DbUser>>;
}

/// PostgreSQL-backed implementation of both stores.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomStore for PgStore {
    async fn create_room_with_slots(
        &self,
        room: NewRoom,
        created_by: Uuid,
        slots: Vec<GeneratedSlot>,
    ) -> Result<DbRoom> {
        repositories::room::create_room_with_slots(&self.pool, &room, created_by, &slots).await
    }

    async fn get_room_by_id(&self, id: Uuid) -> Result<Option<DbRoom>> {
        repositories::room::get_room_by_id(&self.pool, id).await
    }

    async fn get_room_slots(&self, room_id: Uuid) -> Result<Vec<DbRoomSlot>> {
        repositories::room::get_room_slots(&self.pool, room_id).await
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn get_user_by_external_id(&self, external_id: &str) -> Result<Option<DbUser>> {
        repositories::user::get_user_by_external_id(&self.pool, external_id).await
    }
}
