use async_trait::async_trait;
use mockall::mock;
use roombook_core::{expander::GeneratedSlot, models::room::NewRoom};
use uuid::Uuid;

use crate::{
    models::{DbRoom, DbRoomSlot, DbUser},
    store::{RoomStore, UserStore},
};

// Mock stores for testing
mock! {
    pub RoomStore {}

    #[async_trait]
    impl RoomStore for RoomStore {
        async fn create_room_with_slots(
            &self,
            room: NewRoom,
            created_by: Uuid,
            slots: Vec<GeneratedSlot>,
        ) -> eyre::Result<DbRoom>;

        async fn get_room_by_id(&self, id: Uuid) -> eyre::Result<Option<DbRoom>>;

        async fn get_room_slots(&self, room_id: Uuid) -> eyre::Result<Vec<DbRoomSlot>>;
    }
}

mock! {
    pub UserStore {}

    #[async_trait]
    impl UserStore for UserStore {
        async fn get_user_by_external_id(&self, external_id: &str) -> eyre::Result<Option<DbUser>>;
    }
}
