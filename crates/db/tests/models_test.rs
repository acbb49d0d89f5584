use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use roombook_core::models::{room::Room, slot::SlotResponse};
use roombook_db::models::{ADMIN_ROLE, DbRoom, DbRoomSlot, DbUser, USER_ROLE};
use uuid::Uuid;

#[rstest]
#[case(ADMIN_ROLE, true)]
#[case(USER_ROLE, false)]
#[case("admin", false)]
fn test_user_is_admin(#[case] role: &str, #[case] expected: bool) {
    let user = DbUser {
        id: Uuid::new_v4(),
        external_id: "user_123".to_string(),
        role: role.to_string(),
        token_hash: None,
        created_at: Utc::now(),
    };

    assert_eq!(user.is_admin(), expected);
}

#[test]
fn test_db_room_into_room() {
    let id = Uuid::new_v4();
    let created_at = Utc::now();

    let room: Room = DbRoom {
        id,
        name: "Board Room".to_string(),
        capacity: 12,
        location: "Floor 3".to_string(),
        timezone: "UTC".to_string(),
        created_at,
    }
    .into();

    assert_eq!(room.id, id);
    assert_eq!(room.name, "Board Room");
    assert_eq!(room.capacity, 12);
    assert_eq!(room.location, "Floor 3");
    assert_eq!(room.created_at, created_at);
}

#[test]
fn test_db_room_slot_into_response() {
    let id = Uuid::new_v4();
    let availability_id = Uuid::new_v4();
    let start_time = Utc.with_ymd_and_hms(2025, 3, 18, 14, 0, 0).unwrap();
    let end_time = Utc.with_ymd_and_hms(2025, 3, 18, 15, 0, 0).unwrap();

    let slot: SlotResponse = DbRoomSlot {
        id,
        availability_id,
        date: NaiveDate::from_ymd_opt(2025, 3, 18).unwrap(),
        timezone: "Asia/Tokyo".to_string(),
        start_time,
        end_time,
        is_booked: true,
    }
    .into();

    assert_eq!(slot.id, id);
    assert_eq!(slot.availability_id, availability_id);
    assert_eq!(slot.timezone, "Asia/Tokyo");
    assert_eq!(slot.start_time, start_time);
    assert_eq!(slot.end_time, end_time);
    assert!(slot.is_booked);
}
