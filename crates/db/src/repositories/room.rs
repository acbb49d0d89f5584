use crate::models::{DbRoom, DbRoomSlot};
use chrono::Utc;
use eyre::Result;
use roombook_core::{expander::GeneratedSlot, models::room::NewRoom};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Inserts a room together with one availability row and one slot row per
/// generated slot. Everything is written in a single transaction; on any
/// failure nothing is kept.
pub async fn create_room_with_slots(
    pool: &Pool<Postgres>,
    room: &NewRoom,
    created_by: Uuid,
    slots: &[GeneratedSlot],
) -> Result<DbRoom> {
    let room_id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating room: id={}, name={}, timezone={}, slots={}",
        room_id, room.name, room.timezone, slots.len()
    );

    let mut tx = pool.begin().await?;

    let db_room = sqlx::query_as::<_, DbRoom>(
        r#"
        INSERT INTO rooms (id, name, capacity, location, timezone, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, capacity, location, timezone, created_at
        "#,
    )
    .bind(room_id)
    .bind(&room.name)
    .bind(room.capacity)
    .bind(&room.location)
    .bind(&room.timezone)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    for slot in slots {
        let availability_id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO availabilities (id, room_id, user_id, date, timezone, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(availability_id)
        .bind(room_id)
        .bind(created_by)
        .bind(slot.date)
        .bind(&slot.timezone)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO slots (id, availability_id, start_time, end_time, is_booked, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(availability_id)
        .bind(slot.start_time)
        .bind(slot.end_time)
        .bind(slot.is_booked)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::debug!("Room created successfully: id={}", room_id);
    Ok(db_room)
}

pub async fn get_room_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbRoom>> {
    let room = sqlx::query_as::<_, DbRoom>(
        r#"
        SELECT id, name, capacity, location, timezone, created_at
        FROM rooms
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(room)
}

pub async fn get_room_slots(pool: &Pool<Postgres>, room_id: Uuid) -> Result<Vec<DbRoomSlot>> {
    let slots = sqlx::query_as::<_, DbRoomSlot>(
        r#"
        SELECT s.id, s.availability_id, a.date, a.timezone, s.start_time, s.end_time, s.is_booked
        FROM slots s
        JOIN availabilities a ON a.id = s.availability_id
        WHERE a.room_id = $1
        ORDER BY s.start_time ASC
        "#,
    )
    .bind(room_id)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}
