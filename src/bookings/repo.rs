use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::bookings::dto::BookingPatch;
use crate::bookings::iso_date;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub guest_id: Uuid,
    #[serde(with = "iso_date")]
    pub check_in_date: Date,
    #[serde(with = "iso_date")]
    pub check_out_date: Date,
    pub num_guests: i32,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub listing_id: Uuid,
    pub check_in_date: Date,
    pub check_out_date: Date,
    pub num_guests: i32,
}

const BOOKING_COLUMNS: &str =
    "id, listing_id, guest_id, check_in_date, check_out_date, num_guests, created_at";

pub async fn list(db: &PgPool, limit: i64, offset: i64) -> anyhow::Result<Vec<Booking>> {
    let rows = sqlx::query_as::<_, Booking>(&format!(
        r#"
        SELECT {BOOKING_COLUMNS}
        FROM bookings
        ORDER BY created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn get(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Booking>> {
    let row = sqlx::query_as::<_, Booking>(&format!(
        r#"
        SELECT {BOOKING_COLUMNS}
        FROM bookings
        WHERE id = $1
        "#,
    ))
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn create(db: &PgPool, guest_id: Uuid, new: &NewBooking) -> anyhow::Result<Booking> {
    let row = sqlx::query_as::<_, Booking>(&format!(
        r#"
        INSERT INTO bookings
            (listing_id, guest_id, check_in_date, check_out_date, num_guests)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {BOOKING_COLUMNS}
        "#,
    ))
    .bind(new.listing_id)
    .bind(guest_id)
    .bind(new.check_in_date)
    .bind(new.check_out_date)
    .bind(new.num_guests)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn replace(db: &PgPool, id: Uuid, new: &NewBooking) -> anyhow::Result<Option<Booking>> {
    let row = sqlx::query_as::<_, Booking>(&format!(
        r#"
        UPDATE bookings SET
            listing_id = $2,
            check_in_date = $3,
            check_out_date = $4,
            num_guests = $5
        WHERE id = $1
        RETURNING {BOOKING_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(new.listing_id)
    .bind(new.check_in_date)
    .bind(new.check_out_date)
    .bind(new.num_guests)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn update_partial(
    db: &PgPool,
    id: Uuid,
    patch: &BookingPatch,
) -> anyhow::Result<Option<Booking>> {
    let row = sqlx::query_as::<_, Booking>(&format!(
        r#"
        UPDATE bookings SET
            listing_id = COALESCE($2, listing_id),
            check_in_date = COALESCE($3, check_in_date),
            check_out_date = COALESCE($4, check_out_date),
            num_guests = COALESCE($5, num_guests)
        WHERE id = $1
        RETURNING {BOOKING_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(patch.listing_id)
    .bind(patch.check_in_date)
    .bind(patch.check_out_date)
    .bind(patch.num_guests)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
    let done = sqlx::query("DELETE FROM bookings WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(done.rows_affected() > 0)
}
