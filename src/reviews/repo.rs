use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// `created_at` is set by the database on insert and never updated; the
/// rating carries no enforced range.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub guest_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub created_at: OffsetDateTime,
}

pub async fn list_for_listing(db: &PgPool, listing_id: Uuid) -> anyhow::Result<Vec<Review>> {
    let rows = sqlx::query_as::<_, Review>(
        r#"
        SELECT id, listing_id, guest_id, rating, comment, created_at
        FROM reviews
        WHERE listing_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(listing_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn create(
    db: &PgPool,
    listing_id: Uuid,
    guest_id: Uuid,
    rating: i32,
    comment: &str,
) -> anyhow::Result<Review> {
    let row = sqlx::query_as::<_, Review>(
        r#"
        INSERT INTO reviews (listing_id, guest_id, rating, comment)
        VALUES ($1, $2, $3, $4)
        RETURNING id, listing_id, guest_id, rating, comment, created_at
        "#,
    )
    .bind(listing_id)
    .bind(guest_id)
    .bind(rating)
    .bind(comment)
    .fetch_one(db)
    .await?;
    Ok(row)
}
