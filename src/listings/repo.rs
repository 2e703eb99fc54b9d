use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::listings::dto::ListingPatch;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price_per_night: Decimal,
    pub address: String,
    pub num_bedrooms: i32,
    pub num_bathrooms: i32,
    pub max_guests: i32,
    pub owner_id: Uuid,
    pub created_at: OffsetDateTime,
}

/// A listing that has not been persisted yet. Used by the create endpoint and
/// by the bulk seeder.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price_per_night: Decimal,
    pub address: String,
    pub num_bedrooms: i32,
    pub num_bathrooms: i32,
    pub max_guests: i32,
}

const LISTING_COLUMNS: &str = "id, title, description, price_per_night, address, \
     num_bedrooms, num_bathrooms, max_guests, owner_id, created_at";

pub async fn list(db: &PgPool, limit: i64, offset: i64) -> anyhow::Result<Vec<Listing>> {
    let rows = sqlx::query_as::<_, Listing>(&format!(
        r#"
        SELECT {LISTING_COLUMNS}
        FROM listings
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

pub async fn get(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Listing>> {
    let row = sqlx::query_as::<_, Listing>(&format!(
        r#"
        SELECT {LISTING_COLUMNS}
        FROM listings
        WHERE id = $1
        "#,
    ))
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn create(db: &PgPool, owner_id: Uuid, new: &NewListing) -> anyhow::Result<Listing> {
    let row = sqlx::query_as::<_, Listing>(&format!(
        r#"
        INSERT INTO listings
            (title, description, price_per_night, address,
             num_bedrooms, num_bathrooms, max_guests, owner_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {LISTING_COLUMNS}
        "#,
    ))
    .bind(&new.title)
    .bind(&new.description)
    .bind(new.price_per_night)
    .bind(&new.address)
    .bind(new.num_bedrooms)
    .bind(new.num_bathrooms)
    .bind(new.max_guests)
    .bind(owner_id)
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// Full replace of every mutable field.
pub async fn replace(db: &PgPool, id: Uuid, new: &NewListing) -> anyhow::Result<Option<Listing>> {
    let row = sqlx::query_as::<_, Listing>(&format!(
        r#"
        UPDATE listings SET
            title = $2,
            description = $3,
            price_per_night = $4,
            address = $5,
            num_bedrooms = $6,
            num_bathrooms = $7,
            max_guests = $8
        WHERE id = $1
        RETURNING {LISTING_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(&new.title)
    .bind(&new.description)
    .bind(new.price_per_night)
    .bind(&new.address)
    .bind(new.num_bedrooms)
    .bind(new.num_bathrooms)
    .bind(new.max_guests)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

/// Partial update; absent fields keep their stored value.
pub async fn update_partial(
    db: &PgPool,
    id: Uuid,
    patch: &ListingPatch,
) -> anyhow::Result<Option<Listing>> {
    let row = sqlx::query_as::<_, Listing>(&format!(
        r#"
        UPDATE listings SET
            title = COALESCE($2, title),
            description = COALESCE($3, description),
            price_per_night = COALESCE($4, price_per_night),
            address = COALESCE($5, address),
            num_bedrooms = COALESCE($6, num_bedrooms),
            num_bathrooms = COALESCE($7, num_bathrooms),
            max_guests = COALESCE($8, max_guests)
        WHERE id = $1
        RETURNING {LISTING_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(patch.title.as_deref())
    .bind(patch.description.as_deref())
    .bind(patch.price_per_night)
    .bind(patch.address.as_deref())
    .bind(patch.num_bedrooms)
    .bind(patch.num_bathrooms)
    .bind(patch.max_guests)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
    let done = sqlx::query("DELETE FROM listings WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(done.rows_affected() > 0)
}

pub async fn delete_all(db: &PgPool) -> anyhow::Result<u64> {
    let done = sqlx::query("DELETE FROM listings").execute(db).await?;
    Ok(done.rows_affected())
}

/// Persist a whole batch in one statement. Column values are sent as arrays
/// and unnested server-side, which keeps the bind count flat regardless of
/// batch size.
pub async fn insert_batch(
    db: &PgPool,
    owner_id: Uuid,
    batch: &[NewListing],
) -> anyhow::Result<u64> {
    if batch.is_empty() {
        return Ok(0);
    }

    let mut titles = Vec::with_capacity(batch.len());
    let mut descriptions = Vec::with_capacity(batch.len());
    let mut prices = Vec::with_capacity(batch.len());
    let mut addresses = Vec::with_capacity(batch.len());
    let mut bedrooms = Vec::with_capacity(batch.len());
    let mut bathrooms = Vec::with_capacity(batch.len());
    let mut guests = Vec::with_capacity(batch.len());
    for listing in batch {
        titles.push(listing.title.clone());
        descriptions.push(listing.description.clone());
        prices.push(listing.price_per_night);
        addresses.push(listing.address.clone());
        bedrooms.push(listing.num_bedrooms);
        bathrooms.push(listing.num_bathrooms);
        guests.push(listing.max_guests);
    }

    let done = sqlx::query(
        r#"
        INSERT INTO listings
            (title, description, price_per_night, address,
             num_bedrooms, num_bathrooms, max_guests, owner_id)
        SELECT t.title, t.description, t.price_per_night, t.address,
               t.num_bedrooms, t.num_bathrooms, t.max_guests, $8
        FROM UNNEST($1::text[], $2::text[], $3::numeric[], $4::text[],
                    $5::int[], $6::int[], $7::int[])
             AS t(title, description, price_per_night, address,
                  num_bedrooms, num_bathrooms, max_guests)
        "#,
    )
    .bind(&titles)
    .bind(&descriptions)
    .bind(&prices)
    .bind(&addresses)
    .bind(&bedrooms)
    .bind(&bathrooms)
    .bind(&guests)
    .bind(owner_id)
    .execute(db)
    .await?;
    Ok(done.rows_affected())
}
