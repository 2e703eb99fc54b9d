use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::bookings::dto::{BookingBody, BookingPatch, Pagination};
use crate::bookings::repo::{self, Booking};
use crate::listings;
use crate::state::AppState;

/// Every booking route, reads included, requires an authenticated caller.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(list_bookings).post(create_booking))
        .route(
            "/bookings/:id",
            get(get_booking)
                .put(replace_booking)
                .patch(update_booking)
                .delete(delete_booking),
        )
}

#[instrument(skip(state))]
pub async fn list_bookings(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Booking>>, (StatusCode, String)> {
    let rows = repo::list(&state.db, p.limit, p.offset)
        .await
        .map_err(internal)?;
    Ok(Json(rows))
}

#[instrument(skip(state))]
pub async fn get_booking(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, (StatusCode, String)> {
    let booking = repo::get(&state.db, id)
        .await
        .map_err(internal)?
        .ok_or((StatusCode::NOT_FOUND, "Booking not found".to_string()))?;
    Ok(Json(booking))
}

#[instrument(skip(state, body))]
pub async fn create_booking(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<BookingBody>,
) -> Result<(StatusCode, Json<Booking>), (StatusCode, String)> {
    ensure_listing_exists(&state, body.listing_id).await?;

    let booking = repo::create(&state.db, user_id, &body.into())
        .await
        .map_err(internal)?;
    info!(booking_id = %booking.id, guest_id = %user_id, "booking created");
    Ok((StatusCode::CREATED, Json(booking)))
}

#[instrument(skip(state, body))]
pub async fn replace_booking(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<BookingBody>,
) -> Result<Json<Booking>, (StatusCode, String)> {
    ensure_listing_exists(&state, body.listing_id).await?;

    let booking = repo::replace(&state.db, id, &body.into())
        .await
        .map_err(internal)?
        .ok_or((StatusCode::NOT_FOUND, "Booking not found".to_string()))?;
    Ok(Json(booking))
}

#[instrument(skip(state, body))]
pub async fn update_booking(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<BookingPatch>,
) -> Result<Json<Booking>, (StatusCode, String)> {
    if let Some(listing_id) = body.listing_id {
        ensure_listing_exists(&state, listing_id).await?;
    }

    let booking = repo::update_partial(&state.db, id, &body)
        .await
        .map_err(internal)?
        .ok_or((StatusCode::NOT_FOUND, "Booking not found".to_string()))?;
    Ok(Json(booking))
}

#[instrument(skip(state))]
pub async fn delete_booking(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    let deleted = repo::delete(&state.db, id).await.map_err(internal)?;
    if !deleted {
        return Err((StatusCode::NOT_FOUND, "Booking not found".into()));
    }
    info!(booking_id = %id, deleted_by = %user_id, "booking deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Caller-supplied listing references get a structured 404 instead of a raw
/// foreign-key failure from the database.
async fn ensure_listing_exists(
    state: &AppState,
    listing_id: Uuid,
) -> Result<(), (StatusCode, String)> {
    if listings::repo::get(&state.db, listing_id)
        .await
        .map_err(internal)?
        .is_none()
    {
        return Err((StatusCode::NOT_FOUND, "Listing not found".into()));
    }
    Ok(())
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
