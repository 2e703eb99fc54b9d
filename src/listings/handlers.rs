use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::listings::dto::{ListingBody, ListingPatch, Pagination};
use crate::listings::repo::{self, Listing};
use crate::state::AppState;

/// Listings are readable by anyone.
pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/listings", get(list_listings))
        .route("/listings/:id", get(get_listing))
}

/// Mutations require an authenticated caller.
pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/listings", post(create_listing))
        .route(
            "/listings/:id",
            put(replace_listing)
                .patch(update_listing)
                .delete(delete_listing),
        )
}

#[instrument(skip(state))]
pub async fn list_listings(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Listing>>, (StatusCode, String)> {
    let rows = repo::list(&state.db, p.limit, p.offset)
        .await
        .map_err(internal)?;
    Ok(Json(rows))
}

#[instrument(skip(state))]
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Listing>, (StatusCode, String)> {
    let listing = repo::get(&state.db, id)
        .await
        .map_err(internal)?
        .ok_or((StatusCode::NOT_FOUND, "Listing not found".to_string()))?;
    Ok(Json(listing))
}

#[instrument(skip(state, body))]
pub async fn create_listing(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<ListingBody>,
) -> Result<(StatusCode, Json<Listing>), (StatusCode, String)> {
    let listing = repo::create(&state.db, user_id, &body.into())
        .await
        .map_err(internal)?;
    info!(listing_id = %listing.id, owner_id = %user_id, "listing created");
    Ok((StatusCode::CREATED, Json(listing)))
}

#[instrument(skip(state, body))]
pub async fn replace_listing(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ListingBody>,
) -> Result<Json<Listing>, (StatusCode, String)> {
    let listing = repo::replace(&state.db, id, &body.into())
        .await
        .map_err(internal)?
        .ok_or((StatusCode::NOT_FOUND, "Listing not found".to_string()))?;
    Ok(Json(listing))
}

#[instrument(skip(state, body))]
pub async fn update_listing(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ListingPatch>,
) -> Result<Json<Listing>, (StatusCode, String)> {
    let listing = repo::update_partial(&state.db, id, &body)
        .await
        .map_err(internal)?
        .ok_or((StatusCode::NOT_FOUND, "Listing not found".to_string()))?;
    Ok(Json(listing))
}

#[instrument(skip(state))]
pub async fn delete_listing(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    let deleted = repo::delete(&state.db, id).await.map_err(internal)?;
    if !deleted {
        return Err((StatusCode::NOT_FOUND, "Listing not found".into()));
    }
    info!(listing_id = %id, deleted_by = %user_id, "listing deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
