use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::listings;
use crate::reviews::dto::ReviewBody;
use crate::reviews::repo::{self, Review};
use crate::state::AppState;

/// Reviews hang off their listing: reading is public, writing requires an
/// authenticated caller.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/listings/:id/reviews",
        get(list_reviews).post(create_review),
    )
}

#[instrument(skip(state))]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(listing_id): Path<Uuid>,
) -> Result<Json<Vec<Review>>, (StatusCode, String)> {
    if listings::repo::get(&state.db, listing_id)
        .await
        .map_err(internal)?
        .is_none()
    {
        return Err((StatusCode::NOT_FOUND, "Listing not found".into()));
    }

    let rows = repo::list_for_listing(&state.db, listing_id)
        .await
        .map_err(internal)?;
    Ok(Json(rows))
}

#[instrument(skip(state, body))]
pub async fn create_review(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(listing_id): Path<Uuid>,
    Json(body): Json<ReviewBody>,
) -> Result<(StatusCode, Json<Review>), (StatusCode, String)> {
    if listings::repo::get(&state.db, listing_id)
        .await
        .map_err(internal)?
        .is_none()
    {
        return Err((StatusCode::NOT_FOUND, "Listing not found".into()));
    }

    let review = repo::create(&state.db, listing_id, user_id, body.rating, &body.comment)
        .await
        .map_err(internal)?;
    info!(review_id = %review.id, listing_id = %listing_id, guest_id = %user_id, "review created");
    Ok((StatusCode::CREATED, Json(review)))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
