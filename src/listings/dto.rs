use rust_decimal::Decimal;
use serde::Deserialize;

use crate::listings::repo::NewListing;

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}
fn default_limit() -> i64 {
    20
}

/// Body for create (POST) and full replace (PUT).
#[derive(Debug, Deserialize)]
pub struct ListingBody {
    pub title: String,
    pub description: String,
    pub price_per_night: Decimal,
    pub address: String,
    pub num_bedrooms: i32,
    pub num_bathrooms: i32,
    pub max_guests: i32,
}

impl From<ListingBody> for NewListing {
    fn from(body: ListingBody) -> Self {
        NewListing {
            title: body.title,
            description: body.description,
            price_per_night: body.price_per_night,
            address: body.address,
            num_bedrooms: body.num_bedrooms,
            num_bathrooms: body.num_bathrooms,
            max_guests: body.max_guests,
        }
    }
}

/// Body for partial update (PATCH); absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct ListingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_per_night: Option<Decimal>,
    pub address: Option<String>,
    pub num_bedrooms: Option<i32>,
    pub num_bathrooms: Option<i32>,
    pub max_guests: Option<i32>,
}
