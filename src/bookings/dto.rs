use serde::Deserialize;
use time::Date;
use uuid::Uuid;

use crate::bookings::iso_date;
use crate::bookings::repo::NewBooking;

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

/// Body for create (POST) and full replace (PUT). The guest is always the
/// authenticated caller; check-in/check-out ordering is not validated.
#[derive(Debug, Deserialize)]
pub struct BookingBody {
    pub listing_id: Uuid,
    #[serde(with = "iso_date")]
    pub check_in_date: Date,
    #[serde(with = "iso_date")]
    pub check_out_date: Date,
    pub num_guests: i32,
}

impl From<BookingBody> for NewBooking {
    fn from(body: BookingBody) -> Self {
        NewBooking {
            listing_id: body.listing_id,
            check_in_date: body.check_in_date,
            check_out_date: body.check_out_date,
            num_guests: body.num_guests,
        }
    }
}

mod iso_date_opt {
    use serde::{Deserialize, Deserializer};
    use time::Date;

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Date>, D::Error> {
        #[derive(Deserialize)]
        struct Inner(#[serde(with = "crate::bookings::iso_date")] Date);

        Ok(Option::<Inner>::deserialize(d)?.map(|v| v.0))
    }
}

/// Body for partial update (PATCH); absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct BookingPatch {
    pub listing_id: Option<Uuid>,
    #[serde(default, with = "iso_date_opt")]
    pub check_in_date: Option<Date>,
    #[serde(default, with = "iso_date_opt")]
    pub check_out_date: Option<Date>,
    pub num_guests: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn booking_body_parses_iso_dates() {
        let body: BookingBody = serde_json::from_str(
            r#"{
                "listing_id": "5f9c9c4a-3f66-4f3f-9b2a-0a1b2c3d4e5f",
                "check_in_date": "2025-08-01",
                "check_out_date": "2025-08-05",
                "num_guests": 2
            }"#,
        )
        .unwrap();
        assert_eq!(body.check_in_date, date!(2025 - 08 - 01));
        assert_eq!(body.check_out_date, date!(2025 - 08 - 05));
        assert_eq!(body.num_guests, 2);
    }

    #[test]
    fn patch_allows_sparse_bodies() {
        let patch: BookingPatch = serde_json::from_str(r#"{"num_guests":4}"#).unwrap();
        assert!(patch.listing_id.is_none());
        assert!(patch.check_in_date.is_none());
        assert!(patch.check_out_date.is_none());
        assert_eq!(patch.num_guests, Some(4));

        let patch: BookingPatch =
            serde_json::from_str(r#"{"check_out_date":"2025-09-01"}"#).unwrap();
        assert_eq!(patch.check_out_date, Some(date!(2025 - 09 - 01)));
    }

    #[test]
    fn patch_accepts_listing_reference() {
        let patch: BookingPatch = serde_json::from_str(
            r#"{"listing_id":"5f9c9c4a-3f66-4f3f-9b2a-0a1b2c3d4e5f"}"#,
        )
        .unwrap();
        assert!(patch.listing_id.is_some());
        assert!(patch.num_guests.is_none());
    }
}
