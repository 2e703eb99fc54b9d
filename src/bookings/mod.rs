use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::routes())
}

/// Serde helper for calendar dates as `YYYY-MM-DD`.
pub(crate) mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::format_description::BorrowedFormatItem;
    use time::macros::format_description;
    use time::Date;

    const FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let s = date.format(FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let s = String::deserialize(deserializer)?;
        Date::parse(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod iso_date_tests {
    use serde::{Deserialize, Serialize};
    use time::macros::date;

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super::iso_date")]
        date: time::Date,
    }

    #[test]
    fn roundtrips_calendar_dates() {
        let json = serde_json::to_string(&Wrapper {
            date: date!(2025 - 07 - 04),
        })
        .unwrap();
        assert_eq!(json, r#"{"date":"2025-07-04"}"#);

        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back.date, date!(2025 - 07 - 04));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"date":"04/07/2025"}"#).is_err());
    }
}
