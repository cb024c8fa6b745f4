use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A reservation record owned by the booking service.
///
/// Only the fields this crate reads are typed; everything else the service
/// sends (guests, messages, the embedded property) is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub property_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_are_preserved() {
        let raw = r#"{
            "id": "b1",
            "check_in": "2024-06-01",
            "check_out": "2024-06-05",
            "property_id": "p9",
            "guests": [{"name": "Ada"}]
        }"#;
        let booking: Booking = serde_json::from_str(raw).unwrap();
        assert_eq!(booking.id, "b1");
        assert_eq!(booking.property_id.as_deref(), Some("p9"));
        assert!(booking.notes.is_none());
        assert_eq!(booking.extra["guests"][0]["name"], "Ada");

        let back = serde_json::to_value(&booking).unwrap();
        assert_eq!(back["guests"][0]["name"], "Ada");
    }

    #[test]
    fn null_fields_decode_as_none() {
        let raw = r#"{"id":"b1","notes":null,"check_in":null,"check_out":null,
            "property_id":null,"created_at":null,"updated_at":null}"#;
        let booking: Booking = serde_json::from_str(raw).unwrap();
        assert_eq!(booking.id, "b1");
        assert!(booking.check_in.is_none());
        assert!(booking.created_at.is_none());
        assert!(booking.extra.is_empty());
    }
}
