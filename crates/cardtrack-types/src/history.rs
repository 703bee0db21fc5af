use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// One action from a card's history (`/history` and `/detailed-history`).
///
/// Entries arrive in chronological order and are never re-sorted. The `date`
/// string is kept exactly as sent; use [`parse_timestamp`] to read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,

    #[serde(rename = "type")]
    pub action_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub data: HistoryData,

    #[serde(
        rename = "memberCreator",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub member_creator: Option<MemberCreator>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberCreator {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Parse a wire date as RFC 3339, falling back to a naive ISO-8601 timestamp
/// interpreted as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trello_action() {
        let json = r#"{
            "date": "2024-02-10T14:30:00.000Z",
            "type": "updateCard",
            "data": {"listName": "Doing", "visitCount": 3, "moveTo": "Done"},
            "memberCreator": {"id": "m1", "name": "Alice"}
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.action_type, "updateCard");
        assert_eq!(entry.data.list_name.as_deref(), Some("Doing"));
        assert_eq!(entry.data.visit_count, Some(3));
        assert_eq!(entry.data.move_to.as_deref(), Some("Done"));
        assert_eq!(entry.member_creator.unwrap().name, "Alice");
    }

    #[test]
    fn test_missing_and_null_data() {
        let bare: HistoryEntry =
            serde_json::from_str(r#"{"date": "2024-02-10T14:30:00", "type": "createCard"}"#)
                .unwrap();
        assert_eq!(bare.data, HistoryData::default());
        assert!(bare.member_creator.is_none());

        let null: HistoryEntry =
            serde_json::from_str(r#"{"date": "x", "type": "createCard", "data": null}"#).unwrap();
        assert_eq!(null.data, HistoryData::default());
    }

    #[test]
    fn test_timestamp_parsing_is_lossless() {
        let rfc = parse_timestamp("2024-02-10T14:30:00.250+02:00").unwrap();
        assert_eq!(rfc.to_rfc3339(), "2024-02-10T14:30:00.250+02:00");

        let naive = parse_timestamp("2024-02-10T14:30:00.123456").unwrap();
        assert_eq!(naive.offset().local_minus_utc(), 0);
        assert_eq!(naive.timestamp_subsec_micros(), 123456);

        assert!(parse_timestamp("yesterday").is_none());
    }
}
