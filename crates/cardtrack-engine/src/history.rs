use crate::format::format_timestamp;
use cardtrack_core::PanelSettings;
use cardtrack_types::HistoryEntry;
use chrono::TimeZone;
use serde::Serialize;
use std::fmt::Display;

pub const HISTORY_COLUMNS: [&str; 4] = ["Date", "Action", "List", "List Counts"];
pub const DETAILED_HISTORY_COLUMNS: [&str; 4] = ["Date", "Action", "Member", "Move To"];

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryTable {
    pub title: &'static str,
    pub columns: [&'static str; 4],
    pub rows: Vec<HistoryRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryRow {
    Entry { cells: [String; 4] },
    /// A single cell spanning every column
    Empty { message: &'static str },
}

/// The two history tables of the panel. A table is `None` when its setting
/// is off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryView {
    pub history: Option<HistoryTable>,
    pub detailed: Option<HistoryTable>,
}

impl HistoryView {
    pub fn is_empty(&self) -> bool {
        self.history.is_none() && self.detailed.is_none()
    }
}

/// Project history sequences into display tables.
///
/// Entry order is preserved. A sequence that was not fetched (`None`) renders
/// like an empty one when its table is enabled.
pub fn render_history<Tz>(
    history: Option<&[HistoryEntry]>,
    detailed: Option<&[HistoryEntry]>,
    settings: &PanelSettings,
    tz: &Tz,
) -> HistoryView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let history_table = settings.show_history.then(|| HistoryTable {
        title: "History",
        columns: HISTORY_COLUMNS,
        rows: rows_or_empty(history.unwrap_or_default(), "No history found", |entry| {
            [
                format_timestamp(&entry.date, tz),
                entry.action_type.clone(),
                text_or_na(entry.data.list_name.as_deref()),
                entry
                    .data
                    .visit_count
                    .filter(|count| *count != 0)
                    .unwrap_or(1)
                    .to_string(),
            ]
        }),
    });

    let detailed_table = settings.show_detailed_history.then(|| HistoryTable {
        title: "Detailed History",
        columns: DETAILED_HISTORY_COLUMNS,
        rows: rows_or_empty(
            detailed.unwrap_or_default(),
            "No detailed history found",
            |entry| {
                [
                    format_timestamp(&entry.date, tz),
                    entry.action_type.clone(),
                    text_or_na(entry.member_creator.as_ref().map(|m| m.name.as_str())),
                    text_or_na(entry.data.move_to.as_deref()),
                ]
            },
        ),
    });

    HistoryView {
        history: history_table,
        detailed: detailed_table,
    }
}

/// Blank and missing values both read as `N/A`.
fn text_or_na(value: Option<&str>) -> String {
    value
        .filter(|text| !text.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

fn rows_or_empty<F>(entries: &[HistoryEntry], empty: &'static str, cells: F) -> Vec<HistoryRow>
where
    F: Fn(&HistoryEntry) -> [String; 4],
{
    if entries.is_empty() {
        return vec![HistoryRow::Empty { message: empty }];
    }
    entries
        .iter()
        .map(|entry| HistoryRow::Entry {
            cells: cells(entry),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardtrack_core::PanelSection;
    use chrono::Utc;

    fn both_tables() -> PanelSettings {
        PanelSettings::default()
            .with(PanelSection::History, true)
            .with(PanelSection::DetailedHistory, true)
    }

    fn entries() -> Vec<HistoryEntry> {
        serde_json::from_str(
            r#"[
                {"date": "2024-02-10T09:00:00Z", "type": "createCard", "data": {"listName": "To Do"}},
                {"date": "2024-02-10T14:30:00Z", "type": "updateCard",
                 "data": {"listName": "Doing", "visitCount": 2, "moveTo": "Doing"},
                 "memberCreator": {"id": "m1", "name": "Alice"}}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_history_is_one_spanning_row() {
        let view = render_history(Some(&[][..]), None, &both_tables(), &Utc);

        let history = view.history.unwrap();
        assert_eq!(
            history.rows,
            vec![HistoryRow::Empty {
                message: "No history found"
            }]
        );
        let detailed = view.detailed.unwrap();
        assert_eq!(
            detailed.rows,
            vec![HistoryRow::Empty {
                message: "No detailed history found"
            }]
        );
    }

    #[test]
    fn test_tables_are_gated_independently() {
        let entries = entries();
        let only_detailed = PanelSettings::default().with(PanelSection::DetailedHistory, true);

        let view = render_history(
            Some(entries.as_slice()),
            Some(entries.as_slice()),
            &only_detailed,
            &Utc,
        );
        assert!(view.history.is_none());
        assert!(view.detailed.is_some());

        let none = render_history(
            Some(entries.as_slice()),
            Some(entries.as_slice()),
            &PanelSettings::default(),
            &Utc,
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_rows_keep_order_and_fallbacks() {
        let entries = entries();
        let view = render_history(
            Some(entries.as_slice()),
            Some(entries.as_slice()),
            &both_tables(),
            &Utc,
        );

        let history = view.history.unwrap();
        assert_eq!(history.columns, HISTORY_COLUMNS);
        assert_eq!(
            history.rows,
            vec![
                HistoryRow::Entry {
                    cells: [
                        "2/10/2024, 9:00:00 AM".to_string(),
                        "createCard".to_string(),
                        "To Do".to_string(),
                        "1".to_string(),
                    ]
                },
                HistoryRow::Entry {
                    cells: [
                        "2/10/2024, 2:30:00 PM".to_string(),
                        "updateCard".to_string(),
                        "Doing".to_string(),
                        "2".to_string(),
                    ]
                },
            ]
        );

        let detailed = view.detailed.unwrap();
        let members: Vec<&str> = detailed
            .rows
            .iter()
            .map(|row| match row {
                HistoryRow::Entry { cells } => cells[2].as_str(),
                HistoryRow::Empty { message } => message,
            })
            .collect();
        assert_eq!(members, vec!["N/A", "Alice"]);
    }

    #[test]
    fn test_blank_values_fall_back_like_missing_ones() {
        let entries: Vec<HistoryEntry> = serde_json::from_str(
            r#"[{"date": "2024-02-10T09:00:00Z", "type": "updateCard",
                 "data": {"listName": "", "visitCount": 0, "moveTo": ""},
                 "memberCreator": {"id": "m1", "name": ""}}]"#,
        )
        .unwrap();
        let view = render_history(
            Some(entries.as_slice()),
            Some(entries.as_slice()),
            &both_tables(),
            &Utc,
        );

        assert_eq!(
            view.history.unwrap().rows,
            vec![HistoryRow::Entry {
                cells: [
                    "2/10/2024, 9:00:00 AM".to_string(),
                    "updateCard".to_string(),
                    "N/A".to_string(),
                    "1".to_string(),
                ]
            }]
        );
        assert_eq!(
            view.detailed.unwrap().rows,
            vec![HistoryRow::Entry {
                cells: [
                    "2/10/2024, 9:00:00 AM".to_string(),
                    "updateCard".to_string(),
                    "N/A".to_string(),
                    "N/A".to_string(),
                ]
            }]
        );
    }
}
