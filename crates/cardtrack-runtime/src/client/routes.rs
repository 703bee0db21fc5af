use cardtrack_types::{BoardId, CardId, ExportFormat};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is in a path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Backend endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    FetchHistory(&'a CardId),
    Metrics(&'a CardId),
    History(&'a CardId),
    DetailedHistory(&'a CardId),
    BoardLists(&'a BoardId),
    Cards,
    Export(&'a CardId, ExportFormat),
    SaveUserSettings,
    UserSettings(&'a str),
}

impl Route<'_> {
    /// Path and query, relative to the backend root
    pub fn path(&self) -> String {
        match self {
            Route::FetchHistory(card) => {
                format!("/api/card/{}/fetch-history", segment(card.as_str()))
            }
            Route::Metrics(card) => format!("/api/card/{}/metrics", segment(card.as_str())),
            Route::History(card) => format!("/api/card/{}/history", segment(card.as_str())),
            Route::DetailedHistory(card) => {
                format!("/api/card/{}/detailed-history", segment(card.as_str()))
            }
            Route::BoardLists(board) => format!("/api/board/{}/lists", segment(board.as_str())),
            Route::Cards => "/api/cards".to_string(),
            Route::Export(card, format) => {
                format!("/api/export/{}?format={}", segment(card.as_str()), format.as_str())
            }
            Route::SaveUserSettings => "/api/settings".to_string(),
            Route::UserSettings(username) => format!("/api/settings/{}", segment(username)),
        }
    }
}

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_routes() {
        let card = CardId::new("abc123");
        assert_eq!(Route::FetchHistory(&card).path(), "/api/card/abc123/fetch-history");
        assert_eq!(Route::Metrics(&card).path(), "/api/card/abc123/metrics");
        assert_eq!(Route::History(&card).path(), "/api/card/abc123/history");
        assert_eq!(
            Route::DetailedHistory(&card).path(),
            "/api/card/abc123/detailed-history"
        );
        assert_eq!(
            Route::Export(&card, ExportFormat::Csv).path(),
            "/api/export/abc123?format=csv"
        );
    }

    #[test]
    fn test_ids_are_escaped() {
        let board = BoardId::new("a/b c");
        assert_eq!(Route::BoardLists(&board).path(), "/api/board/a%2Fb%20c/lists");
        assert_eq!(Route::UserSettings("jane doe").path(), "/api/settings/jane%20doe");
    }
}
