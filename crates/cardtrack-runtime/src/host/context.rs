use super::HostSdk;
use crate::error::ContextField;
use crate::{Error, Result};
use cardtrack_types::{BoardId, CardId};
use percent_encoding::percent_decode_str;
use reqwest::Url;
use serde::Deserialize;

/// The URL a frame was opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLocation {
    url: Url,
}

#[derive(Debug, Default, Deserialize)]
struct FragmentPayload {
    #[serde(default)]
    context: Option<FragmentContext>,
}

#[derive(Debug, Default, Deserialize)]
struct FragmentContext {
    #[serde(default)]
    card: Option<String>,
    #[serde(default)]
    board: Option<String>,
}

impl FrameLocation {
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw)
            .map_err(|e| Error::Config(format!("invalid frame URL {}: {}", raw, e)))?;
        Ok(Self { url })
    }

    /// First non-empty value of any of `names`, in the order given
    pub fn query_param(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| {
            self.url
                .query_pairs()
                .find(|(key, value)| &**key == *name && !value.is_empty())
                .map(|(_, value)| value.into_owned())
        })
    }

    /// The `{"context": {...}}` JSON some hosts put in the fragment.
    fn fragment_context(&self) -> Option<FragmentContext> {
        let fragment = self.url.fragment().filter(|f| !f.is_empty())?;
        let decoded = percent_decode_str(fragment).decode_utf8().ok()?;
        match serde_json::from_str::<FragmentPayload>(&decoded) {
            Ok(payload) => payload.context,
            Err(err) => {
                tracing::debug!(error = %err, "fragment is not a host context");
                None
            }
        }
    }
}

/// Resolve the card a frame belongs to: fragment context, then the host
/// SDK, then `cardId`/`card` query parameters.
pub fn resolve_card(location: Option<&FrameLocation>, sdk: Option<&dyn HostSdk>) -> Result<CardId> {
    let from_fragment = location
        .and_then(FrameLocation::fragment_context)
        .and_then(|context| context.card)
        .filter(|card| !card.is_empty());
    if let Some(card) = from_fragment {
        tracing::debug!(%card, "card from fragment context");
        return Ok(CardId::new(card));
    }

    if let Some(card) = sdk.and_then(|sdk| sdk.context().card) {
        tracing::debug!(%card, "card from host context");
        return Ok(card);
    }

    location
        .and_then(|location| location.query_param(&["cardId", "card"]))
        .map(CardId::new)
        .ok_or(Error::ContextMissing(ContextField::Card))
}

/// Resolve the board a frame belongs to, in the same order as
/// [`resolve_card`], with `boardId`/`board` query parameters.
pub fn resolve_board(
    location: Option<&FrameLocation>,
    sdk: Option<&dyn HostSdk>,
) -> Result<BoardId> {
    let from_fragment = location
        .and_then(FrameLocation::fragment_context)
        .and_then(|context| context.board)
        .filter(|board| !board.is_empty());
    if let Some(board) = from_fragment {
        return Ok(BoardId::new(board));
    }

    if let Some(board) = sdk.and_then(|sdk| sdk.context().board) {
        return Ok(board);
    }

    location
        .and_then(|location| location.query_param(&["boardId", "board"]))
        .map(BoardId::new)
        .ok_or(Error::ContextMissing(ContextField::Board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostContext, StaticHost};

    fn host(card: &str) -> StaticHost {
        StaticHost::new(HostContext {
            card: Some(CardId::new(card)),
            board: Some(BoardId::new("b-sdk")),
            ..HostContext::default()
        })
    }

    #[test]
    fn test_fragment_wins_over_sdk_and_query() -> Result<()> {
        let location = FrameLocation::parse(
            "https://tracker.example.com/popup.html?cardId=c-query#%7B%22context%22%3A%7B%22card%22%3A%22c-hash%22%7D%7D",
        )?;
        let sdk: &dyn HostSdk = &host("c-sdk");

        let card = resolve_card(Some(&location), Some(sdk))?;
        assert_eq!(card, CardId::new("c-hash"));
        Ok(())
    }

    #[test]
    fn test_sdk_before_query() -> Result<()> {
        let location =
            FrameLocation::parse("https://x.test/popup.html?cardId=c-query&board=b-query")?;
        let sdk: &dyn HostSdk = &host("c-sdk");

        assert_eq!(resolve_card(Some(&location), Some(sdk))?, CardId::new("c-sdk"));
        assert_eq!(resolve_board(Some(&location), Some(sdk))?, BoardId::new("b-sdk"));
        assert_eq!(resolve_board(Some(&location), None)?, BoardId::new("b-query"));
        Ok(())
    }

    #[test]
    fn test_query_param_order_and_empty_values() -> Result<()> {
        let location = FrameLocation::parse("https://x.test/popup.html?cardId=&card=c2")?;
        assert_eq!(resolve_card(Some(&location), None)?, CardId::new("c2"));

        let location = FrameLocation::parse("https://x.test/popup.html?card=c2&cardId=c1")?;
        assert_eq!(resolve_card(Some(&location), None)?, CardId::new("c1"));
        Ok(())
    }

    #[test]
    fn test_unparseable_fragment_falls_through() -> Result<()> {
        let location = FrameLocation::parse("https://x.test/popup.html?card=c2#not-json")?;
        assert_eq!(resolve_card(Some(&location), None)?, CardId::new("c2"));
        Ok(())
    }

    #[test]
    fn test_missing_context() -> Result<()> {
        let location = FrameLocation::parse("https://x.test/popup.html")?;

        let err = resolve_card(Some(&location), None).unwrap_err();
        assert!(matches!(err, Error::ContextMissing(ContextField::Card)));
        assert_eq!(
            err.to_string(),
            "No card selected. Please open this popup from a card button."
        );
        assert!(matches!(
            resolve_board(None, None),
            Err(Error::ContextMissing(ContextField::Board))
        ));
        Ok(())
    }
}
