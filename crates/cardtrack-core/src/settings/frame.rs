use super::{KeyValueStore, Scope, SettingsStore};
use crate::Result;

pub const MIN_FRAME_HEIGHT: u32 = 300;
pub const MAX_FRAME_HEIGHT: u32 = 1200;

/// Resizable embedded frames whose height is remembered globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// The board-level content view
    Content,
    /// The section on the back of a card
    CardBack,
}

impl Frame {
    pub fn key(&self) -> &'static str {
        match self {
            Frame::Content => "card-tracker-iframe-height",
            Frame::CardBack => "card-tracker-card-back-height",
        }
    }

    pub fn default_height(&self) -> u32 {
        match self {
            Frame::Content => 500,
            Frame::CardBack => 300,
        }
    }

    pub fn height<S: KeyValueStore>(&self, store: &SettingsStore<S>) -> u32 {
        store
            .get(&Scope::Global, self.key())
            .and_then(|raw| leading_integer(&raw))
            .unwrap_or_else(|| self.default_height())
    }

    /// Apply a drag of `delta_y` pixels from `start_height`, clamp, and store.
    pub fn resize<S: KeyValueStore>(
        &self,
        store: &SettingsStore<S>,
        start_height: u32,
        delta_y: i64,
    ) -> Result<u32> {
        let height = clamp_height(i64::from(start_height) + delta_y);
        store.set(&Scope::Global, self.key(), &height.to_string())?;
        Ok(height)
    }
}

pub fn clamp_height(height: i64) -> u32 {
    let clamped = height.clamp(i64::from(MIN_FRAME_HEIGHT), i64::from(MAX_FRAME_HEIGHT));
    u32::try_from(clamped).unwrap_or(MIN_FRAME_HEIGHT)
}

// "640px" and " 640" both read as 640.
fn leading_integer(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_default_heights() {
        let store = SettingsStore::new(MemoryStore::new());
        assert_eq!(Frame::Content.height(&store), 500);
        assert_eq!(Frame::CardBack.height(&store), 300);
    }

    #[test]
    fn test_resize_clamps_and_persists() -> Result<()> {
        let store = SettingsStore::new(MemoryStore::new());

        assert_eq!(Frame::Content.resize(&store, 500, 120)?, 620);
        assert_eq!(Frame::Content.height(&store), 620);

        assert_eq!(Frame::Content.resize(&store, 500, -900)?, MIN_FRAME_HEIGHT);
        assert_eq!(Frame::CardBack.resize(&store, 300, 5000)?, MAX_FRAME_HEIGHT);
        assert_eq!(Frame::CardBack.height(&store), MAX_FRAME_HEIGHT);
        assert_eq!(Frame::Content.height(&store), MIN_FRAME_HEIGHT);
        Ok(())
    }

    #[test]
    fn test_height_parsing_is_lenient() -> Result<()> {
        let store = SettingsStore::new(MemoryStore::new());
        store.set(&Scope::Global, Frame::Content.key(), "640px")?;
        assert_eq!(Frame::Content.height(&store), 640);

        store.set(&Scope::Global, Frame::Content.key(), "tall")?;
        assert_eq!(Frame::Content.height(&store), 500);
        Ok(())
    }
}
