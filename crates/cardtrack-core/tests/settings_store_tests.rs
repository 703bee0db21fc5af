use cardtrack_core::*;
use cardtrack_types::{BoardId, ListId};
use tempfile::TempDir;

#[test]
fn test_board_settings_survive_reopen() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join(SETTINGS_FILE);
    let board = BoardId::new("board-1");

    {
        let store = SettingsStore::new(FileStore::open(&path)?);
        let mut settings = BoardSettings::load(&store, &board);
        settings.set_enabled(BadgeKind::CurrentList, true);
        settings.set_enabled(BadgeKind::SpecificLists, true);
        settings.selected_lists = ["l1", "l3"].map(ListId::from).into_iter().collect();
        settings.save(&store, &board)?;
        PanelSettings::toggle(&store, PanelSection::DetailedHistory, true)?;
    }

    let store = SettingsStore::new(FileStore::open(&path)?);
    let settings = BoardSettings::load(&store, &board);
    assert!(settings.show_current_list_time);
    assert!(settings.show_specific_lists_time);
    assert!(!settings.show_total_time);
    assert!(settings.selected_lists.contains(&ListId::new("l3")));
    assert!(PanelSettings::load(&store).show_detailed_history);

    let other = BoardSettings::load(&store, &BoardId::new("board-2"));
    assert_eq!(other, BoardSettings::default());
    Ok(())
}

#[test]
fn test_hand_edited_selection_fails_open() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join(SETTINGS_FILE);
    std::fs::write(
        &path,
        r#"{"b1_selected-lists": "[\"l1\",", "b1_show-specific-lists-time": "true"}"#,
    )?;

    let store = SettingsStore::new(FileStore::open(&path)?);
    let settings = BoardSettings::load(&store, &BoardId::new("b1"));
    assert!(settings.show_specific_lists_time);
    assert!(settings.selected_lists.is_empty());
    Ok(())
}
