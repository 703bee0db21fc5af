use super::{HandlerContext, Workspace};
use crate::presentation::presenters::{self, FormOutcome};
use crate::types::{BadgeArg, BadgeColorArg};
use anyhow::Result;
use cardtrack_core::{BadgeKind, BoardSettings, PanelSettings, Scope};
use cardtrack_runtime::{SettingsForm, SettingsService};
use cardtrack_types::{BoardId, ListId};

/// Changes requested on the command line for the settings form
#[derive(Debug, Default)]
pub struct FormEdits {
    pub enable: Vec<BadgeArg>,
    pub disable: Vec<BadgeArg>,
    pub colors: Vec<BadgeColorArg>,
    pub select: Vec<String>,
}

impl FormEdits {
    pub fn is_empty(&self) -> bool {
        self.enable.is_empty()
            && self.disable.is_empty()
            && self.colors.is_empty()
            && self.select.is_empty()
    }

    /// Enables apply before disables, so naming a badge in both turns it off.
    fn apply(self, form: &mut SettingsForm) {
        for badge in self.enable {
            form.settings.set_enabled(BadgeKind::from(badge), true);
        }
        for badge in self.disable {
            form.settings.set_enabled(BadgeKind::from(badge), false);
        }
        for color in self.colors {
            form.settings.colors.set(BadgeKind::from(color.badge), color.color);
        }
        if !self.select.is_empty() {
            let ids: Vec<ListId> = self.select.into_iter().map(ListId::new).collect();
            form.select(&ids);
        }
    }
}

pub fn show(workspace: &Workspace, ctx: &HandlerContext, board: String) -> Result<()> {
    let store = workspace.settings()?;
    let board = BoardId::new(board);

    let settings = BoardSettings::load(&store, &board);
    let panel = PanelSettings::load(&store);
    ctx.render(presenters::present_board_settings(&board, &settings, &panel))
}

pub fn set(
    workspace: &Workspace,
    ctx: &HandlerContext,
    scope: Scope,
    key: String,
    value: String,
) -> Result<()> {
    let store = workspace.settings()?;
    store.set(&scope, &key, &value)?;
    ctx.render(presenters::present_setting(&scope, key, Some(value), true))
}

pub fn get(workspace: &Workspace, ctx: &HandlerContext, scope: Scope, key: String) -> Result<()> {
    let store = workspace.settings()?;
    let value = store.get(&scope, &key);
    ctx.render(presenters::present_setting(&scope, key, value, false))
}

pub fn unset(workspace: &Workspace, ctx: &HandlerContext, scope: Scope, key: String) -> Result<()> {
    let store = workspace.settings()?;
    store.remove(&scope, &key)?;
    ctx.render(presenters::present_removed_setting(&scope, key))
}

/// Without ids, print the board's selection. With ids, replace it.
pub fn lists(
    workspace: &Workspace,
    ctx: &HandlerContext,
    board: String,
    ids: Vec<String>,
) -> Result<()> {
    let store = workspace.settings()?;
    let board = BoardId::new(board);
    let scope = Scope::Board(board.clone());

    let stored = !ids.is_empty();
    if stored {
        store.set_selected_lists(&scope, ids.into_iter().map(ListId::new))?;
    }

    let selected = store
        .selected_lists(&scope)
        .iter()
        .map(ToString::to_string)
        .collect();
    ctx.render(presenters::present_list_selection(&board, selected, stored))
}

pub async fn form(
    workspace: &Workspace,
    ctx: &HandlerContext,
    board: String,
    edits: FormEdits,
    save: bool,
) -> Result<()> {
    let store = workspace.settings()?;
    let client = workspace.client()?;
    let board = BoardId::new(board);
    let service = SettingsService::new(&client, &store);

    let mut form = service.form(&board).await;
    let edited = !edits.is_empty();
    edits.apply(&mut form);

    let outcome = if save {
        service.save(&form)?;
        FormOutcome::Saved
    } else if edited {
        FormOutcome::Previewed
    } else {
        FormOutcome::Unchanged
    };
    ctx.render(presenters::present_settings_form(form, outcome))
}
