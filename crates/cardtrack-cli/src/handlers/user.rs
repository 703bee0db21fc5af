use super::{HandlerContext, Workspace};
use crate::presentation::presenters;
use anyhow::Result;
use cardtrack_core::Scope;
use cardtrack_runtime::SettingsService;

pub async fn show(workspace: &Workspace, ctx: &HandlerContext, username: String) -> Result<()> {
    let client = workspace.client()?;
    let stored = match client.get_user_settings(&username).await {
        Ok(stored) => Some(stored),
        Err(err) if err.status() == Some(404) => None,
        Err(err) => return Err(err.into()),
    };
    ctx.render(presenters::present_user_settings(username, stored))
}

pub async fn upload(
    workspace: &Workspace,
    ctx: &HandlerContext,
    username: String,
    board: Option<String>,
) -> Result<()> {
    let store = workspace.settings()?;
    let client = workspace.client()?;
    let scope = board.map(Scope::board).unwrap_or(Scope::Global);

    let upload = SettingsService::new(&client, &store)
        .upload(&username, &scope)
        .await?;
    ctx.render(presenters::present_user_upload(&scope, upload))
}
