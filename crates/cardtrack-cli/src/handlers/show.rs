use super::workspace::as_sdk;
use super::{HandlerContext, Workspace};
use crate::presentation::presenters;
use anyhow::Result;
use cardtrack_core::PanelSettings;
use cardtrack_runtime::{FrameLocation, PanelService, resolve_card};
use cardtrack_types::CardId;

pub async fn handle(
    workspace: &Workspace,
    ctx: &HandlerContext,
    card: Option<String>,
    url: Option<String>,
) -> Result<()> {
    let card = match card {
        Some(card) => CardId::new(card),
        None => {
            let location = url.as_deref().map(FrameLocation::parse).transpose()?;
            let host = workspace.host().await?;
            resolve_card(location.as_ref(), as_sdk(&host))?
        }
    };

    let settings = PanelSettings::load(&workspace.settings()?);
    let client = workspace.client()?;

    let panel = PanelService::new(&client)
        .load(&card, &settings, &chrono::Local)
        .await;
    ctx.render(presenters::present_card_panel(panel))
}
