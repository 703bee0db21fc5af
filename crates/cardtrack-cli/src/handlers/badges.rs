use super::workspace::as_sdk;
use super::{HandlerContext, Workspace};
use crate::presentation::presenters;
use anyhow::{Result, anyhow};
use cardtrack_runtime::{BadgeRequest, BadgeService, HostSdk, resolve_board, resolve_card};
use cardtrack_types::{BoardId, CardId, ListId, Viewer};

pub async fn handle(
    workspace: &Workspace,
    ctx: &HandlerContext,
    board: Option<String>,
    card: Option<String>,
    list: Option<String>,
    member: Option<String>,
) -> Result<()> {
    let host = if board.is_none() || card.is_none() || list.is_none() {
        workspace.host().await?
    } else {
        None
    };
    let context = host.as_ref().map(HostSdk::context).unwrap_or_default();

    let board = match board {
        Some(board) => BoardId::new(board),
        None => resolve_board(None, as_sdk(&host))?,
    };
    let card = match card {
        Some(card) => CardId::new(card),
        None => resolve_card(None, as_sdk(&host))?,
    };
    let list = list
        .map(ListId::new)
        .or(context.list)
        .ok_or_else(|| anyhow!("No list given. Pass --list or a host context with a list."))?;
    let viewer = member.map(Viewer::new).or(context.member);

    let store = workspace.settings()?;
    let client = workspace.client()?;
    let request = BadgeRequest {
        board,
        card,
        list,
        viewer,
    };

    let badges = BadgeService::new(&client, &store).badges(&request).await;
    ctx.render(presenters::present_badges(&request, badges))
}
