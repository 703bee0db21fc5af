use super::workspace::as_sdk;
use super::{HandlerContext, Workspace};
use crate::presentation::presenters;
use anyhow::Result;
use cardtrack_runtime::resolve_board;
use cardtrack_types::BoardId;

pub async fn handle(
    workspace: &Workspace,
    ctx: &HandlerContext,
    board: Option<String>,
) -> Result<()> {
    let board = match board {
        Some(board) => BoardId::new(board),
        None => resolve_board(None, as_sdk(&workspace.host().await?))?,
    };

    let lists = workspace.client()?.get_board_lists(&board).await?;
    ctx.render(presenters::present_board_lists(&board, lists))
}
