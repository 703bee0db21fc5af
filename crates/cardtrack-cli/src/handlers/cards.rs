use super::{HandlerContext, Workspace};
use crate::presentation::presenters;
use anyhow::Result;
use cardtrack_types::CardFilter;
use chrono::NaiveDate;

pub async fn handle(
    workspace: &Workspace,
    ctx: &HandlerContext,
    created_after: Option<NaiveDate>,
    card_id: Option<String>,
) -> Result<()> {
    let mut filter = CardFilter::new();
    if let Some(date) = created_after {
        filter = filter.created_after(date);
    }
    if let Some(fragment) = card_id {
        filter = filter.card_id_contains(fragment);
    }

    let cards = workspace.client()?.list_cards(&filter).await?;
    ctx.render(presenters::present_tracked_cards(&filter, cards))
}
