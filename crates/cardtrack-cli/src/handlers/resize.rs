use super::{HandlerContext, Workspace};
use crate::presentation::presenters;
use crate::types::FrameArg;
use anyhow::Result;
use cardtrack_core::Frame;

pub fn handle(
    workspace: &Workspace,
    ctx: &HandlerContext,
    frame: FrameArg,
    start: Option<u32>,
    delta: i64,
) -> Result<()> {
    let store = workspace.settings()?;
    let target = Frame::from(frame);

    let start = start.unwrap_or_else(|| target.height(&store));
    let height = target.resize(&store, start, delta)?;

    ctx.render(presenters::present_frame_height(
        target,
        frame.to_string(),
        start,
        delta,
        height,
    ))
}
