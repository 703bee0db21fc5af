use super::{HandlerContext, Workspace};
use crate::presentation::presenters;
use anyhow::Result;
use cardtrack_core::CONFIG_FILE;
use cardtrack_runtime::Config;

pub fn show(workspace: &Workspace, ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_config(
        workspace.data_dir(),
        workspace.config(),
        workspace.host_file().map(|path| path.to_path_buf()),
    ))
}

/// Edits the file only; environment and flag overrides are not written back.
pub fn set(workspace: &Workspace, ctx: &HandlerContext, key: String, value: String) -> Result<()> {
    let path = workspace.data_dir().join(CONFIG_FILE);
    let mut config = Config::load_from(&path)?;
    config.set_value(&key, &value)?;
    config.save_to(&path)?;
    tracing::info!(path = %path.display(), key, "config updated");

    let stored = config.get_value(&key);
    ctx.render(presenters::present_config_value(&path, key, stored))
}
