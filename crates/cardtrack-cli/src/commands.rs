use super::args::{Cli, Commands, ConfigCommand, SettingsCommand, UserCommand};
use super::handlers::settings::FormEdits;
use super::handlers::{self, HandlerContext, Workspace};
use crate::logging;
use anyhow::Result;
use cardtrack_core::resolve_workspace_path;
use std::future::Future;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let workspace = Workspace::open(data_dir, cli.backend_url.as_deref(), cli.host_file)?;
    let ctx = HandlerContext::new(cli.format);

    match cli.command {
        Commands::Badges {
            board,
            card,
            list,
            member,
        } => block_on(handlers::badges::handle(
            &workspace, &ctx, board, card, list, member,
        )),

        Commands::Show { card, url } => {
            block_on(handlers::show::handle(&workspace, &ctx, card, url))
        }

        Commands::Lists { board } => block_on(handlers::lists::handle(&workspace, &ctx, board)),

        Commands::Cards {
            created_after,
            card_id,
        } => block_on(handlers::cards::handle(&workspace, &ctx, created_after, card_id)),

        Commands::Export { card, kind, output } => {
            block_on(handlers::export::handle(&workspace, &ctx, card, kind, output))
        }

        Commands::Settings { command } => match command {
            SettingsCommand::Show { board } => handlers::settings::show(&workspace, &ctx, board),
            SettingsCommand::Set { scope, key, value } => {
                handlers::settings::set(&workspace, &ctx, scope.scope(), key, value)
            }
            SettingsCommand::Get { scope, key } => {
                handlers::settings::get(&workspace, &ctx, scope.scope(), key)
            }
            SettingsCommand::Unset { scope, key } => {
                handlers::settings::unset(&workspace, &ctx, scope.scope(), key)
            }
            SettingsCommand::Lists { board, ids } => {
                handlers::settings::lists(&workspace, &ctx, board, ids)
            }
            SettingsCommand::Form {
                board,
                enable,
                disable,
                color,
                select,
                save,
            } => {
                let edits = FormEdits {
                    enable,
                    disable,
                    colors: color,
                    select,
                };
                block_on(handlers::settings::form(&workspace, &ctx, board, edits, save))
            }
        },

        Commands::User { command } => match command {
            UserCommand::Show { username } => {
                block_on(handlers::user::show(&workspace, &ctx, username))
            }
            UserCommand::Upload { username, board } => {
                block_on(handlers::user::upload(&workspace, &ctx, username, board))
            }
        },

        Commands::Resize {
            frame,
            start,
            delta,
        } => handlers::resize::handle(&workspace, &ctx, frame, start, delta),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&workspace, &ctx),
            ConfigCommand::Set { key, value } => {
                handlers::config::set(&workspace, &ctx, key, value)
            }
        },
    }
}

fn block_on<F>(future: F) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}
