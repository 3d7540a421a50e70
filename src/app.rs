use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        profile,
        api_base,
        json,
        verbose,
        command,
    } = cli;

    logging::init(verbose);
    let ctx = AppContext::bootstrap(profile, api_base, json, verbose)?;

    match command {
        Command::Show(args) => commands::show::run(&ctx, args).await,
        Command::Slug(args) => commands::slug::run(&ctx, args),
        Command::Health => commands::health::run(&ctx).await,
        Command::Config(args) => commands::config::run(&ctx, args.command),
    }
}
