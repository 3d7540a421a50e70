use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "salon", version, about = "Public salon profile viewer")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "default",
        help = "Profile name to use"
    )]
    pub profile: String,
    #[arg(
        long,
        global = true,
        env = "SALON_API_BASE",
        help = "Base url of the public salon api"
    )]
    pub api_base: Option<String>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Show(ShowArgs),
    Slug(PageArgs),
    Health,
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct PageArgs {
    #[arg(long, default_value = "/", help = "Page url or path, e.g. /salon/acme-spa")]
    pub url: String,
    #[arg(long, env = "SALON_SLUG", help = "Injected slug; wins over the url")]
    pub slug: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub page: PageArgs,
    #[arg(long, help = "Print every view-state update as it arrives")]
    pub updates: bool,
    #[arg(
        long,
        default_value_t = 10_000,
        help = "Stop waiting for the api after this many milliseconds and show what has loaded"
    )]
    pub wait_ms: u64,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show,
    SetBase(SetBaseArgs),
}

#[derive(Debug, Args)]
pub struct SetBaseArgs {
    #[arg(help = "Api base url to store in the profile")]
    pub url: String,
}
