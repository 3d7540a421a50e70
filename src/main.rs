use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = salon::cli::Cli::parse();

    if let Err(err) = salon::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
