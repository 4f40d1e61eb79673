use clap::Parser;
use market_seed::adapter::inbound::cli::command::Cli;
use market_seed::adapter::inbound::cli::{dispatch, operator, output};
use market_seed::infrastructure::operator::entry::Operator;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if operator::install(Box::new(Operator)).is_err() {
        output::error("CLI operator already installed");
        std::process::exit(1);
    }

    if let Err(e) = dispatch::run(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
