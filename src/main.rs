use clap::Parser;
use dotenv::dotenv;

mod cmd;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "proclubs=info".into()),
        )
        .init();

    cmd::Cli::parse().run().await
}
