//! itemsvc - HTTP item service
//!
//! Serves `GET /`, `GET /items` and `POST /items` over a Postgres table.
//! Database settings come from `DB_*` environment variables (or a `.env`
//! file) and can be overridden with flags.

use anyhow::Result;
use clap::Parser;

mod serve;
mod tracing_setup;

use tracing_setup::LogOptions;

#[derive(Parser, Debug)]
#[command(name = "itemsvc", version, about = "HTTP item service backed by Postgres")]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long)]
    otel: bool,

    #[command(flatten)]
    serve: serve::ServeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(LogOptions {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let result = serve::run_serve(cli.serve).await;
    tracing_setup::shutdown();
    result
}
