use clap::Parser;

use tagboard_cli::run_server;
use tagboard_config::Config;

#[derive(Parser)]
#[command(name = "tagboard")]
#[command(about = "Tagboard - tag management HTTP service")]
#[command(version)]
struct Cli {
    /// Address to bind (overrides TAGBOARD_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides TAGBOARD_PORT)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    port: Option<u16>,

    /// SQLite database URL (overrides TAGBOARD_DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Tags per list page (overrides TAGBOARD_PAGE_SIZE)
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=100))]
    page_size: Option<i64>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(url) = self.database_url {
            config.database_url = url;
        }
        if let Some(size) = self.page_size {
            config.page_size = size;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let mut config = Config::from_env()?;
    cli.apply(&mut config);

    run_server(config).await
}
