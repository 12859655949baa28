use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use urlshort::config::Config;
use urlshort::server;

/// URL shortener HTTP server.
#[derive(Parser)]
#[command(name = "urlshort")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The URL (domain) that the server is running on; overrides BASE_URL
    #[arg(long)]
    url: Option<String>,

    /// Bind address; overrides LISTEN
    #[arg(long)]
    listen: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(url) = self.url {
            config.base_url = url;
        }
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
