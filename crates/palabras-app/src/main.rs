use tracing_subscriber::EnvFilter;

mod config;
mod pipeline;

use self::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    pipeline::run(&Config::default()).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
