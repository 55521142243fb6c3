use anyhow::anyhow;
use chime_join_cli::cli_args::{Mode, Opt};
use chime_join_cli::modes;
use chime_join_client::JoinConfig;
use clap::Parser;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `tracing-log` routes the client's `log` records through this subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::parse();
    let config = JoinConfig::from_env().map_err(|e| anyhow!(e))?;
    debug!("Loaded configuration: {config:?}");

    match opt.mode {
        Mode::Join(join) => {
            let rendered = modes::join::join(join, config).await?;
            println!("{rendered}");
        }
        Mode::Url(endpoint) => {
            println!("{}", modes::url::join_url(&endpoint, config)?);
        }
    }

    Ok(())
}
