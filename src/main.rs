use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use vaxbatch::paths::Paths;

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) fetch, normalize, write ──────────────────────────────────
    let paths = Paths::new("output")?;
    vaxbatch::run(&paths)?;

    info!("all done");
    Ok(())
}
