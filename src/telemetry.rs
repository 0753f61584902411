use std::sync::OnceLock;

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

static TELEMETRY_GUARD: OnceLock<()> = OnceLock::new();

/// 安装全局tracing订阅器
///
/// 优先使用RUST_LOG，否则默认info，verbose时为debug。重复调用只有第一次生效。
pub fn init_tracing(verbose: bool) -> Result<()> {
    if TELEMETRY_GUARD.get().is_some() {
        return Ok(());
    }

    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| default_directive(verbose).to_string());

    fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("telemetry init failed: {err}"))?;

    TELEMETRY_GUARD.get_or_init(|| ());
    Ok(())
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}
