use anyhow::{Context, Result, bail};

use super::load_config;
use crate::chat::ui::print_health;
use crate::cli::BackendArgs;
use crate::transport::HttpTransport;
use crate::ui::Spinner;

pub async fn run_health(backend: &BackendArgs) -> Result<()> {
    let config = load_config(backend)?;
    let transport = HttpTransport::new(config.endpoint.clone(), config.timeout);

    let spinner = Spinner::new("Checking backend...");
    let result = transport.health().await;
    spinner.stop();

    let health = result
        .with_context(|| format!("Health check failed for {}", transport.endpoint()))?;
    print_health(transport.endpoint(), &health);

    if !health.is_healthy() {
        bail!("Backend reported status '{}'", health.status);
    }
    Ok(())
}
