use anyhow::Result;

use super::load_config;
use crate::chat::ChatSession;
use crate::cli::BackendArgs;

pub async fn run_chat(backend: &BackendArgs) -> Result<()> {
    let config = load_config(backend)?;
    let mut session = ChatSession::new(config);
    session.run().await
}
