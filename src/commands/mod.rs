pub mod watch;

use anyhow::Result;
use clap::Parser;

/// Shows the LibreOffice application and document you are editing as your
/// Discord status. Runs until interrupted with Ctrl+C.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    pub async fn menu() -> Result<()> {
        let _cli = Self::parse();
        watch::cmd().await
    }
}
