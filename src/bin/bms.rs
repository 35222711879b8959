use anyhow::Result;
use teller::{bank, telemetry};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    telemetry::init("warn")?;

    let commands = bank::read_commands(bank::DEMO_SCRIPT.as_bytes()).collect();
    let state = bank::replay(commands, &mut std::io::stdout()).await?;

    debug!(
        accounts = state.get_all_accounts().len(),
        "ledger demo finished"
    );
    Ok(())
}
