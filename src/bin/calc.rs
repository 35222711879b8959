use std::io;

use anyhow::Result;
use teller::{calculator::Session, telemetry};
use tracing::debug;

fn main() -> Result<()> {
    telemetry::init("warn")?;

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock());
    let calculations = session.run()?;

    debug!(calculations, "calculator session finished");
    Ok(())
}
