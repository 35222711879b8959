//! Replays a driver script through a ledger task and writes its reports.
use std::io::Write;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::error;

use crate::bank::{Command, State};

/// The size of the channels between the feeder, the ledger, and the writer.
pub const CHANNEL_SIZE: usize = 100;

/// Runs `commands` in order against a fresh ledger, writing each report as one line to `out`.
/// Returns the final state once every command has been applied.
pub async fn replay<W: Write>(commands: Vec<Command>, out: &mut W) -> Result<State> {
    let (sender, receiver) = mpsc::channel(CHANNEL_SIZE);
    let (report_sender, mut report_receiver) = mpsc::channel(CHANNEL_SIZE);
    let mut state = State::new(receiver);

    let handle = tokio::spawn(async move {
        state.run(report_sender).await;
        state
    });

    let feeder = tokio::spawn(async move {
        for command in commands {
            if let Err(err) = sender.send(command).await {
                error!(%err, "error sending command");
                break;
            }
        }
    });

    while let Some(report) = report_receiver.recv().await {
        writeln!(out, "{report}").context("failed to write report")?;
    }

    feeder.await.context("failed to join the command feeder")?;
    handle
        .await
        .context("failed to join the ledger task")
}
