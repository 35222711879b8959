//! Driver scripts: CSV rows of ledger commands.
use std::io::Read;

use csv::{ReaderBuilder, Trim};
use tracing::warn;

use crate::bank::Command;

/// The fixed driver run by the `bms` binary.
pub const DEMO_SCRIPT: &str = include_str!("demo.csv");

/// Parses a driver script. Rows that fail to deserialize are logged and skipped.
pub fn read_commands<R: Read>(reader: R) -> impl Iterator<Item = Command> {
    ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(reader)
        .into_deserialize::<Command>()
        .filter_map(|row| match row {
            Ok(command) => Some(command),
            Err(err) => {
                warn!(%err, "skipping malformed script row");
                None
            }
        })
}
