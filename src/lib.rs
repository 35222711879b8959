//! Two small console programs: a bank-account withdrawal demo and an interactive calculator.
pub mod bank;
pub mod calculator;
pub mod telemetry;
