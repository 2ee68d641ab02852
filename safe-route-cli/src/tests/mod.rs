//! Shared test harness modules for the safe-route CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod command_unit;
mod helpers;
mod spots_unit;
