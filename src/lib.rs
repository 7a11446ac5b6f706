//! Loot split calculator for party hunt analyzer reports.
//!
//! [`analyzer::parse`] turns the pasted report into a [`Party`] and its
//! [`Player`]s, [`roster`] drops players who sit the split out, and
//! [`split::calculate`] produces the [`GoldSplit`] with the transfers that
//! even everyone out.

pub mod analyzer;
pub mod app;
pub mod args;
pub mod error;
pub mod field;
pub mod input;
pub mod logging;
pub mod number;
pub mod report;
pub mod roster;
pub mod settle;
pub mod split;

pub use analyzer::{Party, Player, parse};
pub use error::{Result, SplitError};
pub use roster::PlayerId;
pub use split::{DirectTransfer, GoldSplit, PlayerTransfer, Status, TransferSummary, calculate};
