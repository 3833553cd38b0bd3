//! Flat records produced by the query operations.

pub mod output;

pub use output::{League, PlayerStatLine, TeamRow};
