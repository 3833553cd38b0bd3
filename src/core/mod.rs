//! Core utilities shared by the commands.
//!
//! - `table`: CSV persistence of team tables and stat-line exports

pub mod table;

pub use table::{
    read_team_table, resolve_team_id, write_csv, write_csv_file, write_team_table,
    DEFAULT_TEAMS_TABLE,
};
