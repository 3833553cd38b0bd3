//! Tabular (CSV) persistence for team tables and stat-line exports.
//!
//! Column names come from the serde renames on the row types in
//! [`crate::models`].

use std::{fs, io, path::Path};

use serde::Serialize;
use tracing::debug;

use crate::cli::types::TeamId;
use crate::models::TeamRow;
use crate::Result;

/// Default location of the aggregated team table, used by both the writer
/// and the reader when the caller does not pick a path.
pub const DEFAULT_TEAMS_TABLE: &str = "teams.csv";

/// Create the parent directory of `path` if it has one.
fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Serialize `rows` as CSV (header row first) into any writer.
pub fn write_csv<W, T>(writer: W, rows: &[T]) -> Result<()>
where
    W: io::Write,
    T: Serialize,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `rows` to `path`, replacing any existing file.
pub fn write_csv_file<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    ensure_parent(path)?;
    let file = fs::File::create(path)?;
    write_csv(file, rows)?;
    debug!(path = %path.display(), rows = rows.len(), "wrote table");
    Ok(())
}

/// Persist the team table.
pub fn write_team_table(path: &Path, rows: &[TeamRow]) -> Result<()> {
    write_csv_file(path, rows)
}

/// Load a team table previously written by [`write_team_table`].
pub fn read_team_table(path: &Path) -> Result<Vec<TeamRow>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let rows = rdr.deserialize().collect::<std::result::Result<Vec<TeamRow>, _>>()?;
    Ok(rows)
}

/// Look up a team's id by exact name in the table at `path`.
///
/// Returns the first matching row's id, or `None` when no row matches.
/// The table is read as-is; nothing checks that it is current.
pub fn resolve_team_id(team_name: &str, path: &Path) -> Result<Option<TeamId>> {
    let mut rdr = csv::Reader::from_path(path)?;
    for row in rdr.deserialize::<TeamRow>() {
        let row = row?;
        if row.team == team_name {
            return Ok(Some(row.team_id));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerStatLine;
    use crate::FootballError;
    use tempfile::tempdir;

    fn sample_rows() -> Vec<TeamRow> {
        vec![
            TeamRow {
                team_id: TeamId::new(42),
                team: "Arsenal".to_string(),
                league: "Premier League".to_string(),
            },
            TeamRow {
                team_id: TeamId::new(529),
                team: "Barcelona".to_string(),
                league: "La Liga".to_string(),
            },
            TeamRow {
                team_id: TeamId::new(9999),
                team: "Arsenal".to_string(),
                league: "UEFA Champions League".to_string(),
            },
        ]
    }

    #[test]
    fn test_team_table_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("teams.csv");

        write_team_table(&path, &sample_rows()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Team ID,Team,League"));
        assert_eq!(lines.next(), Some("42,Arsenal,Premier League"));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("teams.csv");

        write_team_table(&path, &sample_rows()).unwrap();

        assert_eq!(read_team_table(&path).unwrap(), sample_rows());
    }

    #[test]
    fn test_resolve_team_id_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("teams.csv");
        write_team_table(&path, &sample_rows()).unwrap();

        assert_eq!(
            resolve_team_id("Barcelona", &path).unwrap(),
            Some(TeamId::new(529))
        );
    }

    #[test]
    fn test_resolve_team_id_first_match_wins() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("teams.csv");
        write_team_table(&path, &sample_rows()).unwrap();

        assert_eq!(
            resolve_team_id("Arsenal", &path).unwrap(),
            Some(TeamId::new(42))
        );
    }

    #[test]
    fn test_resolve_team_id_is_exact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("teams.csv");
        write_team_table(&path, &sample_rows()).unwrap();

        assert_eq!(resolve_team_id("arsenal", &path).unwrap(), None);
        assert_eq!(resolve_team_id("Arsenal FC", &path).unwrap(), None);
    }

    #[test]
    fn test_resolve_team_id_missing_file() {
        let dir = tempdir().unwrap();
        let err = resolve_team_id("Arsenal", &dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, FootballError::Csv(_)));
    }

    #[test]
    fn test_stat_lines_leave_unset_cells_empty() {
        let row = PlayerStatLine {
            player_name: "B. Saka".to_string(),
            age: Some(23),
            nationality: Some("England".to_string()),
            weight: None,
            height: Some("178 cm".to_string()),
            league: Some("Premier League".to_string()),
            team: Some("Arsenal".to_string()),
            appearances: Some(25),
            lineups: Some(24),
            minutes: Some(2070),
            goals: Some(6),
            assists: None,
            yellow_cards: Some(3),
            red_cards: Some(0),
            rating: None,
            passes_total: Some(812),
            tackles_total: None,
            duels_total: Some(190),
        };

        let mut buf = Vec::new();
        write_csv(&mut buf, &[row]).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let mut lines = out.lines();

        assert_eq!(
            lines.next(),
            Some(
                "Player Name,Age,Nationality,Weight,Height,League,Team,Appearances,Lineups,\
                 Minutes,Goals,Assists,Yellow Cards,Red Cards,Rating,Passes Total,\
                 Tackles Total,Duels Total"
            )
        );
        assert_eq!(
            lines.next(),
            Some("B. Saka,23,England,,178 cm,Premier League,Arsenal,25,24,2070,6,,3,0,,812,,190")
        );
    }
}
