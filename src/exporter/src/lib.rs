pub mod rows;

use crate::rows::{
    ClubRow, FixtureRow, LeagueInfoRow, LeagueTableRowRecord, PlayerRow, SeasonRow, StaffRow,
    TransferRow, YouthRow,
};
use fdl_core::{
    Club, Fixture, LeagueInfo, LeagueTable, Player, Season, SeasonInfo, StaffMember,
    TransferRecord, YouthProspect,
};
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to prepare output directory {path}: {source}")]
    OutputDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {artifact}: {source}")]
    Write {
        artifact: String,
        source: csv::Error,
    },
}

/// Writes the finished dataset as flat CSV artifacts, one file per table.
/// Downstream consumers treat a missing or partially-written file as
/// "dataset not generated" — on any error the run aborts and the artifact is
/// left incomplete on purpose.
pub struct DatasetExporter {
    out_dir: PathBuf,
}

impl DatasetExporter {
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Result<Self, ExportError> {
        let out_dir = out_dir.as_ref().to_path_buf();

        std::fs::create_dir_all(&out_dir).map_err(|source| ExportError::OutputDirectory {
            path: out_dir.clone(),
            source,
        })?;

        Ok(DatasetExporter { out_dir })
    }

    pub fn write_league_info(&self, league: &LeagueInfo) -> Result<PathBuf, ExportError> {
        self.write_rows("league_info.csv", &[LeagueInfoRow::from(league)])
    }

    pub fn write_seasons(&self, seasons: &[SeasonInfo]) -> Result<PathBuf, ExportError> {
        let rows: Vec<SeasonRow> = seasons.iter().map(SeasonRow::from).collect();
        self.write_rows("seasons.csv", &rows)
    }

    pub fn write_clubs(&self, clubs: &[Club]) -> Result<PathBuf, ExportError> {
        let rows: Vec<ClubRow> = clubs.iter().map(ClubRow::from).collect();
        self.write_rows("clubs.csv", &rows)
    }

    pub fn write_players(&self, players: &[Player]) -> Result<PathBuf, ExportError> {
        let rows: Vec<PlayerRow> = players.iter().map(PlayerRow::from).collect();
        self.write_rows("players.csv", &rows)
    }

    pub fn write_youth(&self, youth: &[YouthProspect]) -> Result<PathBuf, ExportError> {
        let rows: Vec<YouthRow> = youth.iter().map(YouthRow::from).collect();
        self.write_rows("youth_academy.csv", &rows)
    }

    pub fn write_staff(&self, staff: &[StaffMember]) -> Result<PathBuf, ExportError> {
        let rows: Vec<StaffRow> = staff.iter().map(StaffRow::from).collect();
        self.write_rows("staff.csv", &rows)
    }

    pub fn write_fixtures(
        &self,
        season: Season,
        fixtures: &[Fixture],
    ) -> Result<PathBuf, ExportError> {
        let rows: Vec<FixtureRow> = fixtures.iter().map(FixtureRow::from).collect();
        self.write_rows(&format!("matches_{}.csv", season.file_tag()), &rows)
    }

    pub fn write_league_table(
        &self,
        season: Season,
        table: &LeagueTable,
    ) -> Result<PathBuf, ExportError> {
        let rows: Vec<LeagueTableRowRecord> = table
            .rows()
            .iter()
            .map(LeagueTableRowRecord::from)
            .collect();
        self.write_rows(&format!("league_table_{}.csv", season.file_tag()), &rows)
    }

    pub fn write_transfers(&self, transfers: &[TransferRecord]) -> Result<PathBuf, ExportError> {
        let rows: Vec<TransferRow> = transfers.iter().map(TransferRow::from).collect();
        self.write_rows("transfer_history.csv", &rows)
    }

    fn write_rows<T: Serialize>(&self, filename: &str, rows: &[T]) -> Result<PathBuf, ExportError> {
        let path = self.out_dir.join(filename);

        let write = || -> Result<(), csv::Error> {
            let mut writer = csv::Writer::from_path(&path)?;

            for row in rows {
                writer.serialize(row)?;
            }

            writer.flush()?;
            Ok(())
        };

        write().map_err(|source| ExportError::Write {
            artifact: filename.to_string(),
            source,
        })?;

        info!("💾 {}: {} records", filename, rows.len());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdl_core::{ClubColors, ClubTier, Schedule, Stadium};

    fn club(id: u32, name: &str) -> Club {
        Club {
            id,
            full_name: name.to_string(),
            short_name: "TEST".into(),
            city: name.to_string(),
            tier: ClubTier::Mid,
            founded_year: 1930,
            stadium: Stadium {
                name: format!("{} Stadium", name),
                capacity: 28_000,
            },
            colors: ClubColors {
                primary: "Purple".into(),
                secondary: "Gold".into(),
            },
            annual_budget_millions: 70,
            reputation: 58,
            training_facility_rating: 11,
            youth_academy_rating: 12,
            preferred_formation: "4-1-4-1".into(),
            playing_style: "Balanced".into(),
        }
    }

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("football_data_lab_tests")
            .join(format!("{}_{}", tag, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_clubs_artifact_round_trip() {
        let dir = scratch_dir("clubs");
        let exporter = DatasetExporter::new(&dir).unwrap();

        let clubs = vec![club(1, "Oakmont Hearts"), club(2, "Riverside Celtic")];
        let path = exporter.write_clubs(&clubs).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let mut lines = content.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("club_id,full_name,short_name,city,tier"));

        let first = lines.next().unwrap();
        assert!(first.starts_with("CLB_00001,Oakmont Hearts"));
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_fixtures_artifact_has_empty_scores_when_scheduled() {
        let dir = scratch_dir("fixtures");
        let exporter = DatasetExporter::new(&dir).unwrap();

        let season = Season::new(2024);
        let clubs = vec![club(1, "Alpha"), club(2, "Beta")];
        let fixtures = Schedule::generate(&clubs, season).unwrap();

        let path = exporter.write_fixtures(season, &fixtures).unwrap();
        assert!(path.ends_with("matches_2024_25.csv"));

        let content = std::fs::read_to_string(path).unwrap();
        let first_row = content.lines().nth(1).unwrap();

        // Unplayed fixtures serialize with empty goal columns.
        assert!(first_row.contains(",,,scheduled") || first_row.ends_with("scheduled"));
    }
}
