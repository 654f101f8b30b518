use crate::club::Club;
use crate::error::{SimResult, SimulationError};
use crate::league::league::Season;
use crate::shared::entity_code;
use chrono::{Duration, NaiveDate};
use itertools::Itertools;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureStatus {
    Scheduled,
    Completed,
}

impl FixtureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixtureStatus::Scheduled => "scheduled",
            FixtureStatus::Completed => "completed",
        }
    }
}

/// One league match. Created `Scheduled` with empty scores; the season
/// simulator is the only writer of the goals and transitions each fixture to
/// `Completed` exactly once.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub id: String,
    pub season: Season,
    pub matchday: u8,
    pub date: NaiveDate,

    pub home_club_id: u32,
    pub home_club_name: String,
    pub away_club_id: u32,
    pub away_club_name: String,

    pub home_goals: Option<u8>,
    pub away_goals: Option<u8>,
    pub status: FixtureStatus,
}

impl Fixture {
    pub fn complete(&mut self, home_goals: u8, away_goals: u8) {
        self.home_goals = Some(home_goals);
        self.away_goals = Some(away_goals);
        self.status = FixtureStatus::Completed;
    }

    pub fn is_completed(&self) -> bool {
        self.status == FixtureStatus::Completed
    }
}

pub struct Schedule;

impl Schedule {
    /// Full double round-robin for the given clubs: one pass over all
    /// unordered pairs with the lower index at home, then the same pass with
    /// home and away swapped. N clubs yield exactly N*(N-1) fixtures, every
    /// ordered pair appearing once.
    ///
    /// Matchday and date are advance-only metadata: fixtures are chunked into
    /// matchdays of N/2 on a weekly cadence from the season kickoff. Club ids
    /// must be unique; duplicates are a caller contract violation.
    pub fn generate(clubs: &[Club], season: Season) -> SimResult<Vec<Fixture>> {
        if clubs.len() < 2 {
            return Err(SimulationError::InvalidInput(format!(
                "cannot build a round-robin for {} club(s)",
                clubs.len()
            )));
        }

        if clubs.len() % 2 != 0 {
            return Err(SimulationError::InvalidInput(format!(
                "round-robin requires an even club count, got {}",
                clubs.len()
            )));
        }

        let matches_per_matchday = clubs.len() / 2;
        let kickoff = season.kickoff_date();

        let mut fixtures = Vec::with_capacity(clubs.len() * (clubs.len() - 1));
        let mut match_id = 1u32;

        for leg in 0..2 {
            for (i, j) in (0..clubs.len()).tuple_combinations() {
                let (home, away) = if leg == 0 {
                    (&clubs[i], &clubs[j])
                } else {
                    (&clubs[j], &clubs[i])
                };

                let matchday = (fixtures.len() / matches_per_matchday) as u8 + 1;
                let date = kickoff + Duration::weeks(matchday as i64 - 1);

                fixtures.push(Fixture {
                    id: entity_code("MTH", match_id),
                    season,
                    matchday,
                    date,
                    home_club_id: home.id,
                    home_club_name: home.full_name.clone(),
                    away_club_id: away.id,
                    away_club_name: away.full_name.clone(),
                    home_goals: None,
                    away_goals: None,
                    status: FixtureStatus::Scheduled,
                });

                match_id += 1;
            }
        }

        debug!(
            "📅 schedule: {} fixtures over {} matchdays for season {}",
            fixtures.len(),
            fixtures.last().map(|f| f.matchday).unwrap_or(0),
            season
        );

        Ok(fixtures)
    }
}
