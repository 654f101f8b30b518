use crate::club::{Club, Player};
use crate::error::SimResult;
use crate::league::league::Season;
use crate::league::schedule::Fixture;
use crate::league::table::LeagueTable;
use crate::r#match::{MatchSettings, ScoreSimulator};
use log::{debug, info};
use rand::Rng;
use std::collections::HashMap;

/// Roster-derived team strengths: the mean `overall_rating` of each club's
/// squad, the sole input to the outcome model. A club without players falls
/// back to a mid-table default so the strength floor never reaches zero.
#[derive(Debug, Clone)]
pub struct ClubStrengths {
    strengths: HashMap<u32, f32>,
}

impl ClubStrengths {
    pub const DEFAULT_STRENGTH: f32 = 65.0;

    pub fn from_rosters(clubs: &[Club], players: &[Player]) -> Self {
        let mut strengths = HashMap::with_capacity(clubs.len());

        for club in clubs {
            let ratings: Vec<f32> = players
                .iter()
                .filter(|p| p.club_id == club.id)
                .map(|p| p.overall_rating)
                .collect();

            let strength = if ratings.is_empty() {
                Self::DEFAULT_STRENGTH
            } else {
                ratings.iter().sum::<f32>() / ratings.len() as f32
            };

            strengths.insert(club.id, strength);
        }

        ClubStrengths { strengths }
    }

    pub fn with_strength(mut self, club_id: u32, strength: f32) -> Self {
        self.strengths.insert(club_id, strength);
        self
    }

    pub fn strength_of(&self, club_id: u32) -> SimResult<f32> {
        self.strengths
            .get(&club_id)
            .copied()
            .ok_or(crate::error::SimulationError::UnknownClub(club_id))
    }
}

/// Drives a fixture list through the outcome model and folds every result
/// into the standings. Fixtures are processed strictly in input order — the
/// form windows are order-sensitive — and the table is sorted and ranked
/// once, after the last fixture.
pub struct SeasonSimulator {
    score_simulator: ScoreSimulator,
}

impl SeasonSimulator {
    pub fn new(settings: MatchSettings) -> Self {
        SeasonSimulator {
            score_simulator: ScoreSimulator::new(settings),
        }
    }

    pub fn simulate<R: Rng>(
        &self,
        season: Season,
        clubs: &[Club],
        fixtures: &mut [Fixture],
        strengths: &ClubStrengths,
        rng: &mut R,
    ) -> SimResult<LeagueTable> {
        info!(
            "⚽ simulating season {}: {} fixtures, {} clubs",
            season,
            fixtures.len(),
            clubs.len()
        );

        let mut table = LeagueTable::new(season, clubs);

        for fixture in fixtures.iter_mut() {
            let home_strength = strengths.strength_of(fixture.home_club_id)?;
            let away_strength = strengths.strength_of(fixture.away_club_id)?;

            let (home_goals, away_goals) =
                self.score_simulator
                    .simulate(home_strength, away_strength, rng)?;

            table.apply_result(
                fixture.home_club_id,
                fixture.away_club_id,
                home_goals,
                away_goals,
            )?;

            fixture.complete(home_goals, away_goals);

            debug!(
                "  {} {} {}-{} {}",
                fixture.id, fixture.home_club_name, home_goals, away_goals, fixture.away_club_name
            );
        }

        table.finalize();

        if let Some(champion) = table.rows().first() {
            info!(
                "🏆 season {} complete, champions: {} ({} pts)",
                season, champion.club_name, champion.points
            );
        }

        Ok(table)
    }
}
