use crate::error::{SimResult, SimulationError};
use rand::Rng;
use rand_distr::{Distribution, Poisson};

/// Scoreline model parameters. The goal budget is the league-wide average
/// total goals per match that gets split between the sides.
#[derive(Debug, Clone, Copy)]
pub struct MatchSettings {
    pub home_advantage: f32,
    pub goals_per_match_avg: f32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        MatchSettings {
            home_advantage: 0.15,
            goals_per_match_avg: 2.7,
        }
    }
}

/// Stateless, memoryless scoreline model: home advantage scales the home
/// strength multiplicatively, the goal budget is split in proportion to the
/// adjusted strength share, and each side's goal count is an independent
/// Poisson draw on its expected-goals value.
///
/// Precondition: at least one side has positive strength. Roster-derived
/// strengths always clear a floor, so a zero total only reaches this code on
/// a broken configuration and is rejected as such.
#[derive(Debug, Clone, Copy)]
pub struct ScoreSimulator {
    settings: MatchSettings,
}

impl ScoreSimulator {
    pub fn new(settings: MatchSettings) -> Self {
        ScoreSimulator { settings }
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub fn simulate<R: Rng>(
        &self,
        home_strength: f32,
        away_strength: f32,
        rng: &mut R,
    ) -> SimResult<(u8, u8)> {
        let adjusted_home = home_strength * (1.0 + self.settings.home_advantage);
        let total_strength = adjusted_home + away_strength;

        if total_strength <= 0.0 {
            return Err(SimulationError::ConfigurationDefect(String::from(
                "both sides have zero strength, cannot split the goal budget",
            )));
        }

        let home_xg = (adjusted_home / total_strength) * self.settings.goals_per_match_avg;
        let away_xg = (away_strength / total_strength) * self.settings.goals_per_match_avg;

        let home_goals = poisson_draw(home_xg as f64, rng);
        let away_goals = poisson_draw(away_xg as f64, rng);

        Ok((home_goals, away_goals))
    }
}

fn poisson_draw<R: Rng>(lambda: f64, rng: &mut R) -> u8 {
    if lambda <= 0.0 {
        return 0;
    }

    // Valid by the lambda > 0 check above.
    let distribution = Poisson::new(lambda).unwrap();
    let draw: f64 = distribution.sample(rng);

    draw.min(u8::MAX as f64) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_zero_strength_is_rejected() {
        let simulator = ScoreSimulator::new(MatchSettings::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = simulator.simulate(0.0, 0.0, &mut rng);
        assert!(matches!(
            result,
            Err(SimulationError::ConfigurationDefect(_))
        ));
    }

    #[test]
    fn test_one_sided_strength_blanks_the_other_side() {
        let simulator = ScoreSimulator::new(MatchSettings::default());
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        for _ in 0..200 {
            let (_, away) = simulator.simulate(70.0, 0.0, &mut rng).unwrap();
            assert_eq!(away, 0);
        }
    }

    #[test]
    fn test_equal_strengths_split_the_goal_budget_evenly() {
        // With no home advantage both means converge on half of 2.7.
        let simulator = ScoreSimulator::new(MatchSettings {
            home_advantage: 0.0,
            goals_per_match_avg: 2.7,
        });
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let draws = 20_000;
        let mut home_total: u64 = 0;
        let mut away_total: u64 = 0;

        for _ in 0..draws {
            let (home, away) = simulator.simulate(70.0, 70.0, &mut rng).unwrap();
            home_total += home as u64;
            away_total += away as u64;
        }

        let home_mean = home_total as f64 / draws as f64;
        let away_mean = away_total as f64 / draws as f64;

        assert!((home_mean - 1.35).abs() < 0.05, "home mean {}", home_mean);
        assert!((away_mean - 1.35).abs() < 0.05, "away mean {}", away_mean);
    }

    #[test]
    fn test_strong_home_side_outscores_weak_visitors() {
        let simulator = ScoreSimulator::new(MatchSettings::default());
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let draws = 10_000;
        let mut home_total: u64 = 0;
        let mut away_total: u64 = 0;

        for _ in 0..draws {
            let (home, away) = simulator.simulate(80.0, 40.0, &mut rng).unwrap();
            home_total += home as u64;
            away_total += away as u64;
        }

        assert!(home_total > away_total);
    }
}
