use crate::club::Club;
use crate::error::{SimResult, SimulationError};
use crate::league::league::Season;
use crate::league::schedule::Fixture;
use std::collections::HashMap;

/// Results a club keeps in its rolling form window.
pub const FORM_WINDOW: usize = 5;

/// One club's line in the standings. Mutated incrementally while fixtures
/// fold in; `position` and `goal_difference` are only meaningful after
/// the table has been finalized.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueTableRow {
    pub season: Season,
    pub club_id: u32,
    pub club_name: String,

    pub position: u8,
    pub played: u8,
    pub won: u8,
    pub drawn: u8,
    pub lost: u8,
    pub goals_for: u16,
    pub goals_against: u16,
    pub goal_difference: i32,
    pub points: u16,

    /// Last results, oldest first, capped at [`FORM_WINDOW`] characters.
    pub form: String,

    pub home_wins: u8,
    pub home_draws: u8,
    pub home_losses: u8,
    pub away_wins: u8,
    pub away_draws: u8,
    pub away_losses: u8,
}

impl LeagueTableRow {
    fn new(season: Season, club: &Club) -> Self {
        LeagueTableRow {
            season,
            club_id: club.id,
            club_name: club.full_name.clone(),
            position: 0,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            form: String::new(),
            home_wins: 0,
            home_draws: 0,
            home_losses: 0,
            away_wins: 0,
            away_draws: 0,
            away_losses: 0,
        }
    }

    fn push_form(&mut self, result_code: char) {
        self.form.push(result_code);

        if self.form.len() > FORM_WINDOW {
            let excess = self.form.len() - FORM_WINDOW;
            self.form.drain(..excess);
        }
    }

    /// Form expressed on a 1-10 scale: the share of available points in the
    /// window, scaled. An empty window reads as a neutral 5.0.
    pub fn form_rating(&self) -> f32 {
        if self.form.is_empty() {
            return 5.0;
        }

        let points: u32 = self
            .form
            .chars()
            .map(|c| match c {
                'W' => 3,
                'D' => 1,
                _ => 0,
            })
            .sum();

        let max_points = (self.form.len() * 3) as f32;
        let rating = 1.0 + (points as f32 / max_points) * 9.0;

        (rating * 10.0).round() / 10.0
    }
}

/// The standings: insertion-ordered rows plus a club-id index. The
/// accumulation phase owns the table exclusively; ranking happens once, after
/// the last fixture, never incrementally.
#[derive(Debug, Clone)]
pub struct LeagueTable {
    rows: Vec<LeagueTableRow>,
    index: HashMap<u32, usize>,
}

impl LeagueTable {
    /// Zeroed rows for every club, in caller order.
    pub fn new(season: Season, clubs: &[Club]) -> Self {
        let rows: Vec<LeagueTableRow> = clubs
            .iter()
            .map(|club| LeagueTableRow::new(season, club))
            .collect();

        let index = rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.club_id, i))
            .collect();

        LeagueTable { rows, index }
    }

    /// Rebuilds a table from fixtures that already carry scores. Feeding the
    /// same completed fixture list twice yields byte-identical standings —
    /// the fold and the final sort are both deterministic.
    pub fn from_completed_fixtures(
        season: Season,
        clubs: &[Club],
        fixtures: &[Fixture],
    ) -> SimResult<LeagueTable> {
        let mut table = LeagueTable::new(season, clubs);

        for fixture in fixtures {
            let (home_goals, away_goals) = match (fixture.home_goals, fixture.away_goals) {
                (Some(h), Some(a)) => (h, a),
                _ => {
                    return Err(SimulationError::InvalidInput(format!(
                        "fixture {} has no recorded score",
                        fixture.id
                    )));
                }
            };

            table.apply_result(
                fixture.home_club_id,
                fixture.away_club_id,
                home_goals,
                away_goals,
            )?;
        }

        table.finalize();

        Ok(table)
    }

    /// Folds one result into the two participant rows: played and goal
    /// tallies move symmetrically, then W/D/L, points, the home/away splits
    /// and the form windows. No rollback path — the table is derived data and
    /// is regenerated from scratch on any failure.
    pub fn apply_result(
        &mut self,
        home_club_id: u32,
        away_club_id: u32,
        home_goals: u8,
        away_goals: u8,
    ) -> SimResult<()> {
        let home_idx = self.row_index(home_club_id)?;
        let away_idx = self.row_index(away_club_id)?;

        let (home_code, away_code) = if home_goals > away_goals {
            ('W', 'L')
        } else if home_goals < away_goals {
            ('L', 'W')
        } else {
            ('D', 'D')
        };

        {
            let home = &mut self.rows[home_idx];
            home.played += 1;
            home.goals_for += home_goals as u16;
            home.goals_against += away_goals as u16;

            match home_code {
                'W' => {
                    home.won += 1;
                    home.home_wins += 1;
                    home.points += 3;
                }
                'L' => {
                    home.lost += 1;
                    home.home_losses += 1;
                }
                _ => {
                    home.drawn += 1;
                    home.home_draws += 1;
                    home.points += 1;
                }
            }

            home.push_form(home_code);
        }

        {
            let away = &mut self.rows[away_idx];
            away.played += 1;
            away.goals_for += away_goals as u16;
            away.goals_against += home_goals as u16;

            match away_code {
                'W' => {
                    away.won += 1;
                    away.away_wins += 1;
                    away.points += 3;
                }
                'L' => {
                    away.lost += 1;
                    away.away_losses += 1;
                }
                _ => {
                    away.drawn += 1;
                    away.away_draws += 1;
                    away.points += 1;
                }
            }

            away.push_form(away_code);
        }

        Ok(())
    }

    /// Recomputes goal difference, orders rows by points, goal difference and
    /// goals scored (all descending; the sort is stable so deeper ties keep
    /// their accumulated order), and stamps 1-indexed positions.
    pub fn finalize(&mut self) {
        for row in &mut self.rows {
            row.goal_difference = row.goals_for as i32 - row.goals_against as i32;
        }

        self.rows.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(b.goal_difference.cmp(&a.goal_difference))
                .then(b.goals_for.cmp(&a.goals_for))
        });

        for (i, row) in self.rows.iter_mut().enumerate() {
            row.position = (i + 1) as u8;
        }

        self.index = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.club_id, i))
            .collect();
    }

    pub fn rows(&self) -> &[LeagueTableRow] {
        &self.rows
    }

    pub fn row_of(&self, club_id: u32) -> Option<&LeagueTableRow> {
        self.index.get(&club_id).map(|&i| &self.rows[i])
    }

    fn row_index(&self, club_id: u32) -> SimResult<usize> {
        self.index
            .get(&club_id)
            .copied()
            .ok_or(SimulationError::UnknownClub(club_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{ClubColors, ClubTier, Stadium};

    fn club(id: u32, name: &str) -> Club {
        Club {
            id,
            full_name: name.to_string(),
            short_name: name[..name.len().min(4)].to_uppercase(),
            city: name.to_string(),
            tier: ClubTier::Mid,
            founded_year: 1910,
            stadium: Stadium {
                name: format!("{} Arena", name),
                capacity: 25_000,
            },
            colors: ClubColors {
                primary: "Blue".into(),
                secondary: "White".into(),
            },
            annual_budget_millions: 60,
            reputation: 55,
            training_facility_rating: 10,
            youth_academy_rating: 10,
            preferred_formation: "4-3-3".into(),
            playing_style: "Possession".into(),
        }
    }

    fn two_club_table() -> LeagueTable {
        LeagueTable::new(Season::new(2024), &[club(1, "Alpha"), club(2, "Beta")])
    }

    #[test]
    fn test_home_win_updates_both_rows() {
        let mut table = two_club_table();
        table.apply_result(1, 2, 3, 1).unwrap();

        let home = table.row_of(1).unwrap();
        assert_eq!(home.played, 1);
        assert_eq!(home.won, 1);
        assert_eq!(home.home_wins, 1);
        assert_eq!(home.points, 3);
        assert_eq!(home.goals_for, 3);
        assert_eq!(home.goals_against, 1);
        assert_eq!(home.form, "W");

        let away = table.row_of(2).unwrap();
        assert_eq!(away.played, 1);
        assert_eq!(away.lost, 1);
        assert_eq!(away.away_losses, 1);
        assert_eq!(away.points, 0);
        assert_eq!(away.goals_for, 1);
        assert_eq!(away.goals_against, 3);
        assert_eq!(away.form, "L");
    }

    #[test]
    fn test_draw_awards_a_point_each() {
        let mut table = two_club_table();
        table.apply_result(1, 2, 2, 2).unwrap();

        let home = table.row_of(1).unwrap();
        let away = table.row_of(2).unwrap();

        assert_eq!(home.drawn, 1);
        assert_eq!(home.home_draws, 1);
        assert_eq!(home.points, 1);
        assert_eq!(away.drawn, 1);
        assert_eq!(away.away_draws, 1);
        assert_eq!(away.points, 1);
    }

    #[test]
    fn test_unknown_club_is_fatal() {
        let mut table = two_club_table();

        assert_eq!(
            table.apply_result(1, 99, 1, 0),
            Err(SimulationError::UnknownClub(99))
        );
    }

    #[test]
    fn test_form_window_never_exceeds_five() {
        let mut table = two_club_table();

        for i in 0..9u8 {
            table.apply_result(1, 2, i % 3, 1).unwrap();
            assert!(table.row_of(1).unwrap().form.len() <= FORM_WINDOW);
        }

        // Home results ran L D W L D W L D W; the window keeps the last five.
        assert_eq!(table.row_of(1).unwrap().form, "DWLDW");
        assert_eq!(table.row_of(2).unwrap().form, "DLWDL");
    }

    #[test]
    fn test_form_rating_scale() {
        let mut table = two_club_table();
        assert_eq!(table.row_of(1).unwrap().form_rating(), 5.0);

        for _ in 0..5 {
            table.apply_result(1, 2, 2, 0).unwrap();
        }

        // All wins → 10.0; all losses → 1.0.
        assert_eq!(table.row_of(1).unwrap().form_rating(), 10.0);
        assert_eq!(table.row_of(2).unwrap().form_rating(), 1.0);
    }

    #[test]
    fn test_finalize_orders_by_points_then_goal_difference_then_goals_for() {
        let clubs = vec![club(1, "Alpha"), club(2, "Beta"), club(3, "Gamma"), club(4, "Delta")];
        let mut table = LeagueTable::new(Season::new(2024), &clubs);

        // Alpha and Gamma both win by two, but Gamma scores more; Beta and
        // Delta both lose by two, Delta with the higher tally. Points and
        // goal difference tie within each pair, so goals scored decides.
        table.apply_result(1, 2, 2, 0).unwrap();
        table.apply_result(3, 4, 3, 1).unwrap();
        table.finalize();

        let order: Vec<u32> = table.rows().iter().map(|r| r.club_id).collect();
        assert_eq!(order, vec![3, 1, 4, 2]);

        let positions: Vec<u8> = table.rows().iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);

        assert_eq!(table.row_of(3).unwrap().goal_difference, 2);
        assert_eq!(table.row_of(4).unwrap().goal_difference, -2);
    }

    #[test]
    fn test_full_ties_keep_accumulation_order() {
        // Identical records all around: the stable sort must preserve the
        // original club order, so repeated runs agree.
        let clubs = vec![club(7, "Eta"), club(8, "Theta"), club(9, "Iota"), club(10, "Kappa")];
        let mut table = LeagueTable::new(Season::new(2024), &clubs);

        table.apply_result(7, 8, 1, 1).unwrap();
        table.apply_result(9, 10, 1, 1).unwrap();
        table.finalize();

        let order: Vec<u32> = table.rows().iter().map(|r| r.club_id).collect();
        assert_eq!(order, vec![7, 8, 9, 10]);
    }

    #[test]
    fn test_points_arithmetic_invariant() {
        let clubs = vec![club(1, "Alpha"), club(2, "Beta"), club(3, "Gamma"), club(4, "Delta")];
        let mut table = LeagueTable::new(Season::new(2024), &clubs);

        let results = [
            (1u32, 2u32, 2u8, 2u8),
            (3, 4, 1, 0),
            (1, 3, 0, 2),
            (2, 4, 4, 4),
            (4, 1, 1, 3),
            (2, 3, 0, 1),
        ];

        for (h, a, hg, ag) in results {
            table.apply_result(h, a, hg, ag).unwrap();
        }
        table.finalize();

        for row in table.rows() {
            assert_eq!(row.played, row.won + row.drawn + row.lost);
            assert_eq!(row.points, 3 * row.won as u16 + row.drawn as u16);
        }

        let goals_for: u32 = table.rows().iter().map(|r| r.goals_for as u32).sum();
        let goals_against: u32 = table.rows().iter().map(|r| r.goals_against as u32).sum();
        assert_eq!(goals_for, goals_against);
    }
}
