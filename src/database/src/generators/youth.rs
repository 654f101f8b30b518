use crate::generators::player::PlayerGenerator;
use fdl_core::{
    Club, MarketValueCalculator, PositionGroup, Season, WeeklyWageCalculator, YouthProspect,
};
use rand::Rng;
use rand::seq::SliceRandom;

/// Prospects joining each club's academy for the season.
pub const PROSPECTS_PER_CLUB: usize = 5;

/// Potential bands for an intake: most prospects are ordinary, a few are
/// genuine talents.
const POTENTIAL_BANDS: &[((u8, u8), f32)] = &[
    ((50, 59), 0.40),
    ((60, 69), 0.40),
    ((70, 79), 0.15),
    ((80, 90), 0.05),
];

pub struct YouthAcademyGenerator;

impl YouthAcademyGenerator {
    /// An academy intake: players aged 16-17 in any position, current ability
    /// knocked well below first-team level, potential drawn from the banded
    /// distribution. Valuation is recomputed against the adjusted numbers.
    pub fn generate_for_club<R: Rng>(
        players: &mut PlayerGenerator,
        club: &Club,
        season: Season,
        rng: &mut R,
    ) -> Vec<YouthProspect> {
        (0..PROSPECTS_PER_CLUB)
            .map(|_| {
                let age = rng.gen_range(16..=17u8);
                let group = *PositionGroup::ALL.choose(rng).unwrap();

                let mut player = players.generate(club.id, group, Some(age), season, rng);

                player.overall_rating = (player.overall_rating - 15.0).max(40.0);
                player.potential = sample_potential(rng) as f32;

                player.market_value = MarketValueCalculator::calculate(
                    player.overall_rating,
                    player.age,
                    player.potential,
                    player.position_group,
                );
                player.weekly_wage =
                    WeeklyWageCalculator::calculate(player.market_value, player.overall_rating, rng);

                YouthProspect {
                    player,
                    entry_year: season.start_year(),
                }
            })
            .collect()
    }
}

fn sample_potential<R: Rng>(rng: &mut R) -> u8 {
    let total: f32 = POTENTIAL_BANDS.iter().map(|(_, w)| w).sum();
    let mut target = rng.gen_range(0.0..total);

    for ((lo, hi), weight) in POTENTIAL_BANDS {
        if target < *weight {
            return rng.gen_range(*lo..=*hi);
        }
        target -= weight;
    }

    let ((lo, hi), _) = POTENTIAL_BANDS[POTENTIAL_BANDS.len() - 1];
    rng.gen_range(lo..=hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdl_core::{ClubColors, ClubTier, Stadium};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn club() -> Club {
        Club {
            id: 3,
            full_name: "Frost Ridge Rovers".into(),
            short_name: "FRRO".into(),
            city: "Frost Ridge".into(),
            tier: ClubTier::Lower,
            founded_year: 1956,
            stadium: Stadium {
                name: "Frost Ridge Field".into(),
                capacity: 18_000,
            },
            colors: ClubColors {
                primary: "Black".into(),
                secondary: "White".into(),
            },
            annual_budget_millions: 30,
            reputation: 40,
            training_facility_rating: 7,
            youth_academy_rating: 8,
            preferred_formation: "4-4-2".into(),
            playing_style: "Defensive".into(),
        }
    }

    #[test]
    fn test_intake_shape() {
        let mut players = PlayerGenerator::with_start_id(50_000);
        let mut rng = ChaCha8Rng::seed_from_u64(51);

        let intake =
            YouthAcademyGenerator::generate_for_club(&mut players, &club(), Season::new(2024), &mut rng);

        assert_eq!(intake.len(), PROSPECTS_PER_CLUB);

        for prospect in &intake {
            assert!(prospect.player.age == 16 || prospect.player.age == 17);
            assert!(prospect.player.overall_rating >= 40.0);
            assert!(prospect.player.potential >= 50.0 && prospect.player.potential <= 90.0);
            assert_eq!(prospect.entry_year, 2024);
            assert!(prospect.player.id >= 50_000);
        }
    }
}
