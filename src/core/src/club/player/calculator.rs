use crate::club::player::attributes::PlayerAttributes;
use crate::club::player::player::PositionGroup;
use rand::Rng;

pub struct OverallRatingCalculator;

impl OverallRatingCalculator {
    /// Position-weighted blend of the attribute blocks, rounded to one
    /// decimal. Weights per group sum to 1.0.
    pub fn calculate(attributes: &PlayerAttributes, group: PositionGroup) -> f32 {
        let p = &attributes.physical;
        let t = &attributes.technical;
        let m = &attributes.mental;

        let total = match group {
            PositionGroup::Goalkeeper => {
                t.diving as f32 * 0.20
                    + t.handling as f32 * 0.20
                    + t.reflexes as f32 * 0.20
                    + t.positioning as f32 * 0.15
                    + t.kicking as f32 * 0.10
                    + m.concentration as f32 * 0.10
                    + m.decision_making as f32 * 0.05
            }
            PositionGroup::Defender => {
                t.tackling as f32 * 0.20
                    + t.marking as f32 * 0.20
                    + m.positioning as f32 * 0.15
                    + t.heading as f32 * 0.15
                    + p.strength as f32 * 0.10
                    + p.pace as f32 * 0.10
                    + t.passing as f32 * 0.10
            }
            PositionGroup::Midfielder => {
                t.passing as f32 * 0.20
                    + t.ball_control as f32 * 0.18
                    + m.vision as f32 * 0.15
                    + p.stamina as f32 * 0.12
                    + t.dribbling as f32 * 0.12
                    + m.decision_making as f32 * 0.12
                    + t.tackling as f32 * 0.11
            }
            PositionGroup::Forward => {
                t.shooting as f32 * 0.22
                    + t.finishing as f32 * 0.22
                    + m.positioning as f32 * 0.15
                    + p.pace as f32 * 0.15
                    + t.dribbling as f32 * 0.12
                    + t.ball_control as f32 * 0.10
                    + m.composure as f32 * 0.04
            }
        };

        (total * 10.0).round() / 10.0
    }
}

pub struct MarketValueCalculator;

impl MarketValueCalculator {
    /// Monotonic rating/age/position valuation. The base grows linearly with
    /// rating, young players with a potential gap carry a premium, and
    /// attackers trade above keepers. Floor of 50_000.
    pub fn calculate(overall_rating: f32, age: u8, potential: f32, group: PositionGroup) -> u32 {
        let base_value = overall_rating as f64 * 100_000.0;

        let age_multiplier = determine_age_multiplier(age, overall_rating, potential);
        let position_multiplier = determine_position_multiplier(group);

        let value = (base_value * age_multiplier * position_multiplier) as u32;

        value.max(50_000)
    }
}

fn determine_age_multiplier(age: u8, overall_rating: f32, potential: f32) -> f64 {
    match age {
        a if a < 23 => 1.5 + (potential - overall_rating) as f64 / 50.0,
        23..=27 => 1.3,
        28..=30 => 1.0,
        31..=32 => 0.6,
        _ => 0.3,
    }
}

fn determine_position_multiplier(group: PositionGroup) -> f64 {
    match group {
        PositionGroup::Goalkeeper => 0.8,
        PositionGroup::Defender => 0.9,
        PositionGroup::Midfielder => 1.0,
        PositionGroup::Forward => 1.2,
    }
}

pub struct WeeklyWageCalculator;

impl WeeklyWageCalculator {
    /// Roughly 0.5-1% of market value per year, split over 52 weeks, with a
    /// rating-based minimum.
    pub fn calculate<R: Rng>(market_value: u32, overall_rating: f32, rng: &mut R) -> u32 {
        let annual_wage = market_value as f64 * rng.gen_range(0.005..0.01);
        let weekly_wage = (annual_wage / 52.0) as u32;

        let min_wage = (overall_rating * 100.0) as u32;

        weekly_wage.max(min_wage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn flat_attributes(value: u8) -> PlayerAttributes {
        PlayerAttributes {
            physical: crate::club::player::attributes::Physical {
                pace: value,
                strength: value,
                stamina: value,
            },
            technical: crate::club::player::attributes::Technical {
                diving: value,
                handling: value,
                kicking: value,
                reflexes: value,
                positioning: value,
                tackling: value,
                marking: value,
                heading: value,
                passing: value,
                ball_control: value,
                dribbling: value,
                shooting: value,
                finishing: value,
            },
            mental: crate::club::player::attributes::Mental {
                concentration: value,
                decision_making: value,
                leadership: value,
                positioning: value,
                vision: value,
                work_rate: value,
                composure: value,
            },
        }
    }

    #[test]
    fn test_flat_attributes_give_flat_rating() {
        // Weights sum to 1.0, so a uniform attribute sheet rates at exactly
        // that value for every group.
        let attributes = flat_attributes(70);

        for group in PositionGroup::ALL {
            assert_eq!(OverallRatingCalculator::calculate(&attributes, group), 70.0);
        }
    }

    #[test]
    fn test_market_value_monotonic_in_rating() {
        let low = MarketValueCalculator::calculate(60.0, 25, 65.0, PositionGroup::Midfielder);
        let high = MarketValueCalculator::calculate(80.0, 25, 85.0, PositionGroup::Midfielder);
        assert!(high > low);
    }

    #[test]
    fn test_market_value_forward_premium() {
        let keeper = MarketValueCalculator::calculate(75.0, 26, 78.0, PositionGroup::Goalkeeper);
        let striker = MarketValueCalculator::calculate(75.0, 26, 78.0, PositionGroup::Forward);
        assert!(striker > keeper);
    }

    #[test]
    fn test_market_value_floor() {
        let value = MarketValueCalculator::calculate(1.0, 38, 1.0, PositionGroup::Goalkeeper);
        assert_eq!(value, 50_000);
    }

    #[test]
    fn test_weekly_wage_minimum() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        // Tiny market value: the rating floor dominates.
        let wage = WeeklyWageCalculator::calculate(50_000, 70.0, &mut rng);
        assert_eq!(wage, 7_000);
    }
}
