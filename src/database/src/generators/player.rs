use crate::names;
use fdl_core::utils::DateUtils;
use fdl_core::{
    CareerTotals, Club, ClubTier, FullName, MarketValueCalculator, Mental,
    OverallRatingCalculator, Physical, Player, PlayerAttributes, Position, PositionGroup,
    PreferredFoot, Season, Technical, Temperament, WeeklyWageCalculator,
};
use rand::Rng;
use rand::seq::SliceRandom;

/// Attribute band for the fields a position does not emphasize; the
/// position-specific ranges below land well above it.
const OFF_ROLE_RANGE: (u8, u8) = (20, 55);

/// Weighted age bands for freshly generated squads.
const AGE_BANDS: &[((u8, u8), f32)] = &[
    ((16, 20), 0.20),
    ((21, 24), 0.25),
    ((25, 29), 0.40),
    ((30, 33), 0.12),
    ((34, 38), 0.03),
];

pub struct PlayerGenerator {
    next_id: u32,
}

impl PlayerGenerator {
    pub fn new() -> Self {
        PlayerGenerator { next_id: 1 }
    }

    /// Separate id range, e.g. for academy intakes that must not collide
    /// with first-team ids.
    pub fn with_start_id(start_id: u32) -> Self {
        PlayerGenerator { next_id: start_id }
    }

    /// A full squad for one club: position counts drawn from the squad
    /// composition config, ratings shifted by club tier, jersey numbers
    /// assigned with the keeper-friendly low numbers reserved.
    pub fn generate_squad<R: Rng>(
        &mut self,
        club: &Club,
        season: Season,
        rng: &mut R,
    ) -> Vec<Player> {
        let composition = [
            (PositionGroup::Goalkeeper, rng.gen_range(2..=3usize)),
            (PositionGroup::Defender, rng.gen_range(7..=9usize)),
            (PositionGroup::Midfielder, rng.gen_range(7..=9usize)),
            (PositionGroup::Forward, rng.gen_range(5..=6usize)),
        ];

        let mut players = Vec::with_capacity(30);

        for (group, count) in composition {
            for _ in 0..count {
                let mut player = self.generate(club.id, group, None, season, rng);
                apply_tier_adjustment(&mut player, club.tier, rng);
                players.push(player);
            }
        }

        assign_jersey_numbers(&mut players, rng);

        players
    }

    /// One player. Age is drawn from the squad age distribution unless the
    /// caller pins it (academy intakes do).
    pub fn generate<R: Rng>(
        &mut self,
        club_id: u32,
        group: PositionGroup,
        age: Option<u8>,
        season: Season,
        rng: &mut R,
    ) -> Player {
        let age = age.unwrap_or_else(|| sample_age(rng));

        let nationality = names::random_nationality(rng).to_string();
        let full_name = FullName::new(names::random_first_name(rng), names::random_last_name(rng));

        let primary_position = primary_position_for(group, rng);
        let secondary_positions = secondary_positions_for(primary_position, rng);

        let attributes = PlayerAttributes {
            physical: sample_physical(group, age, rng),
            technical: sample_technical(group, age, rng),
            mental: sample_mental(group, age, rng),
        };

        let overall_rating = OverallRatingCalculator::calculate(&attributes, group);
        let potential = sample_potential(overall_rating, age, rng);

        let height_cm = sample_height(group, rng);
        let weight_kg = (height_cm as f32 * rng.gen_range(0.38..0.44)) as u8;

        let market_value = MarketValueCalculator::calculate(overall_rating, age, potential, group);
        let weekly_wage = WeeklyWageCalculator::calculate(market_value, overall_rating, rng);

        let birth_date = sample_birth_date(age, season, rng);

        let id = self.next_id;
        self.next_id += 1;

        Player {
            id,
            club_id,
            full_name,
            nationality,
            birth_date,
            age,
            height_cm,
            weight_kg,
            preferred_foot: sample_preferred_foot(rng),
            position_group: group,
            primary_position,
            secondary_positions,
            attributes,
            overall_rating,
            potential,
            contract_years_remaining: rng.gen_range(1..=5),
            market_value,
            weekly_wage,
            current_form: (rng.gen_range(5.0..8.5f32) * 10.0).round() / 10.0,
            fitness_level: rng.gen_range(85..=100),
            morale: rng.gen_range(12..=18),
            injury_status: String::from("Healthy"),
            leadership: rng.gen_range(1..=20),
            professionalism: rng.gen_range(1..=20),
            temperament: *[
                Temperament::Calm,
                Temperament::Balanced,
                Temperament::Aggressive,
            ]
            .choose(rng)
            .unwrap(),
            consistency: rng.gen_range(1..=20),
            injury_proneness: rng.gen_range(1..=20),
            career: CareerTotals::zeroed(group),
            jersey_number: 0,
        }
    }
}

/// Tier shifts the whole squad's quality band: ±8 rating points, with market
/// value and wage recomputed against the shifted numbers.
fn apply_tier_adjustment<R: Rng>(player: &mut Player, tier: ClubTier, rng: &mut R) {
    let adjustment: f32 = match tier {
        ClubTier::Top => 8.0,
        ClubTier::Mid => 0.0,
        ClubTier::Lower => -8.0,
    };

    if adjustment != 0.0 {
        player.overall_rating = (player.overall_rating + adjustment).clamp(0.0, 100.0);
        player.potential = (player.potential + adjustment).clamp(0.0, 100.0);

        player.market_value = MarketValueCalculator::calculate(
            player.overall_rating,
            player.age,
            player.potential,
            player.position_group,
        );
        player.weekly_wage =
            WeeklyWageCalculator::calculate(player.market_value, player.overall_rating, rng);
    }
}

/// Shuffled 1-99 pool, with the traditional keeper numbers carved out and
/// handed to the goalkeepers first.
fn assign_jersey_numbers<R: Rng>(players: &mut [Player], rng: &mut R) {
    const KEEPER_NUMBERS: [u8; 5] = [1, 12, 13, 22, 25];

    let mut pool: Vec<u8> = (1..=99u8)
        .filter(|n| !KEEPER_NUMBERS.contains(n))
        .collect();
    pool.shuffle(rng);

    let mut keeper_numbers = KEEPER_NUMBERS.iter();

    for player in players.iter_mut() {
        let number = if player.position_group == PositionGroup::Goalkeeper {
            keeper_numbers.next().copied()
        } else {
            None
        };

        player.jersey_number = number.unwrap_or_else(|| pool.pop().expect("jersey pool exhausted"));
    }
}

fn sample_age<R: Rng>(rng: &mut R) -> u8 {
    let total: f32 = AGE_BANDS.iter().map(|(_, w)| w).sum();
    let mut target = rng.gen_range(0.0..total);

    for ((lo, hi), weight) in AGE_BANDS {
        if target < *weight {
            return rng.gen_range(*lo..=*hi);
        }
        target -= weight;
    }

    let ((lo, hi), _) = AGE_BANDS[AGE_BANDS.len() - 1];
    rng.gen_range(lo..=hi)
}

fn sample_birth_date<R: Rng>(age: u8, season: Season, rng: &mut R) -> chrono::NaiveDate {
    let birth_year = season.start_year() - age as i32;
    let month = rng.gen_range(1..=12u32);
    let day = rng.gen_range(1..=DateUtils::days_in_month(month));

    chrono::NaiveDate::from_ymd_opt(birth_year, month, day).expect("valid birth date")
}

fn sample_preferred_foot<R: Rng>(rng: &mut R) -> PreferredFoot {
    let roll: f32 = rng.gen_range(0.0..1.0);

    if roll < 0.70 {
        PreferredFoot::Right
    } else if roll < 0.95 {
        PreferredFoot::Left
    } else {
        PreferredFoot::Both
    }
}

fn sample_height<R: Rng>(group: PositionGroup, rng: &mut R) -> u8 {
    let (lo, hi) = match group {
        PositionGroup::Goalkeeper => (185, 200),
        PositionGroup::Defender => (178, 195),
        PositionGroup::Midfielder => (170, 185),
        PositionGroup::Forward => (170, 190),
    };

    rng.gen_range(lo..=hi)
}

fn primary_position_for<R: Rng>(group: PositionGroup, rng: &mut R) -> Position {
    let pool: &[Position] = match group {
        PositionGroup::Goalkeeper => &[Position::Gk],
        PositionGroup::Defender => &[Position::Cb, Position::Lb, Position::Rb],
        PositionGroup::Midfielder => &[
            Position::Cdm,
            Position::Cm,
            Position::Cam,
            Position::Lm,
            Position::Rm,
        ],
        PositionGroup::Forward => &[Position::Lw, Position::Rw, Position::St],
    };

    *pool.choose(rng).unwrap()
}

fn compatible_positions(primary: Position) -> &'static [Position] {
    match primary {
        Position::Gk => &[],
        Position::Cb => &[Position::Rb, Position::Lb, Position::Cdm],
        Position::Lb => &[Position::Cb, Position::Lwb, Position::Lm],
        Position::Rb => &[Position::Cb, Position::Rwb, Position::Rm],
        Position::Cdm => &[Position::Cm, Position::Cb],
        Position::Cm => &[Position::Cdm, Position::Cam, Position::Rm, Position::Lm],
        Position::Cam => &[Position::Cm, Position::Lw, Position::Rw],
        Position::Lm => &[Position::Lw, Position::Cm, Position::Lb],
        Position::Rm => &[Position::Rw, Position::Cm, Position::Rb],
        Position::Lw => &[Position::Lm, Position::St, Position::Cam],
        Position::Rw => &[Position::Rm, Position::St, Position::Cam],
        Position::St => &[Position::Cf, Position::Lw, Position::Rw, Position::Cam],
        _ => &[],
    }
}

fn secondary_positions_for<R: Rng>(primary: Position, rng: &mut R) -> Vec<Position> {
    let compatible = compatible_positions(primary);
    if compatible.is_empty() {
        return Vec::new();
    }

    // 20% none, 60% one, 20% two.
    let roll: f32 = rng.gen_range(0.0..1.0);
    let count = if roll < 0.2 {
        0
    } else if roll < 0.8 {
        1
    } else {
        2
    };

    compatible
        .choose_multiple(rng, count.min(compatible.len()))
        .copied()
        .collect()
}

fn sample<R: Rng>(rng: &mut R, (lo, hi): (u8, u8), adjustment: i32) -> u8 {
    let base = rng.gen_range(lo..=hi) as i32;
    (base + adjustment).clamp(0, 100) as u8
}

/// Physical peak sits at 21-30; pace and stamina fall away hardest with age.
fn physical_adjustment<R: Rng>(age: u8, pace_or_stamina: bool, rng: &mut R) -> i32 {
    match age {
        a if a < 21 => rng.gen_range(-5..=0),
        21..=27 => rng.gen_range(0..=3),
        28..=30 => 0,
        31..=33 => {
            if pace_or_stamina {
                rng.gen_range(-5..=-2)
            } else {
                rng.gen_range(-2..=0)
            }
        }
        _ => {
            if pace_or_stamina {
                rng.gen_range(-10..=-5)
            } else {
                rng.gen_range(-5..=-2)
            }
        }
    }
}

/// Technique grows with experience and decays slowly.
fn technical_adjustment<R: Rng>(age: u8, rng: &mut R) -> i32 {
    match age {
        a if a < 21 => rng.gen_range(-3..=0),
        21..=30 => rng.gen_range(0..=2),
        31..=33 => 0,
        _ => rng.gen_range(-2..=0),
    }
}

/// Mental attributes peak late.
fn mental_adjustment<R: Rng>(age: u8, rng: &mut R) -> i32 {
    match age {
        a if a < 21 => rng.gen_range(-5..=0),
        21..=25 => rng.gen_range(0..=2),
        26..=32 => rng.gen_range(2..=5),
        _ => rng.gen_range(0..=3),
    }
}

fn sample_physical<R: Rng>(group: PositionGroup, age: u8, rng: &mut R) -> Physical {
    let (pace, strength, stamina) = match group {
        PositionGroup::Goalkeeper => ((30, 60), (50, 85), (60, 90)),
        PositionGroup::Defender => ((40, 85), (60, 95), (60, 90)),
        PositionGroup::Midfielder => ((50, 90), (45, 80), (65, 95)),
        PositionGroup::Forward => ((60, 95), (45, 90), (55, 90)),
    };

    let mut draw = |range: (u8, u8), pace_or_stamina: bool| {
        let adjustment = physical_adjustment(age, pace_or_stamina, rng);
        sample(rng, range, adjustment)
    };

    Physical {
        pace: draw(pace, true),
        strength: draw(strength, false),
        stamina: draw(stamina, true),
    }
}

fn sample_technical<R: Rng>(group: PositionGroup, age: u8, rng: &mut R) -> Technical {
    let off = OFF_ROLE_RANGE;

    // (diving, handling, kicking, reflexes, positioning, tackling, marking,
    //  heading, passing, ball_control, dribbling, shooting, finishing)
    let ranges: [(u8, u8); 13] = match group {
        PositionGroup::Goalkeeper => [
            (40, 95),
            (40, 95),
            (30, 85),
            (40, 95),
            (40, 90),
            off,
            off,
            off,
            off,
            off,
            off,
            off,
            off,
        ],
        PositionGroup::Defender => [
            off,
            off,
            off,
            off,
            off,
            (50, 95),
            (50, 95),
            (50, 95),
            (40, 85),
            (35, 80),
            off,
            off,
            off,
        ],
        PositionGroup::Midfielder => [
            off,
            off,
            off,
            off,
            off,
            (35, 85),
            off,
            off,
            (50, 95),
            (50, 95),
            (45, 90),
            (35, 85),
            off,
        ],
        PositionGroup::Forward => [
            off,
            off,
            off,
            off,
            off,
            off,
            off,
            (40, 85),
            off,
            (50, 90),
            (50, 95),
            (50, 95),
            (50, 95),
        ],
    };

    let mut draw = |range: (u8, u8)| {
        let adjustment = technical_adjustment(age, rng);
        sample(rng, range, adjustment)
    };

    Technical {
        diving: draw(ranges[0]),
        handling: draw(ranges[1]),
        kicking: draw(ranges[2]),
        reflexes: draw(ranges[3]),
        positioning: draw(ranges[4]),
        tackling: draw(ranges[5]),
        marking: draw(ranges[6]),
        heading: draw(ranges[7]),
        passing: draw(ranges[8]),
        ball_control: draw(ranges[9]),
        dribbling: draw(ranges[10]),
        shooting: draw(ranges[11]),
        finishing: draw(ranges[12]),
    }
}

fn sample_mental<R: Rng>(group: PositionGroup, age: u8, rng: &mut R) -> Mental {
    let off = OFF_ROLE_RANGE;

    // (concentration, decision_making, leadership, positioning, vision,
    //  work_rate, composure)
    let ranges: [(u8, u8); 7] = match group {
        PositionGroup::Goalkeeper => [(40, 90), (40, 85), (30, 90), off, off, off, off],
        PositionGroup::Defender => [(50, 90), (40, 85), off, (50, 95), off, off, off],
        PositionGroup::Midfielder => [off, (50, 90), off, off, (45, 95), (50, 95), off],
        PositionGroup::Forward => [off, (40, 85), off, (50, 95), off, off, (45, 90)],
    };

    let mut draw = |range: (u8, u8)| {
        let adjustment = mental_adjustment(age, rng);
        sample(rng, range, adjustment)
    };

    Mental {
        concentration: draw(ranges[0]),
        decision_making: draw(ranges[1]),
        leadership: draw(ranges[2]),
        positioning: draw(ranges[3]),
        vision: draw(ranges[4]),
        work_rate: draw(ranges[5]),
        composure: draw(ranges[6]),
    }
}

/// Young players carry the widest upside; past 30 the ceiling sits at, or
/// below, the current level.
fn sample_potential<R: Rng>(overall_rating: f32, age: u8, rng: &mut R) -> f32 {
    let delta: f32 = match age {
        a if a < 21 => rng.gen_range(10.0..25.0),
        21..=24 => rng.gen_range(5.0..15.0),
        25..=27 => rng.gen_range(2.0..8.0),
        28..=29 => rng.gen_range(0.0..3.0),
        _ => rng.gen_range(-5.0..2.0),
    };

    (overall_rating + delta).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdl_core::{ClubColors, Stadium};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn club(tier: ClubTier) -> Club {
        Club {
            id: 1,
            full_name: "Stormwind United".into(),
            short_name: "SUNI".into(),
            city: "Stormwind".into(),
            tier,
            founded_year: 1899,
            stadium: Stadium {
                name: "Stormwind Arena".into(),
                capacity: 50_000,
            },
            colors: ClubColors {
                primary: "Red".into(),
                secondary: "White".into(),
            },
            annual_budget_millions: 200,
            reputation: 85,
            training_facility_rating: 18,
            youth_academy_rating: 17,
            preferred_formation: "4-3-3".into(),
            playing_style: "High Pressing".into(),
        }
    }

    #[test]
    fn test_squad_composition_bounds() {
        let mut generator = PlayerGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(31);

        let squad = generator.generate_squad(&club(ClubTier::Mid), Season::new(2024), &mut rng);

        let count = |g: PositionGroup| squad.iter().filter(|p| p.position_group == g).count();

        assert!((2..=3).contains(&count(PositionGroup::Goalkeeper)));
        assert!((7..=9).contains(&count(PositionGroup::Defender)));
        assert!((7..=9).contains(&count(PositionGroup::Midfielder)));
        assert!((5..=6).contains(&count(PositionGroup::Forward)));
        assert!(squad.len() >= 21 && squad.len() <= 27);
    }

    #[test]
    fn test_player_fields_within_bounds() {
        let mut generator = PlayerGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(32);

        let squad = generator.generate_squad(&club(ClubTier::Top), Season::new(2024), &mut rng);

        for player in &squad {
            assert!(player.overall_rating >= 0.0 && player.overall_rating <= 100.0);
            assert!(player.potential >= 0.0 && player.potential <= 100.0);
            assert!(player.age >= 16 && player.age <= 38);
            assert!(player.market_value >= 50_000);
            assert!(player.jersey_number >= 1 && player.jersey_number <= 99);
            assert!((1..=5).contains(&player.contract_years_remaining));
            assert_eq!(player.primary_position.group(), player.position_group);
        }

        // Unique ids and jersey numbers inside one squad.
        let mut ids: Vec<u32> = squad.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), squad.len());

        let mut numbers: Vec<u8> = squad.iter().map(|p| p.jersey_number).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), squad.len());
    }

    #[test]
    fn test_tier_shifts_squad_quality() {
        let season = Season::new(2024);

        let mut generator = PlayerGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(33);
        let top_squad = generator.generate_squad(&club(ClubTier::Top), season, &mut rng);

        let mut rng = ChaCha8Rng::seed_from_u64(33);
        let lower_squad = generator.generate_squad(&club(ClubTier::Lower), season, &mut rng);

        let mean = |squad: &[Player]| {
            squad.iter().map(|p| p.overall_rating).sum::<f32>() / squad.len() as f32
        };

        // Same seed, same draws; only the tier adjustment differs (±8).
        assert!(mean(&top_squad) > mean(&lower_squad) + 10.0);
    }

    #[test]
    fn test_goalkeepers_take_reserved_numbers() {
        let mut generator = PlayerGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(34);

        let squad = generator.generate_squad(&club(ClubTier::Mid), Season::new(2024), &mut rng);

        for player in squad.iter().filter(|p| p.position_group == PositionGroup::Goalkeeper) {
            assert!([1u8, 12, 13, 22, 25].contains(&player.jersey_number));
        }
    }

    #[test]
    fn test_birth_date_matches_age() {
        let mut generator = PlayerGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(35);
        let season = Season::new(2024);

        let player = generator.generate(1, PositionGroup::Midfielder, Some(24), season, &mut rng);

        assert_eq!(player.age, 24);
        assert_eq!(player.birth_date.format("%Y").to_string(), "2000");
    }
}
