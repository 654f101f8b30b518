use crate::names;
use fdl_core::{Club, ClubColors, ClubTier, SimResult, SimulationError, Stadium};
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

pub struct ClubGenerator {
    used_cities: Vec<&'static str>,
}

impl ClubGenerator {
    pub fn new() -> Self {
        ClubGenerator {
            used_cities: Vec::new(),
        }
    }

    /// Generates the league's clubs: unique fantasy cities, tier by slot
    /// (top 25%, next 45%, bottom 30%), tier-keyed stadium/budget/reputation
    /// ranges. The returned list is sorted by reputation, strongest first.
    pub fn generate_all<R: Rng>(&mut self, num_clubs: usize, rng: &mut R) -> SimResult<Vec<Club>> {
        if num_clubs > names::FANTASY_CITIES.len() {
            return Err(SimulationError::InvalidInput(format!(
                "cannot seat {} clubs in {} cities",
                num_clubs,
                names::FANTASY_CITIES.len()
            )));
        }

        let mut clubs: Vec<Club> = (1..=num_clubs)
            .map(|slot| self.generate(slot as u32, ClubTier::from_slot(slot, num_clubs), rng))
            .collect();

        clubs.sort_by(|a, b| b.reputation.cmp(&a.reputation));

        debug!("🏟️ generated {} clubs across {} cities", clubs.len(), self.used_cities.len());

        Ok(clubs)
    }

    fn generate<R: Rng>(&mut self, id: u32, tier: ClubTier, rng: &mut R) -> Club {
        let city = self.pick_city(rng);
        let suffix = *names::CLUB_SUFFIXES.choose(rng).unwrap();

        let full_name = format!("{} {}", city, suffix);
        let short_name = build_short_name(city, suffix);

        let (capacity_range, budget_range, reputation_range, facility_range) = tier_ranges(tier);

        let stadium = Stadium {
            name: generate_stadium_name(city, rng),
            capacity: rng.gen_range(capacity_range),
        };

        let (primary, secondary) = *names::COLOR_PAIRS.choose(rng).unwrap();

        Club {
            id,
            full_name,
            short_name,
            city: city.to_string(),
            tier,
            founded_year: rng.gen_range(1880..=2010),
            stadium,
            colors: ClubColors {
                primary: primary.to_string(),
                secondary: secondary.to_string(),
            },
            annual_budget_millions: rng.gen_range(budget_range),
            reputation: rng.gen_range(reputation_range),
            training_facility_rating: rng.gen_range(facility_range.clone()),
            youth_academy_rating: rng.gen_range(facility_range),
            preferred_formation: names::FORMATIONS.choose(rng).unwrap().to_string(),
            playing_style: names::PLAYING_STYLES.choose(rng).unwrap().to_string(),
        }
    }

    fn pick_city<R: Rng>(&mut self, rng: &mut R) -> &'static str {
        let available: Vec<&'static str> = names::FANTASY_CITIES
            .iter()
            .copied()
            .filter(|city| !self.used_cities.contains(city))
            .collect();

        let city = *available.choose(rng).unwrap();
        self.used_cities.push(city);
        city
    }
}

type Ranges = (
    std::ops::RangeInclusive<u32>,
    std::ops::RangeInclusive<u16>,
    std::ops::RangeInclusive<u8>,
    std::ops::RangeInclusive<u8>,
);

/// (stadium capacity, annual budget in millions, reputation, facility rating)
fn tier_ranges(tier: ClubTier) -> Ranges {
    match tier {
        ClubTier::Top => (45_000..=75_000, 150..=300, 75..=95, 15..=20),
        ClubTier::Mid => (25_000..=44_999, 50..=149, 50..=74, 10..=14),
        ClubTier::Lower => (15_000..=24_999, 20..=49, 30..=49, 5..=9),
    }
}

/// Four-letter code: city initials plus a slice of the suffix. Suffixes that
/// read as standalone tokens (FC, Athletic) contribute a single letter.
fn build_short_name(city: &str, suffix: &str) -> String {
    let initials: String = city
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();

    let tail: String = if suffix.contains("FC") || suffix.contains("Athletic") {
        suffix.chars().take(1).collect()
    } else {
        suffix.chars().take(3).collect()
    };

    format!("{}{}", initials, tail)
        .to_uppercase()
        .chars()
        .take(4)
        .collect()
}

fn generate_stadium_name<R: Rng>(city: &str, rng: &mut R) -> String {
    let stadium_type = *names::STADIUM_TYPES.choose(rng).unwrap();

    if rng.gen_bool(0.5) {
        format!("{} {}", city, stadium_type)
    } else {
        format!("{} {}", names::STADIUM_DESCRIPTORS.choose(rng).unwrap(), stadium_type)
    }
}
