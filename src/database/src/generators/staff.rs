use crate::names;
use fdl_core::{Club, ClubTier, FullName, StaffMember, StaffRole};
use rand::Rng;

pub struct StaffGenerator {
    next_id: u32,
}

impl StaffGenerator {
    pub fn new() -> Self {
        StaffGenerator { next_id: 1 }
    }

    /// One manager plus the four specialist coaches, with quality ranges
    /// keyed to the club's tier. Ids are a single sequence across every club.
    pub fn generate_for_club<R: Rng>(&mut self, club: &Club, rng: &mut R) -> Vec<StaffMember> {
        let quality = quality_range(club.tier);

        let mut staff = Vec::with_capacity(5);

        staff.push(StaffMember {
            id: self.take_id(),
            club_id: club.id,
            role: StaffRole::Manager,
            full_name: random_name(rng),
            nationality: names::random_nationality(rng).to_string(),
            age: rng.gen_range(35..=70),
            tactical_rating: Some(rng.gen_range(quality.clone())),
            man_management_rating: Some(rng.gen_range(quality.clone())),
            specialization_rating: None,
            contract_years: rng.gen_range(2..=4),
        });

        for role in StaffRole::COACHES {
            staff.push(StaffMember {
                id: self.take_id(),
                club_id: club.id,
                role,
                full_name: random_name(rng),
                nationality: names::random_nationality(rng).to_string(),
                age: rng.gen_range(30..=65),
                tactical_rating: None,
                man_management_rating: None,
                specialization_rating: Some(rng.gen_range(quality.clone())),
                contract_years: rng.gen_range(1..=3),
            });
        }

        staff
    }

    fn take_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn quality_range(tier: ClubTier) -> std::ops::RangeInclusive<u8> {
    match tier {
        ClubTier::Top => 15..=20,
        ClubTier::Mid => 10..=14,
        ClubTier::Lower => 5..=9,
    }
}

fn random_name<R: Rng>(rng: &mut R) -> FullName {
    FullName::new(names::random_first_name(rng), names::random_last_name(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdl_core::{ClubColors, Stadium};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn club(id: u32, tier: ClubTier) -> Club {
        Club {
            id,
            full_name: "Krondor City".into(),
            short_name: "KCIT".into(),
            city: "Krondor".into(),
            tier,
            founded_year: 1921,
            stadium: Stadium {
                name: "Krondor Dome".into(),
                capacity: 30_000,
            },
            colors: ClubColors {
                primary: "Navy".into(),
                secondary: "Red".into(),
            },
            annual_budget_millions: 90,
            reputation: 62,
            training_facility_rating: 12,
            youth_academy_rating: 11,
            preferred_formation: "3-5-2".into(),
            playing_style: "Direct".into(),
        }
    }

    #[test]
    fn test_club_staff_shape() {
        let mut generator = StaffGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(41);

        let staff = generator.generate_for_club(&club(1, ClubTier::Mid), &mut rng);

        assert_eq!(staff.len(), 5);
        assert_eq!(staff[0].role, StaffRole::Manager);
        assert!(staff[0].tactical_rating.is_some());
        assert!(staff[0].specialization_rating.is_none());

        for coach in &staff[1..] {
            assert!(coach.tactical_rating.is_none());
            assert!(coach.specialization_rating.is_some());
        }
    }

    #[test]
    fn test_ids_unique_across_clubs() {
        let mut generator = StaffGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let first = generator.generate_for_club(&club(1, ClubTier::Top), &mut rng);
        let second = generator.generate_for_club(&club(2, ClubTier::Lower), &mut rng);

        let ids: Vec<u32> = first.iter().chain(second.iter()).map(|s| s.id).collect();
        assert_eq!(ids, (1..=10u32).collect::<Vec<_>>());
    }

    #[test]
    fn test_quality_tracks_tier() {
        let mut generator = StaffGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(43);

        let top = generator.generate_for_club(&club(1, ClubTier::Top), &mut rng);
        let lower = generator.generate_for_club(&club(2, ClubTier::Lower), &mut rng);

        assert!(top[0].tactical_rating.unwrap() >= 15);
        assert!(lower[0].tactical_rating.unwrap() <= 9);
    }
}
