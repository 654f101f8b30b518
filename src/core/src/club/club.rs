use crate::shared::entity_code;

/// Coarse strength bracket driving generated budgets, ratings and reputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClubTier {
    Top,
    Mid,
    Lower,
}

impl ClubTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClubTier::Top => "top_tier",
            ClubTier::Mid => "mid_tier",
            ClubTier::Lower => "lower_tier",
        }
    }

    /// Tier by 1-indexed slot: top 25%, next 45%, bottom 30%.
    pub fn from_slot(slot: usize, total: usize) -> Self {
        let slot = slot as f32;
        let total = total as f32;

        if slot <= total * 0.25 {
            ClubTier::Top
        } else if slot <= total * 0.70 {
            ClubTier::Mid
        } else {
            ClubTier::Lower
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClubColors {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone)]
pub struct Stadium {
    pub name: String,
    pub capacity: u32,
}

/// A league club. Immutable once generated for a season: the simulation reads
/// identity and roster-derived strength, never writes back.
#[derive(Debug, Clone)]
pub struct Club {
    pub id: u32,
    pub full_name: String,
    pub short_name: String,
    pub city: String,

    pub tier: ClubTier,
    pub founded_year: u16,

    pub stadium: Stadium,
    pub colors: ClubColors,

    pub annual_budget_millions: u16,
    pub reputation: u8,
    pub training_facility_rating: u8,
    pub youth_academy_rating: u8,

    pub preferred_formation: String,
    pub playing_style: String,
}

impl Club {
    pub fn code(&self) -> String {
        entity_code("CLB", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_slot_distribution() {
        let tiers: Vec<ClubTier> = (1..=20).map(|i| ClubTier::from_slot(i, 20)).collect();

        assert_eq!(tiers.iter().filter(|t| **t == ClubTier::Top).count(), 5);
        assert_eq!(tiers.iter().filter(|t| **t == ClubTier::Mid).count(), 9);
        assert_eq!(tiers.iter().filter(|t| **t == ClubTier::Lower).count(), 6);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(ClubTier::Top.as_str(), "top_tier");
        assert_eq!(ClubTier::Lower.as_str(), "lower_tier");
    }
}
