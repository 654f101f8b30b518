pub mod club;
pub mod error;
pub mod league;
pub mod r#match;
pub mod transfers;

pub mod shared;
pub mod utils;

// Re-export club items
pub use club::{
    // Club itself
    Club, ClubColors, ClubTier, Stadium,
    // Player exports
    CareerTotals, MarketValueCalculator, Mental, OverallRatingCalculator, Physical, Player,
    PlayerAttributes, Position, PositionGroup, PreferredFoot, Technical, Temperament,
    WeeklyWageCalculator,
    // Staff exports
    StaffMember, StaffRole,
    // Academy exports
    PromotionRules, YouthProspect, promotion_candidates,
};

// Re-export league items
pub use league::{
    ClubStrengths, FORM_WINDOW, Fixture, FixtureStatus, LeagueInfo, LeagueTable, LeagueTableRow,
    Schedule, Season, SeasonInfo, SeasonSimulator,
};

pub use error::{SimResult, SimulationError};
pub use r#match::{MatchSettings, ScoreSimulator};
pub use transfers::{TransferRecord, TransferType, TransferWindow};

pub use shared::*;
pub use utils::*;
