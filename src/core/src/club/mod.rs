pub mod academy;
pub mod club;
pub mod player;
pub mod staff;

pub use academy::*;
pub use club::*;
pub use staff::*;

// Player exports
pub use player::{
    CareerTotals, MarketValueCalculator, Mental, OverallRatingCalculator, Physical, Player,
    PlayerAttributes, Position, PositionGroup, PreferredFoot, Technical, Temperament,
    WeeklyWageCalculator,
};
