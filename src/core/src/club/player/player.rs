use crate::club::player::attributes::PlayerAttributes;
use crate::shared::{FullName, entity_code};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PositionGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionGroup::Goalkeeper => "GK",
            PositionGroup::Defender => "DEF",
            PositionGroup::Midfielder => "MID",
            PositionGroup::Forward => "FWD",
        }
    }

    pub const ALL: [PositionGroup; 4] = [
        PositionGroup::Goalkeeper,
        PositionGroup::Defender,
        PositionGroup::Midfielder,
        PositionGroup::Forward,
    ];
}

/// Pitch positions, including secondary-only slots (LWB/RWB/CF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Gk,
    Cb,
    Lb,
    Rb,
    Lwb,
    Rwb,
    Cdm,
    Cm,
    Cam,
    Lm,
    Rm,
    Lw,
    Rw,
    St,
    Cf,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Gk => "GK",
            Position::Cb => "CB",
            Position::Lb => "LB",
            Position::Rb => "RB",
            Position::Lwb => "LWB",
            Position::Rwb => "RWB",
            Position::Cdm => "CDM",
            Position::Cm => "CM",
            Position::Cam => "CAM",
            Position::Lm => "LM",
            Position::Rm => "RM",
            Position::Lw => "LW",
            Position::Rw => "RW",
            Position::St => "ST",
            Position::Cf => "CF",
        }
    }

    pub fn group(&self) -> PositionGroup {
        match self {
            Position::Gk => PositionGroup::Goalkeeper,
            Position::Cb | Position::Lb | Position::Rb | Position::Lwb | Position::Rwb => {
                PositionGroup::Defender
            }
            Position::Cdm | Position::Cm | Position::Cam | Position::Lm | Position::Rm => {
                PositionGroup::Midfielder
            }
            Position::Lw | Position::Rw | Position::St | Position::Cf => PositionGroup::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredFoot {
    Right,
    Left,
    Both,
}

impl PreferredFoot {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredFoot::Right => "Right",
            PreferredFoot::Left => "Left",
            PreferredFoot::Both => "Both",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temperament {
    Calm,
    Balanced,
    Aggressive,
}

impl Temperament {
    pub fn as_str(&self) -> &'static str {
        match self {
            Temperament::Calm => "Calm",
            Temperament::Balanced => "Balanced",
            Temperament::Aggressive => "Aggressive",
        }
    }
}

/// Career counters start zeroed for freshly generated players and are only
/// touched by downstream season-history tooling, never by the one-shot
/// simulation. Clean sheets are tracked for goalkeepers and defenders only.
#[derive(Debug, Clone)]
pub struct CareerTotals {
    pub appearances: u16,
    pub goals: u16,
    pub assists: u16,
    pub yellow_cards: u16,
    pub red_cards: u16,
    pub clean_sheets: Option<u16>,
}

impl CareerTotals {
    pub fn zeroed(group: PositionGroup) -> Self {
        let clean_sheets = match group {
            PositionGroup::Goalkeeper | PositionGroup::Defender => Some(0),
            _ => None,
        };

        CareerTotals {
            appearances: 0,
            goals: 0,
            assists: 0,
            yellow_cards: 0,
            red_cards: 0,
            clean_sheets,
        }
    }
}

/// A squad player as the simulation consumes it: identity, club affiliation,
/// position and `overall_rating`. Everything else is dataset texture for the
/// reporting layer.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: u32,
    pub club_id: u32,

    pub full_name: FullName,
    pub nationality: String,
    pub birth_date: NaiveDate,
    pub age: u8,
    pub height_cm: u8,
    pub weight_kg: u8,
    pub preferred_foot: PreferredFoot,

    pub position_group: PositionGroup,
    pub primary_position: Position,
    pub secondary_positions: Vec<Position>,

    pub attributes: PlayerAttributes,
    pub overall_rating: f32,
    pub potential: f32,

    pub contract_years_remaining: u8,
    pub market_value: u32,
    pub weekly_wage: u32,

    pub current_form: f32,
    pub fitness_level: u8,
    pub morale: u8,
    pub injury_status: String,

    pub leadership: u8,
    pub professionalism: u8,
    pub temperament: Temperament,
    pub consistency: u8,
    pub injury_proneness: u8,

    pub career: CareerTotals,
    pub jersey_number: u8,
}

impl Player {
    pub fn code(&self) -> String {
        entity_code("PLY", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_groups() {
        assert_eq!(Position::Gk.group(), PositionGroup::Goalkeeper);
        assert_eq!(Position::Lwb.group(), PositionGroup::Defender);
        assert_eq!(Position::Cam.group(), PositionGroup::Midfielder);
        assert_eq!(Position::Cf.group(), PositionGroup::Forward);
    }

    #[test]
    fn test_clean_sheets_only_for_defensive_groups() {
        assert!(CareerTotals::zeroed(PositionGroup::Goalkeeper).clean_sheets.is_some());
        assert!(CareerTotals::zeroed(PositionGroup::Defender).clean_sheets.is_some());
        assert!(CareerTotals::zeroed(PositionGroup::Midfielder).clean_sheets.is_none());
        assert!(CareerTotals::zeroed(PositionGroup::Forward).clean_sheets.is_none());
    }
}
