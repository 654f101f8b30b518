use crate::shared::{FullName, entity_code};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffRole {
    Manager,
    AssistantCoach,
    GoalkeepingCoach,
    FitnessCoach,
    SetPieceCoach,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Manager => "Manager",
            StaffRole::AssistantCoach => "Assistant Coach",
            StaffRole::GoalkeepingCoach => "Goalkeeping Coach",
            StaffRole::FitnessCoach => "Fitness Coach",
            StaffRole::SetPieceCoach => "Set Piece Coach",
        }
    }

    /// The specialist roles every club fills next to the manager.
    pub const COACHES: [StaffRole; 4] = [
        StaffRole::AssistantCoach,
        StaffRole::GoalkeepingCoach,
        StaffRole::FitnessCoach,
        StaffRole::SetPieceCoach,
    ];
}

/// Managers carry tactical and man-management ratings; specialist coaches a
/// single specialization rating. The unused side stays empty in the dataset.
#[derive(Debug, Clone)]
pub struct StaffMember {
    pub id: u32,
    pub club_id: u32,
    pub role: StaffRole,
    pub full_name: FullName,
    pub nationality: String,
    pub age: u8,
    pub tactical_rating: Option<u8>,
    pub man_management_rating: Option<u8>,
    pub specialization_rating: Option<u8>,
    pub contract_years: u8,
}

impl StaffMember {
    pub fn code(&self) -> String {
        entity_code("STF", self.id)
    }
}
