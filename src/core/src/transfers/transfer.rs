use crate::league::Season;
use crate::shared::transfer_code;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferWindow {
    Summer,
    Winter,
}

impl TransferWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferWindow::Summer => "summer",
            TransferWindow::Winter => "winter",
        }
    }

    /// Months the window is open in: June-August for summer, January for
    /// winter.
    pub fn months(&self) -> std::ops::RangeInclusive<u32> {
        match self {
            TransferWindow::Summer => 6..=8,
            TransferWindow::Winter => 1..=1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferType {
    Permanent,
    Loan,
    Free,
}

impl TransferType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferType::Permanent => "permanent",
            TransferType::Loan => "loan",
            TransferType::Free => "free",
        }
    }
}

/// A single completed move in the transfer history artifact. Pure pass-through
/// data for the reporting layer; the season simulation never reads it.
#[derive(Debug, Clone)]
pub struct TransferRecord {
    pub id: u32,
    pub season: Season,
    pub window: TransferWindow,
    pub date: NaiveDate,

    pub player_id: u32,
    pub player_name: String,
    pub from_club: String,
    pub to_club: String,

    pub transfer_type: TransferType,
    pub transfer_fee: u32,
    pub contract_length_years: u8,
    pub weekly_wage: u32,

    pub player_age: u8,
    pub player_ability: f32,
    pub reason: String,
}

impl TransferRecord {
    pub fn code(&self) -> String {
        transfer_code(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_months() {
        assert!(TransferWindow::Summer.months().contains(&7));
        assert!(!TransferWindow::Summer.months().contains(&1));
        assert!(TransferWindow::Winter.months().contains(&1));
    }
}
