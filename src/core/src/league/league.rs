use crate::error::{SimResult, SimulationError};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// A season identified by its starting year, rendered as `2024/25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Season {
    start_year: i32,
}

impl Season {
    pub fn new(start_year: i32) -> Self {
        Season { start_year }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + 1
    }

    pub fn label(&self) -> String {
        format!("{}/{:02}", self.start_year, self.end_year() % 100)
    }

    /// Label with the separator made filesystem-safe, e.g. `2024_25`.
    pub fn file_tag(&self) -> String {
        format!("{}_{:02}", self.start_year, self.end_year() % 100)
    }

    /// Nominal first matchday: mid-August of the starting year.
    pub fn kickoff_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.start_year, 8, 15).expect("valid kickoff date")
    }

    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.start_year, 8, 1).expect("valid season start")
    }

    pub fn end_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.end_year(), 5, 31).expect("valid season end")
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Season {
    type Err = SimulationError;

    fn from_str(value: &str) -> SimResult<Self> {
        let start = value
            .split('/')
            .next()
            .and_then(|y| y.parse::<i32>().ok())
            .ok_or_else(|| {
                SimulationError::InvalidInput(format!("malformed season tag: {value}"))
            })?;

        Ok(Season::new(start))
    }
}

/// Static competition metadata for the generated league.
#[derive(Debug, Clone)]
pub struct LeagueInfo {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub country: String,
    pub num_teams: usize,
    pub promotion_spots: u8,
    pub relegation_spots: u8,
    pub european_spots: u8,
    pub season_format: String,
    pub points_for_win: u8,
    pub points_for_draw: u8,
    pub points_for_loss: u8,
}

impl Default for LeagueInfo {
    fn default() -> Self {
        LeagueInfo {
            id: String::from("LG_001"),
            name: String::from("Ironforge Premier League"),
            short_name: String::from("IPL"),
            country: String::from("Aetheria"),
            num_teams: 20,
            promotion_spots: 3,
            relegation_spots: 3,
            european_spots: 4,
            season_format: String::from("double_round_robin"),
            points_for_win: 3,
            points_for_draw: 1,
            points_for_loss: 0,
        }
    }
}

impl LeagueInfo {
    /// Matchdays in a double round-robin of `num_teams`.
    pub fn num_matchdays(&self) -> u8 {
        ((self.num_teams - 1) * 2) as u8
    }
}

#[derive(Debug, Clone)]
pub struct SeasonInfo {
    pub season_id: String,
    pub season: Season,
    pub num_matchdays: u8,
    pub is_current: bool,
}

impl SeasonInfo {
    /// `count` consecutive seasons starting at `first`; the last one is the
    /// current (simulated) season.
    pub fn catalogue(first: Season, count: usize, num_matchdays: u8) -> Vec<SeasonInfo> {
        (0..count)
            .map(|i| SeasonInfo {
                season_id: format!("S{:02}", i + 1),
                season: Season::new(first.start_year() + i as i32),
                num_matchdays,
                is_current: i + 1 == count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_labels() {
        let season = Season::new(2024);
        assert_eq!(season.label(), "2024/25");
        assert_eq!(season.file_tag(), "2024_25");
        assert_eq!(season.end_year(), 2025);
    }

    #[test]
    fn test_season_century_rollover() {
        assert_eq!(Season::new(2099).label(), "2099/00");
    }

    #[test]
    fn test_season_parse() {
        let season: Season = "2022/23".parse().unwrap();
        assert_eq!(season.start_year(), 2022);

        assert!("garbage".parse::<Season>().is_err());
    }

    #[test]
    fn test_catalogue_marks_current() {
        let seasons = SeasonInfo::catalogue(Season::new(2020), 5, 38);

        assert_eq!(seasons.len(), 5);
        assert_eq!(seasons[0].season_id, "S01");
        assert_eq!(seasons[0].season.label(), "2020/21");
        assert!(!seasons[0].is_current);
        assert!(seasons[4].is_current);
        assert_eq!(seasons[4].season.label(), "2024/25");
    }

    #[test]
    fn test_default_league_matchdays() {
        assert_eq!(LeagueInfo::default().num_matchdays(), 38);
    }
}
