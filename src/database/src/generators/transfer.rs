use crate::names;
use fdl_core::utils::DateUtils;
use fdl_core::{Club, Player, Season, TransferRecord, TransferType, TransferWindow};
use chrono::NaiveDate;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

/// Share of the player pool that gets a backdated move in the history.
const TRANSFER_SAMPLE_RATIO: usize = 10;

const FREE_TRANSFER_RATIO: f64 = 0.20;
const LOAN_RATIO: f64 = 0.15;

pub struct TransferHistoryGenerator {
    next_id: u32,
}

impl TransferHistoryGenerator {
    pub fn new() -> Self {
        TransferHistoryGenerator { next_id: 1 }
    }

    /// A plausible past-transfer record for roughly a tenth of the player
    /// pool: the player arrived at the current club from a random other club
    /// in one of the earlier seasons. Pure flavor data for the reporting
    /// layer.
    pub fn generate<R: Rng>(
        &mut self,
        players: &[Player],
        clubs: &[Club],
        seasons: &[Season],
        rng: &mut R,
    ) -> Vec<TransferRecord> {
        let sample_size = players.len() / TRANSFER_SAMPLE_RATIO;

        let past_seasons: &[Season] = if seasons.len() > 1 {
            &seasons[..seasons.len() - 1]
        } else {
            seasons
        };

        let sampled: Vec<&Player> = players.choose_multiple(rng, sample_size).collect();

        let mut transfers: Vec<TransferRecord> = sampled
            .iter()
            .filter_map(|player| self.generate_record(player, clubs, past_seasons, rng))
            .collect();

        transfers.sort_by_key(|t| t.date);

        debug!("🔁 generated {} historical transfers", transfers.len());

        transfers
    }

    fn generate_record<R: Rng>(
        &mut self,
        player: &Player,
        clubs: &[Club],
        past_seasons: &[Season],
        rng: &mut R,
    ) -> Option<TransferRecord> {
        let season = *past_seasons.choose(rng)?;

        let to_club = clubs.iter().find(|c| c.id == player.club_id)?;

        let from_pool: Vec<&Club> = clubs.iter().filter(|c| c.id != player.club_id).collect();
        let from_club = from_pool.choose(rng)?;

        let window = if rng.gen_bool(0.5) {
            TransferWindow::Summer
        } else {
            TransferWindow::Winter
        };

        let (transfer_type, fee) = sample_type_and_fee(player.market_value, rng);

        let contract_length_years = match transfer_type {
            TransferType::Loan => 1,
            _ => rng.gen_range(1..=5),
        };

        let weekly_wage = if fee > 0 {
            (fee as f64 * 0.01 / 52.0) as u32
        } else {
            (player.overall_rating as f64 * rng.gen_range(500.0..1500.0)) as u32
        };

        let id = self.next_id;
        self.next_id += 1;

        Some(TransferRecord {
            id,
            season,
            window,
            date: sample_window_date(season, window, rng),
            player_id: player.id,
            player_name: player.full_name.full(),
            from_club: from_club.full_name.clone(),
            to_club: to_club.full_name.clone(),
            transfer_type,
            transfer_fee: fee,
            contract_length_years,
            weekly_wage,
            player_age: player.age,
            player_ability: player.overall_rating,
            reason: names::TRANSFER_REASONS.choose(rng).unwrap().to_string(),
        })
    }
}

fn sample_type_and_fee<R: Rng>(market_value: u32, rng: &mut R) -> (TransferType, u32) {
    if rng.gen_bool(FREE_TRANSFER_RATIO) {
        (TransferType::Free, 0)
    } else if rng.gen_bool(LOAN_RATIO) {
        (TransferType::Loan, 0)
    } else {
        let fee = (market_value as f64 * rng.gen_range(0.7..1.3)) as u32;
        (TransferType::Permanent, fee)
    }
}

fn sample_window_date<R: Rng>(season: Season, window: TransferWindow, rng: &mut R) -> NaiveDate {
    let month = match window {
        TransferWindow::Summer => rng.gen_range(6..=8u32),
        TransferWindow::Winter => 1,
    };

    let day = rng.gen_range(1..=DateUtils::days_in_month(month).min(28));

    // Winter moves land in the calendar year the season finishes in.
    let year = match window {
        TransferWindow::Summer => season.start_year(),
        TransferWindow::Winter => season.end_year(),
    };

    NaiveDate::from_ymd_opt(year, month, day).expect("valid transfer date")
}
