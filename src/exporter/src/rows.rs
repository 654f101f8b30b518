use fdl_core::{
    Club, Fixture, LeagueInfo, LeagueTableRow, Player, SeasonInfo, StaffMember, TransferRecord,
    YouthProspect, entity_code,
};
use serde::Serialize;

/// Flat serde rows, one per artifact. Field names are the CSV headers the
/// reporting layer reads; dates are rendered `YYYY-MM-DD`.

#[derive(Debug, Serialize)]
pub struct LeagueInfoRow {
    pub league_id: String,
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

impl From<&LeagueInfo> for LeagueInfoRow {
    fn from(league: &LeagueInfo) -> Self {
        LeagueInfoRow {
            league_id: league.id.clone(),
            name: league.name.clone(),
            short_name: league.short_name.clone(),
            country: league.country.clone(),
            num_teams: league.num_teams,
            promotion_spots: league.promotion_spots,
            relegation_spots: league.relegation_spots,
            european_spots: league.european_spots,
            season_format: league.season_format.clone(),
            points_for_win: league.points_for_win,
            points_for_draw: league.points_for_draw,
            points_for_loss: league.points_for_loss,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SeasonRow {
    pub season_id: String,
    pub season: String,
    pub start_year: i32,
    pub end_year: i32,
    pub start_date: String,
    pub end_date: String,
    pub num_matchdays: u8,
    pub is_current: bool,
}

impl From<&SeasonInfo> for SeasonRow {
    fn from(info: &SeasonInfo) -> Self {
        SeasonRow {
            season_id: info.season_id.clone(),
            season: info.season.label(),
            start_year: info.season.start_year(),
            end_year: info.season.end_year(),
            start_date: info.season.start_date().to_string(),
            end_date: info.season.end_date().to_string(),
            num_matchdays: info.num_matchdays,
            is_current: info.is_current,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClubRow {
    pub club_id: String,
    pub full_name: String,
    pub short_name: String,
    pub city: String,
    pub tier: String,
    pub founded_year: u16,
    pub stadium_name: String,
    pub stadium_capacity: u32,
    pub primary_color: String,
    pub secondary_color: String,
    pub annual_budget_millions: u16,
    pub reputation: u8,
    pub training_facility_rating: u8,
    pub youth_academy_rating: u8,
    pub preferred_formation: String,
    pub playing_style: String,
}

impl From<&Club> for ClubRow {
    fn from(club: &Club) -> Self {
        ClubRow {
            club_id: club.code(),
            full_name: club.full_name.clone(),
            short_name: club.short_name.clone(),
            city: club.city.clone(),
            tier: club.tier.as_str().to_string(),
            founded_year: club.founded_year,
            stadium_name: club.stadium.name.clone(),
            stadium_capacity: club.stadium.capacity,
            primary_color: club.colors.primary.clone(),
            secondary_color: club.colors.secondary.clone(),
            annual_budget_millions: club.annual_budget_millions,
            reputation: club.reputation,
            training_facility_rating: club.training_facility_rating,
            youth_academy_rating: club.youth_academy_rating,
            preferred_formation: club.preferred_formation.clone(),
            playing_style: club.playing_style.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlayerRow {
    pub player_id: String,
    pub club_id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub nationality: String,
    pub date_of_birth: String,
    pub age: u8,
    pub height_cm: u8,
    pub weight_kg: u8,
    pub preferred_foot: String,

    pub position_group: String,
    pub primary_position: String,
    pub secondary_positions: Option<String>,

    pub overall_rating: f32,
    pub potential: f32,

    pub phys_pace: u8,
    pub phys_strength: u8,
    pub phys_stamina: u8,

    pub tech_diving: u8,
    pub tech_handling: u8,
    pub tech_kicking: u8,
    pub tech_reflexes: u8,
    pub tech_positioning: u8,
    pub tech_tackling: u8,
    pub tech_marking: u8,
    pub tech_heading: u8,
    pub tech_passing: u8,
    pub tech_ball_control: u8,
    pub tech_dribbling: u8,
    pub tech_shooting: u8,
    pub tech_finishing: u8,

    pub mental_concentration: u8,
    pub mental_decision_making: u8,
    pub mental_leadership: u8,
    pub mental_positioning: u8,
    pub mental_vision: u8,
    pub mental_work_rate: u8,
    pub mental_composure: u8,

    pub contract_years_remaining: u8,
    pub market_value: u32,
    pub weekly_wage: u32,

    pub current_form: f32,
    pub fitness_level: u8,
    pub morale: u8,
    pub injury_status: String,

    pub leadership: u8,
    pub professionalism: u8,
    pub temperament: String,
    pub consistency: u8,
    pub injury_proneness: u8,

    pub career_appearances: u16,
    pub career_goals: u16,
    pub career_assists: u16,
    pub career_yellow_cards: u16,
    pub career_red_cards: u16,
    pub career_clean_sheets: Option<u16>,

    pub jersey_number: u8,
}

impl From<&Player> for PlayerRow {
    fn from(player: &Player) -> Self {
        let secondary = if player.secondary_positions.is_empty() {
            None
        } else {
            Some(
                player
                    .secondary_positions
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(","),
            )
        };

        let attrs = &player.attributes;

        PlayerRow {
            player_id: player.code(),
            club_id: entity_code("CLB", player.club_id),
            first_name: player.full_name.first_name.clone(),
            last_name: player.full_name.last_name.clone(),
            full_name: player.full_name.full(),
            nationality: player.nationality.clone(),
            date_of_birth: player.birth_date.to_string(),
            age: player.age,
            height_cm: player.height_cm,
            weight_kg: player.weight_kg,
            preferred_foot: player.preferred_foot.as_str().to_string(),
            position_group: player.position_group.as_str().to_string(),
            primary_position: player.primary_position.as_str().to_string(),
            secondary_positions: secondary,
            overall_rating: player.overall_rating,
            potential: player.potential,
            phys_pace: attrs.physical.pace,
            phys_strength: attrs.physical.strength,
            phys_stamina: attrs.physical.stamina,
            tech_diving: attrs.technical.diving,
            tech_handling: attrs.technical.handling,
            tech_kicking: attrs.technical.kicking,
            tech_reflexes: attrs.technical.reflexes,
            tech_positioning: attrs.technical.positioning,
            tech_tackling: attrs.technical.tackling,
            tech_marking: attrs.technical.marking,
            tech_heading: attrs.technical.heading,
            tech_passing: attrs.technical.passing,
            tech_ball_control: attrs.technical.ball_control,
            tech_dribbling: attrs.technical.dribbling,
            tech_shooting: attrs.technical.shooting,
            tech_finishing: attrs.technical.finishing,
            mental_concentration: attrs.mental.concentration,
            mental_decision_making: attrs.mental.decision_making,
            mental_leadership: attrs.mental.leadership,
            mental_positioning: attrs.mental.positioning,
            mental_vision: attrs.mental.vision,
            mental_work_rate: attrs.mental.work_rate,
            mental_composure: attrs.mental.composure,
            contract_years_remaining: player.contract_years_remaining,
            market_value: player.market_value,
            weekly_wage: player.weekly_wage,
            current_form: player.current_form,
            fitness_level: player.fitness_level,
            morale: player.morale,
            injury_status: player.injury_status.clone(),
            leadership: player.leadership,
            professionalism: player.professionalism,
            temperament: player.temperament.as_str().to_string(),
            consistency: player.consistency,
            injury_proneness: player.injury_proneness,
            career_appearances: player.career.appearances,
            career_goals: player.career.goals,
            career_assists: player.career.assists,
            career_yellow_cards: player.career.yellow_cards,
            career_red_cards: player.career.red_cards,
            career_clean_sheets: player.career.clean_sheets,
            jersey_number: player.jersey_number,
        }
    }
}

/// The csv serializer flattens the nested player struct into the record, so
/// a youth row is a player row plus the academy columns.
#[derive(Debug, Serialize)]
pub struct YouthRow {
    pub player: PlayerRow,
    pub is_youth: bool,
    pub youth_entry_year: i32,
}

impl From<&YouthProspect> for YouthRow {
    fn from(prospect: &YouthProspect) -> Self {
        YouthRow {
            player: PlayerRow::from(&prospect.player),
            is_youth: true,
            youth_entry_year: prospect.entry_year,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StaffRow {
    pub staff_id: String,
    pub club_id: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub nationality: String,
    pub age: u8,
    pub tactical_rating: Option<u8>,
    pub man_management_rating: Option<u8>,
    pub specialization_rating: Option<u8>,
    pub contract_years: u8,
}

impl From<&StaffMember> for StaffRow {
    fn from(staff: &StaffMember) -> Self {
        StaffRow {
            staff_id: staff.code(),
            club_id: entity_code("CLB", staff.club_id),
            role: staff.role.as_str().to_string(),
            first_name: staff.full_name.first_name.clone(),
            last_name: staff.full_name.last_name.clone(),
            full_name: staff.full_name.full(),
            nationality: staff.nationality.clone(),
            age: staff.age,
            tactical_rating: staff.tactical_rating,
            man_management_rating: staff.man_management_rating,
            specialization_rating: staff.specialization_rating,
            contract_years: staff.contract_years,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FixtureRow {
    pub match_id: String,
    pub season: String,
    pub matchday: u8,
    pub date: String,
    pub home_club_id: String,
    pub home_club_name: String,
    pub away_club_id: String,
    pub away_club_name: String,
    pub home_goals: Option<u8>,
    pub away_goals: Option<u8>,
    pub status: String,
}

impl From<&Fixture> for FixtureRow {
    fn from(fixture: &Fixture) -> Self {
        FixtureRow {
            match_id: fixture.id.clone(),
            season: fixture.season.label(),
            matchday: fixture.matchday,
            date: fixture.date.to_string(),
            home_club_id: entity_code("CLB", fixture.home_club_id),
            home_club_name: fixture.home_club_name.clone(),
            away_club_id: entity_code("CLB", fixture.away_club_id),
            away_club_name: fixture.away_club_name.clone(),
            home_goals: fixture.home_goals,
            away_goals: fixture.away_goals,
            status: fixture.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LeagueTableRowRecord {
    pub season: String,
    pub club_id: String,
    pub club_name: String,
    pub position: u8,
    pub played: u8,
    pub won: u8,
    pub drawn: u8,
    pub lost: u8,
    pub goals_for: u16,
    pub goals_against: u16,
    pub goal_difference: i32,
    pub points: u16,
    pub form: String,
    pub home_wins: u8,
    pub home_draws: u8,
    pub home_losses: u8,
    pub away_wins: u8,
    pub away_draws: u8,
    pub away_losses: u8,
}

impl From<&LeagueTableRow> for LeagueTableRowRecord {
    fn from(row: &LeagueTableRow) -> Self {
        LeagueTableRowRecord {
            season: row.season.label(),
            club_id: entity_code("CLB", row.club_id),
            club_name: row.club_name.clone(),
            position: row.position,
            played: row.played,
            won: row.won,
            drawn: row.drawn,
            lost: row.lost,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
            goal_difference: row.goal_difference,
            points: row.points,
            form: row.form.clone(),
            home_wins: row.home_wins,
            home_draws: row.home_draws,
            home_losses: row.home_losses,
            away_wins: row.away_wins,
            away_draws: row.away_draws,
            away_losses: row.away_losses,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TransferRow {
    pub transfer_id: String,
    pub season: String,
    pub transfer_window: String,
    pub date: String,
    pub player_id: String,
    pub player_name: String,
    pub from_club: String,
    pub to_club: String,
    pub transfer_type: String,
    pub transfer_fee: u32,
    pub contract_length_years: u8,
    pub weekly_wage: u32,
    pub player_age: u8,
    pub player_ability: f32,
    pub reason: String,
}

impl From<&TransferRecord> for TransferRow {
    fn from(transfer: &TransferRecord) -> Self {
        TransferRow {
            transfer_id: transfer.code(),
            season: transfer.season.label(),
            transfer_window: transfer.window.as_str().to_string(),
            date: transfer.date.to_string(),
            player_id: entity_code("PLY", transfer.player_id),
            player_name: transfer.player_name.clone(),
            from_club: transfer.from_club.clone(),
            to_club: transfer.to_club.clone(),
            transfer_type: transfer.transfer_type.as_str().to_string(),
            transfer_fee: transfer.transfer_fee,
            contract_length_years: transfer.contract_length_years,
            weekly_wage: transfer.weekly_wage,
            player_age: transfer.player_age,
            player_ability: transfer.player_ability,
            reason: transfer.reason.clone(),
        }
    }
}
