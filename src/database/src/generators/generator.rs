use crate::generators::club::ClubGenerator;
use crate::generators::player::PlayerGenerator;
use crate::generators::staff::StaffGenerator;
use crate::generators::transfer::TransferHistoryGenerator;
use crate::generators::youth::YouthAcademyGenerator;
use fdl_core::{
    Club, LeagueInfo, Player, Season, SeasonInfo, SimResult, StaffMember, TransferRecord,
    YouthProspect,
};
use log::info;
use rand::Rng;

/// Academy ids start high above the first-team sequence so the two pools
/// never collide.
const YOUTH_ID_OFFSET: u32 = 50_000;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub league: LeagueInfo,
    pub first_season: Season,
    pub seasons_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            league: LeagueInfo::default(),
            first_season: Season::new(2020),
            seasons_count: 5,
        }
    }
}

impl GeneratorConfig {
    /// The season whose fixtures get simulated — always the newest one.
    pub fn current_season(&self) -> Season {
        Season::new(self.first_season.start_year() + self.seasons_count as i32 - 1)
    }
}

/// Everything the entity generators produce. Fixtures and the table come
/// later, from the season simulation in `core`.
#[derive(Debug)]
pub struct GeneratedWorld {
    pub league: LeagueInfo,
    pub seasons: Vec<SeasonInfo>,
    pub clubs: Vec<Club>,
    pub players: Vec<Player>,
    pub youth: Vec<YouthProspect>,
    pub staff: Vec<StaffMember>,
    pub transfers: Vec<TransferRecord>,
}

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> SimResult<GeneratedWorld> {
        let current_season = config.current_season();

        let seasons = SeasonInfo::catalogue(
            config.first_season,
            config.seasons_count,
            config.league.num_matchdays(),
        );

        let clubs = ClubGenerator::new().generate_all(config.league.num_teams, rng)?;
        info!("🏟️ generated {} clubs", clubs.len());

        let mut staff_generator = StaffGenerator::new();
        let staff: Vec<StaffMember> = clubs
            .iter()
            .flat_map(|club| staff_generator.generate_for_club(club, rng))
            .collect();
        info!("👔 generated {} staff members", staff.len());

        let mut player_generator = PlayerGenerator::new();
        let players: Vec<Player> = clubs
            .iter()
            .flat_map(|club| player_generator.generate_squad(club, current_season, rng))
            .collect();
        info!("👟 generated {} players", players.len());

        let mut youth_generator = PlayerGenerator::with_start_id(YOUTH_ID_OFFSET);
        let youth: Vec<YouthProspect> = clubs
            .iter()
            .flat_map(|club| {
                YouthAcademyGenerator::generate_for_club(
                    &mut youth_generator,
                    club,
                    current_season,
                    rng,
                )
            })
            .collect();
        info!("🎓 generated {} youth prospects", youth.len());

        let season_tags: Vec<Season> = seasons.iter().map(|s| s.season).collect();
        let transfers =
            TransferHistoryGenerator::new().generate(&players, &clubs, &season_tags, rng);
        info!("🔁 generated {} historical transfers", transfers.len());

        Ok(GeneratedWorld {
            league: config.league.clone(),
            seasons,
            clubs,
            players,
            youth,
            staff,
            transfers,
        })
    }
}
