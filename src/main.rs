use fdl_core::utils::TimeEstimation;
use fdl_core::{ClubStrengths, MatchSettings, Schedule, SeasonSimulator};
use database::{DatabaseGenerator, GeneratorConfig};
use env_logger::Env;
use exporter::DatasetExporter;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::env;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let out_dir = env::args().nth(1).unwrap_or_else(|| String::from("data/raw"));

    // One seeded stream drives the whole run; set SEED for a reproducible
    // dataset, otherwise each run gets fresh entropy.
    let mut rng = match env::var("SEED").ok().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => {
            info!("🎲 seeded run: SEED={}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let config = GeneratorConfig::default();
    let season = config.current_season();

    info!(
        "⚽ {} — generating {} clubs, season {}",
        config.league.name, config.league.num_teams, season
    );

    let (world, generated_ms) =
        TimeEstimation::estimate(|| DatabaseGenerator::generate(&config, &mut rng));
    let world = world?;
    info!("database generated: {} ms", generated_ms);

    let mut fixtures = Schedule::generate(&world.clubs, season)?;
    info!("📅 {} fixtures scheduled", fixtures.len());

    let strengths = ClubStrengths::from_rosters(&world.clubs, &world.players);
    let simulator = SeasonSimulator::new(MatchSettings::default());

    let (table, simulated_ms) = TimeEstimation::estimate(|| {
        simulator.simulate(season, &world.clubs, &mut fixtures, &strengths, &mut rng)
    });
    let table = table?;
    info!("season simulated: {} ms", simulated_ms);

    let export = DatasetExporter::new(&out_dir)?;
    export.write_league_info(&world.league)?;
    export.write_seasons(&world.seasons)?;
    export.write_clubs(&world.clubs)?;
    export.write_players(&world.players)?;
    export.write_youth(&world.youth)?;
    export.write_staff(&world.staff)?;
    export.write_fixtures(season, &fixtures)?;
    export.write_league_table(season, &table)?;
    export.write_transfers(&world.transfers)?;

    info!("✅ dataset written to {}", out_dir);

    Ok(())
}
