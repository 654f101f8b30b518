pub mod club;
pub mod generator;
pub mod player;
pub mod staff;
pub mod transfer;
pub mod youth;

pub use club::ClubGenerator;
pub use generator::{DatabaseGenerator, GeneratedWorld, GeneratorConfig};
pub use player::PlayerGenerator;
pub use staff::StaffGenerator;
pub use transfer::TransferHistoryGenerator;
pub use youth::{PROSPECTS_PER_CLUB, YouthAcademyGenerator};
