pub mod league;
pub mod schedule;
pub mod season;
pub mod table;

pub use league::*;
pub use schedule::*;
pub use season::*;
pub use table::*;
