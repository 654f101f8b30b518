pub mod codes;
pub mod fullname;

pub use codes::*;
pub use fullname::*;
