pub mod actions;
pub mod card;
pub mod payload;

pub use actions::*;
pub use card::*;
