pub mod app_info;
pub mod lineup;
pub mod player;
pub mod schedule;

pub use app_info::*;
pub use lineup::*;
pub use player::*;
pub use schedule::*;
