pub mod batting_order;
pub mod matches;
pub mod players;
pub mod system;

pub use batting_order::*;
pub use matches::*;
pub use players::*;
pub use system::*;
