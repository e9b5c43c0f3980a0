pub mod browse;
pub mod domain;
pub mod feedback;
pub mod filter;
pub mod guess;
pub mod recommend;
pub mod roster;
pub mod session;

pub use filter::MissingDirection;
pub use session::{GameSession, MatchReport};
