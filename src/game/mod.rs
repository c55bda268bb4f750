//! Game state and rules
//!
//! The [`GameEngine`] is explicitly constructed with its dictionary and handed to
//! whichever front end drives it. Front ends read state through accessors or a
//! [`GameSnapshot`].

mod engine;
mod snapshot;
mod status;

pub use engine::{GameEngine, MAX_ATTEMPTS, SubmitOutcome};
pub use snapshot::{BoardRow, GameSnapshot};
pub use status::{GameStatus, Language};
