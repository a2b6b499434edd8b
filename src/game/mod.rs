//! Game sessions
//!
//! A [`GameSession`] plays one target word. [`Route`] and [`Resolver`] decide
//! which word that is, and [`share_summary`] renders the result for sharing.

mod clock;
pub mod route;
mod session;
mod share;

pub use clock::SessionClock;
pub use route::{GameMode, Resolved, Resolver, Route};
pub use session::{
    Cell, DEFAULT_MAX_GUESSES, GameSession, GameStatus, GuessRecord, SubmitOutcome, SubmitRejection,
};
pub use share::{SHARE_TITLE, share_summary};
