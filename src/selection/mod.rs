//! Word selection
//!
//! Decides which catalog entry a session plays: the date-deterministic daily
//! word, a random word, or a specific word named by a public identifier.

pub mod codec;
pub mod daily;
pub mod random;

pub use codec::WordIdCodec;
pub use daily::{DailySchedule, daily_index};
pub use random::{random_index, random_index_excluding};
