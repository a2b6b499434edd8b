//! Location routing
//!
//! A route names which word a session plays: today's word, a random one, or a
//! specific word addressed by its public identifier. Routes are written as
//! `""`, `"random"` and `"w/<id>"`; a leading `#` or `/` is ignored so
//! fragments and paths both parse.

use crate::catalog::{WordCatalog, WordEntry};
use crate::selection::{DailySchedule, WordIdCodec, random_index};
use chrono::NaiveDate;
use log::{debug, warn};
use rand::Rng;
use std::fmt;

/// How the target of a session was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Daily,
    Random,
    Specific,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Random => write!(f, "random"),
            Self::Specific => write!(f, "shared"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Daily,
    Random,
    Specific(String),
}

impl Route {
    /// Parse a route string; anything unrecognised is the daily route
    ///
    /// # Examples
    /// ```
    /// use purrdle::game::Route;
    ///
    /// assert_eq!(Route::parse(""), Route::Daily);
    /// assert_eq!(Route::parse("#/random"), Route::Random);
    /// assert_eq!(Route::parse("w/0k3xq9a"), Route::Specific("0k3xq9a".into()));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let path = input.trim().trim_start_matches(['#', '/']);

        if path.is_empty() {
            return Self::Daily;
        }
        if path.eq_ignore_ascii_case("random") {
            return Self::Random;
        }
        match path.strip_prefix("w/").map(str::trim) {
            Some(id) if !id.is_empty() => return Self::Specific(id.to_string()),
            _ => {}
        }

        debug!("unrecognised route {input:?}, using daily");
        Self::Daily
    }

    /// Route for a specific catalog index
    #[must_use]
    pub fn for_index(codec: WordIdCodec, index: usize) -> Self {
        Self::Specific(codec.encode(index))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => Ok(()),
            Self::Random => write!(f, "random"),
            Self::Specific(id) => write!(f, "w/{id}"),
        }
    }
}

/// Outcome of resolving a route against a catalog
#[derive(Debug, Clone)]
pub struct Resolved<'a> {
    pub mode: GameMode,
    pub index: usize,
    pub entry: &'a WordEntry,
    pub public_id: String,
}

/// Everything needed to turn a route into a catalog entry
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    pub catalog: &'a WordCatalog,
    pub schedule: DailySchedule,
    pub codec: WordIdCodec,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub const fn new(catalog: &'a WordCatalog, schedule: DailySchedule, codec: WordIdCodec) -> Self {
        Self {
            catalog,
            schedule,
            codec,
        }
    }

    /// Pick the target for `route`
    ///
    /// A specific identifier that does not decode to a catalog index falls
    /// back to today's word; it is never an error.
    pub fn resolve<R: Rng + ?Sized>(&self, route: &Route, today: NaiveDate, rng: &mut R) -> Resolved<'a> {
        let len = self.catalog.len();
        let (mode, index) = match route {
            Route::Daily => (GameMode::Daily, self.schedule.index_for_date(len, today)),
            Route::Random => (GameMode::Random, random_index(rng, len)),
            Route::Specific(id) => match self.codec.decode(id, len) {
                Some(index) => (GameMode::Specific, index),
                None => {
                    warn!("unknown word id {id:?}, falling back to the daily word");
                    (GameMode::Daily, self.schedule.index_for_date(len, today))
                }
            },
        };
        self.resolved(mode, index)
    }

    /// Resolution for a known index
    ///
    /// # Panics
    /// Panics if `index` is outside the catalog.
    #[must_use]
    pub fn resolved(&self, mode: GameMode, index: usize) -> Resolved<'a> {
        let entries = self.catalog.entries();
        Resolved {
            mode,
            index,
            entry: &entries[index],
            public_id: self.codec.encode(index),
        }
    }
}
