//! Shared startup state for every command

use crate::catalog::WordCatalog;
use crate::config::AppConfig;
use crate::game::{GameMode, GameSession, Resolved, Resolver, Route};
use crate::selection::{DailySchedule, WordIdCodec, random_index_excluding};
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use rand::Rng;

/// Catalog plus the configuration derived from it
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub catalog: WordCatalog,
    pub config: AppConfig,
    pub schedule: DailySchedule,
    pub codec: WordIdCodec,
}

impl GameSetup {
    /// # Errors
    ///
    /// Returns an error if the configured daily offset is invalid.
    pub fn new(catalog: WordCatalog, config: AppConfig) -> Result<Self> {
        let schedule = config.schedule()?;
        let codec = config.codec();
        Ok(Self {
            catalog,
            config,
            schedule,
            codec,
        })
    }

    #[must_use]
    pub const fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.catalog, self.schedule, self.codec)
    }

    /// Today's date in the schedule's timezone
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.schedule.today(Utc::now())
    }

    /// Resolve `route` and start a fresh session for it
    pub fn start<R: Rng + ?Sized>(&self, route: &Route, rng: &mut R) -> GameSession {
        let resolved = self.resolver().resolve(route, self.today(), rng);
        self.session_for(&resolved)
    }

    /// Session for a random word other than the one `current` plays
    pub fn next_random<R: Rng + ?Sized>(&self, current: &GameSession, rng: &mut R) -> GameSession {
        let exclude = self
            .catalog
            .position_of(current.target().text())
            .unwrap_or(usize::MAX);
        let index = random_index_excluding(rng, self.catalog.len(), exclude);
        self.session_for(&self.resolver().resolved(GameMode::Random, index))
    }

    /// Fresh session for the word behind `public_id`, keeping its original mode
    ///
    /// `None` when the identifier does not belong to this catalog.
    #[must_use]
    pub fn replay(&self, mode: GameMode, public_id: &str) -> Option<GameSession> {
        let index = self.codec.decode(public_id, self.catalog.len())?;
        Some(self.session_for(&self.resolver().resolved(mode, index)))
    }

    #[must_use]
    pub fn session_for(&self, resolved: &Resolved<'_>) -> GameSession {
        GameSession::new(
            resolved.entry.clone(),
            self.config.max_guesses,
            self.config.hints.clone(),
        )
        .with_origin(resolved.mode, resolved.public_id.clone())
    }
}

/// Route selected by the `--random` / `--id` flags
#[must_use]
pub fn route_from_flags(random: bool, id: Option<&str>) -> Route {
    match (random, id) {
        (_, Some(id)) => Route::parse(&format!("w/{id}")),
        (true, None) => Route::Random,
        (false, None) => Route::Daily,
    }
}
