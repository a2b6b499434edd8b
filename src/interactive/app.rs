//! TUI application state and logic

use crate::commands::GameSetup;
use crate::game::{GameMode, GameSession, GameStatus, Route, SubmitRejection};
use crate::history::NavHistory;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How often the session clock is advanced while idle
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Application state
pub struct App<'a> {
    pub setup: &'a GameSetup,
    pub session: GameSession,
    pub history: NavHistory<Visit>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub show_share: bool,
    pub should_quit: bool,
    generation: u64,
    tick_ref: Option<TickRef>,
    recorded: bool,
    rng: ThreadRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Finished,
}

/// A session as it was first started, for back/forward navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub mode: GameMode,
    pub public_id: String,
}

impl Visit {
    fn of(session: &GameSession) -> Self {
        Self {
            mode: session.mode(),
            public_id: session.public_id().to_string(),
        }
    }
}

/// Where elapsed time is measured from, and for which session
#[derive(Debug, Clone, Copy)]
struct TickRef {
    generation: u64,
    at: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results of the games finished in this process
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[k]` counts wins in `k` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, status: GameStatus, guesses: usize) {
        self.total_games += 1;
        if status == GameStatus::Won {
            self.games_won += 1;
            if self.guess_distribution.len() <= guesses {
                self.guess_distribution.resize(guesses + 1, 0);
            }
            self.guess_distribution[guesses] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(setup: &'a GameSetup, route: &Route) -> Self {
        let mut rng = rand::rng();
        let session = setup.start(route, &mut rng);
        let history = NavHistory::new(Visit::of(&session));

        let mut app = Self {
            setup,
            session,
            history,
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            show_share: false,
            should_quit: false,
            generation: 0,
            tick_ref: None,
            recorded: false,
            rng,
        };
        app.add_message(
            "Type a guess and press Enter. Tab: definition, Shift+Tab: letter.",
            MessageStyle::Info,
        );
        app
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the session clock to `now`
    ///
    /// The first tick of a session only sets the reference point, so time
    /// measured against a previous session is discarded.
    pub fn on_tick(&mut self, now: Instant) {
        let previous = self.tick_ref.replace(TickRef {
            generation: self.generation,
            at: now,
        });
        let delta = match previous {
            Some(tick) if tick.generation == self.generation => {
                now.saturating_duration_since(tick.at)
            }
            _ => return,
        };

        for reveal in self.session.tick(delta) {
            self.add_message(
                &format!("Hint: letter {} revealed", reveal.position + 1),
                MessageStyle::Info,
            );
        }
    }

    /// Swap in a new session
    fn replace_session(&mut self, session: GameSession) {
        self.generation += 1;
        debug!("session generation {} for {}", self.generation, session.public_id());
        self.session = session;
        self.input_mode = InputMode::Guessing;
        self.show_share = false;
        self.recorded = false;
    }

    pub fn new_game(&mut self) {
        let session = self.setup.next_random(&self.session, &mut self.rng);
        self.history.advance(Visit::of(&session));
        self.replace_session(session);
        self.messages.clear();
        self.add_message("New random word!", MessageStyle::Info);
    }

    pub fn go_back(&mut self) {
        match self.history.back().cloned() {
            Some(visit) => self.restart(&visit),
            None => self.add_message("No earlier word", MessageStyle::Error),
        }
    }

    pub fn go_forward(&mut self) {
        match self.history.forward().cloned() {
            Some(visit) => self.restart(&visit),
            None => self.add_message("No later word", MessageStyle::Error),
        }
    }

    fn restart(&mut self, visit: &Visit) {
        let Some(session) = self.setup.replay(visit.mode, &visit.public_id) else {
            self.add_message(
                &format!("Word #{} is no longer available", visit.public_id),
                MessageStyle::Error,
            );
            return;
        };
        self.replace_session(session);
        self.add_message(
            &format!("Replaying #{}", self.session.public_id()),
            MessageStyle::Info,
        );
    }

    pub fn submit(&mut self) {
        match self.session.submit_guess() {
            Ok(outcome) => match outcome.status {
                GameStatus::Playing => {}
                status => self.finish(status),
            },
            Err(SubmitRejection::WrongLength { expected, .. }) => {
                self.add_message(&format!("Need {expected} letters"), MessageStyle::Error);
            }
            Err(SubmitRejection::GameOver) => self.input_mode = InputMode::Finished,
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.input_mode = InputMode::Finished;
        if !self.recorded {
            self.stats.record(status, self.session.guess_count());
            self.recorded = true;
        }

        if status == GameStatus::Won {
            let celebration = match self.session.guess_count() {
                1 => "🎯 PURRFECT! First try! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message(
                &format!("😿 The word was {}", self.session.target()),
                MessageStyle::Error,
            );
        }
        self.add_message("s: share | n: new word | q: quit", MessageStyle::Info);
    }

    pub fn reveal_definition(&mut self) {
        if !self.session.reveal_next_definition() {
            self.add_message("All definitions are shown", MessageStyle::Error);
        }
    }

    pub fn reveal_letter(&mut self) {
        match self.session.reveal_next_letter() {
            Some(reveal) => self.add_message(
                &format!("Letter {} revealed", reveal.position + 1),
                MessageStyle::Info,
            ),
            None => self.add_message("No more letters to reveal", MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('[') => self.go_back(),
            KeyCode::Char(']') => self.go_forward(),
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => self.new_game(),
            _ => match self.input_mode {
                InputMode::Guessing => self.handle_guessing_key(key),
                InputMode::Finished => self.handle_finished_key(key),
            },
        }
    }

    fn handle_guessing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                self.session.add_letter(c);
            }
            KeyCode::Backspace => self.session.delete_letter(),
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.reveal_definition(),
            KeyCode::BackTab => self.reveal_letter(),
            _ => {}
        }
    }

    fn handle_finished_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('s') => self.show_share = !self.show_share,
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.on_tick(Instant::now());

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        app.on_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
