//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a guess and press enter.

use super::setup::GameSetup;
use crate::game::{GameSession, Route, SubmitOutcome, SubmitRejection};
use crate::output::{print_outcome, print_session};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(setup: &GameSetup, route: &Route) -> Result<()> {
    let mut rng = rand::rng();
    let mut session = setup.start(route, &mut rng);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Purrdle - Simple Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type a guess and press enter. Spaces in multi-word answers are optional.");
    println!("Commands: ':hint' next definition, ':letter' reveal a letter,");
    println!("          ':new' random word, ':share' copyable result, ':quit' exit\n");

    let mut last_tick = Instant::now();

    loop {
        print_session(&session);
        let input = get_user_input("Guess")?;

        let now = Instant::now();
        for reveal in session.tick(now - last_tick) {
            println!("💡 Letter {} is now shown on the board", reveal.position + 1);
        }
        last_tick = now;

        match input.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ":new" | ":n" => {
                session = setup.next_random(&session, &mut rng);
                last_tick = Instant::now();
                println!("\n🔄 New word!\n");
                continue;
            }
            ":hint" | ":h" => {
                if !session.reveal_next_definition() {
                    println!("{}", "All definitions are already shown".yellow());
                }
                continue;
            }
            ":letter" | ":l" => {
                match session.reveal_next_letter() {
                    Some(reveal) => println!("💡 Letter {} revealed", reveal.position + 1),
                    None => println!("{}", "No more letters can be revealed".yellow()),
                }
                continue;
            }
            ":share" | ":s" => {
                println!("\n{}\n", session.share_summary());
                continue;
            }
            _ => {}
        }

        match enter_guess(&mut session, &input) {
            Ok(outcome) if outcome.status.is_over() => {
                print_session(&session);
                print_outcome(&session);

                match get_user_input("Play a random word? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => {
                        session = setup.next_random(&session, &mut rng);
                        last_tick = Instant::now();
                        println!("\n🔄 New word!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            Ok(_) => {}
            Err(rejection) => println!("❌ {rejection}"),
        }
    }
}

/// Replace the whole input row with `text` and submit it
///
/// Characters the session does not accept (spaces, digits, overflow) are
/// dropped. A rejected guess leaves the input row empty.
///
/// # Errors
///
/// Propagates the session's [`SubmitRejection`].
pub fn enter_guess(session: &mut GameSession, text: &str) -> Result<SubmitOutcome, SubmitRejection> {
    if session.status().is_over() {
        return Err(SubmitRejection::GameOver);
    }
    clear_buffer(session);

    let letters: Vec<char> = text.chars().filter(char::is_ascii_alphabetic).collect();
    let expected = session.target().len();
    if letters.len() != expected {
        return Err(SubmitRejection::WrongLength {
            expected,
            actual: letters.len(),
        });
    }
    for ch in letters {
        session.add_letter(ch);
    }
    session.submit_guess()
}

fn clear_buffer(session: &mut GameSession) {
    for _ in 0..session.buffer().len() {
        session.delete_letter();
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WordEntry;
    use crate::core::Word;
    use crate::game::GameStatus;
    use crate::hints::HintConfig;

    fn session(word: &str) -> GameSession {
        let entry = WordEntry::new(Word::new(word).unwrap(), vec!["clue".into()], 1.0);
        GameSession::new(entry, 6, HintConfig::default())
    }

    #[test]
    fn enter_guess_accepts_spaced_phrases() {
        let mut game = session("ice cream");
        let outcome = enter_guess(&mut game, "ice cream").unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
    }

    #[test]
    fn rejected_guess_clears_the_row() {
        let mut game = session("crane");
        assert_eq!(
            enter_guess(&mut game, "cranes"),
            Err(SubmitRejection::WrongLength {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(game.buffer(), "");
        assert!(matches!(
            enter_guess(&mut game, "cr"),
            Err(SubmitRejection::WrongLength { actual: 2, .. })
        ));
        assert_eq!(game.guess_count(), 0);
    }

    #[test]
    fn non_letters_are_dropped() {
        let mut game = session("crane");
        assert_eq!(
            enter_guess(&mut game, "cr4ne"),
            Err(SubmitRejection::WrongLength {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(game.guess_count(), 0);
    }

    #[test]
    fn finished_game_rejects_guesses() {
        let mut game = session("crane");
        enter_guess(&mut game, "crane").unwrap();
        assert_eq!(enter_guess(&mut game, "slate"), Err(SubmitRejection::GameOver));
    }
}
