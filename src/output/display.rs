//! Display functions for command results

use super::formatters::{create_progress_bar, format_elapsed, format_row, keyboard_lines};
use crate::commands::{AuditReport, ScheduleEntry};
use crate::game::{GameSession, GameStatus};
use colored::Colorize;

/// Print the board, keyboard and unlocked hints of a session
pub fn print_session(session: &GameSession) {
    let gaps = session.target().gap_after();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {}  {}  {}",
        "Purrdle".bright_yellow().bold(),
        format!("({})", session.mode()).bright_black(),
        format!("#{}", session.public_id()).bright_black(),
        format_elapsed(session.elapsed()).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    for row in session.board() {
        println!("  {}", format_row(&row, &gaps));
    }

    println!();
    for line in keyboard_lines(&session.keyboard()) {
        println!("  {line}");
    }

    let definitions = session.visible_definitions();
    if !definitions.is_empty() {
        println!("\n📖 {}", "Definitions".bright_cyan().bold());
        for (i, definition) in definitions.iter().enumerate() {
            println!("   {}. {definition}", i + 1);
        }
    }

    let inputs = session.hint_inputs();
    let elapsed = session.elapsed().as_secs_f64();
    if let Some(progress) = session.hints().definition_progress(inputs, elapsed) {
        println!(
            "   next definition [{}]",
            create_progress_bar(progress, 1.0, 20).bright_black()
        );
    }
    if let Some(progress) = session
        .hints()
        .letter_progress(inputs, elapsed, &session.known_positions()) {
        println!(
            "   next letter     [{}]",
            create_progress_bar(progress, 1.0, 20).bright_black()
        );
    }
}

/// Print the end-of-game banner, solution and share text
pub fn print_outcome(session: &GameSession) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.status() {
        GameStatus::Won => {
            let guesses = session.guess_count();
            println!(
                "{}",
                format!(
                    "🐾 Solved in {guesses} {}!",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameStatus::Lost => println!("{}", "😿 Out of guesses".red().bold()),
        GameStatus::Playing => return,
    }

    if let Some(solution) = session.solution() {
        println!(
            "   The word was {}",
            format_row(&solution, &session.target().gap_after())
        );
    }
    for (i, definition) in session.visible_definitions().iter().enumerate() {
        println!("   {}. {definition}", i + 1);
    }
    if let Some(example) = session.visible_example() {
        println!("   \"{}\"", example.italic());
    }

    println!("\n{}", session.share_summary());
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print today's identifier (never the word)
pub fn print_today(entry: &ScheduleEntry) {
    println!(
        "Purrdle day {} ({}): {}",
        entry.day_number,
        entry.date,
        entry.public_id.bright_yellow().bold()
    );
}

/// Print upcoming daily identifiers
pub fn print_schedule(entries: &[ScheduleEntry]) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "DAILY SCHEDULE".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());
    for entry in entries {
        println!(
            "  {:>5}  {}  {}",
            entry.day_number,
            entry.date,
            entry.public_id.bright_yellow()
        );
    }
}

/// Print the result of a catalog audit
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CATALOG AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Words checked:    {}", report.total_words);
    println!(
        "   Distinct ids:     {}",
        pass_fail(report.distinct_ids == report.total_words, report.distinct_ids)
    );
    println!(
        "   Daily cycle:      {}",
        pass_fail(
            report.daily_cycle_distinct == report.total_words,
            report.daily_cycle_distinct
        )
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    if !report.duplicates.is_empty() {
        println!("\n🔁 {}", "Duplicates:".yellow().bold());
        for (word, count) in &report.duplicates {
            println!("   {} ×{count}", word.yellow());
        }
    }

    if !report.issues.is_empty() {
        println!("\n⚠️  {}", "Issues:".yellow().bold());
        for issue in &report.issues {
            println!("   {:>5} {:<12} {}", issue.index, issue.word, issue.kind);
        }
    }

    println!();
    if report.is_clean() {
        println!("{}", "✅ Catalog is sound".green().bold());
    } else {
        println!("{}", "❌ Catalog has problems".red().bold());
    }
}

fn pass_fail(ok: bool, value: usize) -> String {
    if ok {
        value.to_string().green().to_string()
    } else {
        value.to_string().red().bold().to_string()
    }
}
