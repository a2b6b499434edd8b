//! Catalog audit
//!
//! Checks every entry of the loaded catalog in parallel, then verifies that
//! identifiers round-trip for every index and that one full daily cycle never
//! repeats a word.

use super::setup::GameSetup;
use crate::catalog::WordEntry;
use crate::selection::WordIdCodec;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::time::{Duration, Instant};

/// Problem found with a single entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IssueKind {
    NoDefinitions,
    NonPositiveQuality,
    IdRoundTrip,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDefinitions => write!(f, "no definitions"),
            Self::NonPositiveQuality => write!(f, "quality is not positive"),
            Self::IdRoundTrip => write!(f, "identifier does not round-trip"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditIssue {
    pub index: usize,
    pub word: String,
    pub kind: IssueKind,
}

#[derive(Debug, Clone)]
pub struct AuditReport {
    pub total_words: usize,
    pub issues: Vec<AuditIssue>,
    /// Words that appear more than once, with their count
    pub duplicates: Vec<(String, usize)>,
    pub distinct_ids: usize,
    /// Distinct words in one full daily cycle (equals `total_words` when sound)
    pub daily_cycle_distinct: usize,
    pub duration: Duration,
}

impl AuditReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
            && self.duplicates.is_empty()
            && self.distinct_ids == self.total_words
            && self.daily_cycle_distinct == self.total_words
    }
}

/// Audit the catalog of `setup`
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid.
pub fn run_audit(setup: &GameSetup, show_progress: bool) -> Result<AuditReport> {
    let start = Instant::now();
    let entries = setup.catalog.entries();
    let total = entries.len();

    let pb = if show_progress {
        ProgressBar::new(total as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message("checking entries");

    let mut issues: Vec<AuditIssue> = entries
        .par_iter()
        .enumerate()
        .flat_map_iter(|(index, entry)| {
            let found = check_entry(index, entry, setup.codec, total);
            pb.inc(1);
            found
        })
        .collect();
    issues.sort_by_key(|issue| (issue.index, issue.kind));

    pb.set_message("checking identifiers");
    let distinct_ids = entries
        .par_iter()
        .enumerate()
        .map(|(index, _)| setup.codec.encode(index))
        .collect::<FxHashSet<_>>()
        .len();

    pb.set_message("checking daily cycle");
    let cycle_start = setup.schedule.epoch();
    let daily_cycle_distinct = setup
        .schedule
        .upcoming(total, cycle_start, total as u64)
        .into_iter()
        .map(|(_, index)| index)
        .collect::<FxHashSet<_>>()
        .len();

    pb.finish_with_message("Complete!");

    let report = AuditReport {
        total_words: total,
        issues,
        duplicates: duplicates(entries),
        distinct_ids,
        daily_cycle_distinct,
        duration: start.elapsed(),
    };
    info!(
        "audited {} words: {} issues, {} duplicates",
        report.total_words,
        report.issues.len(),
        report.duplicates.len()
    );
    Ok(report)
}

fn check_entry(index: usize, entry: &WordEntry, codec: WordIdCodec, total: usize) -> Vec<AuditIssue> {
    let mut kinds = Vec::new();
    if (0..entry.definitions.len()).all(|i| entry.definition(i).is_none()) {
        kinds.push(IssueKind::NoDefinitions);
    }
    if entry.quality <= 0.0 {
        kinds.push(IssueKind::NonPositiveQuality);
    }
    if codec.decode(&codec.encode(index), total) != Some(index) {
        kinds.push(IssueKind::IdRoundTrip);
    }

    kinds
        .into_iter()
        .map(|kind| AuditIssue {
            index,
            word: entry.word.text().to_string(),
            kind,
        })
        .collect()
}

fn duplicates(entries: &[WordEntry]) -> Vec<(String, usize)> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for entry in entries {
        *counts.entry(entry.word.text()).or_insert(0) += 1;
    }
    let mut repeated: Vec<(String, usize)> = counts
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(word, n)| (word.to_string(), n))
        .collect();
    repeated.sort();
    repeated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{WordCatalog, csv::parse_catalog};
    use crate::config::AppConfig;

    #[test]
    fn embedded_catalog_is_clean() {
        let setup = GameSetup::new(WordCatalog::embedded().unwrap(), AppConfig::default()).unwrap();
        let report = run_audit(&setup, false).unwrap();
        assert_eq!(report.total_words, setup.catalog.len());
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn reports_entry_problems_and_duplicates() {
        let catalog = parse_catalog(
            "word,quality,d1,d2,d3\n\
             crane,5,bird,,\n\
             slate,0,,,\n\
             crane,3,machine,,\n",
        )
        .unwrap();
        let setup = GameSetup::new(catalog, AppConfig::default()).unwrap();
        let report = run_audit(&setup, false).unwrap();

        assert!(!report.is_clean());
        assert_eq!(report.duplicates, vec![("CRANE".to_string(), 2)]);
        let kinds: Vec<IssueKind> = report.issues.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![IssueKind::NoDefinitions, IssueKind::NonPositiveQuality]);
        assert!(report.issues.iter().all(|i| i.word == "SLATE"));
        assert_eq!(report.distinct_ids, 3);
        assert_eq!(report.daily_cycle_distinct, 3);
    }
}
