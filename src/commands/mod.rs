//! Command implementations

pub mod audit;
pub mod ids;
pub mod setup;
pub mod simple;
pub mod today;

pub use audit::{AuditIssue, AuditReport, IssueKind, run_audit};
pub use ids::{decode_id, encode_index};
pub use setup::{GameSetup, route_from_flags};
pub use simple::{enter_guess, run_simple};
pub use today::{ScheduleEntry, today_entry, upcoming};
