//! Daily word lookups: today's identifier and the upcoming schedule

use super::setup::GameSetup;
use chrono::NaiveDate;

/// One scheduled day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub day_number: i64,
    pub public_id: String,
}

/// Today's entry; the word itself is not included
#[must_use]
pub fn today_entry(setup: &GameSetup) -> ScheduleEntry {
    entry_for(setup, setup.today())
}

/// `days` consecutive schedule entries starting at `from`
#[must_use]
pub fn upcoming(setup: &GameSetup, from: NaiveDate, days: u64) -> Vec<ScheduleEntry> {
    setup
        .schedule
        .upcoming(setup.catalog.len(), from, days)
        .into_iter()
        .map(|(date, index)| ScheduleEntry {
            date,
            day_number: setup.schedule.day_number(date),
            public_id: setup.codec.encode(index),
        })
        .collect()
}

fn entry_for(setup: &GameSetup, date: NaiveDate) -> ScheduleEntry {
    let index = setup.schedule.index_for_date(setup.catalog.len(), date);
    ScheduleEntry {
        date,
        day_number: setup.schedule.day_number(date),
        public_id: setup.codec.encode(index),
    }
}
