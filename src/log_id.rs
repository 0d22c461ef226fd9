// src/log_id.rs
// Timestamp ids for new operation records

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use std::cell::Cell;

/// Format of record ids: sortable, one-second resolution
pub const LOG_ID_FORMAT: &str = "%Y%m%d%H%M%S";

/// Source of ids for new records
pub trait LogIdGenerator {
    fn next_id(&self) -> String;
}

/// Format a point in time as a record id
pub fn format_log_id<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(LOG_ID_FORMAT).to_string()
}

/// Ids from the local wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl LogIdGenerator for LocalClock {
    fn next_id(&self) -> String {
        format_log_id(&Local::now())
    }
}

/// Ids counting up one second from a fixed start, for deterministic sessions
#[derive(Debug)]
pub struct SequentialIds {
    next: Cell<DateTime<Utc>>,
}

impl SequentialIds {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            next: Cell::new(start),
        }
    }
}

impl LogIdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let at = self.next.get();
        self.next
            .set(at.checked_add_signed(TimeDelta::seconds(1)).unwrap_or(at));
        format_log_id(&at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_log_id(&at), "20240309070501");
    }

    #[test]
    fn test_local_clock_shape() {
        let id = LocalClock.next_id();
        assert_eq!(id.len(), 14);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_ids_sort_chronologically() {
        let earlier = format_log_id(&Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap());
        let later = format_log_id(&Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert!(earlier < later);
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::starting_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 59).unwrap());
        assert_eq!(ids.next_id(), "20240101000059");
        assert_eq!(ids.next_id(), "20240101000100");
        assert_eq!(ids.next_id(), "20240101000101");
    }
}
