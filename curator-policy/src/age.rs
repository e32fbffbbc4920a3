//! Age evaluation against a calendar-month cutoff.
//!
//! `keep_days` is converted to whole months by truncating division by 30 and
//! subtracted as calendar months, not as a fixed `days * 24h` duration:
//! keep_days=180 means exactly 6 calendar months back. The skew relative to
//! literal days is a deliberate behavior-parity choice, kept as-is.

use chrono::{DateTime, Months, Utc};

use curator_core::constants::DAYS_PER_MONTH;
use curator_core::model::ItemInfo;

/// Cutoff instant for the given policy: `now` minus `keep_days / 30`
/// calendar months.
pub fn cutoff(now: DateTime<Utc>, keep_days: u32) -> DateTime<Utc> {
    let months = keep_days / DAYS_PER_MONTH;
    now.checked_sub_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Whether any child is at least as old as the cutoff.
///
/// Scans in the supplied order and short-circuits on the first child whose
/// last-modified timestamp is not strictly after the cutoff. Returns false
/// only when every child is strictly inside the retention window.
pub fn has_older_than(children: &[ItemInfo], keep_days: u32, now: DateTime<Utc>) -> bool {
    let cutoff = cutoff(now, keep_days);
    for child in children {
        if child.last_modified <= cutoff {
            tracing::debug!(
                item = %child.path,
                last_modified = %child.last_modified,
                %cutoff,
                "item older than retention threshold"
            );
            return true;
        }
    }
    false
}

/// [`has_older_than`] evaluated at the current instant.
pub fn has_older_than_now(children: &[ItemInfo], keep_days: u32) -> bool {
    has_older_than(children, keep_days, Utc::now())
}
