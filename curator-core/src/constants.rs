//! Workspace-wide constants.

/// Token meaning "every project is selected" when it is the first entry of
/// the `select_projects` list.
pub const WILDCARD_TOKEN: &str = "*";

/// Suffix appended to a release item's relative path to derive the path of
/// its matching snapshot.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Divisor converting `keep_days` into whole calendar months (truncating).
/// The month-based cutoff is intentional: 180 days becomes exactly 6
/// calendar months back, not 180 x 24h.
pub const DAYS_PER_MONTH: u32 = 30;
