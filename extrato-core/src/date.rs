//! Year resolution for `dd/mm` dates against a due-date anchor.

use chrono::{Datelike, NaiveDate};

/// Decide which calendar year a `dd/mm` transaction date belongs to.
///
/// Without an anchor the caller-supplied `default_year` is used (callers
/// thread the wall-clock year in at the edge so the core stays
/// deterministic). With an anchor, a transaction month greater than the due
/// month means the statement crossed a year boundary (a January due date
/// covers December purchases), so the transaction gets the year before the
/// due date's; otherwise it gets the due date's year.
///
/// This heuristic only holds for billing cycles spanning at most one year.
pub fn resolve_year(month: u32, due_date: Option<NaiveDate>, default_year: i32) -> i32 {
    match due_date {
        Some(due) if month > due.month() => due.year() - 1,
        Some(due) => due.year(),
        None => default_year,
    }
}
