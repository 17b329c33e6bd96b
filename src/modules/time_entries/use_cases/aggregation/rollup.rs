// Rollups over stored durations. Minutes are summed as i128 and converted once,
// so the result does not depend on entry order and cannot overflow.

use crate::modules::time_entries::core::time_entry::TimeEntry;
use std::collections::BTreeMap;

/// Hours logged across `entries`, rounded to one decimal place.
pub fn logged_hours(entries: &[TimeEntry]) -> f64 {
    minutes_to_hours(entries.iter().map(|entry| i128::from(entry.duration)).sum())
}

/// Hours per key, e.g. per task or per project.
pub fn hours_by<F>(entries: &[TimeEntry], key: F) -> BTreeMap<String, f64>
where
    F: Fn(&TimeEntry) -> &str,
{
    let mut minutes: BTreeMap<String, i128> = BTreeMap::new();
    for entry in entries {
        *minutes.entry(key(entry).to_string()).or_default() += i128::from(entry.duration);
    }
    minutes
        .into_iter()
        .map(|(key, total)| (key, minutes_to_hours(total)))
        .collect()
}

fn minutes_to_hours(minutes: i128) -> f64 {
    (minutes as f64 / 60.0 * 10.0).round() / 10.0
}
