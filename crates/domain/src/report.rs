//! Reports — read-only projections computed from bands on every request.

use std::collections::BTreeMap;

use crate::band::Band;

/// Band name → report entries. Ordered by name.
pub type Report = BTreeMap<String, Vec<String>>;

/// Build the report entries for a single band.
///
/// The first entry is the member count, followed by one entry per task
/// in task order, e.g. `"Rehearsal: READY"`.
#[must_use]
pub fn band_entries(band: &Band) -> Vec<String> {
    let mut entries = Vec::with_capacity(band.tasks.len() + 1);
    entries.push(format!("members: {}", band.members.len()));
    entries.extend(
        band.tasks
            .iter()
            .map(|task| format!("{}: {}", task.title, task.readiness(&band.members))),
    );
    entries
}

/// Build the global report for `bands`.
#[must_use]
pub fn global<'a>(bands: impl IntoIterator<Item = &'a Band>) -> Report {
    bands
        .into_iter()
        .map(|band| (band.name.clone(), band_entries(band)))
        .collect()
}
