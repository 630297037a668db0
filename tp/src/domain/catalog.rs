//! Fixed option lists offered by the form

use tracing::debug;

/// Destinations offered as completions for the destination field
pub const SAMPLE_DESTINATIONS: &[&str] = &[
    "Tokyo, Japan",
    "Paris, France",
    "New York, USA",
    "Bali, Indonesia",
    "Rome, Italy",
    "Barcelona, Spain",
    "London, UK",
    "Bangkok, Thailand",
];

/// Largest traveler count offered by the form picker
pub const MAX_TRAVELER_CHOICE: u32 = 8;

/// Sample destinations containing `query`, case-insensitively
///
/// An empty query matches every destination.
pub fn suggest_destinations(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    let matches: Vec<&'static str> = SAMPLE_DESTINATIONS
        .iter()
        .copied()
        .filter(|d| d.to_lowercase().contains(&needle))
        .collect();
    debug!(%query, count = matches.len(), "suggest_destinations: filtered");
    matches
}

/// Label for a traveler count, e.g. "1 Traveler" or "3 Travelers"
pub fn travelers_label(count: u32) -> String {
    if count == 1 {
        format!("{} Traveler", count)
    } else {
        format!("{} Travelers", count)
    }
}
