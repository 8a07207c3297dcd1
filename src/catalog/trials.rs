//! Search trial table.
//!
//! Each entity type has an ordered list of field subsets, most specific
//! first. A resolution tries them in order and stops at the first query
//! that returns anything, so a match confirmed by more independent fields
//! always wins over a looser one.

use super::domain::{EntityType, SearchField};

use SearchField::{Album, Artist, DurationSeconds, Track, TrackTitles};

const TRACK_TRIALS: &[&[SearchField]] = &[
    &[Track, Artist, Album, DurationSeconds],
    &[Track, Artist, DurationSeconds],
    &[Track, Artist, Album],
    &[Track, DurationSeconds],
    &[Track, Album],
    &[Track],
];

const ALBUM_TRIALS: &[&[SearchField]] = &[&[Album, Artist, TrackTitles], &[Album, Artist]];

const ARTIST_TRIALS: &[&[SearchField]] = &[&[Artist]];

/// The static trial table for an entity type
pub fn trials_for(entity: EntityType) -> &'static [&'static [SearchField]] {
    match entity {
        EntityType::Track => TRACK_TRIALS,
        EntityType::Album => ALBUM_TRIALS,
        EntityType::Artist => ARTIST_TRIALS,
    }
}

/// Trial table as seen by one catalog.
///
/// Fields the catalog cannot filter on are dropped from every trial; trials
/// that become empty or repeat an earlier trial are removed, keeping the
/// original order.
pub fn effective_trials(
    entity: EntityType,
    supports: impl Fn(SearchField) -> bool,
) -> Vec<Vec<SearchField>> {
    let mut trials: Vec<Vec<SearchField>> = Vec::new();

    for trial in trials_for(entity) {
        let mut fields: Vec<SearchField> =
            trial.iter().copied().filter(|field| supports(*field)).collect();
        fields.sort();

        if !fields.is_empty() && !trials.contains(&fields) {
            trials.push(fields);
        }
    }

    trials
}
