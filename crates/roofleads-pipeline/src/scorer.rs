//! Fixed lead-score heuristic.
//!
//! The rule is a placeholder with no claim to measuring lead quality. It is
//! kept bit-for-bit stable so rankings stay comparable across runs.

use roofleads_core::{PlaceRecord, ResultTable, ScoredPlaceRecord};

const AVE_POINTS: u32 = 2;
const ST_POINTS: u32 = 3;
const LATITUDE_POINTS: u32 = 1;

/// Score one place.
///
/// - `+2` if the lowercased name contains `"ave"`
/// - `+3` if the lowercased name contains `"st"`
/// - `+1` if `latitude mod 2 < 1`, using floored modulo so the remainder is
///   always in `[0, 2)` (e.g. `-40.7 mod 2 == 1.3`)
///
/// The result is always in `0..=6`.
#[must_use]
pub fn lead_score(place: &PlaceRecord) -> u32 {
    let name = place.display_name.to_lowercase();
    let mut score = 0;
    if name.contains("ave") {
        score += AVE_POINTS;
    }
    if name.contains("st") {
        score += ST_POINTS;
    }
    if place.latitude.rem_euclid(2.0) < 1.0 {
        score += LATITUDE_POINTS;
    }
    score
}

/// Score every place and rank them highest first.
///
/// Ties keep the order in which `places` were supplied.
#[must_use]
pub fn score_places(places: Vec<PlaceRecord>) -> ResultTable {
    let rows = places
        .into_iter()
        .map(|place| {
            let lead_score = lead_score(&place);
            ScoredPlaceRecord { place, lead_score }
        })
        .collect();
    ResultTable::new(rows)
}
