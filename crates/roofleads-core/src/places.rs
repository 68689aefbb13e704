//! Records that flow through one lead-finding run.
//!
//! Everything here is created and dropped inside a single pipeline invocation.
//! The only mutation after construction is the ordering applied by
//! [`ResultTable::new`].

use serde::Serialize;

/// Display name used when the places service omits `name` for a result.
pub const PLACEHOLDER_NAME: &str = "N/A";

/// A resolved latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// One point of interest returned by a nearby search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceRecord {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PlaceRecord {
    /// Builds a record, substituting [`PLACEHOLDER_NAME`] when `name` is absent.
    #[must_use]
    pub fn new(name: Option<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            display_name: name.unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
            latitude,
            longitude,
        }
    }

    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// A [`PlaceRecord`] with its lead score attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPlaceRecord {
    #[serde(flatten)]
    pub place: PlaceRecord,
    pub lead_score: u32,
}

/// Scored places ordered by `lead_score`, highest first.
///
/// Records with equal scores keep the order they were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: Vec<ScoredPlaceRecord>,
}

impl ResultTable {
    #[must_use]
    pub fn new(mut rows: Vec<ScoredPlaceRecord>) -> Self {
        // `sort_by` is stable, which keeps upstream order among ties.
        rows.sort_by(|a, b| b.lead_score.cmp(&a.lead_score));
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[ScoredPlaceRecord] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredPlaceRecord> {
        self.rows.iter()
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<ScoredPlaceRecord> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a ScoredPlaceRecord;
    type IntoIter = std::slice::Iter<'a, ScoredPlaceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(name: &str, lead_score: u32) -> ScoredPlaceRecord {
        ScoredPlaceRecord {
            place: PlaceRecord::new(Some(name.to_string()), 40.0, -73.0),
            lead_score,
        }
    }

    #[test]
    fn missing_name_becomes_placeholder() {
        let place = PlaceRecord::new(None, 1.0, 2.0);
        assert_eq!(place.display_name, "N/A");
    }

    #[test]
    fn present_name_is_kept_verbatim() {
        let place = PlaceRecord::new(Some("  Main St ".to_string()), 1.0, 2.0);
        assert_eq!(place.display_name, "  Main St ");
    }

    #[test]
    fn table_sorts_descending_by_score() {
        let table = ResultTable::new(vec![scored("a", 1), scored("b", 5), scored("c", 3)]);
        let scores: Vec<u32> = table.iter().map(|r| r.lead_score).collect();
        assert_eq!(scores, vec![5, 3, 1]);
    }

    #[test]
    fn table_keeps_input_order_for_ties() {
        let table = ResultTable::new(vec![
            scored("first", 2),
            scored("top", 4),
            scored("second", 2),
            scored("third", 2),
        ]);
        let names: Vec<&str> = table
            .iter()
            .map(|r| r.place.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn empty_table() {
        let table = ResultTable::new(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn table_serializes_as_flat_rows() {
        let table = ResultTable::new(vec![scored("Main St", 4)]);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "display_name": "Main St",
                "latitude": 40.0,
                "longitude": -73.0,
                "lead_score": 4
            }])
        );
    }

    #[test]
    fn coordinate_display_matches_location_param() {
        assert_eq!(Coordinate::new(43.88, -79.44).to_string(), "43.88,-79.44");
    }
}
