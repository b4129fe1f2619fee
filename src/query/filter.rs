//! Attribute filters
//!
//! Inclusive range filters on creation year, first-album year and member
//! count, plus an optional concert-location filter.

use crate::catalog::Snapshot;
use crate::upstream::{Artist, Relation};

/// Filter criteria. Every range is inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    pub creation_min: i32,
    pub creation_max: i32,
    pub first_album_min: i32,
    pub first_album_max: i32,
    pub members_min: usize,
    pub members_max: usize,
    /// Location terms; empty means no location filter
    pub locations: Vec<String>,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            creation_min: 0,
            creation_max: 9999,
            first_album_min: 0,
            first_album_max: 9999,
            members_min: 0,
            members_max: 100,
            locations: Vec::new(),
        }
    }
}

impl FilterParams {
    /// Criteria that let every artist through
    pub fn widest() -> Self {
        Self {
            creation_min: i32::MIN,
            creation_max: i32::MAX,
            first_album_min: i32::MIN,
            first_album_max: i32::MAX,
            members_min: 0,
            members_max: usize::MAX,
            locations: Vec::new(),
        }
    }
}

/// Artists matching every criterion, in snapshot order
pub fn apply_filters(snapshot: &Snapshot, params: &FilterParams) -> Vec<Artist> {
    let terms: Vec<String> = params.locations.iter().map(|l| l.to_lowercase()).collect();

    snapshot
        .artists
        .iter()
        .filter(|artist| matches_ranges(artist, params))
        .filter(|artist| {
            terms.is_empty() || has_location_match(snapshot.relation(artist.id), &terms)
        })
        .cloned()
        .collect()
}

fn matches_ranges(artist: &Artist, params: &FilterParams) -> bool {
    if artist.creation_date < params.creation_min || artist.creation_date > params.creation_max {
        return false;
    }

    let album_year = extract_year(&artist.first_album);
    if album_year < params.first_album_min || album_year > params.first_album_max {
        return false;
    }

    let members = artist.members.len();
    members >= params.members_min && members <= params.members_max
}

/// Year from the last `-`-separated field, e.g. `"14-12-1995"` -> 1995.
/// Unparsable input yields 0.
pub fn extract_year(date: &str) -> i32 {
    date.rsplit('-')
        .next()
        .and_then(|field| field.trim().parse().ok())
        .unwrap_or(0)
}

/// Plain substring match of lowercased terms against lowercased location keys.
///
/// `"us"` also matches `"russia"`.
fn has_location_match(relation: Option<&Relation>, lowercase_terms: &[String]) -> bool {
    let Some(relation) = relation else {
        return false;
    };

    relation.dates_locations.keys().any(|location| {
        let location = location.to_lowercase();
        lowercase_terms.iter().any(|term| location.contains(term.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::{DateIndex, LocationIndex, RelationIndex};
    use std::collections::BTreeMap;

    fn artist(id: i64, creation: i32, first_album: &str, members: usize) -> Artist {
        Artist {
            id,
            image: String::new(),
            name: format!("Artist {}", id),
            members: (0..members).map(|m| format!("Member {}", m)).collect(),
            creation_date: creation,
            first_album: first_album.to_string(),
            locations: String::new(),
            concert_dates: String::new(),
            relations: String::new(),
        }
    }

    fn relation(id: i64, keys: &[&str]) -> Relation {
        Relation {
            id,
            dates_locations: keys
                .iter()
                .map(|k| (k.to_string(), vec!["01-01-2020".to_string()]))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn snapshot(artists: Vec<Artist>, relations: Vec<Relation>) -> Snapshot {
        Snapshot {
            artists,
            locations: LocationIndex::default(),
            dates: DateIndex::default(),
            relations: RelationIndex { index: relations },
        }
    }

    fn ids(artists: &[Artist]) -> Vec<i64> {
        artists.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_widest_filter_is_identity() {
        let snap = snapshot(
            vec![
                artist(3, 1965, "05-08-1967", 5),
                artist(1, -20, "garbage", 0),
                artist(2, 2004, "02-07-2011", 1),
            ],
            vec![],
        );

        let result = apply_filters(&snap, &FilterParams::widest());
        assert_eq!(result, snap.artists);
    }

    #[test]
    fn test_creation_range() {
        let snap = snapshot(
            vec![artist(1, 1970, "01-01-1975", 4), artist(2, 1990, "01-01-1995", 4)],
            vec![],
        );
        let params = FilterParams {
            creation_min: 1980,
            creation_max: 2000,
            ..FilterParams::default()
        };

        assert_eq!(ids(&apply_filters(&snap, &params)), vec![2]);
    }

    #[test]
    fn test_ranges_are_inclusive() {
        let snap = snapshot(vec![artist(1, 1980, "01-01-2000", 4)], vec![]);
        let params = FilterParams {
            creation_min: 1980,
            creation_max: 1980,
            first_album_min: 2000,
            first_album_max: 2000,
            members_min: 4,
            members_max: 4,
            locations: vec![],
        };

        assert_eq!(ids(&apply_filters(&snap, &params)), vec![1]);
    }

    #[test]
    fn test_first_album_and_members() {
        let snap = snapshot(
            vec![
                artist(1, 1970, "14-12-1973", 4),
                artist(2, 1997, "05-06-2002", 8),
                artist(3, 2004, "02-07-2011", 1),
            ],
            vec![],
        );

        let params = FilterParams {
            first_album_min: 2000,
            ..FilterParams::default()
        };
        assert_eq!(ids(&apply_filters(&snap, &params)), vec![2, 3]);

        let params = FilterParams {
            members_min: 2,
            members_max: 5,
            ..FilterParams::default()
        };
        assert_eq!(ids(&apply_filters(&snap, &params)), vec![1]);
    }

    #[test]
    fn test_unparsable_album_year_is_zero() {
        assert_eq!(extract_year("14-12-1995"), 1995);
        assert_eq!(extract_year("1995"), 1995);
        assert_eq!(extract_year("unknown"), 0);
        assert_eq!(extract_year("12-1995-"), 0);
        assert_eq!(extract_year(""), 0);

        let snap = snapshot(vec![artist(1, 1990, "unknown", 3)], vec![]);
        let params = FilterParams {
            first_album_min: 1,
            ..FilterParams::default()
        };
        assert!(apply_filters(&snap, &params).is_empty());
    }

    #[test]
    fn test_location_filter() {
        let snap = snapshot(
            vec![
                artist(1, 1970, "14-12-1973", 4),
                artist(2, 1997, "05-06-2002", 8),
                artist(3, 1965, "05-08-1967", 5),
            ],
            vec![
                relation(1, &["seattle-washington-usa", "london-uk"]),
                relation(2, &["playa_del_carmen-mexico"]),
                relation(3, &["moscow-russia"]),
            ],
        );

        let params = FilterParams {
            locations: vec!["WASHINGTON".to_string()],
            ..FilterParams::default()
        };
        assert_eq!(ids(&apply_filters(&snap, &params)), vec![1]);

        let params = FilterParams {
            locations: vec!["mexico".to_string(), "uk".to_string()],
            ..FilterParams::default()
        };
        assert_eq!(ids(&apply_filters(&snap, &params)), vec![1, 2]);
    }

    #[test]
    fn test_location_filter_is_plain_substring() {
        let snap = snapshot(
            vec![artist(3, 1965, "05-08-1967", 5)],
            vec![relation(3, &["moscow-russia"])],
        );
        let params = FilterParams {
            locations: vec!["us".to_string()],
            ..FilterParams::default()
        };

        assert_eq!(ids(&apply_filters(&snap, &params)), vec![3]);
    }

    #[test]
    fn test_location_filter_without_relation() {
        let snap = snapshot(vec![artist(1, 1970, "14-12-1973", 4)], vec![]);
        let params = FilterParams {
            locations: vec!["usa".to_string()],
            ..FilterParams::default()
        };

        assert!(apply_filters(&snap, &params).is_empty());
    }
}
