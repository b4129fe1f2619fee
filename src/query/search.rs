//! Free-text search and search-bar suggestions
//!
//! Both match a case-insensitive substring against the artist name, each
//! member, the creation year and the first-album date.

use serde::Serialize;
use std::collections::HashSet;

use crate::catalog::Snapshot;
use crate::upstream::Artist;

/// Upper bound on suggestions returned for one query
pub const MAX_SUGGESTIONS: usize = 10;

/// What a suggestion refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SuggestionKind {
    #[serde(rename = "artist/band")]
    Artist,
    #[serde(rename = "member")]
    Member,
    #[serde(rename = "creation date")]
    CreationDate,
    #[serde(rename = "first album date")]
    FirstAlbum,
}

/// One search-bar suggestion, serialized as `{"text": ..., "type": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Suggestion {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
}

/// Artists matching `query`, in snapshot order
pub fn search_artists(snapshot: &Snapshot, query: &str) -> Vec<Artist> {
    let needle = query.to_lowercase();
    snapshot
        .artists
        .iter()
        .filter(|artist| matches_artist(artist, &needle))
        .cloned()
        .collect()
}

fn matches_artist(artist: &Artist, needle: &str) -> bool {
    artist.name.to_lowercase().contains(needle)
        || artist
            .members
            .iter()
            .any(|member| member.to_lowercase().contains(needle))
        || artist.creation_date.to_string().contains(needle)
        || artist.first_album.to_lowercase().contains(needle)
}

/// Deduplicated typed suggestions in discovery order, at most [`MAX_SUGGESTIONS`]
pub fn suggestions(snapshot: &Snapshot, query: &str) -> Vec<Suggestion> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut collector = SuggestionCollector::default();

    for artist in &snapshot.artists {
        if artist.name.to_lowercase().contains(&needle) {
            collector.push(&artist.name, SuggestionKind::Artist);
        }

        for member in &artist.members {
            if member.to_lowercase().contains(&needle) {
                collector.push(member, SuggestionKind::Member);
            }
        }

        let creation = artist.creation_date.to_string();
        if creation.contains(&needle) {
            collector.push(&creation, SuggestionKind::CreationDate);
        }

        if artist.first_album.to_lowercase().contains(&needle) {
            collector.push(&artist.first_album, SuggestionKind::FirstAlbum);
        }

        if collector.is_full() {
            break;
        }
    }

    collector.items
}

#[derive(Default)]
struct SuggestionCollector {
    items: Vec<Suggestion>,
    seen: HashSet<(String, SuggestionKind)>,
}

impl SuggestionCollector {
    fn push(&mut self, text: &str, kind: SuggestionKind) {
        if self.is_full() {
            return;
        }
        if self.seen.insert((text.to_string(), kind)) {
            self.items.push(Suggestion {
                text: text.to_string(),
                kind,
            });
        }
    }

    fn is_full(&self) -> bool {
        self.items.len() >= MAX_SUGGESTIONS
    }
}
