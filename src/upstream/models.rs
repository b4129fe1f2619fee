//! Upstream data model
//!
//! Shapes of the four resources served by the artist API. Field names
//! follow the API's camelCase JSON keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A band or solo artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Unique positive identifier, shared with the location/date/relation records
    pub id: i64,
    /// Image URL
    pub image: String,
    /// Display name
    pub name: String,
    /// Member names in upstream order
    #[serde(default)]
    pub members: Vec<String>,
    /// Year the band was formed
    pub creation_date: i32,
    /// First album release date, usually `DD-MM-YYYY`
    pub first_album: String,
    /// URL of this artist's location record
    pub locations: String,
    /// URL of this artist's date record
    pub concert_dates: String,
    /// URL of this artist's relation record
    pub relations: String,
}

/// Concert locations for one artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    #[serde(default)]
    pub locations: Vec<String>,
    /// URL of the matching date record
    pub dates: String,
}

/// Root object of the locations resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationIndex {
    pub index: Vec<Location>,
}

/// Concert dates for one artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    pub id: i64,
    #[serde(default)]
    pub dates: Vec<String>,
}

/// Root object of the dates resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateIndex {
    pub index: Vec<Date>,
}

/// Location key to concert dates, for one artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub id: i64,
    /// Keys look like `seattle-washington-usa`
    #[serde(default)]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

/// Root object of the relation resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationIndex {
    pub index: Vec<Relation>,
}
