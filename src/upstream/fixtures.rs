//! Sample upstream payloads for tests

use serde_json::{json, Value};

use super::client::Resource;
use super::transport::fake::FakeTransport;

pub const BASE_URL: &str = "http://upstream.test/api";

pub const ARTIST_COUNT: usize = 6;

pub fn url(resource: Resource) -> String {
    format!("{}/{}", BASE_URL, resource.path())
}

fn artist(id: i64, name: &str, members: &[&str], creation: i32, first_album: &str) -> Value {
    json!({
        "id": id,
        "image": format!("{}/images/{}.jpeg", BASE_URL, id),
        "name": name,
        "members": members,
        "creationDate": creation,
        "firstAlbum": first_album,
        "locations": format!("{}/locations/{}", BASE_URL, id),
        "concertDates": format!("{}/dates/{}", BASE_URL, id),
        "relations": format!("{}/relation/{}", BASE_URL, id),
    })
}

pub fn artists_json() -> String {
    json!([
        artist(
            1,
            "Queen",
            &["Freddie Mercury", "Brian May", "John Deacon", "Roger Taylor"],
            1970,
            "14-12-1973"
        ),
        artist(
            2,
            "SOJA",
            &[
                "Jacob Hemphill",
                "Bob Jefferson",
                "Ryan Berty",
                "Ken Brownell",
                "Patrick O'Shea",
                "Hellman Escorcia",
                "Rafael Rodriguez",
                "Trevor Young"
            ],
            1997,
            "05-06-2002"
        ),
        artist(
            3,
            "Pink Floyd",
            &["Syd Barrett", "David Gilmour", "Roger Waters", "Richard Wright", "Nick Mason"],
            1965,
            "05-08-1967"
        ),
        artist(
            4,
            "Scorpions",
            &["Klaus Meine", "Rudolf Schenker", "Matthias Jabs", "Mikkey Dee"],
            1965,
            "02-01-1972"
        ),
        artist(5, "Kendrick Lamar", &["Kendrick Lamar"], 2004, "02-07-2011"),
        artist(
            6,
            "Mamonas Assassinas",
            &["Dinho", "Bento Hinoto", "Julio Rasec", "Samuel Reoli", "Sergio Reoli"],
            1990,
            "unknown"
        ),
    ])
    .to_string()
}

fn relation_entries() -> Vec<(i64, Value)> {
    vec![
        (
            1,
            json!({
                "london-uk": ["24-11-1991"],
                "osaka-japan": ["28-04-1985", "29-04-1985"],
                "seattle-washington-usa": ["18-03-1977"]
            }),
        ),
        (
            2,
            json!({
                "los_angeles-usa": ["21-06-2019"],
                "playa_del_carmen-mexico": ["05-12-2019", "06-12-2019"]
            }),
        ),
        (
            3,
            json!({
                "berlin-germany": ["17-07-1990"],
                "moscow-russia": ["03-06-1989"]
            }),
        ),
        (
            4,
            json!({
                "new_york-usa": ["09-04-2020"],
                "sao_paulo-brazil": ["*15-01-1985"]
            }),
        ),
        (5, json!({ "paris-france": ["07-07-2018"] })),
        (6, json!({ "sao_paulo-brazil": ["02-03-1996"] })),
    ]
}

pub fn relations_json() -> String {
    let index: Vec<Value> = relation_entries()
        .into_iter()
        .map(|(id, dates_locations)| json!({ "id": id, "datesLocations": dates_locations }))
        .collect();
    json!({ "index": index }).to_string()
}

pub fn locations_json() -> String {
    let index: Vec<Value> = relation_entries()
        .into_iter()
        .map(|(id, dates_locations)| {
            let keys: Vec<String> = dates_locations
                .as_object()
                .map(|map| map.keys().cloned().collect())
                .unwrap_or_default();
            json!({
                "id": id,
                "locations": keys,
                "dates": format!("{}/dates/{}", BASE_URL, id),
            })
        })
        .collect();
    json!({ "index": index }).to_string()
}

pub fn dates_json() -> String {
    let index: Vec<Value> = relation_entries()
        .into_iter()
        .map(|(id, dates_locations)| {
            let dates: Vec<Value> = dates_locations
                .as_object()
                .map(|map| {
                    map.values()
                        .flat_map(|v| v.as_array().cloned().unwrap_or_default())
                        .collect()
                })
                .unwrap_or_default();
            json!({ "id": id, "dates": dates })
        })
        .collect();
    json!({ "index": index }).to_string()
}

/// Register all four resources on the fake transport
pub fn install(transport: &FakeTransport) {
    transport.respond_json(&url(Resource::Artists), artists_json());
    transport.respond_json(&url(Resource::Locations), locations_json());
    transport.respond_json(&url(Resource::Dates), dates_json());
    transport.respond_json(&url(Resource::Relations), relations_json());
}
