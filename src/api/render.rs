//! HTML pages
//!
//! Pages are assembled with `format!`; every interpolated value goes
//! through [`html_escape`].

use serde::Serialize;

use crate::query::{format_date, format_location, FilterParams, GeoLocation};
use crate::upstream::{Artist, Relation};

/// Escape HTML special characters for safe rendering
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Shared page chrome: header, navigation and search bar
fn layout(title: &str, active_tab: &str, search_query: &str, content: &str) -> String {
    let tab = |name: &str| if name == active_tab { " class=\"active\"" } else { "" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Groupie Tracker</title>
</head>
<body>
    <header>
        <nav>
            <a href="/"{home_class}>Artists</a>
            <a href="/search"{search_class}>Search</a>
        </nav>
        <form action="/search" method="get" class="search-bar">
            <input type="search" name="q" value="{query}" placeholder="Artist, member, year..." autocomplete="off" list="suggestions">
            <datalist id="suggestions"></datalist>
            <button type="submit">Search</button>
        </form>
    </header>
    <main>
{content}
    </main>
    <script>
        const input = document.querySelector('.search-bar input');
        const list = document.getElementById('suggestions');
        input.addEventListener('input', async () => {{
            const response = await fetch('/api/suggestions?q=' + encodeURIComponent(input.value));
            if (!response.ok) return;
            const items = await response.json();
            list.innerHTML = '';
            for (const item of items) {{
                const option = document.createElement('option');
                option.value = item.text;
                option.label = item.text + ' - ' + item.type;
                list.appendChild(option);
            }}
        }});
    </script>
</body>
</html>"#,
        title = html_escape(title),
        home_class = tab("home"),
        search_class = tab("search"),
        query = html_escape(search_query),
        content = content,
    )
}

fn artist_card(artist: &Artist) -> String {
    format!(
        r#"        <a class="artist-card" href="/artist/{id}">
            <img src="{image}" alt="{name}" loading="lazy">
            <h3>{name}</h3>
            <p>{year} &middot; {members} member(s)</p>
        </a>"#,
        id = artist.id,
        image = html_escape(&artist.image),
        name = html_escape(&artist.name),
        year = artist.creation_date,
        members = artist.members.len(),
    )
}

fn artist_grid(artists: &[Artist]) -> String {
    if artists.is_empty() {
        return "        <p class=\"empty\">No artists found.</p>".to_string();
    }
    let cards: Vec<String> = artists.iter().map(artist_card).collect();
    format!("    <section class=\"artist-grid\">\n{}\n    </section>", cards.join("\n"))
}

fn filter_form(params: &FilterParams) -> String {
    format!(
        r#"    <form class="filters" action="/" method="get">
        <label>Created <input type="number" name="creation_min" value="{creation_min}"> - <input type="number" name="creation_max" value="{creation_max}"></label>
        <label>First album <input type="number" name="album_min" value="{album_min}"> - <input type="number" name="album_max" value="{album_max}"></label>
        <label>Members <input type="number" name="members_min" value="{members_min}"> - <input type="number" name="members_max" value="{members_max}"></label>
        <label>Locations <input type="text" name="location" value="{locations}" placeholder="usa, japan"></label>
        <button type="submit">Filter</button>
        <a href="/">Reset</a>
    </form>"#,
        creation_min = params.creation_min,
        creation_max = params.creation_max,
        album_min = params.first_album_min,
        album_max = params.first_album_max,
        members_min = params.members_min,
        members_max = params.members_max,
        locations = html_escape(&params.locations.join(", ")),
    )
}

/// Artist grid with the filter form
pub fn index_page(artists: &[Artist], params: &FilterParams) -> String {
    let content = format!(
        "{}\n    <p class=\"count\">{} artist(s)</p>\n{}",
        filter_form(params),
        artists.len(),
        artist_grid(artists)
    );
    layout("Artists", "home", "", &content)
}

/// Artist details with every concert location and its dates
pub fn artist_page(artist: &Artist, relation: &Relation) -> String {
    let members: Vec<String> = artist
        .members
        .iter()
        .map(|m| format!("                <li>{}</li>", html_escape(m)))
        .collect();

    let concerts: Vec<String> = relation
        .dates_locations
        .iter()
        .map(|(location, dates)| {
            let dates: Vec<String> = dates
                .iter()
                .map(|d| html_escape(&format_date(d)))
                .collect();
            format!(
                "                <li><strong>{}</strong>: {}</li>",
                html_escape(&format_location(location)),
                dates.join(", ")
            )
        })
        .collect();

    let content = format!(
        r#"    <article class="artist">
        <img src="{image}" alt="{name}">
        <h1>{name}</h1>
        <dl>
            <dt>Created</dt><dd>{creation}</dd>
            <dt>First album</dt><dd>{first_album}</dd>
        </dl>
        <section>
            <h2>Members</h2>
            <ul>
{members}
            </ul>
        </section>
        <section>
            <h2>Concerts</h2>
            <ul>
{concerts}
            </ul>
            <a href="/map/{id}">Show on map</a>
        </section>
    </article>"#,
        id = artist.id,
        image = html_escape(&artist.image),
        name = html_escape(&artist.name),
        creation = artist.creation_date,
        first_album = html_escape(&format_date(&artist.first_album)),
        members = members.join("\n"),
        concerts = concerts.join("\n"),
    );

    layout(&artist.name, "home", "", &content)
}

/// Search results; `results` is `None` when no query was submitted
pub fn search_page(query: &str, results: Option<&[Artist]>) -> String {
    let content = match results {
        None => {
            "    <p>Search by artist, member, creation year or first album date.</p>".to_string()
        }
        Some(results) => format!(
            "    <h1>{} result(s) for \"{}\"</h1>\n{}",
            results.len(),
            html_escape(query),
            artist_grid(results)
        ),
    };

    layout("Search", "search", query, &content)
}

/// Map marker handed to the page script. `popup` is escaped HTML.
#[derive(Debug, Serialize)]
struct MapMarker {
    latitude: f64,
    longitude: f64,
    popup: String,
}

impl From<&GeoLocation> for MapMarker {
    fn from(location: &GeoLocation) -> Self {
        let dates: Vec<String> = location
            .dates
            .iter()
            .map(|d| html_escape(&format_date(d)))
            .collect();

        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            popup: format!(
                "<b>{}</b><br>{}",
                html_escape(&location.name),
                dates.join("<br>")
            ),
        }
    }
}

/// Concert map for one artist
pub fn map_page(artist: &Artist, locations: &[GeoLocation]) -> String {
    let markers: Vec<MapMarker> = locations.iter().map(MapMarker::from).collect();

    // Escape `</` so the payload cannot close the script element
    let markers = serde_json::to_string(&markers)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/");

    let content = format!(
        r#"    <h1>Concerts of {name}</h1>
    <p>{count} location(s) found. <a href="/artist/{id}">Back to artist</a></p>
    <div id="map" style="height: 480px"></div>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <script>
        const markers = {markers};
        const map = L.map('map').setView([20, 0], 2);
        L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
            attribution: '&copy; OpenStreetMap contributors'
        }}).addTo(map);
        const bounds = [];
        for (const marker of markers) {{
            L.marker([marker.latitude, marker.longitude])
                .bindPopup(marker.popup)
                .addTo(map);
            bounds.push([marker.latitude, marker.longitude]);
        }}
        if (bounds.length > 0) map.fitBounds(bounds, {{ padding: [40, 40] }});
    </script>"#,
        name = html_escape(&artist.name),
        count = locations.len(),
        id = artist.id,
        markers = markers,
    );

    layout(&format!("{} map", artist.name), "home", "", &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn artist() -> Artist {
        Artist {
            id: 7,
            image: "https://img.test/7.jpeg".to_string(),
            name: "Guns N' <Roses>".to_string(),
            members: vec!["Axl Rose".to_string(), "Slash".to_string()],
            creation_date: 1985,
            first_album: "21-07-1987".to_string(),
            locations: String::new(),
            concert_dates: String::new(),
            relations: String::new(),
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("hello"), "hello");
        assert_eq!(
            html_escape("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_artist_page_escapes_and_formats() {
        let relation = Relation {
            id: 7,
            dates_locations: BTreeMap::from([(
                "los_angeles-usa".to_string(),
                vec!["*05-06-1988".to_string()],
            )]),
        };

        let html = artist_page(&artist(), &relation);
        assert!(html.contains("Guns N&#39; &lt;Roses&gt;"));
        assert!(!html.contains("<Roses>"));
        assert!(html.contains("Los Angeles, Usa"));
        assert!(html.contains("5 June 1988"));
        assert!(html.contains("21 July 1987"));
        assert!(html.contains("href=\"/map/7\""));
    }

    #[test]
    fn test_index_page_lists_artists() {
        let html = index_page(&[artist()], &FilterParams::default());
        assert!(html.contains("href=\"/artist/7\""));
        assert!(html.contains("1 artist(s)"));
        assert!(html.contains("name=\"creation_max\" value=\"9999\""));
    }

    #[test]
    fn test_search_page_states() {
        let html = search_page("", None);
        assert!(html.contains("Search by artist"));

        let html = search_page("<q>", Some(&[]));
        assert!(html.contains("0 result(s) for \"&lt;q&gt;\""));
        assert!(html.contains("No artists found."));
    }

    fn location(name: &str, dates: &[&str]) -> GeoLocation {
        GeoLocation {
            name: name.to_string(),
            latitude: 51.5,
            longitude: -0.12,
            dates: dates.iter().map(|d| d.to_string()).collect(),
            artist_name: None,
        }
    }

    #[test]
    fn test_map_page_embeds_markers() {
        let html = map_page(&artist(), &[location("London, Uk", &["24-11-1991"])]);
        assert!(html.contains("\"latitude\":51.5"));
        assert!(html.contains("<b>London, Uk<\\/b><br>24 November 1991"));
        assert!(html.contains("1 location(s) found."));
    }

    #[test]
    fn test_map_page_escapes_location_names_and_formats_dates() {
        let html = map_page(
            &artist(),
            &[location("<img src=x onerror=alert(1)>", &["*15-01-1985"])],
        );

        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("15 January 1985"));
        assert!(!html.contains("*15-01-1985"));
    }

    #[test]
    fn test_map_page_cannot_close_script() {
        let html = map_page(&artist(), &[location("Paris</script>", &[])]);
        assert!(!html.contains("Paris</script>"));
        assert!(html.contains("Paris&lt;/script&gt;"));
    }
}
