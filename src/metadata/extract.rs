pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Derive `(title, artist)` from a filename stem.
///
/// `"Title | Artist"` (ASCII or full-width bar) is checked before
/// `"Artist - Title"`. With bars, the artist is the text between the first
/// and second bar and anything later is dropped; with `" - "`, everything
/// after the first separator is the title.
///
/// An empty side is never kept: an empty artist becomes `Unknown Artist`,
/// and an empty title takes the artist text (so `"| Artist"` is titled
/// `Artist`, by `Unknown Artist`).
pub fn extract_metadata(stem: &str) -> (String, String) {
    let mut parts = stem.split(['|', '｜']);
    if let (Some(title), Some(artist)) = (parts.next(), parts.next()) {
        return pick(title, artist);
    }
    if let Some((artist, title)) = stem.split_once(" - ") {
        return pick(title, artist);
    }
    (stem.to_string(), UNKNOWN_ARTIST.to_string())
}

fn pick(title: &str, artist: &str) -> (String, String) {
    let (title, artist) = (title.trim(), artist.trim());
    match (title.is_empty(), artist.is_empty()) {
        (_, true) => (title.to_string(), UNKNOWN_ARTIST.to_string()),
        (true, false) => (artist.to_string(), UNKNOWN_ARTIST.to_string()),
        (false, false) => (title.to_string(), artist.to_string()),
    }
}
