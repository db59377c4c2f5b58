use rand::{Rng, distr::Alphanumeric};

use crate::types::{ImageRef, Track, TrackTableRow};

/// Generates the random `state` value sent with the authorization request
/// and verified on the redirect back.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

pub fn format_artists(track: &Track) -> String {
    track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Picks the smallest album-art rendition. The catalog returns images
/// largest-first, so the smallest is the last entry.
pub fn smallest_image(images: &[ImageRef]) -> Option<&str> {
    images.last().map(|img| img.url.as_str())
}

pub fn track_table_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            position: i + 1,
            name: t.name.clone(),
            artists: format_artists(t),
            preview: match &t.preview_url {
                Some(url) => url.clone(),
                None => "no preview available".to_string(),
            },
        })
        .collect()
}
