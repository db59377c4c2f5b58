use mixcli::session::PlaylistSet;
use mixcli::types::{AlbumRef, ImageRef, Track, TrackArtist};

// Helper function to create a test track
fn create_test_track(id: &str, name: &str, artist_name: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artists: vec![TrackArtist {
            name: artist_name.to_string(),
        }],
        album: AlbumRef {
            images: vec![ImageRef {
                url: format!("https://images.example/{}/small", id),
            }],
        },
        preview_url: Some(format!("https://previews.example/{}", id)),
    }
}

#[test]
fn test_add_is_idempotent() {
    let mut playlist = PlaylistSet::new();

    assert!(playlist.add(create_test_track("id1", "Track 1", "Artist A")));
    assert!(!playlist.add(create_test_track("id1", "Track 1", "Artist A")));

    assert_eq!(playlist.len(), 1);
    assert_eq!(playlist.list()[0].id, "id1");
}

#[test]
fn test_add_rejects_same_id_with_different_metadata() {
    let mut playlist = PlaylistSet::new();

    playlist.add(create_test_track("id1", "Track 1", "Artist A"));
    playlist.add(create_test_track("id1", "Renamed", "Artist B"));

    // First occurrence wins
    assert_eq!(playlist.len(), 1);
    assert_eq!(playlist.list()[0].name, "Track 1");
}

#[test]
fn test_insertion_order_is_preserved() {
    let mut playlist = PlaylistSet::new();

    playlist.add(create_test_track("id3", "Track 3", "Artist C"));
    playlist.add(create_test_track("id1", "Track 1", "Artist A"));
    playlist.add(create_test_track("id2", "Track 2", "Artist B"));

    let ids: Vec<&str> = playlist.list().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["id3", "id1", "id2"]);
}

#[test]
fn test_remove_by_id() {
    let mut playlist = PlaylistSet::new();

    playlist.add(create_test_track("id1", "Track 1", "Artist A"));
    playlist.add(create_test_track("id2", "Track 2", "Artist B"));
    playlist.add(create_test_track("id3", "Track 3", "Artist C"));

    assert!(playlist.remove("id2"));

    let ids: Vec<&str> = playlist.list().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["id1", "id3"]);
}

#[test]
fn test_remove_absent_id_is_a_noop() {
    let mut playlist = PlaylistSet::new();

    playlist.add(create_test_track("id1", "Track 1", "Artist A"));

    assert!(!playlist.remove("missing"));
    assert_eq!(playlist.len(), 1);
}

#[test]
fn test_no_duplicate_ids_across_interleaved_operations() {
    let mut playlist = PlaylistSet::new();

    playlist.add(create_test_track("id1", "Track 1", "Artist A"));
    playlist.add(create_test_track("id2", "Track 2", "Artist B"));
    playlist.remove("id1");
    playlist.add(create_test_track("id1", "Track 1", "Artist A"));
    playlist.add(create_test_track("id2", "Track 2", "Artist B"));
    playlist.add(create_test_track("id3", "Track 3", "Artist C"));
    playlist.remove("id2");
    playlist.add(create_test_track("id2", "Track 2", "Artist B"));

    for track in playlist.list() {
        let count = playlist.list().iter().filter(|t| t.id == track.id).count();
        assert_eq!(count, 1, "duplicate id {} in playlist", track.id);
    }

    // Re-added tracks land at the end
    let ids: Vec<&str> = playlist.list().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["id1", "id3", "id2"]);
}

#[test]
fn test_clear_empties_the_playlist() {
    let mut playlist = PlaylistSet::new();

    playlist.add(create_test_track("id1", "Track 1", "Artist A"));
    playlist.add(create_test_track("id2", "Track 2", "Artist B"));
    playlist.clear();

    assert!(playlist.is_empty());
    assert!(!playlist.contains("id1"));
}
