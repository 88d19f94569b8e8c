use super::*;
use std::path::Path;

fn track(id: &str, title: &str, artist: &str) -> Track {
    Track {
        id: TrackId::new(id),
        title: title.to_string(),
        artist: artist.to_string(),
        album: None,
        source_url: format!("/music/{id}.mp3"),
        duration_hint: None,
        is_karaoke_track: false,
        is_competition_eligible: false,
        cover_image_url: None,
        genre: None,
        difficulty: None,
    }
}

#[test]
fn search_is_case_insensitive_over_title_and_artist() {
    let tracks = vec![
        track("1", "Hello", "Adele"),
        track("2", "Halo", "Beyoncé"),
        track("3", "Yesterday", "The Beatles"),
    ];

    let hal = TrackFilter::default().with_query("HAL").apply(&tracks);
    assert_eq!(hal.len(), 1);
    assert_eq!(hal[0].title, "Halo");

    let beyonc = TrackFilter::default().with_query("beyonc").apply(&tracks);
    assert_eq!(beyonc.len(), 1);
    assert_eq!(beyonc[0].id, TrackId::new("2"));

    let none = TrackFilter::default().with_query("zeppelin").apply(&tracks);
    assert!(none.is_empty());
}

#[test]
fn search_matches_album_only_when_present() {
    let mut with_album = track("1", "Song", "Band");
    with_album.album = Some("Greatest Hits".to_string());
    let without_album = track("2", "Other", "Band");

    assert!(matches_query(&with_album, "greatest"));
    assert!(!matches_query(&without_album, "greatest"));
}

#[test]
fn blank_query_matches_everything() {
    let t = track("1", "Song", "Band");
    assert!(matches_query(&t, ""));
    assert!(matches_query(&t, "   "));
}

#[test]
fn karaoke_filter_keeps_only_karaoke_tracks_in_order() {
    let mut a = track("1", "A", "x");
    a.is_karaoke_track = true;
    let b = track("2", "B", "x");
    let mut c = track("3", "C", "x");
    c.is_karaoke_track = true;

    let catalog = ManifestCatalog::from_tracks(vec![a, b, c]);
    let karaoke = catalog.list_karaoke_tracks().unwrap();
    let ids: Vec<&str> = karaoke.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn genre_and_difficulty_filters_combine() {
    let mut rock_expert = track("1", "Bohemian Rhapsody", "Queen");
    rock_expert.genre = Some("rock".into());
    rock_expert.difficulty = Some(Difficulty::Expert);
    let mut rock_medium = track("2", "Don't Stop Believin'", "Journey");
    rock_medium.genre = Some("Rock".into());
    rock_medium.difficulty = Some(Difficulty::Medium);
    let mut classic_easy = track("3", "Sweet Caroline", "Neil Diamond");
    classic_easy.genre = Some("classic".into());
    classic_easy.difficulty = Some(Difficulty::Easy);
    let tracks = vec![rock_expert, rock_medium, classic_easy];

    let rock = TrackFilter {
        genre: Some("rock".into()),
        ..TrackFilter::default()
    };
    assert_eq!(rock.apply(&tracks).len(), 2);

    let rock_medium_only = TrackFilter {
        genre: Some("rock".into()),
        difficulty: Some(Difficulty::Medium),
        ..TrackFilter::default()
    };
    let hits = rock_medium_only.apply(&tracks);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, TrackId::new("2"));

    let all = TrackFilter {
        genre: Some("all".into()),
        ..TrackFilter::default()
    };
    assert_eq!(all.apply(&tracks).len(), 3);
}

#[test]
fn manifest_toml_is_validated_and_normalised() {
    let text = r#"
[[tracks]]
id = 1
title = "Bohemian Rhapsody"
artist = "Queen"
source_url = "songs/bohemian.mp3"
duration = "5:55"
is_karaoke_track = true
is_competition_master = true
genre = "rock"
difficulty = "expert"

[[tracks]]
id = "web-2"
title = "Sweet Caroline"
source_url = "https://cdn.example.com/caroline.mp3"
"#;
    let tracks = parse_manifest(text, false, Some(Path::new("/srv/catalog"))).unwrap();
    assert_eq!(tracks.len(), 2);

    let first = &tracks[0];
    assert_eq!(first.id.as_str(), "1");
    assert_eq!(
        first.source_url,
        Path::new("/srv/catalog").join("songs/bohemian.mp3").display().to_string()
    );
    assert_eq!(first.duration_hint.as_deref(), Some("5:55"));
    assert!(first.is_karaoke_track);
    assert!(first.is_competition_eligible);
    assert_eq!(first.difficulty, Some(Difficulty::Expert));
    assert_eq!(first.cover_image(), DEFAULT_COVER_URL);

    let second = &tracks[1];
    assert_eq!(second.artist, UNKNOWN_ARTIST);
    assert_eq!(second.source_url, "https://cdn.example.com/caroline.mp3");
}

#[test]
fn manifest_json_accepts_numeric_ids() {
    let text = r#"{ "tracks": [
        { "id": 7, "title": "Halo", "artist": "Beyoncé", "source_url": "/abs/halo.mp3" }
    ] }"#;
    let tracks = parse_manifest(text, true, None).unwrap();
    assert_eq!(tracks[0].id, TrackId::new("7"));
    assert_eq!(tracks[0].source_url, "/abs/halo.mp3");
}

#[test]
fn manifest_rejects_records_without_source() {
    let text = r#"
[[tracks]]
id = "1"
title = "Nothing to play"
"#;
    match parse_manifest(text, false, None) {
        Err(CatalogError::InvalidRecord { index, reason }) => {
            assert_eq!(index, 0);
            assert!(reason.contains("source_url"));
        }
        other => panic!("expected invalid record, got {other:?}"),
    }
}

#[test]
fn manifest_rejects_duplicate_ids() {
    let text = r#"
[[tracks]]
id = "1"
title = "A"
source_url = "/a.mp3"

[[tracks]]
id = "1"
title = "B"
source_url = "/b.mp3"
"#;
    assert!(matches!(
        parse_manifest(text, false, None),
        Err(CatalogError::DuplicateId(_))
    ));
}

#[test]
fn identity_ignores_shared_sources() {
    let a = track("1", "Take One", "Band");
    let mut b = track("2", "Take Two", "Band");
    b.source_url = a.source_url.clone();
    assert!(!a.same_track(&b));
    assert!(a.same_track(&a.clone()));
}

#[test]
fn open_dispatches_on_manifest_extension() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("catalog.toml");
    std::fs::write(
        &manifest,
        "[[tracks]]\nid = \"1\"\ntitle = \"A\"\nsource_url = \"a.mp3\"\n",
    )
    .unwrap();

    let settings = crate::config::CatalogSettings::default();
    let from_file = open(&manifest, &settings).unwrap();
    assert!(from_file.describe().starts_with("manifest"));
    assert_eq!(from_file.list_tracks(&TrackFilter::default()).unwrap().len(), 1);

    let from_dir = open(dir.path(), &settings).unwrap();
    assert!(from_dir.describe().starts_with("directory"));
}
