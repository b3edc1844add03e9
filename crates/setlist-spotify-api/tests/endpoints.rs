use mockito::Matcher;
use serde_json::json;
use setlist_spotify_api::Error;
use setlist_spotify_api::access_token::AccessToken;
use setlist_spotify_api::add_track_to_playlist::add_track_to_playlist;
use setlist_spotify_api::client::SpotifyClient;
use setlist_spotify_api::error::MutationAction;
use setlist_spotify_api::get_playlist_tracks::get_playlist_tracks;
use setlist_spotify_api::get_playlists::get_playlists;
use setlist_spotify_api::playlist_id::PlaylistId;
use setlist_spotify_api::remove_track_from_playlist::remove_track_from_playlist;
use setlist_spotify_api::search_tracks::search_tracks;
use setlist_spotify_api::track::UNKNOWN_ARTIST;
use setlist_spotify_api::track_uri::TrackUri;

fn client(server: &mockito::Server) -> SpotifyClient {
    SpotifyClient::with_base_url(AccessToken::new("tok"), server.url())
}

fn abc() -> PlaylistId {
    PlaylistId::from("abc")
}

fn track_one() -> TrackUri {
    TrackUri::from("spotify:track:1")
}

#[tokio::test]
async fn search_decodes_tracks_in_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search")
        .match_header("authorization", "Bearer tok")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "song a".into()),
            Matcher::UrlEncoded("type".into(), "track".into()),
            Matcher::UrlEncoded("limit".into(), "5".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "tracks": {
                    "items": [
                        {
                            "name": "Song A",
                            "uri": "spotify:track:1",
                            "artists": [{"name": "Artist X"}]
                        },
                        {"name": "Song B", "uri": "spotify:track:2", "artists": []}
                    ],
                    "next": null,
                    "total": 2
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let tracks = search_tracks(&client(&server), "song a", Some(5)).await.unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].name, "Song A");
    assert_eq!(tracks[0].uri, TrackUri::from("spotify:track:1"));
    assert_eq!(tracks[0].artist_label(), "Artist X");
    assert_eq!(tracks[1].artist_label(), UNKNOWN_ARTIST);
    mock.assert_async().await;
}

#[tokio::test]
async fn search_without_results_is_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"tracks":{"items":[]}}"#)
        .create_async()
        .await;

    let tracks = search_tracks(&client(&server), "nothing", None).await.unwrap();
    assert!(tracks.is_empty());
}

#[tokio::test]
async fn playlists_for_user_and_for_me() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"{"items":[{"name":"Road Trip","id":"abc"},{"name":"Chill","id":"def"}]}"#;
    let user = server
        .mock("GET", "/users/someone/playlists")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;
    let me = server
        .mock("GET", "/me/playlists")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let playlists = get_playlists(&client(&server), Some("someone")).await.unwrap();
    assert_eq!(playlists[1].name, "Chill");
    assert_eq!(playlists[1].id, PlaylistId::from("def"));
    let playlists = get_playlists(&client(&server), None).await.unwrap();
    assert_eq!(playlists.len(), 2);

    user.assert_async().await;
    me.assert_async().await;
}

#[tokio::test]
async fn playlist_tracks_skip_unavailable_entries() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/playlists/abc")
        .with_status(200)
        .with_body(
            json!({
                "name": "Road Trip",
                "tracks": {
                    "items": [
                        {"track": {
                            "name": "One",
                            "uri": "spotify:track:1",
                            "type": "track",
                            "artists": [{"name": "X"}]
                        }},
                        {"track": null},
                        {"track": {"name": "Pod", "uri": "spotify:episode:9", "type": "episode"}}
                    ]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let tracks = get_playlist_tracks(&client(&server), &PlaylistId::from("abc")).await.unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].uri, TrackUri::from("spotify:track:1"));
    assert!(tracks[1].is_episode());
    assert_eq!(tracks[1].artist_label(), UNKNOWN_ARTIST);
}

#[tokio::test]
async fn playlist_listing_error_carries_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/me/playlists")
        .with_status(401)
        .with_body(r#"{"error":{"status":401,"message":"Invalid access token"}}"#)
        .create_async()
        .await;

    let err = get_playlists(&client(&server), None).await.unwrap_err();
    assert!(matches!(err, Error::Api { status, .. } if status == 401));
    assert!(err.body().unwrap().contains("Invalid access token"));
}

#[tokio::test]
async fn add_track_succeeds_on_created() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/playlists/abc/tracks")
        .match_header("authorization", "Bearer tok")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"uris": ["spotify:track:1"]})))
        .with_status(201)
        .with_body(r#"{"snapshot_id":"snap"}"#)
        .expect(1)
        .create_async()
        .await;

    add_track_to_playlist(&client(&server), &abc(), &track_one())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn add_track_rejection_keeps_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/playlists/abc/tracks")
        .with_status(400)
        .with_body(r#"{"error":{"status":400,"message":"Invalid track uri"}}"#)
        .create_async()
        .await;

    let err = add_track_to_playlist(&client(&server), &abc(), &track_one())
        .await
        .unwrap_err();
    match err {
        Error::Mutation { action, expected, status, body } => {
            assert_eq!(action, MutationAction::Add);
            assert_eq!(expected, 201);
            assert_eq!(status, 400);
            assert_eq!(body, r#"{"error":{"status":400,"message":"Invalid track uri"}}"#);
        }
        other => panic!("expected Mutation error, got {:?}", other),
    }
}

#[tokio::test]
async fn add_track_with_plain_ok_is_still_a_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/playlists/abc/tracks")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let err = add_track_to_playlist(&client(&server), &abc(), &track_one())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Mutation { status, .. } if status == 200));
}

#[tokio::test]
async fn remove_track_succeeds_on_ok() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/playlists/abc/tracks")
        .match_body(Matcher::Json(json!({"tracks": [{"uri": "spotify:track:1"}]})))
        .with_status(200)
        .with_body(r#"{"snapshot_id":"snap2"}"#)
        .expect(1)
        .create_async()
        .await;

    remove_track_from_playlist(&client(&server), &abc(), &track_one())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn remove_track_rejection_is_mutation_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/playlists/abc/tracks")
        .with_status(403)
        .with_body("forbidden")
        .create_async()
        .await;

    let err = remove_track_from_playlist(&client(&server), &abc(), &track_one())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Mutation { action: MutationAction::Remove, status, ref body, .. }
            if status == 403 && body == "forbidden"
    ));
}

#[tokio::test]
async fn remove_track_with_created_is_still_a_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/playlists/abc/tracks")
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let err = remove_track_from_playlist(&client(&server), &abc(), &track_one())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Mutation { action: MutationAction::Remove, expected, status, .. }
            if expected == 200 && status == 201
    ));
}

#[tokio::test]
async fn search_keeps_items_with_null_artists_or_missing_name() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({
                "tracks": {
                    "items": [
                        {"name": "Song A", "uri": "spotify:track:1", "artists": null},
                        {"uri": "spotify:track:2", "artists": [{"name": "Artist Y"}]}
                    ]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let tracks = search_tracks(&client(&server), "song", None).await.unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].uri, track_one());
    assert_eq!(tracks[0].artist_label(), UNKNOWN_ARTIST);
    assert_eq!(tracks[1].name, "");
    assert_eq!(tracks[1].artist_label(), "Artist Y");
}

#[tokio::test]
async fn playlist_tracks_keep_good_items_next_to_null_artists() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/playlists/abc")
        .with_status(200)
        .with_body(
            json!({
                "tracks": {
                    "items": [
                        {"track": {
                            "name": "Good",
                            "uri": "spotify:track:1",
                            "artists": [{"name": "X"}]
                        }},
                        {"track": {"name": "Bare", "uri": "spotify:track:2", "artists": null}}
                    ]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let tracks = get_playlist_tracks(&client(&server), &abc()).await.unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].name, "Good");
    assert_eq!(tracks[1].artist_label(), UNKNOWN_ARTIST);
}

#[tokio::test]
async fn playlists_with_missing_name_still_decode() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/me/playlists")
        .with_status(200)
        .with_body(r#"{"items":[{"id":"abc"},{"name":null,"id":"def"}]}"#)
        .create_async()
        .await;

    let playlists = get_playlists(&client(&server), None).await.unwrap();
    assert_eq!(playlists.len(), 2);
    assert_eq!(playlists[0].id, abc());
    assert_eq!(playlists[1].name, "");
}
