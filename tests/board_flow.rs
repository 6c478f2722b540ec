use scoreboard_back::config::AppConfig;
use scoreboard_back::dao::board_store::file::{FileBoardStore, FileStoreConfig};
use scoreboard_back::dao::models::{NO_LIVE_MATCH, ScoreEntity, UserEntity};
use scoreboard_back::dao::storage::StorageError;
use scoreboard_back::dto::admin::{
    GameKeyRequest, LeaderboardEntryRequest, LeaderboardKeyRequest, SetScoreRequest,
};
use scoreboard_back::dto::auth::LoginRequest;
use scoreboard_back::error::ServiceError;
use scoreboard_back::services::auth_service::{self, AdminContext};
use scoreboard_back::services::{leaderboard_service, score_service, sse_events, sse_service};
use scoreboard_back::state::{AppState, SharedState};

/// Boot a fresh application state backed by files under `dir`.
async fn boot_state(dir: &std::path::Path) -> SharedState {
    let config = AppConfig::with_paths(dir.join("board.json"), dir.join("leaderboard.json"));
    AppState::initialize(config)
        .await
        .expect("state should initialize against an empty directory")
}

/// Log in with the default bootstrap credentials and authorize the token.
async fn admin_context(state: &SharedState) -> AdminContext {
    let login = auth_service::login(
        state,
        LoginRequest {
            username: "admin".to_string(),
            password: "admin".to_string(),
        },
    )
    .await
    .expect("default admin login should succeed");

    auth_service::authorize(state, &login.token).expect("freshly issued token should authorize")
}

/// End-to-end flow over the score board: seeded reads, authenticated
/// mutations, the viewer event stream, and session revocation.
#[tokio::test]
async fn test_full_board_flow() {
    let dir = tempfile::tempdir().unwrap();
    let state = boot_state(dir.path()).await;

    // 1. A fresh board carries the seeded games, live, in display order.
    let board = score_service::get_all_scores(&state)
        .await
        .expect("board read should succeed");
    let games: Vec<&str> = board.scores.keys().map(String::as_str).collect();
    assert_eq!(games, ["Football", "Kabaddi", "Basketball", "Badminton"]);
    assert_eq!(board.scores["Football"].score_data, "India 2 - 1 Pakistan");
    assert!(board.scores.values().all(|score| score.is_live));

    // 2. Log in and authorize the issued token.
    let context = admin_context(&state).await;
    assert_eq!(context.username(), "admin");

    // 3. Mutations go through even when nobody is connected to the stream.
    score_service::set_score(
        &state,
        &context,
        SetScoreRequest {
            game: "Football".to_string(),
            score_data: "India 3 - 1 Pakistan".to_string(),
        },
    )
    .await
    .expect("score write without subscribers should succeed");

    let board = score_service::get_all_scores(&state).await.unwrap();
    assert_eq!(board.scores["Football"].score_data, "India 3 - 1 Pakistan");
    assert!(
        board.scores["Football"].is_live,
        "overwriting a score should keep the live flag"
    );

    // 4. Connected viewers see each mutation as an event.
    let mut receiver = sse_service::subscribe(&state);
    score_service::set_score(
        &state,
        &context,
        SetScoreRequest {
            game: "Football".to_string(),
            score_data: "India 4 - 1 Pakistan".to_string(),
        },
    )
    .await
    .unwrap();

    let event = receiver.recv().await.expect("should receive score update");
    assert_eq!(event.event.as_deref(), Some("score_updated"));
    let payload: serde_json::Value =
        serde_json::from_str(&event.data).expect("event data should be JSON");
    assert_eq!(payload["game"], "Football");
    assert_eq!(payload["score_data"], "India 4 - 1 Pakistan");
    assert_eq!(payload["is_live"], true);

    // 5. Toggling twice lands back on the original flag.
    let off = score_service::toggle_live(
        &state,
        &context,
        GameKeyRequest {
            game: "Football".to_string(),
        },
    )
    .await
    .expect("toggle should succeed");
    assert!(!off);

    let event = receiver.recv().await.expect("should receive toggle event");
    assert_eq!(event.event.as_deref(), Some("live_status_changed"));
    let payload: serde_json::Value = serde_json::from_str(&event.data).unwrap();
    assert_eq!(payload["game"], "Football");
    assert_eq!(payload["is_live"], false);

    let on = score_service::toggle_live(
        &state,
        &context,
        GameKeyRequest {
            game: "Football".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(on, "a second toggle should restore the live flag");
    receiver.recv().await.expect("second toggle should broadcast");

    // 6. Clearing resets the record to the placeholder without deleting it.
    score_service::clear_score(
        &state,
        &context,
        GameKeyRequest {
            game: "Football".to_string(),
        },
    )
    .await
    .expect("clear should succeed");

    let board = score_service::get_all_scores(&state).await.unwrap();
    assert_eq!(board.scores["Football"].score_data, NO_LIVE_MATCH);
    assert!(!board.scores["Football"].is_live);

    let event = receiver.recv().await.expect("clear should broadcast");
    assert_eq!(event.event.as_deref(), Some("score_updated"));
    let payload: serde_json::Value = serde_json::from_str(&event.data).unwrap();
    assert_eq!(payload["score_data"], NO_LIVE_MATCH);

    // 7. Writing over a cleared record keeps its non-live flag.
    score_service::set_score(
        &state,
        &context,
        SetScoreRequest {
            game: "Football".to_string(),
            score_data: "India 0 - 0 Pakistan".to_string(),
        },
    )
    .await
    .unwrap();

    let board = score_service::get_all_scores(&state).await.unwrap();
    assert_eq!(board.scores["Football"].score_data, "India 0 - 0 Pakistan");
    assert!(
        !board.scores["Football"].is_live,
        "set_score must not resurrect a toggled-off game"
    );

    // 8. Logout revokes the token for good.
    auth_service::logout(&state, &context);
    let err = auth_service::authorize(&state, context.token()).unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized(_)));
}

/// Boot a state over a board document that only knows three of the four
/// configured games, leaving Badminton without a stored row.
async fn boot_three_game_state(dir: &std::path::Path) -> SharedState {
    let board_path = dir.join("board.json");
    let seeds = vec![
        ScoreEntity {
            game: "Football".to_string(),
            score_data: "India 2 - 1 Pakistan".to_string(),
            is_live: true,
        },
        ScoreEntity {
            game: "Kabaddi".to_string(),
            score_data: "Team A 35 - 28 Team B".to_string(),
            is_live: true,
        },
        ScoreEntity {
            game: "Basketball".to_string(),
            score_data: "Lakers 108 - 102 Bulls".to_string(),
            is_live: true,
        },
    ];
    let bootstrap = UserEntity {
        username: "admin".to_string(),
        password_hash: auth_service::hash_password("admin"),
    };
    FileBoardStore::open(FileStoreConfig::new(&board_path, seeds, bootstrap))
        .await
        .expect("pre-seeding the board document should succeed");

    let config = AppConfig::with_paths(&board_path, dir.join("leaderboard.json"));
    AppState::initialize(config)
        .await
        .expect("state should open the existing document")
}

/// A configured game without a stored record renders as the neutral
/// placeholder instead of failing the read.
#[tokio::test]
async fn test_board_renders_placeholder_for_missing_record() {
    let dir = tempfile::tempdir().unwrap();
    let state = boot_three_game_state(dir.path()).await;

    let board = score_service::get_all_scores(&state).await.unwrap();
    assert_eq!(board.scores.len(), 4);
    assert_eq!(board.scores["Badminton"].score_data, NO_LIVE_MATCH);
    assert!(!board.scores["Badminton"].is_live);
    assert_eq!(board.scores["Kabaddi"].score_data, "Team A 35 - 28 Team B");
}

/// Writing a score for a configured game with no stored row creates the
/// record, and the fresh record starts live.
#[tokio::test]
async fn test_set_score_creates_missing_record_live() {
    let dir = tempfile::tempdir().unwrap();
    let state = boot_three_game_state(dir.path()).await;
    let context = admin_context(&state).await;

    score_service::set_score(
        &state,
        &context,
        SetScoreRequest {
            game: "Badminton".to_string(),
            score_data: "Player X 21 - 19 Player Y".to_string(),
        },
    )
    .await
    .expect("creating a missing record should succeed");

    let board = score_service::get_all_scores(&state).await.unwrap();
    assert_eq!(
        board.scores["Badminton"].score_data,
        "Player X 21 - 19 Player Y"
    );
    assert!(
        board.scores["Badminton"].is_live,
        "a freshly created record starts live"
    );
}

/// Sessions flipping the same game in parallel must serialize their
/// read-modify-write cycles: an even number of flips lands back on the
/// seeded flag, and a lost update would break the parity.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_toggles_restore_the_seeded_flag() {
    let dir = tempfile::tempdir().unwrap();
    let state = boot_state(dir.path()).await;

    // Eight admins with 250 flips each: 2000 toggles in total, an even count.
    let mut writers = Vec::new();
    for _ in 0..8 {
        let state = state.clone();
        let context = admin_context(&state).await;
        writers.push(tokio::spawn(async move {
            for _ in 0..250 {
                score_service::toggle_live(
                    &state,
                    &context,
                    GameKeyRequest {
                        game: "Kabaddi".to_string(),
                    },
                )
                .await
                .expect("concurrent toggle should succeed");
            }
        }));
    }
    for writer in writers {
        writer.await.expect("toggle task should not panic");
    }

    let board = score_service::get_all_scores(&state).await.unwrap();
    assert!(
        board.scores["Kabaddi"].is_live,
        "an even number of toggles must restore the seeded live flag"
    );
    assert_eq!(board.scores["Kabaddi"].score_data, "Team A 35 - 28 Team B");
}

/// Bad credentials and unknown tokens are rejected without leaving a session
/// behind.
#[tokio::test]
async fn test_rejected_logins_and_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let state = boot_state(dir.path()).await;

    let err = auth_service::login(
        &state,
        LoginRequest {
            username: "admin".to_string(),
            password: "wrong".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized(_)));

    let err = auth_service::login(
        &state,
        LoginRequest {
            username: "nobody".to_string(),
            password: "admin".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized(_)));

    let err = auth_service::login(
        &state,
        LoginRequest {
            username: "   ".to_string(),
            password: "admin".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));

    let err = auth_service::authorize(&state, "not-a-token").unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized(_)));

    assert!(
        state.sessions().is_empty(),
        "failed logins must not mint sessions"
    );
}

/// Mutations validate their input before touching storage.
#[tokio::test]
async fn test_mutations_reject_bad_input() {
    let dir = tempfile::tempdir().unwrap();
    let state = boot_state(dir.path()).await;
    let context = admin_context(&state).await;

    // Unknown game names are rejected on writes.
    let err = score_service::set_score(
        &state,
        &context,
        SetScoreRequest {
            game: "Cricket".to_string(),
            score_data: "India 300 - 250 Australia".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));

    // Blank score text is rejected before the board is consulted.
    let err = score_service::set_score(
        &state,
        &context,
        SetScoreRequest {
            game: "Football".to_string(),
            score_data: "  ".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));

    // Toggle and clear require an existing record.
    let err = score_service::toggle_live(
        &state,
        &context,
        GameKeyRequest {
            game: "Cricket".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = score_service::clear_score(
        &state,
        &context,
        GameKeyRequest {
            game: "Cricket".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    // None of the rejected writes changed the board.
    let board = score_service::get_all_scores(&state).await.unwrap();
    assert_eq!(board.scores["Football"].score_data, "India 2 - 1 Pakistan");
}

/// Leaderboard reads, filtering, and the admin mutation set.
#[tokio::test]
async fn test_leaderboard_flow() {
    let dir = tempfile::tempdir().unwrap();
    let state = boot_state(dir.path()).await;
    let context = admin_context(&state).await;

    // 1. First read seeds the default collection, sorted by points.
    let entries = leaderboard_service::get_leaderboard(&state, None)
        .await
        .expect("leaderboard read should succeed");
    assert_eq!(entries.len(), 8);
    let points: Vec<i32> = entries.iter().map(|entry| entry.points).collect();
    assert_eq!(points, [35, 30, 28, 22, 18, 15, 12, 10]);
    assert_eq!(entries[0].name, "Team Delta");

    // 2. Filtering narrows to one sport, keeping the ordering.
    let football = leaderboard_service::get_leaderboard(&state, Some("Football"))
        .await
        .unwrap();
    let names: Vec<&str> = football.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["Team Alpha", "Team Beta", "Team Foxtrot"]);

    // 3. Upserting a new key grows the collection.
    leaderboard_service::upsert_entry(
        &state,
        &context,
        LeaderboardEntryRequest {
            name: "Team India".to_string(),
            sport: "Kabaddi".to_string(),
            points: 40,
        },
    )
    .await
    .expect("upsert should succeed");

    let entries = leaderboard_service::get_leaderboard(&state, None).await.unwrap();
    assert_eq!(entries.len(), 9);
    assert_eq!(entries[0].name, "Team India");

    // 4. Upserting the same key again only rewrites the points.
    leaderboard_service::upsert_entry(
        &state,
        &context,
        LeaderboardEntryRequest {
            name: "Team India".to_string(),
            sport: "Kabaddi".to_string(),
            points: 1,
        },
    )
    .await
    .unwrap();

    let entries = leaderboard_service::get_leaderboard(&state, None).await.unwrap();
    assert_eq!(entries.len(), 9, "repeated upsert must not duplicate the key");
    let india = entries
        .iter()
        .find(|entry| entry.name == "Team India")
        .expect("upserted team should be present");
    assert_eq!(india.points, 1);

    // 5. Updating an absent key is an error.
    let err = leaderboard_service::update_entry(
        &state,
        &context,
        LeaderboardEntryRequest {
            name: "Nobody".to_string(),
            sport: "Chess".to_string(),
            points: 3,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    // 6. Deleting is idempotent: a second delete of the same key succeeds.
    leaderboard_service::delete_entry(
        &state,
        &context,
        LeaderboardKeyRequest {
            name: "Team India".to_string(),
            sport: "Kabaddi".to_string(),
        },
    )
    .await
    .expect("delete should succeed");

    leaderboard_service::delete_entry(
        &state,
        &context,
        LeaderboardKeyRequest {
            name: "Team India".to_string(),
            sport: "Kabaddi".to_string(),
        },
    )
    .await
    .expect("deleting an absent entry should still succeed");

    let entries = leaderboard_service::get_leaderboard(&state, None).await.unwrap();
    assert_eq!(entries.len(), 8);

    // 7. Blank keys never reach the store.
    let err = leaderboard_service::upsert_entry(
        &state,
        &context,
        LeaderboardEntryRequest {
            name: String::new(),
            sport: "Kabaddi".to_string(),
            points: 5,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));

    let err = leaderboard_service::delete_entry(
        &state,
        &context,
        LeaderboardKeyRequest {
            name: "Team Alpha".to_string(),
            sport: String::new(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

/// The snapshot event serializes the whole board under the `snapshot` name.
#[tokio::test]
async fn test_snapshot_event_carries_the_full_board() {
    let dir = tempfile::tempdir().unwrap();
    let state = boot_state(dir.path()).await;

    let board = score_service::get_all_scores(&state).await.unwrap();
    let event = sse_events::snapshot_event(board).expect("snapshot should serialize");

    assert_eq!(event.event.as_deref(), Some("snapshot"));
    let payload: serde_json::Value = serde_json::from_str(&event.data).unwrap();
    let object = payload.as_object().expect("snapshot should be an object");
    assert_eq!(object.len(), 4);
    assert_eq!(object["Football"]["score_data"], "India 2 - 1 Pakistan");
    assert_eq!(object["Badminton"]["is_live"], true);
}

/// A corrupt board document refuses to boot and is left untouched.
#[tokio::test]
async fn test_corrupt_board_document_refuses_to_boot() {
    let dir = tempfile::tempdir().unwrap();
    let board_path = dir.path().join("board.json");
    std::fs::write(&board_path, b"{ definitely broken").unwrap();

    let config = AppConfig::with_paths(&board_path, dir.path().join("leaderboard.json"));
    let err = AppState::initialize(config)
        .await
        .err()
        .expect("boot must fail");
    assert!(matches!(err, StorageError::Corrupt { .. }));

    let bytes = std::fs::read(&board_path).unwrap();
    assert_eq!(bytes, b"{ definitely broken");
}
