//! Integration tests for scientists API endpoints

use axum::http::StatusCode;
use serde_json::json;
use sqlx::SqlitePool;

mod helpers;
use helpers::*;

#[sqlx::test]
async fn test_list_scientists_empty(pool: SqlitePool) {
    let app = setup_test_app(pool);

    let response = get(&app, "/scientists").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json, json!([]));
}

#[sqlx::test]
async fn test_create_scientist_echoes_input(pool: SqlitePool) {
    let app = setup_test_app(pool);

    let response = post(
        &app,
        "/scientists",
        json!({
            "name": "Evan Horizon",
            "field_of_study": "astronavigation",
            "avatar": "https://robohash.org/evan"
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.json["id"].is_i64());
    assert_eq!(response.json["name"], "Evan Horizon");
    assert_eq!(response.json["field_of_study"], "astronavigation");
    assert_eq!(response.json["avatar"], "https://robohash.org/evan");
    assert_eq!(response.json.as_object().unwrap().len(), 4);
}

#[sqlx::test]
async fn test_create_scientist_validation_errors(pool: SqlitePool) {
    let app = setup_test_app(pool);

    for body in [
        json!({"field_of_study": "astronavigation"}),
        json!({"name": "", "field_of_study": "astronavigation"}),
        json!({"name": "Evan Horizon", "field_of_study": "   "}),
        json!({"name": "Evan Horizon", "field_of_study": null}),
        json!({"name": 42, "field_of_study": "astronavigation"}),
    ] {
        let response = post(&app, "/scientists", body.clone()).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_error_body(&response);
    }

    assert_eq!(get(&app, "/scientists").await.json, json!([]));
}

#[sqlx::test]
async fn test_create_scientist_duplicate_name(pool: SqlitePool) {
    let app = setup_test_app(pool);
    create_scientist(&app, "Tony Stark", "Engineering").await;

    let response = post(
        &app,
        "/scientists",
        json!({"name": "Tony Stark", "field_of_study": "Physics"}),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error_body(&response);
    assert_eq!(get(&app, "/scientists").await.json.as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_malformed_json_is_bad_request(pool: SqlitePool) {
    let app = setup_test_app(pool);

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/scientists")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = send_request(&app, request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error_body(&response);
}

#[sqlx::test]
async fn test_get_scientist(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let id = create_scientist(&app, "Ada Lovelace", "Mathematics").await;

    let response = get(&app, &format!("/scientists/{id}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json,
        json!({"id": id, "name": "Ada Lovelace", "field_of_study": "Mathematics", "avatar": null})
    );
}

#[sqlx::test]
async fn test_get_scientist_not_found(pool: SqlitePool) {
    let app = setup_test_app(pool);

    let response = get(&app, "/scientists/1000").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_error_body(&response);
}

#[sqlx::test]
async fn test_non_integer_id_is_bad_request(pool: SqlitePool) {
    let app = setup_test_app(pool);

    let response = get(&app, "/scientists/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error_body(&response);
}

#[sqlx::test]
async fn test_patch_updates_only_given_field(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let id = create_scientist(&app, "Rosalind Franklin", "Chemistry").await;

    let response = patch(
        &app,
        &format!("/scientists/{id}"),
        json!({"field_of_study": "X-ray crystallography"}),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json,
        json!({
            "id": id,
            "name": "Rosalind Franklin",
            "field_of_study": "X-ray crystallography",
            "avatar": null
        })
    );
    assert_eq!(get(&app, &format!("/scientists/{id}")).await.json, response.json);
}

#[sqlx::test]
async fn test_patch_ignores_unknown_keys(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let id = create_scientist(&app, "Carl Sagan", "Astronomy").await;

    let response = patch(
        &app,
        &format!("/scientists/{id}"),
        json!({"id": id + 100, "missions": [], "avatar": "https://example.com/carl.png"}),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["id"], id);
    assert_eq!(response.json["avatar"], "https://example.com/carl.png");
    assert_eq!(get(&app, &format!("/scientists/{}", id + 100)).await.status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_patch_empty_body_is_noop(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let id = create_scientist(&app, "Vera Rubin", "Astronomy").await;
    let before = get(&app, &format!("/scientists/{id}")).await.json;

    let response = patch(&app, &format!("/scientists/{id}"), json!({})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json, before);
}

#[sqlx::test]
async fn test_patch_validation_errors(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let id = create_scientist(&app, "Nikola Tesla", "Electricity").await;
    create_scientist(&app, "Thomas Edison", "Electricity").await;

    for body in [
        json!({"name": ""}),
        json!({"name": null}),
        json!({"field_of_study": ""}),
        json!({"name": "Thomas Edison"}),
    ] {
        let response = patch(&app, &format!("/scientists/{id}"), body.clone()).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_error_body(&response);
    }

    let unchanged = get(&app, &format!("/scientists/{id}")).await;
    assert_eq!(unchanged.json["name"], "Nikola Tesla");
}

#[sqlx::test]
async fn test_patch_not_found(pool: SqlitePool) {
    let app = setup_test_app(pool);

    let response = patch(&app, "/scientists/77", json!({"name": "Nobody"})).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_error_body(&response);
}

#[sqlx::test]
async fn test_delete_scientist_cascades_to_missions(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let scientist_id = create_scientist(&app, "Tony Stark", "Engineering").await;
    let planet_id = create_planet(&app, "Mars").await;
    let mission_id = create_mission(&app, "Iron Man on Mars", scientist_id, planet_id).await;

    let response = delete(&app, &format!("/scientists/{scientist_id}")).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.raw.is_empty());
    assert_eq!(
        get(&app, &format!("/scientists/{scientist_id}")).await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        get(&app, &format!("/missions/{mission_id}")).await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(get(&app, &format!("/planets/{planet_id}")).await.status, StatusCode::OK);
}

#[sqlx::test]
async fn test_delete_scientist_not_found(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let id = create_scientist(&app, "Grace Hopper", "Computing").await;

    assert_eq!(delete(&app, &format!("/scientists/{id}")).await.status, StatusCode::NO_CONTENT);

    let response = delete(&app, &format!("/scientists/{id}")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_error_body(&response);
}

#[sqlx::test]
async fn test_concurrent_distinct_scientists_all_succeed(pool: SqlitePool) {
    let app = setup_test_app(pool);

    for round in 0..10 {
        let (first, second) = tokio::join!(
            post(
                &app,
                "/scientists",
                json!({"name": format!("Ada {round}"), "field_of_study": "Mathematics"}),
            ),
            post(
                &app,
                "/scientists",
                json!({"name": format!("Grace {round}"), "field_of_study": "Computing"}),
            ),
        );

        assert_eq!(first.status, StatusCode::CREATED, "round {round}: {:?}", first.json);
        assert_eq!(second.status, StatusCode::CREATED, "round {round}: {:?}", second.json);
    }

    assert_eq!(get(&app, "/scientists").await.json.as_array().unwrap().len(), 20);
}
