//! Integration tests for the server routes and association listings.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{create_server, ids, send, test_app};

#[tokio::test]
async fn create_requires_server_envelope() {
    let app = test_app();

    let wrapped = send(
        &app,
        Method::POST,
        "/servers",
        Some(json!({"server": {"name": "alpha", "description": "first"}})),
    )
    .await;
    assert_eq!(wrapped.status, StatusCode::OK);
    let server = wrapped.json();
    assert_eq!(server["id"], "server-1");
    assert_eq!(server["name"], "alpha");
    assert_eq!(server["is_active"], true);
    assert!(wrapped.headers.contains_key("x-ratelimit-limit"));
    assert!(wrapped.headers.contains_key("x-ratelimit-remaining"));
    assert!(wrapped.headers.contains_key("x-ratelimit-reset"));

    let unwrapped = send(
        &app,
        Method::POST,
        "/servers",
        Some(json!({"name": "beta"})),
    )
    .await;
    assert_eq!(unwrapped.status, StatusCode::BAD_REQUEST);
    assert!(unwrapped.text().contains("server"));

    let all = send(&app, Method::GET, "/servers?include_inactive=true", None)
        .await
        .json();
    assert_eq!(ids(&all), vec!["server-1".to_string()]);
}

#[tokio::test]
async fn description_update_leaves_other_fields_untouched() {
    let app = test_app();
    let created = create_server(
        &app,
        json!({
            "name": "alpha",
            "icon": "https://icons.example/alpha.svg",
            "tags": ["core", "beta"],
            "team_id": "team-1",
            "visibility": "team"
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    // Update bodies are never wrapped, even for servers
    let res = send(
        &app,
        Method::PUT,
        &format!("/servers/{id}"),
        Some(json!({"description": "now described"})),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    let updated = res.json();

    assert_eq!(updated["description"], "now described");
    for field in ["name", "icon", "tags", "team_id", "visibility", "is_active", "created_at"] {
        assert_eq!(updated[field], created[field], "field {field} changed");
    }
    assert_ne!(updated["updated_at"], updated["created_at"]);
}

#[tokio::test]
async fn toggle_returns_server_at_top_level() {
    let app = test_app();
    let created = create_server(&app, json!({"name": "alpha"})).await;
    let id = created["id"].as_str().unwrap();

    let off = send(
        &app,
        Method::POST,
        &format!("/servers/{id}/toggle?activate=false"),
        None,
    )
    .await;
    assert_eq!(off.status, StatusCode::OK);
    let off = off.json();
    assert_eq!(off["id"], id);
    assert_eq!(off["is_active"], false);
    assert!(off.get("server").is_none(), "server toggle must not be wrapped");
    assert!(off.get("status").is_none());

    let on = send(
        &app,
        Method::POST,
        &format!("/servers/{id}/toggle?activate=true"),
        None,
    )
    .await
    .json();
    assert_eq!(on["is_active"], created["is_active"]);
    assert_ne!(off["updated_at"], created["updated_at"]);
    assert_ne!(on["updated_at"], off["updated_at"]);
}

#[tokio::test]
async fn list_filters_by_state_team_and_visibility() {
    let app = test_app();
    let a = create_server(&app, json!({"name": "a", "team_id": "t1", "visibility": "public"})).await;
    let b = create_server(&app, json!({"name": "b", "team_id": "t1", "visibility": "private"})).await;
    let c = create_server(&app, json!({"name": "c", "team_id": "t2", "visibility": "public"})).await;
    let id = |v: &serde_json::Value| v["id"].as_str().unwrap().to_string();

    send(
        &app,
        Method::POST,
        &format!("/servers/{}/toggle?activate=false", id(&c)),
        None,
    )
    .await;

    let mut active = ids(&send(&app, Method::GET, "/servers", None).await.json());
    active.sort();
    assert_eq!(active, vec![id(&a), id(&b)]);

    let team = ids(&send(&app, Method::GET, "/servers?team_id=t1", None).await.json());
    assert_eq!(team.len(), 2);

    let public = ids(&send(&app, Method::GET, "/servers?visibility=public", None).await.json());
    assert_eq!(public, vec![id(&a)]);

    let public_all = ids(
        &send(
            &app,
            Method::GET,
            "/servers?visibility=public&include_inactive=true",
            None,
        )
        .await
        .json(),
    );
    assert_eq!(public_all.len(), 2);

    let both = ids(
        &send(
            &app,
            Method::GET,
            "/servers?team_id=t2&visibility=public&include_inactive=true",
            None,
        )
        .await
        .json(),
    );
    assert_eq!(both, vec![id(&c)]);
}

#[tokio::test]
async fn associations_are_reference_data() {
    let app = test_app();
    let a = create_server(&app, json!({"name": "a"})).await;
    let b = create_server(&app, json!({"name": "b"})).await;
    let a_id = a["id"].as_str().unwrap();
    let b_id = b["id"].as_str().unwrap();

    for kind in ["tools", "resources", "prompts"] {
        let from_a = send(&app, Method::GET, &format!("/servers/{a_id}/{kind}"), None).await;
        let from_b = send(&app, Method::GET, &format!("/servers/{b_id}/{kind}"), None).await;
        assert_eq!(from_a.status, StatusCode::OK);
        assert_eq!(from_a.json(), from_b.json(), "{kind} differ between servers");
        assert!(!from_a.json().as_array().unwrap().is_empty());
    }

    let tools = send(&app, Method::GET, &format!("/servers/{a_id}/tools"), None)
        .await
        .json();
    assert!(tools[0]["name"].is_string());
    assert!(tools[0]["input_schema"].is_object());

    let prompts = send(&app, Method::GET, &format!("/servers/{a_id}/prompts"), None)
        .await
        .json();
    assert!(prompts[0]["arguments"].is_array());

    let resources = send(&app, Method::GET, &format!("/servers/{a_id}/resources"), None)
        .await
        .json();
    assert!(resources[0]["uri"].is_string());
}

#[tokio::test]
async fn associations_survive_server_updates() {
    let app = test_app();
    let s = create_server(&app, json!({"name": "a"})).await;
    let id = s["id"].as_str().unwrap();

    let before = send(&app, Method::GET, &format!("/servers/{id}/tools"), None)
        .await
        .json();
    send(
        &app,
        Method::PUT,
        &format!("/servers/{id}"),
        Some(json!({"name": "renamed", "tags": ["x"]})),
    )
    .await;
    let after = send(&app, Method::GET, &format!("/servers/{id}/tools"), None)
        .await
        .json();
    assert_eq!(before, after);
}

#[tokio::test]
async fn association_paths_reject_other_methods() {
    let app = test_app();
    let s = create_server(&app, json!({"name": "a"})).await;
    let id = s["id"].as_str().unwrap();

    for kind in ["tools", "resources", "prompts"] {
        let res = send(&app, Method::POST, &format!("/servers/{id}/{kind}"), None).await;
        assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED, "{kind}");
        assert!(
            res.headers["content-type"]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
    }
}

#[tokio::test]
async fn unknown_or_deleted_server_is_404_everywhere() {
    let app = test_app();
    let s = create_server(&app, json!({"name": "doomed"})).await;
    let id = s["id"].as_str().unwrap().to_string();

    let res = send(&app, Method::DELETE, &format!("/servers/{id}"), None).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    for target in [id.as_str(), "server-999"] {
        let requests = [
            (Method::GET, format!("/servers/{target}"), None),
            (
                Method::PUT,
                format!("/servers/{target}"),
                Some(json!({"description": "x"})),
            ),
            (Method::DELETE, format!("/servers/{target}"), None),
            (
                Method::POST,
                format!("/servers/{target}/toggle?activate=true"),
                None,
            ),
            (Method::GET, format!("/servers/{target}/tools"), None),
            (Method::GET, format!("/servers/{target}/resources"), None),
            (Method::GET, format!("/servers/{target}/prompts"), None),
        ];

        for (method, uri, body) in requests {
            let res = send(&app, method.clone(), &uri, body).await;
            assert_eq!(res.status, StatusCode::NOT_FOUND, "{method} {uri}");
            assert!(res.json()["message"].is_string(), "{method} {uri}");
        }
    }

    let all = send(&app, Method::GET, "/servers?include_inactive=true", None)
        .await
        .json();
    assert!(ids(&all).is_empty());
}

#[tokio::test]
async fn new_server_after_delete_gets_fresh_id() {
    let app = test_app();
    let first = create_server(&app, json!({"name": "a"})).await;
    let id = first["id"].as_str().unwrap();
    send(&app, Method::DELETE, &format!("/servers/{id}"), None).await;

    let second = create_server(&app, json!({"name": "b"})).await;
    assert_ne!(second["id"], first["id"]);
}
