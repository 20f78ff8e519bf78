//! CRUD contract of `/api/employeelist` against the in-memory store.

mod common;

use common::{jane_doe, spawn_with_memory_store};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_end_to_end_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_with_memory_store().await;
    let client = &server.client;

    let created = client
        .post(server.url("/api/employeelist"))
        .json(&jane_doe())
        .send()
        .await?;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: Value = created.json().await?;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let fetched = client
        .get(server.url(&format!("/api/employeelist/{}", id)))
        .send()
        .await?;
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched: Value = fetched.json().await?;
    assert_eq!(fetched, created);

    let updated = client
        .put(server.url(&format!("/api/employeelist/{}", id)))
        .json(&json!({"name": "Jane Doe", "location": "SF", "position": "Engineer", "salary": 95000}))
        .send()
        .await?;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated: Value = updated.json().await?;
    assert_eq!(updated["location"], "SF");
    assert_eq!(updated["salary"].as_f64(), Some(95000.0));

    let deleted = client
        .delete(server.url(&format!("/api/employeelist/{}", id)))
        .send()
        .await?;
    assert_eq!(deleted.status(), StatusCode::OK);

    let gone = client
        .get(server.url(&format!("/api/employeelist/{}", id)))
        .send()
        .await?;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_create_assigns_id_and_created_at() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_with_memory_store().await;
    let created: Value = server
        .client
        .post(server.url("/api/employeelist"))
        .json(&jane_doe())
        .send()
        .await?
        .json()
        .await?;

    assert!(created["id"].as_str().map(|s| !s.is_empty()).unwrap_or(false));
    let created_at = created["createdAt"].as_str().expect("createdAt missing");
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
    assert_eq!(created["name"], "Jane Doe");
    assert_eq!(created["location"], "NYC");
    assert_eq!(created["position"], "Engineer");
    assert_eq!(created["salary"].as_f64(), Some(90000.0));

    // Two identical creates mint two records.
    let second: Value = server
        .client
        .post(server.url("/api/employeelist"))
        .json(&jane_doe())
        .send()
        .await?
        .json()
        .await?;
    assert_ne!(second["id"], created["id"]);
    Ok(())
}

#[tokio::test]
async fn test_create_rejects_missing_or_empty_fields_without_touching_store(
) -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_with_memory_store().await;

    let mut bodies = Vec::new();
    for field in ["name", "location", "position", "salary"] {
        let mut missing = jane_doe();
        missing.as_object_mut().unwrap().remove(field);
        bodies.push(missing);

        let mut empty = jane_doe();
        empty[field] = json!("");
        bodies.push(empty);

        let mut null = jane_doe();
        null[field] = Value::Null;
        bodies.push(null);
    }
    bodies.push(json!({"name": "   ", "location": "NYC", "position": "Engineer", "salary": 1}));
    bodies.push(json!({"name": "A", "location": "B", "position": "C", "salary": "lots"}));
    bodies.push(json!({"name": "A", "location": "B", "position": "C", "salary": 0}));
    bodies.push(json!({"name": "A", "location": "B", "position": "C", "salary": "0"}));
    bodies.push(json!({}));

    for body in bodies {
        let resp = server
            .client
            .post(server.url("/api/employeelist"))
            .json(&body)
            .send()
            .await?;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        let err: Value = resp.json().await?;
        assert!(err["error"].as_str().is_some());
    }

    assert_eq!(server.store().call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_create_rejects_malformed_json() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_with_memory_store().await;
    let resp = server
        .client
        .post(server.url("/api/employeelist"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = server
        .client
        .post(server.url("/api/employeelist"))
        .json(&json!({"name": 42, "location": "B", "position": "C", "salary": 1}))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(server.store().call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_create_accepts_salary_as_form_text() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_with_memory_store().await;
    let resp = server
        .client
        .post(server.url("/api/employeelist"))
        .json(&json!({"name": " Ann ", "location": "Oslo", "position": "QA", "salary": "72000.5"}))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await?;
    assert_eq!(created["salary"].as_f64(), Some(72000.5));
    assert_eq!(created["name"], " Ann ");
    Ok(())
}

#[tokio::test]
async fn test_create_accepts_negative_salary() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_with_memory_store().await;
    let resp = server
        .client
        .post(server.url("/api/employeelist"))
        .json(&json!({"name": "A", "location": "B", "position": "C", "salary": -5}))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await?;
    assert_eq!(created["salary"].as_f64(), Some(-5.0));
    Ok(())
}

#[tokio::test]
async fn test_unknown_and_malformed_ids_are_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_with_memory_store().await;
    let client = &server.client;

    for id in [uuid::Uuid::new_v4().to_string(), "not-an-id".to_string()] {
        let url = server.url(&format!("/api/employeelist/{}", id));

        let get = client.get(&url).send().await?;
        assert_eq!(get.status(), StatusCode::NOT_FOUND);
        let body: Value = get.json().await?;
        assert_eq!(body["error"], "Employee not found");

        let put = client.put(&url).json(&jane_doe()).send().await?;
        assert_eq!(put.status(), StatusCode::NOT_FOUND);

        let delete = client.delete(&url).send().await?;
        assert_eq!(delete.status(), StatusCode::NOT_FOUND);
    }
    Ok(())
}

#[tokio::test]
async fn test_update_validates_before_lookup() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_with_memory_store().await;
    let url = server.url(&format!("/api/employeelist/{}", uuid::Uuid::new_v4()));
    let resp = server
        .client
        .put(&url)
        .json(&json!({"name": "A", "location": "B", "position": "C"}))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(server.store().call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_update_replaces_all_fields() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_with_memory_store().await;
    let client = &server.client;
    let created: Value = client
        .post(server.url("/api/employeelist"))
        .json(&jane_doe())
        .send()
        .await?
        .json()
        .await?;
    let url = server.url(&format!("/api/employeelist/{}", created["id"].as_str().unwrap()));

    let resp = client
        .put(&url)
        .json(&json!({"name": "A", "location": "B", "position": "C", "salary": 100}))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: Value = client.get(&url).send().await?.json().await?;
    assert_eq!(fetched["name"], "A");
    assert_eq!(fetched["location"], "B");
    assert_eq!(fetched["position"], "C");
    assert_eq!(fetched["salary"].as_f64(), Some(100.0));
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["createdAt"], created["createdAt"]);
    Ok(())
}

#[tokio::test]
async fn test_list_returns_records_in_creation_order() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_with_memory_store().await;
    let client = &server.client;

    let empty: Vec<Value> = client
        .get(server.url("/api/employeelist"))
        .send()
        .await?
        .json()
        .await?;
    assert!(empty.is_empty());

    for name in ["first", "second", "third"] {
        let resp = client
            .post(server.url("/api/employeelist"))
            .json(&json!({"name": name, "location": "L", "position": "P", "salary": 1}))
            .send()
            .await?;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = client.get(server.url("/api/employeelist")).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let list: Vec<Value> = resp.json().await?;
    let names: Vec<&str> = list.iter().filter_map(|e| e["name"].as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
    Ok(())
}

#[tokio::test]
async fn test_delete_returns_snapshot_and_is_destructive() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_with_memory_store().await;
    let client = &server.client;
    let created: Value = client
        .post(server.url("/api/employeelist"))
        .json(&jane_doe())
        .send()
        .await?
        .json()
        .await?;
    let url = server.url(&format!("/api/employeelist/{}", created["id"].as_str().unwrap()));

    let resp = client.delete(&url).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "Employee deleted successfully");
    assert_eq!(body["employee"], created);

    assert_eq!(client.get(&url).send().await?.status(), StatusCode::NOT_FOUND);
    assert_eq!(client.delete(&url).send().await?.status(), StatusCode::NOT_FOUND);

    let list: Vec<Value> = client
        .get(server.url("/api/employeelist"))
        .send()
        .await?
        .json()
        .await?;
    assert!(list.is_empty());
    Ok(())
}
