//! `POST /recommendCalculator` tests

use crate::test_utils::{MacroTransform, calculator_bundle, client_with, full_client};
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::{Value, json};

async fn post(client: &Client, body: Value) -> (Status, Value) {
    let response = client
        .post("/recommendCalculator")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch()
        .await;
    let status = response.status();
    (status, response.into_json().await.expect("json body"))
}

fn ids(json: &Value) -> Vec<i64> {
    json["recommended_ids"]
        .as_array()
        .expect("id list")
        .iter()
        .map(|v| v.as_i64().expect("integer id"))
        .collect()
}

fn targets() -> Value {
    json!({"calories": 0.0, "protein": 0.0, "fat": 0.0, "carbs": 0.0})
}

#[rocket::async_test]
async fn test_anonymous_success() {
    let client = full_client().await;
    let (status, json) = post(&client, targets()).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(json["status"], "success");
    assert_eq!(json["is_login"], false);
    let got = ids(&json);
    assert_eq!(got.len(), 10);
    assert!(got.iter().all(|id| (0..20).contains(id)));
}

#[rocket::async_test]
async fn test_constraints_apply_when_logged_in() {
    let client = full_client().await;
    let mut body = targets();
    body["is_login"] = json!(true);
    body["allergy_ids"] = json!([2]);
    body["dietary_ids"] = json!([1]);
    let (_, json) = post(&client, body).await;

    assert_eq!(json["is_login"], true);
    let mut got = ids(&json);
    got.sort_unstable();
    assert_eq!(got, vec![1, 3]);
}

#[rocket::async_test]
async fn test_constraints_ignored_when_anonymous() {
    let client = full_client().await;
    let mut body = targets();
    body["allergy_ids"] = json!([2]);
    body["top_k"] = json!(20);
    let (_, json) = post(&client, body).await;

    assert!(ids(&json).iter().any(|id| id % 2 == 0));
}

#[rocket::async_test]
async fn test_null_filter_lists_accepted() {
    let client = full_client().await;
    let mut body = targets();
    body["is_login"] = json!(true);
    body["allergy_ids"] = Value::Null;
    body["dietary_ids"] = Value::Null;
    let (status, json) = post(&client, body).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(ids(&json).len(), 10);
}

#[rocket::async_test]
async fn test_no_match() {
    let client = full_client().await;
    let mut body = targets();
    body["is_login"] = json!(true);
    // Only recipe 29 is spicy and it is not halal
    body["dietary_ids"] = json!([1, 8]);
    let (status, json) = post(&client, body).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(json, json!({"status": "no_match", "recommended_ids": []}));
}

#[rocket::async_test]
async fn test_one_based_output() {
    let client = full_client().await;
    let mut body = targets();
    body["is_start_from_zero"] = json!(false);
    body["top_k"] = json!(20);
    let (_, json) = post(&client, body).await;

    let got = ids(&json);
    assert_eq!(got.len(), 20);
    assert!(got.iter().all(|id| (1..=20).contains(id)));
}

#[rocket::async_test]
async fn test_transform_failure_is_server_error() {
    let client = client_with(None, Some(calculator_bundle(MacroTransform::failing()))).await;
    let (status, json) = post(&client, targets()).await;

    assert_eq!(status, Status::InternalServerError);
    assert!(json["detail"].as_str().unwrap().contains("fitted pipeline"));
}

#[rocket::async_test]
async fn test_missing_model_is_unavailable() {
    let client = client_with(None, None).await;
    let (status, _) = post(&client, targets()).await;
    assert_eq!(status, Status::ServiceUnavailable);
}
