// ABOUTME: Health API client tests against a mock backend
// ABOUTME: Covers routes, query parameters, sample mapping, and error body handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use serde_json::json;
use wearable_link::api::HealthApiClient;
use wearable_link::errors::ErrorCode;
use wearable_link::models::{
    AuthType, ConnectionStatus, HealthDataParams, SleepQuality, SyncStatus,
};
use wiremock::matchers::{
    body_json, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> HealthApiClient {
    HealthApiClient::new(reqwest::Client::new(), server.uri())
}

#[tokio::test]
async fn test_list_providers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/providers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "garmin",
                "name": "Garmin",
                "description": "Garmin Connect",
                "logoUrl": "/logos/garmin.svg",
                "isAvailable": true,
                "features": ["workouts", "heart_rate"],
                "authType": "oauth2"
            },
            {
                "id": "apple",
                "name": "Apple Health",
                "isAvailable": false,
                "authType": "api_key"
            }
        ])))
        .mount(&server)
        .await;

    let providers = client(&server).list_providers().await.unwrap();

    assert_eq!(providers.len(), 2);
    assert_eq!(providers[0].auth_type, AuthType::Oauth2);
    assert_eq!(providers[0].features, vec!["workouts", "heart_rate"]);
    assert!(!providers[1].is_available);
    assert!(providers[1].description.is_empty());
}

#[tokio::test]
async fn test_user_connections_sends_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/user-1/connections"))
        .and(header("X-API-Key", "sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "conn-1",
                "userId": "user-1",
                "providerId": "garmin",
                "providerName": "Garmin",
                "status": "active",
                "connectedAt": "2025-03-01T10:00:00Z",
                "lastSyncAt": null,
                "syncStatus": "pending",
                "dataPoints": 1200
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let connections = client(&server)
        .with_api_key(Some("sk-test".into()))
        .user_connections("user-1")
        .await
        .unwrap();

    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].status, ConnectionStatus::Active);
    assert_eq!(connections[0].sync_status, SyncStatus::Pending);
    assert_eq!(connections[0].last_sync_at, None);
    assert_eq!(connections[0].data_points, 1200);
}

#[tokio::test]
async fn test_heart_rate_window_maps_and_filters_samples() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/user-1/heart-rate"))
        .and(query_param("device_id", "fenix-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "s1", "device_id": "fenix-7", "recorded_at": "2025-03-01T07:00:00Z", "value": "61.000"},
            {"id": "s2", "device_id": null, "recorded_at": "2025-03-01T07:01:00Z", "value": 75},
            {"id": "s3", "device_id": "fenix-7", "recorded_at": "2025-03-01T07:02:00Z", "value": "n/a"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let readings = client(&server)
        .heart_rate_window("user-1", Some("fenix-7"), 7)
        .await
        .unwrap();

    assert_eq!(readings.len(), 2);
    assert_eq!(readings[0].value, 61.0);
    assert_eq!(readings[0].source, "fenix-7");
    assert_eq!(readings[0].user_id, "user-1");
    assert_eq!(readings[1].value, 75.0);
    assert_eq!(readings[1].source, "unknown");
}

#[tokio::test]
async fn test_heart_rate_samples_omit_unset_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/user-1/heart-rate"))
        .and(query_param("limit", "50"))
        .and(query_param_is_missing("device_id"))
        .and(query_param_is_missing("start_datetime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let params = HealthDataParams {
        limit: Some(50),
        ..HealthDataParams::default()
    };
    let samples = client(&server)
        .heart_rate_samples("user-1", &params)
        .await
        .unwrap();

    assert!(samples.is_empty());
}

#[tokio::test]
async fn test_workouts_accept_numeric_strings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/user-1/workouts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "w1",
                "user_id": "user-1",
                "category": "workout",
                "type": "running",
                "source_name": "Garmin",
                "duration_seconds": "1800.000",
                "start_datetime": "2025-03-01T07:00:00Z",
                "end_datetime": "2025-03-01T07:30:00Z",
                "heart_rate_min": "92.000",
                "heart_rate_max": "171.000",
                "heart_rate_avg": "143.500"
            }
        ])))
        .mount(&server)
        .await;

    let workouts = client(&server)
        .workouts("user-1", &HealthDataParams::default())
        .await
        .unwrap();

    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].record_type.as_deref(), Some("running"));
    assert_eq!(workouts[0].heart_rate_avg, Some(143.5));
    assert_eq!(workouts[0].steps_avg, None);
}

#[tokio::test]
async fn test_sync_and_disconnect() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/users/user-1/sync"))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(json!({"message": "Sync queued", "jobId": "job-9"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/users/user-1/connections/conn-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let job = api.sync_user_data("user-1").await.unwrap();
    assert_eq!(job.job_id, "job-9");

    api.disconnect_provider("user-1", "conn-1").await.unwrap();
}

#[tokio::test]
async fn test_error_body_detail_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/ghost/connections"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "User not found"})))
        .mount(&server)
        .await;

    let error = client(&server).user_connections("ghost").await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.message, "User not found");
}

#[tokio::test]
async fn test_unreadable_error_body_uses_status_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/providers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let error = client(&server).list_providers().await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.message, "Request failed with status 500");
}

#[tokio::test]
async fn test_malformed_success_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/providers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let error = client(&server).list_providers().await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalResponseInvalid);
}

#[tokio::test]
async fn test_heart_rate_window_rejects_bad_windows_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/user-1/heart-rate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let api = client(&server);
    for days in [0, -7, 999_999_999] {
        let error = api
            .heart_rate_window("user-1", None, days)
            .await
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput, "days = {days}");
    }
}

#[tokio::test]
async fn test_sleep_and_activity_send_days() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/user-1/sleep"))
        .and(query_param("days", "14"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "n1",
                "userId": "user-1",
                "date": "2025-03-01",
                "startTime": "2025-02-28T23:10:00Z",
                "endTime": "2025-03-01T06:40:00Z",
                "totalMinutes": 430,
                "deepMinutes": 80,
                "lightMinutes": 230,
                "remMinutes": 95,
                "awakeMinutes": 25,
                "efficiency": 91.5,
                "quality": "excellent",
                "source": "oura"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/user-1/activity"))
        .and(query_param("days", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "d1",
                "userId": "user-1",
                "date": "2025-03-01",
                "steps": 11_042,
                "activeMinutes": 64,
                "calories": 2480.5,
                "distance": 8.2,
                "floors": 12,
                "source": "garmin"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let nights = api.sleep_data("user-1", 14).await.unwrap();
    assert_eq!(nights.len(), 1);
    assert_eq!(nights[0].quality, SleepQuality::Excellent);
    assert_eq!(nights[0].total_minutes, 430);

    let days = api.activity_data("user-1", 3).await.unwrap();
    assert_eq!(days[0].steps, 11_042);
    assert_eq!(days[0].distance, 8.2);

    let error = api.sleep_data("user-1", 0).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_health_summary_defaults_to_week() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/user-1/health-summary"))
        .and(query_param("period", "7d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userId": "user-1",
            "period": "7d",
            "heartRate": {"average": 64.0, "min": 48.0, "max": 171.0, "data": []},
            "sleep": {"averageMinutes": 421.5, "averageEfficiency": 89.0, "data": []},
            "activity": {"averageSteps": 9120.0, "totalActiveMinutes": 390, "data": []},
            "lastUpdated": "2025-03-08T06:00:00Z"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let api = client(&server);
    let summary = api.health_summary("user-1", None).await.unwrap();
    assert_eq!(summary.period, "7d");
    assert_eq!(summary.heart_rate.max, 171.0);
    assert_eq!(summary.activity.total_active_minutes, 390);

    api.health_summary("user-1", Some("")).await.unwrap();
}

#[tokio::test]
async fn test_generate_connection_link_posts_provider() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/users/user-1/connections/generate-link"))
        .and(body_json(json!({"providerId": "garmin"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://app.example.com/connect/abc123",
            "expiresAt": "2025-03-01T11:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let link = api
        .generate_connection_link("user-1", "garmin")
        .await
        .unwrap();
    assert_eq!(link.url, "https://app.example.com/connect/abc123");

    let error = api
        .generate_connection_link("user-1", "")
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}
