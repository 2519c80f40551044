//! Semantic detection backed by a mock remote embedding service.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use bias_lens::catalog::{BiasKind, SeverityLevel};
use bias_lens::config::Config;
use bias_lens::detect::DetectionMethod;
use bias_lens::error::{DetectError, EmbeddingError};
use bias_lens::service::BiasService;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DIMENSIONS: usize = 16;

/// One fixed unit vector for every input, so every exemplar is a perfect match.
fn unit_vector_response() -> ResponseTemplate {
    let mut embedding = vec![0.0_f32; DIMENSIONS];
    embedding[0] = 1.0;
    ResponseTemplate::new(200).set_body_json(json!({
        "data": [{ "embedding": embedding, "index": 0 }],
        "model": "test-model"
    }))
}

fn remote_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.embedding_url = Some(format!("{}/v1", server.uri()));
    config.embedding_model = "test-model".to_string();
    config.embedding_dimensions = DIMENSIONS;
    config.embedding_timeout_ms = 5_000;
    config
}

#[tokio::test]
async fn test_semantic_detection_through_remote_service() {
    let server = MockServer::start().await;
    // 1 input + 9 exemplars on the first call, 1 input on the second
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .and(body_partial_json(json!({ "model": "test-model" })))
        .respond_with(unit_vector_response())
        .expect(11)
        .mount(&server)
        .await;

    let service = BiasService::from_config(remote_config(&server)).unwrap();

    let result = service.detect_biases("Lunch is at noon.").await.unwrap();
    assert_eq!(result.biases_detected.len(), 3);
    assert!(result.biases_detected.contains(&BiasKind::ConfirmationBias));
    assert!(result.biases_detected.contains(&BiasKind::AvailabilityHeuristic));
    assert!(result.biases_detected.contains(&BiasKind::SurvivorshipBias));
    assert_eq!(result.confidence, 45);
    assert_eq!(result.severity, SeverityLevel::Critical);
    assert!(result
        .detections
        .iter()
        .all(|d| d.method == DetectionMethod::Semantic));
    assert!(result
        .reasoning
        .iter()
        .all(|line| line.ends_with("through semantic analysis")));

    // Exemplar vectors are cached after the first call
    service.detect_biases("Dinner is at six.").await.unwrap();
}

#[tokio::test]
async fn test_api_key_sent_as_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .and(header("authorization", "Bearer embed-key"))
        .respond_with(unit_vector_response())
        .expect(10)
        .mount(&server)
        .await;

    let mut config = remote_config(&server);
    config.embedding_api_key = Some(bias_lens::config::SecretString::new("embed-key".to_string()));
    let service = BiasService::from_config(config).unwrap();

    assert!(service.detect_biases("Lunch is at noon.").await.is_ok());
}

#[tokio::test]
async fn test_service_failure_is_an_error_not_an_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let service = BiasService::from_config(remote_config(&server)).unwrap();

    let err = service.detect_biases("Lunch is at noon.").await.unwrap_err();
    assert!(matches!(
        err,
        DetectError::Embedding(EmbeddingError::UnexpectedResponse { .. })
    ));
    assert_eq!(service.usage_summary().by_operation["detect"].failed, 1);
}

#[tokio::test]
async fn test_wrong_dimensions_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "embedding": [1.0, 0.0, 0.0] }]
        })))
        .mount(&server)
        .await;

    let service = BiasService::from_config(remote_config(&server)).unwrap();

    let err = service.detect_biases("Lunch is at noon.").await.unwrap_err();
    assert_eq!(
        err,
        DetectError::Embedding(EmbeddingError::DimensionMismatch {
            expected: DIMENSIONS,
            actual: 3,
        })
    );
}
