use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ClassificationRequest, StreamId};
use super::registry::{StreamDefinitionSource, SubjectDirectory};
use super::service::{ClassificationServiceError, StreamClassificationService};

/// Router builder exposing the classification HTTP endpoints.
pub fn classification_router<D, S>(service: Arc<StreamClassificationService<D, S>>) -> Router
where
    D: SubjectDirectory + 'static,
    S: StreamDefinitionSource + 'static,
{
    Router::new()
        .route("/api/v1/classify", post(classify_handler::<D, S>))
        .route("/api/v1/classify/batch", post(classify_batch_handler::<D, S>))
        .route(
            "/api/v1/classify/:first/:second/:third",
            get(quick_classify_handler::<D, S>),
        )
        .route("/api/v1/streams", get(list_streams_handler::<D, S>))
        .route("/api/v1/streams/:stream_id", get(stream_handler::<D, S>))
        .route(
            "/api/v1/streams/:stream_id/subjects",
            get(stream_subjects_handler::<D, S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchRequest {
    pub(crate) triples: Vec<Vec<i64>>,
}

pub(crate) async fn classify_handler<D, S>(
    State(service): State<Arc<StreamClassificationService<D, S>>>,
    axum::Json(request): axum::Json<ClassificationRequest>,
) -> Response
where
    D: SubjectDirectory + 'static,
    S: StreamDefinitionSource + 'static,
{
    match service.classify(&request.subject_ids) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => infrastructure_response(error),
    }
}

pub(crate) async fn classify_batch_handler<D, S>(
    State(service): State<Arc<StreamClassificationService<D, S>>>,
    axum::Json(request): axum::Json<BatchRequest>,
) -> Response
where
    D: SubjectDirectory + 'static,
    S: StreamDefinitionSource + 'static,
{
    match service.classify_batch(&request.triples) {
        Ok(results) => (StatusCode::OK, axum::Json(results)).into_response(),
        Err(error) => infrastructure_response(error),
    }
}

pub(crate) async fn quick_classify_handler<D, S>(
    State(service): State<Arc<StreamClassificationService<D, S>>>,
    Path((first, second, third)): Path<(i64, i64, i64)>,
) -> Response
where
    D: SubjectDirectory + 'static,
    S: StreamDefinitionSource + 'static,
{
    match service.classify(&[first, second, third]) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => infrastructure_response(error),
    }
}

pub(crate) async fn list_streams_handler<D, S>(
    State(service): State<Arc<StreamClassificationService<D, S>>>,
) -> Response
where
    D: SubjectDirectory + 'static,
    S: StreamDefinitionSource + 'static,
{
    match service.list_streams() {
        Ok(summaries) => (StatusCode::OK, axum::Json(summaries)).into_response(),
        Err(error) => infrastructure_response(error),
    }
}

pub(crate) async fn stream_handler<D, S>(
    State(service): State<Arc<StreamClassificationService<D, S>>>,
    Path(stream_id): Path<i64>,
) -> Response
where
    D: SubjectDirectory + 'static,
    S: StreamDefinitionSource + 'static,
{
    match service.stream(StreamId(stream_id)) {
        Ok(Some(definition)) => (StatusCode::OK, axum::Json(definition)).into_response(),
        Ok(None) => not_found_response(stream_id),
        Err(error) => infrastructure_response(error),
    }
}

pub(crate) async fn stream_subjects_handler<D, S>(
    State(service): State<Arc<StreamClassificationService<D, S>>>,
    Path(stream_id): Path<i64>,
) -> Response
where
    D: SubjectDirectory + 'static,
    S: StreamDefinitionSource + 'static,
{
    match service.subjects_for_stream(StreamId(stream_id)) {
        Ok(Some(subjects)) => (StatusCode::OK, axum::Json(subjects)).into_response(),
        Ok(None) => not_found_response(stream_id),
        Err(error) => infrastructure_response(error),
    }
}

fn not_found_response(stream_id: i64) -> Response {
    let payload = json!({
        "error": format!("stream {stream_id} not found"),
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn infrastructure_response(error: ClassificationServiceError) -> Response {
    let status = match error {
        ClassificationServiceError::Reference(_) => StatusCode::SERVICE_UNAVAILABLE,
        ClassificationServiceError::Registry(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
