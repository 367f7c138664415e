//! HTTP surface of the data server.
//!
//! Three routes, mirroring the platform contract:
//!
//! - `POST /dataserver/pushdata` - ingest one envelope; the optional
//!   `Content-MD5` header carries the client's digest; the JSON boolean
//!   response is the checksum result.
//! - `GET /dataserver/data/{blockType}` - all envelopes of a type; an
//!   unknown type name yields an empty list.
//! - `GET /dataserver/update/{name}/{newBlockType}` - reclassify by name;
//!   JSON boolean says whether a record was updated. An invalid type name
//!   is a 400.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use dp_ingestion::{BlockStore, DataLakeClient, IngestError, IngestionApi, IngestionService};
use shared_types::DataEnvelope;

/// HTTP-facing error wrapper around the core taxonomy.
pub enum ApiError {
    /// Caller contract violation (invalid block type name).
    BadRequest(String),
    /// Storage engine failure.
    Internal(String),
}

impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::InvalidBlockType(e) => ApiError::BadRequest(e.to_string()),
            IngestError::Storage(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            ApiError::Internal(message) => {
                error!(%message, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

/// Build the application router around a shared ingestion service.
pub fn router<S, L>(service: Arc<IngestionService<S, L>>, max_body_bytes: usize) -> Router
where
    S: BlockStore + 'static,
    L: DataLakeClient + 'static,
{
    Router::new()
        .route("/dataserver/pushdata", post(push_data::<S, L>))
        .route("/dataserver/data/:block_type", get(query_data::<S, L>))
        .route(
            "/dataserver/update/:name/:new_block_type",
            get(update_data::<S, L>),
        )
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn push_data<S, L>(
    State(service): State<Arc<IngestionService<S, L>>>,
    headers: HeaderMap,
    Json(envelope): Json<DataEnvelope>,
) -> Result<Json<bool>, ApiError>
where
    S: BlockStore + 'static,
    L: DataLakeClient + 'static,
{
    info!(name = %envelope.data_header.name, "data envelope received");

    let supplied_md5 = headers
        .get("Content-MD5")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let accepted = service.ingest(&envelope, supplied_md5)?;
    Ok(Json(accepted))
}

async fn query_data<S, L>(
    State(service): State<Arc<IngestionService<S, L>>>,
    Path(block_type): Path<String>,
) -> Result<Json<Vec<DataEnvelope>>, ApiError>
where
    S: BlockStore + 'static,
    L: DataLakeClient + 'static,
{
    let envelopes = service.query_by_type(&block_type)?;
    Ok(Json(envelopes))
}

async fn update_data<S, L>(
    State(service): State<Arc<IngestionService<S, L>>>,
    Path((name, new_block_type)): Path<(String, String)>,
) -> Result<Json<bool>, ApiError>
where
    S: BlockStore + 'static,
    L: DataLakeClient + 'static,
{
    let updated = service.reclassify(&name, &new_block_type)?;
    Ok(Json(updated))
}
