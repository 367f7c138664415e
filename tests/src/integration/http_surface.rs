//! # HTTP Surface Flow
//!
//! Drives the production router through tower, end to end: push over
//! `POST /dataserver/pushdata` with a real `Content-MD5` header, read back
//! over `GET /dataserver/data/{blockType}`, move the record over
//! `GET /dataserver/update/{name}/{newBlockType}`.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use http_body_util::BodyExt;
    use md5::{Digest, Md5};
    use tower::util::ServiceExt;

    use dp_ingestion::{
        DataLakeClient, IngestionService, InMemoryBlockStore, RelayError, RelaySink,
    };
    use server_runtime::routes::router;

    struct NullLake;

    #[async_trait]
    impl DataLakeClient for NullLake {
        async fn push(&self, _payload: &[u8]) -> Result<u16, RelayError> {
            Ok(200)
        }
    }

    fn app() -> Router {
        let service = Arc::new(IngestionService::new(
            Arc::new(InMemoryBlockStore::new()),
            RelaySink::new(Arc::new(NullLake), 2),
        ));
        router(service, 1024 * 1024)
    }

    fn push(name: &str, block_type: &str, body: &str) -> Request<Body> {
        let digest = hex::encode(Md5::digest(body.as_bytes()));
        let envelope = serde_json::json!({
            "dataHeader": { "name": name, "blockType": block_type },
            "dataBody": { "dataBody": body },
        });
        Request::builder()
            .method("POST")
            .uri("/dataserver/pushdata")
            .header("Content-Type", "application/json")
            .header("Content-MD5", digest)
            .body(Body::from(envelope.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_lifecycle_over_http() {
        let app = app();

        // Push.
        let response = app
            .clone()
            .oneshot(push("block1", "BLOCKTYPEA", "hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!(true));

        // Query.
        let response = app
            .clone()
            .oneshot(get("/dataserver/data/BLOCKTYPEA"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed = body_json(response).await;
        assert_eq!(
            listed,
            serde_json::json!([{
                "dataHeader": { "name": "block1", "blockType": "BLOCKTYPEA" },
                "dataBody": { "dataBody": "hello" },
            }])
        );

        // Reclassify.
        let response = app
            .clone()
            .oneshot(get("/dataserver/update/block1/BLOCKTYPEB"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!(true));

        // The record moved.
        let response = app
            .clone()
            .oneshot(get("/dataserver/data/BLOCKTYPEA"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await, serde_json::json!([]));

        let response = app
            .oneshot(get("/dataserver/data/BLOCKTYPEB"))
            .await
            .unwrap();
        let moved = body_json(response).await;
        assert_eq!(moved[0]["dataHeader"]["name"], "block1");
    }

    #[tokio::test]
    async fn test_bad_digest_is_ok_false_over_http() {
        let app = app();
        let envelope = serde_json::json!({
            "dataHeader": { "name": "block1", "blockType": "BLOCKTYPEA" },
            "dataBody": { "dataBody": "hello" },
        });
        let request = Request::builder()
            .method("POST")
            .uri("/dataserver/pushdata")
            .header("Content-Type", "application/json")
            .header("Content-MD5", "deadbeefdeadbeefdeadbeefdeadbeef")
            .body(Body::from(envelope.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!(false));
    }

    #[tokio::test]
    async fn test_unknown_type_in_envelope_is_unprocessable() {
        let app = app();
        let envelope = serde_json::json!({
            "dataHeader": { "name": "block1", "blockType": "NOTATYPE" },
            "dataBody": { "dataBody": "hello" },
        });
        let request = Request::builder()
            .method("POST")
            .uri("/dataserver/pushdata")
            .header("Content-Type", "application/json")
            .body(Body::from(envelope.to_string()))
            .unwrap();

        // The closed enum rejects the name during deserialization.
        let response = app.oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }
}
