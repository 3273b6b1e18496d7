//! HTTP routes for decision, statement and mindset endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::super::AppState;
use super::handlers::{
    add_statement, create_decision, delete_statement, get_decision, get_mindset,
    list_statements, record_mindset, update_statement,
};

/// Creates the decisions router with all routes.
pub fn decision_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/decisions", post(create_decision))
        .route("/api/decisions/:id", get(get_decision))
        .route(
            "/api/decisions/:id/statements",
            post(add_statement).get(list_statements),
        )
        .route(
            "/api/statements/:id",
            put(update_statement).delete(delete_statement),
        )
        .route(
            "/api/decisions/:id/mindset",
            post(record_mindset).get(get_mindset),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::analysis::DecisionScorer;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router() -> Router {
        let state = AppState::from_store(Arc::new(InMemoryStore::new()), DecisionScorer::default());
        decision_routes(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn create_then_get_decision() {
        let app = router();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/decisions",
                r#"{"optionA": "Move abroad", "optionB": "Stay home"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/decisions/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = body_json(response).await;
        assert_eq!(fetched["optionB"], "Stay home");
    }

    #[tokio::test]
    async fn blank_option_is_bad_request() {
        let response = router()
            .oneshot(post_json("/api/decisions", r#"{"optionA": "", "optionB": "x"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["details"]["field"], "optionA");
    }

    #[tokio::test]
    async fn malformed_id_is_bad_request() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/decisions/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn statement_lifecycle() {
        let app = router();
        let created = body_json(
            app.clone()
                .oneshot(post_json("/api/decisions", r#"{"optionA": "A1", "optionB": "B1"}"#))
                .await
                .unwrap(),
        )
        .await;
        let decision_id = created["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/decisions/{}/statements", decision_id),
                r#"{"option": "Option B", "type": "pro", "text": "Cheaper", "rating": 6}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let statement = body_json(response).await;
        assert_eq!(statement["option"], "B");
        assert_eq!(statement["source"], "user");
        let statement_id = statement["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/statements/{}", statement_id))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"rating": 9}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["rating"], 9);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/statements/{}", statement_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let listed = body_json(
            app.oneshot(
                Request::builder()
                    .uri(format!("/api/decisions/{}/statements", decision_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap(),
        )
        .await;
        assert_eq!(listed.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn missing_mindset_is_not_found() {
        let app = router();
        let created = body_json(
            app.clone()
                .oneshot(post_json("/api/decisions", r#"{"optionA": "A1", "optionB": "B1"}"#))
                .await
                .unwrap(),
        )
        .await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/decisions/{}/mindset", created["id"].as_str().unwrap()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
