//! HTTP routes for the analysis endpoint.

use axum::routing::get;
use axum::Router;

use super::super::AppState;
use super::handlers::get_decision_analysis;

pub fn analysis_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/decisions/:id/analysis", get(get_decision_analysis))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::analysis::DecisionScorer;
    use crate::domain::decision::{
        Decision, Importance, OptionSide, Provenance, Statement, StatementKind, StatementRecord,
    };
    use crate::ports::{DecisionRepository, StatementRepository};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn seeded() -> (Arc<InMemoryStore>, Decision) {
        let store = Arc::new(InMemoryStore::new());
        let decision = Decision::new("Bike", "Car").unwrap();
        DecisionRepository::save(store.as_ref(), &decision).await.unwrap();
        for (side, text) in [(OptionSide::A, "Healthy"), (OptionSide::B, "Comfortable")] {
            let statement = Statement::new(
                decision.id(),
                side,
                StatementKind::Pro,
                text,
                Importance::new(4),
                Provenance::User,
            )
            .unwrap();
            StatementRepository::save(store.as_ref(), &StatementRecord::from(&statement))
                .await
                .unwrap();
        }
        (store, decision)
    }

    async fn get(store: Arc<InMemoryStore>, uri: String) -> (StatusCode, serde_json::Value) {
        let state = AppState::from_store(store, DecisionScorer::default());
        let response = analysis_routes(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn returns_recommendation_with_camel_case_fields() {
        let (store, decision) = seeded().await;

        let (status, body) = get(store, format!("/api/decisions/{}/analysis", decision.id())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendedOption"], "Option A");
        assert_eq!(body["emotionalVsPractical"], "Balanced");
        assert_eq!(body["scores"]["optionB"], 4);
        assert_eq!(body["resolution"], "tie_default");
    }

    #[tokio::test]
    async fn preference_label_is_accepted() {
        let (store, decision) = seeded().await;

        let (_, body) = get(
            store,
            format!("/api/decisions/{}/analysis?userPreference=Option%20B", decision.id()),
        )
        .await;

        assert_eq!(body["recommendedOption"], "Option B");
    }

    #[tokio::test]
    async fn invalid_preference_is_bad_request() {
        let (store, decision) = seeded().await;

        let (status, body) = get(
            store,
            format!("/api/decisions/{}/analysis?userPreference=maybe", decision.id()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn malformed_id_is_bad_request() {
        let (store, _) = seeded().await;

        let (status, _) = get(store, "/api/decisions/not-a-uuid/analysis".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
