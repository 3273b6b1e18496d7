//! End-to-end tests over the full application router.
//!
//! Every test drives `app_router` with `tower::ServiceExt::oneshot` against a
//! fresh in-memory store, the way the binary wires it.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use orica::adapters::ai::MockAIProvider;
use orica::adapters::http::{app_router, AppState, RouterSettings};
use orica::adapters::memory::InMemoryStore;
use orica::domain::analysis::DecisionScorer;
use orica::domain::decision::{
    Importance, OptionSide, Provenance, Statement, StatementKind, StatementRecord,
};
use orica::domain::foundation::DecisionId;
use orica::ports::StatementRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    store: Arc<InMemoryStore>,
    router: Router,
}

impl TestApp {
    fn new() -> Self {
        Self::with_state(|state| state)
    }

    fn with_state(configure: impl FnOnce(AppState) -> AppState) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let state = configure(AppState::from_store(store.clone(), DecisionScorer::default()));
        let router = app_router(state, &RouterSettings::default());
        Self { store, router }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_decision(&self, a: &str, b: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/decisions",
                Some(json!({ "optionA": a, "optionB": b })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    async fn add(&self, decision: &str, option: &str, kind: &str, text: &str, rating: i64) {
        let (status, _) = self
            .send(
                Method::POST,
                &format!("/api/decisions/{}/statements", decision),
                Some(json!({ "option": option, "type": kind, "text": text, "rating": rating })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    async fn analysis(&self, decision: &str, query: &str) -> (StatusCode, Value) {
        self.send(
            Method::GET,
            &format!("/api/decisions/{}/analysis{}", decision, query),
            None,
        )
        .await
    }

    /// Seeds the job-offer comparison used across tests: 13 points each side.
    async fn seed_job_offers(&self) -> String {
        let id = self.create_decision("New job", "Current job").await;
        self.add(&id, "A", "pro", "Higher salary", 8).await;
        self.add(&id, "A", "con", "Longer commute", 5).await;
        self.add(&id, "B", "pro", "Stable team", 6).await;
        self.add(&id, "B", "con", "Lower pay", 7).await;
        id
    }
}

// =============================================================================
// Analysis
// =============================================================================

#[tokio::test]
async fn tied_scores_default_to_option_a() {
    let app = TestApp::new();
    let id = app.seed_job_offers().await;

    let (status, body) = app.analysis(&id, "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommendedOption"], "Option A");
    assert_eq!(body["emotionalVsPractical"], "Balanced");
    assert_eq!(body["scores"], json!({ "optionA": 13, "optionB": 13 }));
    assert_eq!(body["resolution"], "tie_default");
    assert!(body["reasoning"].as_str().unwrap().contains("Option A"));
}

#[tokio::test]
async fn user_preference_breaks_tie() {
    let app = TestApp::new();
    let id = app.seed_job_offers().await;

    let (status, body) = app.analysis(&id, "?userPreference=B").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommendedOption"], "Option B");
    assert_eq!(body["resolution"], "tie_break_preference");
}

#[tokio::test]
async fn user_preference_does_not_override_majority() {
    let app = TestApp::new();
    let id = app.seed_job_offers().await;
    app.add(&id, "A", "pro", "Remote Fridays", 3).await;

    let (_, body) = app.analysis(&id, "?userPreference=Option%20B").await;

    assert_eq!(body["recommendedOption"], "Option A");
    assert_eq!(body["resolution"], "score_majority");
    assert_eq!(body["scores"]["optionA"], 16);
}

#[tokio::test]
async fn invalid_user_preference_is_bad_request() {
    let app = TestApp::new();
    let id = app.seed_job_offers().await;

    let (status, body) = app.analysis(&id, "?userPreference=C").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["code"].is_string());
}

#[tokio::test]
async fn decision_without_statements_scores_zero() {
    let app = TestApp::new();
    let id = app.create_decision("Stay", "Go").await;

    let (status, body) = app.analysis(&id, "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scores"], json!({ "optionA": 0, "optionB": 0 }));
    assert_eq!(body["recommendedOption"], "Option A");
}

#[tokio::test]
async fn unknown_decision_is_not_found() {
    let app = TestApp::new();

    let (status, body) = app.analysis(&DecisionId::new().to_string(), "").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_stored_record_is_server_error() {
    let app = TestApp::new();
    let id = app.seed_job_offers().await;

    let decision_id: DecisionId = id.parse().unwrap();
    let statement = Statement::new(
        decision_id,
        OptionSide::B,
        StatementKind::Pro,
        "Imported",
        Importance::new(3),
        Provenance::User,
    )
    .unwrap();
    let mut record = StatementRecord::from(&statement);
    record.kind = "maybe".to_string();
    StatementRepository::save(app.store.as_ref(), &record)
        .await
        .unwrap();

    let (status, body) = app.analysis(&id, "").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert_eq!(body["message"], "Server error during analysis");
}

#[tokio::test]
async fn mindset_weights_apply_only_when_requested() {
    let app = TestApp::new();
    let id = app.seed_job_offers().await;
    let (status, _) = app
        .send(
            Method::POST,
            &format!("/api/decisions/{}/mindset", id),
            Some(json!({ "emotionalAttachment": "Strong", "fearOfRegret": "High" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, plain) = app.analysis(&id, "").await;
    let (_, weighted) = app.analysis(&id, "?useMindset=true").await;

    assert_eq!(plain["emotionalVsPractical"], "Balanced");
    assert_eq!(weighted["emotionalVsPractical"], "Emotional");
    assert_eq!(plain["scores"], weighted["scores"]);
    assert_eq!(plain["recommendedOption"], weighted["recommendedOption"]);
}

#[tokio::test]
async fn editing_and_deleting_statements_changes_the_outcome() {
    let app = TestApp::new();
    let id = app.create_decision("Bike", "Car").await;
    app.add(&id, "A", "pro", "Healthy", 4).await;

    let (_, statements) = app
        .send(Method::GET, &format!("/api/decisions/{}/statements", id), None)
        .await;
    let statement_id = statements[0]["id"].as_str().unwrap().to_string();
    app.add(&id, "B", "pro", "Comfortable", 5).await;

    let (_, before) = app.analysis(&id, "").await;
    assert_eq!(before["recommendedOption"], "Option B");

    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/api/statements/{}", statement_id),
            Some(json!({ "rating": 9 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, edited) = app.analysis(&id, "").await;
    assert_eq!(edited["recommendedOption"], "Option A");
    assert_eq!(edited["emotionalVsPractical"], "Practical");

    let (status, body) = app
        .send(Method::DELETE, &format!("/api/statements/{}", statement_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Statement deleted");
    let (_, deleted) = app.analysis(&id, "").await;
    assert_eq!(deleted["scores"], json!({ "optionA": 0, "optionB": 5 }));
}

// =============================================================================
// Suggestions
// =============================================================================

#[tokio::test]
async fn suggestions_fall_back_without_provider() {
    let app = TestApp::new();
    let id = app.create_decision("Rent", "Buy").await;

    let (status, body) = app
        .send(Method::POST, &format!("/api/decisions/{}/suggestions", id), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "fallback");
    assert_eq!(
        body["suggestions"]["optionA"]["pros"][0],
        "Potential benefit 1 for Option A"
    );
}

#[tokio::test]
async fn persisted_suggestions_feed_the_analysis() {
    let provider = MockAIProvider::new().with_response(
        "```json\n{\"optionA\": {\"pros\": [\"Flexible\"], \"cons\": []}, \
         \"optionB\": {\"pros\": [\"Equity\"], \"cons\": [\"Mortgage\"]}}\n```",
    );
    let app = TestApp::with_state(|state| state.with_ai_provider(Arc::new(provider)));
    let id = app.create_decision("Rent", "Buy").await;

    let (status, body) = app
        .send(
            Method::POST,
            &format!("/api/decisions/{}/suggestions", id),
            Some(json!({ "persist": true })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "provider");
    assert_eq!(body["persisted"].as_array().unwrap().len(), 3);

    let (_, analysis) = app.analysis(&id, "").await;
    assert_eq!(analysis["scores"], json!({ "optionA": 5, "optionB": 10 }));
    assert_eq!(analysis["recommendedOption"], "Option B");
}
