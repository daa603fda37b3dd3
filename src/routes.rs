use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;

    Router::new()
        // Health check
        .route("/api/health", get(handlers::health_check))

        // Translation API
        .route("/api/languages", get(handlers::languages))
        .route("/api/translate", post(handlers::translate))

        // Form page and its assets
        .fallback_service(ServeDir::new(&system_config.static_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_manager::Config;
    use crate::translate::handler::tests::RecordingLLM;
    use crate::translate::TranslationHandler;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with(llm: Arc<RecordingLLM>) -> Router {
        let state = AppState::new(Config::default(), TranslationHandler::new(llm));
        create_routes(&state).with_state(state)
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_translate_ok() {
        let llm = RecordingLLM::replying("Bonjour, comment allez-vous ?");
        let app = app_with(llm.clone());

        let body = json!({"text": "Hello, how are you?", "target_language": "French"}).to_string();
        let response = app.oneshot(post_json("/api/translate", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        assert_eq!(value["original_text"], "Hello, how are you?");
        assert_eq!(value["target_language"], "French");
        assert_eq!(value["translated_text"], "Bonjour, comment allez-vous ?");
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_translate_blank_text_is_bad_request() {
        let llm = RecordingLLM::replying("unused");
        let app = app_with(llm.clone());

        let body = json!({"text": "   ", "target_language": "Spanish"}).to_string();
        let response = app.oneshot(post_json("/api/translate", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value = body_json(response).await;
        assert_eq!(value["error"], "validation_error");
        assert_eq!(value["message"], "Please enter some text.");
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_translate_unknown_language_is_bad_request() {
        let llm = RecordingLLM::replying("unused");
        let app = app_with(llm.clone());

        let body = json!({"text": "Hello", "target_language": "Klingon"}).to_string();
        let response = app.oneshot(post_json("/api/translate", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "validation_error");
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_translate_upstream_failure_is_bad_gateway() {
        let app = app_with(RecordingLLM::failing("rate limited"));

        let body = json!({"text": "Hello", "target_language": "Arabic"}).to_string();
        let response = app.oneshot(post_json("/api/translate", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let value = body_json(response).await;
        assert_eq!(value["error"], "upstream_error");
        assert!(value["message"].as_str().unwrap().contains("rate limited"));
    }

    #[tokio::test]
    async fn test_languages() {
        let app = app_with(RecordingLLM::replying("unused"));
        let request = Request::builder().uri("/api/languages").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!(["French", "Spanish", "German", "Hindi", "Arabic"])
        );
    }

    #[tokio::test]
    async fn test_health_reports_model() {
        let app = app_with(RecordingLLM::replying("unused"));
        let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        let value = body_json(response).await;
        assert_eq!(value["status"], "ok");
        assert_eq!(value["model"], "recording-model");
    }
}
