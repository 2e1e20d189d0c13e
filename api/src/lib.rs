//! Local HTTP surface for the website's assistant widget.
//!
//! | Route              | Purpose                                   |
//! |--------------------|-------------------------------------------|
//! | `POST /ask`        | answer one question (`{"question": ...}`) |
//! | `GET /suggestions` | starter questions                         |
//! | `GET /related`     | follow-up questions for `?question=`      |
//! | `GET /contact`     | phone / WhatsApp / email + action links   |
//! | `GET /health`      | generation backend health                 |

use std::sync::Arc;

mod core;
mod error_handler;
mod middleware_layer;
mod routes;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    middleware,
    routing::{get, post},
};
use tokio::signal;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{error, info};

pub use crate::core::app_state::AppState;
pub use crate::error_handler::{AppError, AppResult};

use crate::{
    middleware_layer::json_extractor::json_error_mapper,
    routes::{
        answer::ask_route::ask_route,
        health::health_route::health_route,
        widget::{
            contact_route::contact_route, related_route::related_route,
            suggestions_route::suggestions_route,
        },
    },
};

pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1:8080";

/// Builds the router over shared state.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.allowed_origins);
    Router::new()
        .route("/ask", post(ask_route))
        .route("/suggestions", get(suggestions_route))
        .route("/related", get(related_route))
        .route("/contact", get(contact_route))
        .route("/health", get(health_route))
        .layer(middleware::from_fn(json_error_mapper))
        .layer(cors)
        .with_state(state)
}

/// The widget lives on the static site's origin, not ours.
fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.iter().cloned())
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

/// Loads state from the environment and serves until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let host_url = std::env::var("API_ADDRESS")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_ADDRESS.to_string());

    let state = Arc::new(AppState::from_env()?);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %host_url, "assistant API listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("assistant API stopped");
    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    use axum::{
        body::{Body, to_bytes},
        http::{
            Request, StatusCode,
            header::{
                ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
                ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
            },
        },
    };
    use glass_rag::{AssistantConfig, TextGenerator};
    use llm_service::{
        AiLlmError, HealthService, LlmModelConfig, LlmProvider, OllamaError,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    /// Fixed reply (or failure) after an optional delay.
    struct Canned(Option<&'static str>, Duration);

    impl TextGenerator for Canned {
        fn generate<'a>(
            &'a self,
            _prompt: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<String, AiLlmError>> + Send + 'a>> {
            Box::pin(async move {
                tokio::time::sleep(self.1).await;
                match self.0 {
                    Some(t) => Ok(t.to_string()),
                    None => Err(OllamaError::Decode("down".into()).into()),
                }
            })
        }
    }

    fn unreachable_llm() -> LlmModelConfig {
        let port = {
            let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            l.local_addr().unwrap().port()
        };
        LlmModelConfig {
            provider: LlmProvider::Ollama,
            model: "tinyllama:latest".into(),
            endpoint: format!("http://127.0.0.1:{port}"),
            max_tokens: Some(150),
            temperature: Some(0.1),
            top_p: None,
            stop: Vec::new(),
            timeout_secs: Some(1),
        }
    }

    fn state_with(reply: Option<&'static str>, delay: Duration) -> AppState {
        let cfg = AssistantConfig {
            answer_timeout: Duration::from_secs(2),
            ..AssistantConfig::default()
        };
        AppState::new(
            Arc::new(Canned(reply, delay)),
            unreachable_llm(),
            cfg,
            HealthService::new(Some(1)).unwrap(),
        )
        .unwrap()
    }

    fn test_app(reply: Option<&'static str>) -> Router {
        app(Arc::new(state_with(reply, Duration::ZERO)))
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method("OPTIONS")
            .uri("/ask")
            .header(ORIGIN, origin)
            .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ask(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/ask")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn ask_returns_tagged_answer() {
        let (status, body) = send(
            test_app(Some("Mirrors start at ₹1,500.")),
            ask(r#"{"question":"mirror fitting"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["source"], "ai-constrained");
        assert_eq!(body["data"]["confidence"], "medium");
        assert!(
            body["data"]["answer"]
                .as_str()
                .unwrap()
                .ends_with("Call +91-81467-15800 for more details.")
        );
    }

    #[tokio::test]
    async fn ask_falls_back_when_generator_fails() {
        let (status, body) = send(test_app(None), ask(r#"{"question":"window price"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["source"], "template-fallback");
    }

    #[tokio::test]
    async fn blank_question_is_rejected() {
        let (status, body) = send(test_app(None), ask(r#"{"question":"   "}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert_eq!(body["error"]["details"][0]["path"], "question");
    }

    #[tokio::test]
    async fn malformed_json_uses_the_envelope() {
        let (status, body) = send(test_app(None), ask(r#"{"q":1}"#)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
        assert_eq!(body["error"]["details"][0]["path"], "question");

        let (status, body) = send(test_app(None), ask("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn widget_helper_routes() {
        let (status, body) = send(test_app(None), get("/suggestions")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 6);

        let (_, body) = send(test_app(None), get("/related?question=window%20price")).await;
        assert_eq!(body["data"]["question"], "window price");
        assert_eq!(body["data"]["related"].as_array().unwrap().len(), 3);

        let (_, body) = send(test_app(None), get("/contact")).await;
        assert_eq!(body["data"]["phone"], "+91-81467-15800");
        assert_eq!(body["data"]["tel_link"], "tel:+91-81467-15800");
        assert_eq!(body["data"]["whatsapp_link"], "https://wa.me/918146715800");
    }

    #[tokio::test]
    async fn health_reports_unreachable_backend() {
        let (status, body) = send(test_app(None), get("/health")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["data"]["ok"], false);
        assert_eq!(body["data"]["provider"], "Ollama");
    }

    #[tokio::test]
    async fn concurrent_visitors_are_answered_independently() {
        let app = app(Arc::new(state_with(
            Some("Mirrors start at ₹1,500."),
            Duration::from_millis(300),
        )));

        let first = send(app.clone(), ask(r#"{"question":"mirror fitting"}"#));
        let second = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            send(app.clone(), ask(r#"{"question":"window price"}"#)).await
        };
        let ((s1, b1), (s2, b2)) = tokio::join!(first, second);

        assert_eq!(s1, StatusCode::OK);
        assert_eq!(s2, StatusCode::OK);
        assert_eq!(b1["data"]["source"], "ai-constrained");
        assert_eq!(b2["data"]["source"], "ai-constrained");
    }

    #[tokio::test]
    async fn cors_preflight_is_answered() {
        let res = test_app(None)
            .oneshot(preflight("http://localhost:5500"))
            .await
            .unwrap();
        assert!(res.status().is_success(), "{}", res.status());
        assert_eq!(res.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let methods = res.headers()[ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
        assert!(methods.contains("POST"), "{methods}");

        let mut req = ask(r#"{"question":"hello"}"#);
        req.headers_mut()
            .insert(ORIGIN, HeaderValue::from_static("http://localhost:5500"));
        let res = test_app(None).oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn configured_origins_restrict_cors() {
        let state = state_with(None, Duration::ZERO)
            .with_allowed_origins(vec![HeaderValue::from_static("https://rajuglass.in")]);
        let app = app(Arc::new(state));

        let res = app
            .clone()
            .oneshot(preflight("https://rajuglass.in"))
            .await
            .unwrap();
        assert_eq!(
            res.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://rajuglass.in"
        );

        let res = app.oneshot(preflight("https://elsewhere.example")).await.unwrap();
        assert!(res.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
