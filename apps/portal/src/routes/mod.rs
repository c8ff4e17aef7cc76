pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::perf::handlers as perf;
use crate::resume::handlers as resume;
use crate::session::handlers as session;
use crate::state::AppState;
use crate::view::handlers as view;

/// Headroom over the file ceiling for multipart framing. The upload handler
/// stops reading once the ceiling is crossed, before this limit is reached.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = usize::try_from(state.config.max_upload_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route("/health", get(health::health_handler))
        // View API
        .route("/api/v1/view", get(view::handle_get_view))
        .route(
            "/api/v1/sections/:section",
            post(view::handle_activate_section),
        )
        .route(
            "/api/v1/theme",
            get(view::handle_get_theme).put(view::handle_set_theme),
        )
        .route(
            "/api/v1/notifications",
            get(view::handle_drain_notifications),
        )
        // Resume API
        .route(
            "/api/v1/resume",
            get(resume::handle_get_resume)
                .post(resume::handle_upload)
                .delete(resume::handle_remove)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Jobs API
        .route("/api/v1/jobs/search", get(jobs::handle_search))
        .route("/api/v1/jobs/search/clear", post(jobs::handle_clear_search))
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/api/v1/jobs/details",
            post(jobs::handle_open_details).delete(jobs::handle_close_details),
        )
        // Session API
        .route("/api/v1/session", get(session::handle_get_session))
        .route("/api/v1/session/login", post(session::handle_login))
        .route("/api/v1/session/signup", post(session::handle_signup))
        .route("/api/v1/session/logout", post(session::handle_logout))
        .route("/api/v1/session/activity", post(session::handle_activity))
        // Performance
        .route(
            "/api/v1/perf",
            get(perf::handle_get).post(perf::handle_record),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::jobs::listing::JobListing;
    use crate::jobs::search::SearchQuery;
    use crate::preferences::keys;
    use crate::provider::{
        CreatedJob, Credentials, DataProvider, JobDraft, ProviderError, ProviderResult,
        SignupRequest, UserAccount,
    };
    use crate::resume::record::ResumeRecord;
    use crate::resume::upload::FileMeta;
    use crate::state::test_support::{test_state, test_state_with};

    const BOUNDARY: &str = "portal-test-boundary";

    /// Provider whose backend is always down.
    struct FailingProvider;

    #[async_trait]
    impl DataProvider for FailingProvider {
        async fn login(&self, _: &Credentials) -> ProviderResult<UserAccount> {
            Err(ProviderError::Unavailable("offline".to_string()))
        }

        async fn signup(&self, _: &SignupRequest) -> ProviderResult<UserAccount> {
            Err(ProviderError::Unavailable("offline".to_string()))
        }

        async fn upload_resume(&self, _: &FileMeta) -> ProviderResult<ResumeRecord> {
            Err(ProviderError::Unavailable("offline".to_string()))
        }

        async fn get_jobs(&self, _: &SearchQuery) -> ProviderResult<Vec<JobListing>> {
            Err(ProviderError::Unavailable("offline".to_string()))
        }

        async fn create_job(&self, _: &JobDraft) -> ProviderResult<CreatedJob> {
            Err(ProviderError::Unavailable("offline".to_string()))
        }
    }

    fn multipart_upload(file_name: &str, content_type: &str, contents: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(contents);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let (status, body) = send(&app, empty_request(Method::GET, "/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "skillmatch-portal");
    }

    #[tokio::test]
    async fn test_initial_view_shows_dashboard() {
        let app = build_router(test_state());
        let (status, body) = send(&app, empty_request(Method::GET, "/api/v1/view")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["active_section"], "dashboard");
        assert_eq!(body["upload"]["state"], "empty");
        assert_eq!(body["elements"]["dashboard-section"]["hidden"], false);
        assert_eq!(body["elements"]["profile-section"]["hidden"], true);
    }

    #[tokio::test]
    async fn test_activate_section() {
        let app = build_router(test_state());
        let (status, body) =
            send(&app, empty_request(Method::POST, "/api/v1/sections/profile")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["activated"], true);
        assert_eq!(body["active_section"], "profile");
        assert_eq!(body["view"]["elements"]["profile-section"]["hidden"], false);
        assert_eq!(body["view"]["elements"]["dashboard-section"]["hidden"], true);
    }

    #[tokio::test]
    async fn test_unknown_section_is_a_noop() {
        let app = build_router(test_state());
        send(&app, empty_request(Method::POST, "/api/v1/sections/search-jobs")).await;
        let (status, body) =
            send(&app, empty_request(Method::POST, "/api/v1/sections/settings")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["activated"], false);
        assert_eq!(body["active_section"], "search-jobs");
    }

    #[tokio::test]
    async fn test_theme_toggle_persists() {
        let state = test_state();
        let prefs = state.preferences.clone();
        let app = build_router(state);

        let (status, body) = send(
            &app,
            json_request(Method::PUT, "/api/v1/theme", json!({ "mode": "dark" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "dark");
        assert_eq!(prefs.get(keys::THEME).await.unwrap().as_deref(), Some("dark"));

        let (_, body) = send(&app, empty_request(Method::GET, "/api/v1/theme")).await;
        assert_eq!(body["mode"], "dark");
    }

    #[tokio::test(start_paused = true)]
    async fn test_upload_populates_after_processing_delay() {
        let app = build_router(test_state());

        let (status, body) = send(
            &app,
            multipart_upload("resume.pdf", "application/pdf", b"%PDF-1.4"),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["upload"]["state"], "uploading");
        assert_eq!(body["upload"]["file_name"], "resume.pdf");

        let (_, view) = send(&app, empty_request(Method::GET, "/api/v1/view")).await;
        assert_eq!(view["elements"]["uploadedResume"]["hidden"], false);
        assert_eq!(view["elements"]["resumeUpload"]["hidden"], true);
        assert_eq!(view["elements"]["resumeAnalysisSection"]["hidden"], true);

        tokio::time::sleep(Duration::from_millis(2100)).await;

        let (_, view) = send(&app, empty_request(Method::GET, "/api/v1/view")).await;
        assert_eq!(view["upload"]["state"], "populated");
        assert_eq!(view["upload"]["record"]["name"], "John Doe");
        assert_eq!(view["elements"]["resumeAnalysisSection"]["hidden"], false);
        assert_eq!(view["elements"]["overallMatch"]["text"], "87%");
        assert!(view["chart"].is_object());

        let (status, body) = send(&app, empty_request(Method::DELETE, "/api/v1/resume")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["removed"], true);
        assert_eq!(body["upload"]["state"], "empty");
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_type() {
        let app = build_router(test_state());
        let (status, body) =
            send(&app, multipart_upload("notes.txt", "text/plain", b"hello")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Please upload a PDF, DOC, or DOCX file.");

        let (_, view) = send(&app, empty_request(Method::GET, "/api/v1/view")).await;
        assert_eq!(view["upload"]["state"], "empty");
        assert_eq!(view["elements"]["uploadedResume"]["hidden"], true);
    }

    #[tokio::test]
    async fn test_upload_far_over_ceiling_gets_size_message() {
        let app = build_router(test_state());
        let contents = vec![0u8; 8 * 1024 * 1024];
        let (status, body) =
            send(&app, multipart_upload("cv.pdf", "application/pdf", &contents)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "File size must be less than 5MB.");

        let (_, view) = send(&app, empty_request(Method::GET, "/api/v1/view")).await;
        assert_eq!(view["upload"]["state"], "empty");
    }

    #[tokio::test]
    async fn test_upload_far_over_ceiling_with_bad_type_gets_type_message() {
        let app = build_router(test_state());
        let contents = vec![0u8; 8 * 1024 * 1024];
        let (status, body) =
            send(&app, multipart_upload("cv.txt", "text/plain", &contents)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Please upload a PDF, DOC, or DOCX file.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_upload_supersedes_one_in_flight() {
        let app = build_router(test_state());

        let (status, _) =
            send(&app, multipart_upload("a.pdf", "application/pdf", b"%PDF-a")).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        tokio::time::sleep(Duration::from_secs(1)).await;

        let (status, body) =
            send(&app, multipart_upload("b.pdf", "application/pdf", b"%PDF-b")).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["upload"]["file_name"], "b.pdf");

        // The first upload resolves here and must be discarded.
        tokio::time::sleep(Duration::from_millis(1100)).await;
        let (_, view) = send(&app, empty_request(Method::GET, "/api/v1/view")).await;
        assert_eq!(view["upload"]["state"], "uploading");
        assert_eq!(view["upload"]["file_name"], "b.pdf");
        assert!(view["chart"].is_null());

        tokio::time::sleep(Duration::from_millis(1000)).await;
        let (_, view) = send(&app, empty_request(Method::GET, "/api/v1/view")).await;
        assert_eq!(view["upload"]["state"], "populated");
        assert_eq!(view["upload"]["file_name"], "b.pdf");
        assert_eq!(view["elements"]["resumeFileName"]["text"], "b.pdf");
        assert!(view["chart"].is_object());

        let (_, notes) = send(&app, empty_request(Method::GET, "/api/v1/notifications")).await;
        assert_eq!(notes.as_array().unwrap().len(), 1);
        assert_eq!(notes[0]["kind"], "success");
    }

    #[tokio::test]
    async fn test_upload_requires_resume_field() {
        let app = build_router(test_state());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(format!("--{BOUNDARY}--\r\n")))
            .unwrap();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_processing_returns_to_empty() {
        let app = build_router(test_state_with(Arc::new(FailingProvider)));

        let (status, _) = send(
            &app,
            multipart_upload("resume.docx", "application/octet-stream", b"PK"),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);

        tokio::time::sleep(Duration::from_millis(10)).await;

        let (_, view) = send(&app, empty_request(Method::GET, "/api/v1/view")).await;
        assert_eq!(view["upload"]["state"], "empty");
        assert_eq!(view["elements"]["uploadedResume"]["hidden"], true);

        let (_, notes) = send(&app, empty_request(Method::GET, "/api/v1/notifications")).await;
        let notes = notes.as_array().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0]["kind"], "error");
    }

    #[tokio::test]
    async fn test_provider_failure_maps_to_bad_gateway() {
        let app = build_router(test_state_with(Arc::new(FailingProvider)));
        let (status, body) = send(&app, empty_request(Method::GET, "/api/v1/jobs")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "PROVIDER_ERROR");
    }

    #[tokio::test]
    async fn test_search_renders_results() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            empty_request(Method::GET, "/api/v1/jobs/search?skills=react"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 5);

        let (_, view) = send(&app, empty_request(Method::GET, "/api/v1/view")).await;
        assert_eq!(view["elements"]["searchSkills"]["value"], "react");
        assert_eq!(
            view["elements"]["jobSearchResults"]["children"]
                .as_array()
                .unwrap()
                .len(),
            5
        );

        let (_, body) = send(&app, empty_request(Method::POST, "/api/v1/jobs/search/clear")).await;
        assert_eq!(body["count"], 8);
    }

    #[tokio::test]
    async fn test_job_modal_open_and_close() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/api/v1/jobs/details",
                json!({ "title": "Senior Frontend Developer", "company": "TechCorp Inc.", "match_score": 95 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["open"], true);

        let (_, view) = send(&app, empty_request(Method::GET, "/api/v1/view")).await;
        assert_eq!(view["elements"]["jobModal"]["hidden"], false);

        send(&app, empty_request(Method::DELETE, "/api/v1/jobs/details")).await;
        let (_, view) = send(&app, empty_request(Method::GET, "/api/v1/view")).await;
        assert_eq!(view["elements"]["jobModal"]["hidden"], true);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_and_logout() {
        let app = build_router(test_state());

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/api/v1/session/login",
                json!({ "username": "ada", "password": "secret" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["role"], "applicant");

        let (_, body) = send(&app, empty_request(Method::GET, "/api/v1/session")).await;
        assert_eq!(body["logged_in"], true);

        let (status, _) = send(&app, empty_request(Method::POST, "/api/v1/session/logout")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, body) = send(&app, empty_request(Method::GET, "/api/v1/session")).await;
        assert_eq!(body["logged_in"], false);
        assert!(body["user"].is_null());
    }

    #[tokio::test]
    async fn test_perf_round_trip() {
        let app = build_router(test_state());
        let (status, _) = send(&app, empty_request(Method::GET, "/api/v1/perf")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/api/v1/perf",
                json!({ "load_ms": 1200.0, "dom_content_loaded_ms": 450.0 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["connection"], "unknown");

        let (status, body) = send(&app, empty_request(Method::GET, "/api/v1/perf")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["loadTime"], 1200.0);
        assert_eq!(body["domReady"], 450.0);
    }
}
