//! Form-based front-end.
//!
//! | Route            | Behaviour                                              |
//! |------------------|--------------------------------------------------------|
//! | `GET /`          | form and the session's history                         |
//! | `POST /generate` | validate, generate, record, export, render the result  |
//! | `GET /download`  | most recent PDF of the session as an attachment        |

pub mod pages;
pub mod session;

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use fitplan_core::{generic::GenericMessage, provider::ChatCompletionProvider};
use fitplan_types::WorkoutRequest;
use tracing::{error, info, warn};

use crate::{export::PdfExporter, generator::WorkoutGenerator, history::History};
use session::{SessionStore, resolve_session, session_from_headers};

/// Shared, read-mostly state built once at start-up.
pub struct AppState<B> {
    pub generator: WorkoutGenerator<B>,
    pub exporter: PdfExporter,
    pub sessions: SessionStore,
}

impl<B> AppState<B> {
    pub fn new(generator: WorkoutGenerator<B>, exporter: PdfExporter, sessions: SessionStore) -> Self {
        Self {
            generator,
            exporter,
            sessions,
        }
    }
}

pub fn router<B>(state: Arc<AppState<B>>) -> Router
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    Router::new()
        .route("/", get(index::<B>))
        .route("/generate", post(generate::<B>))
        .route("/download", get(download::<B>))
        .with_state(state)
}

fn with_cookie(cookie: Option<HeaderValue>, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();
    if let Some(cookie) = cookie {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    response
}

async fn index<B>(State(state): State<Arc<AppState<B>>>, headers: HeaderMap) -> Response
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    let (id, cookie) = resolve_session(&headers);
    let html = state.sessions.read(id, |session| match session {
        Some(session) => pages::index(&session.history, None, false),
        None => pages::index(&History::new(), None, false),
    });

    with_cookie(cookie, Html(html))
}

async fn generate<B>(
    State(state): State<Arc<AppState<B>>>,
    headers: HeaderMap,
    form: Result<Form<WorkoutRequest>, FormRejection>,
) -> Response
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    let (id, cookie) = resolve_session(&headers);

    let request = match form {
        Ok(Form(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "rejected workout form");
            let page = pages::invalid_request(&rejection.body_text());
            return with_cookie(cookie, (StatusCode::BAD_REQUEST, Html(page)));
        }
    };
    if let Err(err) = request.check_form_bounds() {
        warn!(error = %err, "rejected workout form");
        let page = pages::invalid_request(&err.to_string());
        return with_cookie(cookie, (StatusCode::BAD_REQUEST, Html(page)));
    }

    let result = state.generator.attempt(request).await;

    let exporter = state.exporter.clone();
    let to_export = result.clone();
    let pdf = match tokio::task::spawn_blocking(move || exporter.export(&to_export)).await {
        Ok(Ok(path)) => Some(path),
        Ok(Err(err)) => {
            error!(error = %err, "failed to export workout plan");
            None
        }
        Err(err) => {
            error!(error = %err, "export task failed");
            None
        }
    };

    let html = state.sessions.with_session(id, |session| {
        session.history.push(result);
        session.last_pdf = pdf;
        pages::index(
            &session.history,
            session.history.latest(),
            session.last_pdf.is_some(),
        )
    });

    with_cookie(cookie, Html(html))
}

async fn download<B>(State(state): State<Arc<AppState<B>>>, headers: HeaderMap) -> Response
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    let not_found = |message: &str| (StatusCode::NOT_FOUND, Html(pages::not_found(message))).into_response();

    let Some(path) = session_from_headers(&headers)
        .and_then(|id| state.sessions.get(id))
        .and_then(|session| session.last_pdf)
    else {
        return not_found("No workout plan has been generated in this session yet.");
    };

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed to read exported PDF");
            return not_found("The exported PDF is no longer available.");
        }
    };

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("Workout_Plan.pdf");
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{file_name}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    info!(path = %path.display(), "serving workout PDF");
    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response()
}
