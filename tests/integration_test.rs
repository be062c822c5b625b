use add_trivia_question::{
    process_all_drafts, Config, FormError, QuestionDraft, QuestionForm, TriviaClient,
};
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio_test::{assert_err, assert_ok};

/// 进程内的题库后端替身
#[derive(Clone, Default)]
struct Backend {
    posted: Arc<Mutex<Vec<Value>>>,
    cookies: Arc<Mutex<Vec<Option<String>>>>,
    fail_questions: bool,
}

async fn categories() -> impl axum::response::IntoResponse {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, "session=trivia; Path=/")],
        Json(json!({
            "success": true,
            "categories": {"1": "Science", "2": "Art"}
        })),
    )
}

async fn questions(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    backend.cookies.lock().unwrap().push(
        headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );
    backend.posted.lock().unwrap().push(body);

    if backend.fail_questions {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"success": false, "error": 422, "message": "unprocessable"})),
        );
    }

    let total = backend.posted.lock().unwrap().len();
    (
        StatusCode::OK,
        Json(json!({"success": true, "created": total, "total_questions": total})),
    )
}

async fn spawn_backend(backend: Backend) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new()
        .route("/categories", get(categories))
        .route("/questions", post(questions))
        .with_state(backend);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// 一个当前没有任何服务监听的地址
async fn dead_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> TriviaClient {
    let config = Config {
        api_base_url: base_url.to_string(),
        request_timeout_secs: 5,
        ..Config::default()
    };
    TriviaClient::new(&config).unwrap()
}

fn fill(form: &mut QuestionForm<TriviaClient>, fields: &[(&str, &str)]) {
    for (name, value) in fields {
        form.handle_named_change(name, value).unwrap();
    }
}

#[tokio::test]
async fn test_mount_then_submit_against_backend() {
    let backend = Backend::default();
    let base_url = spawn_backend(backend.clone()).await;
    let mut form = QuestionForm::new(client_for(&base_url));

    assert_ok!(form.mount().await);

    let labels: Vec<String> = form
        .view()
        .category_options
        .into_iter()
        .map(|o| o.label)
        .collect();
    assert_eq!(labels, vec!["Select a category", "Science", "Art", "Other"]);

    fill(
        &mut form,
        &[
            ("question", "What is 2+2?"),
            ("answer", "4"),
            ("difficulty", "2"),
            ("category", "1"),
        ],
    );
    let outcome = assert_ok!(form.submit().await);

    assert_eq!(outcome.created.created, Some(1));
    assert_eq!(
        backend.posted.lock().unwrap()[0],
        json!({
            "question": "What is 2+2?",
            "answer": "4",
            "difficulty": "2",
            "category": "1",
            "newCategory": ""
        })
    );

    let view = form.view();
    assert_eq!(view.question, "");
    assert_eq!(view.answer, "");
    assert_eq!(view.category, "none");
}

#[tokio::test]
async fn test_submit_carries_session_cookie() {
    let backend = Backend::default();
    let base_url = spawn_backend(backend.clone()).await;
    let mut form = QuestionForm::new(client_for(&base_url));

    assert_ok!(form.mount().await);
    fill(
        &mut form,
        &[("question", "Q"), ("answer", "A"), ("category", "2")],
    );
    assert_ok!(form.submit().await);

    let cookies = backend.cookies.lock().unwrap().clone();
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].as_deref().unwrap_or_default().contains("session=trivia"));
}

#[tokio::test]
async fn test_category_fetch_network_error() {
    let mut form = QuestionForm::new(client_for(&dead_address().await));

    let err = assert_err!(form.mount().await);

    assert!(matches!(err, FormError::CategoryLoad(_)));
    let values: Vec<String> = form
        .view()
        .category_options
        .into_iter()
        .map(|o| o.value)
        .collect();
    assert_eq!(values, vec!["none", "other"]);
}

#[tokio::test]
async fn test_submit_network_error_keeps_fields() {
    let mut form = QuestionForm::new(client_for(&dead_address().await));
    let _ = form.mount().await;
    fill(
        &mut form,
        &[
            ("question", "Who painted the Mona Lisa?"),
            ("answer", "Leonardo"),
            ("difficulty", "3"),
            ("category", "other"),
            ("newCategory", "Art History"),
        ],
    );
    let before = form.state().clone();

    let err = assert_err!(form.submit().await);

    assert!(matches!(err, FormError::Submit(_)));
    assert_eq!(form.state(), &before);
    assert_eq!(form.view().question, "Who painted the Mona Lisa?");
}

#[tokio::test]
async fn test_server_rejection_is_submit_failure() {
    let backend = Backend {
        fail_questions: true,
        ..Backend::default()
    };
    let base_url = spawn_backend(backend.clone()).await;
    let mut form = QuestionForm::new(client_for(&base_url));
    assert_ok!(form.mount().await);
    fill(
        &mut form,
        &[("question", "Q"), ("answer", "A"), ("category", "1")],
    );

    let err = assert_err!(form.submit().await);

    assert_eq!(
        err.user_message(),
        "Unable to add question. Please try your request again"
    );
    let cause = std::error::Error::source(&err).unwrap().to_string();
    assert!(cause.contains("422"));
    assert!(cause.contains("unprocessable"));
    assert_eq!(form.state().question, "Q");
}

#[tokio::test]
async fn test_batch_submits_drafts_and_records_failures() {
    let backend = Backend::default();
    let base_url = spawn_backend(backend.clone()).await;
    let dir = tempfile::tempdir().unwrap();
    let failed_file = dir.path().join("failed.txt");

    let config = Config {
        api_base_url: base_url,
        max_concurrent_submissions: 2,
        failed_drafts_file: failed_file.to_str().unwrap().to_string(),
        ..Config::default()
    };

    let drafts: Vec<QuestionDraft> = [
        "question = \"Q1\"\nanswer = \"A1\"\ndifficulty = 2\ncategory = \"1\"\n",
        "question = \"Q2\"\nanswer = \"A2\"\ncategory = \"other\"\nnew_category = \"Music\"\n",
        "question = \"Q3\"\nanswer = \"\"\ncategory = \"2\"\n",
    ]
    .iter()
    .map(|src| toml::from_str(src).unwrap())
    .collect();

    let client = Arc::new(TriviaClient::new(&config).unwrap());
    let stats = process_all_drafts(client, drafts, &config).await.unwrap();

    assert_eq!(stats.total, 3);
    assert_eq!(stats.success, 2);
    assert_eq!(stats.failed, 1);
    assert_eq!(backend.posted.lock().unwrap().len(), 2);

    let failures = std::fs::read_to_string(&failed_file).unwrap();
    assert_eq!(failures.lines().count(), 1);
    assert!(failures.contains("answer cannot be empty"));
}
