//! HTTP adapters against an in-process service.

use std::time::Duration;

use axum::http::{header, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use seatforge_client::{ClientError, HttpChartExporter, HttpLayoutGenerator};
use seatforge_config::SessionConfig;
use seatforge_core::{LayoutEntry, StudentId};
use seatforge_engine::{
    ChartExporter, EngineError, ExportRequest, GenerationStatus, LayoutGenerator, LayoutRequest,
    SeatAssignmentEngine,
};
use seatforge_test::{pos, roster};
use serde_json::{json, Value};

/// Serves `router` on an ephemeral port and returns its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Seats students on the request's seats in reverse order.
async fn reverse_layout(Json(request): Json<LayoutRequest>) -> Json<Vec<LayoutEntry>> {
    Json(
        request
            .students
            .iter()
            .zip(request.seats.iter().rev())
            .map(|(student, seat)| LayoutEntry::new(student.clone(), seat.0))
            .collect(),
    )
}

async fn no_layout() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({"error": "no feasible layout"})),
    )
}

async fn render(
    Json(request): Json<ExportRequest>,
) -> ([(header::HeaderName, &'static str); 1], Vec<u8>) {
    let body = format!("%PDF students={}", request.students.len());
    ([(header::CONTENT_TYPE, "application/pdf")], body.into_bytes())
}

fn empty_request() -> LayoutRequest {
    LayoutRequest {
        students: Vec::new(),
        seats: Vec::new(),
        relations: Vec::new(),
    }
}

fn config(base_url: &str) -> SessionConfig {
    SessionConfig::default().with_base_url(base_url)
}

fn arranged(config: SessionConfig) -> SeatAssignmentEngine {
    let mut engine = SeatAssignmentEngine::new(config);
    engine.upload_roster(roster(3)).unwrap();
    engine.select_rect(pos(0, 0), pos(1, 1)).unwrap();
    engine.confirm_seats().unwrap();
    engine
}

#[tokio::test]
async fn test_generate_round_trip_through_engine() {
    let base = serve(Router::new().route("/generate", post(reverse_layout))).await;
    let config = config(&base);
    let generator = HttpLayoutGenerator::new(&config.service).unwrap();
    assert_eq!(generator.url(), format!("{base}/generate"));
    let mut engine = arranged(config);

    engine.request_layout(&generator).await.unwrap();

    assert_eq!(engine.generation_status(), GenerationStatus::Success);
    assert_eq!(
        engine.seat_map().position_of(&StudentId::from(1u64)),
        Some(pos(1, 1))
    );
    assert_eq!(engine.missing_count(), 0);
}

#[tokio::test]
async fn test_remote_error_message_is_surfaced() {
    let base = serve(Router::new().route("/generate", post(no_layout))).await;
    let config = config(&base);
    let generator = HttpLayoutGenerator::new(&config.service).unwrap();
    let mut engine = arranged(config);

    let err = engine.request_layout(&generator).await.unwrap_err();

    assert!(matches!(err, EngineError::GenerationRequestFailed(_)));
    assert_eq!(engine.generation_status(), GenerationStatus::Failed);
    assert_eq!(
        engine.status_message(),
        Some("Service returned 422: no feasible layout")
    );
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let router = Router::new().route(
        "/generate",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let base = serve(router).await;
    let generator = HttpLayoutGenerator::new(&config(&base).service).unwrap();

    let err = generator.generate(&empty_request()).await.unwrap_err();

    let ClientError::Remote { status, message } = err else {
        panic!("expected a remote error");
    };
    assert_eq!(status, 502);
    assert_eq!(message, "upstream down");
}

#[tokio::test]
async fn test_undecodable_layout() {
    let router = Router::new().route("/generate", post(|| async { "not json" }));
    let base = serve(router).await;
    let generator = HttpLayoutGenerator::new(&config(&base).service).unwrap();

    let err = generator.generate(&empty_request()).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_timeout() {
    let router = Router::new().route(
        "/generate",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!([]))
        }),
    );
    let base = serve(router).await;
    let config = config(&base).with_timeout_seconds(1);
    let generator = HttpLayoutGenerator::new(&config.service).unwrap();

    let err = generator.generate(&empty_request()).await.unwrap_err();
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_export_returns_named_document() {
    let base = serve(Router::new().route("/export_pdf", post(render))).await;
    let config = config(&base);
    let exporter = HttpChartExporter::new(&config.service, &config.export).unwrap();
    let engine = arranged(config);

    let chart = engine.export_current_assignment(&exporter).await.unwrap();

    assert_eq!(chart.file_name, "seating-chart.pdf");
    assert_eq!(chart.content_type.as_deref(), Some("application/pdf"));
    assert_eq!(chart.bytes, b"%PDF students=3".to_vec());
}

#[tokio::test]
async fn test_export_failure() {
    let router = Router::new().route(
        "/export_pdf",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "font missing"})),
            )
        }),
    );
    let base = serve(router).await;
    let config = config(&base);
    let exporter = HttpChartExporter::new(&config.service, &config.export).unwrap();
    let engine = arranged(config);

    let err = exporter
        .export(&engine.export_request().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::Remote { status: 500, ref message } if message == "font missing"
    ));

    let err = engine.export_current_assignment(&exporter).await.unwrap_err();
    assert!(matches!(err, EngineError::ExportRequestFailed(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let generator =
        HttpLayoutGenerator::new(&config(&format!("http://{addr}")).service).unwrap();

    let err = generator.generate(&empty_request()).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
