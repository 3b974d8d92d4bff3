// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use buckcast::{MoonCache, ScoringPolicy};
use buckcast_api::{
    ApiError, ForecastWindow, LoadMoonResponse, OddsRequest, OddsResponse, PlanRequest,
    PlanResponse, RequestContext, build_plan, calculate_odds, get_moon_record, load_moon_records,
    moon_not_cached,
};
use buckcast_domain::{DailyWeather, MoonRecord};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Buckcast Server - deer activity odds and hunt planning over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Scoring policy used when a request does not name one (additive or weighted)
    #[arg(long, default_value = "additive")]
    policy: String,

    /// How many days ahead the weather provider forecasts
    #[arg(long, default_value_t = buckcast_api::DEFAULT_FORECAST_DAYS)]
    forecast_days: u16,
}

/// Application state shared across handlers.
///
/// The moon cache is the only mutable state; everything else is fixed at
/// startup.
#[derive(Clone)]
struct AppState {
    /// Moon records uploaded by clients.
    moon_cache: Arc<Mutex<MoonCache>>,
    /// Policy used when a request does not name one.
    default_policy: ScoringPolicy,
    /// Dates that can be scored, relative to today.
    window: ForecastWindow,
    /// Source of the current date.
    today: fn() -> Date,
}

impl AppState {
    fn request_context(&self) -> RequestContext {
        RequestContext {
            default_policy: self.default_policy,
            window: self.window,
            today: (self.today)(),
        }
    }
}

/// API request for scoring a sit.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct OddsApiRequest {
    /// The hunt date (`YYYY-MM-DD`).
    date: String,
    /// morning, midday, evening, or allDay.
    time_of_day: String,
    /// pinesClearcuts, hardwoods, agEdges, or mixed.
    terrain: String,
    /// low, medium, or high.
    hunting_pressure: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    /// additive or weighted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    policy: Option<String>,
    /// Overrides the calendar rut phase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rut_phase: Option<String>,
    /// Daily forecast records covering the hunt date.
    #[serde(default)]
    weather: Vec<DailyWeather>,
}

/// API request for planning several days.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct PlanApiRequest {
    /// First day of the plan (`YYYY-MM-DD`).
    start_date: String,
    /// Number of days to plan (1-7, default 7).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    days: Option<u8>,
    terrain: String,
    hunting_pressure: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    policy: Option<String>,
    #[serde(default)]
    weather: Vec<DailyWeather>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::WeatherUnavailable { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Malformed or mistyped JSON bodies are the caller's fault.
impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(status = %rejection.status(), "Rejected request body");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl From<OddsApiRequest> for OddsRequest {
    fn from(req: OddsApiRequest) -> Self {
        Self {
            date: req.date,
            time_of_day: req.time_of_day,
            terrain: req.terrain,
            hunting_pressure: req.hunting_pressure,
            latitude: req.latitude,
            longitude: req.longitude,
            policy: req.policy,
            rut_phase: req.rut_phase,
            weather: req.weather,
        }
    }
}

impl From<PlanApiRequest> for PlanRequest {
    fn from(req: PlanApiRequest) -> Self {
        Self {
            start_date: req.start_date,
            days: req.days,
            terrain: req.terrain,
            hunting_pressure: req.hunting_pressure,
            latitude: req.latitude,
            longitude: req.longitude,
            policy: req.policy,
            weather: req.weather,
        }
    }
}

fn current_date() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Handler for POST `/odds` endpoint.
///
/// Scores a single sit from the supplied forecast.
async fn handle_odds(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<OddsApiRequest>, JsonRejection>,
) -> Result<Json<OddsResponse>, HttpError> {
    let Json(req) = payload?;
    info!(
        date = %req.date,
        time_of_day = %req.time_of_day,
        terrain = %req.terrain,
        records = req.weather.len(),
        "Handling odds request"
    );

    let context: RequestContext = app_state.request_context();
    let request: OddsRequest = req.into();

    let moon_cache = app_state.moon_cache.lock().await;
    let response: OddsResponse = calculate_odds(&request, &context, &moon_cache)?;
    drop(moon_cache);

    Ok(Json(response))
}

/// Handler for POST `/plan` endpoint.
///
/// Plans up to a week of sits.
async fn handle_plan(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<PlanApiRequest>, JsonRejection>,
) -> Result<Json<PlanResponse>, HttpError> {
    let Json(req) = payload?;
    info!(
        start_date = %req.start_date,
        days = ?req.days,
        records = req.weather.len(),
        "Handling plan request"
    );

    let context: RequestContext = app_state.request_context();
    let request: PlanRequest = req.into();

    let moon_cache = app_state.moon_cache.lock().await;
    let response: PlanResponse = build_plan(&request, &context, &moon_cache)?;
    drop(moon_cache);

    Ok(Json(response))
}

/// Handler for POST `/moon` endpoint.
///
/// Caches uploaded moon records.
async fn handle_load_moon(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<Vec<MoonRecord>>, JsonRejection>,
) -> Result<Json<LoadMoonResponse>, HttpError> {
    let Json(records) = payload?;
    let mut moon_cache = app_state.moon_cache.lock().await;
    let response: LoadMoonResponse = load_moon_records(&mut moon_cache, records);
    drop(moon_cache);

    info!(
        received = response.received,
        cached = response.cached,
        "Cached moon records"
    );
    Ok(Json(response))
}

/// Handler for GET `/moon/{date}` endpoint.
async fn handle_get_moon(
    AxumState(app_state): AxumState<AppState>,
    Path(date): Path<String>,
) -> Result<Json<MoonRecord>, HttpError> {
    let mut moon_cache = app_state.moon_cache.lock().await;
    let record: MoonRecord = get_moon_record(&mut moon_cache, &date, moon_not_cached)?;
    drop(moon_cache);

    Ok(Json(record))
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/odds", post(handle_odds))
        .route("/plan", post(handle_plan))
        .route("/moon", post(handle_load_moon))
        .route("/moon/{date}", get(handle_get_moon))
        .route("/health", get(handle_health))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Buckcast Server");

    let default_policy: ScoringPolicy = ScoringPolicy::parse(&args.policy)?;
    let window: ForecastWindow = ForecastWindow::new(args.forecast_days, 0);
    info!(
        policy = %default_policy,
        forecast_days = args.forecast_days,
        "Scoring configuration"
    );

    let app_state: AppState = AppState {
        moon_cache: Arc::new(Mutex::new(MoonCache::new())),
        default_policy,
        window,
        today: current_date,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use serde_json::Value;
    use time::macros::date;
    use tower::ServiceExt;

    /// Helper to create test app state pinned to a fixed date.
    fn create_test_app_state(default_policy: ScoringPolicy) -> AppState {
        AppState {
            moon_cache: Arc::new(Mutex::new(MoonCache::new())),
            default_policy,
            window: ForecastWindow::default(),
            today: || date!(2025 - 10 - 28),
        }
    }

    fn create_test_weather(date: Date, temp_max_f: f64, precipitation_in: f64) -> DailyWeather {
        DailyWeather {
            date,
            temp_max_f,
            temp_min_f: temp_max_f - 20.0,
            precipitation_in,
            wind_max_mph: 6.0,
            wind_direction_deg: None,
            pressure_hpa: Some(1020.0),
            sunrise: None,
            sunset: None,
        }
    }

    /// Helper to create a peak-rut odds request with a cold front behind it.
    fn create_test_odds_request() -> OddsApiRequest {
        OddsApiRequest {
            date: String::from("2025-11-01"),
            time_of_day: String::from("morning"),
            terrain: String::from("pinesClearcuts"),
            hunting_pressure: String::from("medium"),
            latitude: Some(33.2),
            longitude: Some(-82.8),
            policy: None,
            rut_phase: None,
            weather: vec![
                create_test_weather(date!(2025 - 10 - 31), 74.0, 0.45),
                create_test_weather(date!(2025 - 11 - 01), 58.0, 0.0),
            ],
        }
    }

    fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app: Router = build_router(create_test_app_state(ScoringPolicy::Additive));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_odds_succeeds() {
        let app: Router = build_router(create_test_app_state(ScoringPolicy::Additive));
        let req_body: OddsApiRequest = create_test_odds_request();

        let response = app
            .oneshot(json_request(
                "POST",
                "/odds",
                serde_json::to_string(&req_body).unwrap(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: Value = body_json(response).await;
        assert_eq!(body["date"], "2025-11-01");
        assert_eq!(body["rut_phase"], "rut");
        assert_eq!(body["score"], 88);
        assert_eq!(body["chance_percent"], 88);
        assert_eq!(body["classification"], "High");
        assert_eq!(body["flags"]["cold_front"], true);
        assert!(body["breakdown"].as_array().unwrap().len() >= 5);
    }

    #[tokio::test]
    async fn test_odds_uses_server_default_policy() {
        let app: Router = build_router(create_test_app_state(ScoringPolicy::Weighted));
        let req_body: OddsApiRequest = create_test_odds_request();

        let response = app
            .oneshot(json_request(
                "POST",
                "/odds",
                serde_json::to_string(&req_body).unwrap(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: Value = body_json(response).await;
        assert_eq!(body["policy"], "weighted");
        assert!(body["chance_percent"].is_null());
    }

    #[tokio::test]
    async fn test_invalid_terrain_returns_bad_request() {
        let app: Router = build_router(create_test_app_state(ScoringPolicy::Additive));
        let mut req_body: OddsApiRequest = create_test_odds_request();
        req_body.terrain = String::from("swamp");

        let response = app
            .oneshot(json_request(
                "POST",
                "/odds",
                serde_json::to_string(&req_body).unwrap(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert!(error_response.error);
        assert!(error_response.message.contains("terrain"));
    }

    #[tokio::test]
    async fn test_date_outside_forecast_returns_unprocessable() {
        let app: Router = build_router(create_test_app_state(ScoringPolicy::Additive));
        let mut req_body: OddsApiRequest = create_test_odds_request();
        req_body.date = String::from("2025-12-15");

        let response = app
            .oneshot(json_request(
                "POST",
                "/odds",
                serde_json::to_string(&req_body).unwrap(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = body_json(response).await;
        assert_eq!(body["error"], true);
    }

    #[tokio::test]
    async fn test_plan_succeeds() {
        let app: Router = build_router(create_test_app_state(ScoringPolicy::Additive));
        let req_body: PlanApiRequest = PlanApiRequest {
            start_date: String::from("2025-11-01"),
            days: Some(2),
            terrain: String::from("agEdges"),
            hunting_pressure: String::from("high"),
            latitude: Some(33.2),
            longitude: Some(-82.8),
            policy: None,
            weather: vec![
                create_test_weather(date!(2025 - 11 - 01), 58.0, 0.0),
                create_test_weather(date!(2025 - 11 - 02), 55.0, 0.0),
            ],
        };

        let response = app
            .oneshot(json_request(
                "POST",
                "/plan",
                serde_json::to_string(&req_body).unwrap(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: Value = body_json(response).await;
        assert_eq!(body["days"].as_array().unwrap().len(), 2);
        assert_eq!(body["best_day"], "2025-11-01");
        assert_eq!(body["days"][0]["best_slot"], "morning");
    }

    #[tokio::test]
    async fn test_moon_round_trip_through_cache() {
        let app_state: AppState = create_test_app_state(ScoringPolicy::Additive);
        let app: Router = build_router(app_state.clone());
        let records: Vec<MoonRecord> = vec![MoonRecord::new(
            date!(2025 - 11 - 05),
            "Full Moon",
            99.0,
        )];

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/moon",
                serde_json::to_string(&records).unwrap(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(body_json(response).await["cached"], 1);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/moon/2025-11-05")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(body_json(response).await["phase_name"], "Full Moon");
        assert_eq!(app_state.moon_cache.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_uncached_moon_returns_not_found() {
        let app: Router = build_router(create_test_app_state(ScoringPolicy::Additive));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/moon/2025-11-05")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_mistyped_odds_body_is_bad_request_json() {
        let app: Router = build_router(create_test_app_state(ScoringPolicy::Additive));
        let mut req_body: Value = serde_json::to_value(create_test_odds_request()).unwrap();
        req_body["latitude"] = Value::from("abc");

        let response = app
            .oneshot(json_request("POST", "/odds", req_body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        let body: Value = body_json(response).await;
        assert_eq!(body["error"], true);
        assert!(body["message"].as_str().unwrap().contains("latitude"));
    }

    #[tokio::test]
    async fn test_malformed_plan_body_is_bad_request_json() {
        let app: Router = build_router(create_test_app_state(ScoringPolicy::Additive));

        let response = app
            .oneshot(json_request("POST", "/plan", String::from("{not json")))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], true);
    }

    #[tokio::test]
    async fn test_non_array_moon_body_is_bad_request_json() {
        let app: Router = build_router(create_test_app_state(ScoringPolicy::Additive));

        let response = app
            .oneshot(json_request("POST", "/moon", String::from("{\"date\": 5}")))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], true);
    }
}
