//! HTTP serving and the per-endpoint request pipeline.
//!
//! Every request runs the same fixed sequence: method check,
//! authentication, artificial delay, error injection, data generation,
//! query transformation, response encoding, and exactly one log entry on
//! every exit path. Static-file endpoints skip everything between
//! authentication and the file read.

use crate::auth::{self, AuthCheck};
use crate::config::{parse_delay, Config, Endpoint, ErrorRule};
use crate::fault;
use crate::generator::{self, GenerationError, Record};
use crate::logger::{RequestLogEntry, RequestLogger};
use crate::query;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{HeaderName, HeaderValue, Request, Response, StatusCode};
use axum::Router;
use chrono::{SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::HashMap;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

const AUTH_REQUIRED_BODY: &str = r#"{"error":"Authentication required"}"#;
const GENERATION_FAILED_BODY: &str = r#"{"error":"Failed to generate data"}"#;
const NO_ENDPOINT_BODY: &str = r#"{"error":"no matching endpoint"}"#;

/// Transport-independent response produced by the pipeline. Headers apply
/// last-writer-wins when converted to HTTP.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Reply {
    fn new(status: u16) -> Self {
        Reply {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    fn json(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Reply::new(status)
            .header("Content-Type", "application/json")
            .body(body)
    }

    fn text(status: u16, body: &str) -> Self {
        Reply::new(status)
            .header("Content-Type", "text/plain")
            .body(body.as_bytes().to_vec())
    }
}

/// The request fields the pipeline consumes, independent of transport.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub user_agent: String,
    pub remote_addr: String,
}

/// Shared state behind the router: the endpoint table and the log sink,
/// both fixed after startup.
pub struct AppState {
    pub endpoints: HashMap<String, Endpoint>,
    pub logger: RequestLogger,
}

/// Run one request through an endpoint's pipeline and produce the reply.
/// The endpoint is passed explicitly; handlers hold no per-route state.
pub async fn handle_request(
    endpoint: &Endpoint,
    request: &RequestContext,
    logger: &RequestLogger,
    rng: &mut impl Rng,
) -> Reply {
    let started = Instant::now();

    // Static files bypass everything except authentication.
    if !endpoint.file.is_empty() {
        return serve_file(endpoint, request, logger, started).await;
    }

    if request.method != endpoint.method {
        let reply = Reply::text(405, "Method Not Allowed");
        log_request(logger, request, &reply, started, None);
        return reply;
    }

    let check = auth::authenticate(request.authorization.as_deref(), endpoint.auth.as_ref());
    if !check.ok {
        let reply = Reply::json(401, AUTH_REQUIRED_BODY);
        log_request(logger, request, &reply, started, Some(&check));
        return reply;
    }

    if let Some(delay) = parse_delay(&endpoint.delay) {
        debug!(path = %endpoint.path, ?delay, "applying configured delay");
        tokio::time::sleep(delay).await;
    }

    if let Some(rule) = fault::evaluate(&endpoint.errors, rng) {
        let reply = injected_reply(rule);
        log_request(logger, request, &reply, started, Some(&check));
        return reply;
    }

    let params = query::parse_query(&request.query);
    let count = effective_count(endpoint, &params);

    let records = generator::generate(&endpoint.data, count, rng);
    let total = records.len();
    let records = query::transform(records, &params);

    let mut reply = match build_payload(endpoint, &params, records, total) {
        Ok(body) => Reply::new(endpoint.status).body(body),
        Err(error) => {
            warn!(path = %endpoint.path, %error, "failed to encode generated data");
            Reply::new(500).body(GENERATION_FAILED_BODY)
        }
    };
    for (name, value) in &endpoint.headers {
        reply = reply.header(name, value);
    }
    reply = reply.header("Content-Type", "application/json");

    log_request(logger, request, &reply, started, Some(&check));
    reply
}

async fn serve_file(
    endpoint: &Endpoint,
    request: &RequestContext,
    logger: &RequestLogger,
    started: Instant,
) -> Reply {
    let check = auth::authenticate(request.authorization.as_deref(), endpoint.auth.as_ref());
    if !check.ok {
        let reply = Reply::json(401, AUTH_REQUIRED_BODY);
        log_request(logger, request, &reply, started, Some(&check));
        return reply;
    }

    let reply = match tokio::fs::read(&endpoint.file).await {
        Ok(bytes) => Reply::new(200)
            .header("Content-Type", content_type_for(&endpoint.file))
            .body(bytes),
        Err(error) => {
            warn!(path = %endpoint.path, file = %endpoint.file, %error, "failed to read file");
            Reply::text(404, "File not found")
        }
    };
    log_request(logger, request, &reply, started, Some(&check));
    reply
}

fn injected_reply(rule: &ErrorRule) -> Reply {
    if rule.message.is_empty() {
        return Reply::new(rule.status);
    }
    let body =
        serde_json::to_vec(&serde_json::json!({ "error": rule.message })).unwrap_or_default();
    Reply::json(rule.status, body)
}

/// Records to generate: `count` query param, else `limit`, else the
/// endpoint default.
fn effective_count(endpoint: &Endpoint, params: &HashMap<String, String>) -> usize {
    query::positive_param(params, "count")
        .or_else(|| query::positive_param(params, "limit"))
        .unwrap_or(endpoint.count)
}

#[derive(Serialize)]
struct MetaEnvelope {
    data: Vec<Record>,
    meta: Meta,
}

#[derive(Serialize)]
struct Meta {
    count: usize,
    total: usize,
    offset: String,
    limit: String,
    sort: String,
    order: String,
    filter: String,
    status: u16,
}

/// Encode the response body: the transformed records, or with `meta=true`
/// an envelope echoing the raw pagination parameters.
fn build_payload(
    endpoint: &Endpoint,
    params: &HashMap<String, String>,
    records: Vec<Record>,
    total: usize,
) -> Result<Vec<u8>, GenerationError> {
    if params.get("meta").map(String::as_str) != Some("true") {
        return generator::encode(&records);
    }

    let raw = |key: &str| params.get(key).cloned().unwrap_or_default();
    let meta = Meta {
        count: records.len(),
        total,
        offset: raw("offset"),
        limit: raw("limit"),
        sort: raw("sort"),
        order: raw("order"),
        filter: raw("filter"),
        status: endpoint.status,
    };
    generator::encode(&MetaEnvelope {
        data: records,
        meta,
    })
}

fn content_type_for(file: &str) -> &'static str {
    let lower = file.to_lowercase();
    if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".gif") {
        "image/gif"
    } else if lower.ends_with(".mp4") {
        "video/mp4"
    } else {
        "application/octet-stream"
    }
}

fn log_request(
    logger: &RequestLogger,
    request: &RequestContext,
    reply: &Reply,
    started: Instant,
    check: Option<&AuthCheck>,
) {
    let entry = RequestLogEntry {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        method: request.method.clone(),
        path: request.path.clone(),
        query: request.query.clone(),
        status_code: reply.status,
        response_time: format!("{:?}", started.elapsed()),
        user_agent: request.user_agent.clone(),
        remote_addr: request.remote_addr.clone(),
        content_length: reply.body.len(),
        auth_type: check.map(|c| c.auth_type.clone()).unwrap_or_default(),
        auth_result: check.map(|c| c.result.clone()).unwrap_or_default(),
    };
    logger.log(&entry);
}

/// Build the router. Every request lands in the fallback and resolves by
/// exact path lookup; there is no pattern routing.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new().fallback(move |request: Request<Body>| {
        let state = state.clone();
        async move { dispatch(state, request).await }
    })
}

async fn dispatch(state: Arc<AppState>, request: Request<Body>) -> Response<Body> {
    let path = request.uri().path().to_string();
    let endpoint = match state.endpoints.get(&path) {
        Some(endpoint) => endpoint,
        None => {
            debug!(%path, "no endpoint configured");
            return into_response(Reply::json(404, NO_ENDPOINT_BODY));
        }
    };

    let header = |name: &str| {
        request
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    let context = RequestContext {
        method: request.method().as_str().to_string(),
        path,
        query: request.uri().query().unwrap_or_default().to_string(),
        authorization: header("authorization"),
        user_agent: header("user-agent").unwrap_or_default(),
        remote_addr: request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.to_string())
            .unwrap_or_default(),
    };

    let mut rng = StdRng::from_entropy();
    let reply = handle_request(endpoint, &context, &state.logger, &mut rng).await;
    into_response(reply)
}

fn into_response(reply: Reply) -> Response<Body> {
    let mut response = Response::new(Body::from(reply.body));
    *response.status_mut() =
        StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    // Last writer wins, so configured headers behave like Set, and
    // invalid names or values are skipped.
    for (name, value) in &reply.headers {
        let name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(name) => name,
            Err(_) => continue,
        };
        let value = match HeaderValue::from_str(value) {
            Ok(value) => value,
            Err(_) => continue,
        };
        response.headers_mut().insert(name, value);
    }
    response
}

/// One human-readable line per route, plus the logging destination when
/// enabled. Shown by the CLI at startup.
pub fn route_summaries(config: &Config) -> Vec<String> {
    let mut lines = Vec::new();

    for endpoint in &config.endpoints {
        let mut line = format!(
            "[{}] http://localhost:{}{}",
            endpoint.method, config.port, endpoint.path
        );
        if endpoint.status != 200 {
            line.push_str(&format!(" (status: {})", endpoint.status));
        }
        if !endpoint.delay.is_empty() {
            line.push_str(&format!(" (delay: {})", endpoint.delay));
        }
        if !endpoint.errors.is_empty() {
            line.push_str(" (with errors)");
        }
        lines.push(line);
    }

    if config.logging.enabled {
        lines.push(format!(
            "Logging: {} format to {}",
            config.logging.format, config.logging.output
        ));
    }

    lines
}

/// Serve the configured endpoints until `shutdown` resolves, then drain
/// gracefully.
pub async fn serve(
    config: Config,
    logger: RequestLogger,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let endpoints: HashMap<String, Endpoint> = config
        .endpoints
        .iter()
        .map(|endpoint| (endpoint.path.clone(), endpoint.clone()))
        .collect();

    let state = Arc::new(AppState {
        endpoints,
        logger,
    });
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, endpoints = config.endpoints.len(), "mock server listening");

    axum::Server::bind(&addr)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("mock server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthRule, LogConfig};
    use std::io::Write;

    fn test_logger() -> RequestLogger {
        RequestLogger::from_config(&LogConfig::default()).unwrap()
    }

    fn endpoint(path: &str, method: &str) -> Endpoint {
        Endpoint {
            path: path.to_string(),
            method: method.to_string(),
            data: String::new(),
            count: 1,
            file: String::new(),
            status: 200,
            delay: String::new(),
            headers: HashMap::new(),
            errors: Vec::new(),
            auth: None,
        }
    }

    fn request(method: &str, path: &str, query: &str) -> RequestContext {
        RequestContext {
            method: method.to_string(),
            path: path.to_string(),
            query: query.to_string(),
            authorization: None,
            user_agent: "test-client".to_string(),
            remote_addr: "127.0.0.1:9999".to_string(),
        }
    }

    fn body_json(reply: &Reply) -> serde_json::Value {
        serde_json::from_slice(&reply.body).unwrap()
    }

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[tokio::test]
    async fn test_method_mismatch_yields_405() {
        let ep = endpoint("/users", "GET");
        let reply = handle_request(&ep, &request("POST", "/users", ""), &test_logger(), &mut seeded()).await;

        assert_eq!(reply.status, 405);
        assert_eq!(reply.body, b"Method Not Allowed");
        assert!(reply
            .headers
            .contains(&("Content-Type".to_string(), "text/plain".to_string())));
    }

    #[tokio::test]
    async fn test_auth_failure_yields_401() {
        let mut ep = endpoint("/admin", "GET");
        ep.auth = Some(AuthRule {
            kind: "bearer".to_string(),
            token: "secret".to_string(),
            username: String::new(),
            password: String::new(),
        });

        let reply = handle_request(&ep, &request("GET", "/admin", ""), &test_logger(), &mut seeded()).await;
        assert_eq!(reply.status, 401);
        assert_eq!(body_json(&reply)["error"], "Authentication required");
    }

    #[tokio::test]
    async fn test_auth_success_reaches_data() {
        let mut ep = endpoint("/admin", "GET");
        ep.auth = Some(AuthRule {
            kind: "bearer".to_string(),
            token: "secret".to_string(),
            username: String::new(),
            password: String::new(),
        });

        let mut ctx = request("GET", "/admin", "");
        ctx.authorization = Some("Bearer secret".to_string());

        let reply = handle_request(&ep, &ctx, &test_logger(), &mut seeded()).await;
        assert_eq!(reply.status, 200);
        assert!(body_json(&reply).is_array());
    }

    #[tokio::test]
    async fn test_injected_error_with_message() {
        let mut ep = endpoint("/flaky", "GET");
        ep.errors = vec![ErrorRule {
            probability: 1.0,
            status: 503,
            message: "Service unavailable".to_string(),
        }];

        let reply = handle_request(&ep, &request("GET", "/flaky", ""), &test_logger(), &mut seeded()).await;
        assert_eq!(reply.status, 503);
        assert_eq!(body_json(&reply)["error"], "Service unavailable");
    }

    #[tokio::test]
    async fn test_injected_error_without_message_has_empty_body() {
        let mut ep = endpoint("/flaky", "GET");
        ep.errors = vec![ErrorRule {
            probability: 1.0,
            status: 500,
            message: String::new(),
        }];

        let reply = handle_request(&ep, &request("GET", "/flaky", ""), &test_logger(), &mut seeded()).await;
        assert_eq!(reply.status, 500);
        assert!(reply.body.is_empty());
    }

    #[tokio::test]
    async fn test_zero_probability_never_blocks_data() {
        let mut ep = endpoint("/stable", "GET");
        ep.errors = vec![ErrorRule {
            probability: 0.0,
            status: 500,
            message: String::new(),
        }];

        let mut rng = seeded();
        for _ in 0..20 {
            let reply =
                handle_request(&ep, &request("GET", "/stable", ""), &test_logger(), &mut rng).await;
            assert_eq!(reply.status, 200);
        }
    }

    #[tokio::test]
    async fn test_success_uses_configured_status_and_count() {
        let mut ep = endpoint("/teapots", "GET");
        ep.status = 418;
        ep.count = 3;
        ep.data = r#"{"id": "uuid", "name": "name"}"#.to_string();

        let reply = handle_request(&ep, &request("GET", "/teapots", ""), &test_logger(), &mut seeded()).await;
        assert_eq!(reply.status, 418);

        let body = body_json(&reply);
        assert_eq!(body.as_array().map(Vec::len), Some(3));
        assert!(body[0]["id"].is_string());
    }

    #[tokio::test]
    async fn test_count_param_overrides_endpoint_default() {
        let ep = endpoint("/users", "GET");

        let reply = handle_request(&ep, &request("GET", "/users", "count=4"), &test_logger(), &mut seeded()).await;
        assert_eq!(body_json(&reply).as_array().map(Vec::len), Some(4));

        let reply = handle_request(&ep, &request("GET", "/users", "limit=2"), &test_logger(), &mut seeded()).await;
        assert_eq!(body_json(&reply).as_array().map(Vec::len), Some(2));

        let reply = handle_request(&ep, &request("GET", "/users", "count=3&limit=9"), &test_logger(), &mut seeded()).await;
        assert_eq!(body_json(&reply).as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_custom_headers_applied() {
        let mut ep = endpoint("/users", "GET");
        ep.headers
            .insert("X-Test-Mode".to_string(), "true".to_string());

        let reply = handle_request(&ep, &request("GET", "/users", ""), &test_logger(), &mut seeded()).await;
        assert!(reply
            .headers
            .contains(&("X-Test-Mode".to_string(), "true".to_string())));
        assert_eq!(
            reply.headers.last().map(|(name, _)| name.as_str()),
            Some("Content-Type")
        );
    }

    #[tokio::test]
    async fn test_meta_envelope() {
        let mut ep = endpoint("/users", "GET");
        ep.status = 201;
        ep.count = 5;

        let ctx = request("GET", "/users", "meta=true&limit=2&sort=name");
        let reply = handle_request(&ep, &ctx, &test_logger(), &mut seeded()).await;
        assert_eq!(reply.status, 201);

        let body = body_json(&reply);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["meta"]["count"], 2);
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["meta"]["limit"], "2");
        assert_eq!(body["meta"]["sort"], "name");
        assert_eq!(body["meta"]["order"], "");
        assert_eq!(body["meta"]["status"], 201);
    }

    #[tokio::test]
    async fn test_meta_total_counts_pre_transform_records() {
        let mut ep = endpoint("/users", "GET");
        ep.count = 6;

        let ctx = request("GET", "/users", "meta=true&offset=4");
        let reply = handle_request(&ep, &ctx, &test_logger(), &mut seeded()).await;

        let body = body_json(&reply);
        assert_eq!(body["meta"]["total"], 6);
        assert_eq!(body["meta"]["count"], 2);
        assert_eq!(body["meta"]["offset"], "4");
    }

    #[tokio::test]
    async fn test_static_file_served_with_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("pixel.png");
        let mut file = std::fs::File::create(&file_path).unwrap();
        file.write_all(&[1, 2, 3, 4]).unwrap();

        let mut ep = endpoint("/pixel", "GET");
        ep.file = file_path.to_string_lossy().into_owned();

        let reply = handle_request(&ep, &request("GET", "/pixel", ""), &test_logger(), &mut seeded()).await;
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, [1, 2, 3, 4]);
        assert!(reply
            .headers
            .contains(&("Content-Type".to_string(), "image/png".to_string())));
    }

    #[tokio::test]
    async fn test_static_file_ignores_method() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("blob.bin");
        std::fs::write(&file_path, b"data").unwrap();

        let mut ep = endpoint("/blob", "GET");
        ep.file = file_path.to_string_lossy().into_owned();

        let reply = handle_request(&ep, &request("POST", "/blob", ""), &test_logger(), &mut seeded()).await;
        assert_eq!(reply.status, 200);
    }

    #[tokio::test]
    async fn test_missing_static_file_yields_404() {
        let mut ep = endpoint("/gone", "GET");
        ep.file = "/nonexistent/gone.png".to_string();

        let reply = handle_request(&ep, &request("GET", "/gone", ""), &test_logger(), &mut seeded()).await;
        assert_eq!(reply.status, 404);
        assert_eq!(reply.body, b"File not found");
    }

    #[tokio::test]
    async fn test_static_file_still_requires_auth() {
        let mut ep = endpoint("/secret.png", "GET");
        ep.file = "/nonexistent/secret.png".to_string();
        ep.auth = Some(AuthRule {
            kind: "bearer".to_string(),
            token: "secret".to_string(),
            username: String::new(),
            password: String::new(),
        });

        let reply = handle_request(&ep, &request("GET", "/secret.png", ""), &test_logger(), &mut seeded()).await;
        assert_eq!(reply.status, 401);
    }

    #[tokio::test]
    async fn test_every_exit_path_logs_once() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("requests.log");
        let logger = RequestLogger::from_config(&LogConfig {
            enabled: true,
            format: "plain".to_string(),
            output: log_path.to_string_lossy().into_owned(),
        })
        .unwrap();

        let ep = endpoint("/users", "GET");
        handle_request(&ep, &request("GET", "/users", ""), &logger, &mut seeded()).await;
        handle_request(&ep, &request("POST", "/users", ""), &logger, &mut seeded()).await;

        let contents = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" - 200 - "));
        assert!(lines[1].contains(" - 405 - "));
        // Method rejections happen before auth runs.
        assert!(!lines[1].contains("Auth:"));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_path_yields_404() {
        let state = Arc::new(AppState {
            endpoints: HashMap::new(),
            logger: test_logger(),
        });

        let req = Request::builder()
            .uri("/nothing-here")
            .body(Body::empty())
            .unwrap();
        let response = dispatch(state, req).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dispatch_routes_by_exact_path() {
        let mut endpoints = HashMap::new();
        endpoints.insert("/users".to_string(), endpoint("/users", "GET"));
        let state = Arc::new(AppState {
            endpoints,
            logger: test_logger(),
        });

        let req = Request::builder()
            .uri("/users?count=2")
            .body(Body::empty())
            .unwrap();
        let response = dispatch(state.clone(), req).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").map(|v| v.as_bytes()),
            Some(b"application/json".as_slice())
        );

        // A prefix is not a match.
        let req = Request::builder()
            .uri("/users/42")
            .body(Body::empty())
            .unwrap();
        let response = dispatch(state, req).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_route_summaries_format() {
        let mut config = Config {
            port: 5050,
            endpoints: vec![endpoint("/users", "GET"), endpoint("/flaky", "POST")],
            logging: LogConfig {
                enabled: true,
                format: "json".to_string(),
                output: "stdout".to_string(),
            },
        };
        config.endpoints[1].status = 503;
        config.endpoints[1].delay = "500ms".to_string();
        config.endpoints[1].errors = vec![ErrorRule {
            probability: 0.5,
            status: 500,
            message: String::new(),
        }];

        let lines = route_summaries(&config);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "[GET] http://localhost:5050/users");
        assert_eq!(
            lines[1],
            "[POST] http://localhost:5050/flaky (status: 503) (delay: 500ms) (with errors)"
        );
        assert_eq!(lines[2], "Logging: json format to stdout");
    }

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type_for("photo.JPG"), "image/jpeg");
        assert_eq!(content_type_for("photo.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("icon.png"), "image/png");
        assert_eq!(content_type_for("anim.gif"), "image/gif");
        assert_eq!(content_type_for("clip.mp4"), "video/mp4");
        assert_eq!(content_type_for("data.bin"), "application/octet-stream");
    }
}
