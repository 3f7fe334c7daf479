/*
[INPUT]:  Test configuration and canned exchange responses
[OUTPUT]: Shared test utilities, fixtures, and a fake transport backend
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for okcoin-adapter tests

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use md5::{Digest, Md5};
use okcoin_adapter::{HttpRequest, HttpResponse, HttpTransport, OkcoinClient, Result};
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use url::form_urlencoded;

pub const API_KEY: &str = "foo";
pub const API_SECRET: &str = "$B4r^";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Ticker,
    LastTrades,
    CandleStick,
    Funds,
}

/// Serves files from `tests/testdata` the way the exchange would, and
/// verifies signed requests against a table of known secrets.
#[derive(Debug, Clone)]
pub struct FakeBackend {
    route: Route,
    calls: Arc<AtomicUsize>,
    known_secrets: HashMap<String, String>,
}

impl FakeBackend {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            calls: Arc::new(AtomicUsize::new(0)),
            known_secrets: HashMap::from([(API_KEY.to_string(), API_SECRET.to_string())]),
        }
    }

    /// Shared counter of requests that reached the backend
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    fn ticker(&self, request: &HttpRequest) -> HttpResponse {
        if request.method != Method::GET {
            return respond(StatusCode::METHOD_NOT_ALLOWED, "want GET");
        }
        if !request.url.path().ends_with("/api/v1/ticker.do") {
            return respond(StatusCode::BAD_REQUEST, "unexpected path");
        }
        let query = query_of(request);
        respond_with_file(&format!("ticker-{}.json", param(&query, "symbol")))
    }

    fn last_trades(&self, request: &HttpRequest) -> HttpResponse {
        if request.method != Method::GET {
            return respond(StatusCode::METHOD_NOT_ALLOWED, "want GET");
        }
        if !request.url.path().ends_with("/api/v1/trades.do") {
            return respond(StatusCode::BAD_REQUEST, "unexpected path");
        }
        let query = query_of(request);
        if param(&query, "since").parse::<u64>().is_err() {
            return respond(StatusCode::BAD_REQUEST, "\"since\" must be a non-negative id");
        }
        respond_with_file(&format!("trades-{}.json", param(&query, "symbol")))
    }

    fn candlestick(&self, request: &HttpRequest) -> HttpResponse {
        if request.method != Method::GET {
            return respond(StatusCode::METHOD_NOT_ALLOWED, "want GET");
        }
        if !request.url.path().ends_with("/api/v1/kline.do") {
            return respond(StatusCode::BAD_REQUEST, "unexpected path");
        }
        let query = query_of(request);
        match param(&query, "since").parse::<f64>() {
            Ok(since) if since >= 0.0 => {}
            _ => return respond(StatusCode::BAD_REQUEST, "\"since\" must be at least 0"),
        }
        if param(&query, "type").is_empty() {
            return respond(StatusCode::BAD_REQUEST, "expecting \"type\"");
        }
        respond_with_file(&format!("candlestick-{}.json", param(&query, "symbol")))
    }

    fn funds(&self, request: &HttpRequest) -> HttpResponse {
        if request.method != Method::POST {
            return respond(StatusCode::METHOD_NOT_ALLOWED, "want POST");
        }
        let mut query = query_of(request);
        let api_key = param(&query, "api_key").to_string();
        if api_key.is_empty() {
            return respond(StatusCode::BAD_REQUEST, "expecting \"api_key\" in query string");
        }
        let got_signature = query.remove("sign").unwrap_or_default();
        if got_signature != got_signature.to_uppercase() {
            return respond(StatusCode::BAD_REQUEST, "\"sign\" must be an all uppercase string");
        }
        let Some(secret) = self.known_secrets.get(&api_key) else {
            return respond(StatusCode::UNAUTHORIZED, "unknown API secret");
        };

        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.iter())
            .finish();
        let digest = Md5::digest(format!("{encoded}&secret_key={secret}").as_bytes());
        if hex::encode_upper(digest) != got_signature {
            return respond(StatusCode::BAD_REQUEST, "signatures do not match");
        }
        respond_with_file("funds1.json")
    }
}

#[async_trait]
impl HttpTransport for FakeBackend {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(match self.route {
            Route::Ticker => self.ticker(&request),
            Route::LastTrades => self.last_trades(&request),
            Route::CandleStick => self.candlestick(&request),
            Route::Funds => self.funds(&request),
        })
    }
}

/// Client wired to a fake backend for `route`, plus the backend's call counter
pub fn client_with_backend(route: Route) -> (OkcoinClient, Arc<AtomicUsize>) {
    let client = OkcoinClient::new().expect("client init");
    let backend = FakeBackend::new(route);
    let calls = backend.calls();
    client.set_transport(backend);
    (client, calls)
}

pub fn testdata_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}

pub fn read_testdata(name: &str) -> Vec<u8> {
    std::fs::read(testdata_path(name)).expect("testdata file")
}

fn query_of(request: &HttpRequest) -> BTreeMap<String, String> {
    request
        .url
        .query_pairs()
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect()
}

fn param<'a>(query: &'a BTreeMap<String, String>, name: &str) -> &'a str {
    query.get(name).map(String::as_str).unwrap_or_default()
}

fn respond(status: StatusCode, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        headers: HeaderMap::new(),
        body: body.as_bytes().to_vec(),
    }
}

fn respond_with_file(name: &str) -> HttpResponse {
    match std::fs::read(testdata_path(name)) {
        Ok(body) => HttpResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body,
        },
        Err(err) => respond(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
    }
}
