use std::time::Duration;

use anyhow::Context;
use api_test_util::{empty_body, json_body, CreateUserRequest, UpdateUserRequest};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::Local;
use http_body_util::{BodyExt, Full};
use hyper::header::{ACCEPT, CONTENT_TYPE};
use hyper::{Method, Request, StatusCode, Uri};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tokio::time::Instant;

use crate::catalog::Endpoint;
use crate::scenario::Dispatch;
use crate::statistics::{Outcome, Status};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct HttpClient {
    client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        base_url
            .parse::<Uri>()
            .with_context(|| format!("invalid base URL: {base_url}"))?;
        let client = Client::builder(TokioExecutor::new()).build(HttpsConnector::new());
        Ok(Self { client, base_url })
    }

    fn build_request(&self, endpoint: &Endpoint) -> anyhow::Result<Request<Full<Bytes>>> {
        let url = format!("{}{}", self.base_url, endpoint.path);
        let builder = Request::builder().method(endpoint.method.clone()).uri(&url);
        let request = if endpoint.method == Method::POST {
            builder
                .header(CONTENT_TYPE, "application/json")
                .body(json_body(&CreateUserRequest::sample())?)
        } else if endpoint.method == Method::PUT {
            builder
                .header(CONTENT_TYPE, "application/json")
                .body(json_body(&UpdateUserRequest::sample())?)
        } else if endpoint.method == Method::GET {
            builder
                .header(ACCEPT, "application/json")
                .body(empty_body())
        } else {
            builder.body(empty_body())
        };
        request.with_context(|| format!("failed to build {} {url}", endpoint.method))
    }

    async fn send(&self, request: Request<Full<Bytes>>) -> Result<StatusCode, &'static str> {
        let round_trip = async {
            let response = self.client.request(request).await.map_err(classify)?;
            let status = response.status();
            // Drain the body so pooled connections stay reusable and the
            // measured time covers the full response.
            if response.into_body().collect().await.is_err() {
                return Err("body read failed");
            }
            Ok(status)
        };
        match tokio::time::timeout(REQUEST_TIMEOUT, round_trip).await {
            Ok(result) => result,
            Err(_) => Err("timeout"),
        }
    }
}

fn classify(error: hyper_util::client::legacy::Error) -> &'static str {
    if error.is_connect() {
        "connection failed"
    } else {
        "request error"
    }
}

#[async_trait]
impl Dispatch for HttpClient {
    /// Non-2xx responses are completed outcomes; only transport-level
    /// failures map to the failure sentinel. Nothing propagates.
    async fn dispatch(&self, endpoint: &Endpoint) -> Outcome {
        let timestamp = Local::now();
        let url = format!("{}{}", self.base_url, endpoint.path);
        let start = Instant::now();
        let status = match self.build_request(endpoint) {
            Ok(request) => match self.send(request).await {
                Ok(code) => Status::Http(code.as_u16()),
                Err(reason) => Status::Failed(reason),
            },
            Err(_) => Status::Failed("invalid request"),
        };
        Outcome {
            timestamp,
            method: endpoint.method.clone(),
            path: endpoint.path,
            url,
            elapsed: start.elapsed(),
            status,
        }
    }
}
