use futures::future::LocalBoxFuture;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderMap};
use reqwest::{Method, StatusCode};

use super::FetchCause;

/// A fully described HTTP request, ready to hand to a [`Transport`].
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub url: String,
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Status, headers and the raw body bytes of a response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Whether the body should be parsed as JSON.
    ///
    /// Requires both a non-zero `Content-Length` and a `Content-Type` of
    /// exactly `application/json`; parameters such as `charset` disqualify
    /// the body. Chunked responses carry no `Content-Length` and are never
    /// parsed.
    pub fn has_json_body(&self) -> bool {
        let content_length = self
            .headers
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(0);

        let is_json = self
            .headers
            .get(CONTENT_TYPE)
            .is_some_and(|value| value == "application/json");

        content_length != 0 && is_json
    }
}

/// The HTTP boundary of the fetch hook.
///
/// Everything below this trait (redirects, TLS, connection reuse) belongs to
/// the implementation.
pub trait Transport {
    fn send(
        &self,
        request: FetchRequest,
    ) -> LocalBoxFuture<'static, Result<RawResponse, FetchCause>>;
}

impl Transport for reqwest::Client {
    fn send(
        &self,
        request: FetchRequest,
    ) -> LocalBoxFuture<'static, Result<RawResponse, FetchCause>> {
        let FetchRequest {
            url,
            method,
            headers,
            body,
        } = request;

        let builder = self.request(method, url).headers(headers);
        let builder = match body {
            Some(body) => builder.body(body),
            None => builder,
        };

        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();

        Box::pin(async move {
            let response = builder.send().await.map_err(transport_error)?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await.map_err(transport_error)?;

            Ok(RawResponse::new(status, headers, body.to_vec()))
        })
    }
}

fn transport_error(e: reqwest::Error) -> FetchCause {
    FetchCause::Transport(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn response(headers: &[(&'static str, &'static str)]) -> RawResponse {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        RawResponse::new(StatusCode::OK, map, b"{}".to_vec())
    }

    #[test]
    fn json_body_needs_length_and_type() {
        assert!(
            response(&[
                ("content-length", "2"),
                ("content-type", "application/json")
            ])
            .has_json_body()
        );

        assert!(
            !response(&[("content-type", "application/json")]).has_json_body()
        );
        assert!(
            !response(&[
                ("content-length", "0"),
                ("content-type", "application/json")
            ])
            .has_json_body()
        );
        assert!(
            !response(&[
                ("content-length", "2"),
                ("content-type", "text/plain")
            ])
            .has_json_body()
        );
        assert!(!response(&[("content-length", "2")]).has_json_body());
    }

    #[test]
    fn content_type_must_match_exactly() {
        for content_type in [
            "application/json; charset=utf-8",
            "Application/JSON",
            "application/json ",
            "application/problem+json",
        ] {
            assert!(
                !response(&[
                    ("content-length", "2"),
                    ("content-type", content_type)
                ])
                .has_json_body(),
                "{content_type}"
            );
        }
    }
}
