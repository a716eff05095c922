//! Reactive request/response lifecycle behind the `use_fetch` hook.
//!
//! A [`FetchHandle`] issues one request on construction and one on every
//! [`FetchHandle::refresh`]. Its state is observable through a `watch`
//! channel and the handle can be awaited until the current request settles.

mod transport;

use std::cell::Cell;
use std::future::IntoFuture;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::watch;

use crate::platform;

pub use transport::{FetchRequest, RawResponse, Transport};

/// Underlying cause of a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchCause {
    #[error("bad status code")]
    BadStatus,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not parse response body: {0}")]
    Parse(String),
}

/// A failed fetch. `status_code` is only set for non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct FetchError {
    pub error: FetchCause,
    pub status_code: Option<u16>,
}

impl FetchError {
    fn bad_status(status: u16) -> Self {
        Self {
            error: FetchCause::BadStatus,
            status_code: Some(status),
        }
    }
}

impl From<FetchCause> for FetchError {
    fn from(error: FetchCause) -> Self {
        Self {
            error,
            status_code: None,
        }
    }
}

/// Snapshot of a fetch. `data` and `error` are never both set.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub error: Option<FetchError>,
    pub pending: bool,
}

impl<T> FetchState<T> {
    fn started() -> Self {
        Self {
            data: None,
            error: None,
            pending: true,
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.pending
    }
}

type SuccessCallback<T> = Rc<dyn Fn(Option<&T>)>;
type ErrorCallback = Rc<dyn Fn(&FetchError)>;

/// Everything a fetch can be configured with.
///
/// - `method`: defaults to `GET`
/// - `headers`: sent as-is
/// - `body`: raw request body, see also [`FetchOptions::json_body`]
/// - `on_success`: called once for every 2xx response, with the parsed body
///   or `None` when the response carried no JSON body
/// - `on_error`: called once for every failed request
pub struct FetchOptions<T> {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub on_success: Option<SuccessCallback<T>>,
    pub on_error: Option<ErrorCallback>,
}

impl<T> Default for FetchOptions<T> {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
            on_success: None,
            on_error: None,
        }
    }
}

impl<T> FetchOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `body` as the request body and mark it as JSON.
    pub fn json_body<B: Serialize>(
        self,
        body: &B,
    ) -> Result<Self, serde_json::Error> {
        let bytes = serde_json::to_vec(body)?;
        Ok(self
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(bytes))
    }

    pub fn on_success(
        mut self,
        callback: impl Fn(Option<&T>) + 'static,
    ) -> Self {
        self.on_success = Some(Rc::new(callback));
        self
    }

    pub fn on_error(
        mut self,
        callback: impl Fn(&FetchError) + 'static,
    ) -> Self {
        self.on_error = Some(Rc::new(callback));
        self
    }
}

/// Handle to a fetch and its reactive state.
///
/// Cloning shares the same request and state. Awaiting `&handle` resolves
/// with the settled state of the most recent request; it never fails, so
/// callers check `error` afterwards.
pub struct FetchHandle<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Handles are equal when they share the same request.
impl<T> PartialEq for FetchHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

struct Inner<T> {
    transport: Rc<dyn Transport>,
    request: FetchRequest,
    on_success: Option<SuccessCallback<T>>,
    on_error: Option<ErrorCallback>,
    state: watch::Sender<FetchState<T>>,
    // bumped on every (re)fetch; responses tagged with an older value are
    // dropped
    sequence: Cell<u64>,
}

impl<T> FetchHandle<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    /// Create the handle and immediately issue the first request.
    pub fn new(
        transport: Rc<dyn Transport>,
        url: impl Into<String>,
        options: FetchOptions<T>,
    ) -> Self {
        let FetchOptions {
            method,
            headers,
            body,
            on_success,
            on_error,
        } = options;

        let (state, _) = watch::channel(FetchState::started());
        let handle = Self {
            inner: Rc::new(Inner {
                transport,
                request: FetchRequest {
                    url: url.into(),
                    method,
                    headers,
                    body,
                },
                on_success,
                on_error,
                state,
                sequence: Cell::new(0),
            }),
        };

        handle.refresh();
        handle
    }

    /// Reset the state and issue the request again.
    ///
    /// A request that is still in flight is not cancelled, but its response
    /// will be ignored.
    pub fn refresh(&self) {
        let sequence = self.inner.sequence.get() + 1;
        self.inner.sequence.set(sequence);
        self.inner.state.send_replace(FetchState::started());

        let inner = self.inner.clone();
        tracing::debug!(
            url = %inner.request.url,
            method = %inner.request.method,
            sequence,
            "issuing request"
        );

        platform::spawn_local(async move {
            let outcome = inner.transport.send(inner.request.clone()).await;
            inner.settle(sequence, outcome);
        });
    }
}

impl<T> FetchHandle<T>
where
    T: Clone,
{
    pub fn state(&self) -> FetchState<T> {
        self.inner.state.borrow().clone()
    }

    pub fn data(&self) -> Option<T> {
        self.inner.state.borrow().data.clone()
    }

    pub fn error(&self) -> Option<FetchError> {
        self.inner.state.borrow().error.clone()
    }

    pub fn pending(&self) -> bool {
        self.inner.state.borrow().pending
    }

    pub fn url(&self) -> &str {
        &self.inner.request.url
    }

    /// Receiver that is notified on every state change.
    ///
    /// The current state counts as unseen, so the first `changed()` resolves
    /// at once even if the request settled before subscribing.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        let mut receiver = self.inner.state.subscribe();
        receiver.mark_changed();
        receiver
    }

    /// Wait until the current request has settled.
    pub async fn settled(&self) -> FetchState<T> {
        let mut receiver = self.subscribe();
        match receiver.wait_for(FetchState::is_settled).await {
            Ok(state) => FetchState::clone(&state),
            // the sender lives as long as `self`
            Err(_) => self.state(),
        }
    }
}

impl<'a, T> IntoFuture for &'a FetchHandle<T>
where
    T: Clone + 'a,
{
    type Output = FetchState<T>;
    type IntoFuture = LocalBoxFuture<'a, FetchState<T>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.settled())
    }
}

impl<T> IntoFuture for FetchHandle<T>
where
    T: Clone + 'static,
{
    type Output = FetchState<T>;
    type IntoFuture = LocalBoxFuture<'static, FetchState<T>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.settled().await })
    }
}

impl<T> Inner<T>
where
    T: DeserializeOwned + Clone,
{
    fn is_current(&self, sequence: u64) -> bool {
        self.sequence.get() == sequence
    }

    fn settle(
        &self,
        sequence: u64,
        outcome: Result<RawResponse, FetchCause>,
    ) {
        if !self.is_current(sequence) {
            tracing::debug!(
                url = %self.request.url,
                sequence,
                "dropping response of superseded request"
            );
            return;
        }

        match interpret::<T>(outcome) {
            Ok(Some(data)) => {
                self.state.send_modify(|state| {
                    state.data = Some(data.clone());
                });
                if let Some(on_success) = &self.on_success {
                    on_success(Some(&data));
                }
            }
            Ok(None) => {
                if let Some(on_success) = &self.on_success {
                    on_success(None);
                }
            }
            Err(error) => {
                tracing::warn!(
                    url = %self.request.url,
                    status = ?error.status_code,
                    "fetch failed: {error}"
                );
                self.state.send_modify(|state| {
                    state.error = Some(error.clone());
                });
                if let Some(on_error) = &self.on_error {
                    on_error(&error);
                }
            }
        }

        // a callback may already have started the next request
        if self.is_current(sequence) {
            self.state.send_modify(|state| state.pending = false);
        }
    }
}

/// Turn a transport outcome into parsed data, no data, or an error.
fn interpret<T: DeserializeOwned>(
    outcome: Result<RawResponse, FetchCause>,
) -> Result<Option<T>, FetchError> {
    let response = outcome?;

    if !response.status.is_success() {
        return Err(FetchError::bad_status(response.status.as_u16()));
    }

    if !response.has_json_body() {
        return Ok(None);
    }

    serde_json::from_slice(&response.body)
        .map(Some)
        .map_err(|e| FetchCause::Parse(e.to_string()).into())
}
