use std::time::Duration;

use futures::future::{AbortHandle, abortable};
use yew::prelude::*;
use yewdux::{Context, Dispatch, Store, use_dispatch};

use crate::platform;

/// How long a toast stays up unless it is replaced or dismissed.
pub const DISMISS_AFTER: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub heading: String,
    pub paragraph: String,
}

impl Message {
    pub fn new(heading: impl Into<String>, paragraph: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            paragraph: paragraph.into(),
        }
    }

    /// Generic failure notice.
    pub fn error() -> Self {
        Self::new("there has been an error!", "please try again.")
    }

    pub fn welcome(username: &str) -> Self {
        Self::new(format!("welcome back, {username}!"), "have a good time!")
    }
}

/// The single toast slot.
///
/// Holds the abort handle of the pending dismissal so that at most one timer
/// is outstanding per context.
#[derive(Debug, Clone, Default, Store)]
pub struct ToastState {
    message: Option<Message>,
    dismissal: Option<AbortHandle>,
    generation: u64,
}

impl PartialEq for ToastState {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.generation == other.generation
    }
}

impl ToastState {
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }
}

/// Shows toasts in the slot of one yewdux context.
#[derive(Clone)]
pub struct Toaster {
    dispatch: Dispatch<ToastState>,
}

impl Toaster {
    pub fn new(cx: &Context) -> Self {
        Self {
            dispatch: Dispatch::new(cx),
        }
    }

    pub fn from_dispatch(dispatch: Dispatch<ToastState>) -> Self {
        Self { dispatch }
    }

    /// Replace the current toast and restart the dismissal timer.
    pub fn notify(&self, message: Message) {
        tracing::debug!(heading = %message.heading, "showing toast");

        let (dismissal, handle) = abortable({
            let dispatch = self.dispatch.clone();
            async move {
                platform::sleep(DISMISS_AFTER).await;
                dispatch.reduce_mut(|state| {
                    state.message = None;
                    state.dismissal = None;
                });
            }
        });

        let current = self.dispatch.get();
        if let Some(previous) = &current.dismissal {
            previous.abort();
        }
        self.dispatch.set(ToastState {
            message: Some(message),
            dismissal: Some(handle),
            generation: current.generation + 1,
        });

        platform::spawn_local(async move {
            // Err(Aborted) when superseded
            let _ = dismissal.await;
        });
    }

    /// Clear the slot now and cancel the pending dismissal.
    pub fn dismiss(&self) {
        self.dispatch.reduce_mut(|state| {
            if let Some(timer) = state.dismissal.take() {
                timer.abort();
            }
            state.message = None;
        });
    }

    pub fn current(&self) -> Option<Message> {
        self.dispatch.get().message.clone()
    }
}

#[hook]
pub fn use_toast() -> Toaster {
    Toaster::from_dispatch(use_dispatch::<ToastState>())
}
