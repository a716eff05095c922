use std::rc::Rc;

use futures::future::abortable;
use serde::de::DeserializeOwned;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::fetch::{FetchError, FetchHandle, FetchOptions};
use crate::platform;

/// Fetch hook return type
pub struct UseFetchReturn<T> {
    pub data: Option<T>,
    pub error: Option<FetchError>,
    pub pending: bool,
    pub refresh: Callback<()>,
    /// The underlying handle, for awaiting or subscribing outside of render.
    pub handle: Rc<FetchHandle<T>>,
}

impl<T: Clone> UseFetchReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - pending: "loading {context}..."
    /// - failed: "error loading {context}: ..."
    /// - settled without a body: "no {context} found"
    /// - otherwise `render_fn` with the data
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T) -> Html,
    {
        if self.pending {
            return html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("loading {}...", context)}
                    </p>
                </div>
            };
        }

        match (&self.data, &self.error) {
            (_, Some(error)) => html! {
                <div class="p-4 rounded-md bg-red-50 \
                           dark:bg-red-900/20 border \
                           border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!("error loading {}: {}", context, error)}
                    </p>
                </div>
            },
            (Some(data), None) => render_fn(data),
            (None, None) => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("no {} found", context)}
                    </p>
                </div>
            },
        }
    }
}

/// Fetch `url` when the component mounts and whenever `url` changes.
///
/// Relative URLs are resolved against the configured backend. `options` is
/// only read when a new request handle is created, i.e. on mount and on
/// `url` changes. The component re-renders on every state change.
///
/// # Example
///
/// ```rust,ignore
/// #[function_component]
/// fn Feed() -> Html {
///     let toaster = use_toast();
///     let posts = use_fetch::<Vec<Post>>(
///         "/api/posts",
///         FetchOptions::new().on_error(move |_| toaster.notify(Message::error())),
///     );
///     posts.render("posts", |posts| html! { <PostList posts={posts.clone()} /> })
/// }
/// ```
#[hook]
pub fn use_fetch<T>(url: &str, options: FetchOptions<T>) -> UseFetchReturn<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let handle = use_memo(url.to_string(), move |url| {
        let target = AppConfig::from_env().resolve_url(url).unwrap_or_else(|e| {
            tracing::warn!(url = %url, "could not resolve fetch url: {e}");
            url.clone()
        });
        FetchHandle::new(Rc::new(crate::http_client()), target, options)
    });

    // Re-render whenever the handle's state changes
    let trigger = use_force_update();
    use_effect_with(handle.clone(), move |handle| {
        let mut receiver = handle.subscribe();
        let (watcher, abort) = abortable(async move {
            while receiver.changed().await.is_ok() {
                trigger.force_update();
            }
        });
        platform::spawn_local(async move {
            let _ = watcher.await;
        });

        move || abort.abort()
    });

    let state = handle.state();
    let refresh = {
        let handle = handle.clone();
        Callback::from(move |_| handle.refresh())
    };

    UseFetchReturn {
        data: state.data,
        error: state.error,
        pending: state.pending,
        refresh,
        handle,
    }
}
