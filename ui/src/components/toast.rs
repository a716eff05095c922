use yew::prelude::*;
use yewdux::use_selector;

use crate::contexts::toast::{ToastState, use_toast};

/// The toast slot, pinned to the top right corner.
#[function_component]
pub fn ToastBanner() -> Html {
    let toaster = use_toast();
    let message =
        use_selector(|state: &ToastState| state.message().cloned());

    let Some(message) = message.as_ref() else {
        return html! {};
    };

    let on_close = Callback::from(move |_| toaster.dismiss());

    html! {
        <div class="fixed top-4 right-4 z-50 max-w-sm w-full">
            <div class="relative p-4 rounded-lg border shadow-lg bg-neutral-50 \
                        dark:bg-neutral-800 border-neutral-200 \
                        dark:border-neutral-700 text-neutral-700 \
                        dark:text-neutral-300">
                <div class="flex items-start space-x-3">
                    <div class="flex-1 min-w-0">
                        <p class="text-sm font-semibold leading-5">
                            {&message.heading}
                        </p>
                        <p class="text-sm leading-5">
                            {&message.paragraph}
                        </p>
                    </div>
                    <div class="flex-shrink-0">
                        <button
                            onclick={on_close}
                            class="inline-flex text-neutral-400 hover:text-neutral-600 dark:hover:text-neutral-200 focus:outline-none transition-colors"
                            title="dismiss"
                        >
                            <span class="text-lg leading-none">{"×"}</span>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
