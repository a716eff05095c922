use payloads::Post;
use yew::prelude::*;

use crate::components::PostList;
use crate::contexts::toast::{Message, use_toast};
use crate::fetch::FetchOptions;
use crate::hooks::use_fetch;
use crate::session::use_current_user;

#[function_component]
pub fn HomePage() -> Html {
    let user = use_current_user();
    let toaster = use_toast();

    let posts = use_fetch::<Vec<Post>>(
        "/api/posts",
        FetchOptions::new().on_error(move |_| toaster.notify(Message::error())),
    );

    let greeting = match user.username() {
        Some(username) => format!("hi, {username}"),
        None => "what's everyone saying".to_string(),
    };

    let on_refresh = {
        let refresh = posts.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    html! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{greeting}</h1>
                <button
                    onclick={on_refresh}
                    disabled={posts.pending}
                    class="text-sm underline disabled:opacity-50"
                >
                    {"refresh"}
                </button>
            </div>
            {posts.render("posts", |posts| html! {
                <PostList posts={posts.clone()} />
            })}
        </div>
    }
}
