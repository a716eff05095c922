use payloads::{Post, User};
use yew::prelude::*;

use crate::components::PostList;
use crate::fetch::FetchOptions;
use crate::hooks::use_fetch;
use crate::utils::format_local_date;

#[derive(Properties, PartialEq)]
pub struct UserProfilePageProps {
    pub id: String,
}

#[function_component]
pub fn UserProfilePage(props: &UserProfilePageProps) -> Html {
    let user = use_fetch::<User>(&format!("/api/users/{}", props.id), FetchOptions::new());
    let posts = use_fetch::<Vec<Post>>(
        &format!("/api/users/{}/posts", props.id),
        FetchOptions::new(),
    );

    if user.error.as_ref().and_then(|e| e.status_code) == Some(404) {
        return html! {
            <p class="text-center text-neutral-600 dark:text-neutral-400 py-12">
                {"this user doesn't exist."}
            </p>
        };
    }

    html! {
        <div class="max-w-2xl mx-auto space-y-6">
            {user.render("user profile", |user| html! {
                <div>
                    <h1 class="text-2xl font-bold">{format!("@{}", user.username)}</h1>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {format!("joined {}", format_local_date(user.created_at))}
                    </p>
                </div>
            })}
            {posts.render("posts", |posts| html! {
                <PostList posts={posts.clone()} />
            })}
        </div>
    }
}
