use payloads::User;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Renders a username linking to the user's profile.
pub fn render_user_name(user: &User) -> Html {
    html! {
        <Link<Route>
            to={Route::UserProfile { id: user.id.to_string() }}
            classes="font-medium text-neutral-900 dark:text-neutral-100 hover:underline"
        >
            {format!("@{}", user.username)}
        </Link<Route>>
    }
}

/// Renders a circular avatar with the first character of the username.
pub fn render_user_avatar(user: &User) -> Html {
    let initial = user
        .username
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string();

    html! {
        <div
            class="w-8 h-8 bg-neutral-200 dark:bg-neutral-600 rounded-full flex items-center justify-center"
            title={format!("@{}", user.username)}
        >
            <span class="text-sm font-medium text-neutral-600 dark:text-neutral-300">
                {initial}
            </span>
        </div>
    }
}
