use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_logout;
use crate::session::use_current_user;

#[function_component]
pub fn Header() -> Html {
    let user = use_current_user();
    let on_logout = use_logout();

    let link_class = "text-sm font-medium text-gray-700 dark:text-gray-300 hover:underline";

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <Link<Route> to={Route::Home} classes="text-xl font-semibold text-gray-900 dark:text-white">
                            {"murmur"}
                        </Link<Route>>
                    </div>
                    <div class="flex items-center space-x-4">
                        {match &user.user_info {
                            Some(info) if !user.is_guest => html! {
                                <>
                                    <Link<Route> to={Route::UserProfile { id: info.id.to_string() }} classes={link_class}>
                                        {format!("@{}", info.username)}
                                    </Link<Route>>
                                    <button onclick={on_logout} class={link_class}>
                                        {"log out"}
                                    </button>
                                </>
                            },
                            _ => html! {
                                <>
                                    <Link<Route> to={Route::Login} classes={link_class}>
                                        {"log in"}
                                    </Link<Route>>
                                    <Link<Route> to={Route::Signup} classes={link_class}>
                                        {"sign up"}
                                    </Link<Route>>
                                </>
                            },
                        }}
                    </div>
                </div>
            </div>
        </header>
    }
}
