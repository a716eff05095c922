use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{AuthForm, AuthMode};
use crate::hooks::use_push_route;
use crate::session::use_current_user;

#[function_component]
pub fn LoginPage() -> Html {
    let user = use_current_user();
    let push_route = use_push_route();

    // Redirect to home if already logged in
    use_effect_with(user.is_guest, move |is_guest| {
        if !*is_guest {
            push_route.emit(Route::Home);
        }
    });

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-4">
                <AuthForm
                    title="log in to murmur"
                    description="enter your credentials to continue"
                    submit_text="log in"
                    mode={AuthMode::Login}
                />
                <p class="text-center text-sm text-neutral-600 dark:text-neutral-400">
                    {"don't have an account? "}
                    <Link<Route> to={Route::Signup} classes="font-medium underline">
                        {"sign up"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
