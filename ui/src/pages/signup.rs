use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{AuthForm, AuthMode};

#[function_component]
pub fn SignupPage() -> Html {
    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-4">
                <AuthForm
                    title="create your account"
                    description="join murmur to start posting"
                    submit_text="sign up"
                    mode={AuthMode::Signup}
                />
                <p class="text-center text-sm text-neutral-600 dark:text-neutral-400">
                    {"already have an account? "}
                    <Link<Route> to={Route::Login} classes="font-medium underline">
                        {"log in"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
