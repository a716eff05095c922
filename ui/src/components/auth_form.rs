use std::rc::Rc;

use payloads::requests::{CreateAccount, LoginCredentials};
use payloads::responses::LoginResponse;
use reqwest::Method;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::use_dispatch;

use crate::Route;
use crate::config::{AppConfig, is_dev_mode};
use crate::contexts::toast::{Message, use_toast};
use crate::fetch::{FetchHandle, FetchOptions};
use crate::hooks::use_push_route;
use crate::session::SessionState;

#[derive(Clone, Copy, PartialEq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn endpoint(&self) -> &'static str {
        match self {
            Self::Login => "/api/login",
            Self::Signup => "/api/signup",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub submit_text: AttrValue,
    pub mode: AuthMode,
}

#[function_component]
pub fn AuthForm(props: &AuthFormProps) -> Html {
    let dispatch = use_dispatch::<SessionState>();
    let toaster = use_toast();
    let push_route = use_push_route();

    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let request = use_mut_ref(|| None::<FetchHandle<LoginResponse>>);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_password_ref = confirm_password_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let request = request.clone();
        let mode = props.mode;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if request.borrow().as_ref().is_some_and(FetchHandle::pending) {
                return;
            }

            let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let username = username_input.value();
            let password = password_input.value();

            if username.is_empty() || password.is_empty() {
                error_message.set(Some(
                    "please enter both username and password".to_string(),
                ));
                return;
            }

            let body = match mode {
                AuthMode::Login => {
                    FetchOptions::<LoginResponse>::new().json_body(&LoginCredentials {
                        username,
                        password,
                    })
                }
                AuthMode::Signup => {
                    let account = CreateAccount { username, password };
                    if let Err(problem) = account.validate() {
                        error_message.set(Some(problem.to_string()));
                        return;
                    }

                    let confirm_password = confirm_password_ref
                        .cast::<HtmlInputElement>()
                        .map(|input| input.value())
                        .unwrap_or_default();
                    if account.password != confirm_password {
                        error_message.set(Some("passwords do not match".to_string()));
                        return;
                    }

                    FetchOptions::<LoginResponse>::new().json_body(&account)
                }
            };
            let options = match body {
                Ok(options) => options.method(Method::POST),
                Err(e) => {
                    tracing::error!("could not encode credentials: {e}");
                    toaster.notify(Message::error());
                    return;
                }
            };

            let options = options
                .on_success({
                    let dispatch = dispatch.clone();
                    let toaster = toaster.clone();
                    let push_route = push_route.clone();
                    let is_loading = is_loading.clone();
                    move |response: Option<&LoginResponse>| {
                        is_loading.set(false);
                        let Some(response) = response else {
                            tracing::error!("auth response had no body");
                            toaster.notify(Message::error());
                            return;
                        };
                        toaster.notify(Message::welcome(&response.user.username));
                        dispatch.reduce_mut(|state| {
                            state.log_in(
                                response.user.clone(),
                                response.access_token.clone(),
                            )
                        });
                        push_route.emit(Route::Home);
                    }
                })
                .on_error({
                    let toaster = toaster.clone();
                    let error_message = error_message.clone();
                    let is_loading = is_loading.clone();
                    move |error| {
                        is_loading.set(false);
                        match error.status_code {
                            Some(401) => error_message.set(Some(
                                "wrong username or password".to_string(),
                            )),
                            Some(409) => error_message.set(Some(
                                "that username is taken".to_string(),
                            )),
                            _ => toaster.notify(Message::error()),
                        }
                    }
                });

            let url = match AppConfig::from_env().resolve_url(mode.endpoint()) {
                Ok(url) => url,
                Err(e) => {
                    tracing::error!("bad backend url: {e}");
                    toaster.notify(Message::error());
                    return;
                }
            };

            is_loading.set(true);
            error_message.set(None);
            *request.borrow_mut() = Some(FetchHandle::new(
                Rc::new(crate::http_client()),
                url,
                options,
            ));
        })
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                       rounded-md shadow-sm bg-white dark:bg-neutral-700
                       text-neutral-900 dark:text-neutral-100
                       focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500";

    html! {
        <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
            <div class="mb-8 text-center">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                    {&props.title}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {&props.description}
                </p>
            </div>

            <form onsubmit={on_submit} class="space-y-6">
                if let Some(error) = &*error_message {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                    </div>
                }

                <div>
                    <label for="username" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"username"}
                    </label>
                    <input
                        ref={username_ref}
                        type="text"
                        id="username"
                        name="username"
                        autocomplete="username"
                        required={true}
                        class={input_class}
                    />
                </div>

                <div>
                    <label for="password" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"password"}
                    </label>
                    <input
                        ref={password_ref}
                        type="password"
                        id="password"
                        name="password"
                        autocomplete={if props.mode == AuthMode::Signup { "new-password" } else { "current-password" }}
                        required={true}
                        class={input_class}
                    />
                </div>

                if props.mode == AuthMode::Signup {
                    <div>
                        <label for="confirm-password" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                            {"confirm password"}
                        </label>
                        <input
                            ref={confirm_password_ref}
                            type="password"
                            id="confirm-password"
                            name="confirm-password"
                            autocomplete="new-password"
                            required={true}
                            class={input_class}
                        />
                    </div>
                }

                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full flex justify-center py-2 px-4 border border-transparent
                           rounded-md shadow-sm text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors duration-200"
                >
                    if *is_loading {
                        {match props.mode {
                            AuthMode::Login => "logging in...",
                            AuthMode::Signup => "creating account...",
                        }}
                    } else {
                        {&props.submit_text}
                    }
                </button>
            </form>

            if props.mode == AuthMode::Login && is_dev_mode() {
                <div class="mt-6 text-center">
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {"development credentials: alice / supersecret"}
                    </p>
                </div>
            }
        </div>
    }
}
