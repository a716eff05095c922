use std::rc::Rc;

use payloads::User;
use payloads::responses::LoginResponse;
use yew::prelude::*;
use yewdux::{Context, Dispatch, Store, use_selector};

/// Who is using the app. Guests have neither user info nor a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub user_info: Option<User>,
    pub access_token: Option<String>,
    pub is_guest: bool,
}

impl SessionUser {
    pub fn guest() -> Self {
        Self {
            user_info: None,
            access_token: None,
            is_guest: true,
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.user_info.as_ref().map(|user| user.username.as_str())
    }
}

impl Default for SessionUser {
    fn default() -> Self {
        Self::guest()
    }
}

/// The session store. Login and logout flows are the only writers.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct SessionState {
    pub user: SessionUser,
}

impl SessionState {
    pub fn log_in(&mut self, user: User, access_token: String) {
        tracing::debug!(username = %user.username, "logged in");
        self.user = SessionUser {
            user_info: Some(user),
            access_token: Some(access_token),
            is_guest: false,
        };
    }

    pub fn log_out(&mut self) {
        self.user = SessionUser::guest();
    }
}

impl From<LoginResponse> for SessionUser {
    fn from(response: LoginResponse) -> Self {
        Self {
            user_info: Some(response.user),
            access_token: Some(response.access_token),
            is_guest: false,
        }
    }
}

/// Read-only view of the current user in a session store.
///
/// Every read goes to the store, so the value is never stale.
#[derive(Clone)]
pub struct CurrentUser {
    dispatch: Dispatch<SessionState>,
}

impl CurrentUser {
    pub fn new(cx: &Context) -> Self {
        Self {
            dispatch: Dispatch::new(cx),
        }
    }

    pub fn get(&self) -> SessionUser {
        self.dispatch.get().user.clone()
    }

    pub fn is_guest(&self) -> bool {
        self.dispatch.get().user.is_guest
    }
}

pub fn current_user(cx: &Context) -> CurrentUser {
    CurrentUser::new(cx)
}

/// The current user; re-renders the component when it changes.
#[hook]
pub fn use_current_user() -> Rc<SessionUser> {
    use_selector(|state: &SessionState| state.user.clone())
}
