use crate::Route;
use crate::contexts::toast::{Message, use_toast};
use crate::hooks::use_push_route;
use crate::session::SessionState;
use yew::prelude::*;
use yewdux::use_dispatch;

/// Callback that ends the session, says goodbye and returns to the login
/// page.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let dispatch = use_dispatch::<SessionState>();
    let toaster = use_toast();
    let push_route = use_push_route();

    Callback::from(move |_| {
        dispatch.reduce_mut(|state| state.log_out());
        toaster.notify(Message::new("logged out", "see you soon!"));
        push_route.emit(Route::Login);
    })
}
