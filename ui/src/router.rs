use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    HomePage, LoginPage, NotFoundPage, SignupPage, UserProfilePage,
};

pub const TITLE_PREFIX: &str = "murmur";

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/users/:id")]
    UserProfile { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The route for `path`; anything unregistered is `NotFound`.
    pub fn resolve(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Self::NotFound)
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "log in",
            Self::Signup => "sign up",
            Self::UserProfile { .. } => "profile",
            Self::NotFound => "page not found",
        }
    }

    /// Document title shown while this route is active.
    pub fn title(&self) -> String {
        format!("{TITLE_PREFIX} | {}", self.label())
    }
}

fn set_document_title(title: &str) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}

/// Render the view for `route`, updating the title before the view mounts.
pub fn switch(route: Route) -> Html {
    set_document_title(&route.title());

    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::UserProfile { id } => html! { <UserProfilePage {id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
