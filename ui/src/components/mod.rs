pub mod auth_form;
pub mod layout;
pub mod post_list;
pub mod timestamp_display;
pub mod toast;
pub mod user_identity_display;

pub use auth_form::{AuthForm, AuthMode};
pub use post_list::PostList;
pub use timestamp_display::TimestampDisplay;
pub use toast::ToastBanner;
