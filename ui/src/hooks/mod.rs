pub mod use_fetch;
pub mod use_logout;
pub mod use_push_route;

pub use use_fetch::{UseFetchReturn, use_fetch};
pub use use_logout::use_logout;
pub use use_push_route::use_push_route;
