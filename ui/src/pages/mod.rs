pub mod home;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod user_profile;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
pub use user_profile::UserProfilePage;
