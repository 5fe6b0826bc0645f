pub mod model;
pub mod service;

pub use model::LoginForm;
pub use service::AuthService;
