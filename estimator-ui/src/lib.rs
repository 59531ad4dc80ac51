pub mod config;
pub mod controllers;
pub mod fields;
pub mod logging;
pub mod render;
pub mod routes;
pub mod session;

pub use config::AppConfig;
pub use session::{Command, Outcome, Session, SessionError};
