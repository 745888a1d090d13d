pub mod web;

pub use web::{bind_listener, start_web_server, HTTP_SHUTDOWN_GRACE};
