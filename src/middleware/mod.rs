pub mod admin;
pub mod handler;

pub use admin::AdminRequired;
pub use handler::{handler_fn, Handler, HandlerFn};
