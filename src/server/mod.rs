pub mod config;
mod error;
mod fragment;
mod http_layers;
pub mod server;
pub mod state;
pub mod views;

pub use config::ServerConfig;
pub use error::PageError;
pub use fragment::{HxRequest, HX_REQUEST_HEADER};
pub use http_layers::*;
pub use server::run_server;
