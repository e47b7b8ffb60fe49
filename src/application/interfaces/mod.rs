mod apod_service;
mod chat_client;

pub use apod_service::*;
pub use chat_client::*;
