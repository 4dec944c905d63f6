mod adapter;
mod model_map;
mod provider_impl_chat;

pub use adapter::{API_KEY_ENV, GeminiAdapter, GeminiAdapterBuilder};
pub use client::DEFAULT_BASE_URL;
pub use model_map::map_model;
pub mod api_v1;
mod client;
pub mod error;
