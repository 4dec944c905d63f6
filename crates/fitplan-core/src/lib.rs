//! Provider-agnostic building blocks of the workout planner.
//!
//! * [`template`] – traits that turn a value into chat messages and bind it to
//!   a model and sampling temperature.
//! * [`provider`] – the single trait a text-generation backend implements.
//! * [`client`] – a thin generic client executing prompts against one backend.
//! * [`error`] – the unified error type and its failure taxonomy.
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod template;

pub use client::FitplanClient;
