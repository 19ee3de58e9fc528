//! Shared library for the Ariadne Alexa proxy Lambda.
//!
//! This crate resolves the bearer token carried by an Alexa request, forwards the
//! request to the backend and maps the backend's reply into what Alexa expects.

pub mod config;
pub mod error;
pub mod forwarder;
pub mod models;
pub mod token;

pub use config::Config;
pub use error::{Error, Result};
pub use forwarder::{translate_response, Forwarder};
pub use models::{ErrorEnvelope, ErrorType, SkillKind, TranslationResult};
pub use token::request_token;
