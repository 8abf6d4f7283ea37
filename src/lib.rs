//! Vonix - Mental wellness chat assistant
//!
//! This crate runs a conversational front-end that mixes free chat, proxied
//! to a hosted text-generation model, with scripted DASS-21 and DASS-42
//! self-report questionnaires scored by a remote prediction service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
