//! Pure domain logic for the vernissage gallery backend.
//!
//! This crate holds the domain types, repository and cache traits, pricing
//! rules, currency conversion math, and email template rendering. It performs
//! no I/O; the server crate wires these pieces to SQLite, SMTP, and HTTP.

pub mod auth;
pub mod cache;
pub mod catalog;
pub mod fx;
pub mod mail;
pub mod serde;
pub mod shop;
pub mod storage;
