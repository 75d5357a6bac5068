//! Command handlers.
//!
//! Top-level commands (`shell`, `categories`, `completions`) and the
//! per-line session commands dispatched by [`session::Session`].

mod data;
pub mod misc;
pub mod session;
mod transactions;
mod view;
