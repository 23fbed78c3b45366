//! booking-client
//!
//! One-shot FIFO client for the seat booking server.
//!
//! A run publishes a single request on the server's well-known FIFO,
//! then waits, bounded by a caller-supplied timeout, for the reply on a
//! private FIFO owned by this invocation. Every failure shape maps to
//! its own process exit status.

pub mod app;
pub mod broadcast;
pub mod channel;
pub mod config;
pub mod receive;
pub mod sink;
