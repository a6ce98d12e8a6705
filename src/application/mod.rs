//! Application layer orchestrating a card transaction end to end.
//!
//! `PaymentProcessor` is the entry point: it chains the validator, the
//! request builder, the failover submitter, and the response interpreter,
//! and leaves one redacted audit record per attempt.

pub mod audit;
pub mod builder;
pub mod interpreter;
pub mod processor;
pub mod submitter;
pub mod validate;
