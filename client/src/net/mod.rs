//! Networking modules for REST calls and the realtime channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles session REST calls, `socket` implements the realtime
//! transport driven by the session crate's connection controller, and `types`
//! defines the realtime wire schema.

pub mod api;
pub mod socket;
pub mod types;
