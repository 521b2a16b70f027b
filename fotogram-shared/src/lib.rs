//! Wire-format models shared by the Fotogram web client.
//!
//! The HTTP API and the Google identity provider are external services; the
//! types here pin down the exact JSON shapes exchanged with them.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
