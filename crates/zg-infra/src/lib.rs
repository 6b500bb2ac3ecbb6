//! # zg-infra
//!
//! Infrastructure adapters for the Zzanggu desktop client.
//!
//! Concrete implementations of the `zg-core` ports that talk to the outside
//! world; currently the HTTP registration gateway.

pub mod http;

pub use http::HttpRegistrationGateway;
