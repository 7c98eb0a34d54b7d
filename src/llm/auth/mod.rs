//! Authentication helpers for provider backends

pub mod iam;

pub use iam::IamTokenClient;
