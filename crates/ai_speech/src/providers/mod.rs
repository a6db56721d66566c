//! Speech provider implementations

pub mod remote;
