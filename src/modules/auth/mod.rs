//! Admin sign-in, sign-out and session introspection.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
