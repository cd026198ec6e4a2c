//! OpenCourt API Library
//!
//! Team balancing for pickup basketball games: domain logic, the balancing
//! service, repository adapters, and the HTTP layer that exposes them.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
