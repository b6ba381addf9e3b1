//! On-call Lookup Library
//!
//! Answers "who is currently on call for schedule X?" against the OpsGenie
//! schedule API, including:
//! - Configuration loaded once at process start
//! - The OpsGenie HTTP client behind the `OnCallProvider` trait
//! - The lookup itself, independent of transport
//! - Lambda (API Gateway / ALB) and actix-web adapters

pub mod api;
pub mod config;
pub mod integrations;
pub mod lambda;
pub mod models;
pub mod services;
