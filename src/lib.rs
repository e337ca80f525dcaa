//! Core logic for the shipment creation front office: the editable shipment
//! draft and its validation rules, the carrier selector source, the role and
//! status lookup tables, and the submit flow against the backend shipment
//! endpoint.
//!
//! Transport, rendering, and authentication stay with the host application;
//! the core reaches them only through the traits in [`repository`] and
//! [`capabilities`].

pub mod capabilities;
pub mod domain;
pub mod forms;
pub mod repository;
pub mod services;

/// Storage key under which the host frontend keeps the access token.
pub const AUTH_TOKEN_KEY: &str = "accessToken";
