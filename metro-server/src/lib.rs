//! Seoul Metro real-time arrivals server.
//!
//! A web application that answers: "which trains are coming to this
//! station, and which of them take me to where I'm going?"

pub mod cache;
pub mod domain;
pub mod feed;
pub mod normalize;
pub mod presets;
pub mod resolver;
pub mod topology;
pub mod web;
