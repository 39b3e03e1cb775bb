//! # Launchboard
//!
//! Interactive launch-records dashboard backend.
//!
//! Loads a static CSV of rocket launch records once at startup, serves a
//! single dashboard page (site dropdown, payload range slider, two chart
//! regions), and recomputes chart specifications on demand as the
//! controls change. The dataset is read-only for the lifetime of the
//! process; every chart update is one synchronous, independent
//! recomputation over it.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`data`]: CSV loading and the immutable in-memory dataset
//! - [`charts`]: chart specification DTOs served to the page
//! - [`services`]: the pure aggregation functions behind each chart
//! - [`layout`]: static page description (controls + chart regions)
//! - [`callbacks`]: explicit control -> chart registry (the reactive
//!   update engine)
//! - [`config`]: TOML file + environment configuration
//! - [`http`]: axum-based server exposing the page and chart endpoints

pub mod api;

pub mod callbacks;
pub mod charts;
pub mod config;
pub mod data;
pub mod layout;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
