//! # FieldOps Backend
//!
//! Resource-and-schedule management backend for a technical maintenance unit.
//!
//! This crate tracks the unit's personnel, vehicles, contracts, and work
//! schedules, computes overlap grouping for the calendar view, and exposes the
//! measurement conversion calculators used in electrical testing. The backend
//! exposes a REST API via Axum for the web frontend.
//!
//! ## Features
//!
//! - **Records**: Typed entity records with schema-validated decoding of
//!   spreadsheet-shaped rows
//! - **Scheduling**: Interval overlap grouping for calendar highlighting
//! - **Conversions**: Resistance/temperature, dielectric-loss, contact
//!   resistance, and turns-ratio calculators with uncertainty estimation
//! - **Dashboard**: Aggregations for the landing-page cards
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Consolidated DTO surface for API responses
//! - [`models`]: Entity records, time helpers, and row decoding
//! - [`db`]: Repository pattern and the in-memory storage backend
//! - [`scheduling`]: Overlap grouping algorithm
//! - [`conversion`]: Measurement conversion engine
//! - [`services`]: High-level business logic for the calendar and dashboard
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types

pub mod api;
pub mod config;
pub mod conversion;
pub mod db;
pub mod models;
pub mod routes;
pub mod scheduling;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
