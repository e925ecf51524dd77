//! CodeLingo - a terminal client for bilingual programming lessons
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod input;
pub mod models;
pub mod notifications;
pub mod repository;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
