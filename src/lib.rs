// ABOUTME: Library crate for SproutPay exposing public API for testing and external use

#![allow(missing_docs)]

pub mod app;
pub mod collaborators;
pub mod components;
pub mod models;
pub mod validation;
