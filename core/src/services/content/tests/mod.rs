//! Tests for the content service

mod fallback_tests;
mod helpers;
mod service_tests;
