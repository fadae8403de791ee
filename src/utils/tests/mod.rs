//! Tests for utility helpers

mod logger_tests;
