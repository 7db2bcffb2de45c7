//! Tests for record parsing and line classification

mod classify_tests;
