//! Unit tests for Chartastic.

mod notifications_tests;
