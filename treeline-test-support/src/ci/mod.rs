//! CI profile helpers shared across test suites.

pub mod property_test_profile;
