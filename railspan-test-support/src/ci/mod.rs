//! CI-facing configuration helpers.

pub mod property_test_profile;
