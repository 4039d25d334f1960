//! Validation utilities
//!
//! Compares a library read back from a written file with the library that
//! was written.

mod roundtrip;

pub use roundtrip::validate_roundtrip;
