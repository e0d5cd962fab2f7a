//! Integration tests for the voxgate gateway
//!
//! All coverage lives in `tests/`; this crate exists only to anchor them.
