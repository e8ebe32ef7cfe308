//! Shared utilities.
//!
//! Position hashing used for mesh-cache invalidation.

pub mod hash;
