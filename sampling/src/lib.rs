//! Deterministic pseudorandom sampling based on ChaCha8.
//!
//! Used to mint fresh ciphertext handle words in the reference backend and
//! to draw reproducible operands in tests and benchmarks.

pub mod source;
