//! Common test imports and utilities for texture decode tests
#![allow(unused_imports)]
#![allow(dead_code)]

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

/// Serialises 16-bit colour words as little-endian bytes.
pub fn words_to_le_bytes(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Builds a VQ payload: codebook, one padding byte, then the index map.
pub fn vq_payload(codebook: &[u16; 1024], indices: &[u8]) -> Vec<u8> {
    let mut payload = words_to_le_bytes(codebook);
    payload.push(0);
    payload.extend_from_slice(indices);
    payload
}
