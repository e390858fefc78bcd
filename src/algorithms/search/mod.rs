//! Searching families

pub mod binary;
pub mod linear;
