//! # Collection of Basic Data Structures
//!
//! This module contains the following submodules:
//!
//! - `invertible_map`: A one-to-one map with a live, mutable inverse view.
//! - `mapping`: Capability traits shared by the standard maps and
//!   [InvertibleMap], plus generic helpers over them.
//! - `nested`: Nested values built from scalars, sequences and mappings.

pub mod invertible_map;
pub mod mapping;
pub mod nested;

pub use invertible_map::{InvertibleMap, InvertibleMapError, InvertibleMapResult};
pub use mapping::{delete_min_key, Mapping, MutableMapping};
pub use nested::{deep_min, Nested};
