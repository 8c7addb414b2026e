//! Recommended API: the best entry point for each use case.
//!
//! - **Plain arrays**: scalar functions (one matrix is not worth a dispatch)
//! - **`u32x4` rows**: SIMD shuffle network
//! - **Many matrices**: batch function with runtime CPU dispatch
//! - **Files**: `fopen`-style [`open`]
//!
//! # Quick Start
//!
//! ```rust
//! use raster_support::default::{transpose_4x4, transpose_rows};
//! use wide::u32x4;
//!
//! let mut m = [[1u32, 2, 3, 4]; 4];
//! transpose_4x4(&mut m);
//! assert_eq!(m[2], [3, 3, 3, 3]);
//!
//! let rows = transpose_rows([u32x4::splat(7); 4]);
//! assert_eq!(<[u32; 4]>::from(rows[0]), [7, 7, 7, 7]);
//! ```

// ============================================================================
// Single-matrix functions (plain arrays)
// ============================================================================

pub use crate::scalar::{transpose_4x4, transposed_4x4};

// ============================================================================
// SIMD-row and batch functions
// ============================================================================

pub use crate::simd::{transpose_rows, transpose_rows_in_place, transpose_slice};

// ============================================================================
// Filesystem
// ============================================================================

pub use crate::file::{open, OpenError, OpenMode};

// ============================================================================
// Array helpers
// ============================================================================

pub use crate::countof;
