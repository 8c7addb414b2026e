//! SIMD 4×4 register transpose and portable file-open helpers.
//!
//! This crate collects the small, sharp support utilities a software
//! rasterizer leans on in its inner loops and at its filesystem edge:
//!
//! - [`default`] - **Recommended API** re-exporting the best entry points
//! - [`simd`] - Shuffle-network transpose on [`wide::u32x4`] rows
//! - [`scalar`] - Plain array transpose (reference and fallback)
//! - [`file`] - `fopen`-style file opening with Unicode-safe paths
//!
//! # Quick Start
//!
//! ```rust
//! use raster_support::default::{transpose_4x4, transposed_4x4};
//!
//! let mut m = [
//!     [1, 2, 3, 4],
//!     [5, 6, 7, 8],
//!     [9, 10, 11, 12],
//!     [13, 14, 15, 16],
//! ];
//! transpose_4x4(&mut m);
//! assert_eq!(m[0], [1, 5, 9, 13]);
//!
//! // Twice restores the original
//! assert_eq!(transposed_4x4(transposed_4x4(m)), m);
//! ```
//!
//! # SIMD Rows
//!
//! When matrix rows already live in 128-bit registers, transpose them
//! without leaving vector types:
//!
//! ```rust
//! use raster_support::simd::transpose_rows;
//! use wide::u32x4;
//!
//! let rows = [
//!     u32x4::from([1, 2, 3, 4]),
//!     u32x4::from([5, 6, 7, 8]),
//!     u32x4::from([9, 10, 11, 12]),
//!     u32x4::from([13, 14, 15, 16]),
//! ];
//! let t = transpose_rows(rows);
//! let col0: [u32; 4] = t[0].into();
//! assert_eq!(col0, [1, 5, 9, 13]);
//! ```
//!
//! # File Opening
//!
//! ```rust,no_run
//! use raster_support::file;
//!
//! let f = file::open("textures/skybox.dds", "rb")?;
//! # Ok::<(), raster_support::file::OpenError>(())
//! ```
//!
//! # Choosing the Right Function
//!
//! | Use Case | Recommended Function |
//! |----------|---------------------|
//! | One matrix as plain arrays | [`default::transpose_4x4`] |
//! | One matrix in `u32x4` rows | [`default::transpose_rows`] |
//! | Many matrices | [`default::transpose_slice`] |
//! | Open a file, `fopen` mode string | [`default::open`] |
//! | Array length in const context | [`countof`] |
//!
//! # Feature Flags
//!
//! - `unsafe_simd`: Use raw `core::arch` shuffle networks (`_mm_shuffle_ps`
//!   on x86-64, `vtrn1q`/`vtrn2q` on aarch64) instead of the safe lane
//!   permutation. The safe path compiles to the same instructions on
//!   current LLVM; the feature pins the exact network.
//!
//! # What Is Deliberately Absent
//!
//! No fixed-width integer aliases, no `restrict` qualifier, no
//! constant-initialization marker. Rust provides all three by language
//! rule: `u8`..`u64` are primitives, `&mut` references never alias, and
//! `static`/`const` items are always constant-initialized.

#![cfg_attr(not(feature = "unsafe_simd"), deny(unsafe_code))]
#![warn(missing_docs)]

// ============================================================================
// Public modules
// ============================================================================

/// Recommended API with the best entry point for each use case.
///
/// See module documentation for details.
pub mod default;

/// `fopen`-style file opening with Unicode-safe path handling.
pub mod file;

/// Scalar (plain array) 4×4 transpose.
///
/// Reference implementation the SIMD paths are tested against, and the
/// fallback on targets without 128-bit lane shuffles.
pub mod scalar;

/// SIMD transpose on 128-bit rows of four 32-bit lanes.
///
/// Single-matrix and batch entry points, with runtime CPU dispatch for the
/// batch form.
pub mod simd;

// ============================================================================
// Internal modules
// ============================================================================

// Dispatch macro (exported at crate root via #[macro_export])
mod targets;

// ============================================================================
// Array helpers
// ============================================================================

/// Number of elements in a fixed-size array.
///
/// Const-evaluable, so it can size other arrays and statics:
///
/// ```rust
/// use raster_support::countof;
///
/// static PALETTE: [u32; 7] = [0; 7];
/// const PALETTE_LEN: usize = countof(&PALETTE);
/// assert_eq!(PALETTE_LEN, 7);
/// ```
pub const fn countof<T, const N: usize>(_array: &[T; N]) -> usize {
    N
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::default::*;
    use wide::u32x4;

    #[test]
    fn test_api_consistency() {
        // Scalar and SIMD entry points must agree on the same matrix.
        let m = [
            [0xdead_beefu32, 1, 2, 3],
            [4, 5, 6, 7],
            [8, 9, 10, 11],
            [12, 13, 14, 0xcafe_f00d],
        ];

        let scalar = transposed_4x4(m);
        let rows = transpose_rows(m.map(u32x4::from));
        let simd = rows.map(<[u32; 4]>::from);

        assert_eq!(scalar, simd);
    }

    #[test]
    fn test_countof() {
        let bytes = [0u8; 13];
        let words = [0u32; 7];
        assert_eq!(crate::countof(&bytes), 13);
        assert_eq!(crate::countof(&words), 7);

        const TABLE: [u16; 256] = [0; 256];
        const LEN: usize = crate::countof(&TABLE);
        assert_eq!(LEN, 256);
    }
}
