//! Scalar 4×4 transpose of 32-bit lanes.
//!
//! Sixteen element copies through a temporary buffer. This is the reference
//! implementation the SIMD paths are checked against, and the fallback on
//! targets without 128-bit lane shuffles. The transpose is a pure
//! permutation of opaque bit patterns, so there are no edge cases: every
//! input is valid and the operation is total.

/// Transpose a 4×4 matrix of 32-bit lanes in place.
///
/// After the call, row `i` holds the values that were in lane `i` of each
/// row, in row order:
///
/// ```rust
/// use raster_support::scalar::transpose_4x4;
///
/// let mut m = [
///     [1, 2, 3, 4],
///     [5, 6, 7, 8],
///     [9, 10, 11, 12],
///     [13, 14, 15, 16],
/// ];
/// transpose_4x4(&mut m);
/// assert_eq!(
///     m,
///     [[1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15], [4, 8, 12, 16]]
/// );
/// ```
#[inline]
pub fn transpose_4x4(m: &mut [[u32; 4]; 4]) {
    *m = transposed_4x4(*m);
}

/// Transpose a 4×4 matrix of 32-bit lanes, returning the result.
#[inline]
pub fn transposed_4x4(m: [[u32; 4]; 4]) -> [[u32; 4]; 4] {
    let mut out = [[0u32; 4]; 4];
    for (i, row) in m.iter().enumerate() {
        for (j, &lane) in row.iter().enumerate() {
            out[j][i] = lane;
        }
    }
    out
}
