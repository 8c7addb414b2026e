//! SIMD 4×4 transpose on 128-bit rows of four 32-bit lanes.
//!
//! Rows are [`wide::u32x4`] values; lanes are opaque bit patterns, so the
//! same functions serve integer and raw float data alike. The network is
//! the classic shuffle transpose: interleave the low and high halves of
//! each row pair, then recombine lanes {0, 2} and {1, 3} of the
//! temporaries.
//!
//! The default build expresses the network as safe lane permutations that
//! LLVM lowers to `shufps`/`unpck` (x86) or `trn`/`zip` (NEON). The
//! `unsafe_simd` feature pins the exact instruction sequence with raw
//! `core::arch` intrinsics instead.

use wide::u32x4;

/// Transpose four `u32x4` rows, returning the transposed rows.
///
/// Row `i` of the result holds lane `i` of each input row, in row order.
/// Total over all bit patterns; no error conditions.
///
/// ```rust
/// use raster_support::simd::transpose_rows;
/// use wide::u32x4;
///
/// let rows = [
///     u32x4::from([1, 2, 3, 4]),
///     u32x4::from([5, 6, 7, 8]),
///     u32x4::from([9, 10, 11, 12]),
///     u32x4::from([13, 14, 15, 16]),
/// ];
/// let t = transpose_rows(rows);
/// assert_eq!(<[u32; 4]>::from(t[1]), [2, 6, 10, 14]);
/// ```
#[inline]
pub fn transpose_rows(rows: [u32x4; 4]) -> [u32x4; 4] {
    transpose_rows_impl(rows)
}

/// Transpose four `u32x4` rows in place.
///
/// The rows must be four distinct values; overlap cannot arise through this
/// signature since the array owns its rows.
#[inline]
pub fn transpose_rows_in_place(rows: &mut [u32x4; 4]) {
    *rows = transpose_rows_impl(*rows);
}

crate::simd_multiversion! {
    /// Transpose every 4×4 matrix in the slice in place.
    ///
    /// Batch form for streams of matrices (vertex blocks, tile headers).
    /// Dispatched once per call to the widest instruction set the CPU
    /// supports.
    pub fn transpose_slice(mats: &mut [[u32x4; 4]]) {
        for m in mats.iter_mut() {
            *m = transpose_rows_impl(*m);
        }
    }
}

#[cfg(not(feature = "unsafe_simd"))]
use safe_impl::transpose_rows_impl;

#[cfg(feature = "unsafe_simd")]
use unsafe_impl::transpose_rows_impl;

#[cfg_attr(feature = "unsafe_simd", allow(dead_code))]
mod safe_impl {
    use bytemuck::cast;
    use wide::u32x4;

    #[inline(always)]
    pub(super) fn transpose_rows_impl(rows: [u32x4; 4]) -> [u32x4; 4] {
        let r0: [u32; 4] = cast(rows[0]);
        let r1: [u32; 4] = cast(rows[1]);
        let r2: [u32; 4] = cast(rows[2]);
        let r3: [u32; 4] = cast(rows[3]);

        // Interleave low/high halves of each row pair.
        let tmp0 = [r0[0], r0[1], r1[0], r1[1]];
        let tmp2 = [r0[2], r0[3], r1[2], r1[3]];
        let tmp1 = [r2[0], r2[1], r3[0], r3[1]];
        let tmp3 = [r2[2], r2[3], r3[2], r3[3]];

        // Recombine lanes {0, 2} and {1, 3} of the temporaries.
        [
            cast([tmp0[0], tmp0[2], tmp1[0], tmp1[2]]),
            cast([tmp0[1], tmp0[3], tmp1[1], tmp1[3]]),
            cast([tmp2[0], tmp2[2], tmp3[0], tmp3[2]]),
            cast([tmp2[1], tmp2[3], tmp3[1], tmp3[3]]),
        ]
    }
}

#[cfg(feature = "unsafe_simd")]
mod unsafe_impl {
    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    use wide::u32x4;

    /// Shuffle-network transpose: 0x44/0xEE interleave the row pairs,
    /// 0x88/0xDD pick lanes {0, 2} and {1, 3} of the temporaries.
    #[cfg(target_arch = "x86_64")]
    #[inline]
    pub(super) fn transpose_rows_impl(rows: [u32x4; 4]) -> [u32x4; 4] {
        use core::arch::x86_64::{
            _mm_castps_si128, _mm_castsi128_ps, _mm_loadu_si128, _mm_shuffle_ps, _mm_storeu_si128,
        };

        let r = rows.map(<[u32; 4]>::from);
        let mut out = [[0u32; 4]; 4];

        // SAFETY: SSE2 is part of the x86_64 baseline, and every load and
        // store covers exactly four u32 lanes of a correctly sized local.
        unsafe {
            let m0 = _mm_castsi128_ps(_mm_loadu_si128(r[0].as_ptr().cast()));
            let m1 = _mm_castsi128_ps(_mm_loadu_si128(r[1].as_ptr().cast()));
            let m2 = _mm_castsi128_ps(_mm_loadu_si128(r[2].as_ptr().cast()));
            let m3 = _mm_castsi128_ps(_mm_loadu_si128(r[3].as_ptr().cast()));

            let tmp0 = _mm_shuffle_ps(m0, m1, 0x44);
            let tmp2 = _mm_shuffle_ps(m0, m1, 0xEE);
            let tmp1 = _mm_shuffle_ps(m2, m3, 0x44);
            let tmp3 = _mm_shuffle_ps(m2, m3, 0xEE);

            _mm_storeu_si128(
                out[0].as_mut_ptr().cast(),
                _mm_castps_si128(_mm_shuffle_ps(tmp0, tmp1, 0x88)),
            );
            _mm_storeu_si128(
                out[1].as_mut_ptr().cast(),
                _mm_castps_si128(_mm_shuffle_ps(tmp0, tmp1, 0xDD)),
            );
            _mm_storeu_si128(
                out[2].as_mut_ptr().cast(),
                _mm_castps_si128(_mm_shuffle_ps(tmp2, tmp3, 0x88)),
            );
            _mm_storeu_si128(
                out[3].as_mut_ptr().cast(),
                _mm_castps_si128(_mm_shuffle_ps(tmp2, tmp3, 0xDD)),
            );
        }

        out.map(u32x4::from)
    }

    /// Transpose via 32-bit then 64-bit transvections (`trn1`/`trn2`).
    #[cfg(target_arch = "aarch64")]
    #[inline]
    pub(super) fn transpose_rows_impl(rows: [u32x4; 4]) -> [u32x4; 4] {
        use core::arch::aarch64::{
            vld1q_u32, vreinterpretq_u32_u64, vreinterpretq_u64_u32, vst1q_u32, vtrn1q_u32,
            vtrn1q_u64, vtrn2q_u32, vtrn2q_u64,
        };

        let r = rows.map(<[u32; 4]>::from);
        let mut out = [[0u32; 4]; 4];

        // SAFETY: NEON is part of the aarch64 baseline, and every load and
        // store covers exactly four u32 lanes of a correctly sized local.
        unsafe {
            let m0 = vld1q_u32(r[0].as_ptr());
            let m1 = vld1q_u32(r[1].as_ptr());
            let m2 = vld1q_u32(r[2].as_ptr());
            let m3 = vld1q_u32(r[3].as_ptr());

            let tmp0 = vreinterpretq_u64_u32(vtrn1q_u32(m0, m1));
            let tmp1 = vreinterpretq_u64_u32(vtrn2q_u32(m0, m1));
            let tmp2 = vreinterpretq_u64_u32(vtrn1q_u32(m2, m3));
            let tmp3 = vreinterpretq_u64_u32(vtrn2q_u32(m2, m3));

            vst1q_u32(
                out[0].as_mut_ptr(),
                vreinterpretq_u32_u64(vtrn1q_u64(tmp0, tmp2)),
            );
            vst1q_u32(
                out[1].as_mut_ptr(),
                vreinterpretq_u32_u64(vtrn1q_u64(tmp1, tmp3)),
            );
            vst1q_u32(
                out[2].as_mut_ptr(),
                vreinterpretq_u32_u64(vtrn2q_u64(tmp0, tmp2)),
            );
            vst1q_u32(
                out[3].as_mut_ptr(),
                vreinterpretq_u32_u64(vtrn2q_u64(tmp1, tmp3)),
            );
        }

        out.map(u32x4::from)
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    pub(super) use super::safe_impl::transpose_rows_impl;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SEQUENTIAL: [[u32; 4]; 4] = [
        [1, 2, 3, 4],
        [5, 6, 7, 8],
        [9, 10, 11, 12],
        [13, 14, 15, 16],
    ];

    fn rows_of(m: [[u32; 4]; 4]) -> [u32x4; 4] {
        m.map(u32x4::from)
    }

    fn arrays_of(rows: [u32x4; 4]) -> [[u32; 4]; 4] {
        rows.map(<[u32; 4]>::from)
    }

    #[test]
    fn test_sequential_matrix() {
        let t = transpose_rows(rows_of(SEQUENTIAL));
        assert_eq!(
            arrays_of(t),
            [[1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15], [4, 8, 12, 16]]
        );
    }

    #[test]
    fn test_diagonal_is_fixed_point() {
        let diag = [[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]];
        assert_eq!(arrays_of(transpose_rows(rows_of(diag))), diag);
    }

    #[test]
    fn test_in_place_matches_by_value() {
        let mut rows = rows_of(SEQUENTIAL);
        transpose_rows_in_place(&mut rows);
        assert_eq!(arrays_of(rows), arrays_of(transpose_rows(rows_of(SEQUENTIAL))));
    }

    #[test]
    fn test_slice_matches_single() {
        let matrices: Vec<[[u32; 4]; 4]> = (0u32..37)
            .map(|k| {
                let mut m = [[0u32; 4]; 4];
                for (i, row) in m.iter_mut().enumerate() {
                    for (j, lane) in row.iter_mut().enumerate() {
                        *lane = k
                            .wrapping_mul(0x9e37_79b9)
                            .wrapping_add((i * 4 + j) as u32);
                    }
                }
                m
            })
            .collect();

        let mut batch: Vec<[u32x4; 4]> = matrices.iter().map(|&m| rows_of(m)).collect();
        transpose_slice(&mut batch);

        for (m, t) in matrices.iter().zip(batch.iter()) {
            assert_eq!(arrays_of(*t), arrays_of(transpose_rows(rows_of(*m))));
        }
    }

    #[test]
    fn test_empty_slice() {
        let mut batch: Vec<[u32x4; 4]> = Vec::new();
        transpose_slice(&mut batch);
        assert!(batch.is_empty());
    }

    proptest! {
        #[test]
        fn prop_double_transpose_restores(m in any::<[[u32; 4]; 4]>()) {
            let once = transpose_rows(rows_of(m));
            let twice = transpose_rows(once);
            prop_assert_eq!(arrays_of(twice), m);
        }

        #[test]
        fn prop_matches_scalar(m in any::<[[u32; 4]; 4]>()) {
            let simd = arrays_of(transpose_rows(rows_of(m)));
            let scalar = crate::scalar::transposed_4x4(m);
            prop_assert_eq!(simd, scalar);
        }

        #[test]
        fn prop_lane_mapping(m in any::<[[u32; 4]; 4]>(), i in 0usize..4, j in 0usize..4) {
            let t = arrays_of(transpose_rows(rows_of(m)));
            prop_assert_eq!(t[i][j], m[j][i]);
        }
    }
}
