//! Uniform draws used by target selection and per-axis jitter.
use rand::RngCore;

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    // 24 high bits keep the result strictly below 1.0 after the f32 conversion.
    ((rng.next_u32() >> 8) as f32) / ((1u32 << 24) as f32)
}

/// Generate a random index in `[0, bound)` with a multiply-shift reduction.
///
/// `bound` must be non-zero.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, bound: usize) -> usize {
    debug_assert!(bound > 0, "bound must be > 0");
    if bound <= u32::MAX as usize {
        ((rng.next_u32() as u64 * bound as u64) >> 32) as usize
    } else {
        ((rng.next_u64() as u128 * bound as u128) >> 64) as usize
    }
}
