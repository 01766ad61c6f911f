//! Default limits and integer range bounds

/// Recursion limit for curve subdivision in the flattening iterator.
pub const FLATTEN_LIMIT: u32 = 10;

/// Smallest representable integer coordinate, widened for intermediate math.
pub const INT_MIN: i64 = i32::MIN as i64;

/// Largest representable integer coordinate, widened for intermediate math.
pub const INT_MAX: i64 = i32::MAX as i64;

/// Clamp a widened value back into the `i32` range.
#[inline]
pub(crate) fn saturate(v: i64) -> i32 {
    v.clamp(INT_MIN, INT_MAX) as i32
}
