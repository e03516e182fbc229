/// math.rs
///
/// File containing numeric helpers shared by the conversion matrix.
use super::errors::BitsError;

/// Mixes two 32-bit halves into one hash word.
#[inline]
pub fn combine_halves(low: u32, high: u32) -> u32 {
    low ^ high
        .wrapping_add(0x9E37_79B9)
        .wrapping_add(low << 6)
        .wrapping_add(low >> 2)
}

/// Whether `value` has a `bits`-wide two's complement or unsigned
/// representation, i.e. lies in `[-2^(bits-1), 2^bits)`.
#[inline]
pub fn fits_width(value: i128, bits: usize) -> bool {
    let lower = -(1_i128 << (bits - 1));
    let upper = 1_i128 << bits;
    value >= lower && value < upper
}

/// Rounds `value` toward zero and checks that the result fits in `bits`.
/// NaN and infinities have no integer value.
pub fn truncate_float(value: f64, bits: usize) -> Result<i128, BitsError> {
    if !value.is_finite() {
        return Err(BitsError::InvalidValue);
    }

    let truncated = value.trunc();
    // Both bounds are powers of two and exact in f64.
    let lower = -(2_f64.powi(bits as i32 - 1));
    let upper = 2_f64.powi(bits as i32);
    if truncated < lower || truncated >= upper {
        return Err(BitsError::OutOfRange { width: bits });
    }

    Ok(truncated as i128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_width() {
        assert!(fits_width(-128, 8));
        assert!(fits_width(255, 8));
        assert!(!fits_width(-129, 8));
        assert!(!fits_width(256, 8));
        assert!(fits_width(u64::MAX as i128, 64));
        assert!(!fits_width(u64::MAX as i128 + 1, 64));
        assert!(fits_width(i64::MIN as i128, 64));
    }

    #[test]
    fn test_truncate_float() {
        assert_eq!(Ok(3), truncate_float(3.9, 8));
        assert_eq!(Ok(-3), truncate_float(-3.9, 8));
        assert_eq!(Ok(255), truncate_float(255.5, 8));
        assert_eq!(Ok(-128), truncate_float(-128.7, 8));
        assert_eq!(Err(BitsError::OutOfRange { width: 8 }), truncate_float(256.0, 8));
        assert_eq!(Err(BitsError::OutOfRange { width: 8 }), truncate_float(-129.0, 8));
        assert_eq!(Err(BitsError::InvalidValue), truncate_float(f64::NAN, 32));
        assert_eq!(Err(BitsError::InvalidValue), truncate_float(f64::INFINITY, 64));
        assert_eq!(
            Err(BitsError::OutOfRange { width: 64 }),
            truncate_float(18_446_744_073_709_551_616.0, 64)
        );
    }

    #[test]
    fn test_combine_halves() {
        assert_ne!(combine_halves(1, 0), combine_halves(1, 1));
        assert_ne!(combine_halves(0, 1), combine_halves(1, 0));
        assert_eq!(combine_halves(42, 7), combine_halves(42, 7));
    }
}
