use crate::error::TextUtilError;

/// Returns the digit `index` places from the right of `source` in `base`.
///
/// The sign of `source` is ignored. Positions past the most significant
/// digit are 0.
///
/// # Errors
///
/// Returns `TextUtilError::InvalidBase` if `base < 2`.
pub fn digit_at(source: i64, index: u32, base: u32) -> Result<u32, TextUtilError> {
    check_base(base)?;
    let base = u64::from(base);
    let mut value = source.unsigned_abs();
    for _ in 0..index {
        if value == 0 {
            break;
        }
        value /= base;
    }
    // The remainder is below `base`, which came from a u32
    Ok(u32::try_from(value % base).unwrap_or(0))
}

/// Counts the digits of `source` in `base`, ignoring the sign.
///
/// Zero has no non-zero digit and counts as length 0.
///
/// # Errors
///
/// Returns `TextUtilError::InvalidBase` if `base < 2`.
pub fn number_length(source: i64, base: u32) -> Result<u32, TextUtilError> {
    check_base(base)?;
    let base = u64::from(base);
    let mut value = source.unsigned_abs();
    let mut digits = 0;
    while value != 0 {
        value /= base;
        digits += 1;
    }
    Ok(digits)
}

fn check_base(base: u32) -> Result<(), TextUtilError> {
    if base < 2 {
        return Err(TextUtilError::InvalidBase { base });
    }
    Ok(())
}
