//! Motorola Fast Floating Point (FFP) conversion.
//!
//! Binary VideoScape-3D files store coordinates as FFP words:
//!
//! ```text
//! bits 31..8  mantissa (24 bits, unsigned, normalized so bit 31 is set)
//! bit  7      sign
//! bits 6..0   exponent, excess-64
//! ```
//!
//! The value is `mantissa * 2^(exponent - 64) / 2^24`. There is no NaN,
//! infinity or denormal encoding, so conversion is total.

/// Bias subtracted from the stored 7-bit exponent.
pub const EXPONENT_BIAS: i32 = 0x40;

/// Number of mantissa bits; the mantissa is a fraction of `2^24`.
pub const MANTISSA_BITS: i32 = 24;

const SIGN_BIT: u32 = 0x80;
const EXPONENT_MASK: u32 = 0x7f;
const MANTISSA_SHIFT: u32 = 8;

/// Convert a packed FFP word to a native `f64`.
///
/// Every 24-bit mantissa and every scale factor the format can express is
/// exactly representable in `f64`, so the conversion adds no rounding.
///
/// # Example
///
/// ```
/// use mesh_vs3d::ffp_to_f64;
///
/// assert_eq!(ffp_to_f64(0x8000_0041), 1.0);
/// assert_eq!(ffp_to_f64(0x8000_00C1), -1.0);
/// assert_eq!(ffp_to_f64(0), 0.0);
/// ```
#[must_use]
pub fn ffp_to_f64(word: u32) -> f64 {
    Ffp(word).to_f64()
}

/// A raw FFP word with accessors for its fields.
///
/// # Example
///
/// ```
/// use mesh_vs3d::Ffp;
///
/// let three = Ffp(0xC000_0042);
/// assert_eq!(three.mantissa(), 0xC0_0000);
/// assert_eq!(three.exponent(), 2);
/// assert!(!three.is_negative());
/// assert_eq!(f64::from(three), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ffp(pub u32);

impl Ffp {
    /// The 24-bit mantissa magnitude.
    #[inline]
    #[must_use]
    pub const fn mantissa(self) -> u32 {
        self.0 >> MANTISSA_SHIFT
    }

    /// The exponent with the excess-64 bias removed.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_wrap)] // masked to 7 bits
    pub const fn exponent(self) -> i32 {
        (self.0 & EXPONENT_MASK) as i32 - EXPONENT_BIAS
    }

    /// Whether the sign bit (bit 7) is set.
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 & SIGN_BIT != 0
    }

    /// Convert to a native `f64`.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        let magnitude = f64::from(self.mantissa()) * 2f64.powi(self.exponent() - MANTISSA_BITS);
        if self.is_negative() { -magnitude } else { magnitude }
    }
}

impl From<u32> for Ffp {
    fn from(word: u32) -> Self {
        Self(word)
    }
}

impl From<Ffp> for f64 {
    fn from(value: Ffp) -> Self {
        value.to_f64()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero() {
        assert_eq!(ffp_to_f64(0), 0.0);
    }

    #[test]
    fn powers_of_two() {
        assert_eq!(ffp_to_f64(0x8000_0041), 1.0);
        assert_eq!(ffp_to_f64(0x8000_0040), 0.5);
        assert_eq!(ffp_to_f64(0x8000_0042), 2.0);
        assert_eq!(ffp_to_f64(0x8000_0051), 65536.0);
    }

    #[test]
    fn sign_bit_is_bit_seven() {
        assert_eq!(ffp_to_f64(0x8000_00C1), -1.0);
        assert_eq!(ffp_to_f64(0xA000_00C4), -10.0);
    }

    #[test]
    fn fractional_mantissa() {
        // 0.625 * 2^4
        assert_eq!(ffp_to_f64(0xA000_0044), 10.0);
        // 0.75 * 2^2
        assert_eq!(ffp_to_f64(0xC000_0042), 3.0);
    }

    #[test]
    fn pi() {
        assert_relative_eq!(
            ffp_to_f64(0xC90F_DB42),
            std::f64::consts::PI,
            max_relative = 1e-7
        );
    }

    #[test]
    fn small_exponents_scale_down() {
        // 0.5 * 2^-64
        assert_eq!(ffp_to_f64(0x8000_0000), 2f64.powi(-65));
    }

    #[test]
    fn field_accessors() {
        let v = Ffp(0xFFFF_FFFF);
        assert_eq!(v.mantissa(), 0x00FF_FFFF);
        assert_eq!(v.exponent(), 63);
        assert!(v.is_negative());
        assert_eq!(Ffp::from(0x7F).exponent(), 63);
        assert_eq!(Ffp::default().exponent(), -64);
    }

    #[test]
    fn unnormalized_mantissa_is_taken_as_is() {
        // mantissa 1, exponent 24 -> 2^24 * 1 / 2^24
        assert_eq!(ffp_to_f64(0x0000_0158), 1.0);
    }
}
