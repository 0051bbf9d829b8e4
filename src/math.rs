//! Fixed-precision decimal primitives for the sunrise/sunset pipeline.
//!
//! The algorithm's output is defined in terms of base-10 arithmetic rounded to
//! four fractional digits with round-half-to-even after every multiply and
//! divide. Trigonometric functions are evaluated in `f64` and their results
//! are brought back into the decimal domain, exactly as the reference
//! implementation converts between `BigDecimal` and `double`.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Number of fractional digits kept after every multiply/divide.
pub(crate) const SCALE: u32 = 4;

/// π/180 as the shortest decimal representation of the `f64` value.
const RADIANS_PER_DEGREE: Decimal = dec!(0.017453292519943295);

/// 180/π as the shortest decimal representation of the `f64` value.
const DEGREES_PER_RADIAN: Decimal = dec!(57.29577951308232);

/// Rounds a value to the working scale with banker's rounding.
pub(crate) fn scaled(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Multiplies two values and rounds the product to the working scale.
pub(crate) fn multiply(multiplicand: Decimal, multiplier: Decimal) -> Decimal {
    scaled(multiplicand * multiplier)
}

/// Divides two values, rounding the quotient to the working scale.
pub(crate) fn divide(dividend: Decimal, divisor: Decimal) -> Decimal {
    scaled(dividend / divisor)
}

/// Converts degrees to radians, rounded to the working scale.
pub(crate) fn to_radians(degrees: Decimal) -> Decimal {
    multiply(degrees, RADIANS_PER_DEGREE)
}

/// Converts radians to degrees, rounded to the working scale.
pub(crate) fn to_degrees(radians: Decimal) -> Decimal {
    multiply(radians, DEGREES_PER_RADIAN)
}

/// Converts a decimal to `f64` for trigonometric evaluation.
pub(crate) fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Converts a finite `f64` back into the decimal domain, unscaled.
///
/// Every value fed through here is a trigonometric function result and
/// therefore finite and well within `Decimal` range.
pub(crate) fn from_f64(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Computes sin(x) for x in radians, result unscaled.
pub(crate) fn sin(radians: Decimal) -> Decimal {
    from_f64(to_f64(radians).sin())
}

/// Computes cos(x) for x in radians, result unscaled.
pub(crate) fn cos(radians: Decimal) -> Decimal {
    from_f64(to_f64(radians).cos())
}

/// Computes tan(x) for x in radians, result unscaled.
pub(crate) fn tan(radians: Decimal) -> Decimal {
    from_f64(to_f64(radians).tan())
}

/// Computes atan(x), result in radians, unscaled.
pub(crate) fn atan(value: Decimal) -> Decimal {
    from_f64(to_f64(value).atan())
}

/// Computes acos(x), result in radians, rounded to the working scale.
pub(crate) fn acos(value: Decimal) -> Decimal {
    scaled(from_f64(to_f64(value).acos()))
}

/// Computes cos(asin(x)), rounded to the working scale.
pub(crate) fn cos_of_asin(value: Decimal) -> Decimal {
    scaled(from_f64(to_f64(value).asin().cos()))
}
