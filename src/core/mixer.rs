//! Byte mixer — the nonlinear stage between the two digests
//!
//! Each byte `b` is mapped onto `x = b / 255 * π`, fed through
//!
//! ```text
//! f(x) = x^sin(x) * 63^x + 1/x
//! ```
//!
//! and the low 8 bits of `trunc(f(x) * 1e5)` are XORed back into the byte.
//! Positions are updated left to right, in place, and every round reads the
//! output of the previous one.
//!
//! When the primary formula is not finite the `63^x` term is replaced by a
//! fixed `1e10`. For bytes in `[0, 255]` this never happens, but the branch is
//! part of the algorithm and is reachable through [`integral_mix`].

use std::f64::consts::PI;

use tracing::trace;

use crate::consts::{FALLBACK_FACTOR, PRIMARY_BASE, SCALE, ZERO_EPSILON};

/// Which formula produced a mixing scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixFormula {
    /// `x^sin(x) * 63^x + 1/x`
    Primary,
    /// `x^sin(x) * 1e10 + 1/x`, used when the primary result is NaN or ±inf
    Fallback,
}

/// Output of the mixing function for one `x`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixScalar {
    pub value: f64,
    pub formula: MixFormula,
}

/// Map a byte onto `[0, π]`
#[inline]
pub fn normalize_byte(byte: u8) -> f64 {
    (f64::from(byte) / 255.0) * PI
}

/// Evaluate the mixing function at `x`.
///
/// `x == 0` (either sign) is replaced by `1e-10` first.
pub fn integral_mix(x: f64) -> MixScalar {
    let x = if x == 0.0 { ZERO_EPSILON } else { x };
    let head = x.powf(x.sin());

    let primary = head * PRIMARY_BASE.powf(x) + 1.0 / x;
    if primary.is_finite() {
        return MixScalar {
            value: primary,
            formula: MixFormula::Primary,
        };
    }

    trace!(x = x, primary = primary, "primary mix formula not finite, using fallback");
    MixScalar {
        value: head * FALLBACK_FACTOR + 1.0 / x,
        formula: MixFormula::Fallback,
    }
}

/// Low 8 bits of `trunc(value * 1e5)` as a signed 64-bit integer.
///
/// `as i64` truncates toward zero (saturating, NaN becomes 0) and `as u8`
/// keeps the two's complement low byte, so negative inputs reduce the same
/// way as positive ones.
#[inline]
pub fn scale_to_byte(value: f64) -> u8 {
    let scaled = (value * SCALE) as i64;
    scaled as u8
}

/// One byte through one round
#[inline]
pub fn mix_byte(byte: u8) -> u8 {
    let scalar = integral_mix(normalize_byte(byte));
    byte ^ scale_to_byte(scalar.value)
}

/// Mix `data` in place for `rounds` rounds. Length never changes.
pub fn mix_in_place(data: &mut [u8], rounds: u32) {
    for _ in 0..rounds {
        for byte in data.iter_mut() {
            *byte = mix_byte(*byte);
        }
    }
}

/// Mix a copy of `data`; the input is left untouched
pub fn mix(data: &[u8], rounds: u32) -> Vec<u8> {
    let mut out = data.to_vec();
    mix_in_place(&mut out, rounds);
    out
}
