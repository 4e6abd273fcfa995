/// Map a sine wave into `[0, 1]`: `sin(x) * 0.5 + 0.5`.
///
/// Generators feed it `i * k + c` with fixed constants per attribute. The result is a
/// reproducible spread over the index, not a random sequence.
pub(crate) fn unit_sin(x: f64) -> f64 {
    x.sin() * 0.5 + 0.5
}

/// Cosine counterpart of [`unit_sin`].
pub(crate) fn unit_cos(x: f64) -> f64 {
    x.cos() * 0.5 + 0.5
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Quantize a unit float to a byte, clamping out-of-range input.
pub(crate) fn unit_to_u8(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
