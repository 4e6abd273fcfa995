/// Straight-alpha colors and hex parsing.
pub mod color;
