//! Background layers of the four promo scenes, 1920x1080 at 30 fps.

use crate::{
    assets::color::Color,
    foundation::{
        core::{Canvas, Fps, FrameIndex},
        error::{GlowfieldError, GlowfieldResult},
    },
    scene::model::{BackdropDef, LayerDef, NodesDef, OrbsDef},
};

/// Deep navy shared by every scene.
pub const SCENE_BACKGROUND: Color = Color::rgb(0x0b, 0x13, 0x2b);

/// Preset names accepted by [`preset`].
pub const PRESET_NAMES: [&str; 4] = ["opening", "reveal", "features", "closing"];

fn base(duration: u64, layers: Vec<LayerDef>) -> BackdropDef {
    BackdropDef {
        canvas: Canvas {
            width: 1920,
            height: 1080,
        },
        fps: Fps { num: 30, den: 1 },
        duration: FrameIndex(duration),
        background: Some(SCENE_BACKGROUND),
        layers,
    }
}

fn orbs(colors: &[Color], count: usize) -> LayerDef {
    LayerDef::Orbs(OrbsDef {
        colors: colors.to_vec(),
        count,
    })
}

fn nodes(count: usize) -> LayerDef {
    LayerDef::Nodes(NodesDef {
        count,
        ..NodesDef::default()
    })
}

/// Title reveal: five orbs under a 35-node graph.
pub fn opening() -> BackdropDef {
    base(
        105,
        vec![
            orbs(
                &[
                    Color::rgba(0x1c, 0x25, 0x41, 0x80),
                    Color::rgba(0x5b, 0xc0, 0xbe, 0x30),
                    Color::rgba(0x3a, 0x50, 0x6b, 0x50),
                    SCENE_BACKGROUND,
                ],
                5,
            ),
            nodes(35),
        ],
    )
}

/// Version reveal: four subtle orbs.
pub fn reveal() -> BackdropDef {
    base(
        105,
        vec![orbs(
            &[
                Color::rgba(0x1c, 0x25, 0x41, 0x60),
                Color::rgba(0x5b, 0xc0, 0xbe, 0x20),
                Color::rgba(0x3a, 0x50, 0x6b, 0x40),
            ],
            4,
        )],
    )
}

/// Feature callouts: three faint orbs.
pub fn features() -> BackdropDef {
    base(
        120,
        vec![orbs(
            &[
                Color::rgba(0x1c, 0x25, 0x41, 0x40),
                Color::rgba(0x5b, 0xc0, 0xbe, 0x15),
                Color::rgba(0x3a, 0x50, 0x6b, 0x30),
            ],
            3,
        )],
    )
}

/// Closing branding: four orbs under a 20-node graph.
pub fn closing() -> BackdropDef {
    base(
        120,
        vec![
            orbs(
                &[
                    Color::rgba(0x1c, 0x25, 0x41, 0x50),
                    Color::rgba(0x5b, 0xc0, 0xbe, 0x15),
                    Color::rgba(0x3a, 0x50, 0x6b, 0x30),
                ],
                4,
            ),
            nodes(20),
        ],
    )
}

/// Look up a preset by name.
pub fn preset(name: &str) -> GlowfieldResult<BackdropDef> {
    match name {
        "opening" => Ok(opening()),
        "reveal" => Ok(reveal()),
        "features" => Ok(features()),
        "closing" => Ok(closing()),
        other => Err(GlowfieldError::validation(format!(
            "unknown preset '{other}' (expected one of: {})",
            PRESET_NAMES.join(", ")
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/presets.rs"]
mod tests;
