use std::io::Read;

use crate::{
    assets::color::Color,
    field::nodes::ConnectionScan,
    foundation::{
        core::{Canvas, Fps, FrameIndex},
        error::{GlowfieldError, GlowfieldResult},
    },
};

/// A background definition: output format plus an ordered stack of generator layers.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BackdropDef {
    /// Output canvas.
    pub canvas: Canvas,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Total frames.
    pub duration: FrameIndex,
    /// Solid fill under all layers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Generator layers, back to front.
    #[serde(default)]
    pub layers: Vec<LayerDef>,
}

/// One generator layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerDef {
    /// Particle field.
    Orbs(OrbsDef),
    /// Node graph.
    Nodes(NodesDef),
}

/// Particle field parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrbsDef {
    /// Palette, assigned cyclically by orb index.
    #[serde(default = "default_orb_colors")]
    pub colors: Vec<Color>,
    /// Number of orbs.
    #[serde(default = "default_orb_count")]
    pub count: usize,
}

/// Node graph parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodesDef {
    /// Color of most nodes and of all connections.
    #[serde(default = "default_node_primary")]
    pub primary: Color,
    /// Color of every third node.
    #[serde(default = "default_node_secondary")]
    pub secondary: Color,
    /// Number of nodes.
    #[serde(default = "default_node_count")]
    pub count: usize,
    /// Draw proximity connections.
    #[serde(default = "default_true")]
    pub show_connections: bool,
    /// Connection search strategy.
    #[serde(default)]
    pub scan: ConnectionScan,
}

impl Default for OrbsDef {
    fn default() -> Self {
        Self {
            colors: default_orb_colors(),
            count: default_orb_count(),
        }
    }
}

impl Default for NodesDef {
    fn default() -> Self {
        Self {
            primary: default_node_primary(),
            secondary: default_node_secondary(),
            count: default_node_count(),
            show_connections: true,
            scan: ConnectionScan::default(),
        }
    }
}

fn default_orb_colors() -> Vec<Color> {
    vec![
        Color::rgb(0x0b, 0x13, 0x2b),
        Color::rgb(0x1c, 0x25, 0x41),
        Color::rgb(0x5b, 0xc0, 0xbe),
        Color::rgb(0x3a, 0x50, 0x6b),
    ]
}

fn default_orb_count() -> usize {
    6
}

fn default_node_primary() -> Color {
    Color::rgb(0x5b, 0xc0, 0xbe)
}

fn default_node_secondary() -> Color {
    Color::rgb(0x6f, 0xff, 0xe9)
}

fn default_node_count() -> usize {
    40
}

fn default_true() -> bool {
    true
}

impl BackdropDef {
    /// Parse JSON from `reader` and validate it.
    pub fn from_reader<R: Read>(reader: R) -> GlowfieldResult<Self> {
        let def: Self = serde_json::from_reader(reader)
            .map_err(|e| GlowfieldError::serde(format!("parse backdrop JSON: {e}")))?;
        def.validate()?;
        Ok(def)
    }

    /// Parse a JSON string and validate it.
    pub fn from_json_str(s: &str) -> GlowfieldResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> GlowfieldResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GlowfieldError::serde(format!("serialize backdrop JSON: {e}")))
    }

    /// Check structural constraints. Layer parameters are never rejected: zero counts and
    /// empty palettes simply produce empty layers.
    pub fn validate(&self) -> GlowfieldResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(GlowfieldError::validation("fps must have num>0 and den>0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(GlowfieldError::validation(
                "canvas width/height must be > 0",
            ));
        }
        if self.duration.0 == 0 {
            return Err(GlowfieldError::validation("duration must be > 0 frames"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
