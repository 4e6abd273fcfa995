use crate::{
    display::DisplayList,
    field::{
        FrameCtx,
        nodes::{NodeField, NodeFieldParams},
        orbs::OrbField,
    },
    foundation::{
        core::{Canvas, FrameIndex},
        error::{GlowfieldError, GlowfieldResult},
    },
    scene::model::{BackdropDef, LayerDef},
};

#[derive(Clone, Debug)]
enum LayerGen {
    Orbs(OrbField),
    Nodes(NodeField),
}

impl LayerGen {
    fn build(def: &LayerDef, canvas: Canvas) -> Self {
        match def {
            LayerDef::Orbs(o) => Self::Orbs(OrbField::new(o.colors.clone(), o.count)),
            LayerDef::Nodes(n) => Self::Nodes(NodeField::new(
                NodeFieldParams {
                    primary: n.primary,
                    secondary: n.secondary,
                    count: n.count,
                    show_connections: n.show_connections,
                    scan: n.scan,
                },
                canvas,
            )),
        }
    }
}

/// A validated backdrop ready for frame evaluation.
///
/// Construction derives the node base attributes once; evaluation only reads them, so a single
/// `Backdrop` can be shared across threads and queried for frames in any order.
#[derive(Clone, Debug)]
pub struct Backdrop {
    def: BackdropDef,
    layers: Vec<LayerGen>,
}

impl Backdrop {
    /// Validate `def` and build its layer generators.
    pub fn new(def: BackdropDef) -> GlowfieldResult<Self> {
        def.validate()?;
        let layers = def
            .layers
            .iter()
            .map(|l| LayerGen::build(l, def.canvas))
            .collect();
        Ok(Self { def, layers })
    }

    /// The definition this backdrop was built from.
    pub fn def(&self) -> &BackdropDef {
        &self.def
    }

    /// Evaluate the display list at `frame`.
    #[tracing::instrument(skip(self), fields(layers = self.layers.len()))]
    pub fn eval_frame(&self, frame: FrameIndex) -> GlowfieldResult<DisplayList> {
        if frame.0 >= self.def.duration.0 {
            return Err(GlowfieldError::evaluation(format!(
                "frame {} is out of range (duration {})",
                frame.0, self.def.duration.0
            )));
        }

        let ctx = FrameCtx {
            frame,
            fps: self.def.fps,
            canvas: self.def.canvas,
        };
        let layers = self
            .layers
            .iter()
            .map(|l| match l {
                LayerGen::Orbs(f) => f.layer(&ctx),
                LayerGen::Nodes(f) => f.layer(&ctx),
            })
            .collect();

        Ok(DisplayList {
            frame,
            canvas: self.def.canvas,
            background: self.def.background,
            layers,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
