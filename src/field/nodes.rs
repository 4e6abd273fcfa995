//! Node graph: small pulsing points joined by proximity connections.

use std::{borrow::Cow, collections::HashMap, sync::Arc};

use crate::{
    animation::interp::fade_in_opacity,
    assets::color::Color,
    display::{Dot, Layer, LayerKind, LineSegment, Primitive},
    field::FrameCtx,
    foundation::{
        core::{Canvas, Point},
        math::{unit_cos, unit_sin},
    },
};

/// Nodes closer than this (strictly) are connected.
pub const CONNECTION_DISTANCE: f64 = 200.0;
/// Opacity of a connection between coincident nodes.
pub const CONNECTION_MAX_OPACITY: f64 = 0.3;
/// Connection stroke width in pixels.
pub const CONNECTION_WIDTH: f64 = 1.0;

const DRIFT_X: f64 = 30.0;
const DRIFT_Y: f64 = 20.0;

/// Frame-independent attributes of one node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSeed {
    /// Position in the generated sequence.
    pub index: usize,
    /// Resting position in canvas space.
    pub base: Point,
    /// Radius before pulsing, in `[2, 6]`.
    pub size: f64,
    /// Oscillation rate, in `[0.3, 1.0]`.
    pub speed: f64,
    /// Oscillation offset.
    pub phase: f64,
    /// Opacity before pulsing, in `[0.3, 1.0]`.
    pub opacity: f64,
}

impl NodeSeed {
    /// Derive the seed for `index` on `canvas`.
    pub fn new(index: usize, canvas: Canvas) -> Self {
        let i = index as f64;
        Self {
            index,
            base: Point::new(
                unit_sin(i * 7.3 + 1.2) * canvas.width_f64(),
                unit_cos(i * 5.1 + 3.4) * canvas.height_f64(),
            ),
            size: 2.0 + unit_sin(i * 3.7) * 4.0,
            speed: 0.3 + unit_sin(i * 2.1) * 0.7,
            phase: i * 0.8,
            opacity: 0.3 + unit_cos(i * 4.2) * 0.7,
        }
    }

    /// Animated position at `time` seconds.
    pub fn position(&self, time: f64) -> Point {
        let t = time * self.speed;
        Point::new(
            self.base.x + (t + self.phase).sin() * DRIFT_X,
            self.base.y + (t * 0.7 + self.phase).cos() * DRIFT_Y,
        )
    }

    /// Whether this node takes the secondary color (every third node, starting at 0).
    pub fn is_accent(&self) -> bool {
        self.index % 3 == 0
    }
}

/// Pulse multiplier at `time` seconds for a node with `phase`, in `[0.4, 1.0]`.
pub fn pulse(time: f64, phase: f64) -> f64 {
    (time * 2.0 + phase).sin() * 0.3 + 0.7
}

/// Generate `count` node seeds for `canvas`.
pub fn node_seeds(count: usize, canvas: Canvas) -> Vec<NodeSeed> {
    (0..count).map(|i| NodeSeed::new(i, canvas)).collect()
}

/// Strategy used to find node pairs within [`CONNECTION_DISTANCE`].
///
/// Both strategies yield the same connections in the same order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionScan {
    /// Check every unordered pair.
    #[default]
    Pairwise,
    /// Bucket nodes into a uniform grid and only check neighboring cells.
    Grid,
}

/// A connection between nodes `a < b` for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Connection {
    /// Lower node index.
    pub a: usize,
    /// Higher node index.
    pub b: usize,
    /// Position of node `a`.
    pub from: Point,
    /// Position of node `b`.
    pub to: Point,
    /// Euclidean distance between the endpoints.
    pub distance: f64,
    /// Line opacity, `(1 - distance / CONNECTION_DISTANCE) * CONNECTION_MAX_OPACITY`.
    pub opacity: f64,
}

fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Opacity of a connection spanning `distance`, or `None` at or beyond the threshold.
pub fn connection_opacity(distance: f64) -> Option<f64> {
    (distance < CONNECTION_DISTANCE)
        .then(|| (1.0 - distance / CONNECTION_DISTANCE) * CONNECTION_MAX_OPACITY)
}

fn connect(positions: &[Point], a: usize, b: usize) -> Option<Connection> {
    let (from, to) = (positions[a], positions[b]);
    let d = distance(from, to);
    connection_opacity(d).map(|opacity| Connection {
        a,
        b,
        from,
        to,
        distance: d,
        opacity,
    })
}

/// Find every pair of `positions` closer than [`CONNECTION_DISTANCE`], ordered by `(a, b)`.
pub fn derive_connections(positions: &[Point], scan: ConnectionScan) -> Vec<Connection> {
    match scan {
        ConnectionScan::Pairwise => scan_pairwise(positions),
        ConnectionScan::Grid => scan_grid(positions),
    }
}

fn scan_pairwise(positions: &[Point]) -> Vec<Connection> {
    let mut out = Vec::new();
    for a in 0..positions.len() {
        for b in (a + 1)..positions.len() {
            if let Some(c) = connect(positions, a, b) {
                out.push(c);
            }
        }
    }
    out
}

fn scan_grid(positions: &[Point]) -> Vec<Connection> {
    fn cell_of(p: Point) -> (i64, i64) {
        (
            (p.x / CONNECTION_DISTANCE).floor() as i64,
            (p.y / CONNECTION_DISTANCE).floor() as i64,
        )
    }

    let mut cells: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
    for (i, &p) in positions.iter().enumerate() {
        cells.entry(cell_of(p)).or_default().push(i);
    }

    let mut out = Vec::new();
    let mut candidates = Vec::new();
    for (a, &p) in positions.iter().enumerate() {
        let (cx, cy) = cell_of(p);
        candidates.clear();
        for dy in -1..=1 {
            for dx in -1..=1 {
                let Some(bucket) = cells.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                candidates.extend(bucket.iter().copied().filter(|&b| b > a));
            }
        }
        candidates.sort_unstable();
        for &b in &candidates {
            if let Some(c) = connect(positions, a, b) {
                out.push(c);
            }
        }
    }
    out
}

/// A node resolved at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NodeInstance {
    /// Position in the generated sequence.
    pub index: usize,
    /// Animated center.
    pub center: Point,
    /// Pulse multiplier applied to radius and opacity.
    pub pulse: f64,
    /// Rendered radius (`size * pulse`).
    pub radius: f64,
    /// Rendered opacity (`opacity * pulse`).
    pub opacity: f64,
    /// Fill color.
    pub color: Color,
}

/// The evaluated graph for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NodeGraphFrame {
    /// Nodes in index order.
    pub nodes: Vec<NodeInstance>,
    /// Connections ordered by `(a, b)`.
    pub connections: Vec<Connection>,
    /// Layer-wide fade-in.
    pub opacity: f64,
}

/// Parameters of a node graph.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeFieldParams {
    /// Color of most nodes and of every connection.
    pub primary: Color,
    /// Color of every third node.
    pub secondary: Color,
    /// Number of nodes.
    pub count: usize,
    /// Compute and draw connections.
    pub show_connections: bool,
    /// Connection search strategy.
    pub scan: ConnectionScan,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct SeedKey {
    count: usize,
    canvas: Canvas,
}

/// A configured node graph with its base attributes cached per `(count, canvas)`.
#[derive(Clone, Debug)]
pub struct NodeField {
    params: NodeFieldParams,
    key: SeedKey,
    seeds: Arc<[NodeSeed]>,
}

impl NodeField {
    /// Build the field and derive its seeds for `canvas`.
    pub fn new(params: NodeFieldParams, canvas: Canvas) -> Self {
        let key = SeedKey {
            count: params.count,
            canvas,
        };
        let seeds = node_seeds(key.count, key.canvas).into();
        Self { params, key, seeds }
    }

    /// Field parameters.
    pub fn params(&self) -> &NodeFieldParams {
        &self.params
    }

    /// Cached seeds.
    pub fn seeds(&self) -> &[NodeSeed] {
        &self.seeds
    }

    /// Canvas the cached seeds were derived for.
    pub fn canvas(&self) -> Canvas {
        self.key.canvas
    }

    /// Change the node count, re-deriving seeds only when it differs.
    pub fn set_count(&mut self, count: usize) {
        self.params.count = count;
        self.rekey(SeedKey { count, ..self.key });
    }

    /// Move the field to another canvas, re-deriving seeds only when it differs.
    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.rekey(SeedKey { canvas, ..self.key });
    }

    fn rekey(&mut self, key: SeedKey) {
        if key == self.key {
            return;
        }
        tracing::debug!(
            count = key.count,
            width = key.canvas.width,
            height = key.canvas.height,
            "rebuilding node seeds"
        );
        self.seeds = node_seeds(key.count, key.canvas).into();
        self.key = key;
    }

    /// Seeds for `canvas`, borrowed from the cache when it matches.
    fn seeds_for(&self, canvas: Canvas) -> Cow<'_, [NodeSeed]> {
        if canvas == self.key.canvas {
            Cow::Borrowed(&*self.seeds)
        } else {
            Cow::Owned(node_seeds(self.params.count, canvas))
        }
    }

    /// Evaluate nodes, connections and fade-in at `ctx`.
    pub fn graph(&self, ctx: &FrameCtx) -> NodeGraphFrame {
        let time = ctx.time_secs();
        let seeds = self.seeds_for(ctx.canvas);

        let positions: Vec<Point> = seeds.iter().map(|s| s.position(time)).collect();

        let connections = if self.params.show_connections {
            derive_connections(&positions, self.params.scan)
        } else {
            Vec::new()
        };

        let nodes = seeds
            .iter()
            .zip(&positions)
            .map(|(seed, &center)| {
                let p = pulse(time, seed.phase);
                NodeInstance {
                    index: seed.index,
                    center,
                    pulse: p,
                    radius: seed.size * p,
                    opacity: seed.opacity * p,
                    color: if seed.is_accent() {
                        self.params.secondary
                    } else {
                        self.params.primary
                    },
                }
            })
            .collect();

        NodeGraphFrame {
            nodes,
            connections,
            opacity: fade_in_opacity(ctx.frame.0),
        }
    }

    /// Evaluate the field into a display layer: connections first, then nodes.
    pub fn layer(&self, ctx: &FrameCtx) -> Layer {
        let graph = self.graph(ctx);
        let mut primitives = Vec::with_capacity(graph.connections.len() + graph.nodes.len());

        primitives.extend(graph.connections.iter().map(|c| {
            Primitive::Line(LineSegment {
                from: c.from,
                to: c.to,
                width: CONNECTION_WIDTH,
                color: self.params.primary,
                opacity: c.opacity,
            })
        }));
        primitives.extend(graph.nodes.iter().map(|n| {
            Primitive::Dot(Dot {
                center: n.center,
                radius: n.radius,
                color: n.color,
                opacity: n.opacity,
            })
        }));

        Layer {
            kind: LayerKind::Nodes,
            opacity: graph.opacity,
            primitives,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/nodes.rs"]
mod tests;
