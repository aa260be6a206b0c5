//! Static layout of the temple complex.
//!
//! Units are cubits-ish scene units; +Z points out of the hall's front, the
//! altar sits in the courtyard in front of it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One axis-aligned block standing on the ground.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    /// Centre X.
    pub x: f32,
    /// Centre Z.
    pub z: f32,
    /// Height. The block spans `0..h` in Y.
    pub h: f32,
    /// Width along X.
    pub w: f32,
    /// Depth along Z.
    pub d: f32,
}

impl BlockSpec {
    pub const fn new(x: f32, z: f32, h: f32, w: f32, d: f32) -> Self {
        Self { x, z, h, w, d }
    }

    /// Centre of the block; blocks stand on the ground.
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.x, self.h / 2.0, self.z)
    }

    pub fn size(&self) -> Vec3 {
        Vec3::new(self.w, self.h, self.d)
    }
}

/// Altar offset along X.
const ALTAR_X: f32 = -8.0;

/// The hall, sanctuary, stairs, altar and courtyard walls.
pub fn temple_blocks() -> Vec<BlockSpec> {
    let mut blocks = vec![
        BlockSpec::new(0.0, -15.0, 100.0, 100.0, 30.0), // hall
        BlockSpec::new(0.0, -65.0, 100.0, 70.0, 70.0),  // sanctuary
    ];

    // Stairs up to the hall, widest and lowest at the bottom
    blocks.extend([
        BlockSpec::new(0.0, 2.0, 6.0, 20.0, 4.0),
        BlockSpec::new(0.0, 2.5, 5.5, 21.0, 5.0),
        BlockSpec::new(0.0, 3.0, 5.0, 22.0, 6.0),
        BlockSpec::new(0.0, 4.5, 4.5, 23.0, 9.0),
        BlockSpec::new(0.0, 5.0, 4.0, 24.0, 10.0),
        BlockSpec::new(0.0, 5.5, 3.5, 25.0, 11.0),
        BlockSpec::new(0.0, 7.0, 3.0, 26.0, 14.0),
        BlockSpec::new(0.0, 7.5, 2.5, 27.0, 15.0),
        BlockSpec::new(0.0, 8.0, 2.0, 28.0, 16.0),
        BlockSpec::new(0.0, 9.5, 1.5, 29.0, 19.0),
        BlockSpec::new(0.0, 10.0, 1.0, 30.0, 20.0),
        BlockSpec::new(0.0, 10.5, 0.5, 31.0, 21.0),
    ]);

    // Altar: base ledges, body, top, and the four horns
    blocks.extend([
        BlockSpec::new(ALTAR_X + 15.0, 38.0, 1.0, 2.0, 32.0),
        BlockSpec::new(ALTAR_X, 53.0, 1.0, 32.0, 2.0),
        BlockSpec::new(ALTAR_X, 38.0, 6.0, 30.0, 30.0),
        BlockSpec::new(ALTAR_X, 38.0, 9.0, 28.0, 28.0),
        BlockSpec::new(ALTAR_X + 13.5, 24.5, 10.0, 1.0, 1.0),
        BlockSpec::new(ALTAR_X - 13.5, 24.5, 10.0, 1.0, 1.0),
        BlockSpec::new(ALTAR_X + 13.5, 51.5, 10.0, 1.0, 1.0),
        BlockSpec::new(ALTAR_X - 13.5, 51.5, 10.0, 1.0, 1.0),
    ]);

    // Courtyard walls
    blocks.extend([
        BlockSpec::new(-68.5, -17.5, 23.0, 2.0, 187.0),
        BlockSpec::new(68.5, -17.5, 23.0, 2.0, 187.0),
        BlockSpec::new(0.0, 77.0, 23.0, 139.0, 2.0),
        BlockSpec::new(0.0, -112.0, 23.0, 139.0, 2.0),
    ]);

    blocks
}

/// Corners of a box of `size` centred on the origin, reshaped into a ramp:
/// the bottom face is moved up to `y = 0` and the top edge on the `-X` side
/// is pulled down to the ground. Corners are in bit order (bit 0 = +X,
/// bit 1 = +Y, bit 2 = +Z).
pub fn ramp_vertices(size: Vec3) -> [Vec3; 8] {
    let half = size / 2.0;
    std::array::from_fn(|i| {
        let x = if i & 1 != 0 { half.x } else { -half.x };
        let y = if i & 2 != 0 { half.y } else { -half.y };
        let z = if i & 4 != 0 { half.z } else { -half.z };
        let y = if y < 0.0 || (x < 0.0 && y > 0.0) { 0.0 } else { y };
        Vec3::new(x, y, z)
    })
}

/// The ring grid painted on the slaughter area floor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingGridSpec {
    /// Corner of the grid on the XZ plane.
    pub origin: [f32; 2],
    pub width: f32,
    pub depth: f32,
    /// Cells along X.
    pub columns: u32,
    /// Cells along Z.
    pub rows: u32,
    /// Lift above the ground to avoid z-fighting.
    pub height: f32,
}

impl Default for RingGridSpec {
    fn default() -> Self {
        Self {
            origin: [16.0, 22.0],
            width: 24.0,
            depth: 32.0,
            columns: 4,
            rows: 6,
            height: 0.1,
        }
    }
}

/// One continuous polyline tracing the grid outline and every inner line.
pub fn ring_grid_points(spec: &RingGridSpec) -> Vec<Vec3> {
    let [x0, z0] = spec.origin;
    let (w, d) = (spec.width, spec.depth);
    let p = |x: f32, z: f32| Vec3::new(x0 + x, spec.height, z0 + z);

    let mut points = vec![p(0.0, 0.0), p(w, 0.0), p(w, d), p(0.0, d), p(0.0, 0.0)];

    // Inner column lines, snaking between the near and far edges
    let mut at_far = false;
    for i in 1..spec.columns {
        let x = w * i as f32 / spec.columns as f32;
        if at_far {
            points.extend([p(x, d), p(x, 0.0)]);
        } else {
            points.extend([p(x, 0.0), p(x, d)]);
        }
        at_far = !at_far;
    }
    points.push(p(w, if at_far { d } else { 0.0 }));

    // Inner row lines, walking back from whichever edge we ended on
    let rows: Vec<u32> = if at_far {
        (1..spec.rows).rev().collect()
    } else {
        (1..spec.rows).collect()
    };
    let mut at_right = true;
    for j in rows {
        let z = d * j as f32 / spec.rows as f32;
        if at_right {
            points.extend([p(w, z), p(0.0, z)]);
        } else {
            points.extend([p(0.0, z), p(w, z)]);
        }
        at_right = !at_right;
    }

    points
}
