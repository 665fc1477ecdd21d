// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Wall extrusion into an axis-aligned box

use super::{Face, ShapeMesh, Vertex};
use crate::error::{FloorMeshError, Result};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// How the two run-axis ends of a wall are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndCapPolicy {
    /// Ends sit exactly on the wall endpoints and are later extended by the
    /// half-thickness of the wall they meet.
    #[default]
    NeighborAdjusted,
    /// Both ends are padded by the wall's own half-thickness; no neighbour pass.
    Symmetric,
}

impl EndCapPolicy {
    pub fn adjusts_neighbours(self) -> bool {
        matches!(self, Self::NeighborAdjusted)
    }
}

impl std::str::FromStr for EndCapPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "neighbor-adjusted" | "neighbour-adjusted" | "adjusted" => Ok(Self::NeighborAdjusted),
            "symmetric" => Ok(Self::Symmetric),
            other => Err(format!(
                "unknown end cap policy: {} (expected neighbor-adjusted or symmetric)",
                other
            )),
        }
    }
}

// Vertex arena order: v000, v100, v010, v110, v001, v101, v011, v111
// (bit order x, y, z; 0 = left/down/floor, 1 = right/up/top).
const BOX_FACES: [[usize; 4]; 6] = [
    [5, 7, 6, 4], // top
    [1, 3, 7, 5], // right
    [0, 2, 3, 1], // bottom
    [4, 6, 2, 0], // left
    [7, 3, 2, 6], // back
    [1, 5, 4, 0], // front
];

/// Wall segment extruded into a box with 8 vertices and 6 quad faces.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    mesh: ShapeMesh,
    thickness: f64,
    axis_is_y: bool,
    original: [Point3<f64>; 4],
}

impl Cuboid {
    /// Build a wall box from its four plan points and thickness.
    ///
    /// Points 0 and 1 are the floor-level endpoints of the wall centerline,
    /// points 2 and 3 the matching top points. The wall runs along y when
    /// points 0 and 3 share the same x (exact comparison), otherwise along x.
    pub fn from_points(points: &[Point3<f64>], thickness: f64, policy: EndCapPolicy) -> Result<Self> {
        let original: [Point3<f64>; 4] = points.try_into().map_err(|_| {
            FloorMeshError::InvalidGeometry(format!(
                "wall needs exactly 4 points, got {}",
                points.len()
            ))
        })?;

        let first = original[0];
        let fourth = original[3];
        let axis_is_y = first.x == fourth.x;
        let half = thickness / 2.0;

        // Footprint before any end treatment: cross axis offset by half the
        // thickness, run axis spanning the raw endpoints.
        let (x_left, x_right) = if axis_is_y {
            (first.x - half, first.x + half)
        } else {
            ordered(first.x, fourth.x)
        };
        let (y_down, y_up) = if axis_is_y {
            ordered(first.y, fourth.y)
        } else {
            (first.y - half, first.y + half)
        };

        let pad = if policy.adjusts_neighbours() { 0.0 } else { half };
        let (xs, ys) = if axis_is_y {
            ([x_left, x_right], [y_down - pad, y_up + pad])
        } else {
            ([x_left - pad, x_right + pad], [y_down, y_up])
        };
        let raw_xs = [x_left, x_right];
        let raw_ys = [y_down, y_up];

        let mut vertices = Vec::with_capacity(8);
        for top in [false, true] {
            for yi in 0..2 {
                for xi in 0..2 {
                    let z = if top {
                        corner_height(axis_is_y, &original, raw_xs[xi], raw_ys[yi])
                    } else {
                        0.0
                    };
                    vertices.push(Vertex::new(xs[xi], ys[yi], z));
                }
            }
        }

        let faces = BOX_FACES
            .iter()
            .map(|indices| Face::quad(indices))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            mesh: ShapeMesh::new(vertices, faces),
            thickness,
            axis_is_y,
            original,
        })
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// True when the wall runs along the y axis.
    pub fn axis_is_y(&self) -> bool {
        self.axis_is_y
    }

    /// The four input points, untouched by any adjustment.
    pub fn original_points(&self) -> &[Point3<f64>; 4] {
        &self.original
    }

    /// Floor-level start and end of the centerline used for junction matching.
    pub fn endpoints(&self) -> (Point3<f64>, Point3<f64>) {
        (self.original[0], self.original[3])
    }

    pub fn mesh(&self) -> &ShapeMesh {
        &self.mesh
    }

    pub(crate) fn mesh_mut(&mut self) -> &mut ShapeMesh {
        &mut self.mesh
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.mesh.vertices
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Height of a top corner, looked up on the unpadded footprint.
///
/// A corner on the start of the run takes the start-top height (point 2);
/// every other corner takes the end-top height (point 3).
fn corner_height(axis_is_y: bool, original: &[Point3<f64>; 4], x: f64, y: f64) -> f64 {
    let at_start = if axis_is_y {
        original[0].y == y
    } else {
        original[0].x == x
    };
    if at_start {
        original[2].z
    } else {
        original[3].z
    }
}
