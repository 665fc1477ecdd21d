// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Flat area outline

use super::{Face, ShapeMesh, Vertex};
use crate::error::Result;
use nalgebra::Point3;

/// Area outline: one vertex per input point and a single face in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    mesh: ShapeMesh,
}

impl Polygon {
    pub fn from_points(points: &[Point3<f64>]) -> Result<Self> {
        let vertices: Vec<Vertex> = points.iter().copied().map(Vertex::from_point).collect();
        let face = Face::polygon((0..vertices.len()).collect())?;
        Ok(Self {
            mesh: ShapeMesh::new(vertices, vec![face]),
        })
    }

    pub fn mesh(&self) -> &ShapeMesh {
        &self.mesh
    }

    pub(crate) fn mesh_mut(&mut self) -> &mut ShapeMesh {
        &mut self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pentagon_single_face() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(5.0, 3.0, 0.0),
            Point3::new(2.0, 5.0, 0.0),
            Point3::new(-1.0, 3.0, 0.0),
        ];
        let polygon = Polygon::from_points(&points).unwrap();

        assert_eq!(polygon.mesh().vertex_count(), 5);
        assert_eq!(polygon.mesh().face_count(), 1);
        assert_eq!(polygon.mesh().faces[0].indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(polygon.mesh().vertices[2].position, points[2]);
    }

    #[test]
    fn test_degenerate_outline_rejected() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        assert!(Polygon::from_points(&points).is_err());
    }
}
