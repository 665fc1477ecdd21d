// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh vertex with a late-bound identifier

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Vertex in the floor-plan frame (x, y horizontal, z up).
///
/// The identifier is written once by the identifier pass of the floor builder;
/// positions may only change before that pass runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point3<f64>,
    id: Option<usize>,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_point(Point3::new(x, y, z))
    }

    pub fn from_point(position: Point3<f64>) -> Self {
        Self { position, id: None }
    }

    pub fn id(&self) -> Option<usize> {
        self.id
    }

    pub fn set_id(&mut self, id: usize) {
        debug_assert!(self.id.is_none(), "vertex identifier assigned twice");
        self.id = Some(id);
    }

    /// Render as an OBJ `v` line (without newline).
    ///
    /// The vertical and depth axes are swapped: output order is x, z, y.
    pub fn vertex_text(&self) -> String {
        format!(
            "v {} {} {}",
            fmt_coord(self.position.x),
            fmt_coord(self.position.z),
            fmt_coord(self.position.y)
        )
    }
}

/// Shortest round-trip formatting; `-0` is printed as `0`.
fn fmt_coord(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_text_swaps_y_and_z() {
        let vertex = Vertex::new(1.5, 2.0, 3.25);
        assert_eq!(vertex.vertex_text(), "v 1.5 3.25 2");
    }

    #[test]
    fn test_vertex_text_negative_zero() {
        let vertex = Vertex::new(-0.0, -1.0, 0.0);
        assert_eq!(vertex.vertex_text(), "v 0 0 -1");
    }

    #[test]
    fn test_id_starts_unassigned() {
        let mut vertex = Vertex::new(0.0, 0.0, 0.0);
        assert_eq!(vertex.id(), None);
        vertex.set_id(7);
        assert_eq!(vertex.id(), Some(7));
    }
}
