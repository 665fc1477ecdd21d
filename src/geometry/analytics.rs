// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Floor mesh analytics and statistics

use super::{BoundingBox, Shape, ShapeKind, ShapeMesh};
use serde::Serialize;
use std::collections::HashMap;

/// Statistics over the shapes of one floor
#[derive(Debug, Clone, Serialize)]
pub struct FloorStats {
    /// Number of wall boxes
    pub wall_count: usize,
    /// Number of area polygons
    pub area_count: usize,
    /// Total vertices across all shapes
    pub vertex_count: usize,
    /// Total faces across all shapes
    pub face_count: usize,
    /// Summed volume of all wall boxes
    pub wall_volume: f64,
    /// Summed area of all area polygons (plan projection)
    pub floor_area: f64,
    /// Bounds of every vertex, in the plan frame
    pub bbox: BoundingBox,
    /// Wall edges without exactly one opposite partner
    pub open_edges: usize,
    /// Are all walls closed boxes?
    pub is_closed: bool,
}

impl FloorStats {
    /// Pretty print statistics
    pub fn print(&self) {
        let size = self.bbox.size();
        println!("╔══════════════════════════════════════════════════════════╗");
        println!("║              FLOOR ANALYTICS                             ║");
        println!("╠══════════════════════════════════════════════════════════╣");
        println!("║ Walls:           {:>10}                              ║", self.wall_count);
        println!("║ Areas:           {:>10}                              ║", self.area_count);
        println!("║ Vertices:        {:>10}                              ║", self.vertex_count);
        println!("║ Faces:           {:>10}                              ║", self.face_count);
        println!("║ Wall volume:     {:>10.4}                              ║", self.wall_volume);
        println!("║ Floor area:      {:>10.4}                              ║", self.floor_area);
        println!(
            "║ Size: {:>9.2} × {:>9.2} × {:>9.2}                    ║",
            size.x, size.y, size.z
        );
        println!(
            "║ Closed walls:    {:>10}                              ║",
            if self.is_closed { "Yes" } else { "No" }
        );
        println!("╚══════════════════════════════════════════════════════════╝");
    }
}

/// Analyze a list of shapes
pub fn analyze(shapes: &[Shape]) -> FloorStats {
    let mut stats = FloorStats {
        wall_count: 0,
        area_count: 0,
        vertex_count: 0,
        face_count: 0,
        wall_volume: 0.0,
        floor_area: 0.0,
        bbox: BoundingBox::from_vertices(shapes.iter().flat_map(|s| s.vertices())),
        open_edges: 0,
        is_closed: true,
    };

    for shape in shapes {
        let mesh = shape.mesh();
        stats.vertex_count += mesh.vertex_count();
        stats.face_count += mesh.face_count();

        match shape.kind() {
            ShapeKind::Wall => {
                stats.wall_count += 1;
                stats.wall_volume += signed_volume(mesh);
                stats.open_edges += open_edges(mesh);
            }
            ShapeKind::Polygon => {
                stats.area_count += 1;
                stats.floor_area += mesh.faces.iter().map(|f| plan_area(mesh, &f.indices)).sum::<f64>();
            }
        }
    }

    stats.is_closed = stats.open_edges == 0;
    stats
}

/// Count directed edges that do not have exactly one reversed partner.
///
/// Zero means the faces form a closed, consistently wound surface.
pub fn open_edges(mesh: &ShapeMesh) -> usize {
    let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
    for face in &mesh.faces {
        for edge in face.edges() {
            *edge_count.entry(edge).or_insert(0) += 1;
        }
    }

    edge_count
        .iter()
        .filter(|&(&(a, b), &count)| count != 1 || edge_count.get(&(b, a)) != Some(&1))
        .count()
}

/// Signed volume enclosed by the faces (positive when wound outward).
pub fn signed_volume(mesh: &ShapeMesh) -> f64 {
    let mut volume = 0.0;
    for face in &mesh.faces {
        let v0 = mesh.vertices[face.indices[0]].position.coords;
        for pair in face.indices[1..].windows(2) {
            let v1 = mesh.vertices[pair[0]].position.coords;
            let v2 = mesh.vertices[pair[1]].position.coords;
            volume += v0.dot(&v1.cross(&v2)) / 6.0;
        }
    }
    volume
}

/// Shoelace area of a face projected onto the plan (x, y).
fn plan_area(mesh: &ShapeMesh, indices: &[usize]) -> f64 {
    let n = indices.len();
    let mut twice = 0.0;
    for i in 0..n {
        let a = mesh.vertices[indices[i]].position;
        let b = mesh.vertices[indices[(i + 1) % n]].position;
        twice += a.x * b.y - b.x * a.y;
    }
    (twice / 2.0).abs()
}
