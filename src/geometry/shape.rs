// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Shapes emitted into a floor mesh

use super::{Cuboid, Face, Polygon, Vertex};
use crate::error::{FloorMeshError, Result};

/// Vertex arena and faces owned by a single shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeMesh {
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
    sequence_index: Option<usize>,
}

impl ShapeMesh {
    pub fn new(vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            faces,
            sequence_index: None,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of vertices emitted before this shape, once identifiers are assigned.
    pub fn sequence_index(&self) -> Option<usize> {
        self.sequence_index
    }

    /// Give the vertices the contiguous ids `offset + 1 ..= offset + vertex_count`.
    pub(crate) fn assign_ids(&mut self, offset: usize) {
        self.sequence_index = Some(offset);
        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            vertex.set_id(offset + i + 1);
        }
    }

    /// One `v` line per vertex, in construction order.
    pub fn vertices_text(&self) -> String {
        let mut text = String::new();
        for vertex in &self.vertices {
            text.push_str(&vertex.vertex_text());
            text.push('\n');
        }
        text
    }

    /// `o {kind}_{index}` header followed by one `f` line per face.
    ///
    /// Fails until [`assign_ids`](Self::assign_ids) has run.
    pub fn faces_text(&self, kind: ShapeKind) -> Result<String> {
        let index = self
            .sequence_index
            .ok_or(FloorMeshError::UnassignedShape { kind: kind.name() })?;
        let mut text = format!("o {}_{}\n", kind.name(), index);
        for face in &self.faces {
            text.push_str(&face.face_text(&self.vertices)?);
            text.push('\n');
        }
        Ok(text)
    }
}

/// Kind tag used in the `o` header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Wall,
    Polygon,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Polygon => "polygon",
        }
    }
}

/// Any shape that can be placed in a floor mesh.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Cuboid(Cuboid),
    Polygon(Polygon),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Cuboid(_) => ShapeKind::Wall,
            Self::Polygon(_) => ShapeKind::Polygon,
        }
    }

    pub fn mesh(&self) -> &ShapeMesh {
        match self {
            Self::Cuboid(cuboid) => cuboid.mesh(),
            Self::Polygon(polygon) => polygon.mesh(),
        }
    }

    pub(crate) fn mesh_mut(&mut self) -> &mut ShapeMesh {
        match self {
            Self::Cuboid(cuboid) => cuboid.mesh_mut(),
            Self::Polygon(polygon) => polygon.mesh_mut(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.mesh().vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.mesh().faces
    }

    pub fn sequence_index(&self) -> Option<usize> {
        self.mesh().sequence_index()
    }

    pub fn vertices_text(&self) -> String {
        self.mesh().vertices_text()
    }

    pub fn faces_text(&self) -> Result<String> {
        self.mesh().faces_text(self.kind())
    }
}

impl From<Cuboid> for Shape {
    fn from(cuboid: Cuboid) -> Self {
        Self::Cuboid(cuboid)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}
