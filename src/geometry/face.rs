// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Planar face as an ordered loop of vertex indices

use super::Vertex;
use crate::error::{FloorMeshError, Result};
use serde::{Deserialize, Serialize};

/// Face defined by indices into the owning shape's vertex arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub indices: Vec<usize>,
}

impl Face {
    /// Quad face; exactly four indices.
    pub fn quad(indices: &[usize]) -> Result<Self> {
        if indices.len() != 4 {
            return Err(FloorMeshError::InvalidGeometry(format!(
                "quad face needs 4 vertices, got {}",
                indices.len()
            )));
        }
        Ok(Self {
            indices: indices.to_vec(),
        })
    }

    /// Polygon face; at least three indices.
    pub fn polygon(indices: Vec<usize>) -> Result<Self> {
        if indices.len() < 3 {
            return Err(FloorMeshError::InvalidGeometry(format!(
                "polygon face needs at least 3 vertices, got {}",
                indices.len()
            )));
        }
        Ok(Self { indices })
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Directed edges of the loop, closing back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.indices.len();
        (0..n).map(move |i| (self.indices[i], self.indices[(i + 1) % n]))
    }

    /// Render as an OBJ `f` line (without newline).
    pub fn face_text(&self, vertices: &[Vertex]) -> Result<String> {
        let mut text = String::from("f");
        for &index in &self.indices {
            let vertex = vertices.get(index).ok_or_else(|| {
                FloorMeshError::InvalidGeometry(format!(
                    "face index {} out of range for {} vertices",
                    index,
                    vertices.len()
                ))
            })?;
            let id = vertex
                .id()
                .ok_or(FloorMeshError::UnassignedVertex { index })?;
            text.push(' ');
            text.push_str(&id.to_string());
        }
        Ok(text)
    }
}
