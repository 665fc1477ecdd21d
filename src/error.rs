// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for floor-plan parsing and mesh construction.

use thiserror::Error;

/// Errors that can occur while converting a floor plan to a mesh.
#[derive(Debug, Error)]
pub enum FloorMeshError {
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Missing required document element.
    #[error("missing required element: {element} in {context}")]
    MissingElement {
        /// The missing element name.
        element: &'static str,
        /// Where the element was expected.
        context: String,
    },

    /// A recognized record lacks a field it cannot be built without.
    #[error("missing required field `{field}` on {record}")]
    MissingField {
        /// The missing field name.
        field: &'static str,
        /// Description of the offending record.
        record: String,
    },

    /// Malformed point-string encoding.
    #[error("invalid point list {input:?}: {message}")]
    InvalidPoints {
        /// The raw point string.
        input: String,
        /// Why it could not be decoded.
        message: String,
    },

    /// Wall thickness is not a number.
    #[error("invalid thickness {0:?}")]
    InvalidThickness(String),

    /// Wrong vertex count for a shape or face.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A face references a vertex that was never given an identifier.
    #[error("face references vertex {index} which has no identifier")]
    UnassignedVertex {
        /// Arena index of the vertex inside its shape.
        index: usize,
    },

    /// A shape was serialized before its identifiers were assigned.
    #[error("{kind} shape has no sequence index; identifiers were never assigned")]
    UnassignedShape {
        /// Header name of the shape kind.
        kind: &'static str,
    },

    /// Floor name that cannot be used as an output file name.
    #[error("invalid floor name {0:?}: must be a single, non-empty path component")]
    InvalidFloorName(String),

    /// Failure while converting a specific floor.
    #[error("floor {floor}: {source}")]
    Floor {
        /// Name of the floor that failed.
        floor: String,
        /// The underlying error.
        #[source]
        source: Box<FloorMeshError>,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FloorMeshError {
    /// Create a missing element error.
    pub fn missing_element(element: &'static str, context: impl Into<String>) -> Self {
        Self::MissingElement {
            element,
            context: context.into(),
        }
    }

    /// Create a missing field error.
    pub fn missing_field(field: &'static str, record: impl Into<String>) -> Self {
        Self::MissingField {
            field,
            record: record.into(),
        }
    }

    /// Create an invalid points error.
    pub fn invalid_points(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPoints {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Attach the floor name to an error.
    pub fn in_floor(self, floor: impl Into<String>) -> Self {
        Self::Floor {
            floor: floor.into(),
            source: Box::new(self),
        }
    }
}

/// Result type for floormesh operations.
pub type Result<T> = std::result::Result<T, FloorMeshError>;
