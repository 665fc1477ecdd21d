// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Floor-plan records extracted from a plan document
//!
//! Records hold the raw strings found in the document. Decoding into numbers
//! happens only for records the builder recognizes, so unrelated record kinds
//! never cause a failure.

use crate::error::{FloorMeshError, Result};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A whole plan document: one entry per floor, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub floors: Vec<FloorRecord>,
}

/// The lines and areas of the first design of one floor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorRecord {
    pub name: String,
    pub lines: Vec<LineRecord>,
    pub areas: Vec<AreaRecord>,
}

/// A `<line>` item; walls are lines of the wall kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    pub kind: Option<String>,
    pub points: Option<String>,
    pub thickness: Option<String>,
}

/// An `<area>` item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaRecord {
    pub kind: Option<String>,
    pub points: Option<String>,
}

impl LineRecord {
    pub fn new(kind: &str, points: &str, thickness: &str) -> Self {
        Self {
            kind: Some(kind.to_string()),
            points: Some(points.to_string()),
            thickness: Some(thickness.to_string()),
        }
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.as_deref().map(str::trim) == Some(kind)
    }
}

impl AreaRecord {
    pub fn new(kind: &str, points: &str) -> Self {
        Self {
            kind: Some(kind.to_string()),
            points: Some(points.to_string()),
        }
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.as_deref().map(str::trim) == Some(kind)
    }
}

/// Decode `"x y z,x y z,..."` into points.
///
/// Every comma-separated group must hold exactly three whitespace-separated
/// finite numbers.
pub fn parse_points(input: &str) -> Result<Vec<Point3<f64>>> {
    input
        .split(',')
        .enumerate()
        .map(|(i, group)| {
            let tokens: Vec<&str> = group.split_whitespace().collect();
            if tokens.len() != 3 {
                return Err(FloorMeshError::invalid_points(
                    input,
                    format!("point {} has {} components, expected 3", i, tokens.len()),
                ));
            }
            let mut coords = [0.0; 3];
            for (coord, token) in coords.iter_mut().zip(&tokens) {
                *coord = token
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| {
                        FloorMeshError::invalid_points(
                            input,
                            format!("point {} has non-numeric component {:?}", i, token),
                        )
                    })?;
            }
            Ok(Point3::new(coords[0], coords[1], coords[2]))
        })
        .collect()
}

/// Decode a wall thickness.
pub fn parse_thickness(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite())
        .ok_or_else(|| FloorMeshError::InvalidThickness(input.to_string()))
}
