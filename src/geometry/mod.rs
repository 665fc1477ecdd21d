// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - wall boxes, area polygons and their mesh primitives

mod adjust;
mod analytics;
mod bbox;
mod cuboid;
mod face;
mod polygon;
mod shape;
mod vertex;

pub use adjust::{
    adjust_wall_ends, apply_adjustments, find_neighbours, junction_neighbours, plan_adjustments,
    EndShift, Neighbour,
};
pub use analytics::{analyze, open_edges, signed_volume, FloorStats};
pub use bbox::BoundingBox;
pub use cuboid::{Cuboid, EndCapPolicy};
pub use face::Face;
pub use polygon::Polygon;
pub use shape::{Shape, ShapeKind, ShapeMesh};
pub use vertex::Vertex;
