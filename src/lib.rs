// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Floormesh
//!
//! Converts 2D floor plans into OBJ meshes. Walls (centerline segments with a
//! thickness) are extruded into boxes whose ends are fitted to the walls they
//! meet; room areas are traced into flat polygons.

pub mod cli;
pub mod config;
pub mod error;
pub mod floor;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod plan;

pub use config::ConvertConfig;
pub use error::{FloorMeshError, Result};
pub use floor::{BuildOptions, FloorMesh, FloorMeshBuilder};
pub use geometry::{Cuboid, EndCapPolicy, Polygon, Shape};
pub use io::{export_floor, import_plan_file, parse_plan};
pub use kernel::{Converter, FloorOutcome};
pub use plan::{AreaRecord, FloorPlan, FloorRecord, LineRecord};

use std::path::Path;

/// Convert every floor of a plan document with default settings
pub fn render(source: &str) -> Result<Vec<FloorOutcome>> {
    let plan = parse_plan(source)?;
    Ok(Converter::default().convert_plan(&plan))
}

/// Convert every floor of a plan file with default settings
pub fn render_file(path: impl AsRef<Path>) -> Result<Vec<FloorOutcome>> {
    let plan = import_plan_file(path)?;
    Ok(Converter::default().convert_plan(&plan))
}
