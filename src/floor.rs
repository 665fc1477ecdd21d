// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Per-floor mesh construction
//!
//! A floor is built in strictly sequential stages: decode the recognized
//! records, extrude walls and trace areas, adjust wall ends at junctions,
//! then assign vertex identifiers. Each stage needs the complete output of
//! the previous one.

use crate::error::{FloorMeshError, Result};
use crate::geometry::{adjust_wall_ends, analyze, Cuboid, EndCapPolicy, FloorStats, Polygon, Shape};
use crate::plan::{parse_points, parse_thickness, AreaRecord, FloorRecord, LineRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const DEFAULT_WALL_KIND: &str = "default_wall";
pub const DEFAULT_AREA_KIND: &str = "generated_area";

/// Options controlling how records become shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Wall end treatment
    pub end_caps: EndCapPolicy,
    /// Line kind extruded into walls
    pub wall_kind: String,
    /// Area kind traced into polygons
    pub area_kind: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            end_caps: EndCapPolicy::default(),
            wall_kind: DEFAULT_WALL_KIND.to_string(),
            area_kind: DEFAULT_AREA_KIND.to_string(),
        }
    }
}

/// Builds the mesh of a single floor.
#[derive(Debug, Clone, Default)]
pub struct FloorMeshBuilder {
    options: BuildOptions,
}

impl FloorMeshBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build the finished, identifier-assigned mesh of one floor.
    ///
    /// Any failing record aborts the whole floor.
    pub fn build(&self, floor: &FloorRecord) -> Result<FloorMesh> {
        check_floor_name(&floor.name)
            .and_then(|()| self.build_shapes(floor))
            .map(|shapes| FloorMesh::from_shapes(floor.name.clone(), shapes))
            .map_err(|e| e.in_floor(&floor.name))
    }

    fn build_shapes(&self, floor: &FloorRecord) -> Result<Vec<Shape>> {
        let mut cuboids = self.build_walls(&floor.lines)?;
        if self.options.end_caps.adjusts_neighbours() {
            adjust_wall_ends(&mut cuboids);
        }
        let polygons = self.build_areas(&floor.areas)?;

        let mut shapes: Vec<Shape> = Vec::with_capacity(cuboids.len() + polygons.len());
        shapes.extend(cuboids.into_iter().map(Shape::from));
        shapes.extend(polygons.into_iter().map(Shape::from));
        Ok(shapes)
    }

    /// Extrude every wall-kind line, in document order.
    pub fn build_walls(&self, lines: &[LineRecord]) -> Result<Vec<Cuboid>> {
        let mut cuboids = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            if !line.is_kind(&self.options.wall_kind) {
                debug!(line = index, kind = ?line.kind, "skipping line");
                continue;
            }
            let record = format!("line #{} ({})", index, self.options.wall_kind);
            let points = line
                .points
                .as_deref()
                .ok_or_else(|| FloorMeshError::missing_field("points", &record))?;
            let thickness = line
                .thickness
                .as_deref()
                .ok_or_else(|| FloorMeshError::missing_field("thickness", &record))?;

            let cuboid = Cuboid::from_points(
                &parse_points(points)?,
                parse_thickness(thickness)?,
                self.options.end_caps,
            )
            .map_err(|e| match e {
                FloorMeshError::InvalidGeometry(message) => {
                    FloorMeshError::InvalidGeometry(format!("{}: {}", record, message))
                }
                other => other,
            })?;
            cuboids.push(cuboid);
        }
        Ok(cuboids)
    }

    /// Trace every area-kind outline, in document order.
    pub fn build_areas(&self, areas: &[AreaRecord]) -> Result<Vec<Polygon>> {
        let mut polygons = Vec::new();
        for (index, area) in areas.iter().enumerate() {
            if !area.is_kind(&self.options.area_kind) {
                debug!(area = index, kind = ?area.kind, "skipping area");
                continue;
            }
            let record = format!("area #{} ({})", index, self.options.area_kind);
            let points = area
                .points
                .as_deref()
                .ok_or_else(|| FloorMeshError::missing_field("points", &record))?;
            let polygon = Polygon::from_points(&parse_points(points)?).map_err(|e| match e {
                FloorMeshError::InvalidGeometry(message) => {
                    FloorMeshError::InvalidGeometry(format!("{}: {}", record, message))
                }
                other => other,
            })?;
            polygons.push(polygon);
        }
        Ok(polygons)
    }
}

/// Reject floor names that would not stay a single file inside the output
/// directory.
pub fn check_floor_name(name: &str) -> Result<()> {
    let unusable = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if unusable {
        return Err(FloorMeshError::InvalidFloorName(name.to_string()));
    }
    Ok(())
}

/// Vertex offset of every shape: the number of vertices emitted before it.
pub fn plan_ids(shapes: &[Shape]) -> Vec<usize> {
    shapes
        .iter()
        .scan(0, |emitted, shape| {
            let offset = *emitted;
            *emitted += shape.mesh().vertex_count();
            Some(offset)
        })
        .collect()
}

/// Finished mesh of one floor, ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorMesh {
    name: String,
    shapes: Vec<Shape>,
}

impl FloorMesh {
    /// Assign identifiers to `shapes` in the given order and wrap them.
    pub fn from_shapes(name: String, mut shapes: Vec<Shape>) -> Self {
        let offsets = plan_ids(&shapes);
        for (shape, offset) in shapes.iter_mut().zip(offsets) {
            shape.mesh_mut().assign_ids(offset);
        }
        info!(floor = %name, shapes = shapes.len(), "floor mesh built");
        Self { name, shapes }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn vertex_count(&self) -> usize {
        self.shapes.iter().map(|s| s.mesh().vertex_count()).sum()
    }

    pub fn face_count(&self) -> usize {
        self.shapes.iter().map(|s| s.mesh().face_count()).sum()
    }

    /// Output file name, e.g. `floor_1.obj` for prefix `floor_`.
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{}{}.obj", prefix, self.name)
    }

    pub fn stats(&self) -> FloorStats {
        analyze(&self.shapes)
    }

    /// Serialize to OBJ text: all `v` lines, a blank line, then per shape an
    /// `o` header and its `f` lines.
    pub fn to_obj(&self) -> Result<String> {
        let mut ordered: Vec<&Shape> = self.shapes.iter().collect();
        ordered.sort_by_key(|shape| shape.sequence_index());

        let mut text = String::new();
        for shape in &ordered {
            text.push_str(&shape.vertices_text());
        }
        text.push('\n');
        for shape in &ordered {
            text.push_str(&shape.faces_text()?);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(points: &str, thickness: &str) -> LineRecord {
        LineRecord::new(DEFAULT_WALL_KIND, points, thickness)
    }

    fn floor(lines: Vec<LineRecord>, areas: Vec<AreaRecord>) -> FloorRecord {
        FloorRecord {
            name: "1".into(),
            lines,
            areas,
        }
    }

    #[test]
    fn test_ids_contiguous_across_shapes() {
        let record = floor(
            vec![
                wall("0 0 0,4 0 0,0 0 3,4 0 3", "2"),
                wall("10 0 0,10 5 0,10 0 3,10 5 3", "1"),
            ],
            vec![AreaRecord::new(DEFAULT_AREA_KIND, "0 0 0,4 0 0,4 4 0")],
        );
        let mesh = FloorMeshBuilder::default().build(&record).unwrap();

        let ids: Vec<usize> = mesh
            .shapes()
            .iter()
            .flat_map(|s| s.vertices().iter().map(|v| v.id().unwrap()))
            .collect();
        assert_eq!(ids, (1..=19).collect::<Vec<_>>());

        let offsets: Vec<_> = mesh.shapes().iter().map(|s| s.sequence_index()).collect();
        assert_eq!(offsets, vec![Some(0), Some(8), Some(16)]);
    }

    #[test]
    fn test_cuboids_precede_polygons() {
        let record = floor(
            vec![wall("0 0 0,4 0 0,0 0 3,4 0 3", "2")],
            vec![AreaRecord::new(DEFAULT_AREA_KIND, "0 0 0,4 0 0,4 4 0")],
        );
        let mesh = FloorMeshBuilder::default().build(&record).unwrap();
        let obj = mesh.to_obj().unwrap();

        let wall_header = obj.find("o wall_0").unwrap();
        let polygon_header = obj.find("o polygon_8").unwrap();
        assert!(wall_header < polygon_header);
        assert!(obj.contains("o polygon_8\nf 9 10 11\n"));
    }

    #[test]
    fn test_unrecognized_records_skipped() {
        let record = floor(
            vec![
                LineRecord::new("dimension", "garbage", "x"),
                LineRecord::default(),
            ],
            vec![AreaRecord::new("room", "not points")],
        );
        let mesh = FloorMeshBuilder::default().build(&record).unwrap();
        assert!(mesh.shapes().is_empty());
        assert_eq!(mesh.to_obj().unwrap(), "\n");
    }

    #[test]
    fn test_wall_missing_thickness_fails_floor() {
        let mut line = wall("0 0 0,4 0 0,0 0 3,4 0 3", "2");
        line.thickness = None;
        let err = FloorMeshBuilder::default()
            .build(&floor(vec![line], vec![]))
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("floor 1"), "{}", message);
        assert!(message.contains("thickness"), "{}", message);
    }

    #[test]
    fn test_wall_with_three_points_fails_floor() {
        let err = FloorMeshBuilder::default()
            .build(&floor(vec![wall("0 0 0,4 0 0,0 0 3", "2")], vec![]))
            .unwrap_err();

        match err {
            FloorMeshError::Floor { floor, source } => {
                assert_eq!(floor, "1");
                assert!(matches!(*source, FloorMeshError::InvalidGeometry(ref m) if m.contains("line #0")));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_custom_kinds() {
        let options = BuildOptions {
            wall_kind: "wall".into(),
            area_kind: "room".into(),
            ..BuildOptions::default()
        };
        let record = floor(
            vec![LineRecord::new("wall", "0 0 0,4 0 0,0 0 3,4 0 3", "2")],
            vec![AreaRecord::new("room", "0 0 0,4 0 0,4 4 0")],
        );
        let mesh = FloorMeshBuilder::new(options).build(&record).unwrap();
        assert_eq!(mesh.shapes().len(), 2);
    }

    #[test]
    fn test_plan_ids_is_running_total() {
        let record = floor(
            vec![],
            vec![
                AreaRecord::new(DEFAULT_AREA_KIND, "0 0 0,1 0 0,1 1 0"),
                AreaRecord::new(DEFAULT_AREA_KIND, "0 0 0,1 0 0,1 1 0,0 1 0,0 0.5 0"),
                AreaRecord::new(DEFAULT_AREA_KIND, "0 0 0,1 0 0,1 1 0,0 1 0"),
            ],
        );
        let builder = FloorMeshBuilder::default();
        let shapes: Vec<Shape> = builder
            .build_areas(&record.areas)
            .unwrap()
            .into_iter()
            .map(Shape::from)
            .collect();
        assert_eq!(plan_ids(&shapes), vec![0, 3, 8]);
    }

    #[test]
    fn test_floor_name_must_be_one_path_component() {
        for name in ["../escaped", "a/b", "a\\b", "..", ".", ""] {
            let record = FloorRecord {
                name: name.into(),
                ..floor(vec![], vec![])
            };
            match FloorMeshBuilder::default().build(&record) {
                Err(FloorMeshError::Floor { source, .. }) => {
                    assert!(matches!(*source, FloorMeshError::InvalidFloorName(_)), "{}", name)
                }
                other => panic!("name {:?} accepted: {:?}", name, other),
            }
        }

        assert!(check_floor_name("..attic").is_ok());
        assert!(check_floor_name("ground floor").is_ok());
    }

    #[test]
    fn test_file_name_uses_prefix() {
        let mesh = FloorMeshBuilder::default()
            .build(&floor(vec![], vec![]))
            .unwrap();
        assert_eq!(mesh.file_name("floor_"), "floor_1.obj");
    }
}
