// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Writing converted floors to disk and reading the files back

use floormesh::{export_floor, import_plan_file, ConvertConfig, Converter, EndCapPolicy};
use std::fs;
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Vertex positions and face index lists of an OBJ file
fn read_obj(text: &str) -> (Vec<[f64; 3]>, Vec<Vec<usize>>) {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();
    for line in text.lines() {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let coords: Vec<f64> = parts.map(|p| p.parse().unwrap()).collect();
                vertices.push([coords[0], coords[1], coords[2]]);
            }
            Some("f") => faces.push(parts.map(|p| p.parse().unwrap()).collect()),
            _ => {}
        }
    }
    (vertices, faces)
}

#[test]
fn test_export_fixture_floors() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let plan = import_plan_file(fixture("house.fml"))?;

    let mut written = Vec::new();
    for outcome in Converter::default().convert_plan(&plan) {
        if let Ok(mesh) = outcome.result {
            let path = export_floor(&mesh, dir.path(), "floor_")?;
            let (vertices, faces) = read_obj(&fs::read_to_string(&path)?);
            assert_eq!(vertices.len(), mesh.vertex_count());
            assert_eq!(faces.len(), mesh.face_count());
            written.push(path.file_name().unwrap().to_string_lossy().into_owned());
        }
    }

    assert_eq!(written, vec!["floor_0.obj", "floor_attic.obj"]);
    assert!(!dir.path().join("floor_1.obj").exists());
    Ok(())
}

#[test]
fn test_exported_vertices_swap_height_axis() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let plan = import_plan_file(fixture("house.fml"))?;
    let mesh = Converter::default().convert_floor(&plan.floors[0]).result?;

    let path = export_floor(&mesh, dir.path(), "level_")?;
    let (vertices, _) = read_obj(&fs::read_to_string(path)?);

    // Second coordinate is height; the plan y runs in the third
    assert!(vertices.iter().all(|v| v[1] == 0.0 || v[1] == 2.5));
    assert!(vertices.iter().any(|v| v[2] == 4.0));
    Ok(())
}

#[test]
fn test_config_file_drives_conversion() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config_path = dir.path().join("floormesh.toml");
    fs::write(
        &config_path,
        format!(
            "end_caps = \"symmetric\"\nfile_prefix = \"storey_\"\noutput_dir = {:?}\n",
            dir.path().join("out")
        ),
    )?;

    let config = ConvertConfig::from_file(&config_path)?;
    assert_eq!(config.end_caps, EndCapPolicy::Symmetric);

    let plan = import_plan_file(fixture("house.fml"))?;
    let mesh = Converter::new(&config).convert_floor(&plan.floors[0]).result?;
    let path = export_floor(&mesh, &config.output_dir, &config.file_prefix)?;

    assert_eq!(path, dir.path().join("out").join("storey_0.obj"));
    let (vertices, _) = read_obj(&fs::read_to_string(path)?);
    let min_x = vertices.iter().map(|v| v[0]).fold(f64::INFINITY, f64::min);
    assert!((min_x + 0.1).abs() < 1e-12);
    Ok(())
}
