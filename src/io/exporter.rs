// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! OBJ exporter

use crate::error::Result;
use crate::floor::{check_floor_name, FloorMesh};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write one floor as `{dir}/{prefix}{name}.obj`, creating `dir` if needed
pub fn export_floor(mesh: &FloorMesh, dir: impl AsRef<Path>, prefix: &str) -> Result<PathBuf> {
    check_floor_name(mesh.name())?;
    let text = mesh.to_obj()?;

    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(mesh.file_name(prefix));
    fs::write(&path, text)?;

    info!(floor = mesh.name(), path = %path.display(), "wrote floor mesh");
    Ok(path)
}
