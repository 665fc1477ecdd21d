// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Floor-plan file importer

use crate::error::Result;
use crate::plan::FloorPlan;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Import a floor-plan document and parse it into floor records
pub fn import_plan_file(path: impl AsRef<Path>) -> Result<FloorPlan> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = source.len(), "read floor plan");

    super::parse_plan(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FloorMeshError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_import_plan_file() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            "<project><floors><floor><name>0</name><designs><design><lines/><areas/></design></designs></floor></floors></project>"
        )?;

        let plan = import_plan_file(file.path())?;
        assert_eq!(plan.floors.len(), 1);

        Ok(())
    }

    #[test]
    fn test_import_missing_file() {
        let result = import_plan_file("does/not/exist.fml");
        assert!(matches!(result, Err(FloorMeshError::Io(_))));
    }
}
