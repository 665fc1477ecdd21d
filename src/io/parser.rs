// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Floor-plan XML parser using quick-xml's serde support
//!
//! Expected layout (unknown elements are ignored):
//!
//! ```xml
//! <project>
//!   <floors>
//!     <floor>
//!       <name>1</name>
//!       <designs>
//!         <design>
//!           <areas><area><type/><points/></area></areas>
//!           <lines><line><type/><points/><thickness/></line></lines>
//!         </design>
//!       </designs>
//!     </floor>
//!   </floors>
//! </project>
//! ```

use crate::error::{FloorMeshError, Result};
use crate::plan::{AreaRecord, FloorPlan, FloorRecord, LineRecord};
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct ProjectDoc {
    #[serde(default)]
    floors: Option<FloorsDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct FloorsDoc {
    #[serde(default)]
    floor: Vec<FloorDoc>,
}

#[derive(Debug, Deserialize)]
struct FloorDoc {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "@name", default)]
    name_attr: Option<String>,
    #[serde(default)]
    designs: Option<DesignsDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct DesignsDoc {
    #[serde(default)]
    design: Vec<DesignDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct DesignDoc {
    #[serde(default)]
    areas: AreasDoc,
    #[serde(default)]
    lines: LinesDoc,
}

#[derive(Debug, Default, Deserialize)]
struct AreasDoc {
    #[serde(default)]
    area: Vec<AreaDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct LinesDoc {
    #[serde(default)]
    line: Vec<LineDoc>,
}

#[derive(Debug, Deserialize)]
struct AreaDoc {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    points: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LineDoc {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    points: Option<String>,
    #[serde(default)]
    thickness: Option<String>,
}

/// Parse a floor-plan document into per-floor records.
pub fn parse_plan(source: &str) -> Result<FloorPlan> {
    let project: ProjectDoc =
        quick_xml::de::from_str(source).map_err(|e| FloorMeshError::XmlParse(e.to_string()))?;

    let floors = project
        .floors
        .ok_or_else(|| FloorMeshError::missing_element("floors", "project"))?;

    let floors = floors
        .floor
        .into_iter()
        .enumerate()
        .map(|(index, floor)| lower_floor(index, floor))
        .collect();

    Ok(FloorPlan { floors })
}

fn lower_floor(index: usize, floor: FloorDoc) -> FloorRecord {
    let name = floor
        .name
        .or(floor.name_attr)
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| index.to_string());

    let design = floor
        .designs
        .and_then(|designs| designs.design.into_iter().next());

    let Some(design) = design else {
        warn!(floor = %name, "floor has no design, emitting an empty mesh");
        return FloorRecord {
            name,
            ..FloorRecord::default()
        };
    };

    let lines: Vec<LineRecord> = design
        .lines
        .line
        .into_iter()
        .map(|line| LineRecord {
            kind: line.kind,
            points: line.points,
            thickness: line.thickness,
        })
        .collect();

    let areas: Vec<AreaRecord> = design
        .areas
        .area
        .into_iter()
        .map(|area| AreaRecord {
            kind: area.kind,
            points: area.points,
        })
        .collect();

    debug!(floor = %name, lines = lines.len(), areas = areas.len(), "parsed floor");
    FloorRecord { name, lines, areas }
}
