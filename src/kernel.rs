// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Multi-floor conversion

use crate::config::ConvertConfig;
use crate::error::Result;
use crate::floor::{FloorMesh, FloorMeshBuilder};
use crate::plan::{FloorPlan, FloorRecord};
use rayon::prelude::*;
use tracing::warn;

/// Result of converting one floor
#[derive(Debug)]
pub struct FloorOutcome {
    pub floor: String,
    pub result: Result<FloorMesh>,
}

impl FloorOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Converts every floor of a plan independently
pub struct Converter {
    builder: FloorMeshBuilder,
    parallel: bool,
}

impl Converter {
    pub fn new(config: &ConvertConfig) -> Self {
        Self {
            builder: FloorMeshBuilder::new(config.build_options()),
            parallel: config.parallel,
        }
    }

    /// Build one floor
    pub fn convert_floor(&self, floor: &FloorRecord) -> FloorOutcome {
        let result = self.builder.build(floor);
        if let Err(ref e) = result {
            warn!(floor = %floor.name, error = %e, "floor conversion failed");
        }
        FloorOutcome {
            floor: floor.name.clone(),
            result,
        }
    }

    /// Build all floors; outcomes follow document order
    pub fn convert_plan(&self, plan: &FloorPlan) -> Vec<FloorOutcome> {
        if self.parallel {
            plan.floors
                .par_iter()
                .map(|floor| self.convert_floor(floor))
                .collect()
        } else {
            plan.floors
                .iter()
                .map(|floor| self.convert_floor(floor))
                .collect()
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(&ConvertConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::LineRecord;

    fn plan() -> FloorPlan {
        let good = FloorRecord {
            name: "0".into(),
            lines: vec![LineRecord::new("default_wall", "0 0 0,4 0 0,0 0 3,4 0 3", "2")],
            areas: vec![],
        };
        let bad = FloorRecord {
            name: "1".into(),
            lines: vec![LineRecord::new("default_wall", "0 0 0,4 0 0", "2")],
            areas: vec![],
        };
        let empty = FloorRecord {
            name: "2".into(),
            ..FloorRecord::default()
        };
        FloorPlan {
            floors: vec![good, bad, empty],
        }
    }

    #[test]
    fn test_failed_floor_does_not_stop_others() {
        let outcomes = Converter::default().convert_plan(&plan());

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_ok());
        assert!(!outcomes[1].is_ok());
        assert!(outcomes[2].is_ok());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let config = ConvertConfig {
            parallel: true,
            ..ConvertConfig::default()
        };
        let parallel = Converter::new(&config).convert_plan(&plan());
        let sequential = Converter::default().convert_plan(&plan());

        for (a, b) in parallel.iter().zip(&sequential) {
            assert_eq!(a.floor, b.floor);
            match (&a.result, &b.result) {
                (Ok(x), Ok(y)) => assert_eq!(x.to_obj().unwrap(), y.to_obj().unwrap()),
                (Err(_), Err(_)) => {}
                _ => panic!("outcomes differ for floor {}", a.floor),
            }
        }
    }
}
