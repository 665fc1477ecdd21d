// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - parsing, importing, and exporting

mod exporter;
mod importer;
mod parser;

pub use exporter::export_floor;
pub use importer::import_plan_file;
pub use parser::parse_plan;
