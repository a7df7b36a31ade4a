// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Output formatting for CLI results

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::Serialize;

use schemagen::{ObjectKind, TypeSchema};

/// One row of the `types` listing
#[derive(Debug, Clone, Serialize)]
pub struct TypeSummary {
    pub name: String,
    pub kind: &'static str,
    pub fields: usize,
    pub has_create_input: bool,
    pub testable: bool,
}

/// Summaries of the object-like types a user defined, skipping generated ones
pub fn summarize_types(schema: &TypeSchema, testable: &[String]) -> Vec<TypeSummary> {
    schema
        .objects()
        .filter(|object| !object.name.starts_with('_'))
        .map(|object| TypeSummary {
            name: object.name.clone(),
            kind: object.kind.keyword(),
            fields: match object.kind {
                ObjectKind::Union => object.members.len(),
                _ => object.fields.len(),
            },
            has_create_input: schema.input_counterpart_of(&object.name).is_ok(),
            testable: testable.contains(&object.name),
        })
        .collect()
}

/// Formats type summaries for display
pub struct TypeFormatter;

impl TypeFormatter {
    pub fn table(summaries: &[TypeSummary]) -> String {
        if summaries.is_empty() {
            return "No object types".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Type", "Kind", "Fields", "Create input", "Testable"]);
        for summary in summaries {
            table.add_row(vec![
                Cell::new(&summary.name),
                Cell::new(summary.kind),
                Cell::new(summary.fields),
                Cell::new(yes_no(summary.has_create_input)),
                Cell::new(yes_no(summary.testable)),
            ]);
        }
        format!("{}\n{} type(s)", table, summaries.len())
    }

    pub fn json(summaries: &[TypeSummary]) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(summaries)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
