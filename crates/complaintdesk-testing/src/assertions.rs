//! Custom assertions over the CLI's JSON output.
//!
//! JSON output wraps every payload as `{"badge": ..., "content": ..., "suggestions": ...}`.

use anyhow::{Context, Result};
use serde_json::Value;

fn complaints(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["complaints"]
        .as_array()
        .context("Expected 'content.complaints' array in JSON")
}

/// Assert that JSON output contains the expected number of complaints.
pub fn assert_complaint_count(json: &Value, expected: usize) -> Result<()> {
    let complaints = complaints(json)?;

    if complaints.len() != expected {
        anyhow::bail!("Expected {} complaints, got {}", expected, complaints.len());
    }

    Ok(())
}

/// Assert the listed complaint titles, in order.
pub fn assert_titles(json: &Value, expected: &[&str]) -> Result<()> {
    let titles: Vec<&str> = complaints(json)?
        .iter()
        .filter_map(|c| c["title"].as_str())
        .collect();

    if titles != expected {
        anyhow::bail!("Expected titles {:?}, got {:?}", expected, titles);
    }

    Ok(())
}

/// Assert that every listed complaint has the given status.
pub fn assert_all_status(json: &Value, status: &str) -> Result<()> {
    for (i, complaint) in complaints(json)?.iter().enumerate() {
        let actual = complaint["status"]
            .as_str()
            .with_context(|| format!("Complaint {} missing status", i))?;

        if actual != status {
            anyhow::bail!("Complaint {} has status {} but expected {}", i, actual, status);
        }
    }

    Ok(())
}

/// Assert the badge level of a command result.
pub fn assert_badge_level(json: &Value, level: &str) -> Result<()> {
    let actual = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;

    if actual != level {
        anyhow::bail!("Expected badge level {}, got {}", level, actual);
    }

    Ok(())
}
