#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use medclaim::api::ClaimState;
use medclaim::models::FieldMap;
use medclaim::services::{ClaimGenerator, SeededIdSource};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const OFFICE_VISIT_REQUIREMENT: &str =
    "Submit a claim for an established patient seen for an Office Visit.";
pub const NEW_PATIENT_REQUIREMENT: &str = "Submit a claim for a first consultation.";

/// Fixed submission time used by deterministic generators.
pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(10, 30, 0))
        .expect("valid fixed time")
}

/// Generator whose identifiers and clock are fully reproducible.
pub fn deterministic_generator(seed: u64) -> ClaimGenerator {
    ClaimGenerator::medicare(Arc::new(
        SeededIdSource::new(seed).with_fixed_time(fixed_time()),
    ))
}

/// A scratch directory holding a requirement document.
pub struct Workspace {
    pub dir: TempDir,
    pub requirement_path: PathBuf,
    pub output_path: PathBuf,
}

pub fn workspace(requirement: &str) -> Workspace {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let requirement_path = dir.path().join("requirement.txt");
    std::fs::write(&requirement_path, requirement).expect("Failed to write requirement");
    let output_path = dir.path().join("generated_medicare_claim.xml");

    Workspace {
        dir,
        requirement_path,
        output_path,
    }
}

impl Workspace {
    pub fn claim_state(&self, seed: u64) -> ClaimState {
        ClaimState {
            generator: deterministic_generator(seed),
            requirement_path: self.requirement_path.clone(),
            output_path: self.output_path.clone(),
        }
    }
}

pub fn membership(pairs: &[(&str, &str)]) -> FieldMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
