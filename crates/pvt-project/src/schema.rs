//! Project schema definitions.

use pvt_wetgas::{BuildOptions, InputTableSet, Schedule};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub options: BuildOptions,
    #[serde(default)]
    pub schedule: Schedule,
    pub input: InputTableSet,
}

impl Project {
    pub fn new(name: impl Into<String>, input: InputTableSet) -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: name.into(),
            options: BuildOptions::default(),
            schedule: Schedule::default(),
            input,
        }
    }
}
