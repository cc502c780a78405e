//! Build options.

use serde::{Deserialize, Serialize};

/// Knobs for `PvtEngineBuilder`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Build regions on the rayon thread pool.
    ///
    /// Regions share no data, so the result is identical to the sequential build.
    #[serde(default)]
    pub parallel_regions: bool,
}

impl BuildOptions {
    pub fn parallel() -> Self {
        Self {
            parallel_regions: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sequential() {
        let opts: BuildOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, BuildOptions::default());
        assert!(!opts.parallel_regions);
        assert!(BuildOptions::parallel().parallel_regions);
    }
}
