//! Stake reward tier loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::sheets::StakeTier;

/// Stake tier table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeTierCatalog {
    pub tiers: Vec<StakeTier>,
}

/// Loader for stake reward tiers from RON files.
pub struct StakeTiersLoader;

impl StakeTiersLoader {
    /// Load the stake reward tiers from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<StakeTier>> {
        let content = read_file(path)?;
        Self::load_str(&content)
    }

    pub fn load_str(content: &str) -> LoadResult<Vec<StakeTier>> {
        let catalog: StakeTierCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse stake tier RON: {}", e))?;
        Ok(catalog.tiers)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_from_a_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"StakeTierCatalog(tiers: [StakeTier(staked: "50", level: 1)])"#
        )
        .unwrap();

        let tiers = StakeTiersLoader::load(file.path()).unwrap();
        assert_eq!(tiers.len(), 1);
        assert_eq!(tiers[0].level, 1);
    }
}
