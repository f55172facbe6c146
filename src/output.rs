//! Writing generated documents to the config directory.
//!
//! Documents are written one at a time as compact JSON. A failure part way
//! through a command leaves the documents already written on disk.

use crate::accounts::IdentityResolver;
use crate::genesis::{build_genesis, Layer};
use crate::node_config::{
    build_base_config, derive_variants, l3_variant, validation_node_config, BaseInputs,
    VALIDATION_NODE_CONFIG,
};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Endpoints supplied on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInputs {
    pub l1_url: String,
    pub l2_url: String,
    pub redis_url: String,
    pub validation_node_url: String,
}

/// Serialize `doc` to `<dir>/<name>.json`
pub fn write_json<T: Serialize>(dir: &Path, name: &str, doc: &T) -> Result<PathBuf> {
    let path = dir.join(format!("{}.json", name));
    let json =
        serde_json::to_string(doc).wrap_err_with(|| format!("Failed to serialize {}", name))?;
    fs::write(&path, json).wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;
    info!("Wrote {}: {:?}", name, path);
    Ok(path)
}

/// Generate and write every node document for one run.
///
/// Role addresses are resolved as each document needs them, so the layer-2
/// documents are already on disk if a layer-3 address fails to resolve.
pub fn write_configs(
    resolver: &IdentityResolver<'_>,
    inputs: &NetworkInputs,
    simple: bool,
) -> Result<Vec<PathBuf>> {
    let settings = resolver.settings();
    let dir = settings.config_path.as_path();

    let base_inputs = BaseInputs {
        l1_url: inputs.l1_url.clone(),
        redis_url: inputs.redis_url.clone(),
        validation_node_url: inputs.validation_node_url.clone(),
        validator_address: resolver.resolve_address("validator", None)?,
        sequencer_address: resolver.resolve_address("sequencer", None)?,
    };
    let base = build_base_config(&base_inputs, settings);

    let mut written = Vec::new();
    for variant in derive_variants(&base, simple) {
        written.push(write_json(dir, variant.name, &variant.document)?);
    }

    let l3 = l3_variant(
        &base,
        &inputs.l2_url,
        &resolver.resolve_address("l3owner", None)?,
        &resolver.resolve_address("l3sequencer", None)?,
        settings,
    );
    written.push(write_json(dir, l3.name, &l3.document)?);

    let validation = validation_node_config(settings);
    written.push(write_json(dir, VALIDATION_NODE_CONFIG, &validation)?);

    Ok(written)
}

/// Write the genesis parameters for `layer`
pub fn write_chain_config(dir: &Path, layer: Layer, owner: &str) -> Result<PathBuf> {
    let genesis = build_genesis(layer, owner);
    write_json(dir, layer.document_name(), &genesis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use serde_json::Value;
    use tempfile::TempDir;

    fn inputs() -> NetworkInputs {
        NetworkInputs {
            l1_url: "ws://geth:8546".to_string(),
            l2_url: "ws://sequencer:8548".to_string(),
            redis_url: "redis://redis:6379".to_string(),
            validation_node_url: "ws://validation_node:8549".to_string(),
        }
    }

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_full_topology_files() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            config_path: dir.path().to_path_buf(),
            ..Settings::default()
        };
        let resolver = IdentityResolver::new(&settings);

        let written = write_configs(&resolver, &inputs(), false).unwrap();
        assert_eq!(
            file_names(&written),
            vec![
                "validator_config.json",
                "unsafe_staker_config.json",
                "sequencer_config.json",
                "poster_config.json",
                "l3node_config.json",
                "validation_node_config.json",
            ]
        );
        assert!(written.iter().all(|p| p.exists()));
    }

    #[test]
    fn test_simple_topology_files() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            config_path: dir.path().to_path_buf(),
            ..Settings::default()
        };
        let resolver = IdentityResolver::new(&settings);

        let written = write_configs(&resolver, &inputs(), true).unwrap();
        assert_eq!(
            file_names(&written),
            vec!["sequencer_config.json", "l3node_config.json", "validation_node_config.json"]
        );

        let raw = fs::read_to_string(&written[0]).unwrap();
        let doc: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["node"]["batch-poster"]["redis-url"], "");
        assert_eq!(
            doc["node"]["staker"]["parent-chain-wallet"]["account"],
            resolver.resolve_address("validator", None).unwrap().as_str()
        );
    }

    #[test]
    fn test_chain_config() {
        let dir = TempDir::new().unwrap();
        let path = write_chain_config(dir.path(), Layer::L3, "0xOWNER").unwrap();

        assert_eq!(path, dir.path().join("l3_chain_config.json"));
        let doc: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(doc["chainId"], 333333);
        assert_eq!(doc["arbitrum"]["InitialChainOwner"], "0xOWNER");
    }

    #[test]
    fn test_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(write_chain_config(&missing, Layer::L2, "0x").is_err());
    }
}
