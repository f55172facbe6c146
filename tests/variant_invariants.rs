//! Cross-document consistency of the generated node configs.

use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use tempfile::TempDir;

use testnode_config::accounts::{FixedRole, IdentityResolver};
use testnode_config::node_config::{
    build_base_config, derive_variants, l3_variant, BaseInputs, NodeConfig,
};
use testnode_config::output::{write_configs, NetworkInputs};
use testnode_config::settings::Settings;

/// Flatten a JSON document into `a.b.c -> leaf` pairs
fn leaves(value: &Value) -> BTreeMap<String, Value> {
    fn walk(prefix: &str, value: &Value, out: &mut BTreeMap<String, Value>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    walk(&path, child, out);
                }
            }
            leaf => {
                out.insert(prefix.to_string(), leaf.clone());
            }
        }
    }

    let mut out = BTreeMap::new();
    walk("", value, &mut out);
    out
}

/// Paths whose value differs between two documents, including added or removed ones
fn changed_paths(base: &NodeConfig, variant: &NodeConfig) -> BTreeSet<String> {
    let base = leaves(&serde_json::to_value(base).unwrap());
    let variant = leaves(&serde_json::to_value(variant).unwrap());

    base.keys()
        .chain(variant.keys())
        .filter(|path| base.get(*path) != variant.get(*path))
        .cloned()
        .collect()
}

fn set(paths: &[&str]) -> BTreeSet<String> {
    paths.iter().map(|p| p.to_string()).collect()
}

fn base(settings: &Settings) -> NodeConfig {
    let resolver = IdentityResolver::new(settings);
    let inputs = BaseInputs {
        l1_url: "ws://geth:8546".to_string(),
        redis_url: "redis://redis:6379".to_string(),
        validation_node_url: "ws://validation_node:8549".to_string(),
        validator_address: resolver.resolve_address("validator", None).unwrap(),
        sequencer_address: resolver.resolve_address("sequencer", None).unwrap(),
    };
    build_base_config(&inputs, settings)
}

#[test]
fn test_full_topology_patches_only_documented_fields() {
    let settings = Settings::default();
    let base = base(&settings);

    let expected: BTreeMap<&str, BTreeSet<String>> = [
        (
            "validator_config",
            set(&["node.staker.enable", "node.staker.use-smart-contract-wallet"]),
        ),
        (
            "unsafe_staker_config",
            set(&[
                "node.staker.enable",
                "node.staker.use-smart-contract-wallet",
                "node.staker.dangerous.without-block-validator",
            ]),
        ),
        (
            "sequencer_config",
            set(&[
                "node.sequencer",
                "execution.sequencer.enable",
                "node.seq-coordinator.enable",
                "node.delayed-sequencer.enable",
            ]),
        ),
        (
            "poster_config",
            set(&["node.seq-coordinator.enable", "node.batch-poster.enable"]),
        ),
    ]
    .into_iter()
    .collect();

    let variants = derive_variants(&base, false);
    assert_eq!(variants.len(), 4);
    for variant in &variants {
        assert_eq!(
            changed_paths(&base, &variant.document),
            expected[variant.name],
            "unexpected patch set for {}",
            variant.name
        );
    }
}

#[test]
fn test_simple_topology_patches_only_documented_fields() {
    let settings = Settings::default();
    let base = base(&settings);

    let variants = derive_variants(&base, true);
    assert_eq!(variants.len(), 1);
    assert_eq!(
        changed_paths(&base, &variants[0].document),
        set(&[
            "node.staker.enable",
            "node.staker.use-smart-contract-wallet",
            "node.staker.dangerous.without-block-validator",
            "node.sequencer",
            "execution.sequencer.enable",
            "node.dangerous.no-sequencer-coordinator",
            "node.delayed-sequencer.enable",
            "node.batch-poster.enable",
            "node.batch-poster.redis-url",
        ])
    );
}

#[test]
fn test_l3_variant_patches_only_documented_fields() {
    let settings = Settings::default();
    let resolver = IdentityResolver::new(&settings);
    let base = base(&settings);

    let l3 = l3_variant(
        &base,
        "ws://sequencer:8548",
        &resolver.resolve_address("l3owner", None).unwrap(),
        &resolver.resolve_address("l3sequencer", None).unwrap(),
        &settings,
    );

    assert_eq!(
        changed_paths(&base, &l3.document),
        set(&[
            "parent-chain.connection.url",
            "chain.id",
            "chain.info-files",
            "node.staker.parent-chain-wallet.account",
            "node.batch-poster.parent-chain-wallet.account",
            "node.staker.enable",
            "node.staker.use-smart-contract-wallet",
            "node.sequencer",
            "execution.sequencer.enable",
            "node.dangerous.no-sequencer-coordinator",
            "node.delayed-sequencer.enable",
            "node.delayed-sequencer.finalize-distance",
            "node.delayed-sequencer.use-merge-finality",
            "node.batch-poster.enable",
            "node.batch-poster.redis-url",
        ])
    );
    assert_eq!(
        l3.document.node.staker.parent_chain_wallet.account,
        resolver.role(FixedRole::L3Owner).unwrap().address_string()
    );
}

#[test]
fn test_written_documents_share_untouched_fields() {
    let dir = TempDir::new().unwrap();
    let settings = Settings {
        config_path: dir.path().to_path_buf(),
        ..Settings::default()
    };
    let resolver = IdentityResolver::new(&settings);
    let inputs = NetworkInputs {
        l1_url: "ws://geth:8546".to_string(),
        l2_url: "ws://sequencer:8548".to_string(),
        redis_url: "redis://redis:6379".to_string(),
        validation_node_url: "ws://validation_node:8549".to_string(),
    };

    write_configs(&resolver, &inputs, false).unwrap();

    let read = |name: &str| -> Value {
        let raw = fs::read_to_string(dir.path().join(format!("{}.json", name))).unwrap();
        serde_json::from_str(&raw).unwrap()
    };

    let docs: Vec<Value> = [
        "validator_config",
        "unsafe_staker_config",
        "sequencer_config",
        "poster_config",
    ]
    .iter()
    .map(|name| read(name))
    .collect();

    for doc in &docs[1..] {
        assert_eq!(doc["node"]["block-validator"], docs[0]["node"]["block-validator"]);
        assert_eq!(
            doc["node"]["batch-poster"]["data-poster"],
            docs[0]["node"]["batch-poster"]["data-poster"]
        );
        assert_eq!(doc["parent-chain"], docs[0]["parent-chain"]);
        assert_eq!(doc["chain"], docs[0]["chain"]);
        assert_eq!(doc["http"], docs[0]["http"]);
    }

    let validation = read("validation_node_config");
    assert_eq!(
        validation["auth"]["jwtsecret"],
        docs[0]["node"]["block-validator"]["validation-server"]["jwtsecret"]
    );
}
