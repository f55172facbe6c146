//! Role-specific documents derived from the base document.

use super::base::L3_CHAIN_ID;
use super::types::*;
use crate::settings::Settings;

pub const VALIDATOR_CONFIG: &str = "validator_config";
pub const UNSAFE_STAKER_CONFIG: &str = "unsafe_staker_config";
pub const SEQUENCER_CONFIG: &str = "sequencer_config";
pub const POSTER_CONFIG: &str = "poster_config";
pub const L3_NODE_CONFIG: &str = "l3node_config";
pub const VALIDATION_NODE_CONFIG: &str = "validation_node_config";

/// A named, independently owned node document
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigVariant {
    pub name: &'static str,
    pub document: NodeConfig,
}

impl ConfigVariant {
    fn new(name: &'static str, document: NodeConfig) -> Self {
        Self { name, document }
    }
}

/// Derive the layer-2 node documents.
///
/// The simple topology is a single node that stakes, sequences and posts,
/// and skips the block validator. The full topology splits those duties
/// across four nodes coordinated through redis.
pub fn derive_variants(base: &NodeConfig, simple: bool) -> Vec<ConfigVariant> {
    if simple {
        let sequencer = base
            .clone()
            .with_staking()
            .without_block_validator()
            .with_sequencing()
            .standalone()
            .with_delayed_sequencer()
            .with_batch_posting();
        return vec![ConfigVariant::new(SEQUENCER_CONFIG, sequencer)];
    }

    let validator = base.clone().with_staking();
    let unsafe_staker = validator.clone().without_block_validator();
    let sequencer = base
        .clone()
        .with_sequencing()
        .with_seq_coordinator()
        .with_delayed_sequencer();
    let poster = base.clone().with_seq_coordinator().with_batch_posting();

    vec![
        ConfigVariant::new(VALIDATOR_CONFIG, validator),
        ConfigVariant::new(UNSAFE_STAKER_CONFIG, unsafe_staker),
        ConfigVariant::new(SEQUENCER_CONFIG, sequencer),
        ConfigVariant::new(POSTER_CONFIG, poster),
    ]
}

/// Derive the layer-3 node document.
///
/// The layer-3 network always runs one node, so it stakes, sequences and
/// posts with coordination off whatever the layer-2 topology is.
pub fn l3_variant(
    base: &NodeConfig,
    l2_url: &str,
    l3_owner: &str,
    l3_sequencer: &str,
    settings: &Settings,
) -> ConfigVariant {
    let document = base
        .clone()
        .with_parent_chain(l2_url)
        .with_staker_account(l3_owner)
        .with_batch_poster_account(l3_sequencer)
        .with_chain(L3_CHAIN_ID, &settings.l3_chain_info_path().to_string_lossy())
        .with_staking()
        .with_sequencing()
        .standalone()
        .with_delayed_sequencer()
        .with_immediate_delayed_sequencing()
        .with_batch_posting();

    ConfigVariant::new(L3_NODE_CONFIG, document)
}

/// Configuration for the validation service shared by all nodes of a run
pub fn validation_node_config(settings: &Settings) -> ValidationNodeConfig {
    ValidationNodeConfig {
        persistent: PersistentSection {
            chain: "local".to_string(),
        },
        ws: WsSection {
            addr: String::new(),
        },
        http: HttpSection {
            addr: String::new(),
            vhosts: None,
            corsdomain: None,
        },
        validation: ValidationApi {
            api_auth: true,
            api_public: false,
        },
        auth: AuthSection {
            jwtsecret: settings.jwt_secret_path().to_string_lossy().into_owned(),
            addr: "0.0.0.0".to_string(),
        },
    }
}
