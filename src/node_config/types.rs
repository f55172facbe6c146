//! Node configuration document types.
//!
//! Field names mirror the flags understood by the rollup node, so every
//! struct serializes in kebab-case. Optional fields are only emitted by the
//! variants that set them.

use serde::{Deserialize, Serialize};

// ============================================================================
// Rollup node document
// ============================================================================

/// Complete configuration document for one rollup node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NodeConfig {
    pub parent_chain: ParentChain,
    pub chain: ChainSection,
    pub node: NodeSection,
    pub execution: ExecutionSection,
    pub persistent: PersistentSection,
    pub ws: WsSection,
    pub http: HttpSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentChain {
    pub connection: Connection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChainSection {
    pub id: u64,
    pub info_files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NodeSection {
    pub staker: Staker,
    pub sequencer: bool,
    pub dangerous: NodeDangerous,
    pub delayed_sequencer: DelayedSequencer,
    pub seq_coordinator: SeqCoordinator,
    pub batch_poster: BatchPoster,
    pub block_validator: BlockValidator,
}

/// Keystore-backed wallet on the parent chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentChainWallet {
    pub account: String,
    pub password: String,
    pub pathname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Staker {
    pub dangerous: StakerDangerous,
    pub parent_chain_wallet: ParentChainWallet,
    pub disable_challenge: bool,
    pub enable: bool,
    pub staker_interval: String,
    pub make_assertion_interval: String,
    pub strategy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_smart_contract_wallet: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StakerDangerous {
    pub without_block_validator: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NodeDangerous {
    pub no_sequencer_coordinator: bool,
    pub disable_blob_reader: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DelayedSequencer {
    pub enable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finalize_distance: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_merge_finality: Option<bool>,
}

/// Redis-based leadership election between sequencer candidates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SeqCoordinator {
    pub enable: bool,
    pub redis_url: String,
    pub lockout_duration: String,
    pub lockout_spare: String,
    pub my_url: String,
    pub retry_interval: String,
    pub seq_num_duration: String,
    pub update_interval: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BatchPoster {
    pub enable: bool,
    pub redis_url: String,
    pub max_delay: String,
    pub l1_block_bound: String,
    pub parent_chain_wallet: ParentChainWallet,
    pub data_poster: DataPoster,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DataPoster {
    pub redis_signer: RedisSigner,
    pub wait_for_l1_finality: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RedisSigner {
    pub signing_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BlockValidator {
    pub validation_server: ValidationServer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationServer {
    pub url: String,
    pub jwtsecret: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExecutionSection {
    pub sequencer: ExecutionSequencer,
    pub forwarding_target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionSequencer {
    pub enable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistentSection {
    pub chain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WsSection {
    pub addr: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpSection {
    pub addr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vhosts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corsdomain: Option<String>,
}

// ============================================================================
// Validation node document
// ============================================================================

/// Configuration for the standalone block validation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationNodeConfig {
    pub persistent: PersistentSection,
    pub ws: WsSection,
    pub http: HttpSection,
    pub validation: ValidationApi,
    pub auth: AuthSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ValidationApi {
    pub api_auth: bool,
    pub api_public: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSection {
    pub jwtsecret: String,
    pub addr: String,
}
