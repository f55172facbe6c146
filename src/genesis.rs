//! Chain genesis parameter documents for the layer-2 and layer-3 chains.
//!
//! Every fork activates at block 0 and blocks are produced on demand. The two
//! layers differ only in chain id, initial ArbOS version and owner.

use crate::node_config::{L2_CHAIN_ID, L3_CHAIN_ID};
use serde::{Deserialize, Serialize};

const ZERO_HASH: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Rollup layer a genesis document is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    L2,
    L3,
}

impl Layer {
    pub const fn chain_id(self) -> u64 {
        match self {
            Layer::L2 => L2_CHAIN_ID,
            Layer::L3 => L3_CHAIN_ID,
        }
    }

    /// The layer-3 chain starts one version behind so upgrade paths get exercised
    pub const fn arbos_version(self) -> u64 {
        match self {
            Layer::L2 => 32,
            Layer::L3 => 31,
        }
    }

    /// Output document name
    pub const fn document_name(self) -> &'static str {
        match self {
            Layer::L2 => "l2_chain_config",
            Layer::L3 => "l3_chain_config",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainGenesis {
    pub chain_id: u64,
    pub homestead_block: u64,
    pub dao_fork_support: bool,
    pub eip150_block: u64,
    pub eip150_hash: String,
    pub eip155_block: u64,
    pub eip158_block: u64,
    pub byzantium_block: u64,
    pub constantinople_block: u64,
    pub petersburg_block: u64,
    pub istanbul_block: u64,
    pub muir_glacier_block: u64,
    pub berlin_block: u64,
    pub london_block: u64,
    pub clique: Clique,
    pub arbitrum: ArbitrumParams,
}

/// Consensus stub; period 0 seals blocks on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clique {
    pub period: u64,
    pub epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArbitrumParams {
    #[serde(rename = "EnableArbOS")]
    pub enable_arbos: bool,
    pub allow_debug_precompiles: bool,
    pub data_availability_committee: bool,
    #[serde(rename = "InitialArbOSVersion")]
    pub initial_arbos_version: u64,
    pub initial_chain_owner: String,
    pub genesis_block_num: u64,
}

/// Build the genesis parameters for `layer`, owned by `owner`
pub fn build_genesis(layer: Layer, owner: &str) -> ChainGenesis {
    ChainGenesis {
        chain_id: layer.chain_id(),
        homestead_block: 0,
        dao_fork_support: true,
        eip150_block: 0,
        eip150_hash: ZERO_HASH.to_string(),
        eip155_block: 0,
        eip158_block: 0,
        byzantium_block: 0,
        constantinople_block: 0,
        petersburg_block: 0,
        istanbul_block: 0,
        muir_glacier_block: 0,
        berlin_block: 0,
        london_block: 0,
        clique: Clique { period: 0, epoch: 0 },
        arbitrum: ArbitrumParams {
            enable_arbos: true,
            allow_debug_precompiles: true,
            data_availability_committee: false,
            initial_arbos_version: layer.arbos_version(),
            initial_chain_owner: owner.to_string(),
            genesis_block_num: 0,
        },
    }
}
