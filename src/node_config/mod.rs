//! # Node Configuration Synthesis
//!
//! One canonical base document is built per run from the external inputs
//! and the resolved role addresses. Every role document is a deep clone of
//! that base with a fixed set of patches applied, so any field a variant
//! does not patch is identical across all documents of the run.
//!
//! ## Documents
//!
//! | Document | Topology | Patches |
//! |----------|----------|---------|
//! | `sequencer_config` | simple | staking, no block validator, sequencing, standalone, delayed sequencer, batch posting |
//! | `validator_config` | full | staking |
//! | `unsafe_staker_config` | full | staking, no block validator |
//! | `sequencer_config` | full | sequencing, coordinator, delayed sequencer |
//! | `poster_config` | full | coordinator, batch posting |
//! | `l3node_config` | always | layer-3 chain and wallets, all duties, standalone |
//! | `validation_node_config` | always | separate document |

pub mod base;
pub mod types;
pub mod variants;

pub use base::{build_base_config, BaseInputs, L2_CHAIN_ID, L3_CHAIN_ID};
pub use types::{NodeConfig, ValidationNodeConfig};
pub use variants::{
    derive_variants, l3_variant, validation_node_config, ConfigVariant, L3_NODE_CONFIG,
    POSTER_CONFIG, SEQUENCER_CONFIG, UNSAFE_STAKER_CONFIG, VALIDATION_NODE_CONFIG,
    VALIDATOR_CONFIG,
};
