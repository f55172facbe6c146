//! The canonical base node document and the patches applied on top of it.
//!
//! Patches take the document by value and hand back the patched copy, so a
//! variant is always `base.clone().with_x().with_y()` and never touches the
//! base it came from.

use super::types::*;
use crate::settings::Settings;

/// Layer-2 chain id
pub const L2_CHAIN_ID: u64 = 412346;

/// Layer-3 chain id
pub const L3_CHAIN_ID: u64 = 333333;

/// External inputs the base document is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseInputs {
    pub l1_url: String,
    pub redis_url: String,
    pub validation_node_url: String,
    pub validator_address: String,
    pub sequencer_address: String,
}

fn wallet(account: &str, settings: &Settings) -> ParentChainWallet {
    ParentChainWallet {
        account: account.to_string(),
        password: settings.keystore_passphrase.clone(),
        pathname: settings.keystore_dir.to_string_lossy().into_owned(),
    }
}

/// Build the layer-2 base document. Every role toggle starts disabled.
pub fn build_base_config(inputs: &BaseInputs, settings: &Settings) -> NodeConfig {
    NodeConfig {
        parent_chain: ParentChain {
            connection: Connection {
                url: inputs.l1_url.clone(),
            },
        },
        chain: ChainSection {
            id: L2_CHAIN_ID,
            info_files: vec![settings.l2_chain_info_path().to_string_lossy().into_owned()],
        },
        node: NodeSection {
            staker: Staker {
                dangerous: StakerDangerous {
                    without_block_validator: false,
                },
                parent_chain_wallet: wallet(&inputs.validator_address, settings),
                disable_challenge: false,
                enable: false,
                staker_interval: "10s".to_string(),
                make_assertion_interval: "10s".to_string(),
                strategy: "MakeNodes".to_string(),
                use_smart_contract_wallet: None,
            },
            sequencer: false,
            dangerous: NodeDangerous {
                no_sequencer_coordinator: false,
                disable_blob_reader: true,
            },
            delayed_sequencer: DelayedSequencer {
                enable: false,
                finalize_distance: None,
                use_merge_finality: None,
            },
            seq_coordinator: SeqCoordinator {
                enable: false,
                redis_url: inputs.redis_url.clone(),
                lockout_duration: "30s".to_string(),
                lockout_spare: "1s".to_string(),
                my_url: String::new(),
                retry_interval: "0.5s".to_string(),
                seq_num_duration: "24h0m0s".to_string(),
                update_interval: "3s".to_string(),
            },
            batch_poster: BatchPoster {
                enable: false,
                redis_url: inputs.redis_url.clone(),
                max_delay: "30s".to_string(),
                l1_block_bound: "ignore".to_string(),
                parent_chain_wallet: wallet(&inputs.sequencer_address, settings),
                data_poster: DataPoster {
                    redis_signer: RedisSigner {
                        signing_key: settings.signer_key.clone(),
                    },
                    wait_for_l1_finality: false,
                },
            },
            block_validator: BlockValidator {
                validation_server: ValidationServer {
                    url: inputs.validation_node_url.clone(),
                    jwtsecret: settings.jwt_secret_path().to_string_lossy().into_owned(),
                },
            },
        },
        execution: ExecutionSection {
            sequencer: ExecutionSequencer { enable: false },
            forwarding_target: "null".to_string(),
        },
        persistent: PersistentSection {
            chain: "local".to_string(),
        },
        ws: WsSection {
            addr: "0.0.0.0".to_string(),
        },
        http: HttpSection {
            addr: "0.0.0.0".to_string(),
            vhosts: Some("*".to_string()),
            corsdomain: Some("*".to_string()),
        },
    }
}

impl NodeConfig {
    /// Enable staking through a smart-contract wallet
    pub fn with_staking(mut self) -> Self {
        self.node.staker.enable = true;
        self.node.staker.use_smart_contract_wallet = Some(true);
        self
    }

    /// Stake without waiting on the block validator. Unsafe for real disputes.
    pub fn without_block_validator(mut self) -> Self {
        self.node.staker.dangerous.without_block_validator = true;
        self
    }

    pub fn with_sequencing(mut self) -> Self {
        self.node.sequencer = true;
        self.execution.sequencer.enable = true;
        self
    }

    pub fn with_delayed_sequencer(mut self) -> Self {
        self.node.delayed_sequencer.enable = true;
        self
    }

    pub fn with_seq_coordinator(mut self) -> Self {
        self.node.seq_coordinator.enable = true;
        self
    }

    pub fn with_batch_posting(mut self) -> Self {
        self.node.batch_poster.enable = true;
        self
    }

    /// Run as the only node: no coordinator, no redis for the poster
    pub fn standalone(mut self) -> Self {
        self.node.dangerous.no_sequencer_coordinator = true;
        self.node.batch_poster.redis_url = String::new();
        self
    }

    pub fn with_parent_chain(mut self, url: &str) -> Self {
        self.parent_chain.connection.url = url.to_string();
        self
    }

    pub fn with_chain(mut self, id: u64, info_file: &str) -> Self {
        self.chain.id = id;
        self.chain.info_files = vec![info_file.to_string()];
        self
    }

    pub fn with_staker_account(mut self, account: &str) -> Self {
        self.node.staker.parent_chain_wallet.account = account.to_string();
        self
    }

    pub fn with_batch_poster_account(mut self, account: &str) -> Self {
        self.node.batch_poster.parent_chain_wallet.account = account.to_string();
        self
    }

    /// Sequence delayed messages immediately instead of waiting on finality
    pub fn with_immediate_delayed_sequencing(mut self) -> Self {
        self.node.delayed_sequencer.finalize_distance = Some(0);
        self.node.delayed_sequencer.use_merge_finality = Some(false);
        self
    }
}
