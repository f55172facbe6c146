//! # Testnode Config - Identities and configuration for a local rollup test network
//!
//! This library derives reproducible account identities for the fixed
//! network roles and ad-hoc test users, and synthesizes the family of
//! mutually consistent node configuration documents the test network's
//! processes read at startup.
//!
//! ## Overview
//!
//! A testnode run consists of a layer-1 chain, a layer-2 rollup running in
//! either a simple (single node) or full (validator, staker, sequencer and
//! poster) topology, and a single-node layer-3 rollup on top of it. All of
//! them share one mnemonic for their role keys, so every address is known in
//! advance and identical across runs.
//!
//! ## Architecture
//!
//! Data flows in one direction:
//!
//! - `accounts`: account name classification, identity and address
//!   resolution, keystore files for the fixed roles
//! - `node_config`: the base node document and its role variants
//! - `genesis`: layer-2 and layer-3 chain genesis parameters
//! - `prysm`: static beacon chain config for the layer-1 consensus client
//! - `output`: writing documents to the config directory
//! - `stress`: repeated and concurrent execution of command handlers
//! - `settings`: the injected process-wide constants
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use testnode_config::accounts::IdentityResolver;
//! use testnode_config::output::{write_configs, NetworkInputs};
//! use testnode_config::settings::Settings;
//!
//! let settings = Settings::default();
//! let resolver = IdentityResolver::new(&settings);
//!
//! println!("{}", resolver.resolve_address("sequencer", None)?);
//!
//! let inputs = NetworkInputs {
//!     l1_url: "ws://geth:8546".to_string(),
//!     l2_url: "ws://sequencer:8548".to_string(),
//!     redis_url: "redis://redis:6379".to_string(),
//!     validation_node_url: "ws://validation_node:8549".to_string(),
//! };
//! write_configs(&resolver, &inputs, false)?;
//! # Ok::<(), color_eyre::Report>(())
//! ```
//!
//! ## Error Handling
//!
//! Name resolution fails with [`accounts::AccountError`]. Everything that
//! touches the filesystem returns `color_eyre::Result` with context attached.

pub mod accounts;
pub mod genesis;
pub mod node_config;
pub mod output;
pub mod prysm;
pub mod settings;
pub mod stress;
