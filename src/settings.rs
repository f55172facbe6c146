//! Process-wide constants for a testnode run.
//!
//! Every value in here is read-only for the lifetime of a command. The
//! defaults are the documented constants of the local test network; none of
//! them are secret. A YAML settings file may replace any subset of them.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Mnemonic backing the fixed-role accounts.
pub const DEFAULT_MNEMONIC: &str =
    "indoor dish desk flag debris potato excuse depart ticket judge file exit";

/// HD path prefix; the fixed-role index is appended.
pub const DEFAULT_HD_PATH_PREFIX: &str = "m/44'/60'/0'/0/";

/// Private key of the network-wide `owner` account.
pub const DEFAULT_OWNER_PRIVATE_KEY: &str =
    "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

/// Signing key used by the batch poster's redis signer.
pub const DEFAULT_SIGNER_KEY: &str =
    "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

pub const DEFAULT_KEYSTORE_PASSPHRASE: &str = "passphrase";
pub const DEFAULT_KEYSTORE_DIR: &str = "/home/user/l1keystore";
pub const DEFAULT_CONFIG_PATH: &str = "/config";

/// Errors raised when a settings file carries unusable values
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("mnemonic cannot be empty")]
    EmptyMnemonic,

    #[error("{field} must be a 32-byte hex string, got '{value}'")]
    InvalidKeyLiteral { field: &'static str, value: String },

    #[error("{field} cannot be empty")]
    EmptyPath { field: &'static str },
}

/// Injected constants shared by the resolver and the document builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mnemonic: String,
    pub hd_path_prefix: String,
    pub owner_private_key: String,
    pub signer_key: String,
    pub keystore_passphrase: String,
    pub keystore_dir: PathBuf,
    pub config_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mnemonic: DEFAULT_MNEMONIC.to_string(),
            hd_path_prefix: DEFAULT_HD_PATH_PREFIX.to_string(),
            owner_private_key: DEFAULT_OWNER_PRIVATE_KEY.to_string(),
            signer_key: DEFAULT_SIGNER_KEY.to_string(),
            keystore_passphrase: DEFAULT_KEYSTORE_PASSPHRASE.to_string(),
            keystore_dir: PathBuf::from(DEFAULT_KEYSTORE_DIR),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl Settings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.mnemonic.trim().is_empty() {
            return Err(SettingsError::EmptyMnemonic);
        }

        let key_literal = Regex::new(r"^(0x)?[0-9a-fA-F]{64}$").expect("static regex");
        for (field, value) in [
            ("owner_private_key", &self.owner_private_key),
            ("signer_key", &self.signer_key),
        ] {
            if !key_literal.is_match(value) {
                return Err(SettingsError::InvalidKeyLiteral {
                    field,
                    value: value.clone(),
                });
            }
        }

        if self.hd_path_prefix.is_empty() {
            return Err(SettingsError::EmptyPath { field: "hd_path_prefix" });
        }
        if self.keystore_dir.as_os_str().is_empty() {
            return Err(SettingsError::EmptyPath { field: "keystore_dir" });
        }
        if self.config_path.as_os_str().is_empty() {
            return Err(SettingsError::EmptyPath { field: "config_path" });
        }

        Ok(())
    }

    /// Derivation path of the fixed-role account at `index`
    pub fn special_account_path(&self, index: u32) -> String {
        format!("{}{}", self.hd_path_prefix, index)
    }

    pub fn jwt_secret_path(&self) -> PathBuf {
        self.config_path.join("val_jwt.hex")
    }

    pub fn l2_chain_info_path(&self) -> PathBuf {
        self.config_path.join("l2_chain_info.json")
    }

    pub fn l3_chain_info_path(&self) -> PathBuf {
        self.config_path.join("l3_chain_info.json")
    }
}

/// Load settings from a YAML file, filling missing fields with defaults
pub fn load_settings(path: &Path) -> Result<Settings> {
    info!("Loading settings from: {:?}", path);

    let file = File::open(path)
        .wrap_err_with(|| format!("Failed to open settings file '{}'", path.display()))?;
    let settings: Settings = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse settings file '{}'", path.display()))?;

    settings.validate()?;

    Ok(settings)
}
