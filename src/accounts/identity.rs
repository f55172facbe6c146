//! Deterministic identity derivation.

use super::error::AccountError;
use super::seed::{classify, FixedRole, SeedSpec};
use crate::settings::Settings;
use alloy_primitives::{Address, B256};
use alloy_signer_local::coins_bip39::English;
use alloy_signer_local::{MnemonicBuilder, PrivateKeySigner};
use log::debug;
use sha2::{Digest, Sha256};

/// A private key together with the address it controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    private_key: B256,
    address: Address,
}

impl Identity {
    fn from_signer(signer: &PrivateKeySigner) -> Self {
        Self {
            private_key: signer.to_bytes(),
            address: signer.address(),
        }
    }

    /// Build an identity from raw key bytes; `None` if they are not a valid secp256k1 scalar
    pub fn from_key_bytes(bytes: B256) -> Option<Self> {
        PrivateKeySigner::from_bytes(&bytes)
            .ok()
            .map(|signer| Self::from_signer(&signer))
    }

    /// Parse a hex private key, with or without `0x`
    pub fn from_hex(hex_key: &str) -> Option<Self> {
        let digits = hex_key.strip_prefix("0x").unwrap_or(hex_key);
        let bytes = hex::decode(digits).ok()?;
        if bytes.len() != 32 {
            return None;
        }
        Self::from_key_bytes(B256::from_slice(&bytes))
    }

    /// Identity whose key is the SHA-256 digest of `seed`
    pub fn from_name_hash(seed: &str) -> Option<Self> {
        let digest: [u8; 32] = Sha256::digest(seed.as_bytes()).into();
        Self::from_key_bytes(B256::from(digest))
    }

    pub fn private_key(&self) -> B256 {
        self.private_key
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// `0x`-prefixed lowercase private key
    pub fn private_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.private_key))
    }

    /// EIP-55 checksummed address
    pub fn address_string(&self) -> String {
        self.address.to_checksum(None)
    }
}

/// Resolves account names against an injected set of constants.
#[derive(Debug, Clone, Copy)]
pub struct IdentityResolver<'a> {
    settings: &'a Settings,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    /// Resolve `name` into its identity.
    ///
    /// The result is a pure function of `(name, thread_id)` and the injected
    /// settings. `random` is rejected here since it has no backing key.
    pub fn resolve(&self, name: &str, thread_id: Option<u32>) -> Result<Identity, AccountError> {
        let spec = classify(name, thread_id)?;
        debug!("Resolving account {} via {:?}", name, spec);

        let invalid_key = || AccountError::InvalidKeyFormat(name.to_string());
        match spec {
            SeedSpec::MnemonicIndex(index) => self.special_account(index),
            SeedSpec::FixedPrivateKey => {
                Identity::from_hex(&self.settings.owner_private_key).ok_or_else(invalid_key)
            }
            SeedSpec::NameHash(raw) => Identity::from_name_hash(&raw).ok_or_else(invalid_key),
            SeedSpec::ThreadNameHash { raw, thread_id } => {
                Identity::from_name_hash(&format!("{}_thread_{}", raw, thread_id))
                    .ok_or_else(invalid_key)
            }
            SeedSpec::RawPrivateKey(hex_key) => {
                Identity::from_hex(&hex_key).ok_or_else(invalid_key)
            }
            SeedSpec::RandomAddress => Err(AccountError::UnknownAccountName(name.to_string())),
        }
    }

    /// Key at `index` under the configured mnemonic and HD path
    pub fn special_account(&self, index: u32) -> Result<Identity, AccountError> {
        MnemonicBuilder::<English>::default()
            .phrase(self.settings.mnemonic.as_str())
            .derivation_path(self.settings.special_account_path(index))
            .and_then(|builder| builder.build())
            .map(|signer| Identity::from_signer(&signer))
            .map_err(|e| AccountError::Derivation {
                index,
                reason: e.to_string(),
            })
    }

    /// Identity of a fixed role
    pub fn role(&self, role: FixedRole) -> Result<Identity, AccountError> {
        self.special_account(role.index())
    }
}
