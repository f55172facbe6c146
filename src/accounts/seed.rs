//! Classification of symbolic account names.
//!
//! Every recognised name maps onto exactly one [`SeedSpec`], the recipe used
//! to derive its key. Exact role names are matched before any prefix form.

use super::error::AccountError;

/// Roles whose keys come from the shared mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedRole {
    Funnel,
    Sequencer,
    Validator,
    L3Owner,
    L3Sequencer,
    L2Owner,
}

impl FixedRole {
    /// All fixed roles in derivation-index order
    pub const ALL: [FixedRole; 6] = [
        FixedRole::Funnel,
        FixedRole::Sequencer,
        FixedRole::Validator,
        FixedRole::L3Owner,
        FixedRole::L3Sequencer,
        FixedRole::L2Owner,
    ];

    /// HD derivation index of the role
    pub const fn index(self) -> u32 {
        match self {
            FixedRole::Funnel => 0,
            FixedRole::Sequencer => 1,
            FixedRole::Validator => 2,
            FixedRole::L3Owner => 3,
            FixedRole::L3Sequencer => 4,
            FixedRole::L2Owner => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            FixedRole::Funnel => "funnel",
            FixedRole::Sequencer => "sequencer",
            FixedRole::Validator => "validator",
            FixedRole::L3Owner => "l3owner",
            FixedRole::L3Sequencer => "l3sequencer",
            FixedRole::L2Owner => "l2owner",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }
}

/// Recipe for deriving an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSpec {
    /// Key at `index` under the shared mnemonic
    MnemonicIndex(u32),
    /// The configured owner key
    FixedPrivateKey,
    /// SHA-256 of the raw string
    NameHash(String),
    /// SHA-256 of `"{raw}_thread_{thread_id}"`
    ThreadNameHash { raw: String, thread_id: u32 },
    /// Hex-encoded key given verbatim
    RawPrivateKey(String),
    /// Fresh address with no backing key
    RandomAddress,
}

pub const OWNER_NAME: &str = "owner";
pub const RANDOM_NAME: &str = "random";
pub const USER_PREFIX: &str = "user_";
pub const THREAD_USER_PREFIX: &str = "threaduser_";
pub const KEY_PREFIX: &str = "key_";
pub const ADDRESS_PREFIX: &str = "address_";

/// Classify `name` into the derivation recipe it stands for.
///
/// `thread_id` is only consulted by the `threaduser_` form, which hashes the
/// name with its leading `thread` dropped so that `threaduser_x` on thread
/// `n` equals `user_x_thread_n`.
pub fn classify(name: &str, thread_id: Option<u32>) -> Result<SeedSpec, AccountError> {
    if let Some(role) = FixedRole::from_name(name) {
        return Ok(SeedSpec::MnemonicIndex(role.index()));
    }
    if name == OWNER_NAME {
        return Ok(SeedSpec::FixedPrivateKey);
    }
    if name == RANDOM_NAME {
        return Ok(SeedSpec::RandomAddress);
    }
    if name.starts_with(USER_PREFIX) {
        return Ok(SeedSpec::NameHash(name.to_string()));
    }
    if name.starts_with(THREAD_USER_PREFIX) {
        let thread_id =
            thread_id.ok_or_else(|| AccountError::MissingThreadContext(name.to_string()))?;
        return Ok(SeedSpec::ThreadNameHash {
            raw: name["thread".len()..].to_string(),
            thread_id,
        });
    }
    if let Some(hex) = name.strip_prefix(KEY_PREFIX) {
        return Ok(SeedSpec::RawPrivateKey(hex.to_string()));
    }

    Err(AccountError::UnknownAccountName(name.to_string()))
}
