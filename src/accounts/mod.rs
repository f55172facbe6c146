//! # Named Accounts
//!
//! Symbolic account names used across the testnode scripts resolve into
//! reproducible identities. A name is first classified into a
//! [`SeedSpec`](seed::SeedSpec), which is then executed against the
//! injected [`Settings`](crate::settings::Settings).
//!
//! ## Name Forms
//!
//! - `funnel`, `sequencer`, `validator`, `l3owner`, `l3sequencer`, `l2owner`:
//!   keys 0 through 5 of the shared mnemonic
//! - `owner`: the configured owner key
//! - `user_<name>`: SHA-256 of the full name
//! - `threaduser_<name>`: like `user_<name>_thread_<thread id>`
//! - `key_<hex>`: the given private key
//!
//! Address lookups additionally accept `address_<literal>` and `random`.

pub mod address;
pub mod error;
pub mod identity;
pub mod keystore;
pub mod seed;

pub use address::random_address;
pub use error::AccountError;
pub use identity::{Identity, IdentityResolver};
pub use keystore::{write_accounts, KeystoreWriter, Web3Keystore};
pub use seed::{classify, FixedRole, SeedSpec};

/// Help text listing every valid account and address form
pub const NAMED_ACCOUNT_HELP: &str = concat!(
    "Valid account names:\n",
    "  funnel | sequencer | validator | l2owner - known keys used by l2\n",
    "  l3owner | l3sequencer                    - known keys used by l3\n",
    "  owner                                    - network owner key\n",
    "  user_[Alphanumeric]                      - key will be generated from username\n",
    "  threaduser_[Alphanumeric]                - same as user_[Alphanumeric]_thread_[thread-id]\n",
    "  key_0x[full private key]                 - user with specified private key\n",
    "\n",
    "Valid addresses: any account name, or\n",
    "  address_0x[full eth address]\n",
    "  random",
);
