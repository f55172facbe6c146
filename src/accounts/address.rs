//! Address resolution: every account name plus literal and random addresses.

use super::error::AccountError;
use super::identity::IdentityResolver;
use super::seed::{ADDRESS_PREFIX, RANDOM_NAME};
use rand::Rng;

/// Fresh `0x`-prefixed 20-byte address with no backing key
pub fn random_address() -> String {
    let bytes: [u8; 20] = rand::thread_rng().gen();
    format!("0x{}", hex::encode(bytes))
}

impl IdentityResolver<'_> {
    /// Resolve `name` into an address string.
    ///
    /// `address_<rest>` returns `<rest>` untouched, without any format or
    /// checksum validation.
    pub fn resolve_address(
        &self,
        name: &str,
        thread_id: Option<u32>,
    ) -> Result<String, AccountError> {
        if let Some(literal) = name.strip_prefix(ADDRESS_PREFIX) {
            return Ok(literal.to_string());
        }
        if name == RANDOM_NAME {
            return Ok(random_address());
        }
        self.resolve(name, thread_id)
            .map(|identity| identity.address_string())
    }
}
