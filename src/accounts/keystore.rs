//! Keystore files for the fixed-role accounts.
//!
//! Each role key is encrypted into a Web3 secret-storage file named
//! `<checksummed address>.key`. Encryption is slow (scrypt), so every role
//! is handed to a worker task and the results come back over a channel.

use super::identity::{Identity, IdentityResolver};
use super::seed::FixedRole;
use alloy_signer_local::PrivateKeySigner;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// Sink that encrypts an identity under a passphrase and persists it
pub trait KeystoreWriter: Sync {
    /// Returns the path of the written container
    fn write(&self, identity: &Identity, passphrase: &str) -> Result<PathBuf>;
}

/// Writes standard encrypted JSON keystores into one directory
#[derive(Debug, Clone)]
pub struct Web3Keystore {
    dir: PathBuf,
}

impl Web3Keystore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl KeystoreWriter for Web3Keystore {
    fn write(&self, identity: &Identity, passphrase: &str) -> Result<PathBuf> {
        let file_name = format!("{}.key", identity.address_string());
        let mut rng = rand::thread_rng();
        PrivateKeySigner::encrypt_keystore(
            &self.dir,
            &mut rng,
            identity.private_key(),
            passphrase,
            Some(file_name.as_str()),
        )
        .map_err(|e| eyre!("Failed to encrypt keystore {}: {}", file_name, e))?;

        Ok(self.dir.join(file_name))
    }
}

/// Encrypt every fixed-role account through `writer`.
///
/// All roles are resolved before any worker starts. Files written by
/// workers that finished before a failure are left in place.
pub fn write_accounts<W: KeystoreWriter>(
    resolver: &IdentityResolver<'_>,
    writer: &W,
) -> Result<Vec<PathBuf>> {
    let passphrase = resolver.settings().keystore_passphrase.as_str();

    let identities = FixedRole::ALL
        .iter()
        .map(|role| resolver.role(*role).map(|identity| (*role, identity)))
        .collect::<Result<Vec<_>, _>>()?;

    let (tx, rx) = mpsc::channel();
    rayon::scope(|scope| {
        for (role, identity) in &identities {
            let tx = tx.clone();
            scope.spawn(move |_| {
                debug!("Encrypting keystore for {}", role.name());
                let result = writer.write(identity, passphrase);
                // receiver outlives the scope
                let _ = tx.send((*role, result));
            });
        }
    });
    drop(tx);

    let mut written = Vec::with_capacity(identities.len());
    for (role, result) in rx {
        let path =
            result.wrap_err_with(|| format!("Failed to write keystore for {}", role.name()))?;
        info!("Wrote {} keystore: {:?}", role.name(), path);
        written.push((role.index(), path));
    }
    written.sort_by_key(|(index, _)| *index);

    Ok(written.into_iter().map(|(_, path)| path).collect())
}
