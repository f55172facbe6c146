//! Beacon chain config for the layer-1 consensus client.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Interop preset with every fork active from genesis
pub const PRYSM_CONFIG: &str = r#"
CONFIG_NAME: interop
PRESET_BASE: interop

# Genesis
GENESIS_FORK_VERSION: 0x20000089

# Altair
ALTAIR_FORK_EPOCH: 0
ALTAIR_FORK_VERSION: 0x20000090

# Merge
BELLATRIX_FORK_EPOCH: 0
BELLATRIX_FORK_VERSION: 0x20000091
TERMINAL_TOTAL_DIFFICULTY: 50

# Capella
CAPELLA_FORK_EPOCH: 0
CAPELLA_FORK_VERSION: 0x20000092
MAX_WITHDRAWALS_PER_PAYLOAD: 16

# DENEB
DENEB_FORK_EPOCH: 0
DENEB_FORK_VERSION: 0x20000093

# ELECTRA
ELECTRA_FORK_VERSION: 0x20000094

# Time parameters
SECONDS_PER_SLOT: 2
SLOTS_PER_EPOCH: 6

# Deposit contract
DEPOSIT_CONTRACT_ADDRESS: 0x4242424242424242424242424242424242424242
"#;

/// Write `prysm.yaml` into `dir`
pub fn write_prysm_config(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("prysm.yaml");
    fs::write(&path, PRYSM_CONFIG)
        .wrap_err_with(|| format!("Failed to write prysm config '{}'", path.display()))?;
    info!("Wrote prysm config: {:?}", path);
    Ok(path)
}
