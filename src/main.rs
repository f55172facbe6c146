use clap::{Args, Parser, Subcommand};
use color_eyre::Result;
use color_eyre::Section;
use env_logger::Env;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

use testnode_config::accounts::{
    write_accounts, IdentityResolver, Web3Keystore, NAMED_ACCOUNT_HELP,
};
use testnode_config::genesis::Layer;
use testnode_config::output::{write_chain_config, write_configs, NetworkInputs};
use testnode_config::prysm::write_prysm_config;
use testnode_config::settings::{load_settings, Settings};
use testnode_config::stress::{run_stress, StressOptions};

/// Identity and configuration generator for the local rollup test network
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = NAMED_ACCOUNT_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// YAML file overriding the built-in network constants
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Directory generated documents are written to
    #[arg(long, global = true)]
    config_path: Option<PathBuf>,

    /// Directory keystore files are written to
    #[arg(long, global = true)]
    keystore: Option<PathBuf>,

    /// Layer-1 node endpoint
    #[arg(long, global = true, default_value = "ws://geth:8546")]
    l1url: String,

    /// Layer-2 node endpoint, the layer-3 parent chain
    #[arg(long, global = true, default_value = "ws://sequencer:8548")]
    l2url: String,

    /// Redis endpoint used for sequencer coordination
    #[arg(long, global = true, default_value = "redis://redis:6379")]
    redis_url: String,

    /// Validation service endpoint
    #[arg(long, global = true, default_value = "ws://validation_node:8549")]
    validation_node_url: String,

    #[command(flatten)]
    stress: StressArgs,
}

#[derive(Args, Debug)]
struct StressArgs {
    /// Number of handler threads
    #[arg(long, global = true, default_value_t = 1)]
    threads: u32,

    /// Repetitions per thread
    #[arg(long, global = true, default_value_t = 1)]
    times: u32,

    /// Pause between repetitions, in milliseconds
    #[arg(long, global = true, default_value_t = 0)]
    delay: u64,

    /// Run threads one after another
    #[arg(long, global = true)]
    serial: bool,
}

impl StressArgs {
    fn options(&self) -> StressOptions {
        StressOptions {
            threads: self.threads,
            times: self.times,
            delay: Duration::from_millis(self.delay),
            serial: self.serial,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the requested address
    PrintAddress {
        /// Address (see general help)
        #[arg(long, default_value = "funnel")]
        account: String,
    },
    /// Prints the requested private key
    PrintPrivateKey {
        /// Account (see general help)
        #[arg(long, default_value = "funnel")]
        account: String,
    },
    /// Writes wallet files
    WriteAccounts,
    /// Writes config files
    WriteConfig {
        /// Simple config (sequencer is also poster, validator)
        #[arg(long)]
        simple: bool,
    },
    /// Writes prysm config files
    WritePrysmConfig,
    /// Writes l2 chain config file
    WriteL2ChainConfig {
        /// Initial chain owner address
        #[arg(long)]
        l2owner: String,
    },
    /// Writes l3 chain config file
    WriteL3ChainConfig {
        /// Initial chain owner address
        #[arg(long)]
        l2owner: String,
    },
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => load_settings(path)?,
            None => Settings::default(),
        };
        if let Some(path) = &self.config_path {
            settings.config_path = path.clone();
        }
        if let Some(path) = &self.keystore {
            settings.keystore_dir = path.clone();
        }
        settings.validate()?;
        Ok(settings)
    }

    fn network_inputs(&self) -> NetworkInputs {
        NetworkInputs {
            l1_url: self.l1url.clone(),
            l2_url: self.l2url.clone(),
            redis_url: self.redis_url.clone(),
            validation_node_url: self.validation_node_url.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let cli = Cli::parse();

    // Logs go to stderr so printed addresses and keys stay clean on stdout
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = cli.settings()?;
    let resolver = IdentityResolver::new(&settings);

    match &cli.command {
        Command::PrintAddress { account } => {
            run_stress(&cli.stress.options(), |thread_id| {
                let address = resolver
                    .resolve_address(account, Some(thread_id))
                    .suggestion(NAMED_ACCOUNT_HELP)?;
                println!("{}", address);
                Ok(())
            })?;
        }
        Command::PrintPrivateKey { account } => {
            run_stress(&cli.stress.options(), |thread_id| {
                let identity = resolver
                    .resolve(account, Some(thread_id))
                    .suggestion(NAMED_ACCOUNT_HELP)?;
                println!("{}", identity.private_key_hex());
                Ok(())
            })?;
        }
        Command::WriteAccounts => {
            let keystore = Web3Keystore::new(&settings.keystore_dir);
            let written = write_accounts(&resolver, &keystore)?;
            info!("Wrote {} keystore files to {:?}", written.len(), keystore.dir());
        }
        Command::WriteConfig { simple } => {
            let topology = if *simple { "simple" } else { "full" };
            info!("Writing {} topology configs to {:?}", topology, settings.config_path);
            write_configs(&resolver, &cli.network_inputs(), *simple)?;
        }
        Command::WritePrysmConfig => {
            write_prysm_config(&settings.config_path)?;
        }
        Command::WriteL2ChainConfig { l2owner } => {
            write_chain_config(&settings.config_path, Layer::L2, l2owner)?;
        }
        Command::WriteL3ChainConfig { l2owner } => {
            write_chain_config(&settings.config_path, Layer::L3, l2owner)?;
        }
    }

    Ok(())
}
