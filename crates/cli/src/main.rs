//! gadget-id CLI: command-line USB identity configuration tool.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gadget_id_core::identity::UsbIdentity;
use gadget_id_core::paths::{self, IdentityPaths};
use gadget_id_core::preset::{self, PRESETS};
use gadget_id_core::store::IdentityStore;

#[derive(Parser)]
#[command(
    name = "gadget-id",
    version,
    about = "USB gadget identity configuration"
)]
struct Cli {
    /// Directory holding the identity files.
    #[arg(long, default_value = paths::SYSTEM_DIR)]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective identity.
    Show {
        /// Emit JSON instead of human-readable output.
        #[arg(long)]
        json: bool,
    },
    /// Write a new identity.
    Set {
        /// USB Vendor ID (e.g. 0x046d).
        #[arg(long)]
        vid: String,
        /// USB Product ID (e.g. 0xc31c).
        #[arg(long)]
        pid: String,
        /// Manufacturer string; omit or leave blank to clear.
        #[arg(long, default_value = "")]
        manufacturer: String,
        /// Product string; omit or leave blank to clear.
        #[arg(long, default_value = "")]
        product: String,
    },
    /// List the built-in presets.
    Presets,
    /// Apply a built-in preset by name.
    Apply {
        /// Preset name (see `presets`).
        name: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = IdentityStore::new(IdentityPaths::in_dir(&cli.dir));

    match cli.command {
        Commands::Show { json } => {
            let identity = store.load();
            if json {
                println!("{}", serde_json::to_string_pretty(&identity)?);
            } else {
                println!("VID:          {}", identity.vid);
                println!("PID:          {}", identity.pid);
                println!("Manufacturer: {}", identity.manufacturer);
                println!("Product:      {}", identity.product);
                match preset::matching_preset(&identity) {
                    Some(p) => println!("Preset:       {}", p.name),
                    None => println!("Preset:       custom"),
                }
            }
        }
        Commands::Set {
            vid,
            pid,
            manufacturer,
            product,
        } => {
            if vid.is_empty() || pid.is_empty() {
                anyhow::bail!("--vid and --pid must be non-empty");
            }
            store.save(&UsbIdentity {
                vid,
                pid,
                manufacturer,
                product,
            })?;
            println!("Identity saved. Reboot the device for the change to take effect.");
        }
        Commands::Presets => {
            for p in PRESETS {
                println!(
                    "{:<10} {} {} ({} / {})",
                    p.name, p.vid, p.pid, p.manufacturer, p.product
                );
            }
        }
        Commands::Apply { name } => {
            let preset = preset::find_preset(&name).ok_or_else(|| {
                anyhow::anyhow!("Unknown preset '{name}'. Run `gadget-id presets` to list them.")
            })?;
            store.save(&preset.identity())?;
            println!(
                "Applied preset '{}'. Reboot the device for the change to take effect.",
                preset.name
            );
        }
    }

    Ok(())
}
