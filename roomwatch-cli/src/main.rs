use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

mod watch;

#[derive(Parser)]
#[command(name = "cargo-roomwatch")]
#[command(bin_name = "cargo-roomwatch")]
enum Cli {
    Roomwatch(RoomwatchArgs),
}

#[derive(clap::Args)]
struct RoomwatchArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Package the browser client with wasm-pack
    Build {
        #[arg(long, default_value = "./roomwatch-wasm")]
        client: String,

        #[arg(short, long, default_value = "./static/roomwatch")]
        out: String,
    },

    /// Subscribe to a room and report every reload signal
    Watch {
        /// Base URL of the server, e.g. https://inbox.example.com
        #[arg(long)]
        url: String,

        /// Room to subscribe to. Absent or "number:0" disables watching
        #[arg(long, env = "ROOMWATCH_ROOM")]
        room: Option<String>,

        /// Shell command to run on each reload signal
        #[arg(long)]
        exec: Option<String>,
    },
}

fn main() -> Result<()> {
    let Cli::Roomwatch(args) = Cli::parse();

    match args.command {
        Commands::Build { client, out } => {
            println!("{}", "🚀 Building roomwatch client...".green().bold());

            let out_path = Path::new(&out);
            if out_path.exists() {
                fs::remove_dir_all(out_path)
                    .with_context(|| format!("Failed to clean {}", out_path.display()))?;
            }
            fs::create_dir_all(out_path)?;

            println!("{}", "📦 Compiling WebAssembly...".cyan());
            run_wasm_pack(&client, out_path)?;

            println!("{}", "✨ Build completed successfully!".green().bold());
            println!("   📂 WASM: {}", out_path.display());
        }
        Commands::Watch { url, room, exec } => {
            watch::init_tracing();
            tokio::runtime::Runtime::new()
                .context("Failed to start tokio runtime")?
                .block_on(watch::run(&url, room.as_deref(), exec))?;
        }
    }

    Ok(())
}

fn run_wasm_pack(client_path: &str, out_dir: &Path) -> Result<()> {
    let out_abs = fs::canonicalize(out_dir).unwrap_or(out_dir.to_path_buf());
    let status = Command::new("wasm-pack")
        .args(["build", "--target", "web", "--out-dir"])
        .arg(out_abs)
        .current_dir(client_path)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .context("Failed to run wasm-pack. Is it installed?")?;

    if !status.success() {
        anyhow::bail!("WASM build failed");
    }
    Ok(())
}
