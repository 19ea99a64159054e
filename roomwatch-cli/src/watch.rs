use anyhow::{Context, Result};
use colored::*;
use roomwatch::RoomId;
use roomwatch::model::PageOrigin;
use roomwatch::native::{LiveReloadRunner, Reload, WatchConfig, WsConnector};
use std::process::ExitStatus;
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Reports reload signals and optionally runs a shell command for each one.
struct CommandReload {
    room: RoomId,
    exec: Option<String>,
}

impl Reload for CommandReload {
    fn reload(&mut self) {
        println!("{} {}", "↻ message:new in".green().bold(), self.room);

        if let Some(cmd) = &self.exec {
            if let Err(e) = spawn_exec(cmd) {
                warn!("Failed to run `{}`: {}", cmd, e);
            }
        }
    }
}

/// Starts `cmd` and reaps it on the runtime. Must be called inside a tokio runtime.
fn spawn_exec(cmd: &str) -> std::io::Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = shell(cmd).spawn()?;
    let cmd = cmd.to_string();

    Ok(tokio::spawn(async move {
        match child.wait().await {
            Ok(status) => {
                if !status.success() {
                    warn!("`{}` exited with {}", cmd, status);
                }
                Some(status)
            }
            Err(e) => {
                warn!("Failed to wait for `{}`: {}", cmd, e);
                None
            }
        }
    }))
}

fn shell(cmd: &str) -> Command {
    if cfg!(windows) {
        let mut command = Command::new("cmd");
        command.args(["/C", cmd]);
        command
    } else {
        let mut command = Command::new("sh");
        command.args(["-c", cmd]);
        command
    }
}

pub async fn run(url: &str, room: Option<&str>, exec: Option<String>) -> Result<()> {
    let origin = PageOrigin::parse(url).with_context(|| format!("Invalid server URL `{}`", url))?;

    let Some(room) = RoomId::from_injected(room) else {
        println!("{}", "No room configured, nothing to watch.".yellow());
        return Ok(());
    };

    info!("Watching room {} on {}", room, origin.endpoint(&room));
    let reload = CommandReload {
        room: room.clone(),
        exec,
    };
    let config = WatchConfig::new(origin, Some(room));
    let handle = LiveReloadRunner::new(config, WsConnector, reload).spawn();

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;
    info!("Stopping");
    handle.shutdown().await;

    Ok(())
}
