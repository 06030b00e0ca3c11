use crate::events::SimEvent;
use async_channel::Sender;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::io;
use std::path::{Path, PathBuf};

/// Creates the directory holding `config_path` and returns it in canonical
/// form together with the canonical path of the file inside it.
fn watch_target(config_path: &Path) -> io::Result<(PathBuf, PathBuf)> {
    let Some(file_name) = config_path.file_name() else {
        return Err(io::Error::other("config path has no file name"));
    };
    let config_dir = match config_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    fs_err::create_dir_all(config_dir)?;
    let config_dir = fs_err::canonicalize(config_dir)?;
    let target = config_dir.join(file_name);
    Ok((config_dir, target))
}

/// Whether an event path names `target`. A path spelled differently is
/// matched on its file name and canonical parent.
fn is_config_event(path: &Path, target: &Path) -> bool {
    if path == target {
        return true;
    }
    if path.file_name() != target.file_name() {
        return false;
    }
    path.parent()
        .and_then(|dir| fs_err::canonicalize(dir).ok())
        .is_some_and(|dir| Some(dir.as_path()) == target.parent())
}

/// Sends [`SimEvent::ConfigReload`] whenever `config_path` is written,
/// created or removed.
pub async fn run_async_watcher(tx: Sender<SimEvent>, config_path: PathBuf) {
    let (config_dir, target) = match watch_target(&config_path) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::error!("Failed to resolve config path for watching: {}", e);
            return;
        }
    };

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }
    log::debug!("watching {}", target.display());

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| is_config_event(p, &target))
                    && tx.send(SimEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
