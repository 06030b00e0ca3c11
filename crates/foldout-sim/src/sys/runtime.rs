use crate::events::SimEvent;
use async_channel::Sender;
use std::path::PathBuf;
use std::thread;
use tokio::runtime::Runtime;

/// Spawns the stdin reader and config watcher on a dedicated Tokio thread.
pub fn start_background_services(tx: Sender<SimEvent>, config_path: PathBuf) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create Tokio runtime: {}", e);
                tx.close();
                return;
            }
        };

        rt.block_on(async {
            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::sys::input::read_steps(tx).await;
                });
            }

            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::sys::watcher::run_async_watcher(tx, config_path).await;
                });
            }

            std::future::pending::<()>().await;
        });
    });
}
