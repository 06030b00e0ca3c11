use crate::events::{SimEvent, Step};
use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Reads whitespace-separated steps from stdin, one or more per line.
/// `quit` or end of input stops the simulation.
pub async fn read_steps(tx: Sender<SimEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::error!("Failed to read stdin: {}", e);
                break;
            }
        };

        for word in line.split_whitespace() {
            let event = match word {
                "quit" | "q" => SimEvent::Quit,
                _ => match word.parse::<Step>() {
                    Ok(step) => SimEvent::Step(step),
                    Err(e) => {
                        log::warn!("{}", e);
                        continue;
                    }
                },
            };
            if tx.send(event).await.is_err() {
                return;
            }
        }
    }

    let _ = tx.send(SimEvent::Quit).await;
}
