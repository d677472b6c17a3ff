//! Background log reader
//!
//! One task per log session. It opens the stream, runs the frame decoder
//! incrementally over arriving chunks, and forwards record batches to the
//! event loop. A `watch` channel cancels it; so does dropping the sender
//! or closing the message channel.

use tokio::sync::{mpsc, watch};

use dockhand_client::{DockerClient, LogOptions};
use dockhand_core::prelude::*;
use dockhand_core::FrameDecoder;

use crate::message::Message;

pub fn spawn_log_reader(
    client: DockerClient,
    msg_tx: mpsc::Sender<Message>,
    id: String,
    name: String,
    tail: u32,
    follow: bool,
) {
    tokio::spawn(async move {
        let options = LogOptions::default()
            .follow(follow)
            .tail_lines(tail as usize);

        let mut stream = match client.open_log_stream(&id, &options).await {
            Ok(stream) => stream,
            Err(e) => {
                warn!("opening log stream for {} failed: {}", name, e);
                let _ = msg_tx
                    .send(Message::LogStreamOpenFailed {
                        error: e.to_string(),
                    })
                    .await;
                return;
            }
        };

        let (cancel_tx, mut cancel_rx) = watch::channel(false);
        if msg_tx
            .send(Message::LogStreamAttached { cancel_tx })
            .await
            .is_err()
        {
            return;
        }

        debug!("log reader for {} started (follow={})", name, follow);
        let mut decoder = FrameDecoder::new();

        loop {
            tokio::select! {
                changed = cancel_rx.changed() => {
                    match changed {
                        Ok(()) if *cancel_rx.borrow() => break,
                        Ok(()) => continue,
                        // Sender dropped without an explicit cancel: the
                        // session (or the whole app) is gone
                        Err(_) => break,
                    }
                }

                chunk = stream.next_chunk() => match chunk {
                    Ok(Some(bytes)) => {
                        let records = decoder.feed(&bytes);
                        if !records.is_empty()
                            && msg_tx.send(Message::LogRecords { records }).await.is_err()
                        {
                            break;
                        }
                    }
                    Ok(None) => {
                        let records = decoder.finish();
                        if !records.is_empty() {
                            let _ = msg_tx.send(Message::LogRecords { records }).await;
                        }
                        let _ = msg_tx.send(Message::LogStreamEnded).await;
                        break;
                    }
                    Err(e) => {
                        let _ = msg_tx
                            .send(Message::LogStreamFailed {
                                error: e.to_string(),
                            })
                            .await;
                        break;
                    }
                },
            }
        }

        stream.close();
        debug!("log reader for {} stopped", name);
    });
}
