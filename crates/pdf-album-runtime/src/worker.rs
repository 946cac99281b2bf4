use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::{AlbumCommand, AlbumUpdate, ComposeOptions};

/// Async worker task that processes album commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<AlbumCommand>,
    update_tx: mpsc::UnboundedSender<AlbumUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        match cmd {
            AlbumCommand::Compose {
                images,
                options,
                output_path,
            } => {
                handle_compose(images, options, output_path, &update_tx).await;
            }
            AlbumCommand::LoadConfig { path } => {
                handle_load_config(path, &update_tx).await;
            }
        }
    }
}

async fn handle_compose(
    images: Vec<PathBuf>,
    options: ComposeOptions,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    log::debug!(
        "Composing {} image(s) into {}",
        images.len(),
        output_path.display()
    );

    let progress_tx = update_tx.clone();
    let result = pdf_album::compose(&images, &options, &output_path, move |p| {
        let _ = progress_tx.send(AlbumUpdate::Progress {
            index: p.index,
            total: p.total,
            percent: p.percent,
        });
    })
    .await;

    match result {
        Ok(report) => {
            if let Some(reason) = report.finalize_error {
                let _ = update_tx.send(AlbumUpdate::Error { message: reason });
            } else {
                let _ = update_tx.send(AlbumUpdate::ComposeComplete {
                    path: output_path,
                    page_count: report.page_count,
                    failures: report.failures,
                });
            }
        }
        Err(e) => {
            let _ = update_tx.send(AlbumUpdate::Error {
                message: format!("Failed to compose PDF: {e}"),
            });
        }
    }
}

async fn handle_load_config(path: PathBuf, update_tx: &mpsc::UnboundedSender<AlbumUpdate>) {
    match ComposeOptions::load(&path).await {
        Ok(options) => {
            let _ = update_tx.send(AlbumUpdate::ConfigLoaded { options });
        }
        Err(e) => {
            let _ = update_tx.send(AlbumUpdate::Error {
                message: format!("Failed to load config: {e}"),
            });
        }
    }
}
