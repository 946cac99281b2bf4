use pdf_album_runtime::{AlbumCommand, AlbumUpdate, ComposeOptions, worker::worker_task};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([180, 60, 60]));
    img.save(&path).unwrap();
    path
}

#[tokio::test]
async fn test_worker_compose_reports_progress_then_completion() {
    let dir = tempfile::tempdir().unwrap();
    let images = vec![
        write_test_png(dir.path(), "a.png", 320, 240),
        write_test_png(dir.path(), "b.png", 240, 320),
    ];
    let output_path = dir.path().join("album.pdf");

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(worker_task(cmd_rx, update_tx));

    cmd_tx
        .send(AlbumCommand::Compose {
            images,
            options: ComposeOptions::default(),
            output_path: output_path.clone(),
        })
        .unwrap();
    drop(cmd_tx);

    let mut percents = Vec::new();
    let mut complete = None;
    while let Some(update) = update_rx.recv().await {
        match update {
            AlbumUpdate::Progress { percent, .. } => percents.push(percent),
            AlbumUpdate::ComposeComplete {
                path,
                page_count,
                failures,
            } => complete = Some((path, page_count, failures)),
            other => panic!("Unexpected update: {:?}", other),
        }
    }
    worker.await.unwrap();

    assert_eq!(percents, vec![50, 100]);
    let (path, page_count, failures) = complete.unwrap();
    assert_eq!(path, output_path);
    assert_eq!(page_count, 2);
    assert!(failures.is_empty());

    let doc = lopdf::Document::load(&output_path).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[tokio::test]
async fn test_worker_reports_per_image_failures() {
    let dir = tempfile::tempdir().unwrap();
    let corrupt = dir.path().join("broken.png");
    std::fs::write(&corrupt, b"not an image").unwrap();
    let images = vec![write_test_png(dir.path(), "a.png", 100, 100), corrupt];

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(worker_task(cmd_rx, update_tx));

    cmd_tx
        .send(AlbumCommand::Compose {
            images,
            options: ComposeOptions::default(),
            output_path: dir.path().join("album.pdf"),
        })
        .unwrap();
    drop(cmd_tx);

    let mut complete = None;
    while let Some(update) = update_rx.recv().await {
        if let AlbumUpdate::ComposeComplete {
            page_count,
            failures,
            ..
        } = update
        {
            complete = Some((page_count, failures));
        }
    }
    worker.await.unwrap();

    let (page_count, failures) = complete.unwrap();
    assert_eq!(page_count, 1);
    assert_eq!(failures.len(), 1);
    assert!(failures[0].source.ends_with("broken.png"));
}

#[tokio::test]
async fn test_worker_load_config_missing_file_sends_error() {
    let dir = tempfile::tempdir().unwrap();

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(worker_task(cmd_rx, update_tx));

    cmd_tx
        .send(AlbumCommand::LoadConfig {
            path: dir.path().join("missing.json"),
        })
        .unwrap();
    drop(cmd_tx);

    let update = update_rx.recv().await.unwrap();
    assert!(matches!(update, AlbumUpdate::Error { .. }));
    worker.await.unwrap();
}
