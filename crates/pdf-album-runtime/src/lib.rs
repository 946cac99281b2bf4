use std::path::PathBuf;

// Re-export types from the library crate
pub use pdf_album::{
    BackgroundColor, ComposeOptions, ComposeReport, Orientation, PageFailure, PagePolicy,
    PaperSize, Progress,
};

pub mod worker;

/// Commands sent from the frontend to the worker
#[derive(Debug)]
pub enum AlbumCommand {
    Compose {
        images: Vec<PathBuf>,
        options: ComposeOptions,
        output_path: PathBuf,
    },
    LoadConfig {
        path: PathBuf,
    },
}

/// Updates sent from the worker to the frontend
#[derive(Debug, Clone)]
pub enum AlbumUpdate {
    Progress {
        index: usize,
        total: usize,
        percent: u8,
    },
    ComposeComplete {
        path: PathBuf,
        page_count: usize,
        failures: Vec<PageFailure>,
    },
    ConfigLoaded {
        options: ComposeOptions,
    },
    Error {
        message: String,
    },
}
