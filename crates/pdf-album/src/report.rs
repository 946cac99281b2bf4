use std::path::PathBuf;

/// One input image that could not be decoded or placed.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFailure {
    /// Path of the failed source image
    pub source: PathBuf,
    /// Human-readable reason
    pub reason: String,
}

/// Outcome of one compose run.
///
/// Per-image failures never abort the run; they are collected here in
/// input order. A failed document flush is a run-level problem and is
/// kept separate from the per-image list.
#[derive(Debug, Clone, Default)]
pub struct ComposeReport {
    /// Number of pages written to the document
    pub page_count: usize,
    /// Images that contributed no page, in input order
    pub failures: Vec<PageFailure>,
    /// Set when the finished document could not be written out
    pub finalize_error: Option<String>,
}

impl ComposeReport {
    /// True when every image produced a page and the document was
    /// written.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.finalize_error.is_none()
    }
}

/// Progress notification, emitted once per input image (failed ones
/// included). Percent values are non-decreasing and reach 100 on the
/// last image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based index of the image just processed
    pub index: usize,
    /// Total number of input images
    pub total: usize,
    /// round(index / total * 100)
    pub percent: u8,
}

impl Progress {
    pub(crate) fn new(index: usize, total: usize) -> Self {
        Self {
            index,
            total,
            percent: (index as f64 / total as f64 * 100.0).round() as u8,
        }
    }
}
