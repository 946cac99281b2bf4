mod compose;
mod layout;
mod options;
mod probe;
mod report;
mod types;

pub use compose::{compose, compose_to_bytes};
pub use layout::{Layout, compute_layout};
pub use options::*;
pub use probe::{is_supported_image, probe_dimensions};
pub use report::*;
pub use types::*;
