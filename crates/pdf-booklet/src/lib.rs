pub mod batch;
pub mod constants;
pub mod convert;
mod geometry;
mod options;
pub mod pipeline;
mod stats;
pub mod tool;
mod types;

pub use batch::{collect_candidates, run_batch, walk_files};
pub use convert::Converter;
pub use geometry::compute_crop_geometry;
pub use options::*;
pub use pipeline::{Booklet, FileTask, booklet_path, count_pages};
pub use stats::{calculate_statistics, statistics_for};
pub use types::*;
