mod hit_testing;
mod raster;

pub use hit_testing::{ERASER_RADIUS, distance, split_in_radius};
pub use raster::{rasterize_lines, rasterize_segment};
