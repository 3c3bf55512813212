pub mod encode;
pub mod mapper;
pub mod stroke;
pub mod surface;

pub use mapper::{map_to_surface, Point};
pub use stroke::{Segment, StrokeTracker};
pub use surface::{Surface, SurfaceConfig};
