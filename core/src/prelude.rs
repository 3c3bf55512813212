pub use crate::canvas::{map_to_surface, Point, Segment, StrokeTracker, Surface, SurfaceConfig};
pub use crate::protocol::{RecognizeRequest, RecognizeResponse, Score};
pub use crate::results::ResultPanel;
pub use crate::{RecognizeError, RecognizeResult};
