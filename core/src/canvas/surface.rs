use image::{GrayImage, Luma};

use crate::canvas::encode;
use crate::canvas::stroke::Segment;
use crate::{RecognizeError, RecognizeResult};

const BACKGROUND: u8 = 0;
const INK: u8 = 255;

/// Fixed logical geometry of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConfig {
    /// Logical resolution; the surface is always square.
    pub size: u32,
    pub stroke_width: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            size: 240,
            stroke_width: 8.0,
        }
    }
}

/// The drawing surface: every committed segment plus the geometry needed to
/// rasterize them over the background fill.
#[derive(Debug, Clone)]
pub struct Surface {
    config: SurfaceConfig,
    segments: Vec<Segment>,
}

impl Surface {
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            config,
            segments: Vec::new(),
        }
    }

    pub fn size(&self) -> u32 {
        self.config.size
    }

    pub fn stroke_width(&self) -> f32 {
        self.config.stroke_width
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_blank(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn commit(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Drops all committed segments, returning the surface to its background
    /// fill.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Renders the committed segments at native logical resolution. Discs
    /// stamped along each segment give the round caps and joins that keep
    /// fast direction changes looking continuous.
    pub fn rasterize(&self) -> GrayImage {
        let mut image =
            GrayImage::from_pixel(self.config.size, self.config.size, Luma([BACKGROUND]));
        let radius = self.config.stroke_width / 2.0;
        for segment in &self.segments {
            stamp_segment(&mut image, segment, radius);
        }
        image
    }

    /// Snapshots the current surface contents as a PNG data URI. Synchronous
    /// and side-effect-free; resampling, if any, is the service's concern.
    pub fn to_png_data_uri(&self) -> RecognizeResult<String> {
        encode::png_data_uri(&self.rasterize())
            .map_err(|err| RecognizeError::Surface(err.to_string()))
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

fn stamp_segment(image: &mut GrayImage, segment: &Segment, radius: f32) {
    let dx = segment.to.x - segment.from.x;
    let dy = segment.to.y - segment.from.y;
    let length = (dx * dx + dy * dy).sqrt();
    // Half-pixel steps keep the stamped discs overlapping.
    let steps = (length * 2.0).ceil().max(1.0) as u32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        stamp_disc(
            image,
            segment.from.x + dx * t,
            segment.from.y + dy * t,
            radius,
        );
    }
}

fn stamp_disc(image: &mut GrayImage, cx: f32, cy: f32, radius: f32) {
    let (width, height) = image.dimensions();
    let x0 = (cx - radius).floor().max(0.0) as u32;
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let x1 = (((cx + radius).ceil().max(0.0)) as u32).min(width);
    let y1 = (((cy + radius).ceil().max(0.0)) as u32).min(height);
    let r_sq = radius * radius;
    for py in y0..y1 {
        for px in x0..x1 {
            let dx = px as f32 + 0.5 - cx;
            let dy = py as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r_sq {
                image.put_pixel(px, py, Luma([INK]));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::mapper::Point;

    fn segment(x0: f32, y0: f32, x1: f32, y1: f32) -> Segment {
        Segment {
            from: Point::new(x0, y0),
            to: Point::new(x1, y1),
        }
    }

    fn small_surface() -> Surface {
        Surface::new(SurfaceConfig {
            size: 32,
            stroke_width: 4.0,
        })
    }

    #[test]
    fn blank_surface_rasterizes_to_background() {
        let image = small_surface().rasterize();
        assert!(image.pixels().all(|p| p[0] == BACKGROUND));
    }

    #[test]
    fn committed_segment_marks_ink_along_its_path() {
        let mut surface = small_surface();
        surface.commit(segment(4.0, 16.0, 28.0, 16.0));

        let image = surface.rasterize();
        assert_eq!(image.get_pixel(16, 16)[0], INK);
        assert_eq!(image.get_pixel(4, 16)[0], INK);
        // Well clear of the stroke stays background.
        assert_eq!(image.get_pixel(16, 4)[0], BACKGROUND);
    }

    #[test]
    fn round_caps_extend_at_most_half_a_stroke_width() {
        let mut surface = small_surface();
        surface.commit(segment(16.0, 16.0, 16.0, 16.0));

        let image = surface.rasterize();
        // Zero-length stroke still leaves a dot (the cap).
        assert_eq!(image.get_pixel(16, 16)[0], INK);
        // Outside the 2.0 radius nothing is marked.
        assert_eq!(image.get_pixel(19, 16)[0], BACKGROUND);
        assert_eq!(image.get_pixel(16, 19)[0], BACKGROUND);
    }

    #[test]
    fn out_of_bounds_segments_clip_without_panicking() {
        let mut surface = small_surface();
        surface.commit(segment(-10.0, -10.0, 50.0, 50.0));
        let image = surface.rasterize();
        assert_eq!(image.get_pixel(16, 16)[0], INK);
    }

    #[test]
    fn clear_returns_to_background_fill() {
        let mut surface = small_surface();
        surface.commit(segment(0.0, 0.0, 32.0, 32.0));
        assert!(!surface.is_blank());

        surface.clear();
        assert!(surface.is_blank());
        assert!(surface.rasterize().pixels().all(|p| p[0] == BACKGROUND));
    }

    #[test]
    fn snapshot_is_a_png_data_uri_at_native_resolution() {
        let surface = small_surface();
        let uri = surface.to_png_data_uri().unwrap();
        let bytes = crate::canvas::encode::decode_image_data_uri(&uri).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();
        assert_eq!(decoded.dimensions(), (32, 32));
    }
}
