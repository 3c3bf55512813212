/// A position in logical surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Converts a widget-local pointer position into logical surface
/// coordinates, compensating for the widget's rendered size. The widget may
/// be laid out at a different size than the surface's fixed resolution
/// without breaking input mapping.
///
/// No clamping: a sample taken at the surface edge during a drag may map
/// slightly outside `[0, size)`. Rasterization clips such segments instead.
pub fn map_to_surface(local: Point, rect_width: f32, rect_height: f32, size: u32) -> Point {
    Point::new(
        local.x / rect_width * size as f32,
        local.y / rect_height * size as f32,
    )
}
