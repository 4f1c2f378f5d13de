/// Reference to an icon asset, as injected by the hosting page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRef(pub String);

impl IconRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointStyle {
    pub pixel_size: f32,
    pub color: [f32; 4],
    pub outline_color: [f32; 4],
    pub outline_width_px: f32,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            pixel_size: 5.0,
            color: [0.0, 0.0, 0.0, 1.0],
            outline_color: [1.0, 1.0, 1.0, 1.0],
            outline_width_px: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub font: String,
    pub fill_color: [f32; 4],
    pub outline_color: [f32; 4],
    pub outline_width_px: f32,
    pub pixel_offset: [f32; 2],
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font: "14pt monospace".to_string(),
            fill_color: [0.0, 0.0, 0.0, 1.0],
            outline_color: [0.5, 0.5, 0.5, 1.0],
            outline_width_px: 2.0,
            pixel_offset: [0.0, -10.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillboardStyle {
    pub icon: IconRef,
    pub width_px: f32,
    pub height_px: f32,
    pub pixel_offset: [f32; 2],
    pub scale: f32,
}

impl BillboardStyle {
    /// The guess-pin shape: 32x48 px, anchored just above the ground point.
    pub fn pin(icon: IconRef, scale: f32) -> Self {
        Self {
            icon,
            width_px: 32.0,
            height_px: 48.0,
            pixel_offset: [0.0, -15.0],
            scale,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolylineStyle {
    pub width_px: f32,
    pub color: [f32; 4],
    /// Dash length in pixels; `None` draws a solid line.
    pub dash_length_px: Option<f32>,
    pub clamp_to_ground: bool,
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            width_px: 1.0,
            color: [1.0, 1.0, 1.0, 1.0],
            dash_length_px: None,
            clamp_to_ground: false,
        }
    }
}

/// Base imagery source. Toggling replaces the whole layer stack, never blends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageryProvider {
    WorldImagery,
    OpenStreetMap { url: String },
}

impl ImageryProvider {
    pub fn open_street_map() -> Self {
        Self::OpenStreetMap {
            url: "https://tile.openstreetmap.org/".to_string(),
        }
    }
}

impl Default for ImageryProvider {
    fn default() -> Self {
        Self::WorldImagery
    }
}
