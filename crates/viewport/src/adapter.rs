use foundation::geo::GeoPoint;
use foundation::range::DistanceRange;

use crate::style::{BillboardStyle, ImageryProvider, LabelStyle, PointStyle, PolylineStyle};

/// Opaque id for an entity placed through a [`Viewport`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle(pub u64);

/// A position in window coordinates (pixels, origin top-left).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenPoint {
    pub x_px: f64,
    pub y_px: f64,
}

impl ScreenPoint {
    pub fn new(x_px: f64, y_px: f64) -> Self {
        Self { x_px, y_px }
    }
}

/// Camera position and orientation. Angles are degrees; pitch -90 looks
/// straight down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraPose {
    pub position: GeoPoint,
    pub heading_deg: f64,
    pub pitch_deg: f64,
    pub roll_deg: f64,
}

impl CameraPose {
    pub fn new(position: GeoPoint, heading_deg: f64, pitch_deg: f64, roll_deg: f64) -> Self {
        Self {
            position,
            heading_deg,
            pitch_deg,
            roll_deg,
        }
    }

    /// Looking straight down at `position`, facing true north.
    pub fn top_down(position: GeoPoint) -> Self {
        Self::new(position, 0.0, -90.0, 0.0)
    }
}

/// The globe engine seam.
///
/// Contract notes:
/// - Entities placed with a [`DistanceRange`] are culled by the adapter based
///   on camera-to-entity distance; point and label visibility are independent.
/// - `fly_to` is fire-and-forget: a new camera command issued mid-flight
///   supersedes the previous visual target.
/// - `pick_ground` resolves a screen point to terrain and returns `None` for
///   sky/horizon clicks.
/// - `set_imagery` replaces the entire imagery layer stack.
pub trait Viewport {
    fn set_camera(&mut self, pose: CameraPose);
    fn fly_to(&mut self, pose: CameraPose, duration_s: f64);
    fn camera_pose(&self) -> CameraPose;
    fn pick_ground(&self, screen: ScreenPoint) -> Option<GeoPoint>;
    fn add_point(
        &mut self,
        position: GeoPoint,
        style: PointStyle,
        visibility: DistanceRange,
    ) -> EntityHandle;
    fn add_label(
        &mut self,
        text: &str,
        position: GeoPoint,
        style: LabelStyle,
        visibility: DistanceRange,
    ) -> EntityHandle;
    fn add_billboard(&mut self, position: GeoPoint, style: BillboardStyle) -> EntityHandle;
    fn add_polyline(&mut self, positions: &[GeoPoint], style: PolylineStyle) -> EntityHandle;
    /// Returns false if the handle was already removed or never existed.
    fn remove_entity(&mut self, handle: EntityHandle) -> bool;
    fn set_imagery(&mut self, provider: ImageryProvider);
}
