use std::collections::BTreeMap;

use foundation::geo::GeoPoint;
use foundation::range::DistanceRange;

use crate::adapter::{CameraPose, EntityHandle, ScreenPoint, Viewport};
use crate::style::{BillboardStyle, ImageryProvider, LabelStyle, PointStyle, PolylineStyle};

/// Everything known about one placed entity.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityRecord {
    Point {
        position: GeoPoint,
        style: PointStyle,
        visibility: DistanceRange,
    },
    Label {
        text: String,
        position: GeoPoint,
        style: LabelStyle,
        visibility: DistanceRange,
    },
    Billboard {
        position: GeoPoint,
        style: BillboardStyle,
    },
    Polyline {
        positions: Vec<GeoPoint>,
        style: PolylineStyle,
    },
}

impl EntityRecord {
    /// Distance-gated entities report their range; billboards and polylines
    /// are unconditional.
    pub fn visibility(&self) -> Option<DistanceRange> {
        match self {
            EntityRecord::Point { visibility, .. } | EntityRecord::Label { visibility, .. } => {
                Some(*visibility)
            }
            EntityRecord::Billboard { .. } | EntityRecord::Polyline { .. } => None,
        }
    }
}

/// Reference [`Viewport`] implementation backed by plain collections.
///
/// Honors the adapter contract observably: it records every placement,
/// removal, camera command and imagery swap, applies distance-based LOD
/// culling in [`visible_at`](Self::visible_at), and resolves ground picks
/// from staged hits (anything not staged is a sky/horizon miss).
#[derive(Debug, Default)]
pub struct InMemoryViewport {
    next_handle: u64,
    entities: BTreeMap<EntityHandle, EntityRecord>,
    camera: Option<CameraPose>,
    flights: Vec<(CameraPose, f64)>,
    imagery: ImageryProvider,
    ground_hits: Vec<(ScreenPoint, GeoPoint)>,
    removed: Vec<EntityHandle>,
}

impl InMemoryViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that `screen` resolves to `point` on the terrain. Later hits
    /// for the same screen point override earlier ones.
    pub fn stage_ground_hit(&mut self, screen: ScreenPoint, point: GeoPoint) {
        self.ground_hits.push((screen, point));
    }

    pub fn entity(&self, handle: EntityHandle) -> Option<&EntityRecord> {
        self.entities.get(&handle)
    }

    pub fn entities(&self) -> impl Iterator<Item = (EntityHandle, &EntityRecord)> {
        self.entities.iter().map(|(h, r)| (*h, r))
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Handles drawn at camera distance `distance_m`, applying each entity's
    /// own range independently. Ascending handle order.
    pub fn visible_at(&self, distance_m: f64) -> Vec<EntityHandle> {
        self.entities
            .iter()
            .filter(|(_, record)| match record.visibility() {
                Some(range) => range.contains(distance_m),
                None => true,
            })
            .map(|(h, _)| *h)
            .collect()
    }

    /// Every handle passed to `remove_entity` that actually removed something.
    pub fn removed(&self) -> &[EntityHandle] {
        &self.removed
    }

    /// Camera flights issued so far, oldest first.
    pub fn flights(&self) -> &[(CameraPose, f64)] {
        &self.flights
    }

    pub fn imagery(&self) -> &ImageryProvider {
        &self.imagery
    }

    fn insert(&mut self, record: EntityRecord) -> EntityHandle {
        let handle = EntityHandle(self.next_handle);
        self.next_handle += 1;
        self.entities.insert(handle, record);
        handle
    }
}

impl Viewport for InMemoryViewport {
    fn set_camera(&mut self, pose: CameraPose) {
        self.camera = Some(pose);
    }

    fn fly_to(&mut self, pose: CameraPose, duration_s: f64) {
        // Fire-and-forget: the pose becomes the current target immediately.
        self.flights.push((pose, duration_s));
        self.camera = Some(pose);
    }

    fn camera_pose(&self) -> CameraPose {
        self.camera
            .unwrap_or_else(|| CameraPose::top_down(GeoPoint::with_altitude(0.0, 0.0, 1.0e7)))
    }

    fn pick_ground(&self, screen: ScreenPoint) -> Option<GeoPoint> {
        self.ground_hits
            .iter()
            .rev()
            .find(|(s, _)| *s == screen)
            .map(|(_, p)| *p)
    }

    fn add_point(
        &mut self,
        position: GeoPoint,
        style: PointStyle,
        visibility: DistanceRange,
    ) -> EntityHandle {
        self.insert(EntityRecord::Point {
            position,
            style,
            visibility,
        })
    }

    fn add_label(
        &mut self,
        text: &str,
        position: GeoPoint,
        style: LabelStyle,
        visibility: DistanceRange,
    ) -> EntityHandle {
        self.insert(EntityRecord::Label {
            text: text.to_string(),
            position,
            style,
            visibility,
        })
    }

    fn add_billboard(&mut self, position: GeoPoint, style: BillboardStyle) -> EntityHandle {
        self.insert(EntityRecord::Billboard { position, style })
    }

    fn add_polyline(&mut self, positions: &[GeoPoint], style: PolylineStyle) -> EntityHandle {
        self.insert(EntityRecord::Polyline {
            positions: positions.to_vec(),
            style,
        })
    }

    fn remove_entity(&mut self, handle: EntityHandle) -> bool {
        let existed = self.entities.remove(&handle).is_some();
        if existed {
            self.removed.push(handle);
        }
        existed
    }

    fn set_imagery(&mut self, provider: ImageryProvider) {
        self.imagery = provider;
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityRecord, InMemoryViewport};
    use crate::adapter::{CameraPose, ScreenPoint, Viewport};
    use crate::style::{ImageryProvider, LabelStyle, PointStyle};
    use foundation::geo::GeoPoint;
    use foundation::range::DistanceRange;

    #[test]
    fn staged_pick_resolves_and_unstaged_misses() {
        let mut vp = InMemoryViewport::new();
        let screen = ScreenPoint::new(320.0, 240.0);
        let ground = GeoPoint::new(-116.169, 34.012);
        vp.stage_ground_hit(screen, ground);

        assert_eq!(vp.pick_ground(screen), Some(ground));
        assert_eq!(vp.pick_ground(ScreenPoint::new(0.0, 0.0)), None);
    }

    #[test]
    fn visible_at_applies_ranges_independently() {
        let mut vp = InMemoryViewport::new();
        let pos = GeoPoint::new(10.0, 10.0);
        let point = vp.add_point(pos, PointStyle::default(), DistanceRange::new(0.0, 8.0e6));
        let label = vp.add_label("X", pos, LabelStyle::default(), DistanceRange::new(0.0, 2.0e6));

        let near = vp.visible_at(1.0e6);
        assert!(near.contains(&point) && near.contains(&label));

        // Beyond the label range the point is still drawn.
        let mid = vp.visible_at(4.0e6);
        assert!(mid.contains(&point) && !mid.contains(&label));

        assert!(vp.visible_at(9.0e6).is_empty());
    }

    #[test]
    fn remove_entity_reports_whether_it_existed() {
        let mut vp = InMemoryViewport::new();
        let h = vp.add_point(
            GeoPoint::new(0.0, 0.0),
            PointStyle::default(),
            DistanceRange::new(0.0, 1.0),
        );
        assert!(vp.remove_entity(h));
        assert!(!vp.remove_entity(h));
        assert_eq!(vp.removed(), &[h]);
        assert!(vp.entity(h).is_none());
    }

    #[test]
    fn fly_to_supersedes_camera_target() {
        let mut vp = InMemoryViewport::new();
        let a = CameraPose::top_down(GeoPoint::with_altitude(-103.0, 34.0, 5_999_999.0));
        let b = CameraPose::top_down(GeoPoint::with_altitude(-110.0, 40.0, 1_000.0));
        vp.fly_to(a, 1.0);
        vp.fly_to(b, 1.0);
        assert_eq!(vp.camera_pose(), b);
        assert_eq!(vp.flights().len(), 2);
    }

    #[test]
    fn imagery_defaults_to_world_imagery() {
        let vp = InMemoryViewport::new();
        assert_eq!(*vp.imagery(), ImageryProvider::WorldImagery);
    }

    #[test]
    fn billboards_are_not_distance_gated() {
        let record = EntityRecord::Billboard {
            position: GeoPoint::new(0.0, 0.0),
            style: crate::style::BillboardStyle::pin(crate::style::IconRef::new("pin.png"), 0.65),
        };
        assert!(record.visibility().is_none());
    }
}
