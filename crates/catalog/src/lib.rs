pub mod annotation;
mod areas;

pub use annotation::{AnnotationLabelStyle, AreaAnnotation};

use foundation::geo::GeoPoint;
use foundation::range::DistanceRange;
use viewport::adapter::{EntityHandle, Viewport};
use viewport::style::PointStyle;

/// Handles for one annotation's pair of placed entities.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AnnotationHandles {
    pub point: EntityHandle,
    pub label: EntityHandle,
}

/// Static registry of named geographic features.
///
/// Loaded once per session from the compiled-in dataset; read-only for the
/// session's duration. Inverted label ranges (label outliving its point) are
/// repaired on load and the affected names recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationCatalog {
    annotations: Vec<AreaAnnotation>,
    clamped: Vec<String>,
}

impl AnnotationCatalog {
    /// Pure and deterministic; the data is compiled in, so there is no
    /// failure mode.
    pub fn load() -> Self {
        let mut annotations = Vec::with_capacity(areas::CLIMBING_AREAS.len());
        let mut clamped_names = Vec::new();

        for record in areas::CLIMBING_AREAS {
            let raw = AreaAnnotation {
                name: record.name.to_string(),
                position: GeoPoint::with_altitude(record.lon_deg, record.lat_deg, record.alt_m),
                label_style: AnnotationLabelStyle {
                    font: record.font,
                    ..AnnotationLabelStyle::default()
                },
                point_visibility: DistanceRange::new(record.min_m, record.point_max_m),
                label_visibility: DistanceRange::new(record.min_m, record.label_max_m),
            };
            let (fixed, clamped) = raw.clamp_label_to_point();
            if clamped {
                clamped_names.push(fixed.name.clone());
            }
            annotations.push(fixed);
        }

        Self {
            annotations,
            clamped: clamped_names,
        }
    }

    pub fn annotations(&self) -> &[AreaAnnotation] {
        &self.annotations
    }

    pub fn get(&self, name: &str) -> Option<&AreaAnnotation> {
        self.annotations.iter().find(|a| a.name == name)
    }

    /// Names whose label range was clamped on load.
    pub fn clamped_labels(&self) -> &[String] {
        &self.clamped
    }

    /// Place a point marker and a name label for every annotation, each
    /// tagged with its own distance range so the adapter culls them
    /// independently.
    ///
    /// Not idempotent: rendering twice duplicates markers. Call once per
    /// viewport lifetime.
    pub fn render<V: Viewport>(&self, viewport: &mut V) -> Vec<AnnotationHandles> {
        let mut out = Vec::with_capacity(self.annotations.len());
        for annotation in &self.annotations {
            let point = viewport.add_point(
                annotation.position,
                PointStyle::default(),
                annotation.point_visibility,
            );
            let label = viewport.add_label(
                &annotation.name,
                annotation.position,
                annotation.label_style.to_label_style(),
                annotation.label_visibility,
            );
            out.push(AnnotationHandles { point, label });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::AnnotationCatalog;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;
    use viewport::InMemoryViewport;

    #[test]
    fn load_is_deterministic_and_complete() {
        let a = AnnotationCatalog::load();
        let b = AnnotationCatalog::load();
        assert_eq!(a, b);
        assert_eq!(a.annotations().len(), 28);
    }

    #[test]
    fn names_are_unique_identity_keys() {
        let catalog = AnnotationCatalog::load();
        let names: BTreeSet<&str> = catalog
            .annotations()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names.len(), catalog.annotations().len());
        assert!(catalog.get("Joshua Tree NP").is_some());
        assert!(catalog.get("Atlantis").is_none());
    }

    #[test]
    fn loaded_ranges_are_well_formed_with_label_inside_point() {
        let catalog = AnnotationCatalog::load();
        for a in catalog.annotations() {
            assert!(a.point_visibility.is_well_formed(), "{}", a.name);
            assert!(a.label_visibility.is_well_formed(), "{}", a.name);
            assert!(
                a.label_visibility.max_m <= a.point_visibility.max_m,
                "{}",
                a.name
            );
        }
    }

    #[test]
    fn render_places_a_point_and_a_label_per_annotation() {
        let catalog = AnnotationCatalog::load();
        let mut vp = InMemoryViewport::new();
        let handles = catalog.render(&mut vp);

        assert_eq!(handles.len(), catalog.annotations().len());
        assert_eq!(vp.entity_count(), catalog.annotations().len() * 2);
    }

    #[test]
    fn dense_cluster_resolves_only_up_close() {
        let catalog = AnnotationCatalog::load();
        let mut vp = InMemoryViewport::new();
        let handles = catalog.render(&mut vp);

        let idx = |name: &str| {
            catalog
                .annotations()
                .iter()
                .position(|a| a.name == name)
                .unwrap()
        };
        let umbrella = handles[idx("Tahquitz & Suicide")];
        let crag = handles[idx("Tahquitz Rock")];

        // Wide zoom: the umbrella point is drawn, the individual crag is not.
        let wide = vp.visible_at(1_000_000.0);
        assert!(wide.contains(&umbrella.point));
        assert!(!wide.contains(&crag.point));

        // Close zoom: the individual crag appears, the umbrella point is gone.
        let close = vp.visible_at(10_000.0);
        assert!(close.contains(&crag.point));
        assert!(close.contains(&crag.label));
        assert!(!close.contains(&umbrella.point));
    }

    #[test]
    fn point_visibility_is_independent_of_label_visibility() {
        let catalog = AnnotationCatalog::load();
        let mut vp = InMemoryViewport::new();
        let handles = catalog.render(&mut vp);

        let idx = catalog
            .annotations()
            .iter()
            .position(|a| a.name == "Joshua Tree NP")
            .unwrap();
        let jtree = handles[idx];

        // Between label max (2e6) and point max (8e6): dot without a name.
        let mid = vp.visible_at(5_000_000.0);
        assert!(mid.contains(&jtree.point));
        assert!(!mid.contains(&jtree.label));
    }

    #[test]
    fn rendering_twice_duplicates_markers() {
        let catalog = AnnotationCatalog::load();
        let mut vp = InMemoryViewport::new();
        catalog.render(&mut vp);
        catalog.render(&mut vp);
        assert_eq!(vp.entity_count(), catalog.annotations().len() * 4);
    }
}
