use foundation::geo::GeoPoint;
use foundation::range::DistanceRange;
use viewport::style::LabelStyle;

/// Text styling for an annotation's name label.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationLabelStyle {
    pub font: &'static str,
    pub fill_color: [f32; 4],
    pub outline_color: [f32; 4],
    pub outline_width_px: f32,
}

impl Default for AnnotationLabelStyle {
    fn default() -> Self {
        Self {
            font: "14pt monospace",
            fill_color: [0.0, 0.0, 0.0, 1.0],
            outline_color: [0.5, 0.5, 0.5, 1.0],
            outline_width_px: 2.0,
        }
    }
}

impl AnnotationLabelStyle {
    pub fn to_label_style(&self) -> LabelStyle {
        LabelStyle {
            font: self.font.to_string(),
            fill_color: self.fill_color,
            outline_color: self.outline_color,
            outline_width_px: self.outline_width_px,
            ..LabelStyle::default()
        }
    }
}

/// One named geographic feature with its own level-of-detail rules.
///
/// The name doubles as the label text and the identity key; the point and the
/// label carry separate distance ranges so a dense cluster can show a bare
/// dot at wide zoom and resolve into labeled points up close.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaAnnotation {
    pub name: String,
    pub position: GeoPoint,
    pub label_style: AnnotationLabelStyle,
    pub point_visibility: DistanceRange,
    pub label_visibility: DistanceRange,
}

impl AreaAnnotation {
    /// Point visibility is authoritative: a label must never outlive its
    /// point. Returns the repaired annotation and whether anything changed.
    pub fn clamp_label_to_point(mut self) -> (Self, bool) {
        let clamped = self.label_visibility.max_m > self.point_visibility.max_m;
        if clamped {
            self.label_visibility = self.label_visibility.clamp_max(self.point_visibility.max_m);
        }
        (self, clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::{AnnotationLabelStyle, AreaAnnotation};
    use foundation::geo::GeoPoint;
    use foundation::range::DistanceRange;
    use pretty_assertions::assert_eq;

    fn annotation(label_max_m: f64, point_max_m: f64) -> AreaAnnotation {
        AreaAnnotation {
            name: "Test Crag".to_string(),
            position: GeoPoint::with_altitude(-116.0, 34.0, 1200.0),
            label_style: AnnotationLabelStyle::default(),
            point_visibility: DistanceRange::new(0.0, point_max_m),
            label_visibility: DistanceRange::new(0.0, label_max_m),
        }
    }

    #[test]
    fn inverted_label_range_is_clamped_to_point_range() {
        let (fixed, clamped) = annotation(8.0e6, 2.0e6).clamp_label_to_point();
        assert!(clamped);
        assert_eq!(fixed.label_visibility, DistanceRange::new(0.0, 2.0e6));
        assert_eq!(fixed.point_visibility, DistanceRange::new(0.0, 2.0e6));
    }

    #[test]
    fn subset_label_range_is_left_alone() {
        let original = annotation(2.0e6, 8.0e6);
        let (fixed, clamped) = original.clone().clamp_label_to_point();
        assert!(!clamped);
        assert_eq!(fixed, original);
    }
}
