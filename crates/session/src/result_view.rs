use catalog::AnnotationCatalog;
use foundation::geo::GeoPoint;
use viewport::adapter::{CameraPose, EntityHandle, Viewport};
use viewport::style::{BillboardStyle, IconRef, PolylineStyle};

const GUESS_PIN_SCALE: f32 = 0.65;
const ACTUAL_PIN_SCALE: f32 = 0.7;

/// Dashed connector between guess and actual (#e77148).
fn connector_style() -> PolylineStyle {
    PolylineStyle {
        width_px: 3.0,
        color: [231.0 / 255.0, 113.0 / 255.0, 72.0 / 255.0, 1.0],
        dash_length_px: Some(12.0),
        clamp_to_ground: true,
    }
}

/// The two fixed points of a finished level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResultPair {
    pub guess: GeoPoint,
    pub actual: GeoPoint,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResultHandles {
    pub guess: EntityHandle,
    pub actual: EntityHandle,
    pub connector: EntityHandle,
}

/// The result screen: a read-only camera over a fixed guess/actual pair with
/// a connecting line, plus the same annotation overlay as the play screen.
///
/// All inputs are injected at construction (the center's altitude carries the
/// server-computed framing height); `present` is a single render pass with no
/// state machine and no retry path.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPresentation {
    pair: ResultPair,
    center: GeoPoint,
    guess_icon: IconRef,
    actual_icon: IconRef,
}

impl ResultPresentation {
    pub fn new(pair: ResultPair, center: GeoPoint, guess_icon: IconRef, actual_icon: IconRef) -> Self {
        Self {
            pair,
            center,
            guess_icon,
            actual_icon,
        }
    }

    pub fn pair(&self) -> ResultPair {
        self.pair
    }

    pub fn present<V: Viewport>(
        &self,
        viewport: &mut V,
        catalog: &AnnotationCatalog,
    ) -> ResultHandles {
        viewport.set_camera(CameraPose::top_down(self.center));

        let guess = viewport.add_billboard(
            self.pair.guess,
            BillboardStyle::pin(self.guess_icon.clone(), GUESS_PIN_SCALE),
        );
        let actual = viewport.add_billboard(
            self.pair.actual,
            BillboardStyle::pin(self.actual_icon.clone(), ACTUAL_PIN_SCALE),
        );
        let connector =
            viewport.add_polyline(&[self.pair.guess, self.pair.actual], connector_style());

        catalog.render(viewport);

        ResultHandles {
            guess,
            actual,
            connector,
        }
    }
}
