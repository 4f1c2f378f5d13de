//! Scripted end-to-end playthrough against the in-memory viewport: place a
//! guess, fumble a submit, retry, then render the result screen. Useful for
//! eyeballing the emitted UI signal stream without a browser.

use catalog::AnnotationCatalog;
use foundation::geo::GeoPoint;
use foundation::time::Time;
use session::{
    GuessSession, LevelConfig, ResultPair, ResultPresentation, SubmitClient, SubmitError,
    SubmitRequest, SubmitResponse, frame_result,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use viewport::adapter::{CameraPose, ScreenPoint};
use viewport::style::IconRef;
use viewport::InMemoryViewport;

/// Fails once, then accepts, like a flaky network would.
struct FlakyClient {
    calls: u32,
}

impl SubmitClient for FlakyClient {
    fn submit(&mut self, request: &SubmitRequest) -> Result<SubmitResponse, SubmitError> {
        self.calls += 1;
        info!(level = %request.level, call = self.calls, "submit endpoint hit");
        if self.calls == 1 {
            Err(SubmitError::TimedOut)
        } else {
            Ok(SubmitResponse { success: true })
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut viewport = InMemoryViewport::new();
    let catalog = AnnotationCatalog::load();
    catalog.render(&mut viewport);
    info!(
        annotations = catalog.annotations().len(),
        clamped = catalog.clamped_labels().len(),
        "annotation overlay placed"
    );

    let mut session = GuessSession::new(LevelConfig {
        level: "3".to_string(),
        pin_icon: IconRef::new("static/icons/pin.png"),
        initial_camera: CameraPose::top_down(GeoPoint::with_altitude(-103.0, 34.0, 5_999_999.0)),
    });
    session.apply_initial_view(&mut viewport);

    // Sky click, then two real placements.
    session.handle_ground_click(&mut viewport, ScreenPoint::new(10.0, 10.0), Time::ZERO);
    viewport.stage_ground_hit(
        ScreenPoint::new(420.0, 310.0),
        GeoPoint::new(-115.42451, 36.13128),
    );
    session.handle_ground_click(&mut viewport, ScreenPoint::new(420.0, 310.0), Time::seconds(4.2));
    viewport.stage_ground_hit(
        ScreenPoint::new(400.0, 300.0),
        GeoPoint::new(-116.169, 34.012),
    );
    session.handle_ground_click(&mut viewport, ScreenPoint::new(400.0, 300.0), Time::seconds(7.9));

    session.toggle_base_imagery(&mut viewport);
    session.toggle_base_imagery(&mut viewport);
    session.reset_camera_orientation(&mut viewport);

    let mut client = FlakyClient { calls: 0 };
    session.submit(&mut client); // times out
    session.submit(&mut client); // accepted

    for event in session.drain_ui() {
        info!(?event, "ui signal");
    }

    // What the server would hand the result page for this guess.
    let guess = session
        .marker()
        .map(|m| m.position)
        .unwrap_or_else(|| GeoPoint::new(0.0, 0.0));
    let actual = GeoPoint::new(-116.16795, 34.0122);
    let framing = frame_result(guess, actual);
    info!(
        zoom = framing.zoom_level,
        distance = %framing.distance_text,
        "result framing"
    );

    let mut result_viewport = InMemoryViewport::new();
    let view = ResultPresentation::new(
        ResultPair { guess, actual },
        framing.center.at_altitude(50_000.0),
        IconRef::new("static/icons/pin.png"),
        IconRef::new("static/icons/flag.png"),
    );
    view.present(&mut result_viewport, &catalog);
    info!(
        entities = result_viewport.entity_count(),
        "result screen rendered"
    );
}
