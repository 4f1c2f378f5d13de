use foundation::time::Time;
use tracing::{debug, info, warn};
use viewport::adapter::{CameraPose, ScreenPoint, Viewport};
use viewport::style::{BillboardStyle, IconRef, ImageryProvider};

use crate::state::{GuessMarker, SubmissionState};
use crate::submit::{SubmitClient, SubmitRequest};
use crate::ui_events::{UiBus, UiEvent};

pub const SUBMIT_LABEL_IDLE: &str = "SUBMIT";
pub const SUBMIT_LABEL_IN_FLIGHT: &str = "SUBMITTING...";
pub const IMAGERY_LABEL_SATELLITE: &str = "Satellite";
pub const IMAGERY_LABEL_ROAD_MAP: &str = "Road Map";

const GUESS_PIN_SCALE: f32 = 0.65;
const RESET_FLIGHT_DURATION_S: f64 = 1.0;

/// Page-injected constants for one play-screen session. Immutable inputs,
/// not session state.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    pub level: String,
    pub pin_icon: IconRef,
    pub initial_camera: CameraPose,
}

impl LevelConfig {
    pub fn results_path(&self) -> String {
        format!("/daily/level/{}/results", self.level)
    }
}

/// The play screen's interactive core: owns the single guess marker, the
/// imagery flag and the one-shot submission workflow.
///
/// Invariants:
/// - At most one guess marker exists; placing a new one removes exactly the
///   previous one.
/// - A network call is issued iff the state is `Ready` or `Failed` with a
///   marker present, and at most one is in flight (`Submitting` gates it).
/// - A failed submission never discards the marker.
#[derive(Debug)]
pub struct GuessSession {
    config: LevelConfig,
    state: SubmissionState,
    marker: Option<GuessMarker>,
    road_map: bool,
    ui: UiBus,
}

impl GuessSession {
    pub fn new(config: LevelConfig) -> Self {
        Self {
            config,
            state: SubmissionState::NoGuess,
            marker: None,
            road_map: false,
            ui: UiBus::new(),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn marker(&self) -> Option<&GuessMarker> {
        self.marker.as_ref()
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Pending UI signals, consumed by the hosting chrome after each event.
    pub fn drain_ui(&mut self) -> Vec<UiEvent> {
        self.ui.drain()
    }

    /// Frame the level's starting view.
    pub fn apply_initial_view<V: Viewport>(&self, viewport: &mut V) {
        viewport.set_camera(self.config.initial_camera);
    }

    /// A click on the globe. Sky/horizon clicks (no ground resolution) are
    /// silently ignored; valid clicks replace the marker and arm submission.
    pub fn handle_ground_click<V: Viewport>(
        &mut self,
        viewport: &mut V,
        screen: ScreenPoint,
        now: Time,
    ) {
        if self.state == SubmissionState::Submitting {
            debug!("click ignored: submission in flight");
            return;
        }

        let Some(ground) = viewport.pick_ground(screen) else {
            debug!("ground pick missed");
            return;
        };

        if let Some(previous) = self.marker.take() {
            viewport.remove_entity(previous.handle);
        }

        let handle = viewport.add_billboard(
            ground,
            BillboardStyle::pin(self.config.pin_icon.clone(), GUESS_PIN_SCALE),
        );
        self.marker = Some(GuessMarker {
            position: ground,
            placed_at: now,
            handle,
        });
        self.state = SubmissionState::Ready;
        self.ui.emit(UiEvent::SubmitEnabled(true));
        self.ui.emit(UiEvent::SubmitLabel(SUBMIT_LABEL_IDLE));

        info!(
            lon = ground.lon_deg(),
            lat = ground.lat_deg(),
            "guess marker placed"
        );
    }

    /// Submit the current guess. No-op with a user-visible warning when no
    /// marker exists; no-op while a request is in flight.
    pub fn submit<C: SubmitClient>(&mut self, client: &mut C) {
        match self.state {
            SubmissionState::Submitting => {
                debug!("submit ignored: already submitting");
                return;
            }
            SubmissionState::NoGuess => {
                warn!("submit without a marker");
                self.ui.emit(UiEvent::Warning(
                    "Please place a pin on the map before submitting!".to_string(),
                ));
                return;
            }
            SubmissionState::Ready | SubmissionState::Failed => {}
        }
        let Some(marker) = self.marker else {
            // Ready/Failed imply a marker; recover as if none was placed.
            warn!("submit without a marker");
            self.ui.emit(UiEvent::Warning(
                "Please place a pin on the map before submitting!".to_string(),
            ));
            self.state = SubmissionState::NoGuess;
            return;
        };

        self.state = SubmissionState::Submitting;
        self.ui.emit(UiEvent::SubmitEnabled(false));
        self.ui.emit(UiEvent::SubmitLabel(SUBMIT_LABEL_IN_FLIGHT));

        let request = SubmitRequest {
            level: self.config.level.clone(),
            guess_lat: marker.position.lat_deg(),
            guess_lon: marker.position.lon_deg(),
        };
        info!(level = %request.level, "submitting guess");

        match client.submit(&request) {
            Ok(response) if response.success => {
                // Terminal: the page navigates away; the control stays
                // disabled so a second submit cannot start.
                let path = self.config.results_path();
                info!(%path, "submission accepted");
                self.ui.emit(UiEvent::NavigateTo(path));
            }
            Ok(_) => self.fail_submission("server rejected the guess"),
            Err(e) => self.fail_submission(&e.to_string()),
        }
    }

    /// Recover locally: marker retained, retry available.
    fn fail_submission(&mut self, reason: &str) {
        warn!(reason, "submission failed");
        self.state = SubmissionState::Failed;
        self.ui.emit(UiEvent::SubmitEnabled(true));
        self.ui.emit(UiEvent::SubmitLabel(SUBMIT_LABEL_IDLE));
        self.ui.emit(UiEvent::ErrorAlert(
            "Error submitting guess. Please try again.".to_string(),
        ));
    }

    /// Smoothly reorient to true north, looking straight down from the
    /// current position. Pure camera op; guess state untouched.
    pub fn reset_camera_orientation<V: Viewport>(&self, viewport: &mut V) {
        let position = viewport.camera_pose().position;
        viewport.fly_to(CameraPose::top_down(position), RESET_FLIGHT_DURATION_S);
    }

    /// Swap the whole base imagery stack between satellite and road map.
    /// Two toggles return to the original provider.
    pub fn toggle_base_imagery<V: Viewport>(&mut self, viewport: &mut V) {
        self.road_map = !self.road_map;
        if self.road_map {
            viewport.set_imagery(ImageryProvider::open_street_map());
            self.ui.emit(UiEvent::ImageryLabel(IMAGERY_LABEL_ROAD_MAP));
        } else {
            viewport.set_imagery(ImageryProvider::WorldImagery);
            self.ui.emit(UiEvent::ImageryLabel(IMAGERY_LABEL_SATELLITE));
        }
    }
}
