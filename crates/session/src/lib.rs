pub mod chrome;
pub mod framing;
pub mod result_view;
pub mod session;
pub mod state;
pub mod submit;
pub mod ui_events;

pub use chrome::MapChrome;
pub use framing::{ResultFraming, frame_result};
pub use result_view::{ResultPair, ResultPresentation};
pub use session::{GuessSession, LevelConfig};
pub use state::{GuessMarker, SubmissionState};
pub use submit::{HttpSubmitClient, SubmitClient, SubmitError, SubmitRequest, SubmitResponse};
pub use ui_events::{UiBus, UiEvent};
