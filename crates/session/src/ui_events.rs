/// Signals to the UI chrome, emitted by the session instead of mutating the
/// DOM directly. The hosting layer drains these after every input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Enable or disable the submit control.
    SubmitEnabled(bool),
    /// Caption for the submit control ("SUBMIT" / "SUBMITTING...").
    SubmitLabel(&'static str),
    /// Caption for the imagery toggle ("Satellite" / "Road Map").
    ImageryLabel(&'static str),
    /// Non-fatal, user-visible nudge (e.g. submit without a pin).
    Warning(String),
    /// User-visible failure notice; the session has already recovered.
    ErrorAlert(String),
    /// Leave the play screen for the given path. Terminal.
    NavigateTo(String),
}

#[derive(Debug, Default)]
pub struct UiBus {
    events: Vec<UiEvent>,
}

impl UiBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::{UiBus, UiEvent};

    #[test]
    fn drain_clears_events_in_order() {
        let mut bus = UiBus::new();
        bus.emit(UiEvent::SubmitEnabled(true));
        bus.emit(UiEvent::Warning("w".to_string()));
        let drained = bus.drain();
        assert_eq!(
            drained,
            vec![
                UiEvent::SubmitEnabled(true),
                UiEvent::Warning("w".to_string())
            ]
        );
        assert!(bus.events().is_empty());
    }
}
