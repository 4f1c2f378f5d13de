/// Map-controls menu state, owned explicitly instead of living in ambient
/// page script variables. Knows nothing about the globe.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct MapChrome {
    menu_open: bool,
}

impl MapChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Returns the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// A click anywhere outside the menu closes it.
    pub fn click_outside(&mut self) {
        self.menu_open = false;
    }
}
