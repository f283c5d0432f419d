#[derive(Clone, Debug)]
pub struct NavState {
    scrolled_threshold: f64,
    scrolled: bool,
    active_section: Option<String>,
    menu_open: bool,
}

impl NavState {
    pub fn new(scrolled_threshold: f64) -> Self {
        Self {
            scrolled_threshold,
            scrolled: false,
            active_section: None,
            menu_open: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Records the current vertical offset; returns `true` when the scrolled
    /// variant flipped.
    pub fn update_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset >= self.scrolled_threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn activate(&mut self, section_id: &str) -> bool {
        if self.active_section.as_deref() == Some(section_id) {
            return false;
        }
        self.active_section = Some(section_id.to_string());
        true
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scroll_locked(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Returns whether the menu was open before closing.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }
}

pub fn exceeds_breakpoint(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width > breakpoint
}

pub fn anchor_href(section_id: &str) -> String {
    format!("#{section_id}")
}

pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_state_flips_at_the_threshold() {
        let mut state = NavState::new(50.0);

        assert!(!state.update_scroll(49.0));
        assert!(!state.is_scrolled());

        assert!(state.update_scroll(50.0));
        assert!(state.is_scrolled());

        assert!(!state.update_scroll(400.0));
        assert!(state.is_scrolled());

        assert!(state.update_scroll(49.9));
        assert!(!state.is_scrolled());
    }

    #[test]
    fn only_one_section_is_ever_active() {
        let mut state = NavState::new(50.0);

        assert_eq!(state.active_section(), None);
        assert!(state.activate("about"));
        assert!(state.activate("projects"));
        assert!(!state.activate("projects"));
        assert_eq!(state.active_section(), Some("projects"));
    }

    #[test]
    fn every_close_path_releases_the_scroll_lock() {
        let mut state = NavState::new(50.0);

        assert!(state.toggle_menu());
        assert!(state.scroll_locked());
        assert!(state.close_menu());
        assert!(!state.scroll_locked());

        assert!(!state.close_menu());
        assert!(!state.scroll_locked());

        state.toggle_menu();
        assert!(!state.toggle_menu());
        assert!(!state.scroll_locked());
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(!exceeds_breakpoint(768.0, 768.0));
        assert!(exceeds_breakpoint(769.0, 768.0));
    }

    #[test]
    fn fragment_targets_skip_bare_hashes() {
        assert_eq!(fragment_target("#contact"), Some("contact"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/resume.pdf"), None);
        assert_eq!(anchor_href("about"), "#about");
    }

    #[test]
    fn location_hash_alone_selects_the_initial_jump_target() {
        assert_eq!(fragment_target("#projects"), Some("projects"));
        assert_eq!(fragment_target(""), None);
    }
}
