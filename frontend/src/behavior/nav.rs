pub const DEFAULT_DEAD_ZONE_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVisibility {
    Visible,
    Hidden,
}

impl NavVisibility {
    pub fn is_visible(self) -> bool {
        self == NavVisibility::Visible
    }
}

/// Decides the navbar state for a new scroll offset.
///
/// The top of the page and any upward scroll show the bar; a downward scroll
/// hides it only once past `dead_zone` pixels. Anything else keeps `state`.
pub fn next_visibility(current: f64, last: f64, state: NavVisibility, dead_zone: f64) -> NavVisibility {
    if current == 0.0 || current < last {
        NavVisibility::Visible
    } else if current > last && current > dead_zone {
        NavVisibility::Hidden
    } else {
        state
    }
}

/// Scroll-direction tracker for the sticky navbar.
#[derive(Debug, Clone)]
pub struct ScrollNav {
    last_offset: f64,
    visibility: NavVisibility,
    dead_zone: f64,
}

impl Default for ScrollNav {
    fn default() -> Self {
        Self::new(DEFAULT_DEAD_ZONE_PX)
    }
}

impl ScrollNav {
    pub fn new(dead_zone: f64) -> Self {
        Self {
            last_offset: 0.0,
            visibility: NavVisibility::Visible,
            dead_zone,
        }
    }

    pub fn visibility(&self) -> NavVisibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn observe(&mut self, offset: f64) -> NavVisibility {
        self.visibility = next_visibility(offset, self.last_offset, self.visibility, self.dead_zone);
        self.last_offset = offset;
        self.visibility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use NavVisibility::{Hidden, Visible};

    fn replay(offsets: &[f64]) -> Vec<NavVisibility> {
        let mut nav = ScrollNav::default();
        offsets.iter().map(|&offset| nav.observe(offset)).collect()
    }

    #[test]
    fn starts_visible() {
        let nav = ScrollNav::default();
        assert!(nav.is_visible());
        assert_eq!(nav.last_offset(), 0.0);
    }

    #[test]
    fn hides_past_dead_zone_and_shows_on_scroll_up() {
        assert_eq!(
            replay(&[0.0, 10.0, 30.0, 80.0, 60.0]),
            vec![Visible, Visible, Visible, Hidden, Visible]
        );
    }

    #[test]
    fn top_of_page_always_shows() {
        let mut nav = ScrollNav::default();
        nav.observe(400.0);
        assert_eq!(nav.visibility(), Hidden);
        assert_eq!(nav.observe(0.0), Visible);

        nav.observe(300.0);
        assert_eq!(nav.observe(0.0), Visible);
        assert_eq!(nav.observe(0.0), Visible);
    }

    #[test]
    fn downward_scroll_inside_dead_zone_keeps_state() {
        assert_eq!(replay(&[20.0, 40.0, 50.0]), vec![Visible, Visible, Visible]);

        // hidden stays hidden on an unchanged offset
        assert_eq!(replay(&[120.0, 120.0]), vec![Hidden, Hidden]);
    }

    #[test]
    fn oscillating_around_boundary_toggles() {
        assert_eq!(
            replay(&[51.0, 49.0, 51.0, 49.0]),
            vec![Hidden, Visible, Hidden, Visible]
        );
    }

    #[test]
    fn records_every_offset() {
        let mut nav = ScrollNav::new(10.0);
        nav.observe(5.0);
        nav.observe(3.0);
        assert_eq!(nav.last_offset(), 3.0);
        assert_eq!(nav.observe(11.0), Hidden);
    }

    #[test]
    fn transition_rules() {
        assert_eq!(next_visibility(0.0, 500.0, Hidden, 50.0), Visible);
        assert_eq!(next_visibility(200.0, 300.0, Hidden, 50.0), Visible);
        assert_eq!(next_visibility(300.0, 200.0, Visible, 50.0), Hidden);
        assert_eq!(next_visibility(45.0, 20.0, Visible, 50.0), Visible);
        assert_eq!(next_visibility(45.0, 20.0, Hidden, 50.0), Hidden);
    }
}
