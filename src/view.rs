use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Info,
    Gallery,
    Calendar,
    Contact,
}

// Lower bound (px) of every section after Home, in page order.
const SECTION_THRESHOLDS: [(f64, Section); 4] = [
    (500.0, Section::Home),
    (1200.0, Section::Info),
    (1900.0, Section::Gallery),
    (2600.0, Section::Calendar),
];

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Info,
        Section::Gallery,
        Section::Calendar,
        Section::Contact,
    ];

    /// DOM id of the `<section>` element.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Info => "info",
            Section::Gallery => "gallery",
            Section::Calendar => "calendar",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Info => "Informazioni",
            Section::Gallery => "Galleria 3D",
            Section::Calendar => "Prenota",
            Section::Contact => "Contatti",
        }
    }

    /// Buckets a vertical scroll offset. Anything that fails every `<` check,
    /// NaN included, lands in the last section.
    pub fn from_scroll(scroll_y: f64) -> Self {
        SECTION_THRESHOLDS
            .iter()
            .find(|(limit, _)| scroll_y < *limit)
            .map(|(_, section)| *section)
            .unwrap_or(Section::Contact)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewController {
    active: Section,
    menu_open: bool,
}

impl Default for ViewController {
    fn default() -> Self {
        Self {
            active: Section::Home,
            menu_open: false,
        }
    }
}

impl ViewController {
    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Explicit navigation. Returns the anchor the caller should scroll to.
    pub fn set_active_section(&mut self, section: Section) -> &'static str {
        self.active = section;
        self.close_menu();
        section.anchor()
    }

    /// Returns true when the active section changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let next = Section::from_scroll(scroll_y);
        let changed = next != self.active;
        self.active = next;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

pub enum ViewAction {
    Navigate(Section),
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
}

impl Reducible for ViewController {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ViewAction::Navigate(section) => {
                next.set_active_section(section);
            }
            ViewAction::Scrolled(scroll_y) => {
                next.on_scroll(scroll_y);
            }
            ViewAction::ToggleMenu => next.toggle_menu(),
            ViewAction::CloseMenu => next.close_menu(),
        }
        // Unchanged state keeps the same Rc so listeners don't re-render.
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// What to do with an incoming scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    Run,
    /// Re-read the offset after this many milliseconds.
    Defer(u32),
    Drop,
}

/// Admits at most one scroll sample per interval. The first rejected event in
/// a window arms a single trailing sample so the resting offset is evaluated.
/// A leading `Run` starts a fresh window and disarms any earlier trailing
/// sample; the caller cancels the matching timer.
#[derive(Clone, Debug)]
pub struct ScrollThrottle {
    interval_ms: f64,
    last_run: Option<f64>,
    trailing_armed: bool,
}

impl ScrollThrottle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms as f64,
            last_run: None,
            trailing_armed: false,
        }
    }

    pub fn offer(&mut self, now_ms: f64) -> Sample {
        match self.last_run {
            Some(last) if now_ms - last < self.interval_ms => {
                if self.trailing_armed {
                    Sample::Drop
                } else {
                    self.trailing_armed = true;
                    let remaining = (self.interval_ms - (now_ms - last)).ceil().max(0.0);
                    Sample::Defer(remaining as u32)
                }
            }
            _ => {
                self.last_run = Some(now_ms);
                self.trailing_armed = false;
                Sample::Run
            }
        }
    }

    /// Called when the deferred timer fires. Returns false if a leading sample
    /// already ran in the current window.
    pub fn fire_trailing(&mut self, now_ms: f64) -> bool {
        self.trailing_armed = false;
        match self.last_run {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_run = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_bucket_both_sides_of_each_boundary() {
        let cases = [
            (0.0, Section::Home),
            (499.0, Section::Home),
            (500.0, Section::Info),
            (1199.9, Section::Info),
            (1200.0, Section::Gallery),
            (1899.0, Section::Gallery),
            (1900.0, Section::Calendar),
            (2599.0, Section::Calendar),
            (2600.0, Section::Contact),
            (100_000.0, Section::Contact),
        ];
        for (offset, expected) in cases {
            assert_eq!(Section::from_scroll(offset), expected, "offset {}", offset);
        }
    }

    #[test]
    fn odd_offsets_still_map_to_a_section() {
        assert_eq!(Section::from_scroll(-40.0), Section::Home);
        assert_eq!(Section::from_scroll(f64::NAN), Section::Contact);
        assert_eq!(Section::from_scroll(f64::INFINITY), Section::Contact);
        assert_eq!(Section::from_scroll(f64::NEG_INFINITY), Section::Home);
    }

    #[test]
    fn every_offset_lands_in_exactly_one_section() {
        let mut y = -100.0;
        while y < 3_000.0 {
            let section = Section::from_scroll(y);
            let hits = Section::ALL.iter().filter(|s| **s == section).count();
            assert_eq!(hits, 1);
            y += 37.5;
        }
    }

    #[test]
    fn on_scroll_reports_changes() {
        let mut view = ViewController::default();
        assert!(!view.on_scroll(120.0));
        assert!(view.on_scroll(2000.0));
        assert_eq!(view.active_section(), Section::Calendar);
        assert!(!view.on_scroll(2100.0));
    }

    #[test]
    fn navigation_closes_menu_and_names_anchor() {
        let mut view = ViewController::default();
        view.toggle_menu();
        assert!(view.is_menu_open());

        let anchor = view.set_active_section(Section::Gallery);

        assert_eq!(anchor, "gallery");
        assert_eq!(view.active_section(), Section::Gallery);
        assert!(!view.is_menu_open());
    }

    #[test]
    fn close_menu_action_only_rerenders_when_open() {
        let closed = Rc::new(ViewController::default());
        let same = closed.clone().reduce(ViewAction::CloseMenu);
        assert!(Rc::ptr_eq(&closed, &same));

        let open = closed.reduce(ViewAction::ToggleMenu);
        assert!(open.is_menu_open());
        let shut = open.reduce(ViewAction::CloseMenu);
        assert!(!shut.is_menu_open());
    }

    #[test]
    fn reducer_keeps_rc_when_nothing_changes() {
        let state = Rc::new(ViewController::default());
        let same = state.clone().reduce(ViewAction::Scrolled(10.0));
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.reduce(ViewAction::Scrolled(2650.0));
        assert_eq!(moved.active_section(), Section::Contact);
    }

    #[test]
    fn throttle_admits_one_sample_per_window() {
        let mut throttle = ScrollThrottle::new(100);
        assert_eq!(throttle.offer(0.0), Sample::Run);
        assert_eq!(throttle.offer(30.0), Sample::Defer(70));
        assert_eq!(throttle.offer(60.0), Sample::Drop);
        assert_eq!(throttle.offer(99.0), Sample::Drop);
        assert!(throttle.fire_trailing(100.0));
        assert_eq!(throttle.offer(150.0), Sample::Defer(50));
        assert!(throttle.fire_trailing(200.0));
        assert_eq!(throttle.offer(320.0), Sample::Run);
    }

    #[test]
    fn late_trailing_sample_yields_to_fresh_leading_one() {
        let mut throttle = ScrollThrottle::new(100);
        throttle.offer(0.0);
        assert_eq!(throttle.offer(10.0), Sample::Defer(90));
        // Timer fired late; a new event already ran.
        assert_eq!(throttle.offer(105.0), Sample::Run);
        assert!(!throttle.fire_trailing(110.0));
        assert_eq!(throttle.offer(150.0), Sample::Defer(55));
    }

    #[test]
    fn resting_offset_after_a_new_window_is_still_sampled() {
        let mut throttle = ScrollThrottle::new(100);
        assert_eq!(throttle.offer(0.0), Sample::Run);
        assert_eq!(throttle.offer(30.0), Sample::Defer(70));
        // The deferred timer has not fired yet when the next window opens.
        assert_eq!(throttle.offer(150.0), Sample::Run);
        assert_eq!(throttle.offer(160.0), Sample::Defer(90));
        // A stale timer from the first window must not swallow the new one.
        assert!(!throttle.fire_trailing(170.0));
        assert!(throttle.fire_trailing(250.0));
    }

    #[test]
    fn leading_sample_disarms_pending_trailing_sample() {
        let mut throttle = ScrollThrottle::new(100);
        throttle.offer(0.0);
        assert_eq!(throttle.offer(50.0), Sample::Defer(50));
        assert_eq!(throttle.offer(120.0), Sample::Run);
        assert_eq!(throttle.offer(130.0), Sample::Defer(90));
        assert_eq!(throttle.offer(140.0), Sample::Drop);
    }
}
