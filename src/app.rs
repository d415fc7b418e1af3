use crate::bridge::EventReceiver;
use crate::event::{Event, Key, KeyEvent, Modifiers, MouseEvent, SizeEvent};

/// Lines scrolled per wheel notch.
const WHEEL_SCROLL_LINES: usize = 3;

/// Interpreted state derived from the event stream — owned exclusively
/// by the worker thread.
pub struct App {
    /// Whether the loop should exit after the current drain completes.
    /// Becomes permanently true on `Exit`, or on the app's own quit keys.
    pub should_quit: bool,
    /// Last-known client size (columns, rows), updated on `Size`.
    pub width: u32,
    pub height: u32,
    /// True when the last `Size` event changed the applied dimensions;
    /// cleared by the renderer once it has reconfigured its layout.
    pub needs_layout: bool,
    /// Modifier chord state, snapshotted from the latest key event.
    pub modifiers: Modifiers,
    /// Vertical scroll offset (in lines) into the document.
    pub scroll: usize,
    /// Total number of document lines (set once at load).
    pub line_count: usize,
    /// Height of the text viewport in terminal rows (set each render).
    pub viewport_height: usize,
}

impl App {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            should_quit: false,
            width,
            height,
            needs_layout: true,
            modifiers: Modifiers::empty(),
            scroll: 0,
            line_count: 0,
            viewport_height: 0,
        }
    }

    /// Drain the bridge to exhaustion, applying each event strictly in
    /// arrival order. Returns true when the loop should terminate.
    ///
    /// Called exactly once per worker-loop iteration, before drawing.
    pub fn drain(&mut self, events: &EventReceiver) -> bool {
        while let Some(event) = events.poll() {
            self.apply(event);
        }
        self.should_quit
    }

    fn apply(&mut self, event: Event) {
        match event {
            Event::Exit => self.should_quit = true,
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Size(size) => self.handle_size(size),
        }
    }

    // ── Event interpretation ────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) {
        // Every key event carries the full modifier mask, so the chord
        // state is a snapshot of the latest one, down or up.
        self.modifiers = key.modifiers;

        if !key.down {
            return;
        }

        match key.key {
            Key::Q | Key::Esc => self.should_quit = true,
            // Ctrl+0 jumps back to the top of the document.
            Key::Digit0 if key.modifiers.ctrl() => self.scroll = 0,
            Key::Up | Key::K => self.scroll_up(1),
            Key::Down | Key::J => self.scroll_down(1),
            Key::PageUp => self.scroll_up(self.viewport_height),
            Key::PageDown | Key::Space => self.scroll_down(self.viewport_height),
            Key::Home => self.scroll = 0,
            Key::End => self.scroll = self.max_scroll(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.wheel == 0 {
            // Moves and button transitions don't affect the view.
            return;
        }
        // Ctrl chord turns wheel notches into page jumps.
        let step = if self.modifiers.ctrl() {
            self.viewport_height.max(1)
        } else {
            WHEEL_SCROLL_LINES
        };
        if mouse.wheel > 0 {
            self.scroll_up(step * mouse.wheel as usize);
        } else {
            self.scroll_down(step * mouse.wheel.unsigned_abs() as usize);
        }
    }

    fn handle_size(&mut self, size: SizeEvent) {
        // Recompute layout whenever the reported dimensions differ from
        // the last applied ones.
        if size.width != self.width || size.height != self.height {
            self.width = size.width;
            self.height = size.height;
            self.needs_layout = true;
        }
    }

    // ── Scrolling ───────────────────────────────────────────────

    /// Scroll down by `n` lines, clamped to content bounds.
    pub fn scroll_down(&mut self, n: usize) {
        self.scroll = (self.scroll + n).min(self.max_scroll());
    }

    /// Scroll up by `n` lines, clamped to 0.
    pub fn scroll_up(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    pub fn max_scroll(&self) -> usize {
        self.line_count.saturating_sub(self.viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge;
    use crate::event::MouseButton;

    fn app() -> App {
        let mut app = App::new(80, 24);
        app.line_count = 200;
        app.viewport_height = 20;
        app
    }

    #[test]
    fn resize_then_exit_settles_before_quit() {
        let (tx, rx) = bridge::channel();
        tx.post_size(800, 600);
        tx.post_size(1024, 768);
        tx.post_exit();

        let mut app = app();
        let quit = app.drain(&rx);

        assert!(quit);
        assert!(app.should_quit);
        assert_eq!((app.width, app.height), (1024, 768));
        assert!(app.needs_layout);
    }

    #[test]
    fn unchanged_size_does_not_request_layout() {
        let mut app = app();
        app.needs_layout = false;
        app.handle_size(SizeEvent {
            width: 80,
            height: 24,
        });
        assert!(!app.needs_layout);
    }

    #[test]
    fn key_chord_tracks_down_and_up() {
        let (tx, rx) = bridge::channel();
        let mut app = app();

        // Ctrl held across a key press, then both released.
        tx.post_key(Key::A, Modifiers::LEFT_CTRL, true);
        app.drain(&rx);
        assert!(app.modifiers.ctrl());

        tx.post_key(Key::A, Modifiers::LEFT_CTRL, false);
        app.drain(&rx);
        assert!(app.modifiers.ctrl());

        tx.post_key(Key::A, Modifiers::empty(), false);
        app.drain(&rx);
        assert!(!app.modifiers.ctrl());
    }

    #[test]
    fn ctrl_zero_resets_scroll() {
        let (tx, rx) = bridge::channel();
        let mut app = app();
        app.scroll = 57;

        tx.post_key(Key::Digit0, Modifiers::RIGHT_CTRL, true);
        app.drain(&rx);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn plain_zero_does_not_reset_scroll() {
        let (tx, rx) = bridge::channel();
        let mut app = app();
        app.scroll = 57;

        tx.post_key(Key::Digit0, Modifiers::empty(), true);
        app.drain(&rx);
        assert_eq!(app.scroll, 57);
    }

    #[test]
    fn wheel_scrolls_three_lines_per_notch() {
        let (tx, rx) = bridge::channel();
        let mut app = app();

        tx.post_mouse_wheel(5, 5, -2);
        app.drain(&rx);
        assert_eq!(app.scroll, 6);

        tx.post_mouse_wheel(5, 5, 1);
        app.drain(&rx);
        assert_eq!(app.scroll, 3);
    }

    #[test]
    fn ctrl_wheel_scrolls_by_page() {
        let (tx, rx) = bridge::channel();
        let mut app = app();

        tx.post_key(Key::A, Modifiers::LEFT_CTRL, true);
        tx.post_mouse_wheel(5, 5, -1);
        app.drain(&rx);
        assert_eq!(app.scroll, app.viewport_height);
    }

    #[test]
    fn scroll_clamps_to_content_bounds() {
        let (tx, rx) = bridge::channel();
        let mut app = app();

        tx.post_mouse_wheel(0, 0, -1000);
        app.drain(&rx);
        assert_eq!(app.scroll, app.max_scroll());

        tx.post_mouse_wheel(0, 0, 1000);
        app.drain(&rx);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn mouse_moves_and_buttons_leave_view_alone() {
        let (tx, rx) = bridge::channel();
        let mut app = app();
        app.scroll = 10;

        tx.post_mouse_move(3, 4);
        tx.post_mouse_button(3, 4, MouseButton::Left, true);
        tx.post_mouse_button(3, 4, MouseButton::Left, false);
        app.drain(&rx);
        assert_eq!(app.scroll, 10);
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_flag_is_permanent_across_drains() {
        let (tx, rx) = bridge::channel();
        let mut app = app();

        tx.post_exit();
        assert!(app.drain(&rx));
        // Later drains with no new events still report quit.
        assert!(app.drain(&rx));
        tx.post_size(10, 10);
        assert!(app.drain(&rx));
    }

    #[test]
    fn key_up_does_not_trigger_actions() {
        let (tx, rx) = bridge::channel();
        let mut app = app();

        tx.post_key(Key::Q, Modifiers::empty(), false);
        app.drain(&rx);
        assert!(!app.should_quit);
    }
}
