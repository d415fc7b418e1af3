use bitflags::bitflags;

/// All events funnelled from the input thread to the worker loop.
///
/// Constructed fully populated by the posting side; once polled, the
/// consumer owns the value and releasing it is just dropping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The platform asked us to shut down (Ctrl+C / close request).
    Exit,
    /// A key went down or up.
    Key(KeyEvent),
    /// Cursor movement, wheel, or a button transition.
    Mouse(MouseEvent),
    /// The client area changed size (columns, rows).
    Size(SizeEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    pub down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// Cursor position in client coordinates.
    pub x: i32,
    pub y: i32,
    /// Wheel delta in notches; zero for moves and button transitions.
    pub wheel: i32,
    /// `MouseButton::None` for pure movement and wheel events.
    pub button: MouseButton,
    /// Meaningless unless `button` is a real button.
    pub down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEvent {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    None,
    Left,
    Middle,
    Right,
}

bitflags! {
    /// Modifier state as reported alongside key events.
    ///
    /// Left and right variants are tracked independently; use the
    /// side-agnostic accessors when the distinction doesn't matter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const LEFT_ALT    = 0x01;
        const RIGHT_ALT   = 0x02;
        const LEFT_CTRL   = 0x04;
        const RIGHT_CTRL  = 0x08;
        const LEFT_SHIFT  = 0x10;
        const RIGHT_SHIFT = 0x20;
        const LEFT_META   = 0x40;
        const RIGHT_META  = 0x80;
    }
}

impl Modifiers {
    pub fn alt(self) -> bool {
        self.intersects(Self::LEFT_ALT | Self::RIGHT_ALT)
    }

    pub fn ctrl(self) -> bool {
        self.intersects(Self::LEFT_CTRL | Self::RIGHT_CTRL)
    }

    pub fn shift(self) -> bool {
        self.intersects(Self::LEFT_SHIFT | Self::RIGHT_SHIFT)
    }

    pub fn meta(self) -> bool {
        self.intersects(Self::LEFT_META | Self::RIGHT_META)
    }
}

/// The fixed key vocabulary the bridge speaks.
///
/// Native key codes the adapter can't map onto this set are dropped at
/// the adapter, so there is no `Unknown` variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Esc,
    Enter,
    Tab,
    Space,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Print,
    Plus,
    Minus,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    NumPad0,
    NumPad1,
    NumPad2,
    NumPad3,
    NumPad4,
    NumPad5,
    NumPad6,
    NumPad7,
    NumPad8,
    NumPad9,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}
