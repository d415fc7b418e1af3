//! Typed façade over the SPSC queue: `post_*` on the input thread side,
//! `poll` on the worker loop side.
//!
//! There is no global bridge; `main` constructs the pair and hands the
//! poster to the input thread and the receiver to the worker loop. When
//! the worker loop unwinds, dropping the receiver makes the next post
//! return `false`, which stops the input thread.

use crate::event::{Event, Key, KeyEvent, Modifiers, MouseButton, MouseEvent, SizeEvent};
use crate::spsc::{self, Consumer, Producer};

/// Create a connected poster/receiver pair.
pub fn channel() -> (EventPoster, EventReceiver) {
    let (tx, rx) = spsc::channel();
    (EventPoster { tx }, EventReceiver { rx })
}

/// Producer endpoint. Must only be used from the single input thread.
///
/// Every `post_*` constructs the event and pushes it without blocking;
/// the `bool` result is `false` once the receiver is gone.
pub struct EventPoster {
    tx: Producer<Event>,
}

/// Consumer endpoint. Must only be used from the single worker thread.
pub struct EventReceiver {
    rx: Consumer<Event>,
}

impl EventPoster {
    pub fn post_exit(&self) -> bool {
        self.tx.push(Event::Exit)
    }

    pub fn post_key(&self, key: Key, modifiers: Modifiers, down: bool) -> bool {
        self.tx.push(Event::Key(KeyEvent {
            key,
            modifiers,
            down,
        }))
    }

    pub fn post_mouse_move(&self, x: i32, y: i32) -> bool {
        self.tx.push(Event::Mouse(MouseEvent {
            x,
            y,
            wheel: 0,
            button: MouseButton::None,
            down: false,
        }))
    }

    pub fn post_mouse_wheel(&self, x: i32, y: i32, delta: i32) -> bool {
        self.tx.push(Event::Mouse(MouseEvent {
            x,
            y,
            wheel: delta,
            button: MouseButton::None,
            down: false,
        }))
    }

    pub fn post_mouse_button(&self, x: i32, y: i32, button: MouseButton, down: bool) -> bool {
        self.tx.push(Event::Mouse(MouseEvent {
            x,
            y,
            wheel: 0,
            button,
            down,
        }))
    }

    pub fn post_size(&self, width: u32, height: u32) -> bool {
        self.tx.push(Event::Size(SizeEvent { width, height }))
    }
}

impl EventReceiver {
    /// Next queued event in FIFO order, or `None` if the queue is empty.
    /// Non-blocking; the caller releases the event by dropping it.
    pub fn poll(&self) -> Option<Event> {
        self.rx.pop()
    }
}
