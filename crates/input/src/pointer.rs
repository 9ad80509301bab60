//! Pointer (mouse) presses.
//!
//! Hit testing lives with the layout in the terminal view; this module only
//! decides which mouse events count as a press and where they landed.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// A primary-button press at a terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPress {
    pub column: u16,
    pub row: u16,
}

/// Left-button down events become presses; everything else is ignored.
pub fn pointer_press(event: MouseEvent) -> Option<PointerPress> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerPress {
            column: event.column,
            row: event.row,
        }),
        _ => None,
    }
}
