use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable piece of the screen.
///
/// Components receive what they show as props (struct fields) and render
/// into the `Rect` they are given. Persistent state such as a list cursor
/// lives in `TuiState`; a component borrows it for one frame.
///
/// `render` takes `&mut self` so a component can update borrowed
/// presentation state (scroll offsets) during the render pass, matching
/// ratatui's `StatefulWidget`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// The higher-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
