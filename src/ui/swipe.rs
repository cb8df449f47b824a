use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Path, Program};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use super::{DANGER, MUTED};
use crate::state::grocery::{self, clamp_drag, should_delete, MAX_DRAG};
use crate::Message;

/// Drag handle at the end of a grocery row
///
/// Dragging the knob to the left reveals the delete track; releasing it far
/// enough removes the row.
pub struct SwipeHandle {
    pub item_id: u32,
}

impl Program<Message> for SwipeHandle {
    type State = DragState;

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let radius = bounds.height.min(24.0) / 2.0;
        let center_y = bounds.height / 2.0;

        // Track fills red as the drag approaches the delete threshold
        let reveal = state.offset / MAX_DRAG;
        if reveal > 0.0 {
            let color = if should_delete(state.offset) {
                DANGER
            } else {
                Color { a: 0.25 + 0.5 * reveal, ..DANGER }
            };
            let width = -state.offset + radius * 2.0;
            frame.fill_rectangle(
                Point::new(bounds.width - width, center_y - radius),
                Size::new(width, radius * 2.0),
                color,
            );
        }

        let knob = Point::new(bounds.width - radius + state.offset, center_y);
        frame.fill(&Path::circle(knob, radius), if state.is_dragging { DANGER } else { MUTED });
        frame.fill(&Path::circle(knob, radius * 0.35), Color::WHITE);

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            // Mouse button press - start dragging
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_over(bounds) {
                    state.is_dragging = true;
                    state.origin = Some(position);
                    state.offset = 0.0;
                    return (canvas::event::Status::Captured, None);
                }
            }

            // Mouse move - follow the cursor horizontally
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if state.is_dragging {
                    if let (Some(origin), Some(position)) = (state.origin, cursor.position()) {
                        state.offset = clamp_drag(position.x - origin.x);
                        return (canvas::event::Status::Captured, None);
                    }
                }
            }

            // Mouse button release - hand the final offset to the list
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.is_dragging {
                    let offset = state.offset;
                    *state = DragState::default();
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::Grocery(grocery::Message::DragReleased(
                            self.item_id,
                            offset,
                        ))),
                    );
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if state.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// State for drag interactions
#[derive(Debug, Clone, Default)]
pub struct DragState {
    pub is_dragging: bool,
    pub origin: Option<Point>,
    /// Current horizontal offset, between MAX_DRAG and 0
    pub offset: f32,
}
