/// Camera viewfinder
/// Simulated preview with a rule-of-thirds grid and scan frame
use iced::widget::canvas::{self, Path, Stroke};
use iced::{Color, Point, Rectangle, Size};

use super::{NIGHT, PRIMARY};
use crate::state::camera::Stage;
use crate::Message;

/// Length of each scan-frame corner bracket, as a share of the frame side
const BRACKET: f32 = 0.18;

#[derive(Debug, Clone, Copy)]
pub struct Viewfinder {
    pub stage: Stage,
}

impl canvas::Program<Message> for Viewfinder {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let width = bounds.width;
        let height = bounds.height;

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), NIGHT);

        // 3x3 grid overlay
        let grid = || {
            Stroke::default()
                .with_color(Color { a: 0.3, ..Color::WHITE })
                .with_width(1.0)
        };
        for i in 1..3 {
            let x = width * i as f32 / 3.0;
            let y = height * i as f32 / 3.0;
            frame.stroke(&Path::line(Point::new(x, 0.0), Point::new(x, height)), grid());
            frame.stroke(&Path::line(Point::new(0.0, y), Point::new(width, y)), grid());
        }

        // Scan frame: a centred square marked by corner brackets
        let side = width.min(height) * 0.7;
        let left = (width - side) / 2.0;
        let top = (height - side) / 2.0;
        let arm = side * BRACKET;
        let color = match self.stage {
            Stage::Ready => Color::WHITE,
            Stage::Capturing | Stage::Results => PRIMARY,
        };

        let brackets = Path::new(|builder| {
            for (cx, cy, dx, dy) in [
                (left, top, 1.0, 1.0),
                (left + side, top, -1.0, 1.0),
                (left, top + side, 1.0, -1.0),
                (left + side, top + side, -1.0, -1.0),
            ] {
                builder.move_to(Point::new(cx + dx * arm, cy));
                builder.line_to(Point::new(cx, cy));
                builder.line_to(Point::new(cx, cy + dy * arm));
            }
        });
        frame.stroke(&brackets, Stroke::default().with_color(color).with_width(4.0));

        // Analysis in progress: tint the scan area
        if self.stage == Stage::Capturing {
            frame.fill_rectangle(
                Point::new(left, top),
                Size::new(side, side),
                Color { a: 0.15, ..PRIMARY },
            );
        }

        vec![frame.into_geometry()]
    }
}
