//! Toolbar and drawing board
//!
//! Layout, hit-testing and chrome rendering for the host window. Clicks are
//! turned into editor [`Action`]s here; nothing in this module touches the
//! vertex store directly.

use crate::color::{Color, PALETTE};
use crate::display::{draw_text_scaled, text_width_scaled, PixelBuffer};
use crate::editor::{Action, PolygonEditor};
use crate::polygon::{Point, Rect};

pub const BTN_WIDTH: u32 = 180;
pub const BTN_HEIGHT: u32 = 50;
pub const BTN_GAP: u32 = 10;
const BTN_RADIUS: i32 = 7;
const LABEL_SCALE: u32 = 2;

/// Marker radius for the first and last vertex, and for the rest
const END_MARKER_RADIUS: i32 = 10;
const MARKER_RADIUS: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonKind {
    Clear,
    Fill,
    Swatch(Color),
}

#[derive(Debug, Clone)]
pub struct Button {
    pub bounds: Rect,
    pub color: Color,
    pub label: &'static str,
    pub kind: ButtonKind,
}

impl Button {
    fn action(&self) -> Action {
        match self.kind {
            ButtonKind::Clear => Action::Clear,
            ButtonKind::Fill => Action::CompletePolygon,
            ButtonKind::Swatch(color) => Action::SelectColor(color),
        }
    }
}

/// Window chrome: buttons across the top, drawing board below
#[derive(Debug, Clone)]
pub struct Toolbar {
    buttons: Vec<Button>,
    board: Rect,
    width: u32,
}

impl Toolbar {
    pub fn new(width: u32, height: u32) -> Self {
        let gap = BTN_GAP as i32;
        let clear = Button {
            bounds: Rect::new(gap, gap, BTN_WIDTH, BTN_HEIGHT),
            color: Color::RED,
            label: "Clear",
            kind: ButtonKind::Clear,
        };
        let fill = Button {
            bounds: Rect::new(clear.bounds.right() + gap, gap, BTN_WIDTH, BTN_HEIGHT),
            color: Color::BLUE,
            label: "Fill",
            kind: ButtonKind::Fill,
        };

        let mut buttons = vec![clear, fill];
        let mut x = buttons[1].bounds.right() + gap;
        for color in PALETTE {
            buttons.push(Button {
                bounds: Rect::new(x, gap, BTN_HEIGHT, BTN_HEIGHT),
                color,
                label: "",
                kind: ButtonKind::Swatch(color),
            });
            x += (BTN_HEIGHT + BTN_GAP) as i32;
        }

        let top = BTN_GAP + BTN_HEIGHT + BTN_GAP;
        let board = Rect::new(
            gap,
            top as i32,
            width.saturating_sub(2 * BTN_GAP),
            height.saturating_sub(top + BTN_GAP),
        );

        Self {
            buttons,
            board,
            width,
        }
    }

    /// Drawable area; points are only placed and filled inside it
    pub fn board(&self) -> Rect {
        self.board
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Resolve a left click into an editor action
    ///
    /// With `axis_lock` the new point snaps to the horizontal or vertical
    /// through the last vertex.
    pub fn resolve_click(&self, point: Point, editor: &PolygonEditor, axis_lock: bool) -> Option<Action> {
        if let Some(button) = self.buttons.iter().find(|b| b.bounds.contains(point)) {
            return Some(button.action());
        }
        if self.board.contains(point) {
            let point = if axis_lock {
                editor.axis_locked(point)
            } else {
                point
            };
            return Some(Action::AppendPoint(point));
        }
        None
    }

    /// Paint background, board, buttons and the vertex counter
    pub fn render(&self, buffer: &mut PixelBuffer, editor: &PolygonEditor) {
        buffer.clear(Color::LIGHTGRAY);

        let b = self.board;
        buffer.fill_rect(b.x, b.y, b.width, b.height, Color::RAYWHITE);

        for button in &self.buttons {
            let r = button.bounds;
            if let ButtonKind::Swatch(color) = button.kind {
                if color == editor.fill_color() {
                    buffer.fill_rect(r.x - 3, r.y - 3, r.width + 6, r.height + 6, Color::WHITE);
                }
            }
            fill_rounded_rect(buffer, r, BTN_RADIUS, button.color);
            draw_text_scaled(buffer, r.x + 20, r.y + 17, button.label, LABEL_SCALE, Color::WHITE);
        }

        let count = editor.store().count().to_string();
        let x = self.width as i32 - BTN_GAP as i32 - text_width_scaled(&count, LABEL_SCALE) as i32;
        let y = (BTN_GAP + BTN_HEIGHT / 2) as i32 - BTN_GAP as i32;
        draw_text_scaled(buffer, x, y, &count, LABEL_SCALE, Color::WHITE);
    }

    /// Paint a marker for every placed vertex in its own color
    pub fn render_vertices(&self, buffer: &mut PixelBuffer, editor: &PolygonEditor) {
        let store = editor.store();
        let last = store.count().saturating_sub(1);
        for (i, vertex) in store.iter().enumerate() {
            let radius = if i == 0 || i == last {
                END_MARKER_RADIUS
            } else {
                MARKER_RADIUS
            };
            let (x, y) = vertex.position.to_pixel();
            buffer.fill_circle(x, y, radius, vertex.color);
        }
    }
}

/// Rectangle with quarter-circle corners of `radius`
fn fill_rounded_rect(buffer: &mut PixelBuffer, r: Rect, radius: i32, color: Color) {
    let radius = radius.min(r.width as i32 / 2).min(r.height as i32 / 2).max(0);
    let inner_w = r.width.saturating_sub(2 * radius as u32);
    let inner_h = r.height.saturating_sub(2 * radius as u32);

    buffer.fill_rect(r.x + radius, r.y, inner_w, r.height, color);
    buffer.fill_rect(r.x, r.y + radius, r.width, inner_h, color);

    let (left, top) = (r.x + radius, r.y + radius);
    let (right, bottom) = (r.right() - 1 - radius, r.bottom() - 1 - radius);
    for (cx, cy) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
        buffer.fill_circle(cx, cy, radius, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::{OrderingPolicy, MAX_VERTICES};
    use crate::util::Rng;

    fn editor() -> PolygonEditor {
        PolygonEditor::new(MAX_VERTICES, OrderingPolicy::Insertion, Rng::new(9))
    }

    #[test]
    fn test_default_layout() {
        let toolbar = Toolbar::new(800, 600);
        assert_eq!(toolbar.board(), Rect::new(10, 70, 780, 520));
        assert_eq!(toolbar.buttons()[0].bounds, Rect::new(10, 10, 180, 50));
        assert_eq!(toolbar.buttons()[1].bounds, Rect::new(200, 10, 180, 50));
        assert_eq!(toolbar.buttons().len(), 2 + PALETTE.len());
    }

    #[test]
    fn test_click_resolution() {
        let toolbar = Toolbar::new(800, 600);
        let ed = editor();
        assert_eq!(
            toolbar.resolve_click(Point::new(50.0, 30.0), &ed, false),
            Some(Action::Clear)
        );
        assert_eq!(
            toolbar.resolve_click(Point::new(250.0, 30.0), &ed, false),
            Some(Action::CompletePolygon)
        );
        assert_eq!(
            toolbar.resolve_click(Point::new(400.0, 30.0), &ed, false),
            Some(Action::SelectColor(PALETTE[0]))
        );
        assert_eq!(
            toolbar.resolve_click(Point::new(300.0, 300.0), &ed, false),
            Some(Action::AppendPoint(Point::new(300.0, 300.0)))
        );
        // Gap between toolbar and board, and the outer margin
        assert_eq!(toolbar.resolve_click(Point::new(300.0, 65.0), &ed, false), None);
        assert_eq!(toolbar.resolve_click(Point::new(795.0, 300.0), &ed, false), None);
    }

    #[test]
    fn test_axis_lock_applies_on_board() {
        let toolbar = Toolbar::new(800, 600);
        let mut ed = editor();
        ed.dispatch(Action::AppendPoint(Point::new(100.0, 100.0))).unwrap();
        assert_eq!(
            toolbar.resolve_click(Point::new(300.0, 120.0), &ed, true),
            Some(Action::AppendPoint(Point::new(300.0, 100.0)))
        );
    }

    #[test]
    fn test_render_chrome_and_markers() {
        let toolbar = Toolbar::new(800, 600);
        let mut ed = editor();
        ed.dispatch(Action::AppendPoint(Point::new(100.0, 100.0))).unwrap();
        ed.dispatch(Action::AppendPoint(Point::new(300.0, 100.0))).unwrap();
        ed.dispatch(Action::AppendPoint(Point::new(300.0, 300.0))).unwrap();

        let mut buffer = PixelBuffer::with_size(800, 600);
        toolbar.render(&mut buffer, &ed);
        toolbar.render_vertices(&mut buffer, &ed);

        assert_eq!(buffer.get_pixel(5, 5), Some(Color::LIGHTGRAY));
        assert_eq!(buffer.get_pixel(700, 500), Some(Color::RAYWHITE));
        assert_eq!(buffer.get_pixel(15, 35), Some(Color::RED));
        let first = ed.store().at(0).unwrap();
        let middle = ed.store().at(1).unwrap();
        assert_eq!(buffer.get_pixel(109, 100), Some(first.color));
        assert_eq!(buffer.get_pixel(304, 100), Some(middle.color));
        assert_eq!(buffer.get_pixel(308, 100), Some(Color::RAYWHITE));
    }

    #[test]
    fn test_tiny_window_has_empty_board() {
        let toolbar = Toolbar::new(15, 60);
        assert_eq!(toolbar.board().width, 0);
        assert_eq!(toolbar.board().height, 0);
    }
}
