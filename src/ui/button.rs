use macroquad::prelude::*;

/// Toolbar button, either labelled or a plain color swatch
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    color: Color,
    hover_color: Color,
    selected: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
            selected: false,
        }
    }

    /// Square button filled with `color`
    pub fn swatch(x: f32, y: f32, size: f32, color: Color) -> Self {
        Self {
            text: String::new(),
            color,
            hover_color: color,
            ..Self::new(x, y, size, size, "")
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let hovered = self.is_hovered(mouse_pos);
        let color = if hovered { self.hover_color } else { self.color };

        draw_rectangle(self.x, self.y, self.width, self.height, color);

        let (thickness, outline) = match (self.selected, hovered) {
            (true, _) => (4.0, YELLOW),
            (false, true) => (2.0, LIGHTGRAY),
            _ => (2.0, WHITE),
        };
        draw_rectangle_lines(self.x, self.y, self.width, self.height, thickness, outline);

        if !self.text.is_empty() {
            let text_size = measure_text(&self.text, None, 20, 1.0);
            draw_text(
                &self.text,
                self.x + (self.width - text_size.width) / 2.0,
                self.y + (self.height + text_size.height) / 2.0,
                20.0,
                WHITE,
            );
        }
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
