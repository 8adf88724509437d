use macroquad::prelude::*;

/// Dropdown that fires an action when one of its entries is picked.
/// Picking the entry that is already shown fires again.
#[derive(Clone)]
pub struct Dropdown<T: Copy> {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    items: Vec<(String, T)>,
    selected: usize,
    is_open: bool,
}

impl<T: Copy> Dropdown<T> {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<(String, T)>) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            label: label.into(),
            items,
            selected: 0,
            is_open: false,
        }
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Whether the pointer is over the dropdown, menu included when open
    pub fn contains(&self, mouse_pos: (f32, f32)) -> bool {
        let rows = if self.is_open { self.items.len() + 1 } else { 1 };
        self.row_contains(mouse_pos, 0, rows)
    }

    fn row_contains(&self, mouse_pos: (f32, f32), first: usize, rows: usize) -> bool {
        let top = self.y + first as f32 * self.height;
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= top
            && mouse_pos.1 <= top + rows as f32 * self.height
    }

    /// Handle a click; returns the picked value
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<T> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }

        if self.row_contains(mouse_pos, 0, 1) {
            self.is_open = !self.is_open;
            return None;
        }

        if !self.is_open {
            return None;
        }
        self.is_open = false;

        let picked = (0..self.items.len()).find(|&i| self.row_contains(mouse_pos, i + 1, 1))?;
        self.selected = picked;
        Some(self.items[picked].1)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let idle = Color::from_rgba(70, 130, 180, 255);
        let hover = Color::from_rgba(100, 149, 237, 255);

        let main_color = if self.row_contains(mouse_pos, 0, 1) { hover } else { idle };
        draw_rectangle(self.x, self.y, self.width, self.height, main_color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);
        draw_text(&self.items[self.selected].0, self.x + 5.0, self.y + 21.0, 16.0, WHITE);
        draw_text("v", self.x + self.width - 18.0, self.y + 21.0, 16.0, WHITE);

        if !self.is_open {
            return;
        }

        for (i, (name, _)) in self.items.iter().enumerate() {
            let item_y = self.y + (i + 1) as f32 * self.height;
            let color = if self.row_contains(mouse_pos, i + 1, 1) {
                hover
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(self.x, item_y, self.width, self.height, color);
            draw_rectangle_lines(self.x, item_y, self.width, self.height, 1.0, Color::from_rgba(80, 80, 80, 255));
            draw_text(name, self.x + 5.0, item_y + 21.0, 16.0, WHITE);
        }
    }
}
