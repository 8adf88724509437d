/// Pixel size of a cell at one zoom level
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLevel {
    /// Painted square
    pub side_length: f32,
    /// Square plus the gap around it
    pub box_size: f32,
}

const fn level(side_length: f32, box_size: f32) -> ZoomLevel {
    ZoomLevel { side_length, box_size }
}

pub const ZOOM_LEVELS: [ZoomLevel; 9] = [
    level(2.0, 3.0),
    level(3.0, 4.0),
    level(4.0, 6.0),
    level(5.0, 7.0),
    level(6.0, 9.0),
    level(8.0, 12.0),
    level(11.0, 15.0),
    level(15.0, 19.0),
    level(20.0, 25.0),
];

pub const DEFAULT_ZOOM: usize = 3;

/// Camera manages viewport and zoom for plane navigation
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    zoom: usize,
    viewport_width: f32,
    viewport_height: f32,
}

impl Camera {
    /// Camera with the origin in the middle of the viewport
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            offset_x: (viewport_width / 2.0).round(),
            offset_y: (viewport_height / 2.0).round(),
            zoom: DEFAULT_ZOOM,
            viewport_width,
            viewport_height,
        }
    }

    pub fn with_zoom(mut self, zoom: usize) -> Self {
        self.zoom = zoom.min(ZOOM_LEVELS.len() - 1);
        self
    }

    pub const fn zoom(&self) -> usize {
        self.zoom
    }

    pub const fn level(&self) -> ZoomLevel {
        ZOOM_LEVELS[self.zoom]
    }

    pub const fn viewport(&self) -> (f32, f32) {
        (self.viewport_width, self.viewport_height)
    }

    /// Step through the zoom table, keeping the cell under `anchor` in place
    pub fn change_zoom(&mut self, diff: i32, anchor: Option<(f32, f32)>) {
        let old = self.level();
        let last = ZOOM_LEVELS.len() as i32 - 1;
        self.zoom = (self.zoom as i32 + diff).clamp(0, last) as usize;
        let new = self.level();

        if let Some((mx, my)) = anchor {
            if old != new {
                let before = ((mx - self.offset_x) / old.box_size, (my - self.offset_y) / old.box_size);
                let after = ((mx - self.offset_x) / new.box_size, (my - self.offset_y) / new.box_size);
                self.offset_x += ((after.0 - before.0) * new.box_size).round();
                self.offset_y += ((after.1 - before.1) * new.box_size).round();
            }
        }
    }

    /// Shift the offset by a drag from `start` to `pointer`, relative to `start_offset`
    pub fn pan_from(&mut self, start_offset: (f32, f32), start: (f32, f32), pointer: (f32, f32)) {
        self.offset_x = (start_offset.0 + pointer.0 - start.0).round();
        self.offset_y = (start_offset.1 + pointer.1 - start.1).round();
    }

    /// Follow a window resize, keeping the centre where it was
    pub fn resize(&mut self, width: f32, height: f32) {
        self.offset_x += ((width - self.viewport_width) / 2.0).round();
        self.offset_y += ((height - self.viewport_height) / 2.0).round();
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Convert screen coordinates to the cell under them
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> (i32, i32) {
        let zoom = self.level();
        let half_border = (zoom.box_size - zoom.side_length) / 2.0;
        (
            ((screen_x - self.offset_x + half_border) / zoom.box_size).floor() as i32,
            ((screen_y - self.offset_y + half_border) / zoom.box_size).floor() as i32,
        )
    }

    /// Top-left pixel of the painted square of a cell
    pub fn cell_to_screen(&self, x: i32, y: i32) -> (f32, f32) {
        let box_size = self.level().box_size;
        (x as f32 * box_size + self.offset_x, y as f32 * box_size + self.offset_y)
    }

    /// Inclusive cell range covering the viewport, for culling
    pub fn visible_bounds(&self) -> (i32, i32, i32, i32) {
        let (min_x, min_y) = self.screen_to_cell(0.0, 0.0);
        let (max_x, max_y) = self.screen_to_cell(self.viewport_width, self.viewport_height);
        (min_x, min_y, max_x, max_y)
    }

    /// Cell in the middle of the viewport
    pub fn center_cell(&self) -> (i32, i32) {
        self.screen_to_cell(self.viewport_width / 2.0, self.viewport_height / 2.0)
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        *self = Self::new(self.viewport_width, self.viewport_height);
    }
}
