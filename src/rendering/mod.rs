use macroquad::prelude::*;

use crate::application::{Camera, GameState, Tool};
use crate::domain::LiveCell;
use crate::ui::{Button, Dropdown, SeedChoice, ToolbarAction, grid_area_width, panel_x, rgb_color, PANEL_WIDTH, SEED_MENU_Y};

const ERASER_MARK: Color = WHITE;

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Cells falling inside the camera's visible bounds
pub fn visible_cells<'a>(cells: &'a [LiveCell], camera: &Camera) -> impl Iterator<Item = &'a LiveCell> {
    let (min_x, min_y, max_x, max_y) = camera.visible_bounds();
    cells
        .iter()
        .filter(move |c| c.x >= min_x && c.x <= max_x && c.y >= min_y && c.y <= max_y)
}

/// Draw every live cell inside the viewport in its own color.
/// The frame is expected to be cleared already.
pub fn draw_cells(cells: &[LiveCell], camera: &Camera) {
    let side = camera.level().side_length;

    visible_cells(cells, camera)
        .for_each(|c| {
            let (sx, sy) = camera.cell_to_screen(c.x, c.y);
            draw_rectangle(sx, sy, side, side, rgb_color(c.color));
        });
}

/// Outline the cell under the pointer in the color the selected tool would paint
pub fn draw_pointer_mark(state: &GameState, camera: &Camera, mouse_pos: (f32, f32)) {
    let Some(tool) = state.tool else { return };
    if mouse_pos.0 >= grid_area_width() {
        return;
    }

    let color = match tool {
        Tool::Color(rgb) => rgb_color(rgb),
        Tool::Erase => ERASER_MARK,
    };
    let (x, y) = camera.screen_to_cell(mouse_pos.0, mouse_pos.1);
    let (sx, sy) = camera.cell_to_screen(x, y);
    let side = camera.level().side_length;
    draw_rectangle(sx, sy, side, side, color);
    draw_rectangle_lines(sx - 1.0, sy - 1.0, side + 2.0, side + 2.0, 1.0, DARKGRAY);
}

/// FPS, timings and population in the top-left corner
pub fn draw_stats(state: &GameState) {
    let lines = [
        format!("FPS: {}", get_fps()),
        format!("Generation: {}", state.registry.generation()),
        format!("Cells: {}", format_number(state.registry.len())),
        format!("Evolve: {:.1}ms", state.last_evolution_time_ms),
        format!("Render: {:.1}ms", state.last_render_time_ms),
    ];
    draw_rectangle(4.0, 4.0, 170.0, 16.0 * lines.len() as f32 + 8.0, Color::from_rgba(0, 0, 0, 180));
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 10.0, 20.0 + i as f32 * 16.0, 16.0, GREEN);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Draw the control panel with toolbar, seed menu and status
pub fn draw_controls(
    state: &GameState,
    toolbar: &[(Button, ToolbarAction)],
    seed_menu: &Dropdown<SeedChoice>,
    mouse_pos: (f32, f32)
) {
    draw_panel_background();

    toolbar.iter().for_each(|(btn, _)| btn.draw(mouse_pos));

    let px = panel_x();
    let help = [
        ("Controls:", 14.0, WHITE),
        ("LMB: Paint / Drag", 12.0, GRAY),
        ("Wheel / Pinch: Zoom", 12.0, GRAY),
        ("Space: Play/Pause", 12.0, GRAY),
        ("C: Clear  P: Prefill", 12.0, GRAY),
        ("S: Stats  H: Home", 12.0, GRAY),
    ];
    help.iter().enumerate().for_each(|(i, (text, size, color))| {
        draw_text(text, px, SEED_MENU_Y + 60.0 + i as f32 * 14.0, *size, *color);
    });

    let status_y = screen_height() - 90.0;
    let labels = [
        ("Generation:".to_owned(), 16.0, WHITE),
        (format!("{}", state.registry.generation()), 20.0, Color::from_rgba(0, 255, 150, 255)),
        ("Status:".to_owned(), 16.0, WHITE),
        (
            (if state.is_running { "Running" } else { "Paused" }).to_owned(),
            16.0,
            if state.is_running { GREEN } else { ORANGE },
        ),
    ];
    labels.iter().enumerate().for_each(|(i, (text, size, color))| {
        draw_text(text, px, status_y + i as f32 * 20.0, *size, *color);
    });

    // dropdown last so the open menu covers the help text
    seed_menu.draw(mouse_pos);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rgb;

    #[test]
    fn test_visible_cells_culls_outside_viewport() {
        // 700x700 at zoom 3: cells -50..=50 on both axes
        let camera = Camera::new(700.0, 700.0).with_zoom(3);
        let cells = [
            LiveCell::new(0, 0, Rgb::WHITE),
            LiveCell::new(-50, 50, Rgb::WHITE),
            LiveCell::new(51, 0, Rgb::WHITE),
            LiveCell::new(0, i32::MIN, Rgb::WHITE),
        ];
        let shown: Vec<_> = visible_cells(&cells, &camera).map(|c| (c.x, c.y)).collect();
        assert_eq!(shown, vec![(0, 0), (-50, 50)]);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_000_000), "2.0M");
    }
}
