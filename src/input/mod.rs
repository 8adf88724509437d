use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::ui::{Button, ToolbarAction, grid_area_width};

/// Pointer gesture carried between frames
#[derive(Default, Debug)]
pub struct Pointer {
    /// Screen position and camera offset when a pan drag started
    pan_start: Option<((f32, f32), (f32, f32))>,
    /// Last cell touched by the current stroke
    last_cell: Option<(i32, i32)>,
    /// Finger distance at the last pinch zoom step
    pinch_distance: Option<f32>,
}

/// Finger travel, in pixels, that makes one zoom step
pub const PINCH_STEP: f32 = 30.0;

/// Zoom step for a pinch that went from `last` to `distance` apart:
/// +1 when the fingers spread, -1 when they close, nothing below `PINCH_STEP`
pub fn pinch_zoom_step(last: f32, distance: f32) -> Option<i32> {
    let travel = distance - last;
    if travel.abs() > PINCH_STEP {
        Some(travel.signum() as i32)
    } else {
        None
    }
}

/// Zoom with the mouse wheel, centred on the pointer
pub fn handle_zoom(camera: &mut Camera, mouse_pos: (f32, f32)) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.change_zoom(1, Some(mouse_pos));
    } else if wheel < 0.0 {
        camera.change_zoom(-1, Some(mouse_pos));
    }
}

/// Two-finger pinch zoom, centred between the fingers.
/// A pinch cancels any stroke or pan the first finger started.
pub fn handle_pinch(state: &mut GameState, camera: &mut Camera, pointer: &mut Pointer) {
    let fingers: Vec<Vec2> = touches()
        .into_iter()
        .filter(|t| !matches!(t.phase, TouchPhase::Ended | TouchPhase::Cancelled))
        .map(|t| t.position)
        .collect();

    let [a, b] = fingers.as_slice() else {
        pointer.pinch_distance = None;
        return;
    };

    state.end_stroke();
    pointer.pan_start = None;
    pointer.last_cell = None;

    let distance = a.distance(*b);
    let Some(last) = pointer.pinch_distance else {
        pointer.pinch_distance = Some(distance);
        return;
    };
    if let Some(step) = pinch_zoom_step(last, distance) {
        let mid = (*a + *b) / 2.0;
        camera.change_zoom(step, Some((mid.x, mid.y)));
        pointer.pinch_distance = Some(distance);
    }
}

/// Left drag paints with the selected tool, or pans when no tool is selected
pub fn handle_pointer(state: &mut GameState, camera: &mut Camera, pointer: &mut Pointer, mouse_pos: (f32, f32)) {
    let in_grid = mouse_pos.0 < grid_area_width();

    if pointer.pinch_distance.is_some() {
        if is_mouse_button_released(MouseButton::Left) {
            state.end_stroke();
            pointer.pan_start = None;
            pointer.last_cell = None;
        }
        return;
    }

    if is_mouse_button_pressed(MouseButton::Left) && in_grid {
        state.begin_stroke();
        if !state.is_drawing {
            pointer.pan_start = Some((mouse_pos, (camera.offset_x, camera.offset_y)));
        }
    }

    if is_mouse_button_down(MouseButton::Left) {
        if state.is_drawing && in_grid {
            let cell = camera.screen_to_cell(mouse_pos.0, mouse_pos.1);
            if pointer.last_cell != Some(cell) {
                state.paint_at(cell.0, cell.1);
                pointer.last_cell = Some(cell);
            }
        } else if let Some((start, offset)) = pointer.pan_start {
            camera.pan_from(offset, start, mouse_pos);
        }
    }

    if is_mouse_button_released(MouseButton::Left) {
        state.end_stroke();
        *pointer = Pointer::default();
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState, camera: &mut Camera) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 4] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::C, GameState::clear),
        (KeyCode::P, GameState::prefill),
        (KeyCode::S, GameState::toggle_stats),
    ];

    let new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    new_state
}

/// Process toolbar clicks functionally
pub fn process_toolbar_clicks(
    state: GameState,
    toolbar: &[(Button, ToolbarAction)],
    mouse_pos: (f32, f32)
) -> GameState {
    toolbar
        .iter()
        .filter(|(btn, _)| btn.is_clicked(mouse_pos))
        .fold(state, |mut s, (_, action)| match action {
            ToolbarAction::Select(tool) => {
                s.select_tool(*tool);
                s
            }
            ToolbarAction::TogglePlay => s.toggle_running(),
            ToolbarAction::Trash => s.clear(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinch_below_threshold_does_nothing() {
        assert_eq!(pinch_zoom_step(100.0, 120.0), None);
        assert_eq!(pinch_zoom_step(100.0, 70.0), None);
    }

    #[test]
    fn test_pinch_direction() {
        // spreading the fingers zooms in, closing them zooms out
        assert_eq!(pinch_zoom_step(100.0, 140.0), Some(1));
        assert_eq!(pinch_zoom_step(140.0, 100.0), Some(-1));
    }

    #[test]
    fn test_pinch_step_applies_to_camera() {
        let mut camera = Camera::new(800.0, 600.0);
        let before = camera.zoom();
        if let Some(step) = pinch_zoom_step(50.0, 200.0) {
            camera.change_zoom(step, Some((400.0, 300.0)));
        }
        assert_eq!(camera.zoom(), before + 1);
        // the midpoint was the origin and stays on it
        assert_eq!(camera.screen_to_cell(400.0, 300.0), (0, 0));
    }
}
