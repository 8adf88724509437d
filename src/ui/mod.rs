mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use macroquad::prelude::{Color, screen_height, screen_width};

use crate::application::{GameState, Tool};
use crate::domain::{Prefill, Preset, Rgb};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const SWATCH_SIZE: f32 = 50.0;
pub const SWATCH_GAP: f32 = 10.0;
pub const SEED_MENU_Y: f32 = 310.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the plane area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the plane area
pub fn grid_area_height() -> f32 {
    screen_height()
}

pub fn rgb_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

/// What a toolbar button does when clicked
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToolbarAction {
    Select(Tool),
    TogglePlay,
    Trash,
}

/// Palette swatches three to a row, then eraser, play/pause and trash
pub fn create_toolbar(state: &GameState, palette: &[Rgb]) -> Vec<(Button, ToolbarAction)> {
    let px = panel_x();
    let selected = |tool: Tool| state.tool == Some(tool);

    let mut toolbar: Vec<_> = palette
        .iter()
        .enumerate()
        .map(|(i, &rgb)| {
            let col = (i % 3) as f32;
            let row = (i / 3) as f32;
            let button = Button::swatch(
                px + col * (SWATCH_SIZE + SWATCH_GAP),
                20.0 + row * (SWATCH_SIZE + SWATCH_GAP),
                SWATCH_SIZE,
                rgb_color(rgb),
            );
            let tool = Tool::Color(rgb);
            (button.with_selected(selected(tool)), ToolbarAction::Select(tool))
        })
        .collect();

    let rows = palette.len().div_ceil(3) as f32;
    let mut y = 20.0 + rows * (SWATCH_SIZE + SWATCH_GAP);

    let play_label = if state.is_running { "Pause" } else { "Play" };
    let labelled = [
        ("Eraser", ToolbarAction::Select(Tool::Erase), selected(Tool::Erase)),
        (play_label, ToolbarAction::TogglePlay, false),
        ("Clear", ToolbarAction::Trash, false),
    ];
    for (text, action, is_selected) in labelled {
        let button = Button::new(px, y, PANEL_WIDTH - SWATCH_GAP, BUTTON_HEIGHT, text);
        toolbar.push((button.with_selected(is_selected), action));
        y += BUTTON_HEIGHT + SWATCH_GAP;
    }

    toolbar
}

/// Entry of the seed menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    /// Replace the plane with a generator's output
    Prefill(Prefill),
    /// Stamp a pattern at the centre of the view
    Preset(Preset),
}

pub fn seed_choices() -> Vec<(String, SeedChoice)> {
    let prefills = Prefill::all()
        .into_iter()
        .map(|prefill| (prefill.name().to_owned(), SeedChoice::Prefill(prefill)));
    let presets = Preset::all()
        .into_iter()
        .map(|preset| (format!("+ {}", preset.name()), SeedChoice::Preset(preset)));
    prefills.chain(presets).collect()
}

/// Dropdown listing every prefill generator, then the presets
pub fn create_seed_dropdown() -> Dropdown<SeedChoice> {
    Dropdown::new(panel_x(), SEED_MENU_Y, PANEL_WIDTH - SWATCH_GAP, "Seed", seed_choices())
}
