use std::sync::OnceLock;

use macroquad::prelude::*;
use log::info;
use colored_life::{
    Camera, GameState, SimConfig,
    ui::{self, SeedChoice, grid_area_height, grid_area_width},
    rendering, input,
};

static CONFIG: OnceLock<SimConfig> = OnceLock::new();

/// Read once, shared by the window setup and the frame loop
fn config() -> &'static SimConfig {
    CONFIG.get_or_init(|| {
        env_logger::init();
        SimConfig::from_env_or_default()
    })
}

fn window_conf() -> Conf {
    let config = config();
    Conf {
        window_title: config.window_title.clone(),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config();
    info!("starting with seed {:?}", config.seed);

    let mut state = GameState::new(config).prefill();
    let mut camera = Camera::new(grid_area_width(), grid_area_height()).with_zoom(config.zoom_level);
    let mut pointer = input::Pointer::default();
    let mut seed_menu = ui::create_seed_dropdown();

    loop {
        let mouse_pos = mouse_position();

        // Follow window resizes, keeping the centre cell in place
        let viewport = (grid_area_width(), grid_area_height());
        if viewport != camera.viewport() {
            camera.resize(viewport.0, viewport.1);
        }
        seed_menu.set_position(ui::panel_x(), ui::SEED_MENU_Y);

        // Toolbar and dropdown take the click before the plane does
        let toolbar = ui::create_toolbar(&state, &config.palette);
        let over_menu = seed_menu.contains(mouse_pos);
        match seed_menu.update(mouse_pos) {
            Some(SeedChoice::Prefill(prefill)) => state = state.prefill_with(prefill),
            Some(SeedChoice::Preset(preset)) => {
                let (x, y) = camera.center_cell();
                state.place_preset(preset, x, y);
            }
            None => {}
        }
        if !over_menu {
            state = input::process_toolbar_clicks(state, &toolbar, mouse_pos);
        }
        input::handle_pinch(&mut state, &mut camera, &mut pointer);
        input::handle_pointer(&mut state, &mut camera, &mut pointer, mouse_pos);
        input::handle_zoom(&mut camera, mouse_pos);
        state = input::process_keyboard_input(state, &mut camera);

        state = state.tick(get_frame_time());

        let render_start = std::time::Instant::now();
        clear_background(WHITE);
        rendering::draw_cells(state.registry.cells(), &camera);
        rendering::draw_pointer_mark(&state, &camera, mouse_pos);
        if state.show_stats {
            rendering::draw_stats(&state);
        }
        let toolbar = ui::create_toolbar(&state, &config.palette);
        rendering::draw_controls(&state, &toolbar, &seed_menu, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
