use log::info;
use rand::{SeedableRng, rngs::StdRng};

use crate::application::SimConfig;
use crate::domain::{CellRegistry, Prefill, Preset, Rgb};

/// What a pointer stroke does to the plane
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Color(Rgb),
    Erase,
}

/// GameState orchestrates the simulation.
/// This is the application layer that schedules generations around user edits.
pub struct GameState {
    pub registry: CellRegistry,
    rng: StdRng,
    /// Selected paint tool (None = pointer pans)
    pub tool: Option<Tool>,
    pub is_running: bool,
    /// A paint stroke is in progress; generations wait until it ends
    pub is_drawing: bool,
    pub show_stats: bool,
    pub update_timer: f32,
    pub min_update_interval: f32,
    pub last_evolution_time_ms: f32, // Evolution performance metric
    pub last_render_time_ms: f32,    // Render performance metric
}

impl GameState {
    /// Running game state with an empty plane
    pub fn new(config: &SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            registry: CellRegistry::new(),
            rng,
            tool: None,
            is_running: true,
            is_drawing: false,
            show_stats: false,
            update_timer: 0.0,
            min_update_interval: config.min_update_interval,
            last_evolution_time_ms: 0.0,
            last_render_time_ms: 0.0,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(self) -> Self {
        if self.is_running { self.pause() } else { self.play() }
    }

    pub fn play(mut self) -> Self {
        info!("play at generation {}", self.registry.generation());
        self.tool = None;
        self.is_running = true;
        self
    }

    pub fn pause(mut self) -> Self {
        info!("pause at generation {}", self.registry.generation());
        self.tool = None;
        self.is_running = false;
        self
    }

    /// Pause, drop every cell and go back to generation 1
    pub fn clear(mut self) -> Self {
        self = self.pause();
        self.registry.reset();
        info!("plane cleared");
        self
    }

    /// Replace the plane with a randomly chosen prefill
    pub fn prefill(mut self) -> Self {
        let prefill = Prefill::random(&mut self.rng);
        self.prefill_with(prefill)
    }

    pub fn prefill_with(mut self, prefill: Prefill) -> Self {
        self.registry.reset();
        prefill.fill(&mut self.registry, &mut self.rng);
        info!("prefilled {} cells with {:?}", self.registry.len(), prefill);
        self
    }

    /// Stamp a preset centred on (x, y) on top of the current plane.
    /// Uses the selected paint color, or a random one when none is selected.
    pub fn place_preset(&mut self, preset: Preset, x: i32, y: i32) {
        let color = match self.tool {
            Some(Tool::Color(color)) => color,
            _ => Rgb::random(&mut self.rng),
        };
        preset.pattern().place_centered(&mut self.registry, x, y, color);
        info!("placed {} at ({x}, {y})", preset.name());
    }

    pub fn toggle_stats(mut self) -> Self {
        self.show_stats = !self.show_stats;
        self
    }

    /// Select a tool; selecting the current tool again deselects it
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = if self.tool == Some(tool) { None } else { Some(tool) };
    }

    /// Start a paint stroke. Only has an effect with a tool selected.
    pub fn begin_stroke(&mut self) {
        self.is_drawing = self.tool.is_some();
    }

    /// Apply the selected tool to a cell
    pub fn paint_at(&mut self, x: i32, y: i32) {
        match self.tool {
            Some(Tool::Color(color)) => self.registry.paint(x, y, color),
            Some(Tool::Erase) => {
                self.registry.remove_at(x, y);
            }
            None => {}
        }
    }

    pub fn end_stroke(&mut self) {
        self.is_drawing = false;
    }

    /// Update simulation by one frame.
    /// At most one generation per `min_update_interval`, none while painting.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running || self.is_drawing {
            return self;
        }

        self.update_timer += delta_time;

        if self.update_timer >= self.min_update_interval {
            let start = std::time::Instant::now();
            self.registry.advance_generation(&mut self.rng);
            self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
            self.update_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LiveCell;

    const RED: Rgb = Rgb::new(200, 0, 0);

    fn state() -> GameState {
        let config = SimConfig { seed: Some(17), ..SimConfig::default() };
        GameState::new(&config)
    }

    fn with_blinker(mut state: GameState) -> GameState {
        state.registry.extend([0, 1, 2].map(|x| LiveCell::new(x, 0, RED)));
        state
    }

    #[test]
    fn test_tick_respects_interval() {
        let mut state = with_blinker(state());
        state = state.tick(0.010);
        assert_eq!(state.registry.generation(), 1);
        state = state.tick(0.010);
        assert_eq!(state.registry.generation(), 2);
        // one generation per tick at most, however long the frame was
        state = state.tick(1.0);
        assert_eq!(state.registry.generation(), 3);
    }

    #[test]
    fn test_no_generation_while_paused() {
        let mut state = with_blinker(state()).pause();
        for _ in 0..10 {
            state = state.tick(0.1);
        }
        assert_eq!(state.registry.generation(), 1);
    }

    #[test]
    fn test_no_generation_while_drawing() {
        let mut state = with_blinker(state());
        state.select_tool(Tool::Color(RED));
        state.begin_stroke();
        state = state.tick(0.1);
        assert_eq!(state.registry.generation(), 1);

        state.end_stroke();
        state = state.tick(0.1);
        assert_eq!(state.registry.generation(), 2);
    }

    #[test]
    fn test_stroke_needs_a_tool() {
        let mut state = state();
        state.begin_stroke();
        assert!(!state.is_drawing);
    }

    #[test]
    fn test_select_same_tool_deselects() {
        let mut state = state();
        state.select_tool(Tool::Erase);
        assert_eq!(state.tool, Some(Tool::Erase));
        state.select_tool(Tool::Color(RED));
        assert_eq!(state.tool, Some(Tool::Color(RED)));
        state.select_tool(Tool::Color(RED));
        assert_eq!(state.tool, None);
    }

    #[test]
    fn test_paint_and_erase() {
        let mut state = state();
        state.select_tool(Tool::Color(RED));
        state.paint_at(3, 4);
        state.paint_at(3, 4);
        assert_eq!(state.registry.len(), 1);

        state.select_tool(Tool::Erase);
        state.paint_at(3, 4);
        assert!(state.registry.is_empty());
    }

    #[test]
    fn test_clear_pauses_and_resets() {
        let mut state = with_blinker(state());
        state = state.tick(1.0);
        state = state.clear();
        assert!(!state.is_running);
        assert!(state.registry.is_empty());
        assert_eq!(state.registry.generation(), 1);
    }

    #[test]
    fn test_play_drops_tool() {
        let mut state = state().pause();
        state.select_tool(Tool::Erase);
        state = state.toggle_running();
        assert!(state.is_running);
        assert_eq!(state.tool, None);
    }

    #[test]
    fn test_prefill_replaces_plane() {
        let state = with_blinker(state()).tick(1.0).prefill_with(Prefill::Squares);
        assert_eq!(state.registry.generation(), 1);
        assert!(state.registry.len() > 3);
    }

    #[test]
    fn test_place_preset_keeps_plane_and_generation() {
        let mut state = with_blinker(state()).tick(1.0);
        state.select_tool(Tool::Color(RED));
        state.place_preset(Preset::Block, 100, 100);

        assert_eq!(state.registry.generation(), 2);
        assert_eq!(state.registry.len(), 7);
        assert_eq!(state.registry.cell_at(100, 100).map(|c| c.color), Some(RED));
    }

    #[test]
    fn test_place_preset_without_color_uses_one_color() {
        let mut state = state();
        state.place_preset(Preset::Glider, 0, 0);
        let cells = state.registry.cells();
        assert_eq!(cells.len(), 5);
        assert!(cells.iter().all(|c| c.color == cells[0].color));
    }

    #[test]
    fn test_seeded_runs_match() {
        let run = || {
            let mut state = state().prefill();
            for _ in 0..30 {
                state = state.tick(1.0);
            }
            state.registry.cells().to_vec()
        };
        assert_eq!(run(), run());
    }
}
