// app.rs - Glue between the simulation controller, the tick driver and the UI

use std::time::Duration;

use egui::Color32;
use life_core::config::SimulationConfig;
use life_core::{LifeConfig, PATTERNS, SimulationController};
use tokio::runtime::Runtime;

use crate::driver::{TickDriver, Waker};

pub struct LifeApp {
    pub(crate) controller: SimulationController,
    // Declared before the runtime so the timer task is aborted first.
    driver: TickDriver,
    // Only held so the timer task's runtime lives as long as the app.
    _runtime: Runtime,

    pub(crate) config: LifeConfig,
    tick_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub line_color: Color32,
    pub selected_pattern: usize,
}

/// Slider bounds in generations per second, matching the accepted tick range.
pub const MIN_SPEED: f32 = 1000.0 / SimulationConfig::MAX_TICK_MS as f32;
pub const MAX_SPEED: f32 = 1000.0 / SimulationConfig::MIN_TICK_MS as f32;

fn color([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

impl LifeApp {
    pub fn new(
        controller: SimulationController,
        config: LifeConfig,
        runtime: Runtime,
        waker: Waker,
    ) -> Self {
        let driver = TickDriver::new(runtime.handle().clone(), waker);
        Self {
            controller,
            driver,
            _runtime: runtime,
            tick_interval: config.simulation.tick_interval(),
            live_color: color(config.display.live_color),
            dead_color: color(config.display.dead_color),
            line_color: color(config.display.grid_line_color),
            selected_pattern: 0,
            config,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Generations per second.
    pub fn speed(&self) -> f32 {
        1000.0 / self.tick_interval.as_millis() as f32
    }

    pub fn set_speed(&mut self, gen_per_sec: f32) {
        let gen_per_sec = gen_per_sec.clamp(MIN_SPEED, MAX_SPEED);
        self.set_tick_interval(Duration::from_millis((1000.0 / gen_per_sec).round() as u64));
    }

    /// Apply every tick the timer delivered since the last frame.
    pub fn pump_ticks(&mut self) -> usize {
        let ticks = self.driver.poll();
        for _ in 0..ticks {
            self.controller.tick();
        }
        ticks
    }

    /// Start/Pause button.
    pub fn toggle_running(&mut self) {
        if self.controller.toggle_running() {
            self.driver.start(self.tick_interval);
        } else {
            self.driver.stop();
        }
    }

    fn pause(&mut self) {
        self.controller.pause();
        self.driver.stop();
    }

    pub fn reset(&mut self) {
        self.driver.stop();
        self.controller.reset();
    }

    pub fn click_cell(&mut self, row: usize, col: usize) {
        self.controller.toggle_cell(row, col);
    }

    /// Pauses, then fills the grid with a random soup.
    pub fn randomize(&mut self) {
        self.pause();
        let seed = self
            .config
            .simulation
            .random_seed
            .unwrap_or_else(rand::random::<u64>);
        self.controller
            .randomize(self.config.simulation.random_density, seed);
    }

    /// Pauses, then loads the pattern picked in the dropdown.
    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            self.pause();
            self.controller.load_pattern(pattern);
        }
    }

    /// Change speed; a running timer is restarted with the new period.
    pub fn set_tick_interval(&mut self, interval: Duration) {
        let interval = interval.clamp(
            Duration::from_millis(SimulationConfig::MIN_TICK_MS),
            Duration::from_millis(SimulationConfig::MAX_TICK_MS),
        );
        if interval == self.tick_interval {
            return;
        }
        self.tick_interval = interval;
        if self.driver.is_active() {
            self.driver.start(interval);
        }
    }
}
