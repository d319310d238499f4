//! Fixed-timestep driver
//!
//! The host calls `frame` with real elapsed time. Time is accumulated and
//! spent in fixed `1 / frames_per_second` ticks, so simulation speed doesn't
//! depend on the host's frame rate. Queued input is applied before the
//! frame's ticks, one event at a time.

use std::collections::VecDeque;

use crate::assets::SpriteLoad;
use crate::config::Config;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::error::Result;
use crate::input::{InputEvent, InputHandler};
use crate::sim::{TickReport, World, tick};
use crate::snapshot::FrameSnapshot;

/// Owns the world and serializes ticks with input
pub struct Driver {
    world: World,
    config: Config,
    input: InputHandler,
    pending: VecDeque<InputEvent>,
    accumulator: f32,
    sim_dt: f32,
    last_report: TickReport,
}

impl Driver {
    /// Build the world from config; see `World::new` for failure policy
    pub fn new(config: Config, sprite: &SpriteLoad) -> Result<Self> {
        let world = World::new(&config, sprite)?;
        Ok(Self::with_world(world, config))
    }

    /// Drive an already-built world
    pub fn with_world(world: World, config: Config) -> Self {
        Self {
            world,
            input: InputHandler::new(&config),
            sim_dt: config.sim_dt(),
            config,
            pending: VecDeque::new(),
            accumulator: 0.0,
            last_report: TickReport::default(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Report from the most recent tick
    pub fn last_report(&self) -> TickReport {
        self.last_report
    }

    /// Queue an input event for the next frame
    pub fn push_input(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Surface resized; takes effect at the next bounce
    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.resize_arena(width, height);
    }

    /// Apply queued input, then run as many fixed ticks as `real_dt` pays
    /// for. Returns the number of ticks run.
    pub fn frame(&mut self, real_dt: f32) -> u32 {
        while let Some(event) = self.pending.pop_front() {
            self.input.handle(&mut self.world, event);
        }

        // Negative or NaN elapsed time counts as none
        let dt = if real_dt > 0.0 { real_dt.min(MAX_FRAME_DT) } else { 0.0 };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.sim_dt && substeps < MAX_SUBSTEPS {
            self.last_report = tick(&mut self.world, self.sim_dt);
            self.accumulator -= self.sim_dt;
            substeps += 1;
        }

        if self.accumulator >= self.sim_dt {
            log::debug!(
                "Dropping {:.4}s of simulation after {} substeps",
                self.accumulator,
                substeps
            );
            self.accumulator %= self.sim_dt;
        }

        substeps
    }

    /// Read-only view for the render layer
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.world, &self.config)
    }
}
