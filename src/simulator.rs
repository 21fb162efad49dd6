// Fixed size particle pool, advanced and drawn once per frame. Expired particles
// are regenerated in their slot. update applies whatever elapsed time it is given,
// so a long stall on the host moves every particle by that much in one step.

use std::f32::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Color;
use crate::config::{ColorMode, SimulatorConfig};
use crate::particle::Particle;
use crate::surface::Surface;
use crate::vector2::Vector2;

// Initialize / update / draw contract between an animation and its host
pub trait Visualizer {
    fn initialize(&mut self, width: u32, height: u32);

    // elapsed: non-negative seconds since the previous call
    fn update(&mut self, elapsed: f32);

    fn draw(&self, surface: &mut dyn Surface);
}

pub struct ParticleSimulator<R: Rng = StdRng> {
    config: SimulatorConfig,
    width: u32,
    height: u32,
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleSimulator<StdRng> {
    pub fn new(config: SimulatorConfig) -> Self {
        ParticleSimulator::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: SimulatorConfig, seed: u64) -> Self {
        ParticleSimulator::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleSimulator<R> {
    // The pool stays empty until initialize is called
    pub fn with_rng(config: SimulatorConfig, rng: R) -> Self {
        ParticleSimulator {
            config,
            width: 0,
            height: 0,
            particles: Vec::new(),
            rng,
        }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn display_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    fn generate(&mut self) -> Particle {
        let config = self.config;
        let position = Vector2::new(
            self.rng.gen::<f32>() * self.width as f32,
            self.rng.gen::<f32>() * self.height as f32,
        );
        let direction = Vector2::from_angle(2.0 * PI * self.rng.gen::<f32>());
        let speed = config.speed + self.rng.gen::<f32>() * config.speed;
        let size = config.size + self.rng.gen::<f32>() * config.size;
        let color = match config.color_mode {
            ColorMode::Shade => Color::gray(self.random_brightness()),
            ColorMode::Full => Color::rgb(
                self.random_brightness(),
                self.random_brightness(),
                self.random_brightness(),
            ),
        };
        let life_span = config.min_life + self.rng.gen::<f32>() * config.life;

        Particle::new(position, direction, speed, size, color, life_span)
    }

    fn random_brightness(&mut self) -> u8 {
        let low = u32::from(self.config.min_brightness);
        let brightness: u32 = self.rng.gen_range(low, 256);
        brightness as u8
    }

    fn regenerate(&mut self, idx: usize) {
        let particle = self.generate();
        self.particles[idx] = particle;
    }
}

impl<R: Rng> Visualizer for ParticleSimulator<R> {
    // Calling it again rebuilds the pool for the new size
    fn initialize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        let len = self.config.pool_len(width, height);
        self.particles.clear();
        self.particles.reserve_exact(len);
        for _ in 0..len {
            let particle = self.generate();
            self.particles.push(particle);
        }
    }

    // A particle that is expired when the tick starts, or that runs out during
    // it, is regenerated before the tick returns.
    fn update(&mut self, elapsed: f32) {
        let restraint = self.config.axis_restraint;
        let acceleration = self.config.acceleration;
        for idx in 0..self.particles.len() {
            let particle = &mut self.particles[idx];
            if particle.is_alive() {
                particle.advance(restraint, acceleration, elapsed);
                if particle.is_alive() {
                    continue;
                }
            }
            self.regenerate(idx);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        for p in self.particles.iter().filter(|p| p.is_alive()) {
            surface.fill_rect(p.position.x, p.position.y, p.size, p.size, p.color);
        }
    }
}
