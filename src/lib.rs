mod utils;

pub mod color;
pub mod config;
pub mod frame_stats;
pub mod particle;
pub mod simulator;
pub mod surface;
pub mod vector2;

use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::{console, CanvasRenderingContext2d, ImageData};

pub use crate::color::Color;
pub use crate::config::{ColorMode, SimulatorConfig};
pub use crate::frame_stats::FrameStats;
pub use crate::particle::Particle;
pub use crate::simulator::{ParticleSimulator, Visualizer};
pub use crate::surface::{PixelBuffer, Surface};
pub use crate::vector2::Vector2;

// Use `wee_alloc` as the global allocator when the feature is turned on.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

// Browser host for the sparkle animation. The page owns the clock: it calls
// update with the seconds since the last frame, then render, on every tick.
#[wasm_bindgen]
pub struct RustCanvas {
    pixels: PixelBuffer,
    simulator: ParticleSimulator,
    stats: FrameStats,
}

#[wasm_bindgen]
impl RustCanvas {
    pub fn new(width: u32, height: u32) -> RustCanvas {
        let seed = js_sys::Date::now() as u64;
        let mut simulator = ParticleSimulator::with_seed(SimulatorConfig::default(), seed);
        simulator.initialize(width, height);
        console::log_1(
            &format!(
                "initialized {} particles for {}x{}",
                simulator.len(),
                width,
                height
            )
            .into(),
        );

        RustCanvas {
            pixels: PixelBuffer::new(width, height),
            simulator,
            stats: FrameStats::new(),
        }
    }

    pub fn update(&mut self, delta: f32) {
        let _timer = Timer::new("RustCanvas::update()");
        if let Some(fps) = self.stats.tick(delta) {
            console::log_1(&format!("FPS: {}", fps).into());
        }
        self.simulator.update(delta);
    }

    pub fn render(&mut self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let _timer = Timer::new("RustCanvas::render");
        {
            let _timer = Timer::new("draw background");
            self.pixels.clear(Color::BLACK);
        }
        {
            let _timer = Timer::new("draw particles");
            self.simulator.draw(&mut self.pixels);
        }

        let _timer = Timer::new("ctx.put_image_data");
        let pixel_image_data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(self.pixels.as_bytes()),
            self.pixels.width(),
            self.pixels.height(),
        )?;

        ctx.put_image_data(&pixel_image_data, 0.0, 0.0)
    }

    pub fn toggle_info(&mut self) -> bool {
        self.stats.toggle()
    }

    pub fn fps(&self) -> Option<u32> {
        self.stats.fps()
    }

    pub fn particle_count(&self) -> usize {
        self.simulator.len()
    }
}
