// Tunable constants for the particle simulator, units are pixels and seconds

use crate::vector2::Vector2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorMode {
    // one random brightness on all three channels
    Shade,
    // independent channels, not used by the default look
    Full,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulatorConfig {
    pub speed: f32,
    // per second, no cap
    pub acceleration: f32,
    pub size: f32,
    pub life: f32,
    pub min_life: f32,
    pub min_brightness: u8,
    pub color_mode: ColorMode,
    // never applied to motion
    pub gravity: Vector2,
    // component-wise mask on direction, (0, 1) suppresses horizontal motion
    pub axis_restraint: Vector2,
    // one particle per this many pixels of the longer display side
    pub density_divisor: u32,
}

impl SimulatorConfig {
    // Never less than one
    pub fn pool_len(&self, width: u32, height: u32) -> usize {
        let divisor = self.density_divisor.max(1);
        (width.max(height) / divisor).max(1) as usize
    }
}

impl Default for SimulatorConfig {
    fn default() -> SimulatorConfig {
        SimulatorConfig {
            speed: 100.0,
            acceleration: 100.0,
            size: 3.0,
            life: 3.0,
            min_life: 0.5,
            min_brightness: 32,
            color_mode: ColorMode::Shade,
            gravity: Vector2::new(0.0, -100.0),
            axis_restraint: Vector2::new(0.0, 1.0),
            density_divisor: 10,
        }
    }
}
