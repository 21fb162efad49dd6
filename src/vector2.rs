// Two component f32 vector used for particle positions and directions.
// Value type: operators and the `*ed` forms return copies, the plain verbs
// (normalize, scale, translate, rotate) mutate in place.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

extern crate nalgebra_glm as glm;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    pub const UNIT_X: Vector2 = Vector2 { x: 1.0, y: 0.0 };
    pub const UNIT_Y: Vector2 = Vector2 { x: 0.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }

    /// Unit vector pointing at `angle` radians.
    pub fn from_angle(angle: f32) -> Vector2 {
        Vector2::new(angle.cos(), angle.sin())
    }

    pub fn length(self) -> f32 {
        vecmath::vec2_len(self.into())
    }

    pub fn length_sq(self) -> f32 {
        vecmath::vec2_square_len(self.into())
    }

    /// True only when both components are exactly zero.
    pub fn is_empty(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn dot(self, other: Vector2) -> f32 {
        vecmath::vec2_dot(self.into(), other.into())
    }

    /// Returns a copy scaled to unit length.
    ///
    /// A zero vector has no direction: both components of the result are NaN.
    /// Callers are expected to check `is_empty` first when that can happen.
    pub fn normalized(self) -> Vector2 {
        vecmath::vec2_normalized(self.into()).into()
    }

    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    pub fn scaled(self, factor: f32) -> Vector2 {
        vecmath::vec2_scale(self.into(), factor).into()
    }

    pub fn scale(&mut self, factor: f32) {
        *self = self.scaled(factor);
    }

    pub fn scale_xy(&mut self, x: f32, y: f32) {
        self.x *= x;
        self.y *= y;
    }

    pub fn translate(&mut self, offset: Vector2) {
        *self += offset;
    }

    pub fn translate_xy(&mut self, x: f32, y: f32) {
        self.x += x;
        self.y += y;
    }

    /// Counter-clockwise rotation by `angle` radians:
    /// x' = x cos a - y sin a, y' = x sin a + y cos a
    pub fn rotated(self, angle: f32) -> Vector2 {
        let v = glm::rotate_vec2(&glm::vec2(self.x, self.y), angle);
        Vector2::new(v.x, v.y)
    }

    pub fn rotate(&mut self, angle: f32) {
        *self = self.rotated(angle);
    }

    pub fn distance(a: Vector2, b: Vector2) -> f32 {
        (a - b).length()
    }

    pub fn distance_sq(a: Vector2, b: Vector2) -> f32 {
        (a - b).length_sq()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Vector2 {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for (f32, f32) {
    fn from(v: Vector2) -> (f32, f32) {
        (v.x, v.y)
    }
}

impl From<vecmath::Vector2<f32>> for Vector2 {
    fn from(v: vecmath::Vector2<f32>) -> Vector2 {
        Vector2::new(v[0], v[1])
    }
}

impl From<Vector2> for vecmath::Vector2<f32> {
    fn from(v: Vector2) -> vecmath::Vector2<f32> {
        [v.x, v.y]
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, other: Vector2) -> Vector2 {
        vecmath::vec2_add(self.into(), other.into()).into()
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Vector2) {
        *self = *self + other;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, other: Vector2) -> Vector2 {
        vecmath::vec2_sub(self.into(), other.into()).into()
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

// Component-wise.
impl Mul for Vector2 {
    type Output = Vector2;
    fn mul(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x * other.x, self.y * other.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;
    fn mul(self, factor: f32) -> Vector2 {
        self.scaled(factor)
    }
}

// Component-wise.
impl Div for Vector2 {
    type Output = Vector2;
    fn div(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x / other.x, self.y / other.y)
    }
}

impl Div<f32> for Vector2 {
    type Output = Vector2;
    fn div(self, divisor: f32) -> Vector2 {
        Vector2::new(self.x / divisor, self.y / divisor)
    }
}
