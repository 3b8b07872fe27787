//! Blob field behind the liquid surface canvas.
//!
//! Coordinates are canvas pixels, time is milliseconds. A real pointer
//! pushes blobs it passes; after a quiet period an automatic pointer takes
//! over and is faded out again as soon as the user moves.

use super::{Point, Rect};

/// Length of one reference frame. Velocities are expressed per frame.
const FRAME_MS: f64 = 16.0;
const PUSH_SCALE: f64 = 0.01;
const BASE_DAMPING: f64 = 0.985;
const DRIFT_SPEED: f64 = 0.35;

#[derive(Clone, Debug, PartialEq)]
pub struct LiquidSettings {
    pub mouse_force: f64,
    pub cursor_size: f64,
    pub is_viscous: bool,
    pub viscous: f64,
    pub is_bounce: bool,
    pub auto_demo: bool,
    pub auto_speed: f64,
    pub auto_intensity: f64,
    /// Seconds over which the automatic pointer fades out once the user moves.
    pub takeover_duration: f64,
    /// Milliseconds without pointer input before the automatic pointer starts.
    pub auto_resume_delay: f64,
    /// Seconds over which the automatic pointer fades in.
    pub auto_ramp_duration: f64,
}

impl Default for LiquidSettings {
    fn default() -> Self {
        Self {
            mouse_force: 20.0,
            cursor_size: 100.0,
            is_viscous: false,
            viscous: 30.0,
            is_bounce: false,
            auto_demo: true,
            auto_speed: 0.5,
            auto_intensity: 2.2,
            takeover_duration: 0.25,
            auto_resume_delay: 3000.0,
            auto_ramp_duration: 0.6,
        }
    }
}

impl LiquidSettings {
    /// Per-frame velocity retention.
    pub fn damping(&self) -> f64 {
        if self.is_viscous {
            (BASE_DAMPING - self.viscous * 0.002).clamp(0.5, BASE_DAMPING)
        } else {
            BASE_DAMPING
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blob {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub radius: f64,
    pub color: usize,
}

pub struct LiquidField {
    settings: LiquidSettings,
    width: f64,
    height: f64,
    blobs: Vec<Blob>,
    last_pointer: Option<Point>,
    last_auto: Option<Point>,
    idle_ms: f64,
    auto_weight: f64,
    auto_active: bool,
    clock_ms: f64,
}

impl LiquidField {
    /// Spreads `count` blobs over the canvas on a golden-angle spiral so the
    /// starting picture is the same on every load.
    pub fn new(settings: LiquidSettings, width: f64, height: f64, count: usize, palette: usize) -> Self {
        let golden = std::f64::consts::PI * (3.0 - 5f64.sqrt());
        let shortest = width.min(height);
        let blobs = (0..count)
            .map(|i| {
                let angle = i as f64 * golden;
                let spread = ((i as f64 + 0.5) / count.max(1) as f64).sqrt() * 0.45;
                Blob {
                    x: width / 2.0 + angle.cos() * spread * width,
                    y: height / 2.0 + angle.sin() * spread * height,
                    vx: 0.0,
                    vy: 0.0,
                    drift_x: (angle * 1.7).cos() * DRIFT_SPEED,
                    drift_y: (angle * 1.3).sin() * DRIFT_SPEED,
                    radius: shortest * (0.25 + 0.1 * ((i % 3) as f64)),
                    color: i % palette.max(1),
                }
            })
            .collect();
        Self::with_blobs(settings, width, height, blobs)
    }

    pub fn with_blobs(settings: LiquidSettings, width: f64, height: f64, blobs: Vec<Blob>) -> Self {
        Self {
            settings,
            width,
            height,
            blobs,
            last_pointer: None,
            last_auto: None,
            idle_ms: 0.0,
            auto_weight: 0.0,
            auto_active: false,
            clock_ms: 0.0,
        }
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_auto_active(&self) -> bool {
        self.auto_active
    }

    pub fn auto_weight(&self) -> f64 {
        self.auto_weight
    }

    /// Keeps blobs at the same relative position on a resized canvas.
    pub fn resize(&mut self, width: f64, height: f64) {
        if self.width <= 0.0 || self.height <= 0.0 {
            self.width = width;
            self.height = height;
            return;
        }
        let (sx, sy) = (width / self.width, height / self.height);
        for blob in &mut self.blobs {
            blob.x *= sx;
            blob.y *= sy;
        }
        self.width = width;
        self.height = height;
    }

    pub fn pointer_moved(&mut self, at: Point) {
        if let Some(previous) = self.last_pointer {
            let strength = self.settings.mouse_force * PUSH_SCALE;
            self.push(previous, at, strength);
        }
        self.last_pointer = Some(at);
        self.idle_ms = 0.0;
        self.auto_active = false;
    }

    pub fn pointer_left(&mut self) {
        self.last_pointer = None;
    }

    /// Feeds a viewport pointer position for a field drawn into `bounds`.
    /// Positions outside the box count as the pointer leaving.
    pub fn track(&mut self, bounds: Rect, at: Point) {
        match field_point(bounds, at, self.width, self.height) {
            Some(local) => self.pointer_moved(local),
            None => self.pointer_left(),
        }
    }

    /// Advances the field by `dt_ms`.
    pub fn step(&mut self, dt_ms: f64) {
        self.clock_ms += dt_ms;
        self.idle_ms += dt_ms;
        self.update_auto(dt_ms);

        let frames = dt_ms / FRAME_MS;
        let retain = self.settings.damping().powf(frames);
        let (width, height, bounce) = (self.width, self.height, self.settings.is_bounce);
        for blob in &mut self.blobs {
            blob.x += (blob.vx + blob.drift_x) * frames;
            blob.y += (blob.vy + blob.drift_y) * frames;
            blob.vx *= retain;
            blob.vy *= retain;
            if bounce {
                reflect(&mut blob.x, &mut blob.vx, &mut blob.drift_x, width);
                reflect(&mut blob.y, &mut blob.vy, &mut blob.drift_y, height);
            } else {
                blob.x = wrap(blob.x, width);
                blob.y = wrap(blob.y, height);
            }
        }
    }

    fn update_auto(&mut self, dt_ms: f64) {
        let settings = &self.settings;
        if settings.auto_demo && self.idle_ms >= settings.auto_resume_delay {
            if !self.auto_active {
                self.auto_active = true;
                self.last_auto = None;
            }
            self.auto_weight = ramp(self.auto_weight, dt_ms, settings.auto_ramp_duration);
        } else {
            self.auto_weight = ramp(self.auto_weight, -dt_ms, settings.takeover_duration);
        }

        if self.auto_weight <= 0.0 {
            self.last_auto = None;
            return;
        }
        let target = self.auto_pointer();
        if let Some(previous) = self.last_auto {
            let strength = self.settings.mouse_force
                * PUSH_SCALE
                * self.settings.auto_intensity
                * self.auto_weight;
            self.push(previous, target, strength);
        }
        self.last_auto = Some(target);
    }

    /// Position of the automatic pointer on a slow Lissajous path.
    pub fn auto_pointer(&self) -> Point {
        let t = self.clock_ms / 1000.0 * self.settings.auto_speed;
        Point {
            x: self.width / 2.0 + (t * 1.3).cos() * self.width * 0.35,
            y: self.height / 2.0 + (t * 0.9).sin() * self.height * 0.3,
        }
    }

    fn push(&mut self, from: Point, to: Point, strength: f64) {
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let reach = self.settings.cursor_size;
        if reach <= 0.0 {
            return;
        }
        for blob in &mut self.blobs {
            let distance = ((blob.x - to.x).powi(2) + (blob.y - to.y).powi(2)).sqrt();
            if distance < reach {
                let falloff = 1.0 - distance / reach;
                blob.vx += dx * falloff * strength;
                blob.vy += dy * falloff * strength;
            }
        }
    }
}

/// Moves `weight` toward 1 (positive `dt_ms`) or 0 (negative) so that a
/// full transition takes `seconds`.
fn ramp(weight: f64, dt_ms: f64, seconds: f64) -> f64 {
    if seconds <= 0.0 {
        return if dt_ms > 0.0 { 1.0 } else { 0.0 };
    }
    (weight + dt_ms / (seconds * 1000.0)).clamp(0.0, 1.0)
}

fn reflect(position: &mut f64, velocity: &mut f64, drift: &mut f64, limit: f64) {
    if *position < 0.0 {
        *position = -*position;
    } else if *position > limit {
        *position = 2.0 * limit - *position;
    } else {
        return;
    }
    *velocity = -*velocity;
    *drift = -*drift;
}

fn wrap(position: f64, limit: f64) -> f64 {
    if limit <= 0.0 {
        return position;
    }
    position.rem_euclid(limit)
}

/// Maps a viewport point into a `width`×`height` field drawn into `bounds`.
/// `None` when the point lies outside the box or the box has no area.
pub fn field_point(bounds: Rect, at: Point, width: f64, height: f64) -> Option<Point> {
    let (fx, fy) = bounds.fraction_of(at)?;
    if !(0.0..=1.0).contains(&fx) || !(0.0..=1.0).contains(&fy) {
        return None;
    }
    Some(Point {
        x: fx * width,
        y: fy * height,
    })
}
