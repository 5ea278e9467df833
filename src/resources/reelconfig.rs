//! Reel configuration.
//!
//! Geometry, timing and curvature parameters of one reel. A [`ReelConfig`] is
//! validated once, when the reel is spawned, and then copied into the
//! [`Reel`](crate::components::reel::Reel) component where it never changes.
//!
//! # Configuration File Format
//!
//! ```ini
//! [reel]
//! element_width = 130
//! element_height = 150
//! element_count = 3
//! element_spacing = 0
//! arrow_slot_index = 1
//! spin_duration = 2.0
//! winning_index = 3
//! back_out_effect = 0.2
//! max_angle_percent = 150
//! vertical_reduction = 0.5
//! edge_narrowing = 0
//! skew_factor = 0
//! cylinder_curvature = 1
//! curvature = false
//! rotation_speed = 1
//! acceleration = 0.3
//! spin_direction = 1
//! mask_width = 400
//! mask_height = 150
//! ```

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use std::path::Path;

use configparser::ini::Ini;
use log::info;

use crate::error::ReelError;

const DEFAULT_ELEMENT_WIDTH: f32 = 150.0;
const DEFAULT_ELEMENT_HEIGHT: f32 = 150.0;
const DEFAULT_ELEMENT_COUNT: usize = 5;
const DEFAULT_ARROW_SLOT_INDEX: usize = 2;
const DEFAULT_SPIN_DURATION: f32 = 5.0;
const DEFAULT_WINNING_INDEX: usize = 3;
const DEFAULT_BACK_OUT_EFFECT: f32 = 0.5;
const DEFAULT_MAX_ANGLE_PERCENT: f32 = 100.0;
const DEFAULT_VERTICAL_REDUCTION: f32 = 0.1;
const DEFAULT_CYLINDER_CURVATURE: f32 = 1.0;

/// Ring length is this many times the number of elements.
pub const SEQUENCE_MULTIPLIER: usize = 10;

const SECTION: &str = "reel";

/// Direction in which the strip scrolls during a spin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpinDirection {
    /// Position increases.
    Forward,
    /// Position decreases.
    Reverse,
}

impl SpinDirection {
    /// `+1.0` or `-1.0`.
    pub fn sign(self) -> f64 {
        match self {
            SpinDirection::Forward => 1.0,
            SpinDirection::Reverse => -1.0,
        }
    }

    fn from_sign(value: i64) -> Result<Self, ReelError> {
        match value {
            1 => Ok(SpinDirection::Forward),
            -1 => Ok(SpinDirection::Reverse),
            other => Err(ReelError::InvalidConfig(format!(
                "spin_direction must be 1 or -1, got {}",
                other
            ))),
        }
    }
}

/// Parameters of a single reel.
#[derive(Debug, Clone, PartialEq)]
pub struct ReelConfig {
    /// Width of one symbol box in pixels.
    pub element_width: f32,
    /// Height of one symbol box in pixels.
    pub element_height: f32,
    /// Number of symbols across the visible face.
    pub element_count: usize,
    /// Gap between symbol boxes. Negative values overlap symbols.
    pub element_spacing: f32,
    /// Visible slot that sits under the arrow marker.
    pub arrow_slot_index: usize,
    /// Base spin duration in seconds.
    pub spin_duration: f32,
    /// Catalog index of the symbol every spin lands on.
    pub winning_index: usize,
    /// Overshoot amount of the back-out easing.
    pub back_out_effect: f32,
    /// Maximum projection angle as a percentage of an eighth turn.
    pub max_angle_percent: f32,
    /// How much symbols shrink vertically towards the edges (0..=1).
    pub vertical_reduction: f32,
    /// How much horizontal placement is pulled in towards the edges (0..=1).
    pub edge_narrowing: f32,
    /// Horizontal skew per radian of projection angle. Zero disables skew.
    pub skew_factor: f32,
    /// Exponent applied to `|cos(angle)|` for the horizontal scale.
    pub cylinder_curvature: f32,
    /// Cylinder mode: the maximum angle is fixed at a quarter turn.
    pub curvature: bool,
    /// Spin duration divisor.
    pub rotation_speed: f32,
    /// Spin duration divisor.
    pub acceleration: f32,
    pub spin_direction: SpinDirection,
    /// Clip mask width. `None` covers the whole strip.
    pub mask_width: Option<f32>,
    /// Clip mask height. `None` uses the element height.
    pub mask_height: Option<f32>,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReelConfig {
    pub fn new() -> Self {
        Self {
            element_width: DEFAULT_ELEMENT_WIDTH,
            element_height: DEFAULT_ELEMENT_HEIGHT,
            element_count: DEFAULT_ELEMENT_COUNT,
            element_spacing: 0.0,
            arrow_slot_index: DEFAULT_ARROW_SLOT_INDEX,
            spin_duration: DEFAULT_SPIN_DURATION,
            winning_index: DEFAULT_WINNING_INDEX,
            back_out_effect: DEFAULT_BACK_OUT_EFFECT,
            max_angle_percent: DEFAULT_MAX_ANGLE_PERCENT,
            vertical_reduction: DEFAULT_VERTICAL_REDUCTION,
            edge_narrowing: 0.0,
            skew_factor: 0.0,
            cylinder_curvature: DEFAULT_CYLINDER_CURVATURE,
            curvature: false,
            rotation_speed: 1.0,
            acceleration: 1.0,
            spin_direction: SpinDirection::Forward,
            mask_width: None,
            mask_height: None,
        }
    }

    /// Distance between the centers of two neighbouring symbols.
    pub fn element_distance(&self) -> f32 {
        self.element_width + self.element_spacing
    }

    /// Length of the wheel sequence backing this reel.
    pub fn ring_len(&self) -> usize {
        SEQUENCE_MULTIPLIER * self.element_count
    }

    /// Horizontal center of the strip, relative to the reel root.
    pub fn center_x(&self) -> f32 {
        self.element_count as f32 * self.element_distance() / 2.0
    }

    /// Angle at which a symbol has rotated off the visible face.
    pub fn max_angle(&self) -> f32 {
        if self.curvature {
            FRAC_PI_2
        } else {
            (self.max_angle_percent / 100.0) * FRAC_PI_4
        }
    }

    /// Radius of the implied cylinder.
    pub fn radius(&self) -> f32 {
        self.center_x() / self.max_angle().sin()
    }

    /// Clip mask size, falling back to the strip size.
    pub fn mask_size(&self) -> (f32, f32) {
        (
            self.mask_width
                .unwrap_or(self.element_count as f32 * self.element_distance()),
            self.mask_height.unwrap_or(self.element_height),
        )
    }

    /// Clip mask as `(x, y, width, height)` relative to the reel root,
    /// centered on the strip.
    pub fn mask_rect(&self) -> (f32, f32, f32, f32) {
        let (w, h) = self.mask_size();
        (
            self.center_x() - w / 2.0,
            self.element_height / 2.0 - h / 2.0,
            w,
            h,
        )
    }

    /// Duration of the position tween for one spin, in seconds.
    pub fn tween_duration(&self) -> f32 {
        self.spin_duration / self.rotation_speed / self.acceleration
    }

    /// Reject parameters that would degenerate the layout or the timing.
    pub fn validate(&self) -> Result<(), ReelError> {
        let fail = |msg: String| Err(ReelError::InvalidConfig(msg));

        let floats = [
            ("element_width", self.element_width),
            ("element_height", self.element_height),
            ("element_spacing", self.element_spacing),
            ("spin_duration", self.spin_duration),
            ("back_out_effect", self.back_out_effect),
            ("max_angle_percent", self.max_angle_percent),
            ("vertical_reduction", self.vertical_reduction),
            ("edge_narrowing", self.edge_narrowing),
            ("skew_factor", self.skew_factor),
            ("cylinder_curvature", self.cylinder_curvature),
            ("rotation_speed", self.rotation_speed),
            ("acceleration", self.acceleration),
        ];
        if let Some((key, value)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return fail(format!("{} must be a finite number, got {}", key, value));
        }

        if self.element_count == 0 {
            return fail("element_count must be at least 1".into());
        }
        if self.element_width <= 0.0 || self.element_height <= 0.0 {
            return fail(format!(
                "element size must be positive, got {}x{}",
                self.element_width, self.element_height
            ));
        }
        if self.element_distance() <= 0.0 {
            return fail(format!(
                "element_width + element_spacing must be positive, got {}",
                self.element_distance()
            ));
        }
        if self.arrow_slot_index >= self.element_count {
            return fail(format!(
                "arrow_slot_index {} must be below element_count {}",
                self.arrow_slot_index, self.element_count
            ));
        }
        if self.spin_duration <= 0.0 || self.rotation_speed <= 0.0 || self.acceleration <= 0.0 {
            return fail(
                "spin_duration, rotation_speed and acceleration must be positive".into(),
            );
        }
        if !(self.max_angle_percent > 0.0 && self.max_angle_percent <= 200.0) {
            return fail(format!(
                "max_angle_percent must be in (0, 200], got {}",
                self.max_angle_percent
            ));
        }
        if self.cylinder_curvature < 0.0 {
            return fail("cylinder_curvature must not be negative".into());
        }
        if !(0.0..=1.0).contains(&self.vertical_reduction) {
            return fail("vertical_reduction must be in [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.edge_narrowing) {
            return fail("edge_narrowing must be in [0, 1]".into());
        }
        for (key, side) in [("mask_width", self.mask_width), ("mask_height", self.mask_height)] {
            if let Some(v) = side.filter(|v| !(v.is_finite() && *v > 0.0)) {
                return fail(format!("{} must be positive, got {}", key, v));
            }
        }
        Ok(())
    }

    /// Load the `[reel]` section from an INI file.
    ///
    /// Missing values retain their current values.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), ReelError> {
        let mut ini = Ini::new();
        ini.load(path.as_ref())
            .map_err(|e| ReelError::ConfigFile(format!("failed to load reel config: {}", e)))?;
        self.apply_ini(&ini)?;
        info!(
            "Loaded reel config: {} elements of {}x{}, arrow slot {}, spin {}s",
            self.element_count,
            self.element_width,
            self.element_height,
            self.arrow_slot_index,
            self.spin_duration
        );
        Ok(())
    }

    /// Parse the `[reel]` section from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ReelError> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|e| ReelError::ConfigFile(format!("failed to parse reel config: {}", e)))?;
        self.apply_ini(&ini)
    }

    /// Apply the `[reel]` keys of `ini`. Nothing changes unless every
    /// present key parses.
    pub(crate) fn apply_ini(&mut self, ini: &Ini) -> Result<(), ReelError> {
        let mut next = self.clone();
        next.read_keys(ini)?;
        *self = next;
        Ok(())
    }

    fn read_keys(&mut self, ini: &Ini) -> Result<(), ReelError> {
        let float = |key: &str| -> Result<Option<f32>, ReelError> {
            ini.getfloat(SECTION, key)
                .map(|v| v.map(|v| v as f32))
                .map_err(|e| ReelError::ConfigFile(format!("[reel] {}: {}", key, e)))
        };
        let uint = |key: &str| -> Result<Option<usize>, ReelError> {
            ini.getuint(SECTION, key)
                .map(|v| v.map(|v| v as usize))
                .map_err(|e| ReelError::ConfigFile(format!("[reel] {}: {}", key, e)))
        };

        if let Some(v) = float("element_width")? {
            self.element_width = v;
        }
        if let Some(v) = float("element_height")? {
            self.element_height = v;
        }
        if let Some(v) = uint("element_count")? {
            self.element_count = v;
        }
        if let Some(v) = float("element_spacing")? {
            self.element_spacing = v;
        }
        if let Some(v) = uint("arrow_slot_index")? {
            self.arrow_slot_index = v;
        }
        if let Some(v) = float("spin_duration")? {
            self.spin_duration = v;
        }
        if let Some(v) = uint("winning_index")? {
            self.winning_index = v;
        }
        if let Some(v) = float("back_out_effect")? {
            self.back_out_effect = v;
        }
        if let Some(v) = float("max_angle_percent")? {
            self.max_angle_percent = v;
        }
        if let Some(v) = float("vertical_reduction")? {
            self.vertical_reduction = v;
        }
        if let Some(v) = float("edge_narrowing")? {
            self.edge_narrowing = v;
        }
        if let Some(v) = float("skew_factor")? {
            self.skew_factor = v;
        }
        if let Some(v) = float("cylinder_curvature")? {
            self.cylinder_curvature = v;
        }
        if let Some(v) = ini
            .getbool(SECTION, "curvature")
            .map_err(|e| ReelError::ConfigFile(format!("[reel] curvature: {}", e)))?
        {
            self.curvature = v;
        }
        if let Some(v) = float("rotation_speed")? {
            self.rotation_speed = v;
        }
        if let Some(v) = float("acceleration")? {
            self.acceleration = v;
        }
        if let Some(v) = ini
            .getint(SECTION, "spin_direction")
            .map_err(|e| ReelError::ConfigFile(format!("[reel] spin_direction: {}", e)))?
        {
            self.spin_direction = SpinDirection::from_sign(v)?;
        }
        if let Some(v) = float("mask_width")? {
            self.mask_width = Some(v);
        }
        if let Some(v) = float("mask_height")? {
            self.mask_height = Some(v);
        }
        Ok(())
    }

    /// Write every value into the `[reel]` section of `ini`.
    pub(crate) fn store_ini(&self, ini: &mut Ini) {
        let mut set = |key: &str, value: String| {
            ini.set(SECTION, key, Some(value));
        };
        set("element_width", self.element_width.to_string());
        set("element_height", self.element_height.to_string());
        set("element_count", self.element_count.to_string());
        set("element_spacing", self.element_spacing.to_string());
        set("arrow_slot_index", self.arrow_slot_index.to_string());
        set("spin_duration", self.spin_duration.to_string());
        set("winning_index", self.winning_index.to_string());
        set("back_out_effect", self.back_out_effect.to_string());
        set("max_angle_percent", self.max_angle_percent.to_string());
        set("vertical_reduction", self.vertical_reduction.to_string());
        set("edge_narrowing", self.edge_narrowing.to_string());
        set("skew_factor", self.skew_factor.to_string());
        set("cylinder_curvature", self.cylinder_curvature.to_string());
        set("curvature", self.curvature.to_string());
        set("rotation_speed", self.rotation_speed.to_string());
        set("acceleration", self.acceleration.to_string());
        set("spin_direction", (self.spin_direction.sign() as i64).to_string());
        if let Some(w) = self.mask_width {
            set("mask_width", w.to_string());
        }
        if let Some(h) = self.mask_height {
            set("mask_height", h.to_string());
        }
    }
}
