use std::time::{Duration, Instant};

/// Floor for the presentation scale. Gesture zoom is multiplicative, so the
/// scale cannot cross zero on its own, but a hostile delta (zero, negative,
/// NaN) must not poison the transform either.
const MIN_SCALE: f32 = 1e-3;
/// Scales within this distance of 1.0 count as "not zoomed" for double-tap.
const SCALE_EPSILON: f32 = 1e-3;
/// Zoom level a double-tap animates toward from the resting state.
const DOUBLE_TAP_ZOOM: f32 = 2.0;
const ZOOM_ANIM_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq)]
/// Affine presentation transform applied to the displayed artwork.
pub struct ViewTransform {
    pub scale: f32,
    pub rotation_deg: f32,
    pub translation: egui::Vec2,
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation_deg: 0.0,
        translation: egui::Vec2::ZERO,
    };
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Eased multiplicative zoom running over a bounded duration.
///
/// Each tick multiplies in only the increment since the previous tick, so a
/// pinch arriving mid-flight composes with whatever the animation has produced
/// so far instead of being overwritten.
struct ZoomAnimation {
    total_factor: f32,
    started: Instant,
    /// Eased progress already multiplied into the scale, in [0, 1].
    applied: f32,
}

impl ZoomAnimation {
    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        let t = (elapsed / ZOOM_ANIM_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        ease_out_cubic(t)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Accumulates pinch/rotate/pan gesture deltas into a [`ViewTransform`] and
/// handles the double-tap reset/zoom shortcut.
///
/// All mutation happens on the UI thread in response to discrete input events;
/// the double-tap branch reads the scale inside a single `&mut self` call, so
/// no gesture delta can interleave with its snapshot-and-decide step.
pub struct TransformController {
    current: ViewTransform,
    animation: Option<ZoomAnimation>,
}

impl TransformController {
    pub fn new() -> Self {
        Self {
            current: ViewTransform::IDENTITY,
            animation: None,
        }
    }

    /// Snapshot of the current transform for rendering.
    pub fn current(&self) -> ViewTransform {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Folds one gesture frame into the transform: scale is multiplied by
    /// `zoom_factor`, rotation and translation accumulate their deltas.
    ///
    /// The gesture recognizer is expected to produce sane values; invalid ones
    /// are dropped rather than propagated (a non-positive or non-finite zoom
    /// factor counts as 1.0).
    pub fn apply_gesture(&mut self, zoom_factor: f32, pan_delta: egui::Vec2, rotation_delta_deg: f32) {
        let zoom = if zoom_factor.is_finite() && zoom_factor > 0.0 {
            zoom_factor
        } else {
            1.0
        };
        self.current.scale = (self.current.scale * zoom).max(MIN_SCALE);
        if rotation_delta_deg.is_finite() {
            self.current.rotation_deg += rotation_delta_deg;
        }
        if pan_delta.is_finite() {
            self.current.translation += pan_delta;
        }
    }

    /// Double-tap shortcut: when zoomed (or rotated away from scale 1),
    /// rotation and translation snap back immediately and the scale animates
    /// home to 1. At rest, the scale animates to [`DOUBLE_TAP_ZOOM`] and
    /// rotation/translation are left alone.
    pub fn double_tap(&mut self, now: Instant) {
        if (self.current.scale - 1.0).abs() > SCALE_EPSILON {
            self.current.rotation_deg = 0.0;
            self.current.translation = egui::Vec2::ZERO;
            self.start_zoom(1.0 / self.current.scale, now);
        } else {
            self.start_zoom(DOUBLE_TAP_ZOOM, now);
        }
    }

    fn start_zoom(&mut self, total_factor: f32, now: Instant) {
        // A new double-tap supersedes any animation still in flight.
        self.animation = Some(ZoomAnimation {
            total_factor,
            started: now,
            applied: 0.0,
        });
    }

    /// Advances the zoom animation, if one is running. Returns true while
    /// another frame is needed so the shell keeps requesting repaints.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(anim) = self.animation.as_mut() else {
            return false;
        };
        let progress = anim.progress(now);
        let step = anim.total_factor.powf(progress - anim.applied);
        anim.applied = progress;
        self.current.scale = (self.current.scale * step).max(MIN_SCALE);
        if progress >= 1.0 {
            self.animation = None;
        }
        self.animation.is_some()
    }
}
