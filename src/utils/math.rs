/// Distance under which a damped value snaps onto its target.
pub const DAMP_EPSILON: f32 = 0.001;

/// Rational approximation of `exp(-x)` used by [`smooth_damp`].
#[inline]
fn exp_decay(x: f32) -> f32 {
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

/// Critically damped step of `current` toward `target`.
///
/// `velocity` is carried between calls. The result never passes the target and
/// snaps onto it once it's within [`DAMP_EPSILON`], coming to rest there.
/// Returns whether the value changed.
pub fn smooth_damp(
    current: &mut f32,
    velocity: &mut f32,
    target: f32,
    smooth_time: f32,
    delta: f32,
) -> bool {
    if (*current - target).abs() <= DAMP_EPSILON {
        let moved = *current != target;
        *current = target;
        *velocity = 0.0;
        return moved;
    }

    if delta.is_nan() || delta <= 0.0 {
        return false;
    }

    let omega = 2.0 / smooth_time.max(0.0001);
    let decay = exp_decay(omega * delta);

    let change = *current - target;
    let temp = (*velocity + omega * change) * delta;
    *velocity = (*velocity - omega * temp) * decay;

    let mut output = target + (change + temp) * decay;

    // overshoot
    if (target - *current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    *current = output;
    true
}
