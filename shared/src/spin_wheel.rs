use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    EXTRA_SPIN_TURNS, MAX_SPIN_DURATION_MS, MIN_SPIN_DURATION_MS, MIN_SPIN_TURNS,
};

/// Canvas angle of the fixed pointer. Zero is the 3 o'clock position and
/// canvas angles grow clockwise on screen.
pub const POINTER_ANGLE: f64 = 0.0;

/// One labelled slice of a wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Segment {
    pub id: String,
    pub label: String,
    /// Carried for callers that tag segments; every slice is drawn with equal width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Segment {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            weight: None,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("a wheel needs at least one segment")]
    NoSegments,
}

/// Rotation of the wheel and whether a spin is in flight.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct SpinState {
    pub current_angle: f64,
    pub is_spinning: bool,
}

/// Outcome of one completed spin.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResult {
    pub segment: Segment,
    pub index: usize,
    /// Stopping angle normalized into `[0, 2π)`.
    pub final_angle: f64,
}

/// Parameters of the spin currently in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub start_angle: f64,
    pub rotation: f64,
    pub duration_ms: f64,
    pub start_time_ms: f64,
}

impl SpinPlan {
    /// Draws a total rotation of 2 to 5 turns and a duration between 3 and 5 seconds.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
        let rotation = (MIN_SPIN_TURNS + rng.gen_range(0.0..EXTRA_SPIN_TURNS)) * TAU;
        let duration_ms = rng.gen_range(MIN_SPIN_DURATION_MS..MAX_SPIN_DURATION_MS);
        (rotation, duration_ms)
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || !self.duration_ms.is_finite() {
            return 1.0;
        }
        let elapsed = (now_ms - self.start_time_ms).max(0.0);
        (elapsed / self.duration_ms).min(1.0)
    }

    pub fn angle_at(&self, progress: f64) -> f64 {
        if progress >= 1.0 {
            return self.end_angle();
        }
        self.start_angle + self.rotation * ease_out_cubic(progress)
    }

    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.rotation
    }
}

/// What a single animation frame produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Tick {
    /// No spin in flight.
    Idle,
    /// Still spinning; render at `angle`.
    Frame { angle: f64 },
    /// Last frame of the spin.
    Finished(SpinResult),
}

/// Tick-driven spinning wheel. The host calls [`SpinWheel::spin`] once and then
/// [`SpinWheel::tick`] every display frame until it returns [`Tick::Finished`].
#[derive(Debug, Clone)]
pub struct SpinWheel {
    segments: Vec<Segment>,
    state: SpinState,
    plan: Option<SpinPlan>,
}

impl SpinWheel {
    pub fn new(segments: Vec<Segment>) -> Result<Self, ConfigurationError> {
        if segments.is_empty() {
            return Err(ConfigurationError::NoSegments);
        }
        Ok(Self {
            segments,
            state: SpinState::default(),
            plan: None,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    pub fn angle(&self) -> f64 {
        self.state.current_angle
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning
    }

    pub fn plan(&self) -> Option<&SpinPlan> {
        self.plan.as_ref()
    }

    /// Starts a spin with freshly drawn parameters. Returns `false` without
    /// touching anything when a spin is already in flight.
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R, now_ms: f64) -> bool {
        if self.state.is_spinning {
            return false;
        }
        let (rotation, duration_ms) = SpinPlan::draw(rng);
        self.spin_with(rotation, duration_ms, now_ms)
    }

    /// Starts a spin with caller-chosen rotation (radians) and duration.
    pub fn spin_with(&mut self, rotation: f64, duration_ms: f64, now_ms: f64) -> bool {
        if self.state.is_spinning {
            return false;
        }
        let plan = SpinPlan {
            start_angle: self.state.current_angle,
            rotation,
            duration_ms,
            start_time_ms: now_ms,
        };
        log::debug!(
            "wheel spin started: {:.3} rad over {:.0} ms from {:.3} rad",
            rotation,
            duration_ms,
            plan.start_angle
        );
        self.plan = Some(plan);
        self.state.is_spinning = true;
        true
    }

    pub fn tick(&mut self, now_ms: f64) -> Tick {
        let Some(plan) = self.plan else {
            return Tick::Idle;
        };

        let progress = plan.progress(now_ms);
        if progress < 1.0 {
            let angle = plan.angle_at(progress);
            self.state.current_angle = angle;
            return Tick::Frame { angle };
        }

        let final_angle = plan.end_angle();
        self.state.current_angle = final_angle;
        self.state.is_spinning = false;
        self.plan = None;

        let result = self.result_at(final_angle);
        log::debug!(
            "wheel stopped on segment {} ({}) at {:.3} rad",
            result.index,
            result.segment.label,
            result.final_angle
        );
        Tick::Finished(result)
    }

    /// Drops the in-flight spin without producing a result. The wheel keeps
    /// the angle of the last tick.
    pub fn cancel(&mut self) -> bool {
        if self.plan.take().is_none() {
            return false;
        }
        self.state.is_spinning = false;
        log::debug!("wheel spin cancelled at {:.3} rad", self.state.current_angle);
        true
    }

    /// Segment the pointer currently rests on.
    pub fn segment_at_pointer(&self) -> &Segment {
        &self.segments[selected_index(self.segments.len(), self.state.current_angle)]
    }

    fn result_at(&self, angle: f64) -> SpinResult {
        let final_angle = normalize_angle(angle);
        let index = selected_index(self.segments.len(), final_angle);
        SpinResult {
            segment: self.segments[index].clone(),
            index,
            final_angle,
        }
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

pub fn slice_width(segment_count: usize) -> f64 {
    TAU / segment_count as f64
}

/// `angle mod 2π`, always in `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(TAU);
    // rem_euclid rounds up to TAU for tiny negative inputs
    if normalized >= TAU {
        0.0
    } else {
        normalized
    }
}

/// Arc drawn for segment `index` when the wheel is rotated by `angle`.
pub fn segment_span(segment_count: usize, index: usize, angle: f64) -> (f64, f64) {
    let slice = slice_width(segment_count);
    let start = index as f64 * slice + angle;
    (start, start + slice)
}

/// Angle at which the label of segment `index` is drawn.
pub fn label_angle(segment_count: usize, index: usize, angle: f64) -> f64 {
    let (start, _) = segment_span(segment_count, index, angle);
    start + slice_width(segment_count) / 2.0
}

pub fn raw_index(segment_count: usize, angle: f64) -> usize {
    let slice = slice_width(segment_count);
    (normalize_angle(angle) / slice).floor() as usize % segment_count
}

/// Index of the segment selected when the wheel stops at `angle`.
/// Segments are drawn clockwise from the pointer, so the rotation walks them
/// past the pointer in reverse order.
pub fn selected_index(segment_count: usize, angle: f64) -> usize {
    segment_count - 1 - raw_index(segment_count, angle)
}

/// Segment whose drawn span `(start, end]` covers [`POINTER_ANGLE`].
/// A pointer exactly on a divider belongs to the segment that ends there.
/// Shares its computation with [`selected_index`], so the highlighted slice is
/// always the spin result.
pub fn segment_under_pointer(segment_count: usize, angle: f64) -> usize {
    selected_index(segment_count, angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::PI;

    const FRAME_MS: f64 = 16.0;

    fn segments(count: usize) -> Vec<Segment> {
        (0..count)
            .map(|i| Segment::new(format!("item{i}"), format!("Item {i}")))
            .collect()
    }

    fn run_to_completion(wheel: &mut SpinWheel, start_ms: f64) -> (Vec<f64>, Vec<SpinResult>) {
        let mut angles = Vec::new();
        let mut results = Vec::new();
        let mut now = start_ms;
        loop {
            now += FRAME_MS;
            match wheel.tick(now) {
                Tick::Frame { angle } => angles.push(angle),
                Tick::Finished(result) => {
                    angles.push(wheel.angle());
                    results.push(result);
                }
                Tick::Idle => break,
            }
        }
        (angles, results)
    }

    #[test]
    fn test_new_rejects_empty_segments() {
        let err = SpinWheel::new(Vec::new()).unwrap_err();
        assert_eq!(err, ConfigurationError::NoSegments);
    }

    #[test]
    fn test_new_wheel_starts_at_rest() {
        let wheel = SpinWheel::new(segments(3)).unwrap();
        assert_eq!(wheel.state(), SpinState { current_angle: 0.0, is_spinning: false });
        assert!(wheel.plan().is_none());
    }

    #[test]
    fn test_eight_segments_at_zero_selects_last() {
        assert_eq!(raw_index(8, 0.0), 0);
        assert_eq!(selected_index(8, 0.0), 7);
        assert_eq!(segment_under_pointer(8, 0.0), 7);
    }

    #[test]
    fn test_four_segments_at_half_turn() {
        assert_eq!(slice_width(4), PI / 2.0);
        assert_eq!(raw_index(4, PI), 2);
        assert_eq!(selected_index(4, PI), 1);
        assert_eq!(segment_under_pointer(4, PI), 1);
    }

    #[test]
    fn test_normalize_angle_range() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(TAU), 0.0);
        assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
        assert!((normalize_angle(5.0 * TAU + 1.0) - 1.0).abs() < 1e-9);
        let tiny = normalize_angle(-1e-18);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn test_selection_agrees_with_rendered_spans() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in 1..=16 {
            for _ in 0..2_000 {
                let angle = rng.gen_range(-50.0..50.0);
                let selected = selected_index(count, angle);
                assert_eq!(selected, segment_under_pointer(count, angle), "n={count} angle={angle}");

                // The pointer lies inside the drawn arc of the selected segment.
                let (start, _) = segment_span(count, selected, normalize_angle(angle));
                let offset = normalize_angle(POINTER_ANGLE - start);
                assert!(offset > 0.0 && offset <= slice_width(count) + 1e-9);
            }
        }
    }

    #[test]
    fn test_highlight_matches_result_on_dividers() {
        assert_eq!(segment_under_pointer(3, slice_width(3)), selected_index(3, slice_width(3)));
        assert_eq!(segment_under_pointer(3, 2.0 * slice_width(3)), selected_index(3, 2.0 * slice_width(3)));

        for count in 1..=64 {
            let slice = slice_width(count);
            for base in [0.0, 7.3, 123.456] {
                for k in 0..3 * count {
                    let angle = base + k as f64 * slice;
                    let selected = selected_index(count, angle);
                    assert_eq!(
                        segment_under_pointer(count, angle),
                        selected,
                        "n={count} k={k} base={base}"
                    );

                    // Up to rounding, the pointer is on the selected arc.
                    let (start, _) = segment_span(count, selected, normalize_angle(angle));
                    let offset = normalize_angle(POINTER_ANGLE - start);
                    assert!(
                        offset <= slice + 1e-9 || offset >= TAU - 1e-9,
                        "n={count} k={k} base={base} offset={offset}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_single_segment_always_selected() {
        let mut wheel = SpinWheel::new(segments(1)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for round in 0..20 {
            let start = round as f64 * 10_000.0;
            assert!(wheel.spin(&mut rng, start));
            let (_, results) = run_to_completion(&mut wheel, start);
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].index, 0);
        }
    }

    #[test]
    fn test_every_spin_finishes_with_one_result() {
        for count in 1..=12 {
            let mut rng = StdRng::seed_from_u64(count as u64);
            let mut wheel = SpinWheel::new(segments(count)).unwrap();
            for round in 0..25 {
                let start = round as f64 * 10_000.0;
                assert!(wheel.spin(&mut rng, start));
                assert!(wheel.is_spinning());

                let (_, results) = run_to_completion(&mut wheel, start);
                assert_eq!(results.len(), 1);
                assert!(!wheel.is_spinning());

                let result = &results[0];
                assert!((0.0..TAU).contains(&result.final_angle));
                assert_eq!(result.index, selected_index(count, result.final_angle));
                assert_eq!(result.segment, wheel.segments()[result.index]);
                assert_eq!(wheel.segment_at_pointer(), &result.segment);
            }
        }
    }

    #[test]
    fn test_spin_while_spinning_is_noop() {
        let mut wheel = SpinWheel::new(segments(8)).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(wheel.spin(&mut rng, 0.0));
        let plan = *wheel.plan().unwrap();

        let angle = match wheel.tick(1000.0) {
            Tick::Frame { angle } => angle,
            other => panic!("expected a frame, got {other:?}"),
        };

        assert!(!wheel.spin(&mut rng, 1000.0));
        assert!(!wheel.spin_with(TAU, 10.0, 1000.0));
        assert_eq!(wheel.plan(), Some(&plan));
        assert_eq!(wheel.angle(), angle);

        match wheel.tick(plan.start_time_ms + plan.duration_ms) {
            Tick::Finished(result) => {
                assert_eq!(result.final_angle, normalize_angle(plan.end_angle()))
            }
            other => panic!("expected the spin to finish, got {other:?}"),
        }
    }

    #[test]
    fn test_drawn_parameters_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..1000 {
            let (rotation, duration) = SpinPlan::draw(&mut rng);
            assert!((3000.0..5000.0).contains(&duration), "duration {duration}");
            assert!((4.0 * PI..10.0 * PI).contains(&rotation), "rotation {rotation}");
        }
    }

    #[test]
    fn test_spins_are_independent() {
        let mut wheel = SpinWheel::new(segments(8)).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut previous: Option<SpinPlan> = None;

        for round in 0..50 {
            let start = round as f64 * 10_000.0;
            let angle_before = wheel.angle();
            assert!(wheel.spin(&mut rng, start));
            let plan = *wheel.plan().unwrap();

            assert_eq!(plan.start_angle, angle_before);
            if let Some(previous) = previous {
                assert_eq!(plan.start_angle, previous.end_angle());
                assert_ne!(
                    (plan.rotation, plan.duration_ms),
                    (previous.rotation, previous.duration_ms),
                    "round {round} reused the previous draw"
                );
            }

            run_to_completion(&mut wheel, start);
            assert_eq!(wheel.angle(), plan.end_angle());
            previous = Some(plan);
        }
    }

    #[test]
    fn test_angle_decelerates_and_stops_on_target() {
        let mut wheel = SpinWheel::new(segments(6)).unwrap();
        let rotation = 3.5 * TAU;
        assert!(wheel.spin_with(rotation, 4000.0, 500.0));

        let (angles, results) = run_to_completion(&mut wheel, 500.0);
        assert_eq!(results.len(), 1);

        let deltas: Vec<f64> = angles.windows(2).map(|w| w[1] - w[0]).collect();
        assert!(deltas.iter().all(|d| *d >= 0.0));
        for pair in deltas.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-9, "velocity increased: {pair:?}");
        }

        assert_eq!(wheel.angle(), rotation);
        assert!((results[0].final_angle - normalize_angle(rotation)).abs() < 1e-12);
    }

    #[test]
    fn test_tick_before_start_holds_start_angle() {
        let mut wheel = SpinWheel::new(segments(4)).unwrap();
        assert!(wheel.spin_with(TAU, 3000.0, 1000.0));
        assert_eq!(wheel.tick(900.0), Tick::Frame { angle: 0.0 });
    }

    #[test]
    fn test_zero_duration_finishes_on_first_tick() {
        let mut wheel = SpinWheel::new(segments(4)).unwrap();
        assert!(wheel.spin_with(PI, 0.0, 0.0));
        match wheel.tick(0.0) {
            Tick::Finished(result) => assert_eq!(result.index, 1),
            other => panic!("expected the spin to finish, got {other:?}"),
        }
    }

    #[test]
    fn test_angle_carries_over_between_spins() {
        let mut wheel = SpinWheel::new(segments(8)).unwrap();
        assert!(wheel.spin_with(2.25 * TAU, 3000.0, 0.0));
        run_to_completion(&mut wheel, 0.0);
        let first_stop = wheel.angle();

        assert!(wheel.spin_with(3.0 * TAU, 3000.0, 10_000.0));
        assert_eq!(wheel.plan().unwrap().start_angle, first_stop);
        run_to_completion(&mut wheel, 10_000.0);
        assert_eq!(wheel.angle(), first_stop + 3.0 * TAU);
    }

    #[test]
    fn test_cancel_drops_result() {
        let mut wheel = SpinWheel::new(segments(8)).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        assert!(wheel.spin(&mut rng, 0.0));
        let angle = match wheel.tick(1500.0) {
            Tick::Frame { angle } => angle,
            other => panic!("expected a frame, got {other:?}"),
        };

        assert!(wheel.cancel());
        assert!(!wheel.is_spinning());
        assert_eq!(wheel.angle(), angle);
        assert_eq!(wheel.tick(10_000.0), Tick::Idle);
        assert!(!wheel.cancel());

        // A cancelled wheel can spin again from where it stopped.
        assert!(wheel.spin(&mut rng, 20_000.0));
        assert_eq!(wheel.plan().unwrap().start_angle, angle);
    }

    #[test]
    fn test_label_sits_mid_segment() {
        let (start, end) = segment_span(8, 3, 0.25);
        assert!((label_angle(8, 3, 0.25) - (start + end) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }
}
