use serde::{Deserialize, Serialize};
use std::fmt;

// Constants for frontend animation
pub const SPIN_DURATION_MS: u32 = 4000;  // Matches the visual transition of the wheel
pub const FULL_REVOLUTIONS: u32 = 5;     // Whole turns added before landing
pub const POINTER_ANGLE_DEG: f64 = 0.0;  // Pointer sits at 12 o'clock
pub const SHARE_TOLERANCE_DEG: f64 = 1e-6;

const FULL_CIRCLE: f64 = 360.0;

/// Extent of one slice of the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AngularShare {
    /// 360° divided by the number of segments on the wheel
    Equal,
    /// Explicit weight, as a percentage of the full circle
    Percent(f64),
}

impl AngularShare {
    pub fn degrees(self, segment_count: usize) -> f64 {
        match self {
            Self::Equal => FULL_CIRCLE / segment_count as f64,
            Self::Percent(percent) => percent * FULL_CIRCLE / 100.0,
        }
    }
}

/// Unvalidated description of a segment, as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSpec {
    pub id: String,
    pub share: AngularShare,
    pub label: String,
    pub color: String,
}

impl SegmentSpec {
    pub fn new(id: impl Into<String>, share: AngularShare) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            share,
            color: "#CCCCCC".to_string(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// One wedge of a validated layout, positioned clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub id: String,
    pub label: String,
    pub color: String,
    pub start_deg: f64,
    pub share_deg: f64,
}

impl Segment {
    pub fn end_deg(&self) -> f64 {
        self.start_deg + self.share_deg
    }

    pub fn midpoint_deg(&self) -> f64 {
        self.start_deg + self.share_deg / 2.0
    }

    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start_deg && angle < self.end_deg()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WheelError {
    Empty,
    EmptyId { index: usize },
    DuplicateId(String),
    InvalidShare { id: String, degrees: f64 },
    SharesDoNotSum { total: f64 },
    UnknownFallback(String),
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "wheel has no segments"),
            Self::EmptyId { index } => write!(f, "segment {} has an empty id", index),
            Self::DuplicateId(id) => write!(f, "segment id {} appears more than once", id),
            Self::InvalidShare { id, degrees } => {
                write!(f, "segment {} has an invalid share of {}°", id, degrees)
            }
            Self::SharesDoNotSum { total } => {
                write!(f, "segment shares sum to {}° instead of 360°", total)
            }
            Self::UnknownFallback(id) => write!(f, "fallback segment {} is not on the wheel", id),
        }
    }
}

impl std::error::Error for WheelError {}

/// How a server prize id was mapped onto the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    /// Equal once case and surrounding whitespace are ignored
    Normalized,
    /// Matched on the normalized token before the first `_`
    Prefix,
    /// Nothing matched; the layout's neutral segment was used
    Fallback,
}

impl MatchKind {
    pub fn is_degraded(self) -> bool {
        !matches!(self, Self::Exact)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub index: usize,
    pub kind: MatchKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRotation {
    pub rotation: f64,
    pub resolution: Resolution,
}

/// Ordered, validated set of segments covering exactly one full circle.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    segments: Vec<Segment>,
    fallback: usize,
}

impl WheelLayout {
    pub fn new(specs: Vec<SegmentSpec>) -> Result<Self, WheelError> {
        if specs.is_empty() {
            return Err(WheelError::Empty);
        }

        let count = specs.len();
        let mut segments: Vec<Segment> = Vec::with_capacity(count);
        let mut start_deg = 0.0;

        for (index, spec) in specs.into_iter().enumerate() {
            if spec.id.trim().is_empty() {
                return Err(WheelError::EmptyId { index });
            }
            if segments.iter().any(|s| s.id == spec.id) {
                return Err(WheelError::DuplicateId(spec.id));
            }

            let share_deg = spec.share.degrees(count);
            if !share_deg.is_finite() || share_deg <= 0.0 {
                return Err(WheelError::InvalidShare { id: spec.id, degrees: share_deg });
            }

            segments.push(Segment {
                id: spec.id,
                label: spec.label,
                color: spec.color,
                start_deg,
                share_deg,
            });
            start_deg += share_deg;
        }

        if (start_deg - FULL_CIRCLE).abs() > SHARE_TOLERANCE_DEG {
            return Err(WheelError::SharesDoNotSum { total: start_deg });
        }

        Ok(Self { segments, fallback: 0 })
    }

    /// Segment used when a prize id cannot be matched at all.
    pub fn with_fallback(mut self, id: &str) -> Result<Self, WheelError> {
        self.fallback = self
            .position(id)
            .ok_or_else(|| WheelError::UnknownFallback(id.to_string()))?;
        Ok(self)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn fallback_segment(&self) -> &Segment {
        &self.segments[self.fallback]
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.segments.iter().position(|s| s.id == id)
    }

    /// Maps a server prize id onto a segment. Never fails: an id that matches
    /// nothing lands on the fallback segment and is reported as degraded.
    pub fn resolve(&self, prize_id: &str) -> Resolution {
        if let Some(index) = self.position(prize_id) {
            return Resolution { index, kind: MatchKind::Exact };
        }

        let normalized = normalize_id(prize_id);
        if let Some(index) = self.segments.iter().position(|s| normalize_id(&s.id) == normalized) {
            log::warn!(
                "prize id {:?} differs from segment {} only by case or whitespace",
                prize_id, self.segments[index].id
            );
            return Resolution { index, kind: MatchKind::Normalized };
        }

        let token = normalized.split('_').next().unwrap_or_default();
        if !token.is_empty() {
            if let Some(index) = self
                .segments
                .iter()
                .position(|s| normalize_id(&s.id).starts_with(token))
            {
                log::warn!(
                    "prize id {} has no exact segment, using {} by prefix {}",
                    prize_id, self.segments[index].id, token
                );
                return Resolution { index, kind: MatchKind::Prefix };
            }
        }

        log::warn!(
            "prize id {} matches no segment, landing on fallback {}",
            prize_id, self.segments[self.fallback].id
        );
        Resolution { index: self.fallback, kind: MatchKind::Fallback }
    }

    /// Absolute rotation that parks the resolved segment's midpoint under the
    /// pointer after at least `FULL_REVOLUTIONS` clockwise turns.
    pub fn resolve_target_rotation(&self, prize_id: &str, current_rotation: f64) -> TargetRotation {
        let resolution = self.resolve(prize_id);
        let midpoint = self.segments[resolution.index].midpoint_deg();

        let delta = normalize_angle(POINTER_ANGLE_DEG - midpoint - current_rotation);
        let rotation = current_rotation + f64::from(FULL_REVOLUTIONS) * FULL_CIRCLE + delta;

        TargetRotation { rotation, resolution }
    }

    /// Wheel-frame angle sitting under the pointer for a given rotation.
    pub fn angle_under_pointer(rotation: f64) -> f64 {
        normalize_angle(POINTER_ANGLE_DEG - rotation)
    }

    pub fn segment_index_at_angle(&self, angle: f64) -> usize {
        let angle = normalize_angle(angle);
        self.segments
            .iter()
            .position(|s| s.contains(angle))
            // Accumulated rounding can leave a sliver just below 360°
            .unwrap_or(self.segments.len() - 1)
    }

    /// Inverse of `resolve_target_rotation`: the segment the pointer rests on.
    pub fn segment_at_rotation(&self, rotation: f64) -> &Segment {
        let index = self.segment_index_at_angle(Self::angle_under_pointer(rotation));
        &self.segments[index]
    }
}

pub fn resolve_target_rotation(layout: &WheelLayout, prize_id: &str, current_rotation: f64) -> TargetRotation {
    layout.resolve_target_rotation(prize_id, current_rotation)
}

/// Folds any angle into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let folded = angle.rem_euclid(FULL_CIRCLE);
    if folded >= FULL_CIRCLE {
        0.0
    } else {
        folded
    }
}

fn normalize_id(id: &str) -> String {
    id.trim().to_ascii_uppercase()
}
