//! Progressive-reveal animation of the loss chart.
//!
//! A frame is a prefix of the load sweep together with the matching prefixes
//! of the five traces. Frames borrow from the analysis that produced them, so
//! iterating is cheap and can be restarted at any time.

use crate::model::LossCurveSet;
use crate::sweep::LoadSweep;
use serde::{Deserialize, Serialize};
use std::fmt;
use tl_core::Real;

/// Approximate number of frames the animation is spread over.
pub const FRAME_TARGET: usize = 30;

/// Line width shared by every trace.
pub const TRACE_WIDTH: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const ORANGE_RED: Rgb = Rgb::new(0xFF, 0x45, 0x00);
    pub const DODGER_BLUE: Rgb = Rgb::new(0x1E, 0x90, 0xFF);
    pub const PURPLE: Rgb = Rgb::new(0x80, 0x00, 0x80);
    pub const CYAN: Rgb = Rgb::new(0x00, 0xFF, 0xFF);
    pub const LIME_GREEN: Rgb = Rgb::new(0x32, 0xCD, 0x32);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceStyle {
    pub color: Rgb,
    pub width: f32,
}

/// The five plotted series, in legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraceKind {
    Iron,
    Copper,
    Stray,
    Dielectric,
    Efficiency,
}

impl TraceKind {
    pub const ALL: [TraceKind; 5] = [
        TraceKind::Iron,
        TraceKind::Copper,
        TraceKind::Stray,
        TraceKind::Dielectric,
        TraceKind::Efficiency,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Iron => "Iron Loss",
            Self::Copper => "Copper Loss",
            Self::Stray => "Stray Loss",
            Self::Dielectric => "Dielectric Loss",
            Self::Efficiency => "Efficiency (%)",
        }
    }

    pub fn style(self) -> TraceStyle {
        let color = match self {
            Self::Iron => Rgb::ORANGE_RED,
            Self::Copper => Rgb::DODGER_BLUE,
            Self::Stray => Rgb::PURPLE,
            Self::Dielectric => Rgb::CYAN,
            Self::Efficiency => Rgb::LIME_GREEN,
        };
        TraceStyle {
            color,
            width: TRACE_WIDTH,
        }
    }

    /// Full curve for this trace.
    pub fn values(self, curves: &LossCurveSet) -> &[Real] {
        match self {
            Self::Iron => &curves.iron,
            Self::Copper => &curves.copper,
            Self::Stray => &curves.stray,
            Self::Dielectric => &curves.dielectric,
            Self::Efficiency => &curves.efficiency,
        }
    }
}

/// One styled series truncated to a frame's prefix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trace<'a> {
    pub kind: TraceKind,
    pub x: &'a [Real],
    pub y: &'a [Real],
}

impl Trace<'_> {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn style(&self) -> TraceStyle {
        self.kind.style()
    }

    pub fn points(&self) -> impl Iterator<Item = [Real; 2]> + '_ {
        self.x.iter().zip(self.y).map(|(&x, &y)| [x, y])
    }
}

/// Snapshot revealing the first `len` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    pub index: usize,
    pub len: usize,
    pub traces: [Trace<'a>; 5],
}

impl Frame<'_> {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Prefix lengths revealed by each frame, in playback order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationFrames {
    lengths: Vec<usize>,
}

impl AnimationFrames {
    /// Frames at lengths 1, 1+step, 1+2*step, ... with the full length always
    /// last. An empty sweep yields one empty frame.
    pub fn for_len(sweep_len: usize) -> Self {
        if sweep_len == 0 {
            return Self { lengths: vec![0] };
        }
        let step = (sweep_len / FRAME_TARGET).max(1);
        let mut lengths: Vec<usize> = (1..=sweep_len).step_by(step).collect();
        if lengths.last() != Some(&sweep_len) {
            lengths.push(sweep_len);
        }
        Self { lengths }
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Materialize frame `index` against the data it was scheduled for.
    pub fn frame<'a>(
        &self,
        index: usize,
        sweep: &'a LoadSweep,
        curves: &'a LossCurveSet,
    ) -> Option<Frame<'a>> {
        let len = (*self.lengths.get(index)?).min(sweep.len());
        let x = &sweep.as_slice()[..len];
        let traces = TraceKind::ALL.map(|kind| {
            let y = kind.values(curves);
            Trace {
                kind,
                x,
                y: &y[..len.min(y.len())],
            }
        });
        Some(Frame { index, len, traces })
    }

    pub fn iter<'a>(&'a self, sweep: &'a LoadSweep, curves: &'a LossCurveSet) -> FrameIter<'a> {
        FrameIter {
            schedule: self,
            sweep,
            curves,
            next: 0,
        }
    }
}

/// Lazy iterator over animation frames.
#[derive(Debug, Clone)]
pub struct FrameIter<'a> {
    schedule: &'a AnimationFrames,
    sweep: &'a LoadSweep,
    curves: &'a LossCurveSet,
    next: usize,
}

impl<'a> Iterator for FrameIter<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.schedule.frame(self.next, self.sweep, self.curves)?;
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.schedule.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_schedule_reveals_one_sample_per_frame() {
        let frames = AnimationFrames::for_len(50);
        assert_eq!(frames.len(), 50);
        assert_eq!(frames.lengths().first(), Some(&1));
        assert_eq!(frames.lengths().last(), Some(&50));
    }

    #[test]
    fn long_sweeps_always_end_full() {
        // step = 3 for 110 samples: 1, 4, ..., 109 then a trailing 110
        let frames = AnimationFrames::for_len(110);
        let lengths = frames.lengths();
        assert_eq!(lengths[1] - lengths[0], 3);
        assert_eq!(lengths[lengths.len() - 2], 109);
        assert_eq!(lengths.last(), Some(&110));
    }

    #[test]
    fn empty_sweep_gives_single_empty_frame() {
        let frames = AnimationFrames::for_len(0);
        assert_eq!(frames.lengths(), &[0]);
        let sweep = LoadSweep::linear(1.0, 0);
        let curves = LossCurveSet {
            iron: vec![],
            copper: vec![],
            stray: vec![],
            dielectric: vec![],
            total: vec![],
            efficiency: vec![],
        };
        let all: Vec<_> = frames.iter(&sweep, &curves).collect();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_empty());
    }

    #[test]
    fn trace_styles_are_fixed() {
        assert_eq!(TraceKind::Iron.style().color.to_string(), "#FF4500");
        assert_eq!(TraceKind::Copper.style().color.to_string(), "#1E90FF");
        assert_eq!(TraceKind::Stray.style().color.to_string(), "#800080");
        assert_eq!(TraceKind::Dielectric.style().color.to_string(), "#00FFFF");
        assert_eq!(TraceKind::Efficiency.style().color.to_string(), "#32CD32");
        assert!(TraceKind::ALL.iter().all(|k| k.style().width == 5.0));
    }
}
