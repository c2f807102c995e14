//! Shot meter presentations.
//!
//! Both strategies read the same two numbers; the host decides how to draw
//! the values they publish on the HUD gauge.

use crate::config::MeterStyle;

pub trait ShotMeter {
    /// Gauge values for the current ammunition.
    fn readout(&self, remaining: u32, max: u32) -> Vec<f32>;
}

/// One value per shot: 1.0 available, 0.0 used. Shots are used up from the end.
pub struct IndicatorMeter;

impl ShotMeter for IndicatorMeter {
    fn readout(&self, remaining: u32, max: u32) -> Vec<f32> {
        (0..max)
            .map(|i| if i < remaining { 1.0 } else { 0.0 })
            .collect()
    }
}

/// A single percentage: `remaining / max * 100`.
pub struct FillMeter;

impl ShotMeter for FillMeter {
    fn readout(&self, remaining: u32, max: u32) -> Vec<f32> {
        if max == 0 {
            return vec![0.0];
        }
        vec![remaining.min(max) as f32 / max as f32 * 100.0]
    }
}

pub fn meter_for(style: MeterStyle) -> Box<dyn ShotMeter> {
    match style {
        MeterStyle::Indicators => Box::new(IndicatorMeter),
        MeterStyle::Fill => Box::new(FillMeter),
    }
}
