//! Battery charge, read from `energy_now` / `energy_full`.

use super::{CollectContext, Segment, SegmentData};
use crate::config::{PaletteColor, SegmentId};
use crate::source::{read_number, Result, SourceError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    /// Inclusive lower bound in percent; `None` catches everything below.
    pub lower_bound: Option<f64>,
    pub icon: &'static str,
    pub color: PaletteColor,
}

/// Highest bound first, first match wins. Ends with a catch-all.
pub const BATTERY_THRESHOLDS: &[Threshold] = &[
    Threshold {
        lower_bound: Some(87.0),
        icon: "\u{f240}",
        color: PaletteColor::Green,
    },
    Threshold {
        lower_bound: Some(62.0),
        icon: "\u{f241}",
        color: PaletteColor::Yellow,
    },
    Threshold {
        lower_bound: Some(37.0),
        icon: "\u{f242}",
        color: PaletteColor::Yellow,
    },
    Threshold {
        lower_bound: Some(12.0),
        icon: "\u{f243}",
        color: PaletteColor::Orange,
    },
    Threshold {
        lower_bound: None,
        icon: "\u{f244}",
        color: PaletteColor::Red,
    },
];

pub fn classify(available: f64) -> &'static Threshold {
    BATTERY_THRESHOLDS
        .iter()
        .find(|t| t.lower_bound.map_or(true, |bound| available >= bound))
        .unwrap_or(&BATTERY_THRESHOLDS[BATTERY_THRESHOLDS.len() - 1])
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatteryReading {
    /// Upper-cased battery name, e.g. `BAT0`.
    pub name: String,
    pub available: f64,
    pub threshold: &'static Threshold,
}

impl BatteryReading {
    pub fn new(name: &str, available: f64) -> Self {
        Self {
            name: name.to_uppercase(),
            available,
            threshold: classify(available),
        }
    }

    /// `BAT0` becomes `0`.
    pub fn short_name(&self) -> &str {
        self.name.get(3..).unwrap_or("")
    }

    pub fn label(&self) -> String {
        format!(
            "{} {} {:.2}%",
            self.threshold.icon,
            self.short_name(),
            self.available
        )
    }
}

pub struct BatterySegment {
    name: String,
}

impl BatterySegment {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn read(&self, ctx: &CollectContext<'_>) -> Result<BatteryReading> {
        let dir = ctx.config.battery_dir(&self.name);
        let now: f64 = read_number(ctx.reader, &dir.join("energy_now"))?;
        let full: f64 = read_number(ctx.reader, &dir.join("energy_full"))?;

        if full <= 0.0 {
            return Err(SourceError::parse(
                "battery capacity",
                format!("{}: energy_full is {}", dir.display(), full),
            ));
        }

        Ok(BatteryReading::new(&self.name, now / full * 100.0))
    }
}

impl Segment for BatterySegment {
    fn collect(&self, ctx: &CollectContext<'_>) -> Result<SegmentData> {
        let reading = self.read(ctx)?;
        let color = ctx.config.palette.get(reading.threshold.color);
        Ok(SegmentData::new(reading.label(), ctx.config).with_color(color))
    }

    fn id(&self) -> SegmentId {
        SegmentId::Battery(self.name.clone())
    }
}
