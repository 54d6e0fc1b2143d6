pub mod audio;
pub mod battery;
pub mod brightness;
pub mod charging;
pub mod clock;
pub mod layout;
pub mod network;

use crate::config::{Config, SegmentId};
use crate::source::{Result, SourceReader};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Everything a segment may look at during one cycle.
pub struct CollectContext<'a> {
    pub config: &'a Config,
    pub reader: &'a dyn SourceReader,
    pub now: DateTime<Local>,
}

// One slot of the status line
pub trait Segment {
    fn collect(&self, ctx: &CollectContext<'_>) -> Result<SegmentData>;
    fn id(&self) -> SegmentId;
}

/// One block of i3bar output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentData {
    pub full_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub separator_block_width: u32,
}

impl SegmentData {
    pub fn new(full_text: impl Into<String>, config: &Config) -> Self {
        Self {
            full_text: full_text.into(),
            color: None,
            separator_block_width: config.separator_width,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    /// Filler for a conditional slot whose source is inactive.
    pub fn empty(config: &Config) -> Self {
        Self::new("", config)
    }

    /// Placeholder for a slot whose source failed.
    pub fn failed(id: &SegmentId, config: &Config) -> Self {
        Self::new(format!("{} ?", id.label()), config).with_color(config.palette.red)
    }

    pub fn is_empty(&self) -> bool {
        self.full_text.is_empty()
    }
}

/// The ordered segments of one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Vec<SegmentData>);

impl Document {
    pub fn new(segments: Vec<SegmentData>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[SegmentData] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub use audio::AudioSegment;
pub use battery::BatterySegment;
pub use brightness::BrightnessSegment;
pub use charging::ChargingSegment;
pub use clock::ClockSegment;
pub use layout::LayoutSegment;
pub use network::NetworkSegment;

/// The fixed display order: network, batteries, charging, brightness, audio,
/// layout, clock.
pub fn default_segments(config: &Config) -> Vec<Box<dyn Segment>> {
    let mut segments: Vec<Box<dyn Segment>> = vec![Box::new(NetworkSegment::new())];
    for name in &config.batteries {
        segments.push(Box::new(BatterySegment::new(name)));
    }
    segments.push(Box::new(ChargingSegment::new()));
    segments.push(Box::new(BrightnessSegment::new()));
    segments.push(Box::new(AudioSegment::new()));
    segments.push(Box::new(LayoutSegment::new()));
    segments.push(Box::new(ClockSegment::new()));
    segments
}
