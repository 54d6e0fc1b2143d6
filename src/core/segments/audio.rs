//! Sink volume and mute state from `pactl list sinks`.
//!
//! Only the first sink is looked at. The relevant part of the listing is:
//!
//! ```text
//! Mute: yes
//! Volume: front-left: 42997 /  66% / -10.98 dB,   front-right: 42997 /  66% / -10.98 dB
//! ```
//!
//! and the displayed volume is the floored average of the two channels.

use super::{CollectContext, Segment, SegmentData};
use crate::config::SegmentId;
use crate::source::{Result, SourceError};
use regex::Regex;

const AUDIO_ICON: &str = "\u{f001}";
const MUTED_MARKER: &str = "(muted)";
const VOLUME_PATTERN: &str = r"Volume:.+?/\s*(\d+)%\s*/.+?/\s*(\d+)%\s*/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkState {
    pub muted: bool,
    pub volume: u32,
}

fn parse_mute(output: &str) -> Result<bool> {
    output
        .lines()
        .find_map(|line| line.trim_start().strip_prefix("Mute:"))
        .map(|value| value.trim() == "yes")
        .ok_or_else(|| SourceError::parse("sink listing", "no Mute: line"))
}

fn parse_volume(output: &str) -> Result<u32> {
    let pattern =
        Regex::new(VOLUME_PATTERN).map_err(|e| SourceError::parse("volume pattern", e.to_string()))?;
    let caps = pattern
        .captures(output)
        .ok_or_else(|| SourceError::parse("sink listing", "no two-channel Volume: line"))?;

    let channel = |i: usize| -> Result<u32> {
        caps[i]
            .parse::<u32>()
            .map_err(|e| SourceError::parse("volume", format!("{:?}: {}", &caps[i], e)))
    };
    Ok((channel(1)? + channel(2)?) / 2)
}

pub fn parse_sink(output: &str) -> Result<SinkState> {
    Ok(SinkState {
        muted: parse_mute(output)?,
        volume: parse_volume(output)?,
    })
}

impl SinkState {
    pub fn label(&self) -> String {
        let marker = if self.muted { MUTED_MARKER } else { "" };
        format!("{} {}%{}", AUDIO_ICON, self.volume, marker)
    }
}

#[derive(Default)]
pub struct AudioSegment;

impl AudioSegment {
    pub fn new() -> Self {
        Self
    }
}

impl Segment for AudioSegment {
    fn collect(&self, ctx: &CollectContext<'_>) -> Result<SegmentData> {
        let output = ctx.reader.run(&ctx.config.helpers.audio)?;
        let sink = parse_sink(&output)?;
        Ok(SegmentData::new(sink.label(), ctx.config))
    }

    fn id(&self) -> SegmentId {
        SegmentId::Audio
    }
}
