use super::{CollectContext, Segment, SegmentData};
use crate::config::SegmentId;
use crate::source::{Result, SourceError};

const BRIGHTNESS_ICON: &str = "\u{f185}";

/// Screen brightness as reported by the `brightness` helper.
#[derive(Default)]
pub struct BrightnessSegment;

impl BrightnessSegment {
    pub fn new() -> Self {
        Self
    }
}

/// The helper prints a bare percentage; it is shown as printed.
pub fn parse_brightness(output: &str) -> Result<&str> {
    let value = output.trim();
    value
        .parse::<f64>()
        .map(|_| value)
        .map_err(|_| SourceError::parse("brightness", format!("{:?}", value)))
}

impl Segment for BrightnessSegment {
    fn collect(&self, ctx: &CollectContext<'_>) -> Result<SegmentData> {
        let output = ctx.reader.run(&ctx.config.helpers.brightness)?;
        let value = parse_brightness(&output)?;
        Ok(SegmentData::new(
            format!("{} {}%", BRIGHTNESS_ICON, value),
            ctx.config,
        ))
    }

    fn id(&self) -> SegmentId {
        SegmentId::Brightness
    }
}
