use super::{CollectContext, Segment, SegmentData};
use crate::config::SegmentId;
use crate::source::Result;
use chrono::{DateTime, TimeZone};

const CLOCK_FORMAT: &str = "%a %b %d %H:%M";

pub fn format_time<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format(CLOCK_FORMAT).to_string()
}

#[derive(Default)]
pub struct ClockSegment;

impl ClockSegment {
    pub fn new() -> Self {
        Self
    }
}

impl Segment for ClockSegment {
    fn collect(&self, ctx: &CollectContext<'_>) -> Result<SegmentData> {
        Ok(SegmentData::new(format_time(&ctx.now), ctx.config))
    }

    fn id(&self) -> SegmentId {
        SegmentId::Clock
    }
}
