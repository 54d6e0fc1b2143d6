use super::{CollectContext, Segment, SegmentData};
use crate::config::SegmentId;
use crate::source::Result;

const KEYBOARD_ICON: &str = "\u{f11c}";

#[derive(Default)]
pub struct LayoutSegment;

impl LayoutSegment {
    pub fn new() -> Self {
        Self
    }
}

impl Segment for LayoutSegment {
    fn collect(&self, ctx: &CollectContext<'_>) -> Result<SegmentData> {
        let output = ctx.reader.run(&ctx.config.helpers.layout)?;
        Ok(
            SegmentData::new(format!("{} {}", KEYBOARD_ICON, output.trim()), ctx.config)
                .with_color(ctx.config.palette.blue),
        )
    }

    fn id(&self) -> SegmentId {
        SegmentId::Layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::source::fixture::FixtureReader;
    use chrono::Local;

    #[test]
    fn wraps_layout_in_blue() {
        let config = Config::default();
        let reader = FixtureReader::new().output("xkblayout", "us\n");
        let ctx = CollectContext {
            config: &config,
            reader: &reader,
            now: Local::now(),
        };

        let seg = LayoutSegment::new().collect(&ctx).unwrap();
        assert_eq!(seg.full_text, "\u{f11c} us");
        assert_eq!(seg.color.as_deref(), Some("#268bd2"));
    }
}
