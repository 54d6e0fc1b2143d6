use super::{CollectContext, Segment, SegmentData};
use crate::config::SegmentId;
use crate::source::{read_number, Result};

const PLUG_ICON: &str = "\u{f1e6}";

/// Whether the AC adapter reports itself online.
pub fn is_online(ctx: &CollectContext<'_>) -> Result<bool> {
    let online: i64 = read_number(ctx.reader, &ctx.config.ac_online_path())?;
    Ok(online != 0)
}

/// Plug icon while on AC, empty otherwise.
#[derive(Default)]
pub struct ChargingSegment;

impl ChargingSegment {
    pub fn new() -> Self {
        Self
    }
}

impl Segment for ChargingSegment {
    fn collect(&self, ctx: &CollectContext<'_>) -> Result<SegmentData> {
        if is_online(ctx)? {
            Ok(SegmentData::new(PLUG_ICON, ctx.config).with_color(ctx.config.palette.green))
        } else {
            Ok(SegmentData::empty(ctx.config))
        }
    }

    fn id(&self) -> SegmentId {
        SegmentId::Charging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::source::fixture::FixtureReader;
    use crate::source::SourceError;
    use chrono::Local;

    const ONLINE: &str = "/sys/class/power_supply/AC/online";

    fn collect_with(reader: &FixtureReader) -> Result<SegmentData> {
        let config = Config::default();
        let ctx = CollectContext {
            config: &config,
            reader,
            now: Local::now(),
        };
        ChargingSegment::new().collect(&ctx)
    }

    #[test]
    fn online_shows_green_plug() {
        let seg = collect_with(&FixtureReader::new().file(ONLINE, "1\n")).unwrap();
        assert_eq!(seg.full_text, PLUG_ICON);
        assert_eq!(seg.color.as_deref(), Some("#859900"));
    }

    #[test]
    fn offline_is_empty() {
        let seg = collect_with(&FixtureReader::new().file(ONLINE, "0\n")).unwrap();
        assert!(seg.is_empty());
        assert_eq!(seg.color, None);
    }

    #[test]
    fn missing_adapter_is_an_error() {
        let err = collect_with(&FixtureReader::new()).unwrap_err();
        assert!(matches!(err, SourceError::ResourceUnavailable { .. }));
    }
}
