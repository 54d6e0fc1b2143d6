//! Wi-Fi connection, from `nmcli -t -f active,ssid,signal dev wifi`.

use super::{CollectContext, Segment, SegmentData};
use crate::config::SegmentId;
use crate::source::Result;

const WIFI_ICON: &str = "\u{f1eb}";
const ACTIVE: &str = "yes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub ssid: String,
    pub signal: String,
}

/// Splits one line of nmcli terse output. `\:` and `\\` are unescaped.
fn split_terse(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => current.extend(chars.next()),
            ':' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// First connection flagged active, if any. The last three fields of a
/// line are `active`, `ssid` and `signal`.
pub fn parse_active(output: &str) -> Option<Connection> {
    output.lines().find_map(|line| {
        let fields = split_terse(line);
        let [active, ssid, signal] = fields.get(fields.len().checked_sub(3)?..)? else {
            return None;
        };
        (active == ACTIVE).then(|| Connection {
            ssid: ssid.clone(),
            signal: signal.clone(),
        })
    })
}

pub fn active_connection(ctx: &CollectContext<'_>) -> Result<Option<Connection>> {
    let output = ctx.reader.run(&ctx.config.helpers.network)?;
    Ok(parse_active(&output))
}

#[derive(Default)]
pub struct NetworkSegment;

impl NetworkSegment {
    pub fn new() -> Self {
        Self
    }
}

impl Segment for NetworkSegment {
    fn collect(&self, ctx: &CollectContext<'_>) -> Result<SegmentData> {
        Ok(match active_connection(ctx)? {
            Some(conn) => SegmentData::new(
                format!("{} {} {}%", WIFI_ICON, conn.ssid, conn.signal),
                ctx.config,
            ),
            None => SegmentData::empty(ctx.config),
        })
    }

    fn id(&self) -> SegmentId {
        SegmentId::Network
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::source::fixture::FixtureReader;
    use chrono::Local;

    fn collect_with(output: &str) -> SegmentData {
        let config = Config::default();
        let reader = FixtureReader::new().output("nmcli", output);
        let ctx = CollectContext {
            config: &config,
            reader: &reader,
            now: Local::now(),
        };
        NetworkSegment::new().collect(&ctx).unwrap()
    }

    #[test]
    fn active_line_with_field_names() {
        let conn = parse_active("active:yes:HomeNet:72\n").unwrap();
        assert_eq!(conn.ssid, "HomeNet");
        assert_eq!(conn.signal, "72");
    }

    #[test]
    fn picks_first_active_network() {
        let output = "no:Neighbour:40\nyes:HomeNet:72\nyes:Other:10\n";
        let seg = collect_with(output);
        assert_eq!(seg.full_text, "\u{f1eb} HomeNet 72%");
        assert_eq!(seg.color, None);
    }

    #[test]
    fn escaped_colon_stays_in_ssid() {
        let conn = parse_active("yes:Cafe\\:Guest:55\n").unwrap();
        assert_eq!(conn.ssid, "Cafe:Guest");
        assert_eq!(conn.signal, "55");
    }

    #[test]
    fn no_active_network_gives_empty_segment() {
        let seg = collect_with("no:Neighbour:40\nno:Other:12\n");
        assert!(seg.is_empty());
        assert_eq!(seg.color, None);
    }

    #[test]
    fn ssid_named_yes_is_not_active_flag() {
        assert_eq!(parse_active("no:yes:40\n"), None);
    }

    #[test]
    fn short_lines_are_ignored() {
        assert_eq!(parse_active("yes\n\n"), None);
    }
}
