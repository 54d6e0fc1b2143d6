//! i3bar protocol framing.
//!
//! The header and opening bracket go out once; every cycle then appends one
//! array followed by `, ` so the stream stays one endless JSON array.

use super::segments::Document;
use std::io::{self, Write};

pub const PROTOCOL_HEADER: &str = r#"{"version": 1}"#;
const DOCUMENT_SEPARATOR: &str = ", ";

pub struct StatusLineWriter<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> StatusLineWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    /// Writes `{"version": 1}` and `[`. Later calls do nothing.
    pub fn write_header(&mut self) -> io::Result<()> {
        if self.header_written {
            return Ok(());
        }
        writeln!(self.out, "{}", PROTOCOL_HEADER)?;
        writeln!(self.out, "[")?;
        self.out.flush()?;
        self.header_written = true;
        Ok(())
    }

    /// Serializes the whole document before writing, so a cycle is never
    /// partially emitted.
    pub fn emit(&mut self, document: &Document) -> io::Result<()> {
        self.write_header()?;
        let mut line = serde_json::to_string(document)?;
        line.push_str(DOCUMENT_SEPARATOR);
        line.push('\n');
        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::segments::SegmentData;

    fn document(text: &str) -> Document {
        let config = Config::default();
        Document::new(vec![
            SegmentData::new(text, &config).with_color(config.palette.blue),
            SegmentData::empty(&config),
        ])
    }

    #[test]
    fn header_precedes_first_document() {
        let mut writer = StatusLineWriter::new(Vec::new());
        writer.emit(&document("a")).unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some(r#"{"version": 1}"#));
        assert_eq!(lines.next(), Some("["));
        assert_eq!(
            lines.next(),
            Some(
                r##"[{"full_text":"a","color":"#268bd2","separator_block_width":25},{"full_text":"","separator_block_width":25}], "##
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn header_is_written_once() {
        let mut writer = StatusLineWriter::new(Vec::new());
        writer.write_header().unwrap();
        writer.emit(&document("a")).unwrap();
        writer.emit(&document("b")).unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out.matches(PROTOCOL_HEADER).count(), 1);
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn stream_forms_a_json_array_once_closed() {
        let mut writer = StatusLineWriter::new(Vec::new());
        writer.emit(&document("first")).unwrap();
        writer.emit(&document("second")).unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        let body = out.split_once('\n').unwrap().1;
        // Drop the trailing separator and close the array by hand.
        let closed = format!("{}]", body.trim_end().trim_end_matches(','));
        let parsed: Vec<Document> = serde_json::from_str(&closed).unwrap();
        assert_eq!(parsed, vec![document("first"), document("second")]);
    }
}
