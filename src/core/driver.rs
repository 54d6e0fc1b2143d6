use super::segments::{default_segments, CollectContext, Document, Segment, SegmentData};
use super::statusline::StatusLineWriter;
use crate::config::{Config, FailurePolicy};
use crate::source::SourceReader;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Paces the loop. Returning `false` stops it.
pub trait Ticker {
    fn wait(&mut self) -> bool;
}

/// Sleeps a fixed interval after each cycle, so the real period is the
/// interval plus however long the cycle blocked.
pub struct SleepTicker {
    interval: Duration,
}

impl SleepTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for SleepTicker {
    fn wait(&mut self) -> bool {
        thread::sleep(self.interval);
        true
    }
}

/// Stops after the first cycle.
pub struct OnceTicker;

impl Ticker for OnceTicker {
    fn wait(&mut self) -> bool {
        false
    }
}

pub struct Driver<'a, W: Write> {
    config: &'a Config,
    reader: &'a dyn SourceReader,
    segments: Vec<Box<dyn Segment>>,
    writer: StatusLineWriter<W>,
    cycles: u64,
}

impl<'a, W: Write> Driver<'a, W> {
    pub fn new(config: &'a Config, reader: &'a dyn SourceReader, out: W) -> Self {
        Self {
            config,
            reader,
            segments: default_segments(config),
            writer: StatusLineWriter::new(out),
            cycles: 0,
        }
    }

    /// Collects every segment in display order.
    pub fn collect(&self, now: DateTime<Local>) -> Result<Document> {
        let ctx = CollectContext {
            config: self.config,
            reader: self.reader,
            now,
        };

        let mut segments = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            let id = segment.id();
            match segment.collect(&ctx) {
                Ok(data) => segments.push(data),
                Err(e) if self.config.failure_policy == FailurePolicy::Isolate => {
                    tracing::warn!(segment = %id.label(), error = %e, "segment failed");
                    segments.push(SegmentData::failed(&id, self.config));
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("{} segment failed", id.label()));
                }
            }
        }
        Ok(Document::new(segments))
    }

    /// One full cycle: collect, then emit.
    pub fn cycle(&mut self, now: DateTime<Local>) -> Result<()> {
        let document = self.collect(now)?;
        self.writer
            .emit(&document)
            .context("failed to write status line")?;
        self.cycles += 1;
        tracing::debug!(cycle = self.cycles, segments = document.len(), "emitted");
        Ok(())
    }

    /// Writes the header, then cycles until the ticker stops or a cycle fails.
    pub fn run(&mut self, ticker: &mut dyn Ticker) -> Result<()> {
        self.writer
            .write_header()
            .context("failed to write protocol header")?;
        loop {
            self.cycle(Local::now())?;
            if !ticker.wait() {
                return Ok(());
            }
        }
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn into_output(self) -> W {
        self.writer.into_inner()
    }
}
