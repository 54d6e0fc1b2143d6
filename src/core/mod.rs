pub mod driver;
pub mod segments;
pub mod statusline;


pub use driver::{Driver, OnceTicker, SleepTicker, Ticker};
pub use segments::{Document, Segment, SegmentData};
pub use statusline::StatusLineWriter;
