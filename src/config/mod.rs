//! Compile-time configuration.
//!
//! There is no config file: `Config::default()` is built once at start-up and
//! handed by reference to every segment.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Solarized accents used across segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub blue: &'static str,
    pub green: &'static str,
    pub orange: &'static str,
    pub red: &'static str,
    pub yellow: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            blue: "#268bd2",
            green: "#859900",
            orange: "#cb4b16",
            red: "#dc322f",
            yellow: "#b58900",
        }
    }
}

/// Named palette entry, resolved against a [`Palette`] at format time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    Blue,
    Green,
    Orange,
    Red,
    Yellow,
}

impl Palette {
    pub fn get(&self, color: PaletteColor) -> &'static str {
        match color {
            PaletteColor::Blue => self.blue,
            PaletteColor::Green => self.green,
            PaletteColor::Orange => self.orange,
            PaletteColor::Red => self.red,
            PaletteColor::Yellow => self.yellow,
        }
    }
}

/// An external helper program and its fixed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl HelperCommand {
    pub const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

impl fmt::Display for HelperCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperCommands {
    pub network: HelperCommand,
    pub audio: HelperCommand,
    pub layout: HelperCommand,
    pub brightness: HelperCommand,
}

impl HelperCommands {
    pub fn all(&self) -> [&HelperCommand; 4] {
        [&self.network, &self.audio, &self.layout, &self.brightness]
    }
}

impl Default for HelperCommands {
    fn default() -> Self {
        Self {
            network: HelperCommand::new(
                "nmcli",
                &["-t", "-c", "no", "-f", "active,ssid,signal", "dev", "wifi"],
            ),
            audio: HelperCommand::new("pactl", &["list", "sinks"]),
            layout: HelperCommand::new("xkblayout", &[]),
            brightness: HelperCommand::new("brightness", &["get"]),
        }
    }
}

/// What the loop does when a single segment fails to collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// The error ends the loop and the process.
    #[default]
    Abort,
    /// The failing slot is replaced by a placeholder and the loop keeps going.
    Isolate,
}

/// Identifies a slot in the status line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SegmentId {
    Network,
    Battery(String),
    Charging,
    Brightness,
    Audio,
    Layout,
    Clock,
}

impl SegmentId {
    /// Short label used in placeholders and log lines.
    pub fn label(&self) -> String {
        match self {
            SegmentId::Network => "wifi".to_string(),
            SegmentId::Battery(name) => name.clone(),
            SegmentId::Charging => "ac".to_string(),
            SegmentId::Brightness => "brightness".to_string(),
            SegmentId::Audio => "audio".to_string(),
            SegmentId::Layout => "layout".to_string(),
            SegmentId::Clock => "clock".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Pause between the end of one cycle and the start of the next.
    pub interval: Duration,
    /// `separator_block_width` of every segment, in pixels.
    pub separator_width: u32,
    pub palette: Palette,
    /// Root of the power supply class, normally `/sys/class/power_supply`.
    pub power_supply_root: PathBuf,
    /// Batteries shown, in display order.
    pub batteries: Vec<String>,
    /// Power supply directory that exposes the AC `online` flag.
    pub ac_adapter: String,
    pub helpers: HelperCommands,
    pub failure_policy: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            separator_width: 25,
            palette: Palette::default(),
            power_supply_root: PathBuf::from("/sys/class/power_supply"),
            batteries: vec!["bat1".to_string(), "bat0".to_string()],
            ac_adapter: "AC".to_string(),
            helpers: HelperCommands::default(),
            failure_policy: FailurePolicy::Abort,
        }
    }
}

impl Config {
    pub fn battery_dir(&self, name: &str) -> PathBuf {
        self.power_supply_root.join(name.to_uppercase())
    }

    pub fn ac_online_path(&self) -> PathBuf {
        self.power_supply_root.join(&self.ac_adapter).join("online")
    }
}
