use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "barstatus")]
#[command(version, about = "i3bar status generator: wifi, batteries, AC, brightness, volume, layout, clock")]
pub struct Cli {
    /// Emit a single status line and exit
    #[arg(long = "once")]
    pub once: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_endless_quiet_run() {
        let cli = Cli::try_parse_from(["barstatus"]).unwrap();
        assert!(!cli.once);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn once_and_repeated_verbose() {
        let cli = Cli::try_parse_from(["barstatus", "--once", "-vv"]).unwrap();
        assert!(cli.once);
        assert_eq!(cli.verbose, 2);
    }
}
