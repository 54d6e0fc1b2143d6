use barstatus::cli::Cli;
use barstatus::config::Config;
use barstatus::core::{Driver, OnceTicker, SleepTicker, Ticker};
use barstatus::logging;
use barstatus::source::{system::missing_helpers, SystemReader};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    let config = Config::default();
    tracing::info!(
        interval_ms = config.interval.as_millis() as u64,
        policy = ?config.failure_policy,
        "starting"
    );

    for program in missing_helpers(config.helpers.all()) {
        tracing::warn!(program, "helper not found on PATH");
    }

    let reader = SystemReader::new();
    let stdout = io::stdout();
    let mut driver = Driver::new(&config, &reader, stdout.lock());

    let mut ticker: Box<dyn Ticker> = if cli.once {
        Box::new(OnceTicker)
    } else {
        Box::new(SleepTicker::new(config.interval))
    };

    // Any segment error that escapes the policy ends the process here.
    if let Err(e) = driver.run(ticker.as_mut()) {
        tracing::error!("status loop stopped: {:#}", e);
        return Err(e);
    }
    Ok(())
}
