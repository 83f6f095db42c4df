use anyhow::Result;
use clap::Parser;
use text_converter::cli::{self, Cli};
use text_converter::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli::load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("text-converter: error: {e:#}");
            std::process::exit(1);
        }
    };

    // CLI --log-level flag takes highest precedence, then RUST_LOG, then config.
    let rust_log = std::env::var("RUST_LOG").ok();
    let (level, mirror_stderr) = debug::resolve_log_level(
        cli.log_level.map(|l| l.to_level_filter()),
        rust_log.as_deref(),
        config.log_level,
    );
    debug::init_log_bridge(level, mirror_stderr);

    log::info!("Starting text-converter {}", text_converter::VERSION);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result = cli::run(&cli, &config, &mut stdin.lock(), &mut stdout.lock());

    if let Err(ref e) = result {
        log::error!("Command failed: {e:#}");
        eprintln!("text-converter: error: {e:#}");
        std::process::exit(1);
    }
    result
}
