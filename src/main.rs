use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};

use progress_table::{
    Args, FixedWidth, ProgressTable, ReplayOptions, StaticCatalog, init_logging,
    load_config_with_fallback, run_replay,
};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_file, args.log_stderr);

    let (mut config, source) = load_config_with_fallback(args.config.as_path())?;
    args.apply_to(&mut config);
    config.validate()?;
    info!(
        "Configuration from {} ({}): refresh {}, toggle {}, final table {}",
        source.as_str(),
        args.config,
        config.display.refresh_interval_ms,
        config.display.toggle_enabled,
        config.display.show_final_table
    );

    let mut catalog = StaticCatalog::builtin();
    if let Some(path) = args.effective_catalog(&config) {
        catalog.extend_from_file(path)?;
    }
    info!("Event catalog has {} events", catalog.len());
    let catalog = Arc::new(catalog);

    let progress = Arc::new(match args.width {
        Some(width) => ProgressTable::with_terminal(catalog, FixedWidth::from(width)),
        None => ProgressTable::new(catalog),
    });

    let stderr_is_terminal = std::io::stderr().is_terminal();
    let draw_live = stderr_is_terminal || args.width.is_some();
    if draw_live && args.log_stderr {
        warn!("Logging to stderr while the table is drawn there; output will interleave");
    }

    let options = ReplayOptions {
        refresh: config.display.refresh_interval_ms.as_duration(),
        toggle_enabled: config.display.toggle_enabled,
        show_final_table: config.display.show_final_table,
        draw_live,
        // Keys come from the terminal, so stdin must not be the data stream
        interactive: stderr_is_terminal
            && std::io::stdin().is_terminal()
            && !args.input.is_stdin(),
        pace: args.pace.map(|pace| pace.as_duration()),
    };

    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let result = rt.block_on(run_replay(progress, &args.input, options));

    // A blocked stdin read cannot be cancelled; do not wait for it
    rt.shutdown_background();

    let report = result?;
    info!("Replay stopped: {:?}", report.stop);
    Ok(())
}
