//! Terminal 3x3x3 cube simulator.
//!
//! Scrambles a cube, writes the scramble and its solution to a log file, and
//! then plays the moves back one quarter turn at a time.

mod cli;
mod driver;
mod move_log;
mod prefs;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    color_eyre::install()?;

    // Initialize logging. `RUST_LOG` overrides the default levels.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("speedcube", level)
        .filter_module("cubepuzzle", level)
        .filter_module("cubepuzzle_view", level)
        .parse_default_env()
        .init();

    let prefs = prefs::Preferences::load(args.prefs.as_deref());

    if let Some(subcommand) = args.subcommand {
        return cli::exec(subcommand, &prefs);
    }

    let opts = driver::RunOptions {
        params: cli::scramble_params(args.length.unwrap_or(prefs.scramble_length), args.seed),
        log_file: args.log_file.unwrap_or_else(|| prefs.log_file.clone()),
        instant: args.instant,
        solve: !args.no_solve,
        print_each_move: !args.quiet_net,
        colors: cli::net_colors(&prefs),
    };
    let out = driver::run(&opts, &prefs)?;
    log::info!(
        "Applied {} moves from seed {:?}; solved: {}",
        out.moves_applied,
        out.scrambled.params.seed,
        out.final_state.is_solved(),
    );
    Ok(())
}
