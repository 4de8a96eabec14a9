use clap::Parser;
use rand::rngs::OsRng;
use std::{io::IsTerminal, process};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use year_progress::{
    bar::{render_monochrome_bar, render_progress_bar},
    error::ProgressError,
    models::palette::Palette,
    parser::load_palette,
    progress::Moment,
    ui::{
        cli::{Args, resolve_config_path},
        output::{format_json, format_percentage, format_progress_line, resolve_color_setting},
    },
};

fn main() {
    init_tracing();

    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ProgressError> {
    let moment = args.date.unwrap_or_else(Moment::now);
    let progress = moment.year_progress()?;

    if args.percentage {
        println!("{}", format_percentage(progress));
        return Ok(());
    }

    if args.json {
        println!("{}", format_json(progress));
        return Ok(());
    }

    let bar = if resolve_color_setting(args.force_color, args.no_color) {
        let config_path = resolve_config_path(args);
        let load = load_palette(&config_path, Palette::default());
        if let Some(err) = load.diagnostic() {
            let cause = std::error::Error::source(err)
                .map(ToString::to_string)
                .unwrap_or_default();
            warn!(error = %err, cause = %cause, "using default colors");
        }
        render_progress_bar(progress, args.length, &load.palette, &mut OsRng)
    } else {
        render_monochrome_bar(progress, args.length)
    };

    println!("{}", format_progress_line(progress, &bar));
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}
