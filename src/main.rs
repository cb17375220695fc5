//! Epicycles - redraw vector outlines with chained rotating vectors
//!
//! Each axis of the sampled outline is decomposed into frequency components;
//! the animation sums them as epicycles, alternating a combined two-chain
//! view with an interleaved single-chain view.

use clap::Parser;
use log::{error, info};

use epicycles::app::App;
use epicycles::cli::Args;
use epicycles::error::Result;
use epicycles::fourier::PathSpectrum;
use epicycles::path::sample_contours;

fn run(args: &Args) -> Result<()> {
    let sampling = args.sampling_config();
    sampling.validate()?;

    let contours = args.load_contours()?;
    let points = sample_contours(&contours, sampling.samples_per_contour)?;
    info!(
        "Sampled {} points from {} contours",
        points.len(),
        contours.len()
    );

    let spectrum = PathSpectrum::from_points(&points)?;
    let mut app = App::new(
        spectrum,
        &args.render_config(),
        args.recording_config(),
        args.playback_config(),
    )?;

    let summary = app.run()?;
    info!(
        "Done: {} frames, {} cycles, {} images",
        summary.frames, summary.cycles_completed, summary.images_written
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
