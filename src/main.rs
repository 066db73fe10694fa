use sensor_noise_rs::logger;
use sensor_noise_rs::noise_pipeline::{
    AnalysisConfig, MosaicPattern, NoiseAnalysisPipeline, format_report,
};

use anyhow::Context;
use tracing::info;

const DEFAULT_FRAME_DIR: &str = "./image";
const DEFAULT_FRAME_COUNT: usize = 20;

fn main() -> anyhow::Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let frame_dir = args.next().unwrap_or_else(|| DEFAULT_FRAME_DIR.to_string());
    let frame_count = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid frame count: {arg}"))?,
        None => DEFAULT_FRAME_COUNT,
    };

    info!("Starting sensor noise characterization...");
    info!("Frame directory: {}", frame_dir);
    info!("Frame count: {}", frame_count);

    let config = AnalysisConfig::builder()
        .mosaic_pattern(MosaicPattern::Bggr)
        .build();
    let pipeline = NoiseAnalysisPipeline::new(config);

    let report = pipeline
        .analyze_directory(&frame_dir, frame_count, "png")
        .context("noise characterization failed")?;

    print!("{}", format_report(&report));

    Ok(())
}
