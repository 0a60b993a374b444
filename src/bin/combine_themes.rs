use theme_harvest::{HarvestConfig, pipeline, report};

fn main() -> theme_harvest::Result<()> {
    let config = HarvestConfig::load()?;
    theme_harvest::init_logging(&config)?;

    let document = pipeline::combine(&config)?;
    report::combined_summary(
        &mut std::io::stdout().lock(),
        &config.combined_output,
        &document,
    )?;
    Ok(())
}
