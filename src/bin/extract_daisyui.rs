use theme_harvest::{HarvestConfig, pipeline, report};

fn main() -> theme_harvest::Result<()> {
    let config = HarvestConfig::load()?;
    theme_harvest::init_logging(&config)?;

    let build = pipeline::extract_daisyui(&config)?;
    report::flat_summary(&mut std::io::stdout().lock(), &build.table)?;
    Ok(())
}
