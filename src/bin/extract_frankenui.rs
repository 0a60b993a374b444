use theme_harvest::{HarvestConfig, pipeline, report};

fn main() -> theme_harvest::Result<()> {
    let config = HarvestConfig::load()?;
    theme_harvest::init_logging(&config)?;

    let table = pipeline::extract_frankenui(&config)?;
    report::modal_summary(&mut std::io::stdout().lock(), &table)?;
    Ok(())
}
