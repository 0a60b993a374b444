use theme_harvest::{HarvestConfig, pipeline, report};

fn main() -> theme_harvest::Result<()> {
    let config = HarvestConfig::load()?;
    theme_harvest::init_logging(&config)?;

    let harvest = pipeline::run_all(&config)?;

    let mut out = std::io::stdout().lock();
    report::modal_summary(&mut out, &harvest.frankenui)?;
    report::flat_summary(&mut out, &harvest.daisyui.table)?;
    report::combined_summary(&mut out, &config.combined_output, &harvest.combined)?;
    Ok(())
}
