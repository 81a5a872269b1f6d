use anyhow::Result;

use crate::summary;

pub fn run() -> Result<()> {
    summary::print_presets(cropdeck_core::preset::catalog());
    Ok(())
}
