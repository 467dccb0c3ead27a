//! Generate static files

use anyhow::Result;

use crate::category::Category;
use crate::generator::{BuildSummary, Generator};
use crate::Site;

/// Generate the selected categories and log a summary.
///
/// Item failures are reported in the summary, not returned as errors.
pub fn run(site: &Site, only: &[Category]) -> Result<BuildSummary> {
    let start = std::time::Instant::now();

    let generator = Generator::new(site)?;
    let summary = generator.generate(only);

    let duration = start.elapsed();
    if summary.is_success() {
        tracing::info!("{} in {:.2}s", summary, duration.as_secs_f64());
    } else {
        tracing::warn!("{} in {:.2}s", summary, duration.as_secs_f64());
    }

    Ok(summary)
}
