use tracing::info;
use work_estimator::config::default_work_estimator_config;

use super::DefaultsArgs;

/// Print the built-in defaults in the requested format.
pub fn execute(args: &DefaultsArgs) -> anyhow::Result<()> {
    info!(format = ?args.format, "rendering default work estimator config");

    let rendered = default_work_estimator_config().render(args.format.into())?;
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
    Ok(())
}
