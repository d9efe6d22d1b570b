use anyhow::Result;

use outage_scan::config::Config;
use outage_scan::scan;

fn main() -> Result<()> {
    scan::run(&Config::default())?;
    Ok(())
}
