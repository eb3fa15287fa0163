// crates/course-setup-cli/src/commands/config.rs - Default configuration output
//
// `course-setup --print-config > .course-setup.toml` gives users a starting
// point with every setting documented. It needs no context: the output
// does not depend on any existing file.

use anyhow::Result;
use course_setup_core::config::ConfigManager;

pub fn handle() -> Result<()> {
    print!("{}", ConfigManager::generate_default_config());
    Ok(())
}
