use std::fs;
use std::path::Path;

use crate::cli::commands::InitArgs;
use crate::io::backend::{COMPLETED_KEY, NOTES_KEY};
use crate::io::config_io::{CONFIG_FILE, DIR_NAME};

const CONFIG_TEMPLATE: &str = "\
[planner]
# Plan shown on startup: calendar, chronological, or nt90
default_plan = \"calendar\"
# Open the calendar on today's Ethiopian month
follow_today = true

[ui]
show_key_hints = true

# Override theme colors with hex values, e.g.:
# [ui.colors]
# completed = \"#50fa7b\"
# accent = \"#bd93f9\"
";

/// Create the lectio directory with a config template and empty storage.
pub fn cmd_init(args: InitArgs, dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let base = match dir {
        Some(d) => Path::new(d).to_path_buf(),
        None => std::env::current_dir()?,
    };
    let target = base.join(DIR_NAME);

    if target.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to reinitialize)",
            target.display()
        )
        .into());
    }

    fs::create_dir_all(&target)?;
    fs::write(target.join(CONFIG_FILE), CONFIG_TEMPLATE)?;
    fs::write(target.join(format!("{}.json", COMPLETED_KEY)), "[]")?;
    fs::write(target.join(format!("{}.json", NOTES_KEY)), "{}")?;

    println!("initialized {}", target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_args(force: bool) -> InitArgs {
        InitArgs { force }
    }

    #[test]
    fn creates_directory_and_files() {
        let tmp = TempDir::new().unwrap();
        cmd_init(init_args(false), Some(tmp.path().to_str().unwrap())).unwrap();

        let dir = tmp.path().join(DIR_NAME);
        assert!(dir.join(CONFIG_FILE).exists());
        assert_eq!(
            fs::read_to_string(dir.join("completedReadings.json")).unwrap(),
            "[]"
        );
        assert_eq!(
            fs::read_to_string(dir.join("readingNotes.json")).unwrap(),
            "{}"
        );

        // Template must parse as valid config
        let config = crate::io::config_io::load_config(&dir).unwrap();
        assert_eq!(config.planner.default_plan, "calendar");
        assert!(config.planner.follow_today);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().to_str().unwrap().to_string();
        cmd_init(init_args(false), Some(&path)).unwrap();
        assert!(cmd_init(init_args(false), Some(&path)).is_err());
        cmd_init(init_args(true), Some(&path)).unwrap();
    }
}
