use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn render(cfg: &Config) -> AppResult<String> {
        serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))
    }

    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open `path` in the requested editor, falling back to $EDITOR/$VISUAL or the platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = Self::default_editor();
        let first = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if matches!(Command::new(&first).arg(path).status(), Ok(s) if s.success()) {
            success(format!("Configuration file edited using '{}'", first));
            return Ok(());
        }

        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            first, default_editor
        ));
        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            _ => Err(AppError::Config(format!(
                "failed to edit {} with '{}'",
                path.display(),
                default_editor
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_config_lists_every_field() {
        let yaml = ConfigLogic::render(&Config::default()).unwrap();
        for key in [
            "database:",
            "default_rate:",
            "default_deduction:",
            "pay_validation: permissive",
            "separator_char:",
        ] {
            assert!(yaml.contains(key), "missing {key} in\n{yaml}");
        }
    }
}
