use ratatui_props::page::Page;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_scrollbar: bool,

    /// Replaces the marker of every list on the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_marker: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_scrollbar: true,
            list_marker: None,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub ui: UiConfig,

    /// Page content; the built-in showcase when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,
}

impl DemoConfig {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ratatui-props").join("config.toml"))
    }

    /// Loads the default config file. A missing file (or config dir) means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = Self::config_path() else {
            tracing::debug!("no config directory, using defaults");
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content, path)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The page to show, with UI overrides applied.
    pub fn page(&self) -> Page {
        let mut page = self.page.clone().unwrap_or_else(Page::showcase);
        if let Some(marker) = &self.ui.list_marker {
            page.set_list_marker(marker);
        }
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui_props::alert::AlertBox;
    use ratatui_props::list::ListRenderer;
    use ratatui_props::page::Section;
    use ratatui_props::user_card::UserCard;

    fn parse(s: &str) -> Result<DemoConfig, ConfigError> {
        DemoConfig::parse(s, Path::new("test.toml"))
    }

    #[test]
    fn empty_config_uses_showcase() {
        let config = parse("").expect("parse");
        assert!(config.ui.show_scrollbar);
        assert_eq!(config.page(), Page::showcase());
    }

    #[test]
    fn page_sections_are_tagged_by_kind() {
        let config = parse(
            r#"
[ui]
show_scrollbar = false

[[page.sections]]
kind = "title"
text = "Team"

[[page.sections]]
kind = "user_card"
name = "Ann"
email = "ann@example.com"
role = "Owner"

[[page.sections]]
kind = "divider"

[[page.sections]]
kind = "list"
items = ["a", "b"]

[[page.sections]]
kind = "alert"
message = "Heads up"
color = "orange"
"#,
        )
        .expect("parse");

        assert!(!config.ui.show_scrollbar);
        assert_eq!(
            config.page().sections,
            vec![
                Section::title("Team"),
                Section::UserCard(UserCard::new("Ann", "ann@example.com", "Owner")),
                Section::Divider,
                Section::List(ListRenderer::new(["a", "b"])),
                Section::Alert(AlertBox::new("Heads up", "orange")),
            ]
        );
    }

    #[test]
    fn list_marker_override_applies_to_page() {
        let config = parse("[ui]\nlist_marker = \"* \"\n").expect("parse");
        let page = config.page();
        let list = page
            .sections
            .iter()
            .find_map(|s| match s {
                Section::List(list) => Some(list),
                _ => None,
            })
            .expect("list section");
        assert_eq!(list.rows()[0].value, "* Apple");
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let err = parse("ui = 3").expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("test.toml"));
    }

    #[test]
    fn missing_explicit_file_is_a_read_error() {
        let err = DemoConfig::load_from(Path::new("/definitely/not/here.toml"))
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
