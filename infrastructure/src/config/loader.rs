//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ANTHROPIC_API_KEY` / `OPENAI_API_KEY`
    /// 2. `SCOUT_*` environment variables (e.g. `SCOUT_RESEARCH__MAX_RESEARCH_TOKENS`)
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./scout.toml` or `./.scout.toml`
    /// 5. XDG config: `~/.config/note-scout/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        // Add project-level config files (check both names)
        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Environment overrides
        figment = figment.merge(Env::prefixed("SCOUT_").split("__"));

        let mut config: FileConfig = figment.extract().map_err(Box::new)?;

        // Provider keys come from their conventional variables
        if let Ok(key) = std::env::var("ANTHROPIC_API_KEY") {
            config.providers.anthropic_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            config.providers.openai_api_key = Some(key);
        }

        Ok(config)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("note-scout").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["scout.toml", ".scout.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_any_file() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.research.max_research_tokens, 800);
        assert_eq!(config.providers.contrast_model, "gpt-4o-mini");
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scout.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[research]\nmax_research_tokens = 400\n\n[providers]\nanalysis_model = \"test-model\""
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.research.max_research_tokens, 400);
        assert_eq!(config.providers.analysis_model, "test-model");
        // Untouched sections keep their defaults
        assert_eq!(config.research.max_synthesis_tokens, 2000);
    }
}
