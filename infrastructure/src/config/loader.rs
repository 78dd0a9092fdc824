//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "ensemble-debates";
const PROJECT_FILES: [&str; 2] = ["debates.toml", ".debates.toml"];
const ENV_PREFIX: &str = "DEBATES_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `DEBATES_` environment variables (`DEBATES_OLLAMA__BASE_URL`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./debates.toml` or `./.debates.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/ensemble-debates/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(Self::global_config_path(), Self::project_config_path(), config_path)
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(
        global: Option<PathBuf>,
        project: Option<PathBuf>,
        explicit: Option<&Path>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// `$XDG_CONFIG_HOME/ensemble-debates/config.toml`, or the platform
    /// equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}* variables", ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:^5}] Explicit: {}", mark, path.display());
        }

        match Self::project_config_path() {
            Some(path) => println!("  [FOUND] Project: {}", path.display()),
            None => println!("  [     ] Project: ./debates.toml or ./.debates.toml"),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.ollama.base_url, "http://localhost:11434");
        assert_eq!(config.experiment.baseline_models.len(), 5);
        assert!(!config.logging.transcript);
    }

    #[test]
    fn test_global_config_path_names_app_dir() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("ensemble-debates"));
            assert!(path.ends_with("config.toml"));
        }
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("debates.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(
            &global,
            "[ollama]\ntimeout_seconds = 10\nbase_url = \"http://global:1\"\n",
        )
        .unwrap();
        fs::write(&project, "[ollama]\nbase_url = \"http://project:2\"\n").unwrap();
        fs::write(&explicit, "[evaluation]\nevaluator_model = \"mistral:7b\"\n").unwrap();

        let config: FileConfig = ConfigLoader::figment(Some(global), Some(project), Some(&explicit))
            .extract()
            .unwrap();

        assert_eq!(config.ollama.timeout_seconds, 10);
        assert_eq!(config.ollama.base_url, "http://project:2");
        assert_eq!(config.evaluation.evaluator_model, "mistral:7b");
        assert_eq!(config.generation.max_tokens, 200);
    }

    #[test]
    fn test_missing_global_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config: FileConfig =
            ConfigLoader::figment(Some(dir.path().join("absent.toml")), None, None)
                .extract()
                .unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("bad.toml");
        fs::write(&explicit, "[ollama\n").unwrap();
        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, None, Some(&explicit)).extract();
        assert!(result.is_err());
    }
}
