//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix for environment overrides, e.g. `FOLIO_CONTACT_API__ENDPOINT`
pub const ENV_PREFIX: &str = "FOLIO_CONTACT_";

const PROJECT_CONFIG_FILES: [&str; 2] = ["folio-contact.toml", ".folio-contact.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `FOLIO_CONTACT_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./folio-contact.toml` or `./.folio-contact.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/folio-contact/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            debug!("Loading project config {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            debug!("Loading explicit config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment).extract().map_err(Box::new)
    }

    /// Defaults plus environment, no files (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        let figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        Self::with_env(figment).extract().map_err(Box::new)
    }

    fn with_env(figment: Figment) -> Figment {
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/folio-contact/config.toml if set,
    /// otherwise the platform's config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio-contact").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(Path::new)
            .find(|p| p.exists())
            .map(Path::to_path_buf)
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Environment: {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = config_path {
            let marker = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", marker, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./folio-contact.toml or ./.folio-contact.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_global_config_path_names_the_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("folio-contact"));
        }
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "folio-contact.toml",
                r#"
[api]
endpoint = "https://api.example.com/contact"

[contact]
source = "example.com"
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.api.endpoint, "https://api.example.com/contact");
            assert_eq!(config.contact.source, "example.com");
            assert_eq!(
                config.contact.send_to_email,
                FileConfig::default().contact.send_to_email
            );
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".folio-contact.toml", "[api]\ntimeout_seconds = 10\n")?;
            jail.create_file("custom.toml", "[api]\ntimeout_seconds = 3\n")?;

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.api.timeout_seconds, 3);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("folio-contact.toml", "[api]\nbearer_token = \"from-file\"\n")?;
            jail.set_env("FOLIO_CONTACT_API__BEARER_TOKEN", "from-env");
            jail.set_env("FOLIO_CONTACT_CONTACT__SEND_TO_EMAIL", "env@example.com");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.api.bearer_token, "from-env");
            assert_eq!(config.contact.send_to_email, "env@example.com");
            Ok(())
        });
    }

    #[test]
    fn test_without_files_ignores_project_file_but_reads_env() {
        Jail::expect_with(|jail| {
            jail.create_file("folio-contact.toml", "[contact]\nsource = \"from-file\"\n")?;
            jail.set_env("FOLIO_CONTACT_API__TIMEOUT_SECONDS", "7");

            let config = ConfigLoader::load_without_files().map_err(|e| *e)?;
            assert_eq!(config.contact.source, FileConfig::default().contact.source);
            assert_eq!(config.api.timeout_seconds, 7);
            Ok(())
        });
    }
}
