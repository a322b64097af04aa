use crate::models::{OcrSettings, UserConfig};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Configuration manager for loading and saving the YAML settings file.
///
/// Manages a single file, `OcrMover Config.yaml`, inside the configuration
/// directory. A missing file yields [`UserConfig::default`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    user_config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory containing configuration files (e.g., "OcrMover Data")
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            user_config_path: config_dir.join("OcrMover Config.yaml"),
            config_dir,
        })
    }

    /// Load the user configuration file.
    ///
    /// # Returns
    /// The loaded UserConfig, or default if file doesn't exist
    pub fn load_user_config(&self) -> Result<UserConfig> {
        if !self.user_config_path.exists() {
            tracing::warn!(
                "User config file not found at {}, using defaults",
                self.user_config_path
            );
            return Ok(UserConfig::default());
        }

        let file_contents = fs::read_to_string(&self.user_config_path)
            .with_context(|| format!("Failed to read user config: {}", self.user_config_path))?;

        let config: UserConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse user config: {}", self.user_config_path))?;

        tracing::info!("Loaded user config from {}", self.user_config_path);
        Ok(config)
    }

    /// Save the user configuration file.
    pub fn save_user_config(&self, config: &UserConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize user config to YAML")?;

        fs::write(&self.user_config_path, yaml_string)
            .with_context(|| format!("Failed to write user config: {}", self.user_config_path))?;

        tracing::info!("Saved user config to {}", self.user_config_path);
        Ok(())
    }

    /// Write the default settings if no settings file exists yet, so users
    /// have something to edit after the first run.
    pub fn ensure_user_config(&self) -> Result<UserConfig> {
        if self.user_config_path.exists() {
            return self.load_user_config();
        }

        let config = UserConfig::default();
        self.save_user_config(&config)?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    pub fn user_config_path(&self) -> &Utf8Path {
        &self.user_config_path
    }
}

/// Resolve the Tesseract language-data directory.
///
/// An explicit `Tessdata Dir` wins. Otherwise debug builds look in the crate
/// root and release builds next to the running executable.
pub fn resolve_tessdata_dir(settings: &OcrSettings) -> Result<Utf8PathBuf> {
    if !settings.tessdata_dir.trim().is_empty() {
        return Ok(Utf8PathBuf::from(settings.tessdata_dir.trim()));
    }

    if cfg!(debug_assertions) {
        return Ok(Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("tessdata"));
    }

    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let exe = Utf8PathBuf::try_from(exe).context("Executable path is not valid UTF-8")?;
    let base = exe
        .parent()
        .map(Utf8Path::to_path_buf)
        .unwrap_or_default();

    Ok(base.join("tessdata"))
}
