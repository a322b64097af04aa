use serde::{Deserialize, Serialize};

/// User configuration from OcrMover Config.yaml
///
/// Contains OCR engine settings and console behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(rename = "OCR_Settings", default)]
    pub ocr_settings: OcrSettings,

    #[serde(rename = "Mover_Settings", default)]
    pub mover_settings: MoverSettings,
}

/// Settings handed to the OCR engine at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrSettings {
    /// Tesseract language codes, primary first
    #[serde(rename = "Languages", default = "default_languages")]
    pub languages: Vec<String>,

    /// Language data directory; empty means "next to the executable"
    #[serde(rename = "Tessdata Dir", default)]
    pub tessdata_dir: String,

    #[serde(rename = "Tesseract EXE", default = "default_tesseract_exe")]
    pub tesseract_exe: String,

    #[serde(rename = "Page Segmentation Mode", default)]
    pub page_segmentation_mode: Option<u8>,

    /// Seconds before a Tesseract run is killed; 0 waits forever
    #[serde(rename = "Timeout Seconds", default)]
    pub timeout_secs: u64,
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            tessdata_dir: String::new(),
            tesseract_exe: default_tesseract_exe(),
            page_segmentation_mode: None,
            timeout_secs: 0,
        }
    }
}

impl OcrSettings {
    /// Languages in Tesseract's `-l` form, e.g. `hin+eng`
    pub fn language_arg(&self) -> String {
        self.languages.join("+")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoverSettings {
    #[serde(rename = "Clear After Each File", default = "default_true")]
    pub clear_after_each_file: bool,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,
}

impl Default for MoverSettings {
    fn default() -> Self {
        Self {
            clear_after_each_file: true,
            debug_mode: false,
        }
    }
}

fn default_languages() -> Vec<String> {
    vec!["hin".to_string(), "eng".to_string()]
}

fn default_tesseract_exe() -> String {
    "tesseract".to_string()
}

fn default_true() -> bool {
    true
}
