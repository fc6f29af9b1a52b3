use serde::{Deserialize, Serialize};

/// Theme colors as reported by the host. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeParams {
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub hint_color: Option<String>,
    #[serde(default)]
    pub link_color: Option<String>,
    #[serde(default)]
    pub button_color: Option<String>,
    #[serde(default)]
    pub button_text_color: Option<String>,
    #[serde(default)]
    pub secondary_bg_color: Option<String>,
}

impl ThemeParams {
    pub fn light() -> Self {
        Self {
            bg_color: Some("#ffffff".into()),
            text_color: Some("#000000".into()),
            hint_color: Some("#999999".into()),
            link_color: Some("#2481cc".into()),
            button_color: Some("#2481cc".into()),
            button_text_color: Some("#ffffff".into()),
            secondary_bg_color: Some("#f0f0f0".into()),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg_color: Some("#212121".into()),
            text_color: Some("#ffffff".into()),
            hint_color: Some("#aaaaaa".into()),
            link_color: Some("#8774e1".into()),
            button_color: Some("#8774e1".into()),
            button_text_color: Some("#ffffff".into()),
            secondary_bg_color: Some("#0f0f0f".into()),
        }
    }
}

/// Presentation variables derived from [`ThemeParams`].
///
/// Every slot is filled: missing theme colors fall back to the light defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub bg: String,
    pub text: String,
    pub hint: String,
    pub link: String,
    pub button: String,
    pub button_text: String,
    pub secondary_bg: String,
}

impl Palette {
    pub fn from_params(params: &ThemeParams) -> Self {
        let defaults = Self::default();
        let pick = |value: &Option<String>, fallback: String| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(fallback)
        };

        Self {
            bg: pick(&params.bg_color, defaults.bg),
            text: pick(&params.text_color, defaults.text),
            hint: pick(&params.hint_color, defaults.hint),
            link: pick(&params.link_color, defaults.link),
            button: pick(&params.button_color, defaults.button),
            button_text: pick(&params.button_text_color, defaults.button_text),
            secondary_bg: pick(&params.secondary_bg_color, defaults.secondary_bg),
        }
    }

    /// Named presentation variables, in a stable order.
    pub fn variables(&self) -> [(&'static str, &str); 7] {
        [
            ("--bg-color", &self.bg),
            ("--text-color", &self.text),
            ("--hint-color", &self.hint),
            ("--link-color", &self.link),
            ("--button-color", &self.button),
            ("--button-text-color", &self.button_text),
            ("--secondary-bg-color", &self.secondary_bg),
        ]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bg: "#ffffff".to_string(),
            text: "#000000".to_string(),
            hint: "#999999".to_string(),
            link: "#2481cc".to_string(),
            button: "#2481cc".to_string(),
            button_text: "#ffffff".to_string(),
            secondary_bg: "#f0f0f0".to_string(),
        }
    }
}
