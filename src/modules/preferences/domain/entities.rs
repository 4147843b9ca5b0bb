use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Light and dark swap; following the system switches to dark.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
            Theme::System => Theme::Dark,
        }
    }
}

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UiPreferences {
    #[serde(default)]
    pub theme: Theme,
    pub language: String,
    #[serde(default)]
    pub sidebar_collapsed: bool,
    #[serde(default)]
    pub reduced_motion: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            language: DEFAULT_LANGUAGE.to_string(),
            sidebar_collapsed: false,
            reduced_motion: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiPreferencesPatch {
    pub theme: Option<Theme>,
    pub language: Option<String>,
    pub sidebar_collapsed: Option<bool>,
    pub reduced_motion: Option<bool>,
}

impl UiPreferencesPatch {
    pub fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.language.is_none()
            && self.sidebar_collapsed.is_none()
            && self.reduced_motion.is_none()
    }

    pub fn apply(self, prefs: &mut UiPreferences) {
        if let Some(theme) = self.theme {
            prefs.theme = theme;
        }
        if let Some(language) = self.language {
            prefs.language = language;
        }
        if let Some(collapsed) = self.sidebar_collapsed {
            prefs.sidebar_collapsed = collapsed;
        }
        if let Some(reduced) = self.reduced_motion {
            prefs.reduced_motion = reduced;
        }
    }
}
