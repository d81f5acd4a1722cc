use std::fmt;

/// Language pack used when recognizing scanned pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OcrLanguage {
    #[default]
    English,
    French,
}

impl OcrLanguage {
    /// Picks the language from a free-text note such as
    /// "Please respond in French.".
    pub fn from_language_note(note: Option<&str>) -> Self {
        let Some(note) = note else {
            return Self::default();
        };

        let lowered = note.to_lowercase();
        if lowered.contains("french") || lowered.contains("français") || lowered.contains("francais")
        {
            Self::French
        } else {
            Self::English
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "eng",
            Self::French => "fra",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::French => "French",
        }
    }
}

impl fmt::Display for OcrLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
