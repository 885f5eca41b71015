//! Résumé tab selection.

/// Résumé panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResumeTab {
    #[default]
    Experience,
    Skills,
    Education,
    Certifications,
}

impl ResumeTab {
    pub const ALL: [ResumeTab; 4] = [
        Self::Experience,
        Self::Skills,
        Self::Education,
        Self::Certifications,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Certifications => "certifications",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Education => "Education",
            Self::Certifications => "Certifications",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Experience => "💼",
            Self::Skills => "🛠️",
            Self::Education => "🎓",
            Self::Certifications => "📜",
        }
    }

    pub fn from_id(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == value.trim())
    }
}

/// Active résumé panel for one page view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeTabs {
    active: ResumeTab,
}

impl ResumeTabs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ResumeTab {
        self.active
    }

    pub fn select(&mut self, tab: ResumeTab) {
        self.active = tab;
    }

    /// Selects by tab id; unknown ids leave the selection unchanged.
    pub fn select_id(&mut self, id: &str) -> bool {
        match ResumeTab::from_id(id) {
            Some(tab) => {
                self.active = tab;
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self, tab: ResumeTab) -> bool {
        self.active == tab
    }
}
