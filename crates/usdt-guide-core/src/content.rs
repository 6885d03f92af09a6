//! Static page content.
//!
//! Every string shown on the page lives in one JSON document. The built-in
//! document is embedded at compile time; a replacement can be loaded from
//! disk. Content is parsed once at startup and never mutated afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GuideError, Result};
use crate::section::ActiveSection;

const BUILTIN_CONTENT: &str = include_str!("../content/guide.json");

/// Reference to a screenshot illustrating a step.
///
/// When `url` is absent the page shows a textual placeholder with the caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One numbered instructional step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepContent {
    pub number: u32,
    pub title: String,
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

/// A walkthrough made of numbered steps (desktop or mobile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepGuide {
    pub tab_label: String,
    pub title: String,
    pub steps: Vec<StepContent>,
}

/// What a final payment step asks the user to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Copy,
    Upload,
    Complete,
}

impl PaymentKind {
    /// The closing step is highlighted as a success.
    pub fn is_success(&self) -> bool {
        matches!(self, PaymentKind::Complete)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStep {
    pub title: String,
    pub description: String,
    pub image: ImageRef,
    pub kind: PaymentKind,
}

/// Deposit notes: key points, network restrictions and the payment steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesContent {
    pub tab_label: String,
    pub title: String,
    pub key_points_heading: String,
    pub key_points: Vec<String>,
    pub restrictions_heading: String,
    pub restrictions_lead: String,
    pub accepted_networks: Vec<String>,
    pub warning: String,
    pub payment_heading: String,
    pub payment_steps: Vec<PaymentStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub badge_title: String,
    pub highlight_title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    pub mark: String,
    pub name: String,
    pub tagline: String,
    pub links: Vec<String>,
    pub company: String,
}

/// The whole page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideContent {
    pub hero: HeroContent,
    pub desktop: StepGuide,
    pub mobile: StepGuide,
    pub notes: NotesContent,
    pub footer: FooterContent,
}

impl GuideContent {
    /// Parse and validate the content embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CONTENT)
    }

    /// Parse and validate a JSON content document.
    pub fn from_json(json: &str) -> Result<Self> {
        let content: GuideContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Read, parse and validate a content document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let content = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), "Loaded guide content");
        Ok(content)
    }

    /// Built-in content, or the document at `path` when given.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Document title, e.g. `USDT 線上入金渠道說明`.
    pub fn page_title(&self) -> String {
        format!("{}{}", self.hero.badge_title, self.hero.highlight_title)
    }

    /// Step walkthrough for the desktop or mobile section. `None` for notes.
    pub fn step_guide(&self, section: ActiveSection) -> Option<&StepGuide> {
        match section {
            ActiveSection::Desktop => Some(&self.desktop),
            ActiveSection::Mobile => Some(&self.mobile),
            ActiveSection::Notes => None,
        }
    }

    pub fn tab_label(&self, section: ActiveSection) -> &str {
        match section {
            ActiveSection::Desktop => &self.desktop.tab_label,
            ActiveSection::Mobile => &self.mobile.tab_label,
            ActiveSection::Notes => &self.notes.tab_label,
        }
    }

    pub fn section_title(&self, section: ActiveSection) -> &str {
        match section {
            ActiveSection::Desktop => &self.desktop.title,
            ActiveSection::Mobile => &self.mobile.title,
            ActiveSection::Notes => &self.notes.title,
        }
    }

    /// Check the structural rules the page relies on.
    pub fn validate(&self) -> Result<()> {
        for section in [ActiveSection::Desktop, ActiveSection::Mobile] {
            if let Some(guide) = self.step_guide(section) {
                validate_steps(section, guide)?;
            }
        }

        if self.notes.accepted_networks.is_empty() {
            return Err(GuideError::IncompleteNotes(
                "no accepted networks".to_string(),
            ));
        }
        if self.notes.warning.trim().is_empty() {
            return Err(GuideError::IncompleteNotes("empty warning".to_string()));
        }
        for step in &self.notes.payment_steps {
            validate_image(&step.image)?;
        }

        Ok(())
    }
}

fn validate_steps(section: ActiveSection, guide: &StepGuide) -> Result<()> {
    if guide.steps.is_empty() {
        return Err(GuideError::EmptySection(section));
    }

    for (index, step) in guide.steps.iter().enumerate() {
        let position = index + 1;
        if step.number as usize != position {
            return Err(GuideError::StepOrder {
                section,
                position,
                found: step.number,
            });
        }
        if step.items.is_empty() {
            return Err(GuideError::EmptyStep {
                section,
                number: step.number,
            });
        }
        if let Some(image) = &step.image {
            validate_image(image)?;
        }
    }

    Ok(())
}

fn validate_image(image: &ImageRef) -> Result<()> {
    match &image.url {
        Some(url) if !(url.starts_with("https://") || url.starts_with("http://")) => {
            Err(GuideError::InvalidImageUrl(url.clone()))
        }
        _ => Ok(()),
    }
}
