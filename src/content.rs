use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| Portfolio::from_assets(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse content: {0}")]
    Parse(String),
    #[error("Experience timeline is empty")]
    EmptyTimeline,
    #[error("Invalid accent color {color:?} for {company}")]
    InvalidColor { company: String, color: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub tagline_accent: String,
    pub pitch: String,
    pub about_title: String,
    pub about_paragraphs: Vec<String>,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub resume: String,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    pub color: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub skills: Vec<String>,
}

impl ExperienceEntry {
    /// Accent color with a low alpha channel appended, used for chip backgrounds.
    pub fn tint(&self) -> String {
        format!("{}15", self.color)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub program: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Everything the page renders. Loaded once, then shared by `&'static` reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub stats: Vec<Stat>,
    pub experiences: Vec<ExperienceEntry>,
    pub skills: Vec<SkillGroup>,
    pub education: Vec<Education>,
    pub achievements: Vec<Achievement>,
}

impl Portfolio {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn from_assets(name: &str) -> Result<Self, ContentError> {
        let file = Assets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
        let raw =
            std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::parse(raw)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.experiences.is_empty() {
            return Err(ContentError::EmptyTimeline);
        }
        if let Some(bad) = self.experiences.iter().find(|e| !is_hex_color(&e.color)) {
            return Err(ContentError::InvalidColor {
                company: bad.company.clone(),
                color: bad.color.clone(),
            });
        }
        Ok(())
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(company: &str, color: &str) -> serde_json::Value {
        serde_json::json!({
            "company": company,
            "role": "Engineer",
            "period": "2020 - 2021",
            "color": color,
            "description": "desc",
            "highlights": ["one"],
            "skills": ["Rust"]
        })
    }

    fn document(experiences: Vec<serde_json::Value>) -> String {
        serde_json::json!({
            "profile": {
                "name": "Test Person",
                "headline": "Engineer",
                "tagline": "Building things that",
                "tagline_accent": "work",
                "pitch": "pitch",
                "about_title": "about",
                "about_paragraphs": ["p1"],
                "email": "test@example.com",
                "github": "https://github.com/test",
                "linkedin": "https://linkedin.com/in/test",
                "resume": "/cv.pdf"
            },
            "stats": [],
            "experiences": experiences,
            "skills": [],
            "education": [],
            "achievements": []
        })
        .to_string()
    }

    #[test]
    fn test_embedded_portfolio_loads() {
        let portfolio = portfolio().expect("embedded content should be valid");
        assert_eq!(portfolio.profile.name, "Peter Liang");
        assert_eq!(portfolio.experiences.len(), 3);
        assert_eq!(portfolio.experiences[0].company, "bri3f.ai");
        assert_eq!(portfolio.experiences[1].company, "Constantinople");
        assert_eq!(portfolio.experiences[2].company, "Accenture");
        assert_eq!(portfolio.skills.len(), 4);
        assert_eq!(portfolio.stats.len(), 4);
        assert_eq!(portfolio.education.len(), 2);
        assert_eq!(portfolio.achievements.len(), 3);
    }

    #[test]
    fn test_embedded_portfolio_is_shared() {
        let a = portfolio().unwrap();
        let b = portfolio().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_empty_timeline_rejected() {
        let res = Portfolio::parse(&document(vec![]));
        assert_eq!(res, Err(ContentError::EmptyTimeline));
    }

    #[test]
    fn test_invalid_color_rejected() {
        let res = Portfolio::parse(&document(vec![
            entry("Good", "#1a73e8"),
            entry("Bad", "blue"),
        ]));
        assert_eq!(
            res,
            Err(ContentError::InvalidColor {
                company: "Bad".to_string(),
                color: "blue".to_string(),
            })
        );
    }

    #[test]
    fn test_malformed_json_rejected() {
        let res = Portfolio::parse("{ \"profile\": ");
        assert!(matches!(res, Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_tint_and_mailto() {
        let portfolio = Portfolio::parse(&document(vec![entry("Co", "#34a853")])).unwrap();
        assert_eq!(portfolio.experiences[0].tint(), "#34a85315");
        assert_eq!(portfolio.profile.mailto(), "mailto:test@example.com");
    }
}
