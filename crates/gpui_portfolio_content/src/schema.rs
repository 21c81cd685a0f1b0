use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::{ContentError, IconName};

/// Upper bound of a skill level.
pub const MAX_SKILL_LEVEL: u8 = 100;

static BUILTIN: LazyLock<Content> = LazyLock::new(|| {
    Content::from_json(include_str!("../content/default.json"))
        .expect("embedded content/default.json should always be valid")
});

/// Everything the page displays.
///
/// Lists are rendered in the order they appear in the document.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Content {
    /// Identity shown in the hero and footer.
    pub profile: Profile,
    /// Label of the badge shown above the hero title.
    pub availability: String,
    /// Short working-conditions facts shown on the profile card.
    pub facts: Vec<Highlight>,
    /// Tools shown as a grid on the profile card.
    pub toolbox: Vec<Highlight>,
    /// Key strengths shown as badges next to the chart.
    pub strengths: Vec<String>,
    /// Projects gallery.
    pub projects: Vec<Project>,
    /// Bars of the skills chart.
    pub skills: Vec<Skill>,
    /// Timeline entries, most recent first.
    pub experience: Vec<Experience>,
    /// Certification labels.
    pub certifications: Vec<String>,
    /// Quotes from former colleagues.
    pub testimonials: Vec<Testimonial>,
}

impl Content {
    /// The content bundled with the application.
    pub fn builtin() -> &'static Content {
        &BUILTIN
    }

    /// Parses and validates a content document.
    pub fn from_json(json: impl AsRef<str>) -> Result<Content, ContentError> {
        let content: Content = serde_json::from_str(json.as_ref())?;
        content.validate()?;

        tracing::debug!(
            projects = content.projects.len(),
            skills = content.skills.len(),
            experience = content.experience.len(),
            "content loaded"
        );

        Ok(content)
    }

    /// Checks the invariants the page relies on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::EmptyField("name"));
        }

        if self.profile.email.trim().is_empty() {
            return Err(ContentError::EmptyField("email"));
        }

        if let Some(skill) = self
            .skills
            .iter()
            .find(|skill| skill.level > MAX_SKILL_LEVEL)
        {
            return Err(ContentError::SkillLevelOutOfRange {
                name: skill.name.clone(),
                level: skill.level,
            });
        }

        if let Some(idx) = self
            .projects
            .iter()
            .position(|project| project.title.trim().is_empty())
        {
            return Err(ContentError::UntitledProject(idx));
        }

        Ok(())
    }
}

/// Who the page is about.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Profile {
    /// Full name.
    pub name: String,
    /// Job title shown under the name.
    pub title: String,
    /// City and country.
    pub location: String,
    /// Short introduction paragraph.
    pub summary: String,
    /// Asset path of the portrait.
    pub avatar: String,
    /// Recipient of every contact message.
    pub email: String,
    /// GitHub profile URL.
    pub github: String,
    /// LinkedIn profile URL.
    pub linkedin: String,
    /// Link to the downloadable résumé.
    pub cv: String,
    /// Years of experience counter.
    pub years: u32,
    /// Delivered projects counter.
    pub projects_count: u32,
    /// Certifications counter.
    pub certifications: u32,
}

impl Profile {
    /// Initials used when the avatar image can't be shown.
    ///
    /// Takes the first letter of the first two words, upper-cased.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect();

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }

    /// The three hero counters, in display order.
    pub fn counters(&self) -> [Counter; 3] {
        [
            Counter {
                value: format!("{}+", self.years),
                label: "années d'expérience",
            },
            Counter {
                value: self.projects_count.to_string(),
                label: "projets livrés",
            },
            Counter {
                value: self.certifications.to_string(),
                label: "certifications",
            },
        ]
    }
}

/// A value/label pair shown in a hero counter card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    /// Rendered figure, e.g. `4+`.
    pub value: String,
    /// Caption under the figure.
    pub label: &'static str,
}

/// A label paired with an icon.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Highlight {
    #[allow(missing_docs)]
    pub label: String,
    #[allow(missing_docs)]
    pub icon: IconName,
}

/// An entry of the projects gallery.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Project {
    #[allow(missing_docs)]
    pub title: String,
    #[allow(missing_docs)]
    pub description: String,
    /// Technology tags, in display order.
    pub stack: Vec<String>,
    #[allow(missing_docs)]
    pub links: ProjectLinks,
}

/// Outbound links of a project, passed through as written.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProjectLinks {
    /// Source repository.
    pub repo: String,
    /// Live demo.
    pub live: String,
}

/// A named skill and its mastery level.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Skill {
    #[allow(missing_docs)]
    pub name: String,
    /// Mastery from 0 to 100, used for the bar height.
    pub level: u8,
}

/// A position held, shown on the timeline.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[allow(missing_docs)]
pub struct Experience {
    pub company: String,
    pub role: String,
    /// Free text, e.g. `2020 – 2023`.
    pub period: String,
    pub location: String,
    /// Achievements, in display order.
    pub points: Vec<String>,
}

impl Experience {
    /// The "company • location" line under the role.
    pub fn subtitle(&self) -> String {
        format!("{} • {}", self.company, self.location)
    }
}

/// A quote from a former colleague.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[allow(missing_docs)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub text: String,
}

impl Testimonial {
    /// The quote wrapped in typographic quotes.
    pub fn quote(&self) -> String {
        format!("“{}”", self.text)
    }

    /// The "name — role" attribution line.
    pub fn attribution(&self) -> String {
        format!("{} — {}", self.name, self.role)
    }
}
