use thiserror::Error;

/// Reasons a content document can be refused.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The document is not valid JSON or does not match the schema.
    #[error("could not parse content: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required profile field is empty.
    #[error("profile field `{0}` must not be empty")]
    EmptyField(&'static str),

    /// A skill level falls outside the displayable range.
    #[error("skill `{name}` has level {level}, expected 0..=100")]
    SkillLevelOutOfRange {
        /// Name of the offending skill.
        name: String,
        /// The level found in the document.
        level: u8,
    },

    /// A project has a blank title.
    #[error("project #{0} has no title")]
    UntitledProject(usize),
}
