#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

/// Visual markers available to content and sections.
///
/// Each variant maps to exactly one bundled SVG; use `asset_path()` to
/// resolve it.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[func(pub fn asset_path(&self) -> &'static str)]
#[serde(rename_all = "snake_case")]
pub enum IconName {
    #[assoc(asset_path = "icons/code.svg")]
    Code,
    #[assoc(asset_path = "icons/terminal.svg")]
    Terminal,
    #[assoc(asset_path = "icons/layout_template.svg")]
    LayoutTemplate,
    #[assoc(asset_path = "icons/spline_pointer.svg")]
    SplinePointer,
    #[assoc(asset_path = "icons/git_branch.svg")]
    GitBranch,
    #[assoc(asset_path = "icons/brain_circuit.svg")]
    BrainCircuit,
    #[assoc(asset_path = "icons/map_pin.svg")]
    MapPin,
    #[assoc(asset_path = "icons/briefcase.svg")]
    Briefcase,
    #[assoc(asset_path = "icons/calendar.svg")]
    Calendar,
    #[assoc(asset_path = "icons/rocket.svg")]
    Rocket,
    #[assoc(asset_path = "icons/mail.svg")]
    Mail,
    #[assoc(asset_path = "icons/github.svg")]
    Github,
    #[assoc(asset_path = "icons/linkedin.svg")]
    Linkedin,
    #[assoc(asset_path = "icons/download.svg")]
    Download,
    #[assoc(asset_path = "icons/external_link.svg")]
    ExternalLink,
    #[assoc(asset_path = "icons/chevron_right.svg")]
    ChevronRight,
    #[assoc(asset_path = "icons/sun.svg")]
    Sun,
    #[assoc(asset_path = "icons/moon.svg")]
    Moon,
}

impl IconName {
    /// Every icon, in declaration order.
    pub const ALL: [IconName; 18] = [
        IconName::Code,
        IconName::Terminal,
        IconName::LayoutTemplate,
        IconName::SplinePointer,
        IconName::GitBranch,
        IconName::BrainCircuit,
        IconName::MapPin,
        IconName::Briefcase,
        IconName::Calendar,
        IconName::Rocket,
        IconName::Mail,
        IconName::Github,
        IconName::Linkedin,
        IconName::Download,
        IconName::ExternalLink,
        IconName::ChevronRight,
        IconName::Sun,
        IconName::Moon,
    ];
}
