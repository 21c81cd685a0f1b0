use crate::{MAX_SKILL_LEVEL, Skill};

/// One bar of the skills chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillBar {
    /// Axis label.
    pub label: String,
    /// Level clamped to `0..=100`.
    pub level: u8,
    /// Bar height as a fraction of the chart's plot area.
    pub fraction: f32,
}

impl SkillBar {
    /// Text shown while the bar is hovered.
    pub fn tooltip(&self) -> String {
        format!("{} {}%", self.label, self.level)
    }
}

/// Maps skills to bars, one per skill, in order.
pub fn skill_bars(skills: &[Skill]) -> Vec<SkillBar> {
    skills
        .iter()
        .map(|skill| {
            let level = skill.level.min(MAX_SKILL_LEVEL);
            SkillBar {
                label: skill.name.clone(),
                level,
                fraction: level as f32 / MAX_SKILL_LEVEL as f32,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Content;

    #[test]
    fn test_one_bar_per_skill_in_order() {
        let skills = &Content::builtin().skills;
        let bars = skill_bars(skills);

        assert_eq!(bars.len(), 10);
        for (bar, skill) in bars.iter().zip(skills) {
            assert_eq!(bar.label, skill.name);
            assert_eq!(bar.level, skill.level);
        }
    }

    #[test]
    fn test_fraction_and_clamp() {
        let bars = skill_bars(&[
            Skill { name: "Rust".into(), level: 50 },
            Skill { name: "Overflow".into(), level: 250 },
            Skill { name: "None".into(), level: 0 },
        ]);

        assert_eq!(bars[0].fraction, 0.5);
        assert_eq!(bars[1].level, 100);
        assert_eq!(bars[1].fraction, 1.0);
        assert_eq!(bars[2].fraction, 0.0);
    }

    #[test]
    fn test_tooltip() {
        let bars = skill_bars(&Content::builtin().skills);
        assert_eq!(bars[0].tooltip(), ".NET / C# 95%");
    }

    #[test]
    fn test_empty_skills() {
        assert!(skill_bars(&[]).is_empty());
    }
}
