//! Personal details shown on the hero and contact pages

use serde::{Deserialize, Serialize};

use super::ProfileToml;

/// A count-up figure on the hero page ("20+ Projects")
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Caption under the number
    pub label: String,
    /// Target value
    pub value: u32,
    /// Count-up length in seconds
    #[serde(default = "default_stat_secs")]
    pub duration_secs: u64,
}

fn default_stat_secs() -> u64 {
    3
}

/// Who the portfolio is about
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Job title
    pub role: String,
    /// Short introduction
    pub tagline: String,
    /// Public email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// GitHub profile URL (empty = hidden)
    pub github: String,
    /// LinkedIn profile URL (empty = hidden)
    pub linkedin: String,
    /// Technologies shown on the hero page
    pub skills: Vec<String>,
    /// Count-up figures
    pub stats: Vec<Stat>,
}

impl Default for Profile {
    fn default() -> Self {
        let stat = |label: &str, value, duration_secs| Stat {
            label: label.to_string(),
            value,
            duration_secs,
        };
        Self {
            name: "Gustavo".to_string(),
            role: "Software Engineer".to_string(),
            tagline: "Passionate about crafting elegant solutions to complex problems. \
                      With expertise in full-stack development, I specialize in building \
                      modern web applications that combine beautiful design with efficient \
                      functionality."
                .to_string(),
            email: "contact@example.com".to_string(),
            phone: "+1 (234) 567-890".to_string(),
            github: "https://github.com/gustavohoze".to_string(),
            linkedin: String::new(),
            skills: ["React", "TypeScript", "Node.js", "Next.js", "Python", "AWS"]
                .into_iter()
                .map(String::from)
                .collect(),
            stats: vec![
                stat("Years", 4, 3),
                stat("Projects", 20, 4),
                stat("Tech Stack", 10, 3),
            ],
        }
    }
}

impl Profile {
    pub(super) fn apply_toml(&mut self, toml: ProfileToml) {
        let fields = [
            (&mut self.name, toml.name),
            (&mut self.role, toml.role),
            (&mut self.tagline, toml.tagline),
            (&mut self.email, toml.email),
            (&mut self.phone, toml.phone),
            (&mut self.github, toml.github),
            (&mut self.linkedin, toml.linkedin),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(skills) = toml.skills {
            self.skills = skills;
        }
        if let Some(stats) = toml.stats {
            self.stats = stats;
        }
    }
}
