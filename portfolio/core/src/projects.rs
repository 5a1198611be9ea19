//! Project Showcase
//!
//! Catalog of projects shown on the projects page, plus the category filter
//! and the highlighted entry.

use serde::{Deserialize, Serialize};

/// One showcased project
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier
    pub id: u32,
    /// Display title
    pub title: String,
    /// One-line summary
    pub description: String,
    /// Categories this project is listed under
    #[serde(default)]
    pub categories: Vec<String>,
    /// Where the project lives
    #[serde(default)]
    pub link: String,
    /// Technologies used
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Shown under the `Featured` filter
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Whether this project is listed under `filter`
    #[must_use]
    pub fn matches(&self, filter: &CategoryFilter) -> bool {
        match filter {
            CategoryFilter::All => true,
            CategoryFilter::Featured => self.featured,
            CategoryFilter::Category(name) => self.categories.iter().any(|c| c == name),
        }
    }
}

/// Category bar selection
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Every project
    All,
    /// Only featured projects
    #[default]
    Featured,
    /// Projects listed under a named category
    Category(String),
}

impl CategoryFilter {
    /// Label for the category bar
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Featured => "Featured",
            CategoryFilter::Category(name) => name,
        }
    }
}

fn project(
    id: u32,
    title: &str,
    description: &str,
    categories: &[&str],
    link: &str,
    technologies: &[&str],
    featured: bool,
) -> Project {
    let owned = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect();
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        categories: owned(categories),
        link: link.to_string(),
        technologies: owned(technologies),
        featured,
    }
}

/// The built-in catalog
#[must_use]
pub fn default_catalog() -> Vec<Project> {
    vec![
        project(
            1,
            "Portfolio 2025",
            "Modern portfolio website with theme transitions and interactive components",
            &["Web Development", "UI/UX"],
            "https://github.com/gustavohoze/Portfolio2025",
            &["Next.js", "TypeScript", "Tailwind CSS", "Framer Motion"],
            true,
        ),
        project(
            2,
            "AI Code Assistant",
            "VS Code extension powered by AI to enhance developer productivity",
            &["AI/ML", "Development Tools"],
            "https://github.com/yourusername/ai-assistant",
            &["TypeScript", "Python", "OpenAI API"],
            true,
        ),
        project(
            3,
            "E-commerce Platform",
            "Full-stack e-commerce solution with real-time inventory management",
            &["Web Development", "Full Stack"],
            "https://github.com/yourusername/ecommerce",
            &["Next.js", "Node.js", "MongoDB", "Stripe API"],
            false,
        ),
        project(
            4,
            "Data Visualization Dashboard",
            "Interactive dashboard for complex data visualization and analysis",
            &["Data Science", "Web Development"],
            "https://github.com/yourusername/dashboard",
            &["React", "D3.js", "Python", "FastAPI"],
            false,
        ),
    ]
}

/// Catalog + filter + cursor
#[derive(Clone, Debug)]
pub struct ProjectShowcase {
    catalog: Vec<Project>,
    categories: Vec<CategoryFilter>,
    filter: CategoryFilter,
    cursor: usize,
}

impl Default for ProjectShowcase {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}

impl ProjectShowcase {
    /// Build a showcase over `catalog`, starting on the `Featured` filter
    #[must_use]
    pub fn new(catalog: Vec<Project>) -> Self {
        let mut categories = vec![CategoryFilter::All, CategoryFilter::Featured];
        for name in catalog.iter().flat_map(|p| p.categories.iter()) {
            let filter = CategoryFilter::Category(name.clone());
            if !categories.contains(&filter) {
                categories.push(filter);
            }
        }
        Self {
            catalog,
            categories,
            filter: CategoryFilter::Featured,
            cursor: 0,
        }
    }

    /// Every project, unfiltered
    #[must_use]
    pub fn catalog(&self) -> &[Project] {
        &self.catalog
    }

    /// Category bar entries in display order
    #[must_use]
    pub fn categories(&self) -> &[CategoryFilter] {
        &self.categories
    }

    /// The selected filter
    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Projects matching the selected filter, catalog order
    #[must_use]
    pub fn filtered(&self) -> Vec<&Project> {
        self.catalog
            .iter()
            .filter(|p| p.matches(&self.filter))
            .collect()
    }

    /// Select a filter. Returns `false` when it was already selected.
    pub fn select(&mut self, filter: CategoryFilter) -> bool {
        if self.filter == filter {
            return false;
        }
        tracing::debug!(filter = filter.label(), "Category selected");
        self.filter = filter;
        self.cursor = 0;
        true
    }

    /// Advance the category bar, wrapping at the end
    pub fn next_category(&mut self) {
        self.step_category(1);
    }

    /// Step the category bar back, wrapping at the start
    pub fn prev_category(&mut self) {
        self.step_category(-1);
    }

    /// Move the highlight by `delta`, clamped to the filtered list
    pub fn move_cursor(&mut self, delta: i32) {
        let len = self.filtered().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as i64 + i64::from(delta);
        self.cursor = target.clamp(0, len as i64 - 1) as usize;
    }

    /// Index of the highlighted project within [`Self::filtered`]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The highlighted project, if the filtered list is non-empty
    #[must_use]
    pub fn selected(&self) -> Option<&Project> {
        self.filtered().get(self.cursor).copied()
    }

    fn step_category(&mut self, delta: i64) {
        let len = self.categories.len() as i64;
        let index = self
            .categories
            .iter()
            .position(|c| c == &self.filter)
            .map_or(0, |i| i as i64);
        let next = (index + delta).rem_euclid(len) as usize;
        let filter = self.categories[next].clone();
        self.select(filter);
    }
}
