//! Static copy for the site. Every section reads from a `SiteContent`
//! picked by `Variant`, so the same components render all brands.

pub mod agency;
pub mod consultant;
pub mod web;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Digital-marketing consultant (home page).
    Consultant,
    /// UGC content agency (local and online brand pages).
    Agency,
    /// Freelance web developer page.
    Web,
}

impl Variant {
    pub fn content(self) -> &'static SiteContent {
        match self {
            Variant::Consultant => &consultant::CONTENT,
            Variant::Agency => &agency::CONTENT,
            Variant::Web => &web::CONTENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Accent,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Primary => "tone-primary",
            Tone::Secondary => "tone-secondary",
            Tone::Accent => "tone-accent",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Brand {
    pub first: &'static str,
    pub last: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub icon: &'static str,
    pub value: u64,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
    pub tone: Tone,
}

#[derive(Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

#[derive(Debug, PartialEq)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub result: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub tone: Tone,
}

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub company: &'static str,
    pub initials: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    /// Whole rupees per month; `None` means "Custom" pricing.
    pub monthly_price: Option<u64>,
    pub yearly_price: Option<u64>,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub featured: bool,
}

#[derive(Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ContactDetails {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub services: &'static [&'static str],
    pub budgets: &'static [&'static str],
    pub socials: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct About {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub skills: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: &'static [NavLink],
    pub stats: &'static [Stat],
    pub about: About,
    pub services: &'static [Service],
    pub steps: &'static [Step],
    pub projects: &'static [Project],
    pub testimonials: &'static [Testimonial],
    pub plans: &'static [Plan],
    pub faqs: &'static [Faq],
    pub contact: ContactDetails,
    pub footer: &'static [FooterColumn],
}

/// Distinct project categories in first-appearance order.
pub fn project_categories(projects: &'static [Project]) -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for project in projects {
        if !categories.contains(&project.category) {
            categories.push(project.category);
        }
    }
    categories
}

/// Projects in `category`, or all of them for `None`.
pub fn filter_projects(projects: &'static [Project], category: Option<&str>) -> Vec<&'static Project> {
    projects
        .iter()
        .filter(|project| category.map_or(true, |wanted| project.category == wanted))
        .collect()
}

/// Case-insensitive substring filter used by the brand-page search boxes.
pub fn matching<'a>(items: &[&'a str], query: &str) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .copied()
        .filter(|item| item.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consultant_categories_follow_the_project_list() {
        let categories = project_categories(consultant::CONTENT.projects);
        assert_eq!(categories, vec!["SEO", "PPC", "Social", "Content"]);
    }

    #[test]
    fn filter_by_category() {
        let projects = consultant::CONTENT.projects;
        assert_eq!(filter_projects(projects, None).len(), projects.len());

        let ppc = filter_projects(projects, Some("PPC"));
        assert_eq!(ppc.len(), 2);
        assert!(ppc.iter().all(|p| p.category == "PPC"));

        assert!(filter_projects(projects, Some("Print")).is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let found = matching(agency::LOCAL_CATEGORIES, "CAF");
        assert_eq!(found, vec!["Café"]);
        let found = matching(agency::ONLINE_NICHES, "  s ");
        assert_eq!(found, vec!["Skincare", "Fashion", "Electronics", "Course", "SaaS"]);
    }

    #[test]
    fn empty_search_keeps_everything() {
        assert_eq!(matching(agency::LOCAL_CATEGORIES, "").len(), agency::LOCAL_CATEGORIES.len());
    }

    #[test]
    fn agency_stats_row_matches_the_headline_numbers() {
        let targets: Vec<u64> = agency::CONTENT.stats.iter().map(|s| s.value).collect();
        assert_eq!(targets, vec![500, 100, 50, 3]);
    }

    #[test]
    fn every_variant_has_content_for_each_section() {
        for variant in [Variant::Consultant, Variant::Agency, Variant::Web] {
            let content = variant.content();
            assert!(!content.testimonials.is_empty(), "{variant:?} testimonials");
            assert!(!content.services.is_empty(), "{variant:?} services");
            assert!(!content.plans.is_empty(), "{variant:?} plans");
            assert!(!content.contact.services.is_empty(), "{variant:?} contact services");
            assert!(content.plans.iter().filter(|p| p.featured).count() <= 1);
        }
    }

    #[test]
    fn project_ids_are_unique() {
        for variant in [Variant::Consultant, Variant::Agency, Variant::Web] {
            let projects = variant.content().projects;
            let mut ids: Vec<u32> = projects.iter().map(|p| p.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), projects.len());
        }
    }
}
