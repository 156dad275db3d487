use serde::{Deserialize, Serialize};

/// The canonical page IR that every renderer draws from.
///
/// This is the single intermediate representation between page content
/// (built-in or loaded from JSON) and the animation engine / view
/// transforms / renderers.
///
/// ```text
///   built-in ─┐
///   JSON file ├─▶ PageSpec ──▶ Layout + Animation ──▶ RenderCommand[] ──▶ Renderer
///             │    (this)       (section frames,       (DrawRect,         (terminal,
///             │                  reveals, typing,       DrawText,          egui,
///             │                  scroll)                LinkRegion…)       WASM host)
/// ```
///
/// # Design principles
///
/// 1. **Renderer-agnostic** — no colors, no pixel positions; content only.
///    Styling lives in theme tokens, geometry in the layout pass.
/// 2. **Serializable** — pages can be stored on disk or passed across the
///    WASM boundary as JSON.
/// 3. **Flat sections** — the five sections are named fields, not a
///    heterogeneous list; the page shape is fixed, its content is not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSpec {
    pub meta: PageMeta,
    pub hero: Hero,
    pub projects: ProjectsSection,
    pub skills: SkillsSection,
    pub journey: JourneySection,
    pub contact: ContactSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    /// Brand shown in the nav bar ("name.tld").
    pub brand: String,
    /// Window / document title.
    pub title: String,
    /// Footer line.
    pub footer: String,
}

/// In-page anchor targets. The nav bar links to the four non-hero
/// sections; the hero's scroll cue targets [`SectionId::Projects`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    Hero,
    Projects,
    Skills,
    Journey,
    Contact,
}

impl SectionId {
    /// The anchor name used in `#…` hrefs.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Journey => "journey",
            Self::Contact => "contact",
        }
    }

    /// Resolve an anchor name; unknown names yield `None` (navigation
    /// then no-ops rather than failing).
    pub fn from_anchor(name: &str) -> Option<Self> {
        match name {
            "hero" => Some(Self::Hero),
            "projects" => Some(Self::Projects),
            "skills" => Some(Self::Skills),
            "journey" => Some(Self::Journey),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    /// The sections listed in the nav bar, in order.
    pub fn nav_order() -> [Self; 4] {
        [Self::Projects, Self::Skills, Self::Journey, Self::Contact]
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.anchor())
    }
}

/// A run of headline text; accent runs render in the gradient accent color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlineRun {
    pub text: String,
    #[serde(default)]
    pub accent: bool,
}

impl HeadlineRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            accent: false,
        }
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            accent: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    /// Availability badge above the headline, with a pulsing dot.
    pub badge: Option<String>,
    pub headline: Vec<HeadlineRun>,
    /// Tagline below the headline; rendered through the typing emitter.
    pub tagline: String,
    /// Credential chips ("CAPM®", …).
    pub credentials: Vec<String>,
    pub primary_action: Action,
    pub secondary_action: Action,
}

/// A call-to-action control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub label: String,
    pub target: ActionTarget,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ActionTarget {
    /// Smooth-scroll to a section.
    Anchor(SectionId),
    /// The page's fixed `mailto:` address.
    Mail,
    /// The page's fixed external profile URL.
    Profile,
}

/// Shared shape of the eyebrow + two-line heading that opens each
/// non-hero section ("Featured Work" / "From Concept to" / accent line).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionHeading {
    pub eyebrow: String,
    pub line: String,
    pub accent_line: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsSection {
    pub heading: SectionHeading,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Status badge ("In Progress"); `live` adds the pulsing dot.
    pub status: Option<StatusBadge>,
    /// Muted kicker next to the status ("Current Project").
    pub kicker: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub summary: String,
    /// Tag chips below the summary.
    pub tags: Vec<String>,
    /// Optional problem / solution / impact columns.
    pub case_study: Vec<CaseStudyColumn>,
    /// Optional metric cards; each reveals independently.
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBadge {
    pub label: String,
    #[serde(default)]
    pub live: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudyColumn {
    pub title: String,
    pub body: String,
    pub tint: ColumnTint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnTint {
    Problem,
    Solution,
    Impact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsSection {
    pub heading: SectionHeading,
    pub groups: Vec<SkillGroup>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub tint: GroupTint,
    pub skills: Vec<String>,
}

/// Accent family for a skill group's icon tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupTint {
    Blue,
    Violet,
    Green,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneySection {
    pub heading: SectionHeading,
    pub entries: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub organization: String,
    pub role: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSection {
    pub line: String,
    pub accent_line: String,
    pub blurb: String,
    /// Fixed address; emitted as `mailto:…` unchanged by any page state.
    pub email: String,
    pub mail_label: String,
    /// Fixed external profile URL.
    pub profile_url: String,
    pub profile_label: String,
}

impl PageSpec {
    /// The fixed `mailto:` target for the contact controls.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }

    /// The fixed external profile URL.
    pub fn profile_url(&self) -> &str {
        &self.contact.profile_url
    }

    /// Resolve an action target to its href.
    pub fn href_for(&self, target: &ActionTarget) -> String {
        match target {
            ActionTarget::Anchor(id) => format!("#{}", id.anchor()),
            ActionTarget::Mail => self.mailto(),
            ActionTarget::Profile => self.contact.profile_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> PageSpec {
        PageSpec {
            meta: PageMeta {
                brand: "someone.dev".into(),
                title: "Someone — Portfolio".into(),
                footer: "© 2026 Someone".into(),
            },
            hero: Hero {
                badge: Some("Open to opportunities".into()),
                headline: vec![
                    HeadlineRun::plain("Building"),
                    HeadlineRun::accent("useful things"),
                ],
                tagline: "Engineer.".into(),
                credentials: vec!["CERT®".into()],
                primary_action: Action {
                    label: "View My Projects".into(),
                    target: ActionTarget::Anchor(SectionId::Projects),
                },
                secondary_action: Action {
                    label: "Download Resume".into(),
                    target: ActionTarget::Mail,
                },
            },
            projects: ProjectsSection {
                heading: SectionHeading {
                    eyebrow: "Featured Work".into(),
                    line: "From Concept to".into(),
                    accent_line: "Measurable Impact".into(),
                },
                projects: vec![Project {
                    status: Some(StatusBadge {
                        label: "In Progress".into(),
                        live: true,
                    }),
                    kicker: Some("Current Project".into()),
                    title: "Thing".into(),
                    subtitle: "A thing".into(),
                    summary: "Summary.".into(),
                    tags: vec!["Vision".into()],
                    case_study: vec![CaseStudyColumn {
                        title: "The Problem".into(),
                        body: "It was slow.".into(),
                        tint: ColumnTint::Problem,
                    }],
                    metrics: vec![Metric {
                        value: "30%".into(),
                        label: "faster".into(),
                    }],
                }],
            },
            skills: SkillsSection {
                heading: SectionHeading {
                    eyebrow: "The Toolkit".into(),
                    line: "Core".into(),
                    accent_line: "Competencies".into(),
                },
                groups: vec![SkillGroup {
                    title: "Governance".into(),
                    tint: GroupTint::Blue,
                    skills: vec!["LLMOps".into()],
                }],
                certifications: vec![Certification {
                    title: "CERT®".into(),
                    issuer: "Body".into(),
                }],
            },
            journey: JourneySection {
                heading: SectionHeading {
                    eyebrow: "Experience".into(),
                    line: "Professional".into(),
                    accent_line: "Journey".into(),
                },
                entries: vec![TimelineEntry {
                    organization: "Org".into(),
                    role: "Role".into(),
                    summary: "Did things.".into(),
                }],
            },
            contact: ContactSection {
                line: "Let's Build".into(),
                accent_line: "Something Together".into(),
                blurb: "I'd love to connect.".into(),
                email: "someone@example.com".into(),
                mail_label: "Get in Touch".into(),
                profile_url: "https://example.com/profile".into(),
                profile_label: "Profile".into(),
            },
        }
    }

    #[test]
    fn anchors_roundtrip() {
        for id in [
            SectionId::Hero,
            SectionId::Projects,
            SectionId::Skills,
            SectionId::Journey,
            SectionId::Contact,
        ] {
            assert_eq!(SectionId::from_anchor(id.anchor()), Some(id));
        }
        assert_eq!(SectionId::from_anchor("blog"), None);
    }

    #[test]
    fn nav_order_excludes_hero() {
        let order = SectionId::nav_order();
        assert_eq!(order.len(), 4);
        assert!(!order.contains(&SectionId::Hero));
        assert_eq!(order[0], SectionId::Projects);
    }

    #[test]
    fn hrefs_are_fixed() {
        let page = sample_page();
        assert_eq!(page.mailto(), "mailto:someone@example.com");
        assert_eq!(page.href_for(&ActionTarget::Mail), "mailto:someone@example.com");
        assert_eq!(
            page.href_for(&ActionTarget::Profile),
            "https://example.com/profile"
        );
        assert_eq!(
            page.href_for(&ActionTarget::Anchor(SectionId::Projects)),
            "#projects"
        );
    }

    #[test]
    fn serialization_roundtrip() {
        let page = sample_page();
        let json = serde_json::to_string(&page).expect("serialize");
        let back: PageSpec = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.meta.brand, "someone.dev");
        assert_eq!(back.projects.projects.len(), 1);
        assert!(back.projects.projects[0]
            .status
            .as_ref()
            .is_some_and(|s| s.live));
    }

    #[test]
    fn headline_run_defaults_to_plain() {
        let run: HeadlineRun = serde_json::from_str(r#"{"text":"hi"}"#).expect("parse");
        assert!(!run.accent);
    }
}
