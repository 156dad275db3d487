//! Page content: the built-in portfolio plus JSON loading.

use thiserror::Error;
use unfold_protocol::page::{
    Action, ActionTarget, CaseStudyColumn, Certification, ColumnTint, ContactSection, GroupTint,
    HeadlineRun, Hero, JourneySection, Metric, PageMeta, PageSpec, Project, ProjectsSection,
    SectionHeading, SectionId, SkillGroup, SkillsSection, StatusBadge, TimelineEntry,
};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed page JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid page: {0}")]
    Invalid(String),
}

/// Parse and validate a page from JSON bytes.
pub fn parse_page(data: &[u8]) -> Result<PageSpec, ContentError> {
    let spec: PageSpec = serde_json::from_slice(data)?;
    validate(&spec)?;
    Ok(spec)
}

/// Semantic checks beyond what the serde shape enforces.
pub fn validate(spec: &PageSpec) -> Result<(), ContentError> {
    if spec.meta.brand.trim().is_empty() {
        return Err(ContentError::Invalid("meta.brand is empty".into()));
    }
    if spec.hero.headline.iter().all(|r| r.text.trim().is_empty()) {
        return Err(ContentError::Invalid("hero.headline is empty".into()));
    }
    if spec.projects.projects.is_empty() {
        return Err(ContentError::Invalid("projects list is empty".into()));
    }
    for (i, p) in spec.projects.projects.iter().enumerate() {
        if p.title.trim().is_empty() {
            return Err(ContentError::Invalid(format!("project {i} has no title")));
        }
        for m in &p.metrics {
            if m.value.trim().is_empty() {
                return Err(ContentError::Invalid(format!(
                    "project {i} has a metric without a value"
                )));
            }
        }
    }
    if spec.skills.groups.is_empty() {
        return Err(ContentError::Invalid("skills has no groups".into()));
    }
    if spec.journey.entries.is_empty() {
        return Err(ContentError::Invalid("journey has no entries".into()));
    }
    if !spec.contact.email.contains('@') {
        return Err(ContentError::Invalid("contact.email is not an address".into()));
    }
    if spec.contact.profile_url.trim().is_empty() {
        return Err(ContentError::Invalid("contact.profile_url is empty".into()));
    }
    Ok(())
}

/// The built-in portfolio page.
pub fn default_page() -> PageSpec {
    PageSpec {
        meta: PageMeta {
            brand: "tanisha.ai".into(),
            title: "Tanisha — AI Product Manager".into(),
            footer: "© 2026 Tanisha · Built with intention · AI Product Manager".into(),
        },
        hero: Hero {
            badge: Some("Open to opportunities".into()),
            headline: vec![
                HeadlineRun::plain("Bridging the Gap Between"),
                HeadlineRun::accent("AI Innovation"),
                HeadlineRun::plain("and Scalable Business Value"),
            ],
            tagline: "AI Product Manager specializing in LLMOps, Responsible AI, and turning \
                      complex technical constraints into shippable products."
                .into(),
            credentials: vec!["CAPM®".into(), "CSPO®".into(), "CPMAI™".into()],
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
            projects: vec![
                Project {
                    status: Some(StatusBadge {
                        label: "In Progress".into(),
                        live: true,
                    }),
                    kicker: Some("Current Project".into()),
                    title: "DecisionEase".into(),
                    subtitle: "Gen-Z Personalized AI Agent".into(),
                    summary: "Navigating the ambiguity of early-stage development, I am \
                              building DecisionEase to streamline daily choices for Gen-Z. \
                              Currently managing the roadmap and backlog to ensure this \
                              solution is both innovative and user-centric, moving from \
                              \"What if\" to \"How it works.\""
                        .into(),
                    tags: vec![
                        "Product Vision".into(),
                        "User Requirements".into(),
                        "Data-Driven Iteration".into(),
                        "User-Centric Design".into(),
                    ],
                    case_study: vec![],
                    metrics: vec![],
                },
                Project {
                    status: Some(StatusBadge {
                        label: "Case Study".into(),
                        live: false,
                    }),
                    kicker: None,
                    title: "RAG-Based Employee Training Bot".into(),
                    subtitle: "Scaling Efficiency Through Verified Data".into(),
                    summary: String::new(),
                    tags: vec![],
                    case_study: vec![
                        CaseStudyColumn {
                            title: "The Problem".into(),
                            body: "Traditional training for 250+ employees across 10 \
                                   departments was fragmented, inconsistent, and consuming \
                                   valuable time."
                                .into(),
                            tint: ColumnTint::Problem,
                        },
                        CaseStudyColumn {
                            title: "The Solution".into(),
                            body: "Engineered a custom Retrieval-Augmented Generation system \
                                   using rigorously cleaned and verified data with strict \
                                   data processing protocols."
                                .into(),
                            tint: ColumnTint::Solution,
                        },
                        CaseStudyColumn {
                            title: "The Impact".into(),
                            body: "Measurable improvements across training speed, data \
                                   accuracy, and employee satisfaction."
                                .into(),
                            tint: ColumnTint::Impact,
                        },
                    ],
                    metrics: vec![
                        Metric {
                            value: "30%".into(),
                            label: "Reduction in training time".into(),
                        },
                        Metric {
                            value: "55%".into(),
                            label: "Fewer model hallucinations".into(),
                        },
                        Metric {
                            value: "91%".into(),
                            label: "User satisfaction rate".into(),
                        },
                    ],
                },
            ],
        },
        skills: SkillsSection {
            heading: SectionHeading {
                eyebrow: "The Toolkit".into(),
                line: "Core".into(),
                accent_line: "Competencies".into(),
            },
            groups: vec![
                SkillGroup {
                    title: "AI Governance".into(),
                    tint: GroupTint::Blue,
                    skills: vec![
                        "LLMOps".into(),
                        "RAG Systems".into(),
                        "Data Governance".into(),
                        "Responsible AI Ethics".into(),
                    ],
                },
                SkillGroup {
                    title: "Product Strategy".into(),
                    tint: GroupTint::Violet,
                    skills: vec![
                        "PRD Authoring".into(),
                        "Backlog Grooming".into(),
                        "UAT".into(),
                        "Product Lifecycle".into(),
                    ],
                },
                SkillGroup {
                    title: "Process & Execution".into(),
                    tint: GroupTint::Green,
                    skills: vec![
                        "Agile / Scrum".into(),
                        "PMI Methodologies".into(),
                        "Risk Mitigation".into(),
                        "SDLC".into(),
                    ],
                },
            ],
            certifications: vec![
                Certification {
                    title: "CAPM®".into(),
                    issuer: "PMI Certified".into(),
                },
                Certification {
                    title: "CSPO®".into(),
                    issuer: "Scrum Alliance".into(),
                },
                Certification {
                    title: "CPMAI™".into(),
                    issuer: "AI Product Mgmt".into(),
                },
            ],
        },
        journey: JourneySection {
            heading: SectionHeading {
                eyebrow: "Experience".into(),
                line: "Professional".into(),
                accent_line: "Journey".into(),
            },
            entries: vec![
                TimelineEntry {
                    organization: "Xeo Marketing".into(),
                    role: "AI Product Validation & Enhancement".into(),
                    summary: "Validated AI visibility tools and shipped enhancements that \
                              grew client satisfaction by 40%. Worked across cross-functional \
                              teams to ensure product-market fit and data-driven \
                              decision-making."
                        .into(),
                },
                TimelineEntry {
                    organization: "BioM Research Group".into(),
                    role: "AI Governance & Ethics Leadership".into(),
                    summary: "Established AI governance frameworks and ethical standards for \
                              healthcare diagnostics. Led initiatives to ensure responsible \
                              AI deployment in sensitive clinical environments."
                        .into(),
                },
                TimelineEntry {
                    organization: "Yorkville University".into(),
                    role: "Program & Portfolio Leadership".into(),
                    summary: "Managed a portfolio of 6+ concurrent initiatives and scaled a \
                              peer-mentoring program to 10,000+ students. Applied PMI \
                              methodologies to deliver projects on time and within scope."
                        .into(),
                },
            ],
        },
        contact: ContactSection {
            line: "Let's Build".into(),
            accent_line: "Something Together".into(),
            blurb: "Looking to bring AI products from vision to execution? I'd love to \
                    connect."
                .into(),
            email: "tanisha.s3184@gmail.com".into(),
            mail_label: "Get in Touch".into(),
            profile_url: "https://linkedin.com".into(),
            profile_label: "LinkedIn".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_validates() {
        let page = default_page();
        assert!(validate(&page).is_ok());
        assert_eq!(page.mailto(), "mailto:tanisha.s3184@gmail.com");
        assert_eq!(page.profile_url(), "https://linkedin.com");
    }

    #[test]
    fn parse_roundtrips_the_default_page() {
        let json = serde_json::to_vec(&default_page()).expect("serialize");
        let parsed = parse_page(&json).expect("parse");
        assert_eq!(parsed.meta.brand, "tanisha.ai");
        assert_eq!(parsed.projects.projects.len(), 2);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_page(b"{not json").unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }

    #[test]
    fn rejects_semantic_violations() {
        let mut page = default_page();
        page.contact.email = "not-an-address".into();
        let json = serde_json::to_vec(&page).expect("serialize");
        let err = parse_page(&json).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));

        let mut page = default_page();
        page.projects.projects.clear();
        assert!(validate(&page).is_err());

        let mut page = default_page();
        page.projects.projects[1].metrics[0].value = String::new();
        assert!(validate(&page).is_err());
    }
}
