use super::domain::{
    Contact, Hero, Identity, Link, Metric, Profile, Project, SiteMetadata, SkillsByTrack,
};

const EMAIL: Link = Link::internal("mailto:mehdimirkia@gmail.com", "Email");
const GITHUB: Link = Link::external("https://github.com/mehdimkia", "GitHub");
const LINKEDIN: Link = Link::external("https://www.linkedin.com/in/mehdimirkia", "LinkedIn");

pub(super) static CURRENT: Profile = Profile {
    site: SiteMetadata {
        title: "Mehdi Mirkia — Public Health × AI",
        description: "Portfolio showcasing ML, software engineering, and research projects.",
        url: "https://mehdimirkia.com",
    },
    identity: Identity {
        name: "Mehdi Mirkia",
        initials: "MM",
        tagline: "Public Health × AI",
        summary: "I build transparent models and clean software at the intersection of sleep \
                  epidemiology and machine learning.",
    },
    hero: Hero {
        headline: "Building useful models & shipping working demos.",
        subline: "Portfolio focused on depression risk modeling, sleep epidemiology, and modern \
                  ML engineering practices.",
    },
    skills: SkillsByTrack {
        research: &[
            "Psychiatric epidemiology",
            "Sleep & circadian health",
            "Longitudinal methods (Cox, splines)",
            "Reproducible research (R/Python)",
            "Scientific writing & peer review",
        ],
        engineering: &[
            "Python • TypeScript",
            "FastAPI • Next.js",
            "XGBoost/LightGBM • SHAP",
            "Docker • CI/CD (GitHub Actions)",
            "AWS basics (ECR/ECS/Vercel)",
        ],
    },
    projects: &[
        Project {
            title: "Maastricht Deprisk — incident depression predictor",
            description: "End-to-end ML pipeline with FastAPI inference and a public Next.js \
                          demo. XGBoost + SHAP; AUROC≈0.71 on held-out cohort.",
            tags: &["XGBoost", "FastAPI", "Next.js", "SHAP", "CI/CD"],
            primary: Some(Link::internal("/projects/deprisk", "Case study")),
            links: &[Link::external(
                "https://github.com/mehdimkia/maastrichtDeprisk",
                "Source",
            )],
            bullets: None,
            metrics: Some(&[
                Metric {
                    label: "AUROC",
                    value: "≈0.71",
                    tooltip: Some("On held-out cohort"),
                },
                Metric {
                    label: "Model",
                    value: "XGBoost",
                    tooltip: None,
                },
                Metric {
                    label: "Explainability",
                    value: "SHAP",
                    tooltip: None,
                },
                Metric {
                    label: "Serving",
                    value: "FastAPI",
                    tooltip: None,
                },
            ]),
            note: None,
            live: true,
        },
        Project {
            title: "Sleep ↔ Depression (Thesis, The Maastricht Study)",
            description: "Seven-year longitudinal analysis of sleep duration & fragmentation \
                          predicting depressive symptoms.",
            tags: &["Cohort study", "Cox PH", "Restricted splines", "R"],
            primary: Some(Link::internal("/files/thesis.pdf", "PDF")),
            links: &[],
            bullets: None,
            metrics: Some(&[
                Metric {
                    label: "Follow-up",
                    value: "7 years",
                    tooltip: None,
                },
                Metric {
                    label: "Design",
                    value: "Cohort",
                    tooltip: None,
                },
                Metric {
                    label: "Model",
                    value: "Cox PH",
                    tooltip: None,
                },
            ]),
            note: None,
            live: false,
        },
        Project {
            title: "Cohort Insights dashboard (WIP)",
            description: "Interactive Power BI dashboard with cohort characteristics and model \
                          performance summaries.",
            tags: &["Power BI", "Data viz"],
            primary: Some(Link::internal("/powerbi", "Preview")),
            links: &[],
            bullets: None,
            metrics: None,
            note: None,
            live: false,
        },
    ],
    roles: &[],
    publications: &[],
    education: &[],
    about: "Psychotherapist & public-health specialist turned ML practitioner. Recent double \
            master’s in European Public Health. I focus on interpretable models, clean data \
            pipelines, and practical demos. Open to PhD supervision, research collaborations, \
            and ML/AI engineering roles.",
    contact: Contact {
        email: EMAIL,
        socials: &[GITHUB, LINKEDIN],
        reach_out: &[LINKEDIN],
        cv: Link::internal("/files/CV_Mehdi_Mirkia.pdf", "Download CV"),
        pitch: "Email or message me for collaborations or roles.",
    },
};
