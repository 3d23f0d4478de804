#![forbid(unsafe_code)]

//! Static portfolio content.
//!
//! Single source of truth for everything the pages display. The tables
//! serialize straight into template contexts; [`crate::pages`] and
//! [`crate::nav`] only arrange them.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// A run of inline text, optionally emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Plain(&'static str),
    Emphasis(&'static str),
}

impl Span {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Plain(text) | Self::Emphasis(text) => text,
        }
    }
}

/// Serialized as `{ "text": .., "emphasis": bool }` for the `rich` partial.
impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut span = serializer.serialize_struct("Span", 2)?;
        span.serialize_field("text", self.text())?;
        span.serialize_field("emphasis", &matches!(self, Self::Emphasis(_)))?;
        span.end()
    }
}

/// Inline rich text.
pub type Rich = &'static [Span];

/// Identity shown in the sidebar and on the mobile home page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar_src: &'static str,
    pub intro: Rich,
    pub about: &'static str,
    pub call_to_action: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Chaitanya Manik",
    role: "AI Application Developer",
    avatar_src: "assets/avatar.jpg",
    intro: &[
        Span::Plain(
            "I build intelligent applications and systems. Currently pursuing a Master's in Computer Science at ",
        ),
        Span::Emphasis("Rutgers University"),
        Span::Plain(
            ", I specialize in applying AI and machine learning to create impactful, real-world solutions.",
        ),
    ],
    about: "I am a driven and curious developer with a Bachelor's in Computer Science from \
            Vellore Institute of Technology and an upcoming Master's from Rutgers University. \
            My focus is on leveraging AI to build practical, user-centric applications. I thrive \
            on transforming complex problems into elegant, efficient solutions, from creating a \
            digital health system for over 2,000 users to architecting AI models for early \
            disease detection with 98% accuracy.",
    call_to_action: "View My Work",
};

/// External profile link.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub new_tab: bool,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/ChaitanyaManik17",
        icon: "github",
        new_tab: true,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/chaitanya-manik",
        icon: "linkedin",
        new_tab: true,
    },
    SocialLink {
        label: "Email",
        href: "mailto:chaitanyamanik283@gmail.com",
        icon: "mail",
        new_tab: false,
    },
];

/// A group of skills with its icon.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "ML / AI",
        icon: "brain-circuit",
        skills: &[
            "TensorFlow",
            "PyTorch",
            "Scikit-learn",
            "Vision Transformers",
            "NLP (Transformers, T5)",
            "Deep Learning",
        ],
    },
    SkillCategory {
        title: "Data Science",
        icon: "database",
        skills: &[
            "Data Wrangling",
            "EDA",
            "Statistical Modeling",
            "Predictive Modeling",
            "Data Visualization",
        ],
    },
    SkillCategory {
        title: "Languages",
        icon: "code",
        skills: &["Python", "Java", "C", "SQL", "JavaScript", "HTML/CSS"],
    },
    SkillCategory {
        title: "Cloud & Data Engineering",
        icon: "cloud",
        skills: &[
            "GCP (BigQuery, GCS)",
            "AWS",
            "Azure",
            "Apache Airflow",
            "ETL Pipelines",
        ],
    },
];

pub const CERTIFICATIONS: &[&str] = &[
    "AWS Certified Cloud Practitioner",
    "Microsoft Azure Administrator Associate",
];

/// One position in the work history.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Experience {
    pub period: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub highlights: &'static [Rich],
}

pub const EXPERIENCE: &[Experience] = &[Experience {
    period: "Jan 2025 - Jul 2025",
    title: "AI Application Developer Intern",
    organization: "Patio Digital \u{b7} Raipur, Chhattisgarh",
    highlights: &[
        &[
            Span::Plain("Contributed to an Ayurvedic Digital Health System serving "),
            Span::Emphasis("2,000+ users"),
            Span::Plain("."),
        ],
        &[
            Span::Plain("Increased diagnostic accuracy by "),
            Span::Emphasis("30%"),
            Span::Plain(" by implementing AI-powered tongue and pulse analysis."),
        ],
        &[
            Span::Plain("Boosted user engagement by "),
            Span::Emphasis("40%"),
            Span::Plain(" using Python, TensorFlow Lite, and ARKit/ARCore."),
        ],
        &[
            Span::Plain("Reduced system downtime by "),
            Span::Emphasis("25%"),
            Span::Plain(" through rigorous testing and performance optimization."),
        ],
    ],
}];

/// A personal project card.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "ParkinsAI: MRI-Based Parkinson's Detection",
        description: "A medical AI project that applies Vision Transformers and Capsule Networks \
                      to detect Parkinson's Disease from MRI scans, achieving 98% classification \
                      accuracy.",
        tags: &["Python", "Vision Transformers", "Capsule Networks"],
    },
    Project {
        title: "Travel Buddies",
        description: "A web app connecting travelers for safe and eco-friendly commuting. Its \
                      real-time carpooling features reduced costs by up to 30% and encouraged \
                      sustainable travel.",
        tags: &["C", "HTML"],
    },
    Project {
        title: "Rock Paper Scissors AI",
        description: "An interactive AI-powered game in Python demonstrating human-computer \
                      interaction. It gained over 200 plays in its first month, showcasing strong \
                      user engagement.",
        tags: &["Python"],
    },
];
