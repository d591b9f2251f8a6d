//! Static content catalogue for the site: navigation, section data, and the
//! JSON-LD business description. No runtime behavior lives here.

use std::str::FromStr;

use serde_json::{json, Value};
use strum::{Display, EnumString, VariantArray};

pub const SITE_NAME: &str = "Kodenox";
pub const SITE_URL: &str = "https://kodenox.com";
pub const CONTACT_EMAIL: &str = "kodenox2025@gmail.com";
pub const CONTACT_PHONE: &str = "0882-1188-7538";
pub const CONTACT_PHONE_HREF: &str = "tel:+6288211887538";
pub const CONTACT_LOCALITY: &str = "Jakarta, Indonesia";

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem { label: "Home", href: "#home" },
        NavItem { label: "About", href: "#about" },
        NavItem { label: "Services", href: "#services" },
        NavItem { label: "Portfolio", href: "#portfolio" },
        NavItem { label: "Tech Stack", href: "#tech-stack" },
        NavItem { label: "Contact", href: "#contact" },
    ]
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            title: "Jasa Pembuatan Website",
            description: "Website profesional dan modern dengan teknologi terkini. \
                          Responsive design dan SEO optimized.",
            features: [
                "Responsive Design",
                "SEO Friendly",
                "Performance Optimized",
                "Modern Framework",
            ],
        },
        Service {
            title: "Jasa Pembuatan Android",
            description: "Aplikasi Android native yang powerful dan user-friendly \
                          untuk iOS dan Android.",
            features: [
                "Native Performance",
                "Cross-Platform",
                "Offline Support",
                "Push Notifications",
            ],
        },
        Service {
            title: "UI/UX Design",
            description: "Desain interface yang menarik dan user experience yang \
                          optimal untuk produk digital Anda.",
            features: ["User Research", "Wireframing", "Prototyping", "Design System"],
        },
    ]
}

/// Portfolio filter categories. The string forms match the filter buttons
/// and the `category` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantArray)]
pub enum ProjectCategory {
    #[strum(serialize = "all")]
    All,
    #[strum(serialize = "website")]
    Website,
    #[strum(serialize = "android")]
    Android,
    #[strum(serialize = "ui-ux")]
    UiUx,
}

impl ProjectCategory {
    /// Unknown or absent categories behave as `all`.
    pub fn parse_or_all(value: Option<&str>) -> Self {
        value
            .and_then(|v| ProjectCategory::from_str(v).ok())
            .unwrap_or(ProjectCategory::All)
    }
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

pub fn projects() -> Vec<Project> {
    vec![Project {
        title: "Finus AI",
        description: "Providing practical solutions to address low financial literacy \
                      and impulsive spending behavior through a simple record-keeping \
                      application and personalized AI recommendations.",
        category: ProjectCategory::Android,
        tech: &["Flutter", "Python", "SQL", "Stripe"],
        link: "#",
    }]
}

pub fn projects_in(category: ProjectCategory) -> Vec<Project> {
    projects()
        .into_iter()
        .filter(|p| category == ProjectCategory::All || p.category == category)
        .collect()
}

pub struct TechGroup {
    pub title: &'static str,
    pub techs: &'static [(&'static str, &'static str)],
}

pub fn tech_stack() -> Vec<TechGroup> {
    vec![
        TechGroup {
            title: "Frontend",
            techs: &[
                ("React", "⚛️"),
                ("Next.js", "▲"),
                ("Vue.js", "💚"),
                ("TypeScript", "🔷"),
                ("Tailwind CSS", "🎨"),
                ("Framer Motion", "🎬"),
            ],
        },
        TechGroup {
            title: "Backend",
            techs: &[
                ("Node.js", "🟢"),
                ("Python", "🐍"),
                ("Java", "☕"),
                ("PHP", "🐘"),
                ("Go", "🐹"),
                ("Ruby", "💎"),
            ],
        },
        TechGroup {
            title: "Mobile",
            techs: &[
                ("React Native", "📱"),
                ("Flutter", "🦋"),
                ("Kotlin", "🎯"),
                ("Swift", "🍎"),
                ("Android", "🤖"),
                ("iOS", "📲"),
            ],
        },
        TechGroup {
            title: "Database",
            techs: &[
                ("MongoDB", "🍃"),
                ("PostgreSQL", "🐘"),
                ("MySQL", "🐬"),
                ("Redis", "🔴"),
                ("Firebase", "🔥"),
                ("Supabase", "⚡"),
            ],
        },
    ]
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub fn about_stats() -> Vec<Stat> {
    vec![
        Stat {
            value: "1+",
            label: "Projects Completed",
            description: "Projects delivered across web and mobile",
        },
        Stat {
            value: "0%",
            label: "Client Satisfaction",
            description: "High level of client satisfaction with our work results",
        },
        Stat {
            value: "1+",
            label: "Years Experience",
            description: "Experience in software development industry",
        },
        Stat {
            value: "24/7",
            label: "Support",
            description: "Responsive technical support for every client",
        },
    ]
}

pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub fn contact_channels() -> Vec<ContactChannel> {
    vec![
        ContactChannel {
            label: "Email",
            value: CONTACT_EMAIL,
            href: "mailto:kodenox2025@gmail.com",
        },
        ContactChannel {
            label: "Phone",
            value: CONTACT_PHONE,
            href: CONTACT_PHONE_HREF,
        },
        ContactChannel {
            label: "Address",
            value: CONTACT_LOCALITY,
            href: "#",
        },
    ]
}

pub struct BusinessHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub fn business_hours() -> Vec<BusinessHours> {
    vec![
        BusinessHours { days: "Monday - Friday", hours: "09:00 - 18:00" },
        BusinessHours { days: "Saturday", hours: "10:00 - 15:00" },
        BusinessHours { days: "Sunday", hours: "Closed" },
    ]
}

/// Fixed JSON-LD description of the business for search-engine consumption.
pub fn structured_data() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "SoftwareHouse",
        "name": SITE_NAME,
        "description": "Professional Software House specializing in Web and Android \
                        development. Terpercaya untuk jasa pembuatan website dan \
                        aplikasi Android.",
        "url": SITE_URL,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": "Jakarta",
            "addressCountry": "ID"
        },
        "priceRange": "$$",
        "email": CONTACT_EMAIL,
        "telephone": "",
        "services": [
            "Jasa Pembuatan Website",
            "Jasa Pembuatan Android",
            "UI/UX Design",
            "Custom Software Development",
            "Konsultasi IT"
        ],
        "sameAs": [
            "https://github.com/kodenox",
            "https://linkedin.com/company/kodenox"
        ]
    })
}
