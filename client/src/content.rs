//! Static profile content: identity, bio, skills, and contact channels.
//!
//! Everything here is compiled in; only projects and posts come from the API.
//! Identity and bio below are sample content to be replaced per deployment.
//! The hero scene and copyright year come from the build environment
//! (`FOLIO_HERO_SCENE_URL`, `FOLIO_COPYRIGHT_YEAR`), like `FOLIO_API_URL`.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Path of the downloadable résumé served from the site assets.
pub const RESUME_PATH: &str = "/resume.pdf";

/// Year shown in the footer when `FOLIO_COPYRIGHT_YEAR` is unset or invalid.
pub const DEFAULT_COPYRIGHT_YEAR: u16 = 2026;

pub const NAME: &str = "Alex Morgan";
pub const INITIALS: &str = "AM";
pub const TAGLINE: &str = "I build fast, careful software for the web and the systems underneath it.";
pub const EMAIL: &str = "hello@alexmorgan.dev";

/// Roles cycled by the hero typewriter.
pub const ROLES: &[&str] = &["Software Engineer", "Rust Developer", "Systems Tinkerer", "Occasional Writer"];

pub const BIO: &[&str] = &[
    "I'm a software engineer who enjoys the whole stack, from storage engines and network \
     services to the pixels that end up on screen.",
    "Lately I spend most of my time in Rust: building services that stay up, tools that \
     stay out of the way, and interfaces that load quickly on slow connections.",
    "Outside of work I write short notes about what I learn and contribute to open source \
     when a bug bites hard enough.",
];

pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup { title: "Languages", items: &["Rust", "TypeScript", "Go", "SQL"] },
    SkillGroup { title: "Backend", items: &["Axum", "Tokio", "PostgreSQL", "Redis"] },
    SkillGroup { title: "Frontend", items: &["Leptos", "WebAssembly", "CSS"] },
    SkillGroup { title: "Tooling", items: &["Docker", "GitHub Actions", "Linux"] },
];

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIALS: &[SocialLink] = &[
    SocialLink { label: "GitHub", url: "https://github.com/alexmorgan" },
    SocialLink { label: "LinkedIn", url: "https://www.linkedin.com/in/alexmorgan" },
    SocialLink { label: "Email", url: "mailto:hello@alexmorgan.dev" },
];

/// Embed URL of the external 3D viewer behind the hero, if configured.
pub fn hero_scene_url() -> Option<&'static str> {
    resolve_scene_url(option_env!("FOLIO_HERO_SCENE_URL"))
}

/// Footer copyright year.
pub fn copyright_year() -> u16 {
    resolve_year(option_env!("FOLIO_COPYRIGHT_YEAR"))
}

pub(crate) fn resolve_scene_url(raw: Option<&str>) -> Option<&str> {
    let value = raw?.trim();
    (value.starts_with("https://") && value.len() > "https://".len()).then_some(value)
}

pub(crate) fn resolve_year(raw: Option<&str>) -> u16 {
    raw.and_then(|v| v.trim().parse::<u16>().ok())
        .filter(|year| *year >= 1970)
        .unwrap_or(DEFAULT_COPYRIGHT_YEAR)
}
