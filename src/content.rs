//! Static page copy.

pub(crate) const OWNER: &str = "Alex Morgan";
pub(crate) const ROLE: &str = "Software Engineer";
pub(crate) const TAGLINE: &str =
    "I build reliable web platforms and the tooling that keeps them fast.";

pub(crate) const ABOUT: [&str; 2] = [
    "I have spent the last several years shipping product features end to end, from database \
     schemas to the pixels on screen.",
    "Lately I focus on frontend performance, design systems and developer experience.",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Section {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
}

pub(crate) const SECTIONS: [Section; 7] = [
    Section { id: "home", label: "Home" },
    Section { id: "about", label: "About" },
    Section { id: "experience", label: "Experience" },
    Section { id: "projects", label: "Projects" },
    Section { id: "skills", label: "Skills" },
    Section { id: "testimonials", label: "Testimonials" },
    Section { id: "contact", label: "Contact" },
];

pub(crate) fn section_ids() -> Vec<&'static str> {
    SECTIONS.iter().map(|section| section.id).collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Experience {
    pub(crate) title: &'static str,
    pub(crate) company: &'static str,
    pub(crate) period: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const EXPERIENCE: [Experience; 3] = [
    Experience {
        title: "Senior Frontend Engineer",
        company: "Northwind Labs",
        period: "2022 – present",
        summary: "Led the migration of the customer dashboard to a component library shared by four teams.",
    },
    Experience {
        title: "Full-Stack Engineer",
        company: "Brightline",
        period: "2019 – 2022",
        summary: "Built billing and reporting services and their admin tooling.",
    },
    Experience {
        title: "Software Developer",
        company: "Harbor Studio",
        period: "2017 – 2019",
        summary: "Delivered client web applications on tight schedules.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Project {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) tags: &'static [&'static str],
    pub(crate) link: &'static str,
}

pub(crate) const PROJECTS: [Project; 3] = [
    Project {
        name: "Tidewatch",
        description: "Realtime status board for distributed jobs.",
        tags: &["Rust", "WebSockets", "SQLite"],
        link: "https://github.com/",
    },
    Project {
        name: "Paperlane",
        description: "Offline-first notes app with conflict-free sync.",
        tags: &["TypeScript", "IndexedDB", "CRDT"],
        link: "https://github.com/",
    },
    Project {
        name: "Lumen UI",
        description: "Accessible component kit with theme tokens.",
        tags: &["Design systems", "CSS", "a11y"],
        link: "https://github.com/",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Skill {
    pub(crate) name: &'static str,
    /// 0..=100
    pub(crate) level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SkillGroup {
    pub(crate) title: &'static str,
    pub(crate) skills: &'static [Skill],
}

pub(crate) const SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        title: "Frontend",
        skills: &[
            Skill { name: "TypeScript", level: 90 },
            Skill { name: "Rust / WASM", level: 75 },
            Skill { name: "CSS", level: 85 },
        ],
    },
    SkillGroup {
        title: "Backend",
        skills: &[
            Skill { name: "Rust", level: 80 },
            Skill { name: "PostgreSQL", level: 75 },
            Skill { name: "Node.js", level: 70 },
        ],
    },
    SkillGroup {
        title: "Tooling",
        skills: &[
            Skill { name: "CI/CD", level: 80 },
            Skill { name: "Observability", level: 65 },
            Skill { name: "Docker", level: 75 },
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Testimonial {
    pub(crate) quote: &'static str,
    pub(crate) author: &'static str,
    pub(crate) role: &'static str,
}

pub(crate) const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "Alex turns vague requirements into software people enjoy using.",
        author: "Priya Shah",
        role: "Product Lead, Northwind Labs",
    },
    Testimonial {
        quote: "Calm under pressure and generous with reviews. The team got better around them.",
        author: "Daniel Okafor",
        role: "Engineering Manager, Brightline",
    },
];

pub(crate) const CONTACT_EMAIL: &str = "hello@example.com";
pub(crate) const CONTACT_LINKS: [(&str, &str); 2] = [
    ("GitHub", "https://github.com/"),
    ("LinkedIn", "https://www.linkedin.com/"),
];
