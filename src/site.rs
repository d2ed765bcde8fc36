//! Static content rendered by the portfolio sections.

pub const OWNER_NAME: &str = "Niladri Sekhar Maji";
pub const OWNER_FIRST_NAME: &str = "Niladri";
pub const OWNER_TITLE: &str = "Full Stack Developer";
pub const PROFILE_IMAGE: &str = "/profile.jpg";
pub const CV_PATH: &str = "/cv.pdf";

/// Every section that owns an in-page anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Certifications,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    /// Sections in the order they are rendered.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Certifications,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Certifications => "certifications",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        icon: "devicon-github-plain",
        href: "https://github.com/nilubhai93",
    },
    SocialLink {
        label: "LinkedIn",
        icon: "devicon-linkedin-plain",
        href: "https://www.linkedin.com/in/niladri-sekhar-maji-475430308",
    },
    SocialLink {
        label: "Email",
        icon: "extra-email",
        href: "mailto:your@email.com",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        label: "Years Exp.",
        value: "2+",
    },
    Stat {
        label: "Projects",
        value: "15+",
    },
    Stat {
        label: "Satisfaction",
        value: "100%",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub accent: &'static str,
}

pub const CERTIFICATIONS: [Certification; 2] = [
    Certification {
        title: "IBM Full Stack Development Training",
        issuer: "IBM",
        description: "Completion of 100 hours training. Built 'SoundScape - Ambient Sound Generator', demonstrating enterprise-level architecture and full-stack integration.",
        link: "https://drive.google.com/file/d/1YK4cVbvyElBMwR6m6cAxpU8WkNypCtHa/view?usp=drivesdk",
        accent: "text-blue-400",
    },
    Certification {
        title: "PW Full Stack Development",
        issuer: "Physics Wallah (PW Skills)",
        description: "Comprehensive Full Stack Development program (April '24). Mastered MERN stack concepts with rigorous hands-on project implementation.",
        link: "https://drive.google.com/file/d/1-DOSLEJ2b2yMNYyBg_HBIGN_hJJnTFZ9/view?usp=drivesdk",
        accent: "text-yellow-400",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Expert => "Expert",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Intermediate => "Intermediate",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            SkillLevel::Expert => "bg-green-500/20 text-green-400 border border-green-500/30",
            SkillLevel::Advanced => "bg-blue-500/20 text-blue-400 border border-blue-500/30",
            SkillLevel::Intermediate => {
                "bg-yellow-500/20 text-yellow-400 border border-yellow-500/30"
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        name: "Frontend",
        skills: &[
            Skill {
                name: "React",
                icon: "devicon-react-original",
                level: SkillLevel::Expert,
            },
            Skill {
                name: "React Native",
                icon: "devicon-react-plain",
                level: SkillLevel::Advanced,
            },
            Skill {
                name: "TypeScript",
                icon: "devicon-typescript-plain",
                level: SkillLevel::Advanced,
            },
            Skill {
                name: "Tailwind CSS",
                icon: "devicon-tailwindcss-original",
                level: SkillLevel::Expert,
            },
        ],
    },
    SkillCategory {
        name: "Backend",
        skills: &[
            Skill {
                name: "Node.js",
                icon: "devicon-nodejs-plain",
                level: SkillLevel::Expert,
            },
            Skill {
                name: "Express",
                icon: "devicon-express-original",
                level: SkillLevel::Advanced,
            },
            Skill {
                name: "Python",
                icon: "devicon-python-plain",
                level: SkillLevel::Intermediate,
            },
        ],
    },
    SkillCategory {
        name: "Database",
        skills: &[
            Skill {
                name: "MongoDB",
                icon: "devicon-mongodb-plain",
                level: SkillLevel::Expert,
            },
            Skill {
                name: "MySQL",
                icon: "devicon-mysql-plain",
                level: SkillLevel::Advanced,
            },
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct MarqueeSkill {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const MARQUEE_SKILLS: [MarqueeSkill; 9] = [
    MarqueeSkill {
        name: "React",
        icon: "devicon-react-original",
        color: "text-cyan-400",
    },
    MarqueeSkill {
        name: "Node.js",
        icon: "devicon-nodejs-plain",
        color: "text-green-400",
    },
    MarqueeSkill {
        name: "MongoDB",
        icon: "devicon-mongodb-plain",
        color: "text-green-500",
    },
    MarqueeSkill {
        name: "TypeScript",
        icon: "devicon-typescript-plain",
        color: "text-blue-400",
    },
    MarqueeSkill {
        name: "React Native",
        icon: "devicon-react-plain",
        color: "text-cyan-400",
    },
    MarqueeSkill {
        name: "Tailwind CSS",
        icon: "devicon-tailwindcss-original",
        color: "text-teal-400",
    },
    MarqueeSkill {
        name: "MySQL",
        icon: "devicon-mysql-plain",
        color: "text-blue-500",
    },
    MarqueeSkill {
        name: "Python",
        icon: "devicon-python-plain",
        color: "text-yellow-400",
    },
    MarqueeSkill {
        name: "Express",
        icon: "devicon-express-original",
        color: "text-gray-400",
    },
];

/// Copies of the marquee list laid end to end so the loop never shows a gap.
pub const MARQUEE_COPIES: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct Proficiency {
    pub name: &'static str,
    pub percent: u8,
}

pub const PROFICIENCIES: [Proficiency; 5] = [
    Proficiency {
        name: "MERN Stack",
        percent: 95,
    },
    Proficiency {
        name: "React Native",
        percent: 90,
    },
    Proficiency {
        name: "Database Design",
        percent: 88,
    },
    Proficiency {
        name: "API Development",
        percent: 92,
    },
    Proficiency {
        name: "UI/UX Implementation",
        percent: 85,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub years: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCE: [Role; 3] = [
    Role {
        title: "Senior Frontend Architect",
        company: "TechNova Agency",
        years: "2023 - Present",
        description: "Leading frontend architecture for enterprise clients using Next.js and Micro-frontends.",
    },
    Role {
        title: "Full Stack Developer",
        company: "Innovate Solutions",
        years: "2021 - 2023",
        description: "Developed scalable APIs and interactive dashboards for FinTech sector.",
    },
    Role {
        title: "IBM Full Stack Training",
        company: "IBM Certified",
        years: "2020",
        description: "Intensive training program covering Cloud Native methodologies, DevOps, and Advanced DB management.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Educational CRM Platform",
        category: "Enterprise System",
        description: "Complete customer relationship management system for educational institutions with student tracking, enrollment management, and analytics dashboard.",
        tech: &["React", "Node.js", "MySQL", "JWT"],
        features: &["500+ Students", "Real-time Analytics", "Role-based Access"],
    },
    Project {
        title: "Learning Management System",
        category: "Educational Platform",
        description: "Scalable LMS with course management, live sessions, assignment tracking, and automated grading serving 1000+ active users.",
        tech: &["React", "Python", "MongoDB", "WebSocket"],
        features: &["1000+ Users", "Live Classes", "AI Grading"],
    },
    Project {
        title: "Hostel Management System",
        category: "Property Management",
        description: "Comprehensive hostel and hotel management platform with booking, billing, room allocation, and maintenance tracking.",
        tech: &["React Native", "Node.js", "MySQL", "Redis"],
        features: &["Multi-property", "Automated Billing", "Mobile App"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_ids_unique() {
        let ids = Section::ALL.iter().map(|s| s.id()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), Section::ALL.len());
        assert_eq!(Section::Contact.href(), "#contact");
    }

    #[test]
    fn test_proficiency_within_bounds() {
        assert!(PROFICIENCIES.iter().all(|p| p.percent <= 100));
    }
}
