//! Display copy for the home page. Constant and compiled in.

pub const BRAND: &str = "BIOBRIM";
pub const PAGE_TITLE: &str = "BIOBRIM - Biomass Pellet Trading Platform";
pub const PAGE_DESCRIPTION: &str = "BIOBRIM is a revolutionary platform bridging the gap between farmers and manufacturing companies in the biomass pellet industry, fostering sustainable practices and circular economy.";

/// DOM ids of the sections inside `<main>`, in page order.
pub const SECTION_ORDER: [&str; 6] = [
    "hero",
    "about",
    "how-it-works",
    "benefits",
    "registration",
    "contact",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub icon: &'static str,
    pub value: i64,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegistrationCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
    pub button: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenefitCard {
    pub title: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubjectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#hero", text: "Home" },
    NavLink { href: "#about", text: "About" },
    NavLink { href: "#how-it-works", text: "How it Works" },
    NavLink { href: "#benefits", text: "Benefits" },
    NavLink { href: "#contact", text: "Contact" },
];

pub mod images {
    pub const LOGO: &str = "/assets/images/logo.svg";
    pub const HERO_PELLETS: &str = "https://images.unsplash.com/photo-1611284446314-60a58ac0deb9?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80";
    pub const HERO_FARMING: &str = "https://images.unsplash.com/photo-1471193945509-9ad0617afabf?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80";
    pub const ABOUT_MISSION: &str = "https://images.unsplash.com/photo-1605000797499-95a51c5269ae?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80";
    pub const PLATFORM_DASHBOARD: &str = "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80";
    pub const BENEFITS_FARMERS: &str = "https://images.unsplash.com/photo-1500937386664-56d1dfef3854?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80";
    pub const BENEFITS_COMPANIES: &str = "https://images.unsplash.com/photo-1587293852726-70cdb56c2866?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80";
    pub const BENEFITS_ENVIRONMENT: &str = "https://images.unsplash.com/photo-1497435571905-a08c04f8f5e0?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80";
    pub const CTA_BACKGROUND: &str = "https://images.unsplash.com/photo-1473973266408-ed4e27abdd47?ixlib=rb-1.2.1&auto=format&fit=crop&w=2000&q=80";
}

pub mod hero {
    pub const LEAD: &str = "BIOBRIM is a revolutionary platform bridging the gap between farmers and manufacturing companies in the biomass pellet industry, fostering sustainable practices and circular economy.";
}

pub mod about {
    use super::IconItem;

    pub const INTRO: &str = "Founded with a vision to revolutionize the biomass industry, BIOBRIM creates a sustainable ecosystem where farmers and manufacturers collaborate effortlessly.";

    pub const CARDS: &[IconItem] = &[
        IconItem {
            icon: "fas fa-leaf",
            title: "Eco-Friendly Solution",
            description: "Supporting sustainable practices by creating a circular economy for biomass resources, reducing waste and carbon footprint.",
        },
        IconItem {
            icon: "fas fa-handshake",
            title: "Direct Connection",
            description: "Eliminating middlemen to create fair pricing and transparent transactions between farmers and manufacturing companies.",
        },
        IconItem {
            icon: "fas fa-chart-line",
            title: "Market Growth",
            description: "Expanding opportunities for biomass producers while providing reliable supply chains for manufacturing industries.",
        },
    ];

    pub const MISSION: &str = "To create a sustainable ecosystem where biomass resources are efficiently utilized, benefiting both agricultural communities and industrial partners while contributing to environmental preservation.";

    pub const MISSION_POINTS: &[&str] = &[
        "Promote sustainable farming practices",
        "Reduce carbon footprint through efficient resource utilization",
        "Create economic opportunities for rural communities",
    ];
}

pub mod how_it_works {
    use super::{IconItem, Step};

    pub const INTRO: &str = "Our platform connects biomass producers directly with manufacturing companies through a simple and efficient process.";

    pub const STEPS: &[Step] = &[
        Step {
            icon: "fas fa-tractor",
            title: "Farmers",
            description: "Farmers register and list their available biomass pellets with detailed specifications.",
            items: &[
                "Register & create profile",
                "List biomass pellets",
                "Review offers & negotiate",
                "Complete transactions",
            ],
        },
        Step {
            icon: "fas fa-exchange-alt",
            title: "BIOBRIM Platform",
            description: "Our platform facilitates secure matching, negotiations, and transactions between parties.",
            items: &[
                "Smart matching algorithm",
                "Secure communication channel",
                "Transparent pricing",
                "Quality verification",
            ],
        },
        Step {
            icon: "fas fa-industry",
            title: "Companies",
            description: "Manufacturing companies browse listings, make offers, and complete purchases.",
            items: &[
                "Register & specify requirements",
                "Browse available pellets",
                "Make offers to farmers",
                "Complete secure transactions",
            ],
        },
    ];

    pub const DASHBOARD_INTRO: &str = "Our platform features a user-friendly dashboard tailored to your role, whether you're a farmer or manufacturing company.";

    pub const DASHBOARD_FEATURES: &[IconItem] = &[
        IconItem {
            icon: "fa-search",
            title: "Easy Search & Filter",
            description: "Find exactly what you need with powerful search tools",
        },
        IconItem {
            icon: "fa-chart-bar",
            title: "Real-time Analytics",
            description: "Track your performance and market trends",
        },
        IconItem {
            icon: "fa-bell",
            title: "Smart Notifications",
            description: "Stay updated with relevant alerts and opportunities",
        },
    ];
}

pub mod benefits {
    use super::{images, BenefitCard, IconItem, Stat};

    pub const INTRO: &str = "Discover how BIOBRIM creates a win-win ecosystem for all participants in the biomass pellet industry.";

    pub const CARDS: &[BenefitCard] = &[
        BenefitCard {
            title: "For Farmers",
            image: images::BENEFITS_FARMERS,
            alt: "Farmers Benefits",
            items: &[
                "Direct access to multiple buyers",
                "Better pricing through elimination of middlemen",
                "Expanded market reach beyond local areas",
                "Market insights and demand forecasting",
                "Flexible selling options (spot or contract)",
            ],
        },
        BenefitCard {
            title: "For Companies",
            image: images::BENEFITS_COMPANIES,
            alt: "Companies Benefits",
            items: &[
                "Reliable supply chain for biomass materials",
                "Quality verification and standardization",
                "Cost reduction through direct procurement",
                "Access to diverse biomass sources",
                "Simplified logistics and delivery tracking",
            ],
        },
    ];

    pub const IMPACT_INTRO: &str = "Beyond business benefits, BIOBRIM contributes significantly to environmental sustainability and circular economy initiatives.";

    pub const IMPACT: &[IconItem] = &[
        IconItem {
            icon: "fa-recycle",
            title: "Waste Reduction",
            description: "Repurposing agricultural waste into valuable resources",
        },
        IconItem {
            icon: "fa-leaf",
            title: "Carbon Footprint",
            description: "Lower emissions compared to fossil fuel alternatives",
        },
        IconItem {
            icon: "fa-seedling",
            title: "Sustainable Practices",
            description: "Encouraging responsible resource management",
        },
        IconItem {
            icon: "fa-globe-americas",
            title: "Renewable Energy",
            description: "Supporting the transition to cleaner energy sources",
        },
    ];

    pub const STATS: &[Stat] = &[
        Stat { icon: "fa-users", value: 500, label: "Active Farmers" },
        Stat { icon: "fa-industry", value: 150, label: "Partner Companies" },
        Stat { icon: "fa-exchange-alt", value: 2500, label: "Transactions Monthly" },
        Stat { icon: "fa-globe", value: 15, label: "Countries Served" },
    ];
}

pub mod cta {
    use super::RegistrationCard;

    pub const INTRO: &str = "Register today to become part of the growing BIOBRIM community and unlock new opportunities.";

    pub const CARDS: &[RegistrationCard] = &[
        RegistrationCard {
            icon: "fas fa-tractor",
            title: "Farmers",
            description: "Join as a biomass producer and connect with manufacturing companies seeking your products.",
            items: &[
                "List your pellets on the marketplace",
                "Receive direct purchase offers",
                "Access market insights & trends",
            ],
            button: "Register as Farmer",
            href: "#contact",
        },
        RegistrationCard {
            icon: "fas fa-industry",
            title: "Companies",
            description: "Sign up as a manufacturing company to access a reliable supply of quality biomass pellets.",
            items: &[
                "Browse available pellet listings",
                "Post your specific requirements",
                "Secure your supply chain",
            ],
            button: "Register as Company",
            href: "#contact",
        },
    ];
}

pub mod contact {
    use super::{IconItem, SubjectOption};

    pub const INTRO: &str = "Have questions? Reach out to our team for more information about BIOBRIM and how we can help you.";

    pub const INFO: &[IconItem] = &[
        IconItem {
            icon: "fa-map-marker-alt",
            title: "Our Office",
            description: "123 Green Energy Blvd, EcoCity, EC 12345",
        },
        IconItem {
            icon: "fa-phone-alt",
            title: "Phone",
            description: "+1 (555) 123-4567",
        },
        IconItem {
            icon: "fa-envelope",
            title: "Email",
            description: "info@biobrim.com",
        },
        IconItem {
            icon: "fa-clock",
            title: "Operating Hours",
            description: "Monday - Friday: 9AM - 5PM",
        },
    ];

    pub const SUBJECTS: &[SubjectOption] = &[
        SubjectOption { value: "general", label: "General Inquiry" },
        SubjectOption { value: "farmer", label: "Farmer Registration" },
        SubjectOption { value: "company", label: "Company Registration" },
        SubjectOption { value: "support", label: "Technical Support" },
        SubjectOption { value: "partnership", label: "Partnership Opportunities" },
    ];
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: "fa-facebook-f", href: "#" },
    SocialLink { icon: "fa-twitter", href: "#" },
    SocialLink { icon: "fa-linkedin-in", href: "#" },
    SocialLink { icon: "fa-instagram", href: "#" },
];

pub mod footer {
    use super::{FooterColumn, NavLink};

    pub const BLURB: &str = "Connecting biomass producers with manufacturing companies to create a sustainable ecosystem and circular economy.";

    pub const COLUMNS: &[FooterColumn] = &[
        FooterColumn {
            title: "Quick Links",
            links: &[
                NavLink { text: "Home", href: "#" },
                NavLink { text: "About Us", href: "#about" },
                NavLink { text: "How It Works", href: "#how-it-works" },
                NavLink { text: "Benefits", href: "#benefits" },
                NavLink { text: "Contact", href: "#contact" },
                NavLink { text: "Blog", href: "#" },
            ],
        },
        FooterColumn {
            title: "For Farmers",
            links: &[
                NavLink { text: "How to Register", href: "#" },
                NavLink { text: "Selling Guide", href: "#" },
                NavLink { text: "Pricing & Fees", href: "#" },
                NavLink { text: "Farmer FAQ", href: "#" },
                NavLink { text: "Success Stories", href: "#" },
            ],
        },
        FooterColumn {
            title: "For Companies",
            links: &[
                NavLink { text: "Company Registration", href: "#" },
                NavLink { text: "Buying Process", href: "#" },
                NavLink { text: "Quality Standards", href: "#" },
                NavLink { text: "Company FAQ", href: "#" },
                NavLink { text: "Case Studies", href: "#" },
            ],
        },
    ];

    pub const LEGAL: &[&str] = &["Privacy Policy", "Terms of Service", "Cookie Policy"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_metadata_matches_the_shell_page() {
        let shell = include_str!("../index.html");
        assert!(shell.contains(&format!("<title>{}</title>", PAGE_TITLE)));
        assert!(shell.contains(&format!("content=\"{}\"", PAGE_DESCRIPTION)));
    }

    #[test]
    fn every_nav_link_points_at_a_section() {
        for link in NAV_LINKS {
            let id = link.href.trim_start_matches('#');
            assert!(SECTION_ORDER.contains(&id), "{} has no section", link.href);
        }
    }

    #[test]
    fn sections_are_in_page_order() {
        assert_eq!(SECTION_ORDER.first(), Some(&"hero"));
        assert_eq!(SECTION_ORDER.last(), Some(&"contact"));
        let about = SECTION_ORDER.iter().position(|s| *s == "about").unwrap();
        let benefits = SECTION_ORDER.iter().position(|s| *s == "benefits").unwrap();
        assert!(about < benefits);
    }

    #[test]
    fn statistics_match_the_published_figures() {
        let values: Vec<i64> = benefits::STATS.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![500, 150, 2500, 15]);
    }
}
