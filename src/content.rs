//! Static page copy. Everything here is compiled in and never changes at runtime.

use crate::contact::DEFAULT_SERVICE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const HEADER_LINKS: [NavLink; 6] = [
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Why Us", href: "#why-us" },
    NavLink { label: "Process", href: "#process" },
    NavLink { label: "Portfolio", href: "#portfolio" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const FOOTER_LINKS: [NavLink; 7] = [
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Why Us", href: "#why-us" },
    NavLink { label: "Process", href: "#process" },
    NavLink { label: "Portfolio", href: "#portfolio" },
    NavLink { label: "Contact", href: "#contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialIcon {
    Instagram,
    Twitter,
    Facebook,
    LinkedIn,
    Email,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

pub const SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink { label: "Instagram", href: "https://instagram.com", icon: SocialIcon::Instagram },
    SocialLink { label: "Twitter", href: "https://twitter.com", icon: SocialIcon::Twitter },
    SocialLink { label: "Facebook", href: "https://facebook.com", icon: SocialIcon::Facebook },
    SocialLink { label: "LinkedIn", href: "https://linkedin.com", icon: SocialIcon::LinkedIn },
    SocialLink { label: "Email", href: "mailto:contact@luxaicreations.com", icon: SocialIcon::Email },
];

pub const HERO_TITLE: &str = "Luxury AI Content Studio";
pub const HERO_SUBTITLE: &str =
    "We create cinematic visuals, videos, and portfolio-ready content for high-end brands";
pub const HERO_VIDEO: &str = "/assets/videos/modelfacecloseup.mp4";

pub const ABOUT_COPY: &str = "We merge state-of-the-art AI with artistic mastery to produce visuals that captivate and inspire. Our studio specializes in crafting hyper-realistic CGI and cinematic content that captures the essence of luxury.";
pub const ABOUT_KEY_POINTS: [&str; 4] = [
    "Cinematic Videos",
    "Hyper-Realistic CGI Ads",
    "AI Portfolio Images",
    "Luxury Brand Visuals",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AboutImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub parallax_speed: f64,
}

pub const ABOUT_IMAGES: [AboutImage; 2] = [
    AboutImage {
        src: "/assets/images/icedout reveal.png",
        alt: "Luxury golden bracelet on a marble surface",
        parallax_speed: 0.1,
    },
    AboutImage {
        src: "/assets/images/desertqueen.png",
        alt: "Woman in a pink dress in a field of flowers",
        parallax_speed: 0.05,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceIcon {
    Video,
    Image,
    Visuals,
    Cgi,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub video_src: &'static str,
    pub icon: ServiceIcon,
}

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Cinematic Videos",
        description: "Bespoke cinematic videos and product reveals that captivate your audience.",
        video_src: "/assets/videos/rollsroyals.mp4",
        icon: ServiceIcon::Video,
    },
    Service {
        title: "AI Portfolio Images",
        description: "Photorealistic images for campaigns and portfolios in any aspect ratio.",
        video_src: "/assets/videos/modelfacecloseup.mp4",
        icon: ServiceIcon::Image,
    },
    Service {
        title: "Luxury Brand Visuals",
        description: "High-end visual content that embodies your brand's unique identity and story.",
        video_src: "/assets/videos/transformation.mp4",
        icon: ServiceIcon::Visuals,
    },
    Service {
        title: "Bespoke AI Concepts & CGI Ads",
        description: "From concept to creation, we develop stunning CGI ads and unique visual identities that defy convention.",
        video_src: "/assets/videos/transform1.mp4",
        icon: ServiceIcon::Cgi,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReasonIcon {
    Quality,
    Creativity,
    Partnership,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reason {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: ReasonIcon,
}

pub const REASONS: [Reason; 3] = [
    Reason {
        title: "Uncompromising Quality",
        description: "We deliver pixel-perfect, high-fidelity content that meets the most demanding standards of luxury branding.",
        icon: ReasonIcon::Quality,
    },
    Reason {
        title: "Boundless Creativity",
        description: "Our blend of human artistry and AI power allows us to explore and execute concepts previously unimaginable.",
        icon: ReasonIcon::Creativity,
    },
    Reason {
        title: "Dedicated Partnership",
        description: "We work closely with you as a creative partner, ensuring your vision is realized to its fullest potential.",
        icon: ReasonIcon::Partnership,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepIcon {
    Discovery,
    Ideation,
    Production,
    Delivery,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: StepIcon,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        title: "01. Discovery & Vision",
        description: "We begin by immersing ourselves in your brand's world to define the creative vision and objectives.",
        icon: StepIcon::Discovery,
    },
    ProcessStep {
        title: "02. AI-Powered Ideation",
        description: "Leveraging advanced AI, we generate and refine a multitude of concepts, pushing creative boundaries.",
        icon: StepIcon::Ideation,
    },
    ProcessStep {
        title: "03. Cinematic Production",
        description: "Our artists and technicians bring the chosen concept to life with meticulous attention to detail.",
        icon: StepIcon::Production,
    },
    ProcessStep {
        title: "04. Delivery & Impact",
        description: "We deliver the final assets, optimized for maximum impact across all your brand's platforms.",
        icon: StepIcon::Delivery,
    },
];

pub const CONTACT_INTRO: &str = "Ready to elevate your brand? Reach out to us to discuss your vision, and let's create something extraordinary together.";

/// Options for the contact form's service select, in display order.
pub fn contact_service_options() -> Vec<String> {
    std::iter::once(DEFAULT_SERVICE.to_string())
        .chain(SERVICES.iter().map(|service| service.title.to_string()))
        .chain(REASONS.iter().map(|reason| format!("{} Inquiry", reason.title)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_options_start_with_general_inquiry() {
        let options = contact_service_options();

        assert_eq!(options.len(), 1 + SERVICES.len() + REASONS.len());
        assert_eq!(options[0], "General Inquiry");
        assert_eq!(options[1], "Cinematic Videos");
        assert_eq!(options.last().map(String::as_str), Some("Dedicated Partnership Inquiry"));
    }

    #[test]
    fn header_links_point_at_page_sections() {
        assert!(HEADER_LINKS.iter().all(|link| link.href.starts_with('#')));
        assert!(FOOTER_LINKS.iter().any(|link| link.href == "#home"));
    }
}
