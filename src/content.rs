//! Copy and listings shown on the page.

pub const COMPANY: &str = "RoofReplacementsLLC";

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#services", label: "Services" },
    NavLink { href: "#portfolio", label: "Portfolio" },
    NavLink { href: "#about", label: "About Us" },
    NavLink { href: "#contact", label: "Contact" },
];

pub struct SocialLink {
    pub label: &'static str,
    pub glyph: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Facebook", glyph: "f", url: "#" },
    SocialLink { label: "Twitter", glyph: "𝕏", url: "#" },
    SocialLink { label: "LinkedIn", glyph: "in", url: "#" },
    SocialLink { label: "Instagram", glyph: "◎", url: "#" },
];

pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        icon: "🏠",
        title: "Roof Replacement",
        description: "Complete tear-off and replacement using high-quality materials and expert installation for a durable, long-lasting roof that enhances your home's value and protection.",
    },
    ServiceCard {
        icon: "🔧",
        title: "Roof Repairs",
        description: "Fast, reliable repairs for leaks, storm damage, missing shingles, and general wear to extend your roof's lifespan and prevent further issues.",
    },
    ServiceCard {
        icon: "🔍",
        title: "Roof Inspections",
        description: "Comprehensive visual and structural inspections to assess roof condition, identify potential problems early, and provide detailed reports for maintenance or real estate purposes.",
    },
];

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "🏆",
        title: "25+ Years Experience",
        description: "Decades of industry expertise and thousands of successful projects completed.",
    },
    Highlight {
        icon: "🛡️",
        title: "Licensed & Insured",
        description: "Fully licensed, bonded, and insured for your complete protection and peace of mind.",
    },
    Highlight {
        icon: "⏱️",
        title: "On-Time Completion",
        description: "We respect your time with efficient project management and timely completion.",
    },
    Highlight {
        icon: "💎",
        title: "Premium Materials",
        description: "We use only top-quality materials from trusted manufacturers with excellent warranties.",
    },
];

pub const PARTNER_LOGOS: &[&str] = &[
    "/assets/certifications/791-7916366_master-shingle-applicator-certainteed-logo-master-shingle-applicator.png",
    "/assets/certifications/Atlas-768x469.png",
    "/assets/certifications/FRSA-blue-website-member-300dpi-1-768x768.jpg",
    "/assets/certifications/NEW.png",
    "/assets/certifications/TRI-logo-removebg-preview.png",
    "/assets/certifications/br-logo-w-roof-tile-components-print-1-e1574450520947.jpg",
    "/assets/certifications/eagle-roofing-logo.png",
    "/assets/certifications/gaf-logo.png",
    "/assets/certifications/tamko-logo-768x576.png",
];

#[derive(Debug, PartialEq)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    /// Placeholder image url without extension or caption.
    pub image_base: &'static str,
    pub caption: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

impl PortfolioItem {
    pub fn thumbnail_url(&self) -> String {
        format!("{}.png?text={}", self.image_base, self.caption)
    }
}

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        id: 1,
        title: "Modern Residence Roof",
        category: "Replacement",
        image_base: "https://placehold.co/600x400/grey/white",
        caption: "Project+1",
        description: "Complete asphalt shingle roof replacement...",
        details: &[
            "GAF Timberline HDZ Shingles",
            "Synthetic Underlayment",
            "Improved Ventilation System",
        ],
    },
    PortfolioItem {
        id: 2,
        title: "Commercial Flat Roof",
        category: "Repair",
        image_base: "https://placehold.co/600x400/dimgray/white",
        caption: "Project+2",
        description: "Leak detection and repair...",
        details: &["TPO Membrane Patching", "Seam Inspection and Repair", "Drainage Cleaning"],
    },
    PortfolioItem {
        id: 3,
        title: "Suburban Home Inspection",
        category: "Inspection",
        image_base: "https://placehold.co/600x400/darkgray/white",
        caption: "Project+3",
        description: "Detailed pre-sale roof inspection...",
        details: &[
            "Drone Inspection Utilized",
            "Comprehensive Report Provided",
            "Minor Sealant Repairs Recommended",
        ],
    },
    PortfolioItem {
        id: 4,
        title: "Luxury Villa Tile Roof",
        category: "Replacement",
        image_base: "https://placehold.co/600x400/gray/white",
        caption: "Project+4",
        description: "Installation of premium clay tile roofing...",
        details: &["Spanish Clay Tiles", "Copper Flashing Details", "Enhanced Water Shielding"],
    },
    PortfolioItem {
        id: 5,
        title: "Historic Property Slate Repair",
        category: "Repair",
        image_base: "https://placehold.co/600x400/silver/black",
        caption: "Project+5",
        description: "Careful repair and replacement...",
        details: &["Salvaged Slate Matching", "Traditional Copper Work", "Structural Assessment"],
    },
    PortfolioItem {
        id: 6,
        title: "New Construction Shingles",
        category: "Installation",
        image_base: "https://placehold.co/600x400/lightgray/black",
        caption: "Project+6",
        description: "Efficient installation of architectural shingles...",
        details: &[
            "Owens Corning Duration Shingles",
            "Ice & Water Shield Application",
            "Ridge Vent Installation",
        ],
    },
];

pub fn portfolio_item(id: u32) -> Option<&'static PortfolioItem> {
    PORTFOLIO.iter().find(|item| item.id == id)
}

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub rating: u8,
}

pub const MAX_RATING: u8 = 5;

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "RoofReplacementsLLC did an outstanding job on our new roof. Professional, efficient, and the quality is top-notch! We felt informed throughout the whole process.",
        name: "John D.",
        location: "Orlando, FL",
        rating: 5,
    },
    Testimonial {
        quote: "Their team was courteous and cleaned up perfectly after the job was done. The repair was done quickly and effectively. Highly recommend their services!",
        name: "Sarah M.",
        location: "Winter Park, FL",
        rating: 5,
    },
    Testimonial {
        quote: "From the initial inspection to the final walkthrough, the process was seamless and stress-free. Very happy with the result and the professionalism.",
        name: "David R.",
        location: "Lake Mary, FL",
        rating: 5,
    },
    Testimonial {
        quote: "Found a leak that two other companies missed. They fixed it promptly and at a fair price. Excellent communication.",
        name: "Emily C.",
        location: "Altamonte Springs, FL",
        rating: 4,
    },
    Testimonial {
        quote: "The new roof looks fantastic and the installation crew was incredibly professional and efficient. Would definitely use them again.",
        name: "Michael B.",
        location: "Oviedo, FL",
        rating: 5,
    },
    Testimonial {
        quote: "Great value and excellent service. They explained all the options clearly and helped us choose the best roof for our budget.",
        name: "Jessica L.",
        location: "Casselberry, FL",
        rating: 5,
    },
];

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2010",
        title: "Foundation Laid",
        description: "RoofReplacementsLLC founded with a commitment to quality and customer service.",
    },
    Milestone {
        year: "2015",
        title: "Expansion",
        description: "Expanded services to cover the wider Central Florida region.",
    },
    Milestone {
        year: "2018",
        title: "Milestone",
        description: "Completed our 500th successful roof replacement project.",
    },
    Milestone {
        year: "2022",
        title: "Innovation",
        description: "Integrated drone technology for advanced roof inspections.",
    },
    Milestone {
        year: "Present",
        title: "Continued Growth",
        description: "Consistently recognized for excellence and reliability in roofing.",
    },
];

pub const VALUES: &[&str] = &[
    "Quality Craftsmanship",
    "Customer Satisfaction",
    "Integrity and Honesty",
    "Safety First",
    "Continuous Improvement",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_ids_are_unique_and_findable() {
        for item in PORTFOLIO {
            assert_eq!(portfolio_item(item.id), Some(item));
        }
        assert_eq!(portfolio_item(99), None);
    }

    #[test]
    fn thumbnail_carries_the_caption() {
        assert_eq!(
            PORTFOLIO[0].thumbnail_url(),
            "https://placehold.co/600x400/grey/white.png?text=Project+1"
        );
    }

    #[test]
    fn ratings_fit_the_star_row() {
        assert!(TESTIMONIALS.iter().all(|t| t.rating <= MAX_RATING));
    }

    #[test]
    fn nav_links_point_at_page_anchors() {
        assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('#')));
    }
}
