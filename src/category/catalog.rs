//! Curated title tables and page copy for every category

use super::template::{
    Breadcrumb, CallToAction, CategoryTemplate, FooterColumn, NavLink, RelatedCard,
    RelatedSection, SchemaCopy,
};
use crate::content::title::CuratedArticle;

/// The long-form articles, in filename order
pub const ARTICLES: &[CuratedArticle] = &[
    CuratedArticle {
        file: "01_Bitcoin_Sovereignty_Complete_Guide.md",
        slug: "bitcoin-sovereignty-guide",
        title: "The Complete Guide to Bitcoin Sovereignty",
        description: "Master Bitcoin sovereignty with comprehensive guidance on self-custody, legal frameworks, estate planning, and wealth protection strategies.",
        read_time: "45 min",
    },
    CuratedArticle {
        file: "02_Executive_Order_6102_Bitcoin_Lessons.md",
        slug: "executive-order-6102",
        title: "Executive Order 6102: Bitcoin Lessons from Gold Confiscation",
        description: "Learn from history's most significant wealth confiscation event and discover how Bitcoin provides unprecedented protection against government overreach.",
        read_time: "35 min",
    },
    CuratedArticle {
        file: "03_KEEP_Protocol_Professional_Standards.md",
        slug: "keep-protocol-standards",
        title: "KEEP Protocol: Professional Standards Framework",
        description: "The industry's comprehensive certification and standards framework for Bitcoin estate planning professionals and institutional implementation.",
        read_time: "30 min",
    },
    CuratedArticle {
        file: "04_Bitcoin_Estate_Planning_Complete_Guide.md",
        slug: "bitcoin-estate-planning",
        title: "The Definitive Bitcoin Estate Planning Guide",
        description: "Comprehensive strategies for structuring, securing, and transferring Bitcoin wealth across generations with legal certainty and technical security.",
        read_time: "40 min",
    },
    CuratedArticle {
        file: "05_Government_Confiscation_History_Bitcoin_Protection.md",
        slug: "government-confiscation-history",
        title: "Government Confiscation: History and Bitcoin Protection",
        description: "Complete historical analysis of wealth confiscation from ancient Rome to modern times, and how Bitcoin's design prevents government seizure.",
        read_time: "45 min",
    },
];

/// Trailing phrase of state guide filenames
pub const STATE_SUFFIX: &str = " Bitcoin Estate Planning";

pub const PROFESSIONAL_TITLES: &[(&str, &str)] = &[
    (
        "Estate Planning Attorney Bitcoin Guide",
        "Estate Planning Attorney Bitcoin Guide",
    ),
    (
        "Financial Advisor Bitcoin Estate Planning Guide",
        "Financial Advisor Bitcoin Estate Planning Guide",
    ),
    (
        "CPA Tax Professional Bitcoin Estate Planning Guide",
        "CPA Tax Professional Bitcoin Guide",
    ),
    (
        "Bitcoin Security Implementation Guide",
        "Bitcoin Security Implementation Guide",
    ),
    (
        "Bitcoin Estate Planning Technology Stack",
        "Bitcoin Estate Planning Technology Stack",
    ),
    (
        "Bitcoin Inheritance Procedures Protocols",
        "Bitcoin Inheritance Procedures & Protocols",
    ),
    (
        "Bitcoin Compliance Regulatory Framework",
        "Bitcoin Compliance & Regulatory Framework",
    ),
    (
        "Bitcoin Professional Certification Training",
        "Bitcoin Professional Certification & Training",
    ),
    (
        "Bitcoin Professional Service Delivery Systems",
        "Bitcoin Professional Service Delivery",
    ),
    (
        "Bitcoin Professional Practice Management Business Development",
        "Bitcoin Practice Management & Business Development",
    ),
];

pub const TOOL_TITLES: &[(&str, &str)] = &[
    (
        "Bitcoin Estate Planning Assessment Checklist",
        "Bitcoin Estate Planning Assessment Checklist",
    ),
    (
        "Bitcoin Security Implementation Framework",
        "Bitcoin Security Implementation Framework",
    ),
    (
        "Bitcoin Estate Planning Document Templates",
        "Bitcoin Estate Planning Document Templates",
    ),
    (
        "Bitcoin Tax Planning Compliance Toolkit",
        "Bitcoin Tax Planning & Compliance Toolkit",
    ),
    (
        "Bitcoin Family Education Training Program",
        "Bitcoin Family Education & Training Program",
    ),
    (
        "Bitcoin Professional Coordination Framework",
        "Bitcoin Professional Coordination Framework",
    ),
    (
        "Bitcoin Emergency Response Disaster Recovery Procedures",
        "Bitcoin Emergency Response & Disaster Recovery",
    ),
    (
        "Bitcoin Performance Monitoring Optimization System",
        "Bitcoin Performance Monitoring & Optimization",
    ),
    (
        "Bitcoin Client Onboarding Assessment Procedures",
        "Bitcoin Client Onboarding & Assessment",
    ),
    (
        "Bitcoin Implementation Roadmap Project Management System",
        "Bitcoin Implementation Roadmap & Project Management",
    ),
];

/// Matched against the raw filename, first hit wins
pub const WEALTH_MARKERS: &[(&str, &str)] = &[
    ("100K_500K", "Bitcoin Estate Planning for $100K-$500K"),
    ("500K_1M", "Bitcoin Estate Planning for $500K-$1M"),
    ("1M_2M", "Bitcoin Estate Planning for $1M-$2M"),
    ("2M_5M", "Bitcoin Estate Planning for $2M-$5M"),
    ("5M_10M", "Bitcoin Estate Planning for $5M-$10M"),
    ("10M_Plus", "Bitcoin Estate Planning for $10M+"),
    ("Inheritance", "Bitcoin Inheritance Planning"),
    ("Business_Owner", "Business Owner Bitcoin Estate Planning"),
    ("Young_Professional", "Young Professional Bitcoin Estate Planning"),
    ("Retirement", "Retirement Bitcoin Estate Planning"),
];

const CONSULTATION: NavLink = NavLink {
    label: "Schedule a Consultation",
    url: "/consultation",
};

const ABOUT: NavLink = NavLink {
    label: "About",
    url: "/about",
};
const SERVICES: NavLink = NavLink {
    label: "Services",
    url: "/services/",
};
const STATE_GUIDES: NavLink = NavLink {
    label: "State Guides",
    url: "/states/",
};
const WEALTH_GUIDES: NavLink = NavLink {
    label: "Wealth Guides",
    url: "/wealth/",
};
const FOR_PROFESSIONALS: NavLink = NavLink {
    label: "For Professionals",
    url: "/professionals/",
};
const TOOLS: NavLink = NavLink {
    label: "Tools & Templates",
    url: "/tools/",
};
const KEEP_PROTOCOL: NavLink = NavLink {
    label: "KEEP Protocol",
    url: "/keep-protocol/",
};
const LEARN: NavLink = NavLink {
    label: "Learn",
    url: "/learn/",
};
const CONTACT: NavLink = NavLink {
    label: "Contact",
    url: "/contact",
};

const ABOUT_US: NavLink = NavLink {
    label: "About Us",
    url: "/about",
};
const KNOWLEDGE_CENTER: NavLink = NavLink {
    label: "Knowledge Center",
    url: "/learn/",
};
const SCHEDULE_CONSULTATION: NavLink = NavLink {
    label: "Schedule Consultation",
    url: "/consultation",
};
const PRIVACY: NavLink = NavLink {
    label: "Privacy Policy",
    url: "/privacy",
};
const TERMS: NavLink = NavLink {
    label: "Terms of Service",
    url: "/terms",
};
const DISCLAIMER: NavLink = NavLink {
    label: "Disclaimer",
    url: "/disclaimer",
};

const SERVICES_COLUMN: FooterColumn = FooterColumn {
    heading: "Services",
    links: &[
        NavLink {
            label: "Estate Planning",
            url: "/services/bitcoin-estate-planning",
        },
        KEEP_PROTOCOL,
        NavLink {
            label: "Family Office",
            url: "/services/family-office",
        },
        NavLink {
            label: "Corporate Treasury",
            url: "/services/corporate-treasury",
        },
    ],
};

const LEGAL_COLUMN: FooterColumn = FooterColumn {
    heading: "Legal",
    links: &[PRIVACY, TERMS, DISCLAIMER],
};

const COMPANY_COLUMN: FooterColumn = FooterColumn {
    heading: "Company",
    links: &[ABOUT_US, CONTACT, PRIVACY, TERMS],
};

const LAST_UPDATED: &str = "January 2025";

pub static ARTICLE_TEMPLATE: CategoryTemplate = CategoryTemplate {
    layout: "article.html",
    kicker: "COMPREHENSIVE GUIDE",
    heading: "{name}",
    subtitle: None,
    document_title: "{name}",
    title_suffix: " - Firm6102",
    description: None,
    og_description: None,
    schema: None,
    read_time: None,
    badge: None,
    last_updated: LAST_UPDATED,
    breadcrumb: None,
    banner: None,
    quick_actions: &[],
    cta: CallToAction {
        heading: "Ready to Implement These Strategies?",
        body: "Our experts can guide you through implementing these strategies for your specific situation.",
        primary: CONSULTATION,
        secondary: None,
    },
    related: RelatedSection {
        heading: "Related Guides",
        cards: &[
            RelatedCard {
                url: "/learn/executive-order-6102.html",
                title: "Executive Order 6102: Bitcoin Lessons",
                blurb: "Learn from history's most significant wealth confiscation.",
            },
            RelatedCard {
                url: "/learn/bitcoin-estate-planning.html",
                title: "Bitcoin Estate Planning Guide",
                blurb: "Strategies for multi-generational wealth transfer.",
            },
            RelatedCard {
                url: "/learn/keep-protocol-standards.html",
                title: "KEEP Protocol Standards",
                blurb: "Professional certification framework.",
            },
        ],
        view_all: None,
    },
    nav: &[ABOUT, SERVICES, KEEP_PROTOCOL, LEARN, CONTACT],
    footer: &[
        SERVICES_COLUMN,
        FooterColumn {
            heading: "Learn More",
            links: &[ABOUT_US, KNOWLEDGE_CENTER, SCHEDULE_CONSULTATION, CONTACT],
        },
        LEGAL_COLUMN,
    ],
    checklist_styles: false,
};

pub static STATE_TEMPLATE: CategoryTemplate = CategoryTemplate {
    layout: "guide.html",
    kicker: "STATE-SPECIFIC GUIDE",
    heading: "Bitcoin Estate Planning in {name}",
    subtitle: Some("Your complete guide to protecting Bitcoin wealth in {name} with state-specific strategies, tax optimization, and professional guidance"),
    document_title: "Bitcoin Estate Planning in {name} - Complete Guide",
    title_suffix: " | Firm6102",
    description: Some("Comprehensive guide to Bitcoin estate planning in {name}. Learn about state-specific laws, tax strategies, dynasty trusts, and professional networks for protecting Bitcoin wealth."),
    og_description: Some("Expert guidance on Bitcoin estate planning in {name}. Discover tax advantages, trust strategies, and professional networks for securing digital wealth."),
    schema: Some(SchemaCopy {
        headline: "Bitcoin Estate Planning in {name}: Complete Guide",
        description: "Comprehensive guide to Bitcoin estate planning in {name} including tax strategies, trust structures, and professional guidance.",
        date_published: "2025-01-13",
    }),
    read_time: Some("15 min"),
    badge: None,
    last_updated: LAST_UPDATED,
    breadcrumb: Some(Breadcrumb {
        label: "State Guides",
        url: "/states/",
    }),
    banner: None,
    quick_actions: &[],
    cta: CallToAction {
        heading: "Ready to Secure Your Bitcoin Legacy in {name}?",
        body: "Our experts understand {name}'s specific laws and can help you implement the perfect Bitcoin estate plan for your situation.",
        primary: CONSULTATION,
        secondary: Some(NavLink {
            label: "Compare Other States",
            url: "/states/",
        }),
    },
    related: RelatedSection {
        heading: "Explore Other State Guides",
        cards: &[
            RelatedCard {
                url: "/states/california/",
                title: "California",
                blurb: "Tech hub with no estate tax but high income tax considerations.",
            },
            RelatedCard {
                url: "/states/texas/",
                title: "Texas",
                blurb: "Zero income tax and 300-year dynasty trust capabilities.",
            },
            RelatedCard {
                url: "/states/florida/",
                title: "Florida",
                blurb: "Ultimate tax haven with strong asset protection laws.",
            },
        ],
        view_all: Some(NavLink {
            label: "View All State Guides",
            url: "/states/",
        }),
    },
    nav: &[ABOUT, SERVICES, STATE_GUIDES, KEEP_PROTOCOL, LEARN, CONTACT],
    footer: &[
        SERVICES_COLUMN,
        FooterColumn {
            heading: "Learn More",
            links: &[ABOUT_US, STATE_GUIDES, KNOWLEDGE_CENTER, SCHEDULE_CONSULTATION],
        },
        LEGAL_COLUMN,
    ],
    checklist_styles: false,
};

pub static PROFESSIONAL_TEMPLATE: CategoryTemplate = CategoryTemplate {
    layout: "guide.html",
    kicker: "PROFESSIONAL GUIDE",
    heading: "{name}",
    subtitle: Some("Comprehensive professional guidance for implementing Bitcoin estate planning services"),
    document_title: "{name} - Professional Guide",
    title_suffix: " | Firm6102",
    description: Some("Comprehensive guide for {name}. Expert strategies, implementation roadmaps, and professional standards for Bitcoin estate planning services."),
    og_description: Some("Expert professional guide for {name} with implementation strategies, compliance frameworks, and business development roadmaps."),
    schema: Some(SchemaCopy {
        headline: "{name}: Professional Guide",
        description: "Comprehensive professional guide for {name} including strategies, compliance, and implementation.",
        date_published: "2025-01-13",
    }),
    read_time: Some("45 min"),
    badge: None,
    last_updated: LAST_UPDATED,
    breadcrumb: Some(Breadcrumb {
        label: "For Professionals",
        url: "/professionals/",
    }),
    banner: None,
    quick_actions: &[],
    cta: CallToAction {
        heading: "Ready to Implement Bitcoin Services?",
        body: "Partner with Firm6102 to add Bitcoin estate planning to your professional practice. Get expert support, training, and certification.",
        primary: NavLink {
            label: "Partner With Us",
            url: "/consultation",
        },
        secondary: Some(NavLink {
            label: "View All Professional Guides",
            url: "/professionals/",
        }),
    },
    related: RelatedSection {
        heading: "Related Professional Resources",
        cards: &[
            RelatedCard {
                url: "/professionals/estate-planning-attorney-bitcoin-guide/",
                title: "Estate Planning Attorneys",
                blurb: "Complete guide for attorneys adding Bitcoin services.",
            },
            RelatedCard {
                url: "/professionals/financial-advisor-bitcoin-estate-planning-guide/",
                title: "Financial Advisors",
                blurb: "Bitcoin integration for financial advisory practices.",
            },
            RelatedCard {
                url: "/professionals/bitcoin-security-implementation-guide/",
                title: "Technical Implementation",
                blurb: "Security frameworks and technical protocols.",
            },
        ],
        view_all: Some(NavLink {
            label: "View All Professional Resources",
            url: "/professionals/",
        }),
    },
    nav: &[
        ABOUT,
        SERVICES,
        STATE_GUIDES,
        WEALTH_GUIDES,
        FOR_PROFESSIONALS,
        KEEP_PROTOCOL,
        LEARN,
    ],
    footer: &[
        SERVICES_COLUMN,
        FooterColumn {
            heading: "Resources",
            links: &[STATE_GUIDES, WEALTH_GUIDES, FOR_PROFESSIONALS, KNOWLEDGE_CENTER],
        },
        COMPANY_COLUMN,
    ],
    checklist_styles: false,
};

pub static TOOL_TEMPLATE: CategoryTemplate = CategoryTemplate {
    layout: "guide.html",
    kicker: "PROFESSIONAL TOOLS",
    heading: "{name}",
    subtitle: Some("Ready-to-use tools, templates, and frameworks for Bitcoin estate planning implementation"),
    document_title: "{name} - Professional Tools",
    title_suffix: " | Firm6102",
    description: Some("Professional {name}. Comprehensive tools, templates, and frameworks for Bitcoin estate planning implementation. Ready-to-use resources for professionals and families."),
    og_description: Some("Complete {name} with ready-to-use templates, checklists, and implementation frameworks for Bitcoin estate planning."),
    schema: Some(SchemaCopy {
        headline: "{name}: Professional Tools & Templates",
        description: "Comprehensive {name} including templates, checklists, and implementation frameworks.",
        date_published: "2025-01-14",
    }),
    read_time: None,
    badge: Some("Professional Grade"),
    last_updated: LAST_UPDATED,
    breadcrumb: Some(Breadcrumb {
        label: "Tools & Templates",
        url: "/tools/",
    }),
    banner: Some("Download complete templates and tools as PDF • Available for Firm6102 clients"),
    quick_actions: &[
        NavLink {
            label: "Get Professional Help",
            url: "/consultation",
        },
        NavLink {
            label: "View All Tools",
            url: "/tools/",
        },
    ],
    cta: CallToAction {
        heading: "Need Professional Implementation?",
        body: "Our experts can help you implement these tools and templates for your specific Bitcoin estate planning needs.",
        primary: SCHEDULE_CONSULTATION,
        secondary: Some(NavLink {
            label: "Explore More Tools",
            url: "/tools/",
        }),
    },
    related: RelatedSection {
        heading: "Related Tools & Templates",
        cards: &[
            RelatedCard {
                url: "/tools/bitcoin-estate-planning-assessment-checklist/",
                title: "Assessment Checklist",
                blurb: "Comprehensive evaluation framework for Bitcoin estate planning.",
            },
            RelatedCard {
                url: "/tools/bitcoin-security-implementation-framework/",
                title: "Security Framework",
                blurb: "Multi-signature and hardware wallet implementation guides.",
            },
            RelatedCard {
                url: "/tools/bitcoin-estate-planning-document-templates/",
                title: "Document Templates",
                blurb: "Complete legal document templates for Bitcoin estate planning.",
            },
        ],
        view_all: Some(NavLink {
            label: "View All Tools & Templates",
            url: "/tools/",
        }),
    },
    nav: &[
        ABOUT,
        SERVICES,
        STATE_GUIDES,
        WEALTH_GUIDES,
        FOR_PROFESSIONALS,
        TOOLS,
        KEEP_PROTOCOL,
        LEARN,
    ],
    footer: &[
        SERVICES_COLUMN,
        FooterColumn {
            heading: "Resources",
            links: &[
                STATE_GUIDES,
                WEALTH_GUIDES,
                FOR_PROFESSIONALS,
                TOOLS,
                KNOWLEDGE_CENTER,
            ],
        },
        COMPANY_COLUMN,
    ],
    checklist_styles: true,
};

pub static WEALTH_TEMPLATE: CategoryTemplate = CategoryTemplate {
    layout: "guide.html",
    kicker: "WEALTH-SPECIFIC GUIDE",
    heading: "{name}",
    subtitle: Some("Expert strategies, real case studies, and actionable guidance for securing your Bitcoin wealth"),
    document_title: "{name} - Complete Guide",
    title_suffix: " | Firm6102",
    description: Some("Expert guidance on {name}. Discover strategies, tax optimization, trust structures, and professional planning for your specific wealth level."),
    og_description: Some("Comprehensive guide to {name} with expert strategies, real case studies, and actionable implementation plans."),
    schema: Some(SchemaCopy {
        headline: "{name}: Complete Guide",
        description: "Comprehensive guide to {name} including strategies, trust structures, and professional guidance.",
        date_published: "2025-01-13",
    }),
    read_time: Some("25 min"),
    badge: None,
    last_updated: LAST_UPDATED,
    breadcrumb: Some(Breadcrumb {
        label: "Wealth Guides",
        url: "/wealth/",
    }),
    banner: None,
    quick_actions: &[],
    cta: CallToAction {
        heading: "Ready to Secure Your Bitcoin Legacy?",
        body: "Our experts specialize in Bitcoin estate planning for your specific wealth level. Get personalized guidance tailored to your unique situation.",
        primary: CONSULTATION,
        secondary: Some(NavLink {
            label: "Explore Other Wealth Levels",
            url: "/wealth/",
        }),
    },
    related: RelatedSection {
        heading: "Explore Other Wealth Guides",
        cards: &[
            RelatedCard {
                url: "/wealth/bitcoin-estate-planning-for-100k-500k/",
                title: "$100K-$500K",
                blurb: "Starting your Bitcoin wealth journey with smart estate planning.",
            },
            RelatedCard {
                url: "/wealth/bitcoin-estate-planning-for-1m-2m/",
                title: "$1M-$2M",
                blurb: "Advanced strategies for serious Bitcoin wealth protection.",
            },
            RelatedCard {
                url: "/wealth/bitcoin-estate-planning-for-5m-10m/",
                title: "$5M-$10M",
                blurb: "Elite dynasty planning for multi-generational wealth.",
            },
        ],
        view_all: Some(NavLink {
            label: "View All Wealth Guides",
            url: "/wealth/",
        }),
    },
    nav: &[
        ABOUT,
        SERVICES,
        STATE_GUIDES,
        WEALTH_GUIDES,
        KEEP_PROTOCOL,
        LEARN,
        CONTACT,
    ],
    footer: &[
        SERVICES_COLUMN,
        FooterColumn {
            heading: "Learn More",
            links: &[ABOUT_US, STATE_GUIDES, WEALTH_GUIDES, KNOWLEDGE_CENTER],
        },
        LEGAL_COLUMN,
    ],
    checklist_styles: false,
};
