use super::*;

pub static CONTENT: SiteContent = SiteContent {
    brand: Brand {
        first: "Jane",
        last: "Doe",
        tagline: "Digital Marketing Strategist · Growth Hacker · Brand Storyteller",
    },
    nav: &[
        NavLink { label: "Home", anchor: "#home" },
        NavLink { label: "Work", anchor: "#portfolio" },
        NavLink { label: "About", anchor: "#about" },
        NavLink { label: "Services", anchor: "#services" },
        NavLink { label: "Pricing", anchor: "#pricing" },
        NavLink { label: "Contact", anchor: "#contact" },
    ],
    stats: &[
        Stat { icon: "👥", value: 150, prefix: "", suffix: "+", label: "Happy Clients", tone: Tone::Primary },
        Stat { icon: "📈", value: 2, prefix: "$", suffix: "M+", label: "Revenue Generated", tone: Tone::Secondary },
        Stat { icon: "⭐", value: 98, prefix: "", suffix: "%", label: "Satisfaction Rate", tone: Tone::Accent },
        Stat { icon: "🏆", value: 7, prefix: "", suffix: "+", label: "Years Experience", tone: Tone::Primary },
    ],
    about: About {
        heading: "Helping brands grow through data-driven strategies",
        paragraphs: &[
            "I'm a digital marketing strategist with over 7 years of experience helping brands achieve measurable growth. I build marketing strategies that blend creativity with analytical thinking to deliver real business results.",
            "From startups to Fortune 500 companies, I've helped over 150 clients increase their online visibility, drive qualified traffic, and convert visitors into loyal customers.",
        ],
        highlights: &[
            "150+ Clients served",
            "$2M+ Revenue generated",
            "50+ Industries covered",
            "98% Client satisfaction",
        ],
        skills: &[
            "SEO",
            "PPC Advertising",
            "Content Marketing",
            "Email Campaigns",
            "Analytics",
            "Social Media",
            "Brand Strategy",
            "CRO",
        ],
    },
    services: &[
        Service {
            icon: "🔍",
            title: "SEO Optimization",
            description: "Dominate search rankings with data-driven SEO strategies that drive organic traffic and sustainable growth.",
            tone: Tone::Primary,
        },
        Service {
            icon: "🖱️",
            title: "PPC Advertising",
            description: "Maximize ROI with precision-targeted pay-per-click campaigns across Google, Meta, and beyond.",
            tone: Tone::Secondary,
        },
        Service {
            icon: "📝",
            title: "Content Marketing",
            description: "Craft compelling content that resonates with your audience, builds authority, and converts readers into customers.",
            tone: Tone::Accent,
        },
        Service {
            icon: "🔗",
            title: "Social Media",
            description: "Build a thriving social presence with strategic content, community management, and paid social campaigns.",
            tone: Tone::Primary,
        },
        Service {
            icon: "✉️",
            title: "Email Campaigns",
            description: "Design high-converting email sequences that nurture leads, retain customers, and drive revenue.",
            tone: Tone::Secondary,
        },
        Service {
            icon: "📊",
            title: "Analytics & Reporting",
            description: "Turn data into actionable insights with analytics dashboards and performance reports.",
            tone: Tone::Accent,
        },
    ],
    steps: &[
        Step { number: "01", title: "Discover", description: "Deep dive into your business, audience, competitors, and goals to build a solid foundation." },
        Step { number: "02", title: "Strategy", description: "Craft a data-driven marketing roadmap tailored to your specific growth objectives." },
        Step { number: "03", title: "Execute", description: "Launch campaigns with precision on every channel, message and touchpoint." },
        Step { number: "04", title: "Optimize", description: "Continuously test, iterate, and improve based on real-time performance data." },
        Step { number: "05", title: "Report", description: "Transparent reporting with clear KPIs, insights, and recommendations for the next cycle." },
    ],
    projects: &[
        Project {
            id: 1,
            title: "E-Commerce SEO Overhaul",
            category: "SEO",
            result: "312% organic traffic increase",
            description: "SEO strategy covering technical fixes, content optimization and link building that tripled organic traffic in 6 months.",
            tags: &["Technical SEO", "Content Strategy", "Link Building"],
            tone: Tone::Primary,
        },
        Project {
            id: 2,
            title: "SaaS PPC Growth Campaign",
            category: "PPC",
            result: "4.2x ROAS achieved",
            description: "Built and scaled Google Ads + LinkedIn campaigns from scratch, achieving a 4.2x return on ad spend within the first quarter.",
            tags: &["Google Ads", "LinkedIn Ads", "A/B Testing"],
            tone: Tone::Secondary,
        },
        Project {
            id: 3,
            title: "Fashion Brand Social Media",
            category: "Social",
            result: "89K new Instagram followers",
            description: "Developed a cohesive social media strategy with a daily content calendar, influencer partnerships, and engagement campaigns.",
            tags: &["Instagram", "TikTok", "Influencer Marketing"],
            tone: Tone::Accent,
        },
        Project {
            id: 4,
            title: "B2B Content Marketing Hub",
            category: "Content",
            result: "250% lead gen increase",
            description: "Created a full content marketing ecosystem of blog, whitepapers and case studies that became the primary lead generation channel.",
            tags: &["Blogging", "Whitepapers", "Lead Magnets"],
            tone: Tone::Primary,
        },
        Project {
            id: 5,
            title: "Local Business PPC Blitz",
            category: "PPC",
            result: "$180K revenue in 90 days",
            description: "Hyper-local Google Ads campaigns for a chain of dental clinics that generated $180K in new patient revenue within 3 months.",
            tags: &["Local SEO", "Google Ads", "Conversion Tracking"],
            tone: Tone::Secondary,
        },
        Project {
            id: 6,
            title: "Tech Startup SEO Launch",
            category: "SEO",
            result: "0 → 50K monthly visitors",
            description: "Took a brand-new SaaS product from zero online presence to 50,000 monthly organic visitors through SEO and content marketing.",
            tags: &["Keyword Research", "On-Page SEO", "PR & Backlinks"],
            tone: Tone::Accent,
        },
    ],
    testimonials: &[
        Testimonial {
            quote: "Our organic traffic tripled in six months. Jane found technical issues three agencies had missed and the content plan still drives most of our leads.",
            name: "Daniel Brooks",
            company: "Head of Growth, Northwind Supply",
            initials: "DB",
        },
        Testimonial {
            quote: "The PPC rebuild paid for itself in the first month. Clear reporting, no fluff, and every change tied back to revenue.",
            name: "Aisha Rahman",
            company: "Founder, Lumen Dental",
            initials: "AR",
        },
        Testimonial {
            quote: "She slotted into our in-house team like she'd always been there. Our email program went from an afterthought to our best channel.",
            name: "Marco Bianchi",
            company: "CMO, Forma Living",
            initials: "MB",
        },
        Testimonial {
            quote: "Finally a marketer who understands SaaS funnels. Trial sign-ups are up 80% and our CAC dropped by a third.",
            name: "Hannah Lee",
            company: "CEO, Stackwise",
            initials: "HL",
        },
    ],
    plans: &[
        Plan {
            name: "Starter",
            monthly_price: Some(14_999),
            yearly_price: Some(11_999),
            description: "Perfect for small businesses ready to establish their digital presence.",
            features: &[
                "SEO Audit & Setup",
                "2 Blog Posts / Month",
                "Social Media Management (2 platforms)",
                "Monthly Analytics Report",
                "Email Support",
            ],
            cta: "Get Started",
            featured: false,
        },
        Plan {
            name: "Growth",
            monthly_price: Some(29_999),
            yearly_price: Some(23_999),
            description: "Ideal for growing businesses that need full marketing support.",
            features: &[
                "Everything in Starter",
                "PPC Campaign Management",
                "6 Blog Posts / Month",
                "Email Campaign (2/month)",
                "Social Media (4 platforms)",
                "Weekly Analytics Reports",
                "Priority Support",
            ],
            cta: "Most Popular",
            featured: true,
        },
        Plan {
            name: "Enterprise",
            monthly_price: Some(49_999),
            yearly_price: Some(39_999),
            description: "Full-service marketing partner for established brands scaling fast.",
            features: &[
                "Everything in Growth",
                "Dedicated Strategy Sessions",
                "Custom Content Production",
                "PR & Influencer Outreach",
                "Full Analytics Dashboard",
                "Conversion Rate Optimization",
                "Slack / Direct Access",
            ],
            cta: "Let's Talk",
            featured: false,
        },
    ],
    faqs: &[
        Faq {
            question: "How long does it take to see results from SEO?",
            answer: "SEO is a long-term investment. Most clients see measurable improvements in organic traffic and rankings within 3-6 months, depending on current site authority, competition and scope.",
        },
        Faq {
            question: "What is your typical PPC campaign setup process?",
            answer: "I start with an audit of your goals, audience and competitors, then build the campaign architecture, write ad copy, set up conversion tracking and launch. The first 30 days are for data collection and optimization.",
        },
        Faq {
            question: "Do you require long-term contracts?",
            answer: "No. All plans are month-to-month. Marketing works best as a sustained effort, so I recommend committing to at least 3-6 months to see meaningful results.",
        },
        Faq {
            question: "What industries do you specialize in?",
            answer: "I've worked across 50+ industries including SaaS, e-commerce, professional services, healthcare and real estate. The method adapts to any industry; what matters is understanding your audience.",
        },
        Faq {
            question: "How do you measure and report campaign performance?",
            answer: "Custom dashboards track the KPIs that matter to your business: traffic, conversions, cost per acquisition and ROAS. Reports are monthly, or weekly on Growth and Enterprise plans.",
        },
        Faq {
            question: "Can you work with my existing marketing team?",
            answer: "Absolutely. Many clients have in-house teams and I slot in as a specialist or strategic advisor, sharing knowledge so your team grows along the way.",
        },
        Faq {
            question: "What budget do you recommend for PPC advertising?",
            answer: "Ad spend is separate from my fee. For Google Ads I recommend at least $1,500-$3,000/month to gather meaningful data; for social ads $1,000+/month is a good start.",
        },
        Faq {
            question: "How do I get started?",
            answer: "Reach out through the contact form below or book a free 30-minute strategy call. We'll go over your goals and I'll outline exactly how I can help.",
        },
    ],
    contact: ContactDetails {
        email: "hello@janedoe.com",
        phone: "+1 (555) 123-4567",
        location: "New York, NY (Remote Available)",
        services: &[
            "SEO Optimization",
            "PPC Advertising",
            "Content Marketing",
            "Social Media",
            "Email Campaigns",
            "Analytics & Reporting",
            "Full-Service Package",
        ],
        budgets: &[
            "$500 - $1,000/mo",
            "$1,000 - $2,500/mo",
            "$2,500 - $5,000/mo",
            "$5,000+/mo",
        ],
        socials: &["LinkedIn", "Twitter", "Instagram", "Dribbble"],
    },
    footer: &[
        FooterColumn {
            title: "Services",
            links: &["SEO Optimization", "PPC Advertising", "Content Marketing", "Social Media", "Email Campaigns", "Analytics"],
        },
        FooterColumn {
            title: "Company",
            links: &["About", "Portfolio", "Process", "Pricing", "FAQ"],
        },
        FooterColumn {
            title: "Social",
            links: &["LinkedIn", "Twitter / X", "Instagram", "Dribbble", "YouTube"],
        },
    ],
};
