use super::*;

pub static CONTENT: SiteContent = SiteContent {
    brand: Brand {
        first: "Creator",
        last: "Box",
        tagline: "UGC & iGC content for local shops and online brands",
    },
    nav: &[
        NavLink { label: "Work", anchor: "#work" },
        NavLink { label: "Process", anchor: "#process" },
        NavLink { label: "Reviews", anchor: "#testimonials" },
        NavLink { label: "Contact", anchor: "#contact" },
    ],
    stats: &[
        Stat { icon: "🎬", value: 500, prefix: "", suffix: "+", label: "Videos Delivered", tone: Tone::Primary },
        Stat { icon: "🏪", value: 100, prefix: "", suffix: "+", label: "Brands Served", tone: Tone::Secondary },
        Stat { icon: "📍", value: 50, prefix: "", suffix: "+", label: "Cities Covered", tone: Tone::Accent },
        Stat { icon: "🚀", value: 3, prefix: "", suffix: "x", label: "Avg. Engagement Lift", tone: Tone::Primary },
    ],
    about: About {
        heading: "Real people, real places, real results",
        paragraphs: &[
            "CreatorBox connects brands with trained iGC creators who visit your store, use your product and film content that feels native to the feed.",
            "No follower requirements, clear deliverables and usage rights included, so every video can run as an organic post or a paid ad.",
        ],
        highlights: &[
            "500+ Videos delivered",
            "100+ Brands served",
            "10-day average delivery",
            "Usage rights included",
        ],
        skills: &["Store Visits", "Product Demos", "Voice-over UGC", "Ad-style Reels", "Testimonials"],
    },
    services: &[
        Service {
            icon: "🎥",
            title: "Product Demos",
            description: "Authentic unboxing and demo videos that show your product in real-life use.",
            tone: Tone::Primary,
        },
        Service {
            icon: "⚡",
            title: "Voice-over UGC",
            description: "Voice-over content that explains benefits while showing the product in action.",
            tone: Tone::Secondary,
        },
        Service {
            icon: "🌐",
            title: "Ad-style Reels",
            description: "Short-form reels built for Meta Ads, Google Ads, and organic social performance.",
            tone: Tone::Accent,
        },
    ],
    steps: &[
        Step { number: "01", title: "Brief", description: "Tell us about your brand, audience and what the content should achieve." },
        Step { number: "02", title: "Match", description: "We pair you with a creator who fits your niche, city and tone." },
        Step { number: "03", title: "Create", description: "The creator films on location or with your product, following a shot list we agree on." },
        Step { number: "04", title: "Deliver", description: "Edited, ad-ready videos with usage rights, typically within 10 days." },
    ],
    projects: &[
        Project {
            id: 1,
            title: "Café Reel: Walk-in Vibe",
            category: "Café",
            result: "50K views in a week",
            description: "A creator spent an afternoon at the café and cut a reel around the morning rush. Walk-ins started mentioning the post within days.",
            tags: &["Discovery", "Instagram"],
            tone: Tone::Primary,
        },
        Project {
            id: 2,
            title: "Salon Transformation",
            category: "Salon",
            result: "4x saves vs. studio posts",
            description: "Before/after transformation filmed in-salon with the stylist narrating each step.",
            tags: &["Engagement", "Instagram"],
            tone: Tone::Secondary,
        },
        Project {
            id: 3,
            title: "Gym Tour UGC",
            category: "Gym",
            result: "200 → 3,000 followers",
            description: "Real members, real workouts: a tour and transformation series for a neighbourhood gym.",
            tags: &["Visibility", "YouTube Shorts"],
            tone: Tone::Accent,
        },
        Project {
            id: 4,
            title: "Skincare Launch Ads",
            category: "D2C",
            result: "2.3x CTR over studio ads",
            description: "Six ad-ready videos for a skincare launch, delivered in 10 days and run on Meta.",
            tags: &["Trust", "Meta Ads"],
            tone: Tone::Primary,
        },
    ],
    testimonials: &[
        Testimonial {
            quote: "CreatorBox sent a creator to our café and the reel got us 50K views in a week. We started getting walk-ins mentioning the Instagram post. Incredible ROI for what we paid.",
            name: "Ankit Sharma",
            company: "Owner, Brew & Bites Café, Mumbai",
            initials: "AS",
        },
        Testimonial {
            quote: "We needed UGC for our skincare launch ads. CreatorBox delivered 6 ad-ready videos in 10 days. Our CTR improved by 2.3x compared to our studio-shot ads.",
            name: "Priya Mehta",
            company: "Founder, GlowNest Skincare",
            initials: "PM",
        },
        Testimonial {
            quote: "As a gym owner, I didn't know where to start with social media. Their iGC creator captured real workouts and transformations. Our Instagram grew from 200 to 3,000 followers in a month.",
            name: "Rahul Verma",
            company: "FitZone Gym, Pune",
            initials: "RV",
        },
        Testimonial {
            quote: "The quality of UGC we received for our fashion brand was outstanding. It felt authentic, relatable, and performed way better than influencer content in our Meta ads.",
            name: "Sneha Kapoor",
            company: "Co-founder, ThreadCraft Fashion",
            initials: "SK",
        },
    ],
    plans: &[
        Plan {
            name: "Single Video",
            monthly_price: Some(999),
            yearly_price: Some(999),
            description: "One store-visit or product video to test the waters.",
            features: &["1 UGC video", "Usage rights included", "7-day delivery"],
            cta: "Get Started",
            featured: false,
        },
        Plan {
            name: "Creator Pack",
            monthly_price: Some(7_999),
            yearly_price: Some(6_399),
            description: "A month of fresh content for your feed and ads.",
            features: &["10 UGC videos", "2 creators", "Ad-ready edits", "Usage rights included", "10-day delivery"],
            cta: "Most Popular",
            featured: true,
        },
        Plan {
            name: "Brand Partner",
            monthly_price: None,
            yearly_price: None,
            description: "Ongoing creator programs for brands running paid campaigns.",
            features: &["Unlimited briefs", "Dedicated manager", "Performance reviews", "Priority delivery"],
            cta: "Let's Talk",
            featured: false,
        },
    ],
    faqs: &[
        Faq {
            question: "What is iGC?",
            answer: "In-store generated content: a creator visits your location and films the space, the product and the people, so the video looks like a regular post rather than an ad.",
        },
        Faq {
            question: "Do creators need a big following?",
            answer: "No. We pick creators for how well they film, not for follower count. You own the content and post it on your own channels or run it as ads.",
        },
        Faq {
            question: "How fast is delivery?",
            answer: "Single videos usually arrive within 7 days and packs within 10 days of the shoot.",
        },
        Faq {
            question: "Are usage rights included?",
            answer: "Yes. Every plan includes rights to use the videos organically and in paid campaigns.",
        },
    ],
    contact: ContactDetails {
        email: "hello@creatorbox.in",
        phone: "+91 98765 43210",
        location: "Mumbai · Pune · Bengaluru",
        services: &["Store Visit (iGC)", "Product Demo", "Voice-over UGC", "Ad-style Reels", "Creator Pack"],
        budgets: &["Under ₹5,000", "₹5,000 - ₹15,000", "₹15,000 - ₹50,000", "₹50,000+"],
        socials: &["Instagram", "YouTube", "LinkedIn"],
    },
    footer: &[
        FooterColumn {
            title: "Services",
            links: &["Store Visits", "Product Demos", "Voice-over UGC", "Ad-style Reels"],
        },
        FooterColumn {
            title: "Company",
            links: &["Process", "Reviews", "Contact"],
        },
        FooterColumn {
            title: "Social",
            links: &["Instagram", "YouTube", "LinkedIn"],
        },
    ],
};

pub static LOCAL_CATEGORIES: &[&str] = &["Café", "Restaurant", "Salon", "Gym", "Clinic", "Real Estate", "Coaching"];

pub static ONLINE_NICHES: &[&str] = &["Skincare", "Fashion", "Electronics", "Amazon", "App", "Course", "SaaS"];

#[derive(Debug, PartialEq)]
pub struct ShowcaseItem {
    pub title: &'static str,
    pub category: &'static str,
    pub goal: &'static str,
    pub platform: &'static str,
}

pub static BEST_WORK: &[ShowcaseItem] = &[
    ShowcaseItem { title: "Café Reel: Walk-in Vibe", category: "Café", goal: "Discovery", platform: "Instagram" },
    ShowcaseItem { title: "Salon Transformation", category: "Salon", goal: "Engagement", platform: "Instagram" },
    ShowcaseItem { title: "Gym Tour UGC", category: "Gym", goal: "Visibility", platform: "YouTube Shorts" },
    ShowcaseItem { title: "Clinic Testimonial", category: "Clinic", goal: "Trust", platform: "Instagram" },
    ShowcaseItem { title: "Restaurant Food Reel", category: "Restaurant", goal: "Walk-ins", platform: "Instagram" },
    ShowcaseItem { title: "Coaching Center Ad", category: "Coaching", goal: "Leads", platform: "Meta Ads" },
];

#[derive(Debug, PartialEq)]
pub struct Milestone {
    pub when: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static EXPECTED_RESULTS: &[Milestone] = &[
    Milestone {
        when: "Week 1",
        icon: "👁️",
        title: "Brand Visibility",
        description: "Your content starts reaching local audiences through organic discovery.",
    },
    Milestone {
        when: "Week 2",
        icon: "👥",
        title: "Profile Visits & Discovery",
        description: "People start visiting your profile, searching your location, and exploring.",
    },
    Milestone {
        when: "Week 3–4",
        icon: "📈",
        title: "Engagement Growth",
        description: "Meaningful engagement builds: DMs, saves, shares, and foot traffic.",
    },
];

#[derive(Debug, PartialEq)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
}

pub static UGC_BENEFITS: &[Benefit] = &[
    Benefit { title: "Build Trust", description: "Real people using your product builds instant credibility with potential customers." },
    Benefit { title: "Ad-Ready Creatives", description: "Get videos that are optimized for paid ad campaigns from day one." },
    Benefit { title: "Better Engagement & CTR", description: "UGC consistently outperforms studio content in click-through and engagement rates." },
];

pub static LOCAL_STEPS: &[Step] = &[
    Step { number: "01", title: "Book a Call", description: "Tell us about your store, your customers and the days that work for a visit." },
    Step { number: "02", title: "Store Visit", description: "A local iGC creator visits and films the space, the food or the service." },
    Step { number: "03", title: "Edit & Review", description: "You get a first cut to review; one round of changes is included." },
    Step { number: "04", title: "Post & Grow", description: "Post on your channels or boost it locally. We share tips for timing and captions." },
];

pub static ONLINE_STEPS: &[Step] = &[
    Step { number: "01", title: "Ship the Product", description: "Send the product to a creator matched to your niche." },
    Step { number: "02", title: "Script & Shoot", description: "Hooks and talking points are agreed before filming starts." },
    Step { number: "03", title: "Ad-ready Edits", description: "Multiple cuts and aspect ratios, ready for Meta, Google and marketplaces." },
    Step { number: "04", title: "Test & Scale", description: "Run the variants, keep the winners, and order more of what works." },
];

#[derive(Debug, PartialEq)]
pub struct ComparisonRow {
    pub feature: &'static str,
    pub others: &'static str,
}

pub static COMPARISON: &[ComparisonRow] = &[
    ComparisonRow { feature: "Local + Online Focus", others: "Mostly Online Only" },
    ComparisonRow { feature: "iGC + Professional Creators", others: "Freelancers Only" },
    ComparisonRow { feature: "Store Visits Available", others: "Rare" },
    ComparisonRow { feature: "Pricing from ₹999", others: "₹5,000+ per video" },
    ComparisonRow { feature: "Usage Rights Included", others: "Limited" },
    ComparisonRow { feature: "No Follower Requirement", others: "Follower Requirement" },
    ComparisonRow { feature: "Clear Deliverables", others: "Hidden Conditions" },
];

#[derive(Debug, PartialEq)]
pub struct Snapshot {
    pub label: &'static str,
    pub tone: Tone,
}

pub static BEHIND_THE_SCENES: &[Snapshot] = &[
    Snapshot { label: "Café Shoot", tone: Tone::Primary },
    Snapshot { label: "Product Unboxing", tone: Tone::Secondary },
    Snapshot { label: "Creator Collab", tone: Tone::Accent },
    Snapshot { label: "Store Visit", tone: Tone::Primary },
    Snapshot { label: "Reel Setup", tone: Tone::Accent },
    Snapshot { label: "On Location", tone: Tone::Secondary },
];

pub static SAAS_FEATURES: &[Service] = &[
    Service {
        icon: "🎯",
        title: "Founder-Led UGC",
        description: "Founder stories and product walkthroughs that build trust with high-ticket buyers.",
        tone: Tone::Primary,
    },
    Service {
        icon: "📉",
        title: "Demo-Style Videos",
        description: "Screen-recorded demos with voice-over that show your SaaS product in action.",
        tone: Tone::Secondary,
    },
    Service {
        icon: "🛡️",
        title: "Testimonial UGC",
        description: "Real customer testimonials edited for ads, the strongest social proof for SaaS conversions.",
        tone: Tone::Accent,
    },
    Service {
        icon: "⚡",
        title: "Ad-Ready Creatives",
        description: "Cut for LinkedIn Ads, Meta Ads, and YouTube pre-roll, built for B2B performance.",
        tone: Tone::Primary,
    },
];

#[derive(Debug, PartialEq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

pub static SAAS_METRICS: &[Metric] = &[
    Metric { value: "2.8x", label: "Higher CTR vs Studio" },
    Metric { value: "45%", label: "Lower CAC with UGC" },
    Metric { value: "10 days", label: "Avg. Delivery Time" },
];
