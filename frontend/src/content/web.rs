use super::*;

pub static CONTENT: SiteContent = SiteContent {
    brand: Brand {
        first: "Dev",
        last: "Studio",
        tagline: "Freelance Web Developer",
    },
    nav: &[
        NavLink { label: "About", anchor: "#about" },
        NavLink { label: "Services", anchor: "#services" },
        NavLink { label: "Projects", anchor: "#portfolio" },
        NavLink { label: "Pricing", anchor: "#pricing" },
        NavLink { label: "Contact", anchor: "#contact" },
    ],
    stats: &[
        Stat { icon: "💻", value: 50, prefix: "", suffix: "+", label: "Projects", tone: Tone::Primary },
        Stat { icon: "🗓️", value: 3, prefix: "", suffix: "+", label: "Years Exp.", tone: Tone::Secondary },
        Stat { icon: "⭐", value: 100, prefix: "", suffix: "%", label: "Satisfaction", tone: Tone::Accent },
    ],
    about: About {
        heading: "Crafting digital experiences",
        paragraphs: &[
            "I'm a freelance web developer specializing in modern, performant websites and web applications. Clean code and thoughtful design help brands stand out and deliver results.",
            "Every project gets responsive layouts, smooth animations, SEO groundwork and fast load times. I work closely with clients so the finished site looks exactly as imagined.",
        ],
        highlights: &["50+ Projects", "3+ Years experience", "100% Satisfaction"],
        skills: &["Rust", "WebAssembly", "TypeScript", "CSS", "Node.js"],
    },
    services: &[
        Service {
            icon: "🌐",
            title: "Website Design & Development",
            description: "Modern, responsive websites that convert visitors into customers. From landing pages to full web apps.",
            tone: Tone::Primary,
        },
        Service {
            icon: "</>",
            title: "Frontend Development",
            description: "Clean, performant code and pixel-perfect builds from any design.",
            tone: Tone::Secondary,
        },
        Service {
            icon: "🎨",
            title: "UI/UX Design",
            description: "Intuitive interfaces and user experiences that delight users and drive engagement metrics.",
            tone: Tone::Accent,
        },
        Service {
            icon: "📱",
            title: "Responsive & Mobile-First",
            description: "Every project is built mobile-first for a flawless experience on every screen size.",
            tone: Tone::Primary,
        },
        Service {
            icon: "⚡",
            title: "Performance Optimization",
            description: "Fast load times, SEO optimization, and Core Web Vitals tuning for maximum visibility.",
            tone: Tone::Secondary,
        },
        Service {
            icon: "📊",
            title: "Analytics & CRO",
            description: "Data-driven conversion rate optimization to turn your traffic into revenue.",
            tone: Tone::Accent,
        },
    ],
    steps: &[
        Step { number: "01", title: "Scope", description: "Pages, features and deadlines agreed up front." },
        Step { number: "02", title: "Design", description: "Wireframes and a visual direction you sign off on." },
        Step { number: "03", title: "Build", description: "Development with a staging link you can check at any time." },
        Step { number: "04", title: "Launch", description: "Deployment, analytics setup and a hand-over walkthrough." },
    ],
    projects: &[
        Project {
            id: 1,
            title: "E-Commerce Platform",
            category: "Web App",
            result: "Real-time inventory",
            description: "Full-stack e-commerce with real-time inventory, payment processing, and admin dashboard.",
            tags: &["Payments", "Admin"],
            tone: Tone::Primary,
        },
        Project {
            id: 2,
            title: "SaaS Dashboard",
            category: "Dashboard",
            result: "Interactive charts",
            description: "Analytics dashboard for a B2B SaaS product with interactive charts and user management.",
            tags: &["Charts", "Auth"],
            tone: Tone::Secondary,
        },
        Project {
            id: 3,
            title: "Brand Website",
            category: "Website",
            result: "Lead capture built in",
            description: "Premium brand website with scroll animations, CMS integration, and lead capture.",
            tags: &["CMS", "Animations"],
            tone: Tone::Accent,
        },
        Project {
            id: 4,
            title: "Mobile-First App",
            category: "Web App",
            result: "Works offline",
            description: "Progressive web app with offline capabilities, push notifications, and native feel.",
            tags: &["PWA", "Offline"],
            tone: Tone::Primary,
        },
        Project {
            id: 5,
            title: "Portfolio & Blog",
            category: "Website",
            result: "Headless CMS",
            description: "Creative portfolio with headless CMS, dynamic routing, and SEO optimization.",
            tags: &["SEO", "Routing"],
            tone: Tone::Secondary,
        },
        Project {
            id: 6,
            title: "Landing Page System",
            category: "Marketing",
            result: "A/B tested templates",
            description: "High-converting landing page templates with A/B testing and analytics.",
            tags: &["A/B Testing", "Analytics"],
            tone: Tone::Accent,
        },
    ],
    testimonials: &[
        Testimonial {
            quote: "Exceptional work. Our website conversion rate jumped 40% after the redesign. Clean code, fast delivery.",
            name: "Arjun Patel",
            company: "Founder, TechStart",
            initials: "AP",
        },
        Testimonial {
            quote: "They understood our vision perfectly and delivered a website that truly represents our brand. Highly recommend.",
            name: "Meera Singh",
            company: "CEO, StyleHive",
            initials: "MS",
        },
        Testimonial {
            quote: "The dashboard they built handles complex data visualizations effortlessly. Performance is outstanding.",
            name: "Vikram Rao",
            company: "CTO, DataFlow",
            initials: "VR",
        },
    ],
    plans: &[
        Plan {
            name: "Starter",
            monthly_price: Some(15_000),
            yearly_price: Some(15_000),
            description: "Perfect for landing pages and simple sites",
            features: &[
                "Single page website",
                "Responsive design",
                "Basic SEO setup",
                "Contact form",
                "2 revision rounds",
                "7-day delivery",
            ],
            cta: "Get Started",
            featured: false,
        },
        Plan {
            name: "Professional",
            monthly_price: Some(40_000),
            yearly_price: Some(40_000),
            description: "For growing businesses that need more",
            features: &[
                "Multi-page website (up to 8)",
                "Custom animations",
                "CMS integration",
                "Advanced SEO",
                "Analytics setup",
                "5 revision rounds",
                "14-day delivery",
            ],
            cta: "Most Popular",
            featured: true,
        },
        Plan {
            name: "Enterprise",
            monthly_price: None,
            yearly_price: None,
            description: "Full-scale web applications & platforms",
            features: &[
                "Unlimited pages",
                "Web app development",
                "API integrations",
                "Admin dashboard",
                "Performance optimization",
                "Ongoing support",
                "Priority delivery",
            ],
            cta: "Let's Talk",
            featured: false,
        },
    ],
    faqs: &[
        Faq {
            question: "How long does a website take?",
            answer: "A single page usually ships in 7 days, a multi-page site in about 14. Web apps are scoped individually.",
        },
        Faq {
            question: "Can I edit the content myself?",
            answer: "Yes. Professional and Enterprise builds include a CMS so you can update copy and images without touching code.",
        },
    ],
    contact: ContactDetails {
        email: "hello@devstudio.in",
        phone: "+91 98765 43210",
        location: "Remote, India",
        services: &["Landing Page", "Business Website", "Web App", "Redesign"],
        budgets: &["Under ₹15,000", "₹15,000 - ₹40,000", "₹40,000+"],
        socials: &["GitHub", "LinkedIn"],
    },
    footer: &[
        FooterColumn {
            title: "Services",
            links: &["Websites", "Web Apps", "UI/UX", "Performance"],
        },
        FooterColumn {
            title: "Company",
            links: &["About", "Projects", "Pricing", "Contact"],
        },
    ],
};
