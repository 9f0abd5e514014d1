// Static site content: services and their portfolios, testimonials, tools,
// process steps, social links and FAQs.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aspect {
    Landscape,
    Portrait,
}

impl Aspect {
    pub fn css_ratio(self) -> &'static str {
        match self {
            Aspect::Landscape => "16 / 9",
            Aspect::Portrait => "9 / 16",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemMetadata {
    Video {
        youtube_id: &'static str,
        aspect: Aspect,
    },
    Web {
        url: Option<&'static str>,
        stack: Option<&'static str>,
        features: &'static [&'static str],
    },
    Ai {
        platform: Option<&'static str>,
        features: &'static [&'static str],
        integrations: &'static [&'static str],
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub tags: &'static [&'static str],
    pub metadata: ItemMetadata,
}

impl Item {
    pub fn is_video(&self) -> bool {
        matches!(self.metadata, ItemMetadata::Video { .. })
    }

    pub fn aspect(&self) -> Option<Aspect> {
        match self.metadata {
            ItemMetadata::Video { aspect, .. } => Some(aspect),
            _ => None,
        }
    }

    /// External site to open instead of showing the item in a modal.
    pub fn external_url(&self) -> Option<&'static str> {
        match self.metadata {
            ItemMetadata::Web { url, .. } => url,
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub items: &'static [Item],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub categories: &'static [Category],
}

impl Service {
    /// Services whose portfolio is not published yet.
    pub fn is_locked(&self) -> bool {
        self.slug == "ai-agents"
    }

    pub fn path(&self) -> String {
        format!("/services/{}", self.slug)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub avatar: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolCategory {
    Frontend,
    Backend,
    Ai,
    Database,
    Cloud,
    Design,
    Video,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tool {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ToolCategory,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

const fn video(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    thumbnail: &'static str,
    tags: &'static [&'static str],
    youtube_id: &'static str,
    aspect: Aspect,
) -> Item {
    Item {
        id,
        title,
        description,
        thumbnail,
        tags,
        metadata: ItemMetadata::Video { youtube_id, aspect },
    }
}

const SITE_URL: &str = "https://logiciancreatives.in";

pub static SERVICES: &[Service] = &[
    Service {
        id: "svc-video-editing",
        slug: "video-editing",
        title: "Video Editing",
        description: "Cinematic storytelling that captivates audiences and drives engagement with Hollywood-quality production.",
        icon: "🎬",
        color: "pink",
        categories: &[
            Category {
                id: "cat-shorts",
                title: "Shorts & Reels",
                description: "Viral-ready vertical content optimized for maximum engagement",
                image: "https://images.unsplash.com/photo-1574717024653-61fd2cf4d44d?w=800&auto=format&fit=crop&q=80",
                items: &[
                    video("1", "Filmmaking Episode 1", "Fast-paced, hook-driven product reveals designed to stop thumbs and drive action.", "https://images.unsplash.com/photo-1611162616475-46b635cb6868?w=600&auto=format&fit=crop&q=80", &["Vertical", "Fast Paced", "Hooks"], "Eh1w-Vv2ShA", Aspect::Portrait),
                    video("2", "Filmmaking Episode 2", "Authentic, engaging lifestyle content that builds genuine audience connection.", "https://images.unsplash.com/photo-1626814026160-2237a95fc5a0?w=600&auto=format&fit=crop&q=80", &["Authentic", "Storytelling", "Engaging"], "B3oxUCV6zPg", Aspect::Portrait),
                    video("3", "Filmmaking Episode 3", "User-generated style content that converts with authentic appeal.", "https://images.unsplash.com/photo-1598488035139-bdbb2231ce04?w=600&auto=format&fit=crop&q=80", &["UGC", "Conversion", "Authentic"], "lN2rqP5-wuc", Aspect::Portrait),
                ],
            },
            Category {
                id: "cat-promo",
                title: "Promo Videos",
                description: "High-impact promotional content for products, services, and events",
                image: "https://images.unsplash.com/photo-1492691527719-9d1e07e534b4?w=800&auto=format&fit=crop&q=80",
                items: &[
                    video("1", "Zar App Promo", "Vertical product promos designed for social media feeds and stories.", "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=600&auto=format&fit=crop&q=80", &["Vertical", "App", "Social"], "hFGV4zHmXxY", Aspect::Portrait),
                    video("2", "Ghar Soap Promo", "Widescreen brand campaigns for YouTube and streaming platforms.", "https://images.unsplash.com/photo-1559136555-9303baea8ebd?w=600&auto=format&fit=crop&q=80", &["Vertical", "Product", "Campaign"], "sojAvbUGQew", Aspect::Portrait),
                    video("3", "Plix Tablets Promo", "Dynamic event promotions that build anticipation and drive attendance.", "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=600&auto=format&fit=crop&q=80", &["Vertical", "Product", "Campaign"], "0Ph6MpGKq8I", Aspect::Portrait),
                    video("4", "LightLife Weightloss Product Promo", "Vertical app demos perfect for app store listings and social ads.", "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=600&auto=format&fit=crop&q=80", &["Vertical", "Health", "Product"], "wyz9Ok6gDyA", Aspect::Portrait),
                ],
            },
            Category {
                id: "cat-podcasts",
                title: "Podcasts",
                description: "Professional podcast production with engaging visuals and clips",
                image: "https://images.unsplash.com/photo-1590602847861-f357a9332bbc?w=800&auto=format&fit=crop&q=80",
                items: &[
                    video("item-podcast-full", "Full Episode Edit", "Complete podcast episode with multi-camera editing and graphics.", "https://images.unsplash.com/photo-1478737270239-2f02b77fc618?w=600&auto=format&fit=crop&q=80", &["Full Episode", "Multi-cam", "Graphics"], "MtN1YnoL46Q", Aspect::Landscape),
                    video("item-podcast-clip-vertical", "Viral Clip (Vertical)", "Attention-grabbing vertical clips optimized for TikTok and Reels.", "https://images.unsplash.com/photo-1589903308904-1010c2294adc?w=600&auto=format&fit=crop&q=80", &["Clip", "Vertical", "Viral"], "jNQXAC9IVRw", Aspect::Portrait),
                    video("item-podcast-clip-horizontal", "YouTube Short Clip", "Horizontal clips perfect for YouTube and Twitter engagement.", "https://images.unsplash.com/photo-1619983081563-430f63602796?w=600&auto=format&fit=crop&q=80", &["Clip", "Horizontal", "YouTube"], "LXb3EKWsInQ", Aspect::Landscape),
                    video("item-podcast-highlights", "Episode Highlights", "Best moments compilation for audience retention and new viewer acquisition.", "https://images.unsplash.com/photo-1598488035139-bdbb2231ce04?w=600&auto=format&fit=crop&q=80", &["Highlights", "Compilation", "Engaging"], "CVpNNMlQ3m8", Aspect::Landscape),
                ],
            },
            Category {
                id: "cat-ai-videos",
                title: "AI Videos",
                description: "Next-gen AI-powered video content and animations",
                image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&auto=format&fit=crop&q=80",
                items: &[
                    video("item-ai-avatar-vertical", "AI Avatar (Vertical)", "AI-generated spokesperson videos for social media and ads.", "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?w=600&auto=format&fit=crop&q=80", &["AI Avatar", "Vertical", "Spokesperson"], "ScMzIvxBSi4", Aspect::Portrait),
                    video("item-ai-explainer", "AI Explainer", "Horizontal AI-generated explainer videos with custom visuals.", "https://images.unsplash.com/photo-1676299081847-824916de030a?w=600&auto=format&fit=crop&q=80", &["AI", "Explainer", "Horizontal"], "MtN1YnoL46Q", Aspect::Landscape),
                    video("item-ai-animation-vertical", "AI Animation (Vertical)", "Stunning AI-generated animations in vertical format.", "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=600&auto=format&fit=crop&q=80", &["AI", "Animation", "Vertical"], "dQw4w9WgXcQ", Aspect::Portrait),
                    video("item-ai-music-video", "AI Music Video", "AI-generated visuals synced to music for immersive experiences.", "https://images.unsplash.com/photo-1614854262318-831574f15f1f?w=600&auto=format&fit=crop&q=80", &["AI", "Music", "Horizontal"], "LXb3EKWsInQ", Aspect::Landscape),
                ],
            },
            Category {
                id: "cat-travel-cinematic",
                title: "Travel & Cinematic",
                description: "Breathtaking travel content and cinematic storytelling",
                image: "https://images.unsplash.com/photo-1485846234645-a62644f84728?w=800&auto=format&fit=crop&q=80",
                items: &[
                    video("item-travel-diary", "Travel Diary", "4K color-graded travel content with cinematic transitions and storytelling.", "https://images.unsplash.com/photo-1492619375914-88005aa9e8fb?w=600&auto=format&fit=crop&q=80", &["4K", "Color Graded", "Cinematic"], "MtN1YnoL46Q", Aspect::Landscape),
                    video("item-brand-documentary", "Brand Documentary", "Deep-dive documentaries that tell your brand story with emotional impact.", "https://images.unsplash.com/photo-1536240478700-b869070f9279?w=600&auto=format&fit=crop&q=80", &["Documentary", "Brand Story", "Emotional"], "LXb3EKWsInQ", Aspect::Landscape),
                    video("item-commercial", "TV Commercial", "Broadcast-ready commercials with premium production value.", "https://images.unsplash.com/photo-1574717024653-61fd2cf4d44d?w=600&auto=format&fit=crop&q=80", &["Broadcast", "Premium", "Commercial"], "CVpNNMlQ3m8", Aspect::Landscape),
                    video("item-destination-reel", "Destination Reel", "Vertical destination showcases perfect for travel brands.", "https://images.unsplash.com/photo-1501785888041-af3ef285b470?w=600&auto=format&fit=crop&q=80", &["Vertical", "Destination", "Travel"], "jNQXAC9IVRw", Aspect::Portrait),
                    video("item-adventure-series", "Adventure Series", "Epic adventure content with drone shots and action sequences.", "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?w=600&auto=format&fit=crop&q=80", &["Adventure", "Drone", "Action"], "ScMzIvxBSi4", Aspect::Landscape),
                ],
            },
        ],
    },
    Service {
        id: "svc-web-dev",
        slug: "web-dev",
        title: "Web Development",
        description: "Blazing-fast, conversion-optimized digital experiences built with cutting-edge technology and obsessive attention to detail.",
        icon: "💻",
        color: "cyan",
        categories: &[
            Category {
                id: "cat-corporate",
                title: "Corporate & Business Websites",
                description: "Professional, high-performance web solutions for established enterprises and growing businesses.",
                image: "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800&auto=format&fit=crop&q=80",
                items: &[
                    Item {
                        id: "item-corp-1",
                        title: "Shree Ram Properties",
                        description: "A premium real estate platform featuring dynamic property listings and seamless lead capture.",
                        thumbnail: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=600&auto=format&fit=crop&q=80",
                        tags: &["Real Estate", "Next.js", "Corporate"],
                        metadata: ItemMetadata::Web {
                            url: Some(SITE_URL),
                            stack: Some("Next.js + Tailwind + Framer Motion"),
                            features: &["Property Search", "Lead Generation", "Admin Dashboard"],
                        },
                    },
                    Item {
                        id: "item-corp-2",
                        title: "Aditya General Store",
                        description: "A modern digital storefront streamlining inventory and customer engagement for local business.",
                        thumbnail: "https://images.unsplash.com/photo-1580828343064-fde4fc206bc6?w=600&auto=format&fit=crop&q=80",
                        tags: &["E-commerce", "Local Business", "Retail"],
                        metadata: ItemMetadata::Web {
                            url: Some(SITE_URL),
                            stack: Some("React + Node.js"),
                            features: &["Inventory Sync", "WhatsApp Integration", "Digital Catalog"],
                        },
                    },
                ],
            },
            Category {
                id: "cat-landing-pages",
                title: "Marketing & Landing Pages",
                description: "Conversion-focused single-page experiences designed to turn visitors into lifelong customers.",
                image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&auto=format&fit=crop&q=80",
                items: &[Item {
                    id: "item-landing-1",
                    title: "High-Conversion SaaS Landing",
                    description: "Optimized for lead generation with interactive elements and lightning-fast performance.",
                    thumbnail: "https://images.unsplash.com/photo-1551434678-e076c223a692?w=600&auto=format&fit=crop&q=80",
                    tags: &["Marketing", "Framer Motion", "Conversion"],
                    metadata: ItemMetadata::Web {
                        url: Some(SITE_URL),
                        stack: Some("Next.js + Framer Motion"),
                        features: &["A/B Tested", "Mobile First", "Heatmap Ready"],
                    },
                }],
            },
            Category {
                id: "cat-portfolios",
                title: "Personal Portfolios & V-Cards",
                description: "Bespoke digital identities for creatives, professionals, and thought leaders.",
                image: "https://images.unsplash.com/photo-1507238691740-187a5b1d37b8?w=800&auto=format&fit=crop&q=80",
                items: &[Item {
                    id: "item-portfolio-1",
                    title: "Creative Director Portfolio",
                    description: "Immersive storytelling through visual design and smooth, interactive motion.",
                    thumbnail: "https://images.unsplash.com/photo-1545235617-9465d2a55698?w=600&auto=format&fit=crop&q=80",
                    tags: &["Portfolio", "Creative", "Motion"],
                    metadata: ItemMetadata::Web {
                        url: Some(SITE_URL),
                        stack: Some("React + Three.js"),
                        features: &["Custom Animations", "Dark Mode", "Mobile Optimized"],
                    },
                }],
            },
        ],
    },
    Service {
        id: "svc-ai-agents",
        slug: "ai-agents",
        title: "AI Agents",
        description: "Intelligent automation solutions that transform customer interactions and streamline operations with cutting-edge artificial intelligence.",
        icon: "🤖",
        color: "violet",
        categories: &[
            Category {
                id: "cat-chatbots",
                title: "Chatbots",
                description: "24/7 intelligent conversational agents that never sleep",
                image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&auto=format&fit=crop&q=80",
                items: &[
                    Item {
                        id: "item-support-bot",
                        title: "Support Bot",
                        description: "Intelligent customer support that resolves 80% of queries automatically with sentiment analysis and context awareness.",
                        thumbnail: "https://images.unsplash.com/photo-1531746790731-6c087fecd65a?w=600&auto=format&fit=crop&q=80",
                        tags: &["NLP", "24/7", "Multi-language"],
                        metadata: ItemMetadata::Ai {
                            platform: Some("Web & Mobile"),
                            features: &["Sentiment Analysis", "CRM Sync", "Handoff to Human", "Analytics Dashboard"],
                            integrations: &[],
                        },
                    },
                    Item {
                        id: "item-sales-assistant",
                        title: "Sales Assistant",
                        description: "AI-powered lead qualification and nurturing that works around the clock to grow your pipeline.",
                        thumbnail: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=600&auto=format&fit=crop&q=80",
                        tags: &["Lead Gen", "CRM", "Qualification"],
                        metadata: ItemMetadata::Ai {
                            platform: Some("Slack & Web"),
                            features: &["Lead Scoring", "Calendar Integration", "Follow-up Automation"],
                            integrations: &[],
                        },
                    },
                ],
            },
            Category {
                id: "cat-automation",
                title: "Workflow Automation",
                description: "End-to-end process automation that eliminates manual tasks",
                image: "https://images.unsplash.com/photo-1518186285589-2f7649de83e0?w=800&auto=format&fit=crop&q=80",
                items: &[
                    Item {
                        id: "item-doc-processor",
                        title: "Doc Processor",
                        description: "Automated document processing with OCR, data extraction, and intelligent routing.",
                        thumbnail: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&auto=format&fit=crop&q=80",
                        tags: &["OCR", "Parsing", "PDF"],
                        metadata: ItemMetadata::Ai {
                            platform: None,
                            features: &["OCR Recognition", "Data Extraction", "Auto-classification", "API Integration"],
                            integrations: &["Zapier", "Make", "n8n"],
                        },
                    },
                    Item {
                        id: "item-email-automation",
                        title: "Email Automation",
                        description: "Smart email routing, response generation, and workflow triggers.",
                        thumbnail: "https://images.unsplash.com/photo-1596526131083-e8c633c948d2?w=600&auto=format&fit=crop&q=80",
                        tags: &["Email", "GPT", "Workflows"],
                        metadata: ItemMetadata::Ai {
                            platform: None,
                            features: &["Smart Categorization", "Auto-response", "Priority Detection"],
                            integrations: &["Gmail", "Outlook", "Custom SMTP"],
                        },
                    },
                ],
            },
            Category {
                id: "cat-analytics",
                title: "Analytics & Insights",
                description: "AI-powered analytics that turn data into actionable intelligence",
                image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&auto=format&fit=crop&q=80",
                items: &[Item {
                    id: "item-market-pulse",
                    title: "Market Pulse",
                    description: "Real-time trend detection and competitive intelligence powered by advanced NLP.",
                    thumbnail: "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=600&auto=format&fit=crop&q=80",
                    tags: &["Trend Detection", "NLP", "Real-time"],
                    metadata: ItemMetadata::Ai {
                        platform: Some("Dashboard & API"),
                        features: &["Social Listening", "Competitor Tracking", "Trend Forecasting", "Custom Alerts"],
                        integrations: &[],
                    },
                }],
            },
        ],
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "t-1",
        name: "Sarah Chen",
        role: "CEO",
        company: "TechVentures",
        avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200&auto=format&fit=crop&q=80",
        content: "Logician Creatives transformed our digital presence completely. The AI chatbot alone increased our conversions by 340%. Their attention to detail is obsessive and the results speak for themselves.",
        rating: 5,
    },
    Testimonial {
        id: "t-2",
        name: "Marcus Johnson",
        role: "Head of Marketing",
        company: "ScaleUp Inc",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&auto=format&fit=crop&q=80",
        content: "Their video content is on another level. Every piece feels like a Hollywood production but converts like a performance ad. Our TikTok went from 10K to 2M followers in 6 months.",
        rating: 5,
    },
    Testimonial {
        id: "t-3",
        name: "Elena Rodriguez",
        role: "Founder & CEO",
        company: "NexGen Labs",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=200&auto=format&fit=crop&q=80",
        content: "The web platform they built us handles 100K concurrent users without breaking a sweat. Clean code, beautiful design, and performance that's off the charts. Worth every penny.",
        rating: 5,
    },
    Testimonial {
        id: "t-4",
        name: "David Kim",
        role: "CTO",
        company: "FinanceFlow",
        avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=200&auto=format&fit=crop&q=80",
        content: "We've worked with agencies that talk big but can't execute. Logician Creatives is different - they over-deliver on every single project. The AI automation saved us 200 hours per month.",
        rating: 5,
    },
    Testimonial {
        id: "t-5",
        name: "Amanda Foster",
        role: "VP of Growth",
        company: "Wellness Co",
        avatar: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=200&auto=format&fit=crop&q=80",
        content: "From concept to launch in 6 weeks. The e-commerce site they built drove $2M in revenue in the first quarter. Their process is bulletproof and communication is flawless.",
        rating: 5,
    },
];

pub static TOOLS: &[Tool] = &[
    Tool { id: "tool-react", name: "React", category: ToolCategory::Frontend, color: "#61DAFB" },
    Tool { id: "tool-nextjs", name: "Next.js", category: ToolCategory::Frontend, color: "#ffffff" },
    Tool { id: "tool-typescript", name: "TypeScript", category: ToolCategory::Frontend, color: "#3178C6" },
    Tool { id: "tool-tailwind", name: "Tailwind CSS", category: ToolCategory::Frontend, color: "#38BDF8" },
    Tool { id: "tool-framer", name: "Framer Motion", category: ToolCategory::Frontend, color: "#BB00FF" },
    Tool { id: "tool-openai", name: "OpenAI", category: ToolCategory::Ai, color: "#10A37F" },
    Tool { id: "tool-langchain", name: "LangChain", category: ToolCategory::Ai, color: "#1C3C3C" },
    Tool { id: "tool-python", name: "Python", category: ToolCategory::Backend, color: "#3776AB" },
    Tool { id: "tool-nodejs", name: "Node.js", category: ToolCategory::Backend, color: "#339933" },
    Tool { id: "tool-postgresql", name: "PostgreSQL", category: ToolCategory::Database, color: "#4169E1" },
    Tool { id: "tool-prisma", name: "Prisma", category: ToolCategory::Database, color: "#2D3748" },
    Tool { id: "tool-redis", name: "Redis", category: ToolCategory::Database, color: "#DC382D" },
    Tool { id: "tool-aws", name: "AWS", category: ToolCategory::Cloud, color: "#FF9900" },
    Tool { id: "tool-vercel", name: "Vercel", category: ToolCategory::Cloud, color: "#ffffff" },
    Tool { id: "tool-docker", name: "Docker", category: ToolCategory::Cloud, color: "#2496ED" },
    Tool { id: "tool-figma", name: "Figma", category: ToolCategory::Design, color: "#F24E1E" },
    Tool { id: "tool-ae", name: "After Effects", category: ToolCategory::Video, color: "#9999FF" },
    Tool { id: "tool-davinci", name: "DaVinci Resolve", category: ToolCategory::Video, color: "#E67E22" },
    Tool { id: "tool-premiere", name: "Premiere Pro", category: ToolCategory::Video, color: "#9999FF" },
    Tool { id: "tool-blender", name: "Blender", category: ToolCategory::Video, color: "#F5792A" },
];

pub static PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        step: 1,
        title: "Discovery",
        description: "Deep dive into your vision, goals, market position, and challenges. We learn everything about your business.",
    },
    ProcessStep {
        step: 2,
        title: "Strategy",
        description: "Craft a tailored roadmap with clear milestones, KPIs, and a timeline designed for maximum impact.",
    },
    ProcessStep {
        step: 3,
        title: "Design",
        description: "Create stunning visuals and seamless user experiences that align with your brand and convert visitors.",
    },
    ProcessStep {
        step: 4,
        title: "Develop",
        description: "Build with cutting-edge technology, clean architecture, and obsessive attention to performance and detail.",
    },
    ProcessStep {
        step: 5,
        title: "Launch",
        description: "Deploy, optimize, monitor, and iterate. We celebrate your success and ensure continued growth.",
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { id: "yt", name: "YouTube", url: "https://youtube.com/@logiciancreatives", color: "#FF0000" },
    SocialLink { id: "x", name: "X", url: "https://x.com/Suraj_cix", color: "#ffffff" },
    SocialLink { id: "ig", name: "Instagram", url: "https://www.instagram.com/logiciancreatives/", color: "#E4405F" },
    SocialLink { id: "li", name: "LinkedIn", url: "https://www.linkedin.com/in/suraj-kumar0/", color: "#0A66C2" },
    SocialLink { id: "gh", name: "GitHub", url: "https://github.com/Logician0", color: "#ffffff" },
];

pub static FAQS: &[Faq] = &[
    Faq {
        question: "What makes Logician Creatives different?",
        answer: "We don't just build websites or edit videos; we build ecosystems. Our unique blend of AI automation, high-end motion design, and performance engineering ensures your brand doesn't just look good, it dominates.",
    },
    Faq {
        question: "How does your subscription model work?",
        answer: "We offer flexible monthly retainers for continuous growth. You get a dedicated team, priority support, and a set amount of hours/deliverables per month. Pause or cancel anytime with transparent pricing.",
    },
    Faq {
        question: "Do you work with startups?",
        answer: "Absolutely. We love ambitious founders. We have specific packages designed to get startups from zero to one, focusing on MVP development, pitch decks, and launch content.",
    },
    Faq {
        question: "What is your typical turnaround time?",
        answer: "For video edits, typically 24-48 hours. For web projects, a landing page takes 1-2 weeks, while full platforms take 4-8 weeks depending on complexity. We move fast without breaking things.",
    },
];

pub fn all_services() -> &'static [Service] {
    SERVICES
}

pub fn service_by_slug(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug == slug)
}

pub fn service_categories(slug: &str) -> &'static [Category] {
    service_by_slug(slug).map(|s| s.categories).unwrap_or(&[])
}

pub fn video_category(category_id: &str) -> Option<&'static Category> {
    service_categories("video-editing")
        .iter()
        .find(|c| c.id == category_id)
}

/// Videos to list next to the one playing: landscape first, then portrait,
/// each group in catalogue order.
pub fn up_next<'a>(videos: &[&'a Item], current: Option<&Item>) -> Vec<&'a Item> {
    let others = videos
        .iter()
        .copied()
        .filter(|v| current.map_or(true, |c| c.id != v.id));
    let (portrait, mut ordered): (Vec<_>, Vec<_>) =
        others.partition(|v| v.aspect() == Some(Aspect::Portrait));
    ordered.extend(portrait);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_are_in_display_order() {
        let slugs: Vec<_> = all_services().iter().map(|s| s.slug).collect();
        assert_eq!(slugs, ["video-editing", "web-dev", "ai-agents"]);
    }

    #[test]
    fn lookup_by_slug() {
        assert_eq!(service_by_slug("web-dev").map(|s| s.id), Some("svc-web-dev"));
        assert!(service_by_slug("nope").is_none());
        assert!(service_categories("nope").is_empty());
        assert_eq!(service_categories("ai-agents").len(), 3);
    }

    #[test]
    fn only_ai_agents_is_locked() {
        let locked: Vec<_> = all_services()
            .iter()
            .filter(|s| s.is_locked())
            .map(|s| s.slug)
            .collect();
        assert_eq!(locked, ["ai-agents"]);
    }

    fn item(slug: &str, item_id: &str) -> &'static Item {
        service_categories(slug)
            .iter()
            .flat_map(|category| category.items)
            .find(|item| item.id == item_id)
            .unwrap()
    }

    #[test]
    fn ai_items_live_under_automation() {
        let automation = service_categories("ai-agents")
            .iter()
            .find(|c| c.id == "cat-automation")
            .unwrap();
        assert!(automation.items.iter().any(|i| i.title == "Doc Processor"));
    }

    #[test]
    fn every_video_category_is_routable() {
        for category in service_categories("video-editing") {
            assert!(category.id.starts_with("cat-"));
            assert!(video_category(category.id).is_some());
            assert!(category.items.iter().all(Item::is_video));
        }
        assert!(video_category("cat-corporate").is_none());
    }

    #[test]
    fn web_items_open_externally() {
        assert_eq!(item("web-dev", "item-corp-1").external_url(), Some(SITE_URL));
        assert_eq!(item("ai-agents", "item-support-bot").external_url(), None);
    }

    #[test]
    fn up_next_lists_landscape_before_portrait() {
        let category = video_category("cat-podcasts").unwrap();
        let videos: Vec<&Item> = category.items.iter().collect();
        let next = up_next(&videos, Some(videos[0]));
        let ids: Vec<_> = next.iter().map(|v| v.id).collect();
        assert_eq!(
            ids,
            [
                "item-podcast-clip-horizontal",
                "item-podcast-highlights",
                "item-podcast-clip-vertical",
            ]
        );
    }

    #[test]
    fn up_next_without_a_current_video_keeps_everything() {
        let category = video_category("cat-shorts").unwrap();
        let videos: Vec<&Item> = category.items.iter().collect();
        assert_eq!(up_next(&videos, None).len(), videos.len());
    }
}
