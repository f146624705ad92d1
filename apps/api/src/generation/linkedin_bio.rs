//! LinkedIn bio strategy — four tone-keyed templates, each with its own hashtag set.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::generation::registry::{ArtifactKind, GenerationStrategy};
use crate::generation::request::GenerationRequest;
use crate::models::artifact::{Artifact, BioArtifact};

#[derive(Debug)]
pub struct BioTemplate {
    pub bio: &'static str,
    pub hashtags: &'static [&'static str],
}

static PROFESSIONAL: BioTemplate = BioTemplate {
    bio: "🚀 Frontend Developer | React & TypeScript Specialist | Building exceptional user experiences

Passionate about creating scalable, user-friendly web applications with modern technologies. Experienced in React ecosystem, state management, and performance optimization.

🔧 Core Skills: React • TypeScript • JavaScript • Node.js • HTML/CSS • Git

📈 Track Record: Delivered projects that improved user engagement by 40% and reduced load times by 30%

💡 Always learning and sharing knowledge with the developer community. Open to new opportunities and collaborations.

Let's connect and build something amazing together! ✨",
    hashtags: &[
        "#React",
        "#TypeScript",
        "#Frontend",
        "#WebDevelopment",
        "#JavaScript",
        "#TechCareers",
    ],
};

static CREATIVE: BioTemplate = BioTemplate {
    bio: "✨ Digital Craftsperson | Frontend Magician | Turning ideas into pixel-perfect realities

I don't just write code – I create experiences. Every line of React I write, every component I design, every user interaction I build is crafted with intention and passion.

🎨 What I do:
• Transform complex problems into elegant solutions
• Bridge the gap between design and functionality
• Obsess over details that make users smile

🛠️ My toolkit: React • TypeScript • Creative Problem Solving • User-First Thinking

Currently seeking opportunities where creativity meets code. Ready to bring your next big idea to life! 🌟",
    hashtags: &[
        "#CreativeCoding",
        "#UXDeveloper",
        "#ReactMagic",
        "#DigitalCraft",
        "#TechCreative",
    ],
};

static TECHNICAL: BioTemplate = BioTemplate {
    bio: "⚡ Senior Frontend Engineer | React Ecosystem Expert | Performance & Architecture Focused

Specialized in building high-performance, scalable web applications using React, TypeScript, and modern development practices.

🔧 Technical Expertise:
• React 18+ with Hooks, Context API, and advanced patterns
• TypeScript for type-safe development
• State management: Redux, Zustand, React Query
• Build tools: Webpack, Vite, Rollup
• Testing: Jest, React Testing Library, Cypress
• Performance optimization and code splitting

📊 Impact: Consistently deliver 40%+ performance improvements and maintainable codebases that scale.

Open to senior frontend roles and architectural consulting opportunities.",
    hashtags: &[
        "#ReactJS",
        "#TypeScript",
        "#FrontendArchitecture",
        "#PerformanceOptimization",
        "#SeniorDeveloper",
    ],
};

static ENTHUSIASTIC: BioTemplate = BioTemplate {
    bio: "🎯 Passionate Frontend Developer | React Enthusiast | Love building amazing web experiences!

Hi there! 👋 I'm absolutely in love with frontend development and everything React! There's nothing better than seeing a perfectly crafted user interface come to life.

🚀 What gets me excited:
• Solving complex UI challenges with elegant React solutions
• Learning new technologies and sharing discoveries
• Collaborating with amazing teams to build something special
• Making the web more beautiful and accessible, one component at a time

💪 Skills that drive results: React • TypeScript • Modern CSS • Team Collaboration

Always eager to take on new challenges and grow with innovative teams! Let's connect and create something incredible together! 🌟",
    hashtags: &[
        "#ReactDeveloper",
        "#WebDev",
        "#TechEnthusiast",
        "#TeamPlayer",
        "#AlwaysLearning",
    ],
};

const TIPS: &[&str] = &[
    "Add a professional headshot to increase profile views",
    "Use relevant hashtags to improve discoverability",
    "Update your bio regularly with new achievements",
    "Include specific metrics and accomplishments when possible",
    "Keep it authentic to your personality and style",
];

/// Template for a tone label. Total: any label other than Professional,
/// Creative or Technical (case-insensitive) gets the Enthusiastic template.
pub fn bio_template(label: &str) -> &'static BioTemplate {
    match label.trim().to_ascii_lowercase().as_str() {
        "professional" => &PROFESSIONAL,
        "creative" => &CREATIVE,
        "technical" => &TECHNICAL,
        _ => &ENTHUSIASTIC,
    }
}

pub struct LinkedInBioStrategy;

#[async_trait]
impl GenerationStrategy for LinkedInBioStrategy {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::LinkedInBio
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<Artifact, AppError> {
        let template = bio_template(request.tone.as_str());
        Ok(Artifact::Bio(BioArtifact {
            bio: template.bio.to_string(),
            hashtags: template.hashtags.iter().map(|h| h.to_string()).collect(),
            tips: TIPS.iter().map(|t| t.to_string()).collect(),
        }))
    }
}
