//! The ParallaxPay hackathon submission deck.

use super::{
    ArchitectureLayer, DEFAULT_HEIGHT_IN, DEFAULT_WIDTH_IN, Deck, FeatureCard, Palette, Slide,
    SlideLayout,
};
use crate::common::style::RGBColor;

pub const FILE_NAME: &str = "ParallaxPay_Hackathon_Presentation.pptx";

const GOLD: RGBColor = RGBColor::new(255, 215, 0);
const SOLANA_BLUE: RGBColor = RGBColor::new(0, 204, 255);

fn content(title: &str, bullets: &[&str], accent: Option<RGBColor>) -> SlideLayout {
    SlideLayout::Content {
        title: title.to_string(),
        bullets: bullets.iter().map(|b| b.to_string()).collect(),
        accent,
    }
}

/// Ten slides: title, problem, solution, features, architecture, the two
/// integrations, live demo, competitive edge and closing.
pub fn deck() -> Deck {
    let palette = Palette::PARALLAX;

    let slides = vec![
        Slide::new(
            "🎨 Creating title slide...",
            SlideLayout::Title {
                title: "ParallaxPay".to_string(),
                subtitle: "Autonomous AI Agents on Distributed Compute\nwith x402 Micropayments"
                    .to_string(),
                tagline: "x402 Solana Hackathon 2024 • Parallax Eco Track".to_string(),
            },
        ),
        Slide::new(
            "📊 Creating problem statement slide...",
            content(
                "The Problem",
                &[
                    "🤖 AI agents need compute resources but lack payment infrastructure",
                    "💰 Traditional payment systems too slow and expensive for micropayments",
                    "🌐 No decentralized marketplace connecting agents with compute providers",
                    "🔒 Lack of trust and reputation system for autonomous transactions",
                    "⚡ Existing solutions are centralized, manual, and don't scale",
                ],
                None,
            ),
        ),
        Slide::new(
            "💡 Creating solution slide...",
            content(
                "ParallaxPay Solution",
                &[
                    "🎯 Autonomous AI Agent Marketplace on distributed compute infrastructure",
                    "💸 x402 Protocol integration for seamless Solana micropayments ($0.001/inference)",
                    "🏗️ Real distributed compute using Gradient Parallax multi-node clusters",
                    "🤝 Swarm intelligence for collaborative provider discovery & consensus",
                    "🏆 On-chain reputation system with trust badges and attestations",
                    "⏰ Autonomous scheduling - agents run themselves without manual intervention",
                ],
                None,
            ),
        ),
        Slide::new(
            "✨ Creating key features slide...",
            content(
                "Key Features",
                &[
                    "🔮 Market Oracle Agent: Autonomous crypto predictions with multi-provider consensus",
                    "🐝 Agent Swarms: Multiple agents collaborate to benchmark and vote on providers",
                    "⚙️ 6 Specialized Agents: Market Intel, Social Sentiment, DeFi Yield, Portfolio, Oracle, Blockchain Query",
                    "📡 Real-time Provider Discovery: Auto-detect Parallax nodes with health checking",
                    "💎 MCP Server: Model Context Protocol integration (bonus track!)",
                    "🔄 Complete Autonomy: Self-scheduling, auto-payment, auto-execution",
                ],
                Some(palette.primary),
            ),
        ),
        Slide::new(
            "🏗️ Creating architecture slide...",
            SlideLayout::Architecture {
                title: "System Architecture".to_string(),
                layers: vec![
                    ArchitectureLayer::new("AI Agents", palette.highlight),
                    ArchitectureLayer::new("x402 Protocol", palette.accent),
                    ArchitectureLayer::new("Parallax Cluster", palette.primary),
                    ArchitectureLayer::new("Solana Blockchain", SOLANA_BLUE),
                ],
            },
        ),
        Slide::new(
            "🎯 Creating Parallax integration slide...",
            content(
                "Gradient Parallax Integration",
                &[
                    "✅ Multi-node cluster deployment (1 scheduler + N workers)",
                    "✅ Proper scheduler-worker architecture with load balancing",
                    "✅ Real distributed inference (not simulated!)",
                    "✅ Automatic failover and retry logic with health monitoring",
                    "✅ OpenAI-compatible API with cost estimation",
                    "✅ Comprehensive setup documentation and Docker deployment",
                ],
                Some(palette.highlight),
            ),
        ),
        Slide::new(
            "💰 Creating x402 integration slide...",
            content(
                "x402 Protocol Integration",
                &[
                    "💸 Pay-per-inference model with automatic payment handling",
                    "🔐 x402-fetch and x402-express middleware for seamless transactions",
                    "📊 Real-time transaction tracking and public activity feed",
                    "⛓️ On-chain verification with Solana Web3 integration",
                    "📈 Complete payment history with wallet connection",
                    "🚀 Production-ready payment infrastructure",
                ],
                Some(palette.accent),
            ),
        ),
        Slide::new(
            "🎬 Creating demo slide...",
            SlideLayout::Features {
                title: "Live Demo Features".to_string(),
                features: vec![
                    FeatureCard::new(
                        "Market Oracle",
                        "Autonomous crypto predictions\nwith multi-provider consensus",
                    ),
                    FeatureCard::new(
                        "Agent Swarms",
                        "Collaborative intelligence\nfor provider discovery",
                    ),
                    FeatureCard::new("Micropayments", "Real-time x402 payments\non Solana"),
                ],
                footer: "✓ 6 Agent Types  •  ✓ Multi-node Parallax Cluster  •  ✓ Real Solana Payments  •  ✓ MCP Server"
                    .to_string(),
            },
        ),
        Slide::new(
            "🏆 Creating competitive advantages slide...",
            content(
                "Why ParallaxPay Wins",
                &[
                    "🥇 Only submission with TRUE multi-node Parallax cluster (most use single instance)",
                    "🤖 Real autonomous execution (self-scheduling agents, not manual clicks)",
                    "🧠 Swarm intelligence with consensus algorithms (collaborative not competitive)",
                    "🎯 Production-ready with Docker, SSL, comprehensive error handling",
                    "🎁 Qualifies for multiple tracks: Parallax Eco + MCP Server",
                    "📚 Exceptional documentation: 9 detailed docs, guides, troubleshooting",
                    "💪 8,230+ lines of production TypeScript code with modern stack (Next.js 15, React 19)",
                ],
                Some(GOLD),
            ),
        ),
        Slide::new(
            "✅ Creating closing slide...",
            SlideLayout::Closing {
                headline: "The Future of\nAutonomous AI Economies".to_string(),
                subtitle: "ParallaxPay • Built on Gradient Parallax & Solana x402".to_string(),
                call_to_action: "github.com/shariqazeem/parallaxpay_x402".to_string(),
            },
        ),
    ];

    Deck {
        title: "ParallaxPay".to_string(),
        author: Some("ParallaxPay Team".to_string()),
        file_name: FILE_NAME.to_string(),
        width_in: DEFAULT_WIDTH_IN,
        height_in: DEFAULT_HEIGHT_IN,
        palette,
        sign_off: Some("🎉 Done! Ready for your hackathon submission!".to_string()),
        slides,
    }
}
