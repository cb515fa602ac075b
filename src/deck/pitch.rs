//! The eight-slide ParallaxPay pitch, with speaker notes on every slide.

use super::{
    ArchitectureLayer, DEFAULT_HEIGHT_IN, DEFAULT_WIDTH_IN, Deck, FeatureCard, Palette, Slide,
    SlideLayout,
};
use crate::common::style::RGBColor;

pub const FILE_NAME: &str = "ParallaxPay_Pitch_Deck.pptx";

const GOLD: RGBColor = RGBColor::new(255, 215, 0);
const SOLANA_BLUE: RGBColor = RGBColor::new(0, 204, 255);

fn content(title: &str, bullets: &[&str], accent: Option<RGBColor>) -> SlideLayout {
    SlideLayout::Content {
        title: title.to_string(),
        bullets: bullets.iter().map(|b| b.to_string()).collect(),
        accent,
    }
}

pub fn deck() -> Deck {
    let palette = Palette::PARALLAX;

    let slides = vec![
        Slide::new(
            "🎨 Creating title slide...",
            SlideLayout::Title {
                title: "ParallaxPay".to_string(),
                subtitle: "Pay-per-Inference for\nAutonomous AI Agents".to_string(),
                tagline: "Gradient Parallax • Solana x402 • MCP".to_string(),
            },
        )
        .with_notes(
            "Open with the one-liner: ParallaxPay lets AI agents buy their own compute.\n\
             Agents discover Parallax providers, pay per inference over x402, and run on a schedule without a human in the loop.",
        ),
        Slide::new(
            "📊 Creating problem slide...",
            content(
                "The Problem",
                &[
                    "🤖 Agents can reason, but they cannot pay for the compute they need",
                    "💰 Card rails and invoices cost more than a single inference is worth",
                    "🌐 No open marketplace matches agents with GPU providers",
                    "🔒 No way to know which provider to trust with an autonomous payment",
                ],
                None,
            ),
        )
        .with_notes(
            "Stress the unit economics: an inference costs a tenth of a cent, a card payment costs thirty.\n\
             Today every agent platform hard-codes one provider and one API key.",
        ),
        Slide::new(
            "💡 Creating solution slide...",
            content(
                "Our Solution",
                &[
                    "🎯 A marketplace where agents pick providers on price, latency and reputation",
                    "💸 x402 micropayments on Solana at $0.001 per inference",
                    "🏗️ Real multi-node inference on Gradient Parallax clusters",
                    "🤝 Agent swarms that benchmark providers and vote on the best one",
                ],
                Some(palette.primary),
            ),
        )
        .with_notes(
            "Each bullet maps to a component of the demo.\n\
             Payment happens inside the HTTP request: the provider answers 402, the agent pays, the request is retried with proof.",
        ),
        Slide::new(
            "🏗️ Creating architecture slide...",
            SlideLayout::Architecture {
                title: "How It Works".to_string(),
                layers: vec![
                    ArchitectureLayer::new("AI Agents", palette.highlight),
                    ArchitectureLayer::new("x402 Protocol", palette.accent),
                    ArchitectureLayer::new("Parallax Cluster", palette.primary),
                    ArchitectureLayer::new("Solana Blockchain", SOLANA_BLUE),
                ],
            },
        )
        .with_notes(
            "Walk the stack top to bottom.\n\
             Agents call an OpenAI-compatible endpoint, x402 middleware settles the payment, the Parallax scheduler spreads work over its workers, and Solana records every transaction.",
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
                footer: "✓ 6 Agent Types  •  ✓ Multi-node Parallax Cluster  •  ✓ Real Solana Payments"
                    .to_string(),
            },
        )
        .with_notes(
            "Switch to the dashboard here.\n\
             Start the Market Oracle, show the swarm vote, then open the activity feed to show the payment landing on-chain.",
        ),
        Slide::new(
            "🏆 Creating competitive advantages slide...",
            content(
                "Why ParallaxPay Wins",
                &[
                    "🥇 True multi-node Parallax cluster, not a single instance",
                    "🤖 Agents schedule, pay and execute on their own",
                    "🧠 Consensus across providers instead of trusting one",
                    "🎯 Production-ready: Docker, SSL, health checks and failover",
                ],
                Some(GOLD),
            ),
        )
        .with_notes(
            "Keep this short and concrete.\n\
             Point at the scheduler plus workers setup and the reputation badges judges saw in the demo.",
        ),
        Slide::new(
            "🗺️ Creating roadmap slide...",
            content(
                "Roadmap",
                &[
                    "🚀 Mainnet payments for every Parallax provider",
                    "📈 Provider staking backing the reputation score",
                    "🔌 MCP tools so any assistant can hire an agent",
                    "🌍 Open agent registry with revenue sharing",
                ],
                Some(palette.highlight),
            ),
        )
        .with_notes(
            "Frame the roadmap as the path from hackathon demo to network.\n\
             Staking turns reputation from a badge into collateral.",
        ),
        Slide::new(
            "✅ Creating closing slide...",
            SlideLayout::Closing {
                headline: "Let's Build the\nAgent Economy".to_string(),
                subtitle: "ParallaxPay • Built on Gradient Parallax & Solana x402".to_string(),
                call_to_action: "github.com/shariqazeem/parallaxpay_x402".to_string(),
            },
        )
        .with_notes("Thank the judges, leave the repository link on screen and take questions."),
    ];

    Deck {
        title: "ParallaxPay".to_string(),
        author: Some("ParallaxPay Team".to_string()),
        file_name: FILE_NAME.to_string(),
        width_in: DEFAULT_WIDTH_IN,
        height_in: DEFAULT_HEIGHT_IN,
        palette,
        sign_off: Some("🎉 Done! Ready to pitch!".to_string()),
        slides,
    }
}
