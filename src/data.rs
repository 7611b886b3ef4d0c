//! The embedded feature table.
//!
//! Every feature extracted from the partner feedback sessions, in
//! presentation order. Definition order matters: a record's position is its
//! `#` in both generated outputs, and per-prototype sections appear in the
//! order their label is first seen here.

use crate::models::FeatureRecord;

/// All features extracted from partner feedback.
pub fn feature_records() -> Vec<FeatureRecord> {
    vec![
        // Magic Mirror - department display
        FeatureRecord::new(
            "Department-level Metrics Display",
            "Display aggregated AI usage metrics at department level instead of personal data",
            "Magic Mirror (Prototype 1)",
            "Removes privacy concerns by showing collective data only. Compliance-friendly approach.",
            "Matthijs, Jop, Thomas",
        ),
        FeatureRecord::new(
            "Prompt Efficiency Metrics",
            "Show average prompts per query and efficiency scores for departments",
            "Magic Mirror (Prototype 1)",
            "Key metric for measuring sustainable prompt usage. Target: <1.5 prompts per query",
            "Matthijs",
        ),
        FeatureRecord::new(
            "Energy Usage Tracking",
            "Display real-time energy consumption from AI operations",
            "Magic Mirror (Prototype 1)",
            "Makes abstract sustainability concrete through measurable energy data",
            "Thomas, Matthijs",
        ),
        FeatureRecord::new(
            "Tool Diversity Metrics",
            "Track variety of AI tools being used across departments",
            "Magic Mirror (Prototype 1)",
            "Encourages exploration of more efficient alternatives",
            "Matthijs",
        ),
        FeatureRecord::new(
            "CO₂ Impact Visualization",
            "Show carbon footprint of AI usage with real-world equivalents",
            "Magic Mirror (Prototype 1)",
            "Translates technical metrics into understandable environmental impact",
            "Thomas",
        ),
        FeatureRecord::new(
            "Generic Actionable Tips",
            "Display non-personalized sustainability tips that anyone can follow",
            "Magic Mirror (Prototype 1)",
            "Avoids personalization for compliance while still providing value",
            "Matthijs",
        ),
        FeatureRecord::new(
            "Ministry-wide Leaderboard",
            "Friendly competition between departments on sustainability metrics",
            "Magic Mirror (Prototype 1)",
            "Gamification element to drive engagement and healthy competition",
            "Moses (based on feedback)",
        ),
        FeatureRecord::new(
            "QR Codes for Resources",
            "Quick access to detailed information and guides via QR codes",
            "Magic Mirror (Prototype 1)",
            "Bridges physical display with digital resources",
            "Moses",
        ),
        FeatureRecord::new(
            "Run on Existing Screens",
            "Deploy on ministry's existing display infrastructure",
            "Magic Mirror (Prototype 1)",
            "No new hardware required - reduces cost and complexity",
            "Matthijs, Jop",
        ),
        // Digital Forest
        FeatureRecord::new(
            "Clear Behavior Triggers",
            "Well-defined actions that lead to forest growth (tree planting)",
            "Digital Forest (Prototype 2)",
            "Addresses Thomas's key question: 'What behavior do you want to create?'",
            "Thomas",
        ),
        FeatureRecord::new(
            "Automated Tracking Architecture",
            "Backend system that automatically tracks sustainable actions without manual input",
            "Digital Forest (Prototype 2)",
            "Solves complexity concerns raised by all partners",
            "Matthijs, Jop",
        ),
        FeatureRecord::new(
            "Integration with Prompt Coach",
            "Connect forest growth to prompt optimization activities",
            "Digital Forest (Prototype 2)",
            "Creates unified experience across prototypes",
            "Jop, Thomas",
        ),
        FeatureRecord::new(
            "Integration with Dashboard",
            "Use dashboard analytics data to drive forest visualization",
            "Digital Forest (Prototype 2)",
            "Dashboard becomes 'analytical backbone' for visual prototypes",
            "Thomas",
        ),
        FeatureRecord::new(
            "Tiered Implementation (MVP→Automated→Real-time)",
            "Phased rollout starting simple and adding complexity over time",
            "Digital Forest (Prototype 2)",
            "Follows Matthijs's advice: start with minimal viable version",
            "Matthijs",
        ),
        FeatureRecord::new(
            "Behavior Matrix Documentation",
            "Clear mapping of which actions trigger which forest changes",
            "Digital Forest (Prototype 2)",
            "Addresses concerns about unclear behavior→outcome relationships",
            "Thomas, Jop",
        ),
        FeatureRecord::new(
            "Gamification Rules",
            "Point system, achievements, and rewards for sustainable actions",
            "Digital Forest (Prototype 2)",
            "Makes sustainability engaging and fun",
            "Matthijs (gamification exercise)",
        ),
        FeatureRecord::new(
            "Optimized Prompts Grow Trees",
            "Using optimized prompts from library triggers tree growth",
            "Digital Forest (Prototype 2)",
            "Links directly to Prompt Coach actions",
            "Moses (based on feedback)",
        ),
        FeatureRecord::new(
            "Quiz Completion Rewards",
            "Completing sustainability quizzes (>80%) grows trees",
            "Digital Forest (Prototype 2)",
            "Educational element with visual reward",
            "Moses",
        ),
        FeatureRecord::new(
            "Efficiency Goal Achievement",
            "Achieving <1.5 prompt efficiency triggers forest growth",
            "Digital Forest (Prototype 2)",
            "Ties visual reward to concrete efficiency metric",
            "Matthijs (efficiency focus)",
        ),
        FeatureRecord::new(
            "Sustainable Alternative Adoption",
            "Switching to eco-friendly AI tools grows trees",
            "Digital Forest (Prototype 2)",
            "Encourages exploration of greener alternatives",
            "Moses",
        ),
        FeatureRecord::new(
            "CO₂ Reduction Milestones",
            "10% month-over-month CO₂ reduction triggers rewards",
            "Digital Forest (Prototype 2)",
            "Focuses on measurable environmental impact",
            "Thomas (impact focus)",
        ),
        FeatureRecord::new(
            "Prompt Sharing Rewards",
            "Sharing optimized prompts with colleagues grows trees",
            "Digital Forest (Prototype 2)",
            "Encourages collaborative sustainability culture",
            "Moses",
        ),
        // Black Frame - Tetris
        FeatureRecord::new(
            "Tetris-style Grid Visualization",
            "Visual representation of AI usage intensity as filling Tetris blocks",
            "Black Frame (Prototype 3)",
            "Jop's brilliant suggestion to replace manual drawing",
            "Jop",
        ),
        FeatureRecord::new(
            "Fully Automated Usage Tracking",
            "Automatic detection of AI requests without manual input",
            "Black Frame (Prototype 3)",
            "Solves manual tracking problem that all partners flagged",
            "Thomas, Jop",
        ),
        FeatureRecord::new(
            "Every 5 AI Requests = +1 Block",
            "Clear ratio for how usage translates to visual blocks",
            "Black Frame (Prototype 3)",
            "Makes abstract usage tangible and visible",
            "Moses (implementing Jop's idea)",
        ),
        FeatureRecord::new(
            "Color-coded Intensity Blocks",
            "Blocks change color based on usage intensity (low/moderate/high/critical)",
            "Black Frame (Prototype 3)",
            "Visual feedback on usage severity",
            "Moses",
        ),
        FeatureRecord::new(
            "Sustainable Actions Clear Lines",
            "Completing sustainable actions removes blocks like Tetris line clears",
            "Black Frame (Prototype 3)",
            "Moses's addition to Jop's Tetris idea - makes it actionable",
            "Moses (building on Jop's suggestion)",
        ),
        FeatureRecord::new(
            "Gamified Clearing Rewards",
            "Point system and achievements for clearing blocks through sustainable actions",
            "Black Frame (Prototype 3)",
            "Addresses Matthijs's actionability concern",
            "Matthijs (actionability)",
        ),
        FeatureRecord::new(
            "Real-time Activity Feed",
            "Live updates showing recent AI requests and clearing actions",
            "Black Frame (Prototype 3)",
            "Transparency into what's driving the visualization",
            "Moses",
        ),
        FeatureRecord::new(
            "Danger Zone Warning at 80%",
            "Alert when Tetris grid reaches critical capacity",
            "Black Frame (Prototype 3)",
            "Creates urgency to take sustainable actions",
            "Moses",
        ),
        FeatureRecord::new(
            "Optimize 5 Prompts = Clear 1 Line",
            "Specific clearing action: prompt optimization",
            "Black Frame (Prototype 3)",
            "Links to Prompt Coach functionality",
            "Moses",
        ),
        FeatureRecord::new(
            "Complete Quiz = Clear 2 Lines",
            "Sustainability quiz completion clears multiple lines",
            "Black Frame (Prototype 3)",
            "Rewards educational engagement",
            "Moses",
        ),
        FeatureRecord::new(
            "Use Eco Alternative = Clear 3 Lines",
            "Switching to sustainable AI tool clears significant blocks",
            "Black Frame (Prototype 3)",
            "Higher reward for higher-impact action",
            "Moses",
        ),
        FeatureRecord::new(
            "Achieve Efficiency Goal = Clear 5 Lines",
            "Meeting efficiency targets clears major portion of blocks",
            "Black Frame (Prototype 3)",
            "Biggest reward for most impactful behavior change",
            "Moses",
        ),
        // Prompt Coach
        FeatureRecord::new(
            "Real-time CO₂ Tracking",
            "Show exact carbon emissions for each prompt (e.g., '0.32g CO₂')",
            "Prompt Coach (Prototype 4)",
            "Thomas specifically mentioned wanting to see CO₂ usage",
            "Thomas",
        ),
        FeatureRecord::new(
            "AI-powered Optimization Suggestions",
            "Intelligent recommendations to improve prompt efficiency",
            "Prompt Coach (Prototype 4)",
            "Core value proposition - helps users learn better prompts",
            "Thomas",
        ),
        FeatureRecord::new(
            "Quality vs. Efficiency Trade-off Indicator",
            "Visual display showing balance between result quality and computational efficiency",
            "Prompt Coach (Prototype 4)",
            "Directly addresses Matthijs's key question about trade-offs",
            "Matthijs",
        ),
        FeatureRecord::new(
            "Three Priority Modes",
            "User-selectable modes: Quality First, Balanced, Efficiency First",
            "Prompt Coach (Prototype 4)",
            "Gives users control over quality-efficiency balance",
            "Moses (addressing Matthijs's concern)",
        ),
        FeatureRecord::new(
            "Before/After Comparison",
            "Side-by-side view of original vs. optimized prompt with metrics",
            "Prompt Coach (Prototype 4)",
            "Shows tangible improvement from optimization",
            "Moses",
        ),
        FeatureRecord::new(
            "Savings Calculation",
            "Calculate CO₂, energy, and cost savings from optimization",
            "Prompt Coach (Prototype 4)",
            "Quantifies impact of behavior change",
            "Thomas (impact focus)",
        ),
        FeatureRecord::new(
            "Environmental Impact Equivalents",
            "Translate CO₂ savings into relatable comparisons (e.g., 'X trees planted')",
            "Prompt Coach (Prototype 4)",
            "Makes abstract numbers meaningful",
            "Moses",
        ),
        FeatureRecord::new(
            "Reusable Prompt Library",
            "Collection of pre-optimized templates organized by category",
            "Prompt Coach (Prototype 4)",
            "Jop made distinction between Coach and Library - wants both",
            "Jop",
        ),
        FeatureRecord::new(
            "Category Filtering",
            "Filter prompts by type: Code, Analysis, Writing, Research, etc.",
            "Prompt Coach (Prototype 4)",
            "Makes library easy to navigate",
            "Moses",
        ),
        FeatureRecord::new(
            "Prompt Search Functionality",
            "Search library by keywords, tags, or use case",
            "Prompt Coach (Prototype 4)",
            "Quick access to relevant templates",
            "Moses",
        ),
        FeatureRecord::new(
            "Usage Statistics Display",
            "Show how many others use each template",
            "Prompt Coach (Prototype 4)",
            "Social proof encourages adoption of best practices",
            "Moses",
        ),
        FeatureRecord::new(
            "One-click Template Loading",
            "Instantly load template into prompt editor",
            "Prompt Coach (Prototype 4)",
            "Jop said tool 'would save quite some time' - this enables that",
            "Jop (time-saving)",
        ),
        FeatureRecord::new(
            "Save Optimized Prompts",
            "Add newly optimized prompts to shared library",
            "Prompt Coach (Prototype 4)",
            "Builds collective knowledge base",
            "Moses",
        ),
        // Dashboard
        FeatureRecord::new(
            "Quick Stats Overview",
            "Dashboard widget showing CO₂ saved, efficiency score, queries optimized",
            "Dashboard (Prototype 5)",
            "Jop wanted GAIA-style overview next to Prompt Coach",
            "Jop",
        ),
        FeatureRecord::new(
            "Goals & Progress Tracking",
            "Set sustainability targets and track progress over time",
            "Dashboard (Prototype 5)",
            "Thomas emphasized defining goals and behaviors",
            "Thomas",
        ),
        FeatureRecord::new(
            "Achievements System",
            "Gamified rewards for sustainability milestones",
            "Dashboard (Prototype 5)",
            "Engagement mechanism for behavior change",
            "Matthijs (gamification)",
        ),
        FeatureRecord::new(
            "Sustainable Alternatives Recommendations",
            "Suggest eco-friendly AI tool alternatives based on usage patterns",
            "Dashboard (Prototype 5)",
            "Actionable suggestion to reduce impact",
            "Moses",
        ),
        FeatureRecord::new(
            "Azure Metrics Integration",
            "Connect to Azure monitoring for real usage data",
            "Dashboard (Prototype 5)",
            "Matthijs specifically said to use Azure data as starting point",
            "Matthijs",
        ),
        FeatureRecord::new(
            "Total Interactions Tracking",
            "Count all AI system interactions from Azure",
            "Dashboard (Prototype 5)",
            "Foundation metric from existing infrastructure",
            "Matthijs (use Azure)",
        ),
        FeatureRecord::new(
            "Database Calls Monitoring",
            "Track database queries triggered by AI operations",
            "Dashboard (Prototype 5)",
            "Infrastructure usage metric",
            "Matthijs",
        ),
        FeatureRecord::new(
            "Prompt Request Counting",
            "Total number of prompts sent to AI systems",
            "Dashboard (Prototype 5)",
            "Core usage metric",
            "Matthijs",
        ),
        FeatureRecord::new(
            "CO₂ Estimations from Azure",
            "Leverage Azure's built-in carbon estimates",
            "Dashboard (Prototype 5)",
            "Don't reinvent - use existing Azure capabilities",
            "Matthijs, Thomas",
        ),
        FeatureRecord::new(
            "Usage Pattern Heatmap",
            "Visualize when AI usage is highest, suggest time-shifting to greener hours",
            "Dashboard (Prototype 5)",
            "Actionable insight for load balancing",
            "Moses",
        ),
        FeatureRecord::new(
            "Tool Diversity Tracking",
            "Monitor variety of AI tools being used",
            "Dashboard (Prototype 5)",
            "Encourages exploring efficient alternatives",
            "Matthijs",
        ),
        FeatureRecord::new(
            "Efficiency Trends Over Time",
            "Chart showing improvement in prompt efficiency over weeks/months",
            "Dashboard (Prototype 5)",
            "Shows long-term behavior change impact",
            "Moses",
        ),
        // Cross-cutting integration themes
        FeatureRecord::new(
            "MVP-First Approach",
            "Start with minimal viable version, iterate based on usage",
            "All Prototypes",
            "Matthijs's key advice: 'What is the bare minimum?'",
            "Matthijs",
        ),
        FeatureRecord::new(
            "Common Analytical Backbone",
            "Shared data layer across all visual prototypes",
            "Dashboard + All Visual Prototypes",
            "Thomas said dashboard is 'the basis for all these things'",
            "Thomas",
        ),
        FeatureRecord::new(
            "Fewer Metrics, More Visualization",
            "Focus on visual impact rather than overwhelming data tables",
            "All Prototypes",
            "Thomas's guidance on making dashboard engaging",
            "Thomas",
        ),
        FeatureRecord::new(
            "Link Visual Ideas with Data",
            "Connect creative visuals (forest, mirror) with analytical foundation",
            "Forest + Mirror + Dashboard",
            "Thomas suggested combining visual appeal with data backbone",
            "Thomas",
        ),
        FeatureRecord::new(
            "Department-level Aggregation",
            "All personal data aggregated to department level for privacy compliance",
            "All Prototypes",
            "Solves privacy/compliance concerns across all tools",
            "Matthijs, Jop",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_nonempty_and_fully_populated() {
        let records = feature_records();
        assert!(!records.is_empty());

        for record in &records {
            assert!(!record.feature.is_empty());
            assert!(!record.short_description.is_empty());
            assert!(!record.prototype.is_empty());
            assert!(!record.notes.is_empty());
            assert!(!record.suggested_by.is_empty());
        }
    }

    #[test]
    fn covers_all_five_prototypes() {
        let records = feature_records();
        for label in [
            "Magic Mirror (Prototype 1)",
            "Digital Forest (Prototype 2)",
            "Black Frame (Prototype 3)",
            "Prompt Coach (Prototype 4)",
            "Dashboard (Prototype 5)",
        ] {
            assert!(
                records.iter().any(|r| r.prototype == label),
                "missing records for {label}"
            );
        }
    }
}
