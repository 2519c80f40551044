//! Sentence templates and filler vocabulary.

use crate::catalog::BiasKind;

/// Templates for a kind. Placeholders are `{name}` and may repeat.
#[must_use]
pub const fn templates_for(kind: BiasKind) -> &'static [&'static str] {
    match kind {
        BiasKind::ConfirmationBias => &[
            "Based on {recent_event}, it's obvious that {conclusion} always happens.",
            "Everyone knows that {claim} is definitely true.",
            "{topic} certainly proves that {assertion} without any doubt.",
            "It's clear that {statement} - the evidence overwhelmingly supports this.",
        ],
        BiasKind::AvailabilityHeuristic => &[
            "Given the recent {event}, we can conclude that {prediction}.",
            "With what happened {timeframe}, it's certain that {outcome}.",
            "Following the viral {incident}, clearly {generalization}.",
            "Since {recent_news}, obviously {extrapolation}.",
        ],
        BiasKind::SurvivorshipBias => &[
            "Looking at successful {group}, they all {pattern}.",
            "Every top {profession} did {action} to succeed.",
            "The best {category} all share {trait}, so you should too.",
            "Winners in {field} universally {behavior}.",
        ],
        BiasKind::AnchoringBias => &[
            "Compared to the initial estimate of {value}, {new_value} seems reasonable.",
            "Starting from {reference_point}, {conclusion} makes sense.",
            "Relative to {anchor}, this {outcome} is acceptable.",
            "Based on our first impression of {initial}, {judgment}.",
        ],
        BiasKind::RecencyBias => &[
            "This week's {data} shows that {trend} will continue.",
            "Yesterday's {event} confirms that {pattern}.",
            "The latest {statistics} prove {conclusion}.",
            "Current {conditions} indicate {prediction}.",
        ],
        BiasKind::Groupthink => &[
            "Most experts agree that {consensus}.",
            "The general opinion is that {belief}.",
            "It's widely accepted that {statement}.",
            "Conventional wisdom says {assertion}.",
        ],
    }
}

/// Filler values for a placeholder name, or `None` if the name is unknown.
#[must_use]
pub fn fillers_for(name: &str) -> Option<&'static [&'static str]> {
    let values: &'static [&'static str] = match name {
        "recent_event" => &["the stock market crash", "Tesla's success", "COVID-19", "the tech boom"],
        "conclusion" => &["this outcome", "our strategy", "this approach"],
        "claim" => &["AI will replace all jobs", "startups always fail", "education guarantees success"],
        "topic" => &["This study", "The data", "Research", "Statistics"],
        "assertion" => &["our approach is superior", "alternatives don't work", "this is the only way"],
        "statement" => &["innovation requires risk", "experience matters most", "luck plays no role"],
        "event" => &["election results", "product launch", "market volatility"],
        "prediction" => &["similar outcomes are inevitable", "the pattern will repeat", "this is the new normal"],
        "timeframe" => &["this month", "last quarter", "recently"],
        "outcome" => &["trends will continue indefinitely", "changes are permanent"],
        "incident" => &["social media campaign", "celebrity endorsement", "news story"],
        "generalization" => &["everyone thinks this way", "the market has changed forever"],
        "recent_news" => &["the announcement", "that viral post", "the controversy"],
        "extrapolation" => &["everything has changed", "old rules don't apply"],
        "group" => &["entrepreneurs", "CEOs", "investors", "athletes"],
        "pattern" => &["worked 80-hour weeks", "dropped out of college", "took big risks"],
        "profession" => &["founder", "executive", "scientist"],
        "action" => &["network extensively", "fail multiple times", "think differently"],
        "category" => &["companies", "performers", "leaders"],
        "trait" => &["aggressive ambition", "unwavering confidence", "early adoption"],
        "field" => &["business", "technology", "sports"],
        "behavior" => &["embrace failure", "challenge norms", "trust intuition"],
        "value" => &["$100", "5 years", "50 units"],
        "new_value" => &["$120", "6 years", "60 units"],
        "reference_point" => &["market average", "competitor pricing", "last year"],
        "anchor" => &["the initial proposal", "first quote", "original estimate"],
        "judgment" => &["seems fair", "looks optimal", "appears reasonable"],
        "data" => &["sales figures", "user engagement", "performance metrics"],
        "trend" => &["upward momentum", "customer interest", "market growth"],
        "statistics" => &["numbers", "results", "findings"],
        "conditions" => &["market sentiment", "economic indicators", "consumer behavior"],
        "consensus" => &["remote work is better", "AI is dangerous", "markets are efficient"],
        "belief" => &["quality always wins", "first-mover advantage matters", "brand loyalty is dead"],
        "initial" => &["quality", "potential", "capabilities"],
        _ => return None,
    };
    Some(values)
}

/// Distinct placeholder names in order of first appearance.
#[must_use]
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        let name = &after[..close];
        if !names.contains(&name) {
            names.push(name);
        }
        rest = &after[close + 1..];
    }
    names
}
