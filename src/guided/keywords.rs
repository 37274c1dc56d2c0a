//! Keyword matching between requirement text and component categories.
//!
//! Scans a functional requirement's text for known keywords and maps the
//! hits to candidate abstract categories, which then filter the problem's
//! `mustHave` list. Matching is raw substring containment over the
//! lower-cased text, not word-boundary matching; see the note on
//! `FR_COMPONENT_KEYWORDS`.

use super::normalize::{normalize, Category};
use crate::types::ComponentRequirement;
use indexmap::IndexSet;
use std::collections::HashSet;

/// Keyword to candidate categories.
///
/// Known limitation: keywords match as substrings, so "load" also fires
/// inside "download" and "upload". Existing problem content depends on the
/// substring semantics, so tightening this to token matching is a behavior
/// change, not a fix.
const FR_COMPONENT_KEYWORDS: &[(&str, &[Category])] = &[
    // Media and files
    ("upload", &[Category::ObjectStorage, Category::Storage]),
    ("video", &[Category::ObjectStorage, Category::Cdn]),
    ("image", &[Category::ObjectStorage, Category::Cdn]),
    ("photo", &[Category::ObjectStorage, Category::Cdn]),
    ("file", &[Category::ObjectStorage]),
    ("stream", &[Category::Cdn, Category::MessageQueue]),
    ("watch", &[Category::Cdn]),
    ("download", &[Category::Cdn, Category::ObjectStorage]),
    // Accounts and records
    ("user", &[Category::Storage, Category::Compute]),
    ("account", &[Category::Storage, Category::Compute]),
    ("login", &[Category::Storage, Category::Compute]),
    ("auth", &[Category::Storage, Category::Compute]),
    ("profile", &[Category::Storage]),
    ("post", &[Category::Storage, Category::Compute]),
    ("comment", &[Category::Storage]),
    ("follow", &[Category::Storage]),
    ("store", &[Category::Storage]),
    ("save", &[Category::Storage]),
    // Discovery
    ("search", &[Category::Search]),
    ("find", &[Category::Search]),
    ("discover", &[Category::Search]),
    ("browse", &[Category::Cdn, Category::Cache]),
    ("view", &[Category::Cdn, Category::Cache]),
    ("feed", &[Category::Cache, Category::Storage]),
    ("timeline", &[Category::Cache, Category::Storage]),
    ("recommend", &[Category::Compute, Category::Cache]),
    // Messaging
    ("chat", &[Category::RealtimeMessaging]),
    (
        "message",
        &[Category::RealtimeMessaging, Category::MessageQueue],
    ),
    (
        "notif",
        &[Category::MessageQueue, Category::RealtimeMessaging],
    ),
    ("real-time", &[Category::RealtimeMessaging]),
    ("realtime", &[Category::RealtimeMessaging]),
    ("live", &[Category::RealtimeMessaging, Category::Cdn]),
    // Performance and scale
    ("fast", &[Category::Cache]),
    ("quick", &[Category::Cache]),
    ("instant", &[Category::Cache]),
    ("cache", &[Category::Cache]),
    ("latency", &[Category::Cache, Category::Cdn]),
    ("scale", &[Category::LoadBalancer]),
    ("million", &[Category::LoadBalancer, Category::Cache]),
    ("concurrent", &[Category::LoadBalancer]),
    ("traffic", &[Category::LoadBalancer]),
    ("load", &[Category::LoadBalancer]),
    // Commerce and processing
    ("order", &[Category::Storage, Category::MessageQueue]),
    ("payment", &[Category::Storage, Category::MessageQueue]),
    ("checkout", &[Category::Storage, Category::MessageQueue]),
    ("analytics", &[Category::MessageQueue, Category::Storage]),
    ("track", &[Category::MessageQueue, Category::Storage]),
    // API surface
    ("api", &[Category::ApiGateway, Category::Compute]),
    ("request", &[Category::Compute]),
];

/// Filter `must_have` down to components introduced by this requirement.
///
/// A component qualifies when its normalized type is among the categories
/// matched in `fr_text` and it has not already been introduced by an
/// earlier step. Output preserves `must_have` order, not keyword discovery
/// order, so step contents are deterministic.
pub fn match_components(
    fr_text: &str,
    must_have: &[ComponentRequirement],
    already_introduced: &IndexSet<String>,
) -> Vec<ComponentRequirement> {
    let text = fr_text.to_lowercase();

    let mut matched: HashSet<Category> = HashSet::new();
    for (keyword, categories) in FR_COMPONENT_KEYWORDS {
        if text.contains(keyword) {
            matched.extend(categories.iter().cloned());
        }
    }

    must_have
        .iter()
        .filter(|req| {
            matched.contains(&normalize(&req.component_type))
                && !already_introduced.contains(req.component_type.as_str())
        })
        .cloned()
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
