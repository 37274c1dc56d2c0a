//! Component type normalization and equivalence classes.
//!
//! Learners drop concrete technologies on the canvas ("postgresql",
//! "redis", "kafka") while problem content names abstract categories
//! ("storage", "cache", "message_queue"). This module maps the many
//! concrete spellings onto a closed set of categories and answers the
//! reverse question: which concrete spellings satisfy an abstract
//! requirement. Both directions are pure, static lookup data.

use serde::{Deserialize, Serialize};

/// The literal endpoint name for the learner's client, used in both
/// connection requirements and graph edges. Never normalized.
pub const CLIENT_TYPE: &str = "client";

/// Abstract component category.
///
/// `Other` carries unrecognized spellings verbatim, so normalization is
/// total over arbitrary input while the known categories stay a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Compute,
    Storage,
    Cache,
    MessageQueue,
    LoadBalancer,
    Cdn,
    ObjectStorage,
    Search,
    RealtimeMessaging,
    ApiGateway,
    Client,
    Other(String),
}

impl Category {
    /// Canonical lower-case name for this category.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Compute => "compute",
            Category::Storage => "storage",
            Category::Cache => "cache",
            Category::MessageQueue => "message_queue",
            Category::LoadBalancer => "load_balancer",
            Category::Cdn => "cdn",
            Category::ObjectStorage => "object_storage",
            Category::Search => "search",
            Category::RealtimeMessaging => "realtime_messaging",
            Category::ApiGateway => "api_gateway",
            Category::Client => "client",
            Category::Other(name) => name,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Normalization Table
// =============================================================================

/// Concrete spelling to abstract category. Includes each canonical name
/// mapping to itself, which is what makes normalization idempotent.
const TYPE_NORMALIZATIONS: &[(&str, Category)] = &[
    // Compute
    ("compute", Category::Compute),
    ("app_server", Category::Compute),
    ("application_server", Category::Compute),
    ("web_server", Category::Compute),
    ("server", Category::Compute),
    ("microservice", Category::Compute),
    ("lambda", Category::Compute),
    ("serverless", Category::Compute),
    // Storage
    ("storage", Category::Storage),
    ("database", Category::Storage),
    ("postgresql", Category::Storage),
    ("postgres", Category::Storage),
    ("mysql", Category::Storage),
    ("mongodb", Category::Storage),
    ("cassandra", Category::Storage),
    ("dynamodb", Category::Storage),
    ("couchdb", Category::Storage),
    ("hbase", Category::Storage),
    // Cache
    ("cache", Category::Cache),
    ("redis", Category::Cache),
    ("memcached", Category::Cache),
    // Message queue
    ("message_queue", Category::MessageQueue),
    ("queue", Category::MessageQueue),
    ("kafka", Category::MessageQueue),
    ("rabbitmq", Category::MessageQueue),
    ("sqs", Category::MessageQueue),
    // Load balancer
    ("load_balancer", Category::LoadBalancer),
    ("nginx", Category::LoadBalancer),
    ("haproxy", Category::LoadBalancer),
    ("alb", Category::LoadBalancer),
    // CDN
    ("cdn", Category::Cdn),
    ("cloudfront", Category::Cdn),
    ("cloudflare", Category::Cdn),
    // Object storage
    ("object_storage", Category::ObjectStorage),
    ("blob_storage", Category::ObjectStorage),
    ("s3", Category::ObjectStorage),
    ("gcs", Category::ObjectStorage),
    // Search
    ("search", Category::Search),
    ("elasticsearch", Category::Search),
    ("opensearch", Category::Search),
    ("solr", Category::Search),
    // Real-time messaging
    ("realtime_messaging", Category::RealtimeMessaging),
    ("websocket", Category::RealtimeMessaging),
    ("socket_io", Category::RealtimeMessaging),
    ("sse", Category::RealtimeMessaging),
    // API gateway
    ("api_gateway", Category::ApiGateway),
    ("gateway", Category::ApiGateway),
    ("kong", Category::ApiGateway),
    // Client
    ("client", Category::Client),
];

/// Map a concrete type name to its abstract category.
///
/// Unmapped inputs degrade to `Category::Other` carrying the (trimmed,
/// lower-cased) input, never an error.
pub fn normalize(raw: &str) -> Category {
    let needle = raw.trim().to_lowercase();
    TYPE_NORMALIZATIONS
        .iter()
        .find(|(spelling, _)| *spelling == needle)
        .map(|(_, category)| category.clone())
        .unwrap_or(Category::Other(needle))
}

// =============================================================================
// Equivalence Classes
// =============================================================================

/// Concrete spellings accepted as satisfying each abstract requirement.
///
/// Intentionally asymmetric from `TYPE_NORMALIZATIONS`: acceptance is
/// many-to-one, and a class may omit exotic spellings the normalizer still
/// recognizes for display purposes.
const ACCEPTABLE_TYPES: &[(Category, &[&str])] = &[
    (
        Category::Compute,
        &[
            "compute",
            "app_server",
            "application_server",
            "web_server",
            "server",
            "microservice",
            "lambda",
        ],
    ),
    (
        Category::Storage,
        &[
            "storage",
            "database",
            "postgresql",
            "mysql",
            "mongodb",
            "cassandra",
            "dynamodb",
            "couchdb",
            "hbase",
        ],
    ),
    (Category::Cache, &["cache", "redis", "memcached"]),
    (
        Category::MessageQueue,
        &["message_queue", "queue", "kafka", "rabbitmq", "sqs"],
    ),
    (
        Category::LoadBalancer,
        &["load_balancer", "nginx", "haproxy", "alb"],
    ),
    (Category::Cdn, &["cdn", "cloudfront", "cloudflare"]),
    (
        Category::ObjectStorage,
        &["object_storage", "blob_storage", "s3", "gcs"],
    ),
    (
        Category::Search,
        &["search", "elasticsearch", "opensearch", "solr"],
    ),
    (
        Category::RealtimeMessaging,
        &["realtime_messaging", "websocket", "socket_io", "sse"],
    ),
    (Category::ApiGateway, &["api_gateway", "gateway", "kong"]),
    (Category::Client, &["client"]),
];

/// Full equivalence class of concrete type names satisfying `required`.
///
/// Unknown categories yield their self-singleton, so the check degrades to
/// exact-name matching rather than failing.
pub fn acceptable_types(required: &Category) -> Vec<String> {
    ACCEPTABLE_TYPES
        .iter()
        .find(|(category, _)| category == required)
        .map(|(_, class)| class.iter().map(|s| (*s).to_string()).collect())
        .unwrap_or_else(|| vec![required.as_str().to_string()])
}

// =============================================================================
// Display Names
// =============================================================================

/// Human-readable label for feedback text and CLI output.
pub fn display_name(category: &Category) -> String {
    match category {
        Category::Compute => "App Server".into(),
        Category::Storage => "Database".into(),
        Category::Cache => "Cache".into(),
        Category::MessageQueue => "Message Queue".into(),
        Category::LoadBalancer => "Load Balancer".into(),
        Category::Cdn => "CDN".into(),
        Category::ObjectStorage => "Object Storage".into(),
        Category::Search => "Search Index".into(),
        Category::RealtimeMessaging => "Real-time Messaging".into(),
        Category::ApiGateway => "API Gateway".into(),
        Category::Client => "Client".into(),
        Category::Other(name) => name.clone(),
    }
}

// =============================================================================
// Tests
// =============================================================================
