//! Built-in business FAQ used when no knowledge base file is available.

use super::{Category, KnowledgeBase};
use indexmap::IndexMap;

/// (name, keywords, response) in lookup order
pub const DEFAULT_CATEGORIES: &[(&str, &[&str], &str)] = &[
    (
        "business_hours",
        &["hours", "open", "closed", "time", "schedule", "when"],
        "Our business hours are Monday to Friday: 9:00 AM - 6:00 PM, Saturday: 10:00 AM - 4:00 PM. We are closed on Sundays and public holidays.",
    ),
    (
        "contact_info",
        &["contact", "phone", "email", "address", "reach", "call"],
        "You can reach us at:\n📞 Phone: +1 (555) 123-4567\n📧 Email: info@company.com\n📍 Address: 123 Business Street, City, State 12345",
    ),
    (
        "pricing",
        &["price", "cost", "fee", "charge", "payment", "expensive", "cheap"],
        "Our pricing varies based on your specific needs. We offer competitive rates with flexible payment options. Please contact our sales team for a personalized quote tailored to your requirements.",
    ),
    (
        "services",
        &["service", "offer", "provide", "do", "help", "support"],
        "We offer a comprehensive range of services including:\n• Consulting and Strategy\n• Implementation Support\n• 24/7 Customer Service\n• Training and Documentation\n• Maintenance and Updates",
    ),
    (
        "delivery",
        &["delivery", "shipping", "timeline", "when", "how long", "receive"],
        "Standard delivery takes 3-5 business days. Express delivery (1-2 business days) is available for an additional fee. Digital products are delivered instantly upon payment confirmation.",
    ),
    (
        "refund_policy",
        &["refund", "return", "money back", "cancel", "satisfaction"],
        "We offer a 30-day money-back guarantee on all our services. If you're not completely satisfied, contact us within 30 days for a full refund. Digital products have a 7-day refund policy.",
    ),
    (
        "technical_support",
        &["technical", "support", "help", "problem", "issue", "bug", "error"],
        "Our technical support team is available 24/7 to assist you. You can:\n• Submit a ticket through our support portal\n• Call our technical hotline: +1 (555) TECH-HELP\n• Chat with us live on our website\n• Email: support@company.com",
    ),
    (
        "partnership",
        &["partner", "collaboration", "work together", "joint", "alliance"],
        "We're always interested in strategic partnerships! Please send your partnership proposal to partnerships@company.com or schedule a meeting with our business development team.",
    ),
];

/// Build the default knowledge base.
///
/// The table above is already lowercase, unique and non-empty, so the
/// categories are assembled directly; `test_defaults_validate` checks that
/// every entry would also pass [`Category::new`].
pub(crate) fn knowledge_base() -> KnowledgeBase {
    let categories: IndexMap<String, Category> = DEFAULT_CATEGORIES
        .iter()
        .map(|(name, keywords, response)| {
            let category = Category {
                name: name.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
                response: response.to_string(),
            };
            (name.to_string(), category)
        })
        .collect();
    KnowledgeBase { categories }
}
