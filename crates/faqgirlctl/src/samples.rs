//! Canned content for help screens, the demo and the business showcase.

/// Sample questions shown by `help` and `samples`
pub const SAMPLE_QUESTIONS: &[&str] = &[
    "What are your business hours?",
    "How can I contact you?",
    "What are your prices?",
    "What services do you offer?",
    "How long does delivery take?",
    "What is your refund policy?",
    "I need technical support",
    "Are you interested in partnerships?",
];

/// Queries run by `demo`: direct questions, variations, harder phrasing, edge cases
pub const DEMO_QUERIES: &[&str] = &[
    "What are your business hours?",
    "How can I contact your company?",
    "What are your prices?",
    "When are you open?",
    "I need to reach someone at your company",
    "How much does it cost?",
    "I'm having technical issues with your service",
    "What kind of services do you provide?",
    "How long will it take to receive my order?",
    "Do you offer refunds if I'm not satisfied?",
    "Are you looking for business partners?",
    "Hello",
    "",
    "xyz123",
];

/// One customer conversation in the showcase
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub customer: &'static str,
    pub query: &'static str,
    pub description: &'static str,
}

pub const SHOWCASE_SCENARIOS: &[Scenario] = &[
    Scenario {
        customer: "Sarah Johnson",
        query: "What time do you close on weekdays?",
        description: "After-hours inquiry about business hours",
    },
    Scenario {
        customer: "Mike Chen",
        query: "I need to speak with someone about your pricing",
        description: "Sales inquiry during busy period",
    },
    Scenario {
        customer: "Lisa Rodriguez",
        query: "How do I return a product if I'm not satisfied?",
        description: "Return policy question from concerned customer",
    },
    Scenario {
        customer: "David Thompson",
        query: "Do you offer technical support for your services?",
        description: "Pre-purchase technical inquiry",
    },
    Scenario {
        customer: "Emily Parker",
        query: "How long does shipping usually take?",
        description: "Delivery timeline question",
    },
    Scenario {
        customer: "James Wilson",
        query: "Are you looking for business partners?",
        description: "Partnership opportunity inquiry",
    },
];

pub const BUSINESS_VALUE: &[&str] = &[
    "Instant 24/7 customer support",
    "Consistent responses to common questions",
    "Reduces support team workload",
    "Improves customer satisfaction",
    "Easy to customize and expand",
];

pub const IMPACT_SUMMARY: &[&str] = &[
    "$0 in support costs (vs $30-60 for human agents)",
    "12-18 minutes of staff time saved",
    "100% consistent, professional responses",
    "24/7 availability (no overtime costs)",
    "Scalable to thousands of simultaneous queries",
];

pub const ROI_LINES: &[&str] = &[
    "1,000 FAQ queries × 3 minutes saved = 50 hours",
    "50 hours × $25/hour = $1,250 monthly savings",
    "Implementation cost: < $500 one-time",
    "Payback period: < 2 weeks",
];

pub const NEXT_STEPS: &[&str] = &[
    "Customize FAQ content for your specific business",
    "Integrate with your website/chat system",
    "Monitor performance and expand FAQ categories",
    "Train staff on handling escalated queries",
];
