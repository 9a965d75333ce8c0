use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub q: String,
    pub a: String,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceFaqsRequest {
    pub faqs: Vec<Faq>,
}

/// Seed entries attached to every new business.
pub fn default_faqs() -> Vec<Faq> {
    vec![
        Faq {
            q: "What are your opening hours?".to_string(),
            a: "Mon-Sat 08:00-18:00, closed Sundays and public holidays.".to_string(),
        },
        Faq {
            q: "How do I make a booking?".to_string(),
            a: "Send us a WhatsApp message or call the shop and we will confirm a slot."
                .to_string(),
        },
    ]
}
