//! Fallback responder — canned replies when the model is unreachable.
//!
//! DESIGN
//! ======
//! Topics are checked in the fixed order of [`TOPICS`]. The first topic with
//! any keyword contained in the lower-cased message wins, even if a later
//! topic matches more keywords. No match yields [`WELCOME_TEMPLATE`].

/// Topic buckets, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Selling,
    Buying,
    Help,
    Pricing,
}

pub const TOPICS: [Topic; 4] = [Topic::Selling, Topic::Buying, Topic::Help, Topic::Pricing];

impl Topic {
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Selling => &["sell", "list", "upload"],
            Self::Buying => &["buy", "find", "search", "looking"],
            Self::Help => &["help", "support", "how"],
            Self::Pricing => &["price", "negotiate", "bargain"],
        }
    }

    #[must_use]
    pub fn template(self) -> &'static str {
        match self {
            Self::Selling => SELLING_TEMPLATE,
            Self::Buying => BUYING_TEMPLATE,
            Self::Help => HELP_TEMPLATE,
            Self::Pricing => PRICING_TEMPLATE,
        }
    }

    /// `message_lower` must already be lower-cased.
    fn matches(self, message_lower: &str) -> bool {
        self.keywords()
            .iter()
            .any(|kw| message_lower.contains(kw))
    }
}

/// First topic whose keywords appear in `message`, if any.
#[must_use]
pub fn classify(message: &str) -> Option<Topic> {
    let lower = message.to_lowercase();
    TOPICS.into_iter().find(|topic| topic.matches(&lower))
}

/// Canned reply for `message`.
#[must_use]
pub fn fallback_reply(message: &str) -> &'static str {
    classify(message).map_or(WELCOME_TEMPLATE, Topic::template)
}

// =============================================================================
// TEMPLATES
// =============================================================================

pub const SELLING_TEMPLATE: &str = "🏪 **Ready to start selling?**

Here's how to list your items:
1. Go to Seller Dashboard
2. Click \"New Listing\"
3. Add clear photos
4. Write detailed description
5. Set competitive price

💡 **Pro tip:** Items with good photos sell 3x faster!

Need help with anything specific?";

pub const BUYING_TEMPLATE: &str = "🛒 **Looking for something?**

Here's how to find great deals:
• Use the search bar
• Browse categories
• Check flash sales 🔥
• Filter by location

What are you looking to buy today?";

pub const HELP_TEMPLATE: &str = "❓ **I'm here to help!**

I can assist with:
• 🛒 Finding items to buy
• 📦 Listing items to sell
• 💬 Negotiating prices
• 🚚 Delivery options
• 🔒 Safety tips

What do you need help with?";

pub const PRICING_TEMPLATE: &str = "💰 **Negotiation Tips:**

✅ **Best practices:**
• Be polite and respectful
• Research similar items first
• Make reasonable offers
• Ask about bulk discounts

Most sellers accept 10-20% below asking price! 🎯";

pub const WELCOME_TEMPLATE: &str = "👋🏽 **Welcome to JijiFresh!**

I can help you:
🛒 **Buy** - Find great local deals
📦 **Sell** - List items quickly
💬 **Support** - Get help anytime

What would you like to do today?";

#[cfg(test)]
#[path = "fallback_test.rs"]
mod tests;
