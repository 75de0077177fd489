use super::*;

// =============================================================================
// classify
// =============================================================================

#[test]
fn classify_each_topic_by_keyword() {
    for topic in TOPICS {
        for kw in topic.keywords() {
            assert_eq!(classify(&format!("a question about {kw} today")), Some(topic), "keyword {kw:?}");
        }
    }
}

#[test]
fn classify_is_case_insensitive() {
    assert_eq!(classify("SELL"), Some(Topic::Selling));
    assert_eq!(classify("Can You HELP"), Some(Topic::Help));
}

#[test]
fn classify_matches_substrings() {
    assert_eq!(classify("best seller"), Some(Topic::Selling));
    assert_eq!(classify("the pricing page"), Some(Topic::Pricing));
}

#[test]
fn classify_no_match() {
    assert_eq!(classify("asdkjasd"), None);
    assert_eq!(classify(""), None);
}

// =============================================================================
// precedence
// =============================================================================

#[test]
fn selling_beats_buying() {
    assert_eq!(classify("should I buy or sell?"), Some(Topic::Selling));
}

#[test]
fn buying_beats_help() {
    assert_eq!(classify("help me find tomatoes"), Some(Topic::Buying));
}

#[test]
fn help_beats_pricing() {
    assert_eq!(classify("how do I negotiate the price"), Some(Topic::Help));
}

#[test]
fn pricing_when_alone() {
    assert_eq!(classify("can we bargain?"), Some(Topic::Pricing));
}

// =============================================================================
// fallback_reply
// =============================================================================

#[test]
fn sell_question_gets_seller_dashboard_steps() {
    let reply = fallback_reply("How do I sell my shoes?");
    assert_eq!(reply, SELLING_TEMPLATE);
    assert!(reply.contains("Seller Dashboard"));
    assert!(reply.contains("New Listing"));
}

#[test]
fn buy_statement_gets_search_template() {
    let reply = fallback_reply("I want to buy rice");
    assert_eq!(reply, BUYING_TEMPLATE);
    assert!(reply.contains("search bar"));
}

#[test]
fn gibberish_gets_welcome() {
    assert_eq!(fallback_reply("asdkjasd"), WELCOME_TEMPLATE);
}

#[test]
fn fallback_is_deterministic() {
    let msg = "Looking for a cheap phone";
    assert_eq!(fallback_reply(msg), fallback_reply(msg));
}

#[test]
fn templates_are_distinct() {
    let mut all: Vec<&str> = TOPICS.into_iter().map(Topic::template).collect();
    all.push(WELCOME_TEMPLATE);
    let count = all.len();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), count);
}
