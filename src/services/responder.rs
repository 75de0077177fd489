//! Responder — persona prompt → remote completion → canned fallback.
//!
//! DESIGN
//! ======
//! One remote call per message. Every failure mode of that call (no client,
//! transport error, timeout, non-200, malformed body) is logged and absorbed:
//! the caller always gets text back, from [`fallback_reply`] if need be.

use std::sync::Arc;

use tracing::{info, warn};

use super::context::UserContext;
use super::fallback::fallback_reply;
use crate::llm::LlmChat;
use crate::llm::types::Message;

const PERSONA_PROMPT: &str = "You are the JijiFresh Assistant, a helpful AI agent for Nigeria's leading local marketplace.

CONTEXT: JijiFresh is a WhatsApp-integrated marketplace focused on Akwa Ibom State, connecting local buyers and sellers for fresh produce, electronics, fashion, and more.

YOUR PERSONALITY:
- Friendly, helpful, and knowledgeable about Nigerian commerce
- Use occasional Nigerian Pidgin English naturally (not forced)
- Be enthusiastic about helping users buy and sell
- Focus on local community and trust

KEY FEATURES TO MENTION:
- WhatsApp integration for easy communication
- Secure escrow payments via Monipoint
- Flash sales with countdown timers
- Negotiable pricing system
- Free pickup or tiered delivery (₦1,000-₦4,000)
- Quantity management for bulk sellers
- Smart cart with 5-minute hold timer

COMMON USER INTENTS:
1. SELLING: Guide to seller dashboard, listing tips, pricing advice
2. BUYING: Help find items, explain negotiation, delivery options
3. SUPPORT: Safety tips, payment help, technical issues
4. GENERAL: Platform features, how it works, getting started

RESPONSE STYLE:
- Keep responses concise but helpful
- Use emojis appropriately
- Provide actionable next steps
- Ask follow-up questions to understand needs
- Be encouraging and positive

IMPORTANT: Always prioritize user safety and legitimate transactions.";

/// Persona text followed by the context line.
#[must_use]
pub fn build_system_prompt(ctx: &UserContext) -> String {
    format!("{PERSONA_PROMPT}\n{ctx}")
}

pub struct Responder {
    llm: Option<Arc<dyn LlmChat>>,
}

impl Responder {
    /// `None` runs in fallback-only mode.
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { llm }
    }

    /// Produce reply text for `message`. Never fails.
    pub async fn respond(&self, message: &str, context: Option<&str>) -> String {
        let ctx = UserContext::parse(context);

        let Some(llm) = &self.llm else {
            warn!("responder: no LLM client, using fallback");
            return fallback_reply(message).to_string();
        };

        let system = build_system_prompt(&ctx);
        let messages = [Message::user(message)];
        match llm.chat(&system, &messages).await {
            Ok(resp) => {
                info!(
                    model = %resp.model,
                    finish_reason = %resp.finish_reason,
                    input_tokens = resp.input_tokens,
                    output_tokens = resp.output_tokens,
                    "responder: completion received"
                );
                resp.text
            }
            Err(e) => {
                warn!(error = %e, code = e.error_code(), "responder: LLM call failed, using fallback");
                fallback_reply(message).to_string()
            }
        }
    }
}

#[cfg(test)]
#[path = "responder_test.rs"]
mod tests;
