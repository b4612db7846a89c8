//! Static content for the preset conversation flows.
//!
//! Everything here is scripted, not computed: the greeting, the opening
//! exchange appended when a flow is entered, the informational panel shown
//! while it stays active, and the shared fallback strings.

use crate::chat::PresetFlow;

/// Greeting shown when the session starts (and after `/back`).
pub const GREETING: &str =
    "Hello, I'm your financial assistant.\nLeave a question and I'll be happy to help!";

/// Bot confirmation appended after the profile form is saved.
pub const PROFILE_SAVED: &str =
    "Your information has been saved.\nPersonalized recommendations are now enabled.";

/// Fallback shown when the answer endpoint returns an empty or missing answer.
pub const EMPTY_ANSWER: &str = "No answer was received.";

/// Generic failure message. Deliberately hides the technical cause; the real
/// reason goes to the log instead.
pub const APOLOGY: &str =
    "Sorry, there is a problem reaching the server. Please try again shortly.";

/// The scripted opening exchange appended when a preset flow is entered.
pub struct Script {
    pub user: &'static str,
    pub bot: &'static str,
}

/// Scripted user/bot message pair for a flow.
pub fn script(flow: PresetFlow) -> Script {
    match flow {
        PresetFlow::Advice => Script {
            user: "Is now a good time to invest?",
            bot: "Let me give you a quick summary of the current market.\n\n\
                  (This area will be backed by live market retrieval.)",
        },
        PresetFlow::Product => Script {
            user: "Which financial products would suit me?",
            bot: "I'll recommend financial products matched to your profile.\n\n\
                  (This area will be backed by retrieval plus recommendation logic.)",
        },
        PresetFlow::CreditCheck => Script {
            user: "How do I check my credit score?",
            bot: "Here is how to look up your credit score in the payments app.",
        },
        PresetFlow::UserProfile => Script {
            user: "I'd like to enter my asset information.",
            bot: "Share your credit score and asset details and I'll use them \
                  for personalized recommendations.",
        },
    }
}

/// Informational panel shown while a flow is active.
pub fn info_panel(flow: PresetFlow) -> &'static str {
    match flow {
        PresetFlow::Advice => {
            "── Market news ──────────────────────────────\n\
             Rate pause signaled, equities expected to rise\n\
             The Fed chair hinted the hiking cycle may be over, a positive\n\
             signal for the markets.\n\
             ─────────────────────────────────────────────"
        }
        PresetFlow::Product => {
            "── Recommended products ─────────────────────\n\
             Youth Benefits Card\n\
             10% off convenience stores, 5% off transit, ~10k annual fee.\n\
             \n\
             Lump-Sum Savings Plan\n\
             300k monthly auto-transfer, up to 4.0% annual interest.\n\
             ─────────────────────────────────────────────"
        }
        PresetFlow::CreditCheck => {
            "── How to check your credit score ───────────\n\
             1. Open the messenger app\n\
             2. Tap 'More' at the bottom of the screen\n\
             3. Tap the 'Pay' button at the top\n\
             4. Choose 'Credit management' or 'Check my credit score'\n\
             5. Verify your identity on first use, then view instantly\n\
             \n\
             TIP: your credit score feeds the personalized recommendations.\n\
             ─────────────────────────────────────────────"
        }
        PresetFlow::UserProfile => {
            "── My information ───────────────────────────\n\
             Entering your credit score and asset details unlocks\n\
             more precise, personalized financial recommendations.\n\
             ─────────────────────────────────────────────"
        }
    }
}
