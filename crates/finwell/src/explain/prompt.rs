use super::{ChatTurn, Prompt};
use serde_json::Value;

/// Prior turns forwarded with a chat message.
const MAX_HISTORY_TURNS: usize = 6;

pub const SYSTEM_PROMPT: &str = "\
You are a financial education assistant for young adults. Be accurate and consistent.

NUMBERS:
- Never calculate. Never recompute totals, leftover, months, percentages, or timelines.
- Every number you mention must be copied exactly from the JSON context.
- If a number is not in the JSON, do not guess it; ask one short clarifying question.

CATEGORIES:
- Only mention spending categories listed in spending_patterns.breakdown.
- If the breakdown is missing or empty, say: 'No detailed variable expense breakdown was provided.'
- Never invent categories.

WHAT TO DO:
- Explain the situation in simple, friendly language and summarize strengths and risks.
- Give practical suggestions based only on the provided data.
- Prioritize: emergency fund, then debt, then savings, then investing.
- No legal, tax, or professional advice. Do not repeat the JSON back.

INVESTING (education only):
- No specific stocks, tickers, crypto, or market timing. No return predictions or promises.
- Use investing.readiness to explain why you are or are not ready; list blockers first when not ready.
- Use the region field, investing.education.wrappers for account types and
  investing.education.etf_examples_no_tickers for fund examples.

SAVINGS GOAL:
- Only when savings_goal.enabled is true. Restate the fields and notes that exist; never compute new months or amounts.

STYLE:
- Second person (you, your).
- Plain text, short paragraphs and bullet points. No tables, no blockquotes, no backticks or code blocks.
";

pub fn explanation_prompt(context: &Value) -> Prompt {
    let context_json = serde_json::to_string_pretty(context).unwrap_or_else(|_| context.to_string());

    let user = format!(
        "Here is your financial situation and computed plan in JSON.\n\
         Use ONLY the numbers and categories present in the JSON.\n\n\
         {context_json}\n\n\
         Write a response with:\n\
         1) A short summary (2-4 sentences).\n\
         2) Main positives (bullets).\n\
         3) Biggest risks or weak spots (bullets).\n\
         4) Suggestions to adjust variable spending using spending_patterns.breakdown (bullets); \
         if there is no breakdown, say so.\n\
         5) Investing readiness: state investing.readiness.ready; if false list the blockers first, \
         if true give beginner education steps without tickers.\n\
         6) If savings_goal.enabled is true, summarize its fields and notes without computing anything new.\n\
         7) 3-5 concrete next steps for the next 1-3 months (bullets).\n\
         8) One short motivational sentence.\n"
    );

    Prompt {
        system: SYSTEM_PROMPT.to_string(),
        turns: vec![ChatTurn::user(user)],
    }
}

pub fn chat_prompt(message: &str, context: &Value, history: &[ChatTurn]) -> Prompt {
    let context_json = serde_json::to_string_pretty(context).unwrap_or_else(|_| context.to_string());

    let mut turns: Vec<ChatTurn> = history
        .iter()
        .filter(|turn| matches!(turn.role.as_str(), "user" | "assistant"))
        .filter(|turn| !turn.content.trim().is_empty())
        .cloned()
        .collect();
    if turns.len() > MAX_HISTORY_TURNS {
        turns.drain(..turns.len() - MAX_HISTORY_TURNS);
    }

    turns.push(ChatTurn::user(format!(
        "Question:\n{message}\n\n\
         Context JSON (do not recalculate numbers):\n{context_json}\n\n\
         Answer in plain text with short paragraphs and bullet points only.\n\
         Do not calculate new numbers; if one is needed but missing, ask a short clarifying question.\n\
         Only use spending categories from spending_patterns.breakdown.\n\
         Investing talk is education only: no tickers, no promises.\n"
    )));

    Prompt {
        system: SYSTEM_PROMPT.to_string(),
        turns,
    }
}

/// Strip markup the clients render badly: inline code ticks and blockquote markers.
pub fn clean_model_text(text: &str) -> String {
    text.replace('`', "")
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            trimmed
                .strip_prefix("> ")
                .or_else(|| trimmed.strip_prefix('>'))
                .unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
