//! Prompt context: the matched service blocks plus the always-on facts and
//! the answering rules that keep the model on the supplied information.

use crate::knowledge::{BusinessFacts, KnowledgeEntry};
use crate::scorer::Match;

const RULES: &str = "RULES:\n\
- Answer ONLY using the above information\n\
- If unsure, say 'Please call for details'\n\
- Be concise (2-3 sentences max)\n\
- Include phone number in every answer\n\n";

/// Renders the full context for `matches` in the order given.
///
/// Category matches contribute nothing beyond the facts that are always
/// included.
///
/// # Example
/// ```
/// use glass_rag::{KnowledgeStore, context, score};
/// let store = KnowledgeStore::builtin();
/// let ctx = context::build(&score("mirror", store), &store.facts);
/// assert!(ctx.contains("SERVICE: Mirror Installation"));
/// assert!(ctx.contains("CONTACT: +91-81467-15800"));
/// ```
pub fn build(matches: &[Match<'_>], facts: &BusinessFacts) -> String {
    let blocks: Vec<String> = service_blocks(matches);
    assemble(facts, &blocks)
}

/// Like [`build`], but drops trailing service blocks (lowest-ranked first)
/// until the result fits `max_chars` characters.
///
/// The preamble, the facts and the rules are always kept, so the result may
/// still exceed `max_chars` when the budget is smaller than those alone.
pub fn build_within(matches: &[Match<'_>], facts: &BusinessFacts, max_chars: usize) -> String {
    let mut blocks = service_blocks(matches);
    let chars = |s: &str| s.chars().count();
    let fixed = chars(&preamble(facts)) + chars(&facts_block(facts)) + chars(RULES);

    let mut total = fixed + blocks.iter().map(|b| chars(b)).sum::<usize>();
    while total > max_chars {
        match blocks.pop() {
            Some(dropped) => total -= chars(&dropped),
            None => break,
        }
    }
    assemble(facts, &blocks)
}

/// Final generation prompt: context, question and the answer cue.
pub fn build_prompt(context: &str, question: &str) -> String {
    format!("{context}Question: {question}\n\nAnswer (2 sentences, include phone):")
}

fn assemble(facts: &BusinessFacts, blocks: &[String]) -> String {
    let mut out = preamble(facts);
    for b in blocks {
        out.push_str(b);
    }
    out.push_str(&facts_block(facts));
    out.push_str(RULES);
    out
}

fn service_blocks(matches: &[Match<'_>]) -> Vec<String> {
    matches
        .iter()
        .filter_map(Match::service)
        .map(service_block)
        .collect()
}

fn preamble(facts: &BusinessFacts) -> String {
    format!(
        "YOU ARE {} AI ASSISTANT.\nUSE ONLY THIS INFORMATION TO ANSWER:\n\n",
        facts.short_name.to_uppercase()
    )
}

fn service_block(s: &KnowledgeEntry) -> String {
    format!(
        "SERVICE: {}\nPrice: {}\nDetails: {}\nTime: {}\n\n",
        s.title, s.price, s.details, s.timeframe
    )
}

fn facts_block(facts: &BusinessFacts) -> String {
    format!(
        "CONTACT: {}\nAREAS: {}\nHOURS: {}\nEXPERIENCE: {}\n\n",
        facts.phone,
        facts.primary_areas.join(", "),
        facts.hours_regular,
        facts.experience
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeStore;
    use crate::scorer::score;

    #[test]
    fn single_service_context_carries_all_fields() {
        let store = KnowledgeStore::builtin();
        let matches = score("mirror", store);
        let ctx = build(&matches, &store.facts);

        assert!(ctx.starts_with(
            "YOU ARE RAJU GLASS FITTING AI ASSISTANT.\nUSE ONLY THIS INFORMATION TO ANSWER:\n\n"
        ));
        assert!(ctx.contains(
            "SERVICE: Mirror Installation\nPrice: Starting from ₹1,500\n\
             Details: All sizes and shapes. Wall-mounted or stand. Beveled edges available. Safety backing.\n\
             Time: 2-3 hours\n\n"
        ));
        assert!(ctx.contains("CONTACT: +91-81467-15800\n"));
        assert!(ctx.contains("AREAS: Mohali, Chandigarh, Panchkula\n"));
        assert!(ctx.contains("HOURS: Monday to Saturday, 9:00 AM to 7:00 PM\n"));
        assert!(ctx.contains("EXPERIENCE: 10+ years\n\n"));
        assert!(ctx.ends_with("- Include phone number in every answer\n\n"));
    }

    #[test]
    fn category_matches_render_no_block() {
        let store = KnowledgeStore::builtin();
        let ctx = build(&score("what is your phone number", store), &store.facts);
        assert!(!ctx.contains("SERVICE:"));
        assert_eq!(ctx, build(&[], &store.facts));
    }

    #[test]
    fn bounded_context_drops_lowest_ranked_service_first() {
        let store = KnowledgeStore::builtin();
        let matches = score("mirror and partition", store);
        let full = build(&matches, &store.facts);
        let base = build(&[], &store.facts);

        let full_chars = full.chars().count();

        assert_eq!(build_within(&matches, &store.facts, full_chars), full);

        let tight = build_within(&matches, &store.facts, full_chars - 1);
        assert!(tight.contains("SERVICE: Mirror Installation"));
        assert!(!tight.contains("SERVICE: Glass Partition Walls"));
        assert!(tight.chars().count() <= full_chars - 1);

        let tiny = build_within(&matches, &store.facts, 10);
        assert_eq!(tiny, base);
        assert!(tiny.contains("RULES:"));
    }

    #[test]
    fn budget_counts_characters_not_bytes() {
        let store = KnowledgeStore::builtin();
        let matches = score("mirror", store);
        let full = build(&matches, &store.facts);
        // The rupee sign is one character but three bytes.
        assert!(full.contains('₹'));
        assert!(full.len() > full.chars().count());

        let exact = build_within(&matches, &store.facts, full.chars().count());
        assert_eq!(exact, full);
    }

    #[test]
    fn prompt_template() {
        assert_eq!(
            build_prompt("CTX\n\n", "window price"),
            "CTX\n\nQuestion: window price\n\nAnswer (2 sentences, include phone):"
        );
    }
}
