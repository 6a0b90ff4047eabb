//! Static knowledge base and the FAQ matcher.
//!
//! Each entry pairs a topic with a set of lowercase trigger substrings and a
//! canned answer. Matching is case-insensitive substring containment over the
//! whole query, not tokenized word match. The entry with the strict maximum
//! trigger-hit count wins; ties keep the earliest entry in declaration order.
//! Zero hits return a fixed fallback string. Deterministic and total.

/// One topic in the knowledge base.
#[derive(Debug)]
pub struct KnowledgeEntry {
    pub topic: &'static str,
    /// Lowercase trigger substrings
    pub triggers: &'static [&'static str],
    pub answer: &'static str,
}

/// Returned when no trigger substring occurs in the query.
pub const NO_MATCH_FALLBACK: &str = "I don't have specific information about that query. \
Please rephrase your question or consult with a real estate professional or legal expert for accurate advice.";

/// Score a free-text query against the knowledge base.
///
/// Ties keep the first entry encountered in declaration order, a deliberate
/// determinism tradeoff rather than any relevance ranking.
pub fn find_best_match(query: &str) -> &'static str {
    let query = query.to_lowercase();
    let mut best: Option<&KnowledgeEntry> = None;
    let mut max_hits = 0;

    for entry in KNOWLEDGE_BASE {
        let hits = entry.triggers.iter().filter(|t| query.contains(*t)).count();
        if hits > max_hits {
            max_hits = hits;
            best = Some(entry);
        }
    }

    match best {
        Some(entry) => entry.answer,
        None => NO_MATCH_FALLBACK,
    }
}

/// The knowledge base, loaded once and immutable after startup.
pub static KNOWLEDGE_BASE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        topic: "notice_period",
        triggers: &["notice", "vacating", "move out", "leaving"],
        answer: "The notice period typically depends on your lease agreement and local laws, but generally:\n\
1. For month-to-month tenancy: 30 days notice is standard\n\
2. For fixed-term leases: Check your lease agreement\n\
3. Some jurisdictions require 60 days notice\n\
Always provide written notice and check your specific lease terms.",
    },
    KnowledgeEntry {
        topic: "rent_increase",
        triggers: &["increase rent", "raise rent", "rent hike"],
        answer: "Regarding rent increases during a contract:\n\
1. During a fixed-term lease: Landlord cannot increase rent unless specified in the lease\n\
2. For month-to-month: Usually requires 30-60 days written notice\n\
3. Check local rent control laws\n\
4. Increases must be reasonable and follow local regulations",
    },
    KnowledgeEntry {
        topic: "deposit_issues",
        triggers: &["deposit", "security deposit", "not returning deposit"],
        answer: "If your landlord isn't returning your deposit:\n\
1. Review your lease agreement\n\
2. Document property condition with photos/videos\n\
3. Send a formal written request\n\
4. Know your timeline (usually 21-30 days)\n\
5. Consider small claims court if necessary\n\
6. Contact local tenant rights organization",
    },
    KnowledgeEntry {
        topic: "rental_agreement",
        triggers: &["rental agreement", "lease agreement", "before signing", "documents check"],
        answer: "Key documents to check before signing a rental agreement:\n\
1. Lease agreement terms and conditions\n\
2. Property inspection report\n\
3. Maintenance responsibilities\n\
4. Utility arrangements\n\
5. Security deposit terms\n\
6. Pet policies\n\
7. Insurance requirements\n\
8. Property ownership verification",
    },
    KnowledgeEntry {
        topic: "landlord_entry",
        triggers: &["landlord enter", "entry without notice", "access property"],
        answer: "Regarding landlord entry:\n\
1. Usually requires 24-48 hours notice\n\
2. Exceptions for emergencies\n\
3. Must be during reasonable hours\n\
4. Should have legitimate reason\n\
5. Document unauthorized entries\n\
6. Know your right to privacy",
    },
    KnowledgeEntry {
        topic: "subletting",
        triggers: &["sublet", "sublease", "rent out"],
        answer: "Regarding subletting:\n\
1. Check your lease agreement first\n\
2. Get written permission from landlord\n\
3. Screen potential subtenants\n\
4. Create a formal sublease agreement\n\
5. Understand you're still responsible to the landlord\n\
6. Consider insurance implications",
    },
    KnowledgeEntry {
        topic: "maintenance_issues",
        triggers: &["maintenance", "repairs", "fixing"],
        answer: "Your rights regarding maintenance issues:\n\
1. Right to habitable living conditions\n\
2. Document all issues with photos/videos\n\
3. Submit written repair requests\n\
4. Follow up in writing\n\
5. Know repair timeline requirements\n\
6. Possible remedies: rent withholding, repair and deduct\n\
7. Contact housing authorities if necessary",
    },
    KnowledgeEntry {
        topic: "property_verification",
        triggers: &["verify property", "check ownership", "legal owner"],
        answer: "Steps to verify property ownership:\n\
1. Check public property records\n\
2. Request title search\n\
3. Verify tax records\n\
4. Check for liens or encumbrances\n\
5. Use online property databases\n\
6. Consider title insurance\n\
7. Consult a real estate attorney",
    },
    KnowledgeEntry {
        topic: "buying_process",
        triggers: &["buying house", "purchase property", "steps buying"],
        answer: "Steps in buying a house:\n\
1. Check financial readiness\n\
2. Get pre-approved for mortgage\n\
3. Find a real estate agent\n\
4. House hunting\n\
5. Make an offer\n\
6. Home inspection\n\
7. Property appraisal\n\
8. Final mortgage approval\n\
9. Closing process",
    },
    KnowledgeEntry {
        topic: "property_taxes",
        triggers: &["property tax", "tax when buying", "purchase tax"],
        answer: "Taxes involved in property purchase:\n\
1. Property transfer tax\n\
2. Stamp duty (varies by location)\n\
3. Registration charges\n\
4. Capital gains tax (for seller)\n\
5. GST on new constructions\n\
6. Annual property tax\n\
Consider consulting a tax professional.",
    },
    KnowledgeEntry {
        topic: "hidden_charges",
        triggers: &["hidden charges", "additional costs", "extra fees"],
        answer: "Common hidden charges in real estate:\n\
1. Property taxes\n\
2. Insurance costs\n\
3. Maintenance fees\n\
4. Utility deposits\n\
5. HOA/society charges\n\
6. Registration fees\n\
7. Legal fees\n\
8. Broker commission\n\
9. Renovation/repair costs",
    },
    KnowledgeEntry {
        topic: "property_dispute",
        triggers: &["dispute", "litigation", "legal issues"],
        answer: "To check for property disputes:\n\
1. Search court records\n\
2. Check with local property registrar\n\
3. Review title insurance report\n\
4. Consult property lawyer\n\
5. Check for encumbrances\n\
6. Verify tax payment history\n\
7. Review property documents",
    },
];
