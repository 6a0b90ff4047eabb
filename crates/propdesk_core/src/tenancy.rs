//! Qualifier-variant answers for common tenancy topics.
//!
//! Some tenancy questions deserve a finer-grained answer than the knowledge
//! base gives: an eviction question phrased as an emergency gets the
//! emergency variant, a rent question about a mid-lease increase gets the
//! mid-lease variant. Topic rules are evaluated in declaration order over the
//! lowercased message using the same substring technique as the classifier;
//! when none fires, the FAQ pathway falls back to the knowledge base.

/// A variant answer plus its conversational follow-up prompt.
#[derive(Debug)]
pub struct TenancyAnswer {
    pub answer: &'static str,
    pub follow_up: &'static str,
}

/// Select a qualifier-variant answer for a tenancy message, if any rule fires.
pub fn variant_answer(message: &str) -> Option<&'static TenancyAnswer> {
    let message = message.to_lowercase();

    if message.contains("evict") || message.contains("notice to quit") {
        if message.contains("emergency") || message.contains("immediate") {
            return Some(&EVICTION_EMERGENCY);
        }
        return Some(&EVICTION_GENERAL);
    }

    if message.contains("rent") && (message.contains("increase") || message.contains("raise")) {
        if message.contains("middle") || message.contains("during") {
            return Some(&RENT_INCREASE_MID_LEASE);
        }
        return Some(&RENT_INCREASE_GENERAL);
    }

    if message.contains("deposit") || message.contains("security") {
        if message.contains("dispute") || message.contains("deduction") {
            return Some(&DEPOSIT_DISPUTE);
        }
        return Some(&DEPOSIT_GENERAL);
    }

    if message.contains("repair") || message.contains("fix") {
        if message.contains("emergency") || message.contains("urgent") {
            return Some(&REPAIRS_EMERGENCY);
        }
        return Some(&REPAIRS_GENERAL);
    }

    None
}

/// Jurisdiction disclaimer appended when the caller supplied a location.
pub fn location_note(location: &str) -> String {
    format!(
        "\n\nNote: Laws may vary in {location}. Please consult local regulations or a legal professional for specific advice."
    )
}

static EVICTION_GENERAL: TenancyAnswer = TenancyAnswer {
    answer: "Landlords must provide written notice before eviction. The notice period varies by location.",
    follow_up: "Would you like to know the specific notice period required in your area?",
};

static EVICTION_EMERGENCY: TenancyAnswer = TenancyAnswer {
    answer: "In emergency cases like non-payment or illegal activity, shorter notice periods may apply.",
    follow_up: "Has your landlord specified the reason for eviction?",
};

static RENT_INCREASE_GENERAL: TenancyAnswer = TenancyAnswer {
    answer: "Rent increases are typically allowed at the end of a lease term with proper notice.",
    follow_up: "When did you receive notice of the rent increase?",
};

static RENT_INCREASE_MID_LEASE: TenancyAnswer = TenancyAnswer {
    answer: "Mid-lease rent increases are generally not allowed unless specified in the lease agreement.",
    follow_up: "Would you like me to explain what your lease should say about rent increases?",
};

static DEPOSIT_GENERAL: TenancyAnswer = TenancyAnswer {
    answer: "Security deposits must be returned within a specified period after move-out, minus any legitimate deductions.",
    follow_up: "Have you already moved out and submitted your forwarding address?",
};

static DEPOSIT_DISPUTE: TenancyAnswer = TenancyAnswer {
    answer: "If there's a dispute about deductions, you should:\n\
1. Request an itemized list of deductions\n\
2. Gather evidence (photos, videos)\n\
3. Send a formal dispute letter\n\
4. Consider mediation or small claims court",
    follow_up: "Would you like a template for a formal dispute letter?",
};

static REPAIRS_GENERAL: TenancyAnswer = TenancyAnswer {
    answer: "Landlords are responsible for maintaining the property in a habitable condition and making necessary repairs.",
    follow_up: "Have you notified your landlord about the needed repairs in writing?",
};

static REPAIRS_EMERGENCY: TenancyAnswer = TenancyAnswer {
    answer: "Emergency repairs (like no heat, water, or electricity) require immediate attention from the landlord.",
    follow_up: "Is this an emergency repair situation?",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eviction_emergency_qualifier() {
        let answer = variant_answer("My landlord wants to evict me immediately").unwrap();
        assert!(answer.answer.contains("emergency cases"));
    }

    #[test]
    fn test_eviction_general() {
        let answer = variant_answer("can my landlord evict me").unwrap();
        assert!(answer.answer.contains("written notice"));
    }

    #[test]
    fn test_rent_increase_needs_both_tokens() {
        assert!(variant_answer("my rent is too high").is_none());
        let answer = variant_answer("can my landlord raise the rent").unwrap();
        assert!(answer.answer.contains("end of a lease term"));
    }

    #[test]
    fn test_rent_increase_mid_lease() {
        let answer = variant_answer("rent increase during my lease").unwrap();
        assert!(answer.answer.contains("Mid-lease"));
    }

    #[test]
    fn test_deposit_dispute_qualifier() {
        let answer = variant_answer("I dispute the deposit deductions").unwrap();
        assert!(answer.answer.contains("itemized list"));
    }

    #[test]
    fn test_repairs_urgent() {
        let answer = variant_answer("urgent repair needed, no heat").unwrap();
        assert!(answer.answer.contains("immediate attention"));
    }

    #[test]
    fn test_declaration_order_eviction_first() {
        // Mentions both eviction and deposit; eviction rule is declared first.
        let answer = variant_answer("evict me and keep my deposit").unwrap();
        assert!(answer.answer.contains("eviction") || answer.answer.contains("notice"));
    }

    #[test]
    fn test_no_rule_fires() {
        assert!(variant_answer("tell me about subletting").is_none());
    }

    #[test]
    fn test_location_note() {
        let note = location_note("Berlin");
        assert!(note.contains("Berlin"));
        assert!(note.contains("Laws may vary"));
    }
}
