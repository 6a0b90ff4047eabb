//! Issue categories and the feature classifier.
//!
//! The embedding model scores images against a fixed vocabulary of free-form
//! labels ("water damage", "mold growth", ...). Those labels do not match
//! category identifiers exactly, so classification runs an ordered set of
//! substring rules first and falls back to a direct lookup in each category's
//! recognized label set. Rule order resolves overlaps deterministically.
//!
//! Each category owns a static remediation detail record: repair steps, cost
//! range, timeline, prevention measures, and recommended professionals. The
//! tables are process-wide read-only data; nothing mutates them after load.

use serde::{Deserialize, Serialize};

/// Canonical property issue categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    WaterDamage,
    Mold,
    StructuralDamage,
    Electrical,
    Plumbing,
    WindowIssues,
}

/// Remediation detail record owned by one category.
#[derive(Debug)]
pub struct CategoryDetails {
    /// One-line quick assessment shown right after detection
    pub recommendation: &'static str,
    /// Ordered repair process
    pub repair_steps: &'static [&'static str],
    /// Typical cost range, free text
    pub estimated_cost: &'static str,
    /// Typical duration, free text
    pub timeline: &'static str,
    /// Ordered prevention measures
    pub prevention: &'static [&'static str],
    /// Professionals to contact
    pub professionals: &'static [&'static str],
    /// What to look for when hiring
    pub qualifications: &'static str,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 6] = [
        IssueCategory::WaterDamage,
        IssueCategory::Mold,
        IssueCategory::StructuralDamage,
        IssueCategory::Electrical,
        IssueCategory::Plumbing,
        IssueCategory::WindowIssues,
    ];

    /// Human-readable name used in response text ("water damage")
    pub fn display_name(self) -> &'static str {
        match self {
            IssueCategory::WaterDamage => "water damage",
            IssueCategory::Mold => "mold",
            IssueCategory::StructuralDamage => "structural damage",
            IssueCategory::Electrical => "electrical issues",
            IssueCategory::Plumbing => "plumbing issues",
            IssueCategory::WindowIssues => "window issues",
        }
    }

    /// Normalized labels this category claims directly (lowercase,
    /// underscores for spaces). Used as the classifier's fallback lookup.
    pub fn recognized_labels(self) -> &'static [&'static str] {
        match self {
            IssueCategory::WaterDamage => {
                &["water_damage", "water_stains", "leaks", "moisture"]
            }
            IssueCategory::Mold => &["mold", "mildew", "fungus", "black_spots"],
            IssueCategory::StructuralDamage => &[
                "cracks",
                "structural_cracks",
                "structural_damage",
                "foundation_issues",
                "uneven_floors",
            ],
            IssueCategory::Electrical => &[
                "electrical_issues",
                "exposed_wires",
                "faulty_wiring",
                "power_problems",
            ],
            IssueCategory::Plumbing => &[
                "plumbing_problems",
                "plumbing_issues",
                "pipe_leaks",
                "drainage_problems",
                "water_pressure",
            ],
            IssueCategory::WindowIssues => &["window_issues", "broken_windows", "drafty_windows"],
        }
    }

    pub fn details(self) -> &'static CategoryDetails {
        match self {
            IssueCategory::WaterDamage => &WATER_DAMAGE_DETAILS,
            IssueCategory::Mold => &MOLD_DETAILS,
            IssueCategory::StructuralDamage => &STRUCTURAL_DAMAGE_DETAILS,
            IssueCategory::Electrical => &ELECTRICAL_DETAILS,
            IssueCategory::Plumbing => &PLUMBING_DETAILS,
            IssueCategory::WindowIssues => &WINDOW_ISSUES_DETAILS,
        }
    }
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Map a raw embedding-model label onto a canonical category.
///
/// Pure function. Normalizes (lowercase, spaces to underscores), then applies
/// substring rules in fixed priority order: window, mold, water, structural.
/// First match wins. Anything else falls back to a direct lookup in the
/// recognized label sets. Unmapped labels return `None`; callers drop them.
pub fn classify_label(raw: &str) -> Option<IssueCategory> {
    let normalized = raw.trim().to_lowercase().replace(' ', "_");
    if normalized.is_empty() {
        return None;
    }
    if normalized.contains("window") {
        return Some(IssueCategory::WindowIssues);
    }
    if normalized.contains("mold") {
        return Some(IssueCategory::Mold);
    }
    if normalized.contains("water") {
        return Some(IssueCategory::WaterDamage);
    }
    if normalized.contains("structural") {
        return Some(IssueCategory::StructuralDamage);
    }
    IssueCategory::ALL
        .into_iter()
        .find(|c| c.recognized_labels().contains(&normalized.as_str()))
}

/// Fixed candidate vocabulary handed to the embedding model.
///
/// One score per label comes back for every analyzed image; the engine
/// thresholds and classifies them. Labels outside the six categories (poor
/// lighting, paint peeling, ...) are scored but dropped at classification.
pub const CANDIDATE_LABELS: [&str; 12] = [
    "water damage",
    "mold growth",
    "structural cracks",
    "poor lighting",
    "broken fixtures",
    "paint peeling",
    "electrical issues",
    "plumbing problems",
    "ceiling damage",
    "wall damage",
    "floor damage",
    "window issues",
];

/// Quick-assessment recommendation for a detected label.
pub fn recommendation_for(label: &str) -> &'static str {
    match label.trim().to_lowercase().as_str() {
        "water damage" | "water stains" => {
            "Contact a water damage restoration specialist immediately. This could lead to mold and structural issues if not addressed."
        }
        "mold growth" | "mold" => {
            "Schedule a mold inspection and remediation service. Ensure proper ventilation and fix any water leaks."
        }
        "structural cracks" | "cracks" => {
            "Have a structural engineer assess the severity of the cracks. This could indicate foundation issues."
        }
        "poor lighting" => {
            "Consider installing additional lighting fixtures or larger windows. Good lighting can significantly improve the space."
        }
        "broken fixtures" => {
            "Have a licensed contractor repair or replace the damaged fixtures. This is typically a straightforward fix."
        }
        "paint peeling" => {
            "Sand the area, prime, and repaint. Check for underlying moisture issues that might be causing the paint to peel."
        }
        "electrical issues" => {
            "Contact a licensed electrician for an inspection. Electrical problems can pose serious safety risks."
        }
        "plumbing problems" => {
            "Have a professional plumber inspect the system. Address leaks and water pressure issues promptly."
        }
        "ceiling damage" => {
            "Inspect for roof leaks and have a contractor assess the damage. This could indicate water infiltration."
        }
        "wall damage" => {
            "Evaluate if it's superficial or structural. Minor repairs can be done by a general contractor."
        }
        "floor damage" => {
            "Consider repairs or replacement depending on severity. Check for underlying subfloor issues."
        }
        "window issues" => {
            "Have a window specialist check for proper sealing and operation. This affects energy efficiency."
        }
        _ => "Please consult a specialist for this issue.",
    }
}

static WATER_DAMAGE_DETAILS: CategoryDetails = CategoryDetails {
    recommendation: "Contact a water damage restoration specialist immediately. Check for active leaks and ensure proper ventilation.",
    repair_steps: &[
        "Emergency water extraction",
        "Identify and fix the water source",
        "Industrial drying of affected areas",
        "Moisture testing of walls and floors",
        "Remove damaged materials",
        "Sanitize and treat for mold prevention",
        "Replace damaged materials",
    ],
    estimated_cost: "$2,000 - $8,000",
    timeline: "1-2 weeks",
    prevention: &[
        "Regular plumbing inspections",
        "Install water detection systems",
        "Maintain proper ventilation",
        "Regular gutter maintenance",
    ],
    professionals: &[
        "Water Damage Restoration Specialist",
        "Licensed Plumber",
        "Moisture Control Expert",
        "Building Inspector",
    ],
    qualifications: "Look for professionals with:\n- IICRC certification\n- Water damage restoration experience\n- Mold remediation knowledge\n- Insurance claim experience",
};

static MOLD_DETAILS: CategoryDetails = CategoryDetails {
    recommendation: "Use a dehumidifier and contact a mold remediation specialist. This could be a health hazard.",
    repair_steps: &[
        "Professional mold inspection",
        "Air quality testing",
        "Containment setup",
        "HVAC system protection",
        "Remove affected materials",
        "Clean and sanitize area",
        "Apply preventive treatments",
    ],
    estimated_cost: "$500 - $6,000",
    timeline: "3-7 days",
    prevention: &[
        "Control indoor humidity (30-50%)",
        "Fix leaks immediately",
        "Improve ventilation",
        "Regular inspections",
    ],
    professionals: &[
        "Certified Mold Inspector",
        "Mold Remediation Specialist",
        "Indoor Air Quality Expert",
        "Environmental Hygienist",
    ],
    qualifications: "Look for professionals with:\n- IICRC or ACAC certification\n- Mold assessment experience\n- Air quality testing capabilities\n- Remediation protocol knowledge",
};

static STRUCTURAL_DAMAGE_DETAILS: CategoryDetails = CategoryDetails {
    recommendation: "Have a structural engineer assess the severity of these issues immediately.",
    repair_steps: &[
        "Professional inspection by structural engineer",
        "Foundation assessment and soil testing",
        "Development of repair plan",
        "Installation of temporary support structures",
        "Repair or reinforce damaged structural elements",
        "Address any underlying foundation issues",
        "Final structural integrity verification",
    ],
    estimated_cost: "$5,000 - $25,000",
    timeline: "2-8 weeks",
    prevention: &[
        "Regular structural inspections",
        "Maintain proper drainage around foundation",
        "Monitor for new cracks or movement",
        "Address water issues promptly",
    ],
    professionals: &[
        "Structural Engineer",
        "Licensed Building Contractor",
        "Foundation Specialist",
        "Construction Project Manager",
    ],
    qualifications: "Look for professionals with:\n- Licensed structural engineer certification\n- Experience with foundation repairs\n- Local building code knowledge\n- Insurance and bonding",
};

static ELECTRICAL_DETAILS: CategoryDetails = CategoryDetails {
    recommendation: "Contact a licensed electrician. Do not attempt DIY repairs on electrical issues.",
    repair_steps: &[
        "Shut off power to affected circuits",
        "Inspection by licensed electrician",
        "Trace and isolate faulty wiring",
        "Replace damaged wiring and fixtures",
        "Upgrade panel or breakers if required",
        "Test circuits and verify grounding",
        "Final code compliance inspection",
    ],
    estimated_cost: "$150 - $4,000",
    timeline: "1-5 days",
    prevention: &[
        "Annual electrical inspections",
        "Avoid overloading outlets",
        "Replace frayed cords promptly",
        "Install surge protection",
    ],
    professionals: &[
        "Licensed Electrician",
        "Electrical Contractor",
        "Home Inspector",
        "Electrical Engineer",
    ],
    qualifications: "Look for professionals with:\n- State electrical license\n- Code compliance experience\n- Experience with older wiring\n- Insurance and bonding",
};

static PLUMBING_DETAILS: CategoryDetails = CategoryDetails {
    recommendation: "Schedule an inspection with a licensed plumber to assess and fix the issues.",
    repair_steps: &[
        "Shut off water supply to the affected area",
        "Professional plumbing inspection",
        "Locate the leak or blockage",
        "Repair or replace damaged pipes",
        "Check water pressure and drainage",
        "Test all connections for leaks",
        "Restore wall or floor finishes",
    ],
    estimated_cost: "$150 - $3,500",
    timeline: "1-4 days",
    prevention: &[
        "Regular plumbing inspections",
        "Insulate pipes in cold areas",
        "Avoid chemical drain cleaners",
        "Monitor water pressure",
    ],
    professionals: &[
        "Licensed Plumber",
        "Pipe Fitting Specialist",
        "Leak Detection Expert",
        "Building Inspector",
    ],
    qualifications: "Look for professionals with:\n- State plumbing license\n- Leak detection equipment\n- Repiping experience\n- Insurance and bonding",
};

static WINDOW_ISSUES_DETAILS: CategoryDetails = CategoryDetails {
    recommendation: "Have a window specialist check for proper sealing and operation. This affects energy efficiency.",
    repair_steps: &[
        "Window inspection and assessment",
        "Measure window opening",
        "Remove damaged window",
        "Repair frame if needed",
        "Install new window",
        "Seal and weatherproof",
        "Test operation and efficiency",
    ],
    estimated_cost: "$200 - $1,500 per window",
    timeline: "1-3 days",
    prevention: &[
        "Regular maintenance checks",
        "Clean tracks and mechanisms",
        "Replace weatherstripping as needed",
        "Address drafts promptly",
    ],
    professionals: &[
        "Window Installation Specialist",
        "Glass Repair Technician",
        "Energy Efficiency Expert",
        "General Contractor",
    ],
    qualifications: "Look for professionals with:\n- Window installation certification\n- Energy efficiency expertise\n- Weatherization experience\n- Manufacturer certifications",
};
