//! Static business knowledge: service catalog, topical categories and the
//! always-available business facts.
//!
//! Everything here is compiled into the program and built once. Answers may
//! only state prices, timeframes, areas and hours that come from this module.

use std::sync::OnceLock;

use serde::Serialize;

/// One service the business offers, with the phrases that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeEntry {
    pub id: String,
    pub title: String,
    pub price: String,
    pub details: String,
    pub timeframe: String,
    /// Ordered trigger keywords; multi-word phrases weigh more.
    pub keywords: Vec<String>,
}

impl KnowledgeEntry {
    pub fn new(
        id: &str,
        title: &str,
        price: &str,
        details: &str,
        timeframe: &str,
        keywords: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price: price.into(),
            details: details.into(),
            timeframe: timeframe.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// A topical bucket (`contact`, `areas`, ...) scored like a service but
/// rendering no block of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub id: String,
    pub keywords: Vec<String>,
}

impl CategoryEntry {
    pub fn new(id: &str, keywords: &[&str]) -> Self {
        Self {
            id: id.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Facts that are never scored and always end up in the model context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessFacts {
    pub name: String,
    /// How the assistant introduces the business in prompts and replies.
    pub short_name: String,
    pub phone: String,
    /// Digits only, as used by `wa.me` links.
    pub whatsapp: String,
    pub email: String,
    pub address: String,
    pub experience: String,
    pub established: String,
    pub projects: String,
    pub satisfaction: String,
    pub warranty: String,
    pub primary_areas: Vec<String>,
    pub secondary_areas: Vec<String>,
    pub coverage: String,
    pub hours_regular: String,
    pub hours_emergency: String,
    pub hours_sunday: String,
    pub policy_quote: String,
    pub policy_measurement: String,
    pub policy_consultation: String,
    pub policy_warranty: String,
}

/// Click-to-contact links derived from [`BusinessFacts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLinks {
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    pub address: String,
    pub tel_link: String,
    pub whatsapp_link: String,
}

impl BusinessFacts {
    pub fn tel_link(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn whatsapp_link(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp)
    }

    pub fn contact_links(&self) -> ContactLinks {
        ContactLinks {
            phone: self.phone.clone(),
            whatsapp: self.whatsapp.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            tel_link: self.tel_link(),
            whatsapp_link: self.whatsapp_link(),
        }
    }
}

/// Read-only catalog shared by every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeStore {
    pub services: Vec<KnowledgeEntry>,
    pub categories: Vec<CategoryEntry>,
    pub facts: BusinessFacts,
}

impl KnowledgeStore {
    /// The compiled-in catalog, built on first use.
    pub fn builtin() -> &'static KnowledgeStore {
        static STORE: OnceLock<KnowledgeStore> = OnceLock::new();
        STORE.get_or_init(build_builtin)
    }

    pub fn service(&self, id: &str) -> Option<&KnowledgeEntry> {
        self.services.iter().find(|s| s.id == id)
    }
}

fn build_builtin() -> KnowledgeStore {
    let services = vec![
        KnowledgeEntry::new(
            "windows",
            "Window Glass Installation",
            "Starting from ₹2,500 per window",
            "Includes plain, tempered, and frosted glass options. Free site measurement. Warranty included.",
            "1-2 days installation",
            &[
                "window",
                "glass window",
                "window installation",
                "window fitting",
                "window price",
                "window cost",
            ],
        ),
        KnowledgeEntry::new(
            "shower",
            "Shower Door Installation",
            "Starting from ₹8,000",
            "Frameless and framed options. Premium hardware. Waterproof sealing. 5-year warranty.",
            "Same day installation",
            &[
                "shower",
                "shower door",
                "bathroom glass",
                "shower enclosure",
                "shower price",
            ],
        ),
        KnowledgeEntry::new(
            "mirror",
            "Mirror Installation",
            "Starting from ₹1,500",
            "All sizes and shapes. Wall-mounted or stand. Beveled edges available. Safety backing.",
            "2-3 hours",
            &[
                "mirror",
                "wall mirror",
                "bathroom mirror",
                "mirror fitting",
                "mirror installation",
            ],
        ),
        KnowledgeEntry::new(
            "partition",
            "Glass Partition Walls",
            "Starting from ₹15,000",
            "Office cabins, room dividers, soundproof options. Custom designs. Professional finish.",
            "2-3 days",
            &[
                "partition",
                "glass partition",
                "office partition",
                "room divider",
                "glass wall",
            ],
        ),
        KnowledgeEntry::new(
            "emergency",
            "Emergency Glass Repair",
            "Call for quote - 24/7 service",
            "Rapid response within 1-2 hours. Temporary boarding if needed. Insurance claims assistance.",
            "Immediate response",
            &[
                "emergency",
                "urgent",
                "broken glass",
                "crack",
                "repair",
                "accident",
                "shattered",
            ],
        ),
        KnowledgeEntry::new(
            "sliding",
            "Sliding Glass Doors",
            "Starting from ₹12,000",
            "Smooth track systems. Safety glass. Locking mechanisms. Weatherproof seals.",
            "1 day",
            &[
                "sliding door",
                "sliding glass",
                "patio door",
                "sliding window",
            ],
        ),
    ];

    let categories = vec![
        CategoryEntry::new(
            "contact",
            &["phone", "call", "contact", "whatsapp", "number", "reach"],
        ),
        CategoryEntry::new(
            "areas",
            &["area", "location", "where", "serve", "city", "place", "near"],
        ),
        CategoryEntry::new(
            "hours",
            &["time", "hour", "open", "close", "when", "available", "timing"],
        ),
        CategoryEntry::new(
            "experience",
            &["experience", "year", "old", "established", "how long"],
        ),
        CategoryEntry::new(
            "pricing",
            &["price", "cost", "rate", "charge", "how much", "expensive", "cheap"],
        ),
    ];

    let facts = BusinessFacts {
        name: "Raju Glass Fitting & Services".into(),
        short_name: "Raju Glass Fitting".into(),
        phone: "+91-81467-15800".into(),
        whatsapp: "918146715800".into(),
        email: "rajuglassfitting@gmail.com".into(),
        address: "Mohali, Punjab".into(),
        experience: "10+ years".into(),
        established: "2014".into(),
        projects: "500+ completed projects".into(),
        satisfaction: "100% customer satisfaction".into(),
        warranty: "All work guaranteed with warranty".into(),
        primary_areas: vec!["Mohali".into(), "Chandigarh".into(), "Panchkula".into()],
        secondary_areas: vec!["Zirakpur".into(), "Kharar".into(), "Dera Bassi".into()],
        coverage: "20km radius free visit".into(),
        hours_regular: "Monday to Saturday, 9:00 AM to 7:00 PM".into(),
        hours_emergency: "24/7 for urgent repairs".into(),
        hours_sunday: "Closed (except emergencies)".into(),
        policy_quote: "Free site visit and quotation".into(),
        policy_measurement: "Free measurement at your location".into(),
        policy_consultation: "Free design consultation".into(),
        policy_warranty: "1-5 years warranty depending on service".into(),
    };

    KnowledgeStore {
        services,
        categories,
        facts,
    }
}
