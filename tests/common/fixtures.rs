use folio::Profile;
use serde_json::{Value, json};

pub fn profile_from(value: Value) -> Profile {
    serde_json::from_value(value).expect("fixture must deserialize")
}

/// A complete profile that fits on one page.
pub fn full_profile() -> Profile {
    profile_from(json!({
        "identity": { "name": "Ada Lovelace", "email": "ada@example.com" },
        "summary": {
            "headline": "Analyst & Metaphysician",
            "bio": "Wrote the first published algorithm intended for a machine.",
            "location": "London",
            "socialLinks": [{ "label": "Notes", "url": "https://example.com/notes" }]
        },
        "experiences": [
            {
                "title": "Collaborator",
                "company": "Analytical Engine",
                "startDate": "1842-01-01",
                "endDate": "1843-09-01",
                "skills": ["Mathematics", "Translation"]
            }
        ],
        "projects": [
            { "title": "Note G", "keyFeatures": ["Bernoulli numbers"], "technologies": ["Punched cards"] }
        ],
        "education": [
            { "degree": "Private tutoring", "school": "Home", "fieldOfStudy": "Mathematics" }
        ],
        "skills": [
            { "name": "Mathematics", "proficiency": 95 },
            { "name": "Poetry", "proficiency": 40 }
        ]
    }))
}

/// A profile with only the required identity fields.
pub fn minimal_profile(name: &str) -> Profile {
    profile_from(json!({
        "identity": { "name": name, "email": "someone@example.com" }
    }))
}

/// A profile with `count` experiences, tall enough to span several pages
/// when truncation is disabled.
pub fn long_profile(count: usize) -> Profile {
    let experiences: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "title": format!("Engineer {}", i),
                "company": format!("Company {}", i),
                "location": "Remote",
                "startDate": "2020-01-01",
                "currentlyWorking": i == 0,
                "skills": ["Rust", "Distributed systems", "Observability"]
            })
        })
        .collect();
    profile_from(json!({
        "identity": { "name": "Grace Hopper", "email": "grace@example.com" },
        "summary": { "bio": "Compilers, COBOL, and a moth in a relay." },
        "experiences": experiences
    }))
}

pub fn nameless_profile() -> Profile {
    profile_from(json!({
        "identity": { "email": "anonymous@example.com" },
        "skills": [{ "name": "Hiding", "proficiency": 100 }]
    }))
}
