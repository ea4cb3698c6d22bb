//! Seed data for the grant catalogue and the opportunity board.

use chrono::NaiveDate;
use crate::models::{ContactPreference, Grant, Opportunity, Region};

/// Categories an opportunity can be posted under
pub const OPPORTUNITY_CATEGORIES: [&str; 5] = [
    "Animal Welfare",
    "Food Aid",
    "Environment",
    "Community Events",
    "Education",
];

/// Cause areas offered on the grant matching form
pub const CAUSE_AREAS: [&str; 11] = [
    "Environment",
    "Youth",
    "Education",
    "Disaster Relief",
    "Food Aid",
    "Animal Welfare",
    "Community Development",
    "Women Empowerment",
    "Health",
    "Indigenous Communities",
    "Technology",
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Fixture dates are literals
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn grant(
    id: &str,
    name: &str,
    organization: &str,
    categories: &[&str],
    eligibility: &str,
    funding: (u64, u64),
    deadline: NaiveDate,
    description: &str,
    keywords: &[&str],
) -> Grant {
    Grant {
        id: id.to_string(),
        name: name.to_string(),
        organization: organization.to_string(),
        categories: strings(categories),
        eligibility: eligibility.to_string(),
        funding_min: funding.0,
        funding_max: funding.1,
        deadline,
        description: description.to_string(),
        keywords: strings(keywords),
    }
}

/// The ten grants in the catalogue
pub fn grants() -> Vec<Grant> {
    vec![
        grant(
            "1",
            "Yayasan Hasanah Community Grant",
            "Yayasan Hasanah",
            &["Community Development", "Education"],
            "Registered NGOs in Malaysia with at least 2 years of operation. Must have valid ROS registration.",
            (10_000, 50_000),
            date(2025, 3, 31),
            "Supporting grassroots community development initiatives across Malaysia with focus on education and empowerment.",
            &["community", "education", "empowerment", "youth", "development", "training"],
        ),
        grant(
            "2",
            "Environmental Action Fund",
            "WWF Malaysia",
            &["Environment", "Conservation"],
            "Environmental NGOs and community groups. Projects must demonstrate measurable environmental impact.",
            (5_000, 30_000),
            date(2025, 4, 15),
            "Funding for conservation projects, environmental education, and sustainable community initiatives.",
            &["environment", "conservation", "wildlife", "sustainability", "green", "nature", "forest", "marine"],
        ),
        grant(
            "3",
            "Youth Development Initiative",
            "Ministry of Youth and Sports",
            &["Youth", "Education"],
            "Youth organizations and NGOs working with individuals aged 15-30. Must be registered with ROS.",
            (15_000, 100_000),
            date(2025, 5, 1),
            "Supporting youth empowerment programs, skills training, and leadership development initiatives.",
            &["youth", "leadership", "skills", "training", "empowerment", "students", "education"],
        ),
        grant(
            "4",
            "Disaster Relief Support Grant",
            "MERCY Malaysia",
            &["Disaster Relief", "Humanitarian"],
            "NGOs with experience in disaster response. Must have established community networks.",
            (20_000, 150_000),
            date(2025, 2, 28),
            "Emergency funding for disaster preparedness, response, and recovery programs.",
            &["disaster", "relief", "emergency", "flood", "humanitarian", "aid", "recovery"],
        ),
        grant(
            "5",
            "Food Security Programme",
            "Kechara Soup Kitchen",
            &["Food Aid", "Community Development"],
            "Organizations running food distribution or food security programs. Must serve underprivileged communities.",
            (8_000, 40_000),
            date(2025, 6, 30),
            "Supporting food banks, community kitchens, and sustainable food security initiatives.",
            &["food", "hunger", "poverty", "community", "welfare", "nutrition", "aid"],
        ),
        grant(
            "6",
            "Animal Welfare Support Fund",
            "SPCA Malaysia",
            &["Animal Welfare"],
            "Registered animal welfare organizations. Must demonstrate proper facility management.",
            (5_000, 25_000),
            date(2025, 4, 30),
            "Funding for animal rescue, rehabilitation, and community education on animal welfare.",
            &["animal", "welfare", "rescue", "shelter", "pets", "wildlife", "veterinary"],
        ),
        grant(
            "7",
            "Women Empowerment Grant",
            "Women's Aid Organisation",
            &["Women", "Community Development"],
            "NGOs focused on women's rights, safety, and economic empowerment. Priority for rural programs.",
            (12_000, 60_000),
            date(2025, 5, 15),
            "Supporting initiatives for women's economic independence, safety, and leadership development.",
            &["women", "empowerment", "gender", "safety", "economic", "rural", "skills"],
        ),
        grant(
            "8",
            "Digital Inclusion Initiative",
            "MDEC",
            &["Education", "Technology"],
            "Organizations providing digital literacy training. Must target underserved communities.",
            (10_000, 80_000),
            date(2025, 7, 31),
            "Bridging the digital divide through technology education and access programs.",
            &["digital", "technology", "education", "literacy", "internet", "computer", "training"],
        ),
        grant(
            "9",
            "Indigenous Community Support",
            "JAKOA",
            &["Indigenous", "Community Development"],
            "Organizations working with Orang Asli and indigenous communities in Sarawak/Sabah.",
            (15_000, 70_000),
            date(2025, 3, 15),
            "Preserving indigenous culture while supporting community development and welfare.",
            &["indigenous", "orang asli", "culture", "community", "traditional", "heritage", "rural"],
        ),
        grant(
            "10",
            "Health & Wellness Outreach Grant",
            "Ministry of Health Malaysia",
            &["Health", "Community Development"],
            "Health-focused NGOs with qualified medical volunteers. Must serve rural or underserved areas.",
            (20_000, 100_000),
            date(2025, 8, 31),
            "Supporting community health programs, medical outreach, and health education initiatives.",
            &["health", "medical", "wellness", "outreach", "rural", "clinic", "awareness"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn opportunity(
    id: &str,
    title: &str,
    category: &str,
    organization: &str,
    on: NaiveDate,
    location: &str,
    region: Region,
    description: &str,
    volunteers: (u32, Option<u32>),
) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        organization: organization.to_string(),
        date: on,
        time: None,
        location: location.to_string(),
        region,
        description: description.to_string(),
        volunteers_needed: volunteers.0,
        volunteers_registered: volunteers.1,
        requirements: Vec::new(),
        contact_email: None,
        contact_phone: None,
        contact_preference: None,
    }
}

/// Opportunities the board starts with
pub fn opportunities() -> Vec<Opportunity> {
    let mut beach = opportunity(
        "1",
        "Beach Cleanup at Damai",
        "Environment",
        "Green Kuching Initiative",
        date(2025, 3, 15),
        "Damai Beach, Kuching",
        Region::Kuching,
        "Join us for a morning of beach cleaning to protect our marine life and keep our beaches beautiful. \
         We'll provide all necessary equipment including gloves, bags, and refreshments.",
        (20, Some(12)),
    );
    beach.time = Some("8:00 AM - 12:00 PM".to_string());
    beach.requirements = strings(&[
        "No prior experience needed",
        "Wear comfortable clothing and closed shoes",
        "Bring sun protection (hat, sunscreen)",
        "Water will be provided",
    ]);
    beach.contact_email = Some("contact@greenkuching.org".to_string());
    beach.contact_phone = Some("+60 12-345 6789".to_string());
    beach.contact_preference = Some(ContactPreference::Both);

    vec![
        beach,
        opportunity(
            "2",
            "Food Bank Packing Day",
            "Food Aid",
            "Sibu Community Pantry",
            date(2025, 3, 22),
            "Sibu Town Hall",
            Region::Sibu,
            "Sort and pack donated groceries into family food boxes for distribution to low-income households.",
            (15, Some(6)),
        ),
        opportunity(
            "3",
            "Animal Shelter Weekend Care",
            "Animal Welfare",
            "SPCA Miri",
            date(2025, 4, 5),
            "SPCA Shelter, Miri",
            Region::Miri,
            "Walk, feed and socialise rescued dogs and cats, and help clean the kennels at the shelter.",
            (10, None),
        ),
        opportunity(
            "4",
            "Reading Buddies Programme",
            "Education",
            "Bintulu Literacy Circle",
            date(2025, 4, 12),
            "Bintulu Public Library",
            Region::Bintulu,
            "Read with primary school children every Saturday morning to build literacy and confidence.",
            (12, Some(4)),
        ),
        opportunity(
            "5",
            "Tree Planting Campaign",
            "Environment",
            "Green Kuching Initiative",
            date(2025, 3, 25),
            "Kubah National Park",
            Region::Kuching,
            "Help restore degraded forest land by planting native seedlings alongside park rangers.",
            (30, Some(20)),
        ),
        opportunity(
            "6",
            "Gawai Community Festival Crew",
            "Community Events",
            "Sri Aman Youth Council",
            date(2025, 6, 1),
            "Sri Aman Civic Centre",
            Region::SriAman,
            "Set up stalls, guide visitors and run games for children during the Gawai celebration.",
            (25, Some(9)),
        ),
        opportunity(
            "7",
            "Mangrove Replanting at Kuala Rajang",
            "Environment",
            "Mukah Coastal Friends",
            date(2025, 5, 10),
            "Kuala Rajang Estuary",
            Region::Mukah,
            "Replant mangrove saplings to protect the coastline and provide habitat for marine life.",
            (40, Some(18)),
        ),
        opportunity(
            "8",
            "Flood Relief Meal Distribution",
            "Food Aid",
            "Kapit Relief Network",
            date(2025, 1, 18),
            "Kapit Community Hall",
            Region::Kapit,
            "Prepare and deliver hot meals to families displaced by seasonal flooding along the Rajang.",
            (20, Some(20)),
        ),
        opportunity(
            "11",
            "River Conservation Workshop",
            "Education",
            "Green Kuching Initiative",
            date(2025, 2, 10),
            "Kuching Waterfront",
            Region::Kuching,
            "Teach secondary school students how to test river water quality and why riparian buffers matter.",
            (15, Some(15)),
        ),
    ]
}
