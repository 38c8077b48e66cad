//! Demo data provider
//!
//! A fixed set of sample portfolios so the listing, sorting and the photo
//! carousel can be explored without filling in forms. Two records share a
//! GPA on purpose, which makes sort stability visible.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::domain::{PortfolioDraft, PortfolioRecord};

struct DemoStudent {
    id: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    address: &'static str,
    phone: &'static str,
    school: &'static str,
    gpa_hundredths: i64,
    skills: &'static str,
    reason: &'static str,
    major: &'static str,
    university: &'static str,
    photos: &'static [&'static str],
}

const DEMO_STUDENTS: &[DemoStudent] = &[
    DemoStudent {
        id: "demo-0001",
        first_name: "Somchai",
        last_name: "Jaidee",
        address: "99 Phayathai Rd, Ratchathewi, Bangkok",
        phone: "0812345678",
        school: "Triam Udom Suksa School",
        gpa_hundredths: 375,
        skills: "Robotics, competitive programming",
        reason: "I want to build software that helps farmers.",
        major: "Computer Engineering",
        university: "Chulalongkorn University",
        photos: &[
            "demo://photos/somchai-portrait.jpg",
            "demo://photos/somchai-robot.jpg",
            "demo://photos/somchai-award.png",
        ],
    },
    DemoStudent {
        id: "demo-0002",
        first_name: "Naree",
        last_name: "Srisuk",
        address: "12 Nimmanhaemin Rd, Mueang, Chiang Mai",
        phone: "0898765432",
        school: "Yupparaj Wittayalai School",
        gpa_hundredths: 392,
        skills: "Biology olympiad, volunteering",
        reason: "Medicine has been my goal since my grandmother fell ill.",
        major: "Medicine",
        university: "Mahidol University",
        photos: &["demo://photos/naree-portrait.jpg"],
    },
    DemoStudent {
        id: "demo-0003",
        first_name: "Anan",
        last_name: "Wongsawat",
        address: "45 Mittraphap Rd, Mueang, Khon Kaen",
        phone: "0861112233",
        school: "Khon Kaen Wittayayon School",
        gpa_hundredths: 350,
        skills: "Drawing, model making",
        reason: "",
        major: "Architecture",
        university: "Khon Kaen University",
        photos: &[],
    },
    DemoStudent {
        id: "demo-0004",
        first_name: "Pim",
        last_name: "Chaiyaporn",
        address: "8 Kanjanavanich Rd, Hat Yai, Songkhla",
        phone: "0745556677",
        school: "Hatyaiwittayalai School",
        gpa_hundredths: 375,
        skills: "Debate, English",
        reason: "I want to work in international trade law.",
        major: "Law",
        university: "Thammasat University",
        photos: &[
            "demo://photos/pim-portrait.jpg",
            "demo://photos/pim-debate.jpg",
        ],
    },
    DemoStudent {
        id: "demo-0005",
        first_name: "Krit",
        last_name: "Boonmee",
        address: "201 Sukhumvit Rd, Mueang, Chon Buri",
        phone: "0382223344",
        school: "Chonradsadorn Umrung School",
        gpa_hundredths: 318,
        skills: "Football",
        reason: "",
        major: "Sports Science",
        university: "Kasetsart University",
        photos: &[],
    },
];

/// Generate the demo portfolios in their insertion order
pub fn generate_demo_portfolios() -> Vec<PortfolioRecord> {
    let now = Utc::now();

    DEMO_STUDENTS
        .iter()
        .map(|s| {
            PortfolioRecord::from_draft(
                s.id,
                PortfolioDraft {
                    first_name: s.first_name.to_string(),
                    last_name: s.last_name.to_string(),
                    address: s.address.to_string(),
                    phone: s.phone.to_string(),
                    school: s.school.to_string(),
                    gpa: Decimal::new(s.gpa_hundredths, 2),
                    skills: s.skills.to_string(),
                    reason: s.reason.to_string(),
                    major: s.major.to_string(),
                    university: s.university.to_string(),
                    photos: s.photos.iter().map(|p| p.to_string()).collect(),
                },
                now,
            )
        })
        .collect()
}
