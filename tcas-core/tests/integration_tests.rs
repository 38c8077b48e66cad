//! Integration tests for tcas-core
//!
//! These drive the public API the way a front end does: build a context,
//! dispatch commands, read the listing back.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::collections::HashSet;

use rust_decimal::Decimal;

use tcas_core::config::Config;
use tcas_core::domain::form::fields;
use tcas_core::ports::PortfolioRepository;
use tcas_core::{
    Command, LoginForm, Outcome, PortfolioForm, PortfolioRecord, Role, SortConfig, SortDirection,
    SortKey, TcasContext,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn empty_context() -> TcasContext {
    TcasContext::with_config(Config::default()).expect("Failed to create context")
}

fn form(first_name: &str, major: &str, gpa: &str) -> PortfolioForm {
    PortfolioForm {
        first_name: first_name.to_string(),
        last_name: "Student".to_string(),
        address: "1 Rama I Rd, Bangkok".to_string(),
        phone: "0812345678".to_string(),
        school: "Suankularb Wittayalai".to_string(),
        gpa: gpa.to_string(),
        skills: String::new(),
        reason: String::new(),
        major: major.to_string(),
        university: "Chulalongkorn University".to_string(),
        photos: vec![],
    }
}

fn submit(ctx: &mut TcasContext, form: PortfolioForm) -> PortfolioRecord {
    match ctx.dispatch(Command::Submit(form)).unwrap() {
        Outcome::Submitted(record) => record,
        other => panic!("expected Submitted, got {:?}", other),
    }
}

/// Header clicks needed to land on `target` from the current sort
fn sort_to(ctx: &mut TcasContext, target: SortConfig) {
    for _ in 0..3 {
        if ctx.sort() == target {
            return;
        }
        ctx.dispatch(Command::SetSort(target.key)).unwrap();
    }
    assert_eq!(ctx.sort(), target);
}

fn all_sorts() -> Vec<SortConfig> {
    SortKey::ALL
        .iter()
        .flat_map(|&key| {
            [
                SortConfig::new(key, SortDirection::Asc),
                SortConfig::new(key, SortDirection::Desc),
            ]
        })
        .collect()
}

fn ids(records: &[PortfolioRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

// ============================================================================
// Directory
// ============================================================================

#[test]
fn test_inserted_record_listed_exactly_once_under_every_sort() {
    let mut ctx = empty_context();
    submit(&mut ctx, form("Ann", "Art", "3.10"));
    let record = submit(&mut ctx, form("Ben", "Law", "3.90"));

    for sort in all_sorts() {
        sort_to(&mut ctx, sort);
        let listing = ctx.listing().unwrap();
        let hits = listing.iter().filter(|r| r.id == record.id).count();
        assert_eq!(hits, 1, "record listed {} times under {:?}", hits, sort);
    }
}

#[test]
fn test_listing_is_permutation_of_directory() {
    let mut ctx = TcasContext::with_config(Config {
        demo_mode: true,
        ..Default::default()
    })
    .unwrap();
    submit(&mut ctx, form("Mali", "Medicine", "3.92"));

    let stored: HashSet<String> = ctx.repository.all().unwrap().into_iter().map(|r| r.id).collect();

    for sort in all_sorts() {
        sort_to(&mut ctx, sort);
        let listing = ctx.listing().unwrap();
        assert_eq!(listing.len(), stored.len());
        let listed: HashSet<String> = ids(&listing).into_iter().collect();
        assert_eq!(listed, stored);
    }
}

#[test]
fn test_listing_leaves_insertion_order_alone() {
    let mut ctx = empty_context();
    let a = submit(&mut ctx, form("Ann", "Art", "2.00"));
    let b = submit(&mut ctx, form("Ben", "Law", "4.00"));

    sort_to(&mut ctx, SortConfig::new(SortKey::Gpa, SortDirection::Desc));
    assert_eq!(ids(&ctx.listing().unwrap()), vec![b.id.clone(), a.id.clone()]);

    assert_eq!(ids(&ctx.repository.all().unwrap()), vec![a.id, b.id]);
}

#[test]
fn test_equal_gpa_keeps_insertion_order_both_directions() {
    let mut ctx = empty_context();
    let first = submit(&mut ctx, form("Zed", "Law", "3.50"));
    let low = submit(&mut ctx, form("Amy", "Art", "2.00"));
    let second = submit(&mut ctx, form("Kai", "Art", "3.5"));

    sort_to(&mut ctx, SortConfig::new(SortKey::Gpa, SortDirection::Asc));
    assert_eq!(
        ids(&ctx.listing().unwrap()),
        vec![low.id.clone(), first.id.clone(), second.id.clone()]
    );

    sort_to(&mut ctx, SortConfig::new(SortKey::Gpa, SortDirection::Desc));
    assert_eq!(ids(&ctx.listing().unwrap()), vec![first.id, second.id, low.id]);
}

#[test]
fn test_default_listing_is_gpa_desc() {
    let mut ctx = empty_context();
    submit(&mut ctx, form("Ann", "Art", "3.00"));
    submit(&mut ctx, form("Ben", "Law", "3.80"));

    assert_eq!(ctx.sort(), SortConfig::default());
    assert_eq!(ctx.listing().unwrap()[0].first_name, "Ben");
}

#[test]
fn test_text_sort_is_lexicographic() {
    let mut ctx = empty_context();
    submit(&mut ctx, form("Ploy", "Law", "3.00"));
    submit(&mut ctx, form("Ann", "Medicine", "3.00"));
    submit(&mut ctx, form("Nok", "Architecture", "3.00"));

    sort_to(&mut ctx, SortConfig::new(SortKey::FirstName, SortDirection::Asc));
    let names: Vec<String> = ctx.listing().unwrap().into_iter().map(|r| r.first_name).collect();
    assert_eq!(names, vec!["Ann", "Nok", "Ploy"]);

    sort_to(&mut ctx, SortConfig::new(SortKey::Major, SortDirection::Desc));
    let majors: Vec<String> = ctx.listing().unwrap().into_iter().map(|r| r.major).collect();
    assert_eq!(majors, vec!["Medicine", "Law", "Architecture"]);
}

#[test]
fn test_header_clicks_toggle_direction() {
    let mut ctx = empty_context();

    let outcome = ctx.dispatch(Command::SetSort(SortKey::Gpa)).unwrap();
    assert!(matches!(
        outcome,
        Outcome::SortChanged(SortConfig { key: SortKey::Gpa, direction: SortDirection::Asc })
    ));

    ctx.dispatch(Command::SetSort(SortKey::Major)).unwrap();
    assert_eq!(ctx.sort(), SortConfig::new(SortKey::Major, SortDirection::Desc));

    ctx.dispatch(Command::SetSort(SortKey::Major)).unwrap();
    assert_eq!(ctx.sort(), SortConfig::new(SortKey::Major, SortDirection::Asc));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_gpa_boundaries() {
    let mut ctx = empty_context();

    for gpa in ["0", "4"] {
        let outcome = ctx.dispatch(Command::Submit(form("Ann", "Art", gpa))).unwrap();
        assert!(matches!(outcome, Outcome::Submitted(_)), "gpa {} rejected", gpa);
    }

    for gpa in ["-0.01", "4.01"] {
        match ctx.dispatch(Command::Submit(form("Ann", "Art", gpa))).unwrap() {
            Outcome::Rejected(errors) => {
                assert_eq!(errors.get(fields::GPA).unwrap().key(), "out-of-range");
            }
            other => panic!("gpa {} accepted: {:?}", gpa, other),
        }
    }

    assert_eq!(ctx.listing().unwrap().len(), 2);
}

#[test]
fn test_empty_first_name_is_rejected_and_not_inserted() {
    let mut ctx = empty_context();

    match ctx.dispatch(Command::Submit(form("", "Art", "3.00"))).unwrap() {
        Outcome::Rejected(errors) => {
            assert_eq!(errors.get(fields::FIRST_NAME).unwrap().key(), "required");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }

    assert!(ctx.listing().unwrap().is_empty());
}

#[test]
fn test_all_offending_fields_reported_together() {
    let mut ctx = empty_context();
    let mut bad = form("", "", "abc");
    bad.phone = "123".to_string();

    match ctx.dispatch(Command::Submit(bad)).unwrap() {
        Outcome::Rejected(errors) => {
            assert_eq!(
                errors.field_names(),
                vec![fields::FIRST_NAME, fields::PHONE, fields::GPA, fields::MAJOR]
            );
            assert_eq!(errors.get(fields::PHONE).unwrap().key(), "too-short");
            assert_eq!(errors.get(fields::GPA).unwrap().key(), "invalid-format");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[test]
fn test_submitted_gpa_is_numeric() {
    let mut ctx = empty_context();
    let record = submit(&mut ctx, form("Ann", "Art", " 3.75 "));
    assert_eq!(record.gpa, Decimal::new(375, 2));
}

// ============================================================================
// Detail view
// ============================================================================

#[test]
fn test_photo_cursor_wraparound() {
    let mut ctx = empty_context();
    let mut with_photos = form("Ann", "Art", "3.00");
    with_photos.select_photos(["blob:A", "blob:B", "blob:C"]);
    let record = submit(&mut ctx, with_photos);

    ctx.dispatch(Command::Open(record.id.clone())).unwrap();
    assert_eq!(ctx.detail().unwrap().cursor.current(), Some(0));

    for _ in 0..3 {
        ctx.dispatch(Command::NextPhoto).unwrap();
    }
    assert_eq!(ctx.detail().unwrap().cursor.current(), Some(0));

    let outcome = ctx.dispatch(Command::PrevPhoto).unwrap();
    assert!(matches!(outcome, Outcome::PhotoMoved(Some(2))));
    assert_eq!(ctx.detail().unwrap().current_photo(), Some("blob:C"));
}

#[test]
fn test_photo_moves_without_photos_are_noops() {
    let mut ctx = empty_context();
    let record = submit(&mut ctx, form("Ann", "Art", "3.00"));

    ctx.dispatch(Command::Open(record.id)).unwrap();
    let outcome = ctx.dispatch(Command::NextPhoto).unwrap();
    assert!(matches!(outcome, Outcome::PhotoMoved(None)));

    ctx.dispatch(Command::Close).unwrap();
    let outcome = ctx.dispatch(Command::PrevPhoto).unwrap();
    assert!(matches!(outcome, Outcome::PhotoMoved(None)));
}

#[test]
fn test_opening_missing_id_shows_nothing() {
    let mut ctx = empty_context();
    let outcome = ctx.dispatch(Command::Open("does-not-exist".to_string())).unwrap();
    assert!(matches!(outcome, Outcome::NotFound(_)));
    assert!(ctx.detail().is_none());
}

// ============================================================================
// Session
// ============================================================================

#[test]
fn test_teacher_login_then_logout() {
    let mut ctx = empty_context();

    let outcome = ctx
        .dispatch(Command::Login(LoginForm::new("teacher", "teacher1@school.ac.th", "abcd")))
        .unwrap();
    match outcome {
        Outcome::LoggedIn(identity) => {
            assert_eq!(identity.display_name, "teacher1");
            assert_eq!(identity.role, Role::Teacher);
        }
        other => panic!("expected LoggedIn, got {:?}", other),
    }
    assert_eq!(ctx.current_user().unwrap().display_name, "teacher1");

    ctx.dispatch(Command::Logout).unwrap();
    assert!(ctx.current_user().is_none());
}

#[test]
fn test_short_password_rejected() {
    let mut ctx = empty_context();
    let outcome = ctx
        .dispatch(Command::Login(LoginForm::new("student", "s1@school.ac.th", "abc")))
        .unwrap();

    match outcome {
        Outcome::Rejected(errors) => {
            assert_eq!(errors.get(fields::PASSWORD).unwrap().key(), "too-short");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
    assert!(ctx.current_user().is_none());
}

#[test]
fn test_login_replaces_identity() {
    let mut ctx = empty_context();
    ctx.dispatch(Command::Login(LoginForm::new("student", "s1@school.ac.th", "abcd")))
        .unwrap();
    ctx.dispatch(Command::Login(LoginForm::new("teacher", "t9@school.ac.th", "abcd")))
        .unwrap();

    let user = ctx.current_user().unwrap();
    assert_eq!(user.display_name, "t9");
    assert!(user.is_teacher());
}
