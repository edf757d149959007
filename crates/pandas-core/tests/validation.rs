//! # Property Tests for Submission Validation
//!
//! Exercises the email rule and the cargo search filter over generated
//! inputs rather than a handful of hand-picked strings.

use chrono::NaiveDate;
use pandas_core::{filter_cargo, CargoId, CargoRecord, Email, WaitlistForm};
use proptest::prelude::*;

fn record(id: i32, sender: String, destination: String) -> CargoRecord {
    CargoRecord {
        id: CargoId::new(id),
        sender_name: sender,
        cargo_details: "general goods".to_string(),
        destination,
        created_at: NaiveDate::from_ymd_opt(2026, 2, 23)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap(),
    }
}

proptest! {
    #[test]
    fn well_formed_addresses_are_accepted(
        local in "[a-z0-9._+-]{1,20}",
        domain in "[a-z0-9-]{1,20}",
        tld in "[a-z]{2,6}",
    ) {
        let raw = format!("{local}@{domain}.{tld}");
        let email = Email::parse(raw.clone());
        prop_assert!(email.is_ok(), "{} rejected", raw);
        let email = email.unwrap();
        prop_assert_eq!(email.as_str(), raw.as_str());
    }

    #[test]
    fn addresses_without_at_are_rejected(raw in "[^@]{0,40}") {
        prop_assert!(Email::parse(raw).is_err());
    }

    #[test]
    fn addresses_without_domain_dot_are_rejected(
        local in "[a-z0-9]{1,20}",
        domain in "[a-z0-9-]{1,20}",
    ) {
        let raw = format!("{local}@{domain}");
        prop_assert!(Email::parse(raw).is_err());
    }

    #[test]
    fn valid_signups_echo_name_and_email(
        name in "[A-Za-z][A-Za-z ]{0,30}",
        local in "[a-z0-9]{1,12}",
    ) {
        let email = format!("{local}@pandas-global.com");
        let signup = WaitlistForm {
            name: Some(name.clone()),
            email: Some(email.clone()),
            ..Default::default()
        }
        .validate();
        prop_assert!(signup.is_ok());
        let signup = signup.unwrap();
        prop_assert_eq!(signup.name, name);
        prop_assert_eq!(signup.email.as_str(), email.as_str());
    }

    #[test]
    fn filter_result_is_an_ordered_subset(
        rows in prop::collection::vec(("[A-Za-z]{1,10}", "[A-Za-z ]{1,12}"), 0..20),
        query in "[A-Za-z]{0,3}",
    ) {
        let records: Vec<CargoRecord> = rows
            .into_iter()
            .enumerate()
            .map(|(i, (s, d))| record(i as i32 + 1, s, d))
            .collect();
        let kept = filter_cargo(records.clone(), &query);

        prop_assert!(kept.len() <= records.len());
        for r in &kept {
            prop_assert!(r.matches(&query));
        }
        let ids: Vec<i32> = kept.iter().map(|r| r.id.get()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ids, sorted);

        let dropped = records.iter().filter(|r| !r.matches(&query)).count();
        prop_assert_eq!(kept.len() + dropped, records.len());
    }
}
