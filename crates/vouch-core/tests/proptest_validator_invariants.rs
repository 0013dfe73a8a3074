//! Property-based invariant tests for the built-in validators.
//!
//! 1. Email rejects every string without `@`.
//! 2. Email rejects every string with more than one `@`.
//! 3. Email ignores the domain's characters once the local part is valid.
//! 4. DateTime accepts every real calendar date in both layouts.
//! 5. Anything DateTime accepts is accepted again in its full six-field form.
//! 6. A chain of [Email, always-true] agrees with Email alone.
//! 7. A chain never evaluates members after a rejection.
//! 8. No validator panics on arbitrary input.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;
use vouch_core::{ChainValidator, DateLayout, DateTimeValidator, EmailValidator, Validator};

// ── Helpers ─────────────────────────────────────────────────────────────

fn datetime_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (1000i32..=9999, 1u32..=12, 1u32..=31, 0u32..24, 0u32..60, 0u32..60).prop_filter_map(
        "invalid calendar date",
        |(y, mo, d, h, mi, s)| {
            let date = NaiveDate::from_ymd_opt(y, mo, d)?;
            let time = NaiveTime::from_hms_opt(h, mi, s)?;
            Some(NaiveDateTime::new(date, time))
        },
    )
}

fn local_part_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.+!#$%&*=?-]{3,20}"
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Email and the `@` count
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn email_rejects_without_at(value in "[^@]*") {
        prop_assert!(!EmailValidator::new().validate(&value));
    }

    #[test]
    fn email_rejects_multiple_at(
        local in local_part_strategy(),
        middle in "[a-z]{0,10}",
        domain in "[a-z.]{0,20}",
    ) {
        let value = format!("{}@{}@{}", local, middle, domain);
        prop_assert!(!EmailValidator::new().validate(&value));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Domain is not character-validated
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn email_domain_unchecked(local in local_part_strategy(), domain in "[^@\\s]{0,30}") {
        let value = format!("{}@{}", local, domain);
        prop_assert!(EmailValidator::new().validate(&value), "rejected {:?}", value);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. DateTime layouts and round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn datetime_accepts_real_dates(dt in datetime_strategy()) {
        let validator = DateTimeValidator::new();
        for fmt in ["%d-%m-%Y", "%Y-%m-%d", "%d/%m/%Y", "%Y.%m.%d", "%d-%m-%Y %H:%M", "%Y-%m-%d %H:%M:%S"] {
            let value = dt.format(fmt).to_string();
            prop_assert!(validator.validate(&value), "rejected {:?}", value);
        }
    }

    #[test]
    fn datetime_round_trip(value in "[0-9]{1,4}[-/.][0-9]{1,2}[-/.][0-9]{1,4}( [0-9]{1,2}:[0-9]{1,2}(:[0-9]{1,2})?)?") {
        let validator = DateTimeValidator::new();
        if let Some(parsed) = validator.parse(&value) {
            for layout in [DateLayout::DayFirst, DateLayout::YearFirst] {
                let full = parsed.format(layout.format()).to_string();
                prop_assert!(validator.validate(&full), "{:?} accepted but {:?} rejected", value, full);
                prop_assert_eq!(validator.parse(&full), Some(parsed));
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6-7. Chain composition
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn chain_agrees_with_single_member(value in ".{0,40}") {
        let chain = ChainValidator::default()
            .with(EmailValidator::new())
            .with(|_: &str| true);
        prop_assert_eq!(chain.validate(&value), EmailValidator::new().validate(&value));
    }

    #[test]
    fn chain_short_circuits(value in ".{0,40}") {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let chain = ChainValidator::default()
            .with(|_: &str| false)
            .with(move |_: &str| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            });

        prop_assert!(!chain.validate(&value));
        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. No panics
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn validators_never_panic(value in any::<String>()) {
        let _ = EmailValidator::new().validate(&value);
        let _ = DateTimeValidator::new().validate(&value);
    }
}
