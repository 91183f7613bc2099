#![cfg(test)]
use chrono::{Months, NaiveDate, NaiveDateTime};
use gymkit_common::clock::{Clock, FixedClock};
use gymkit_core::Membership;
use gymkit_core::membership::DEFAULT_DURATION_MONTHS;

fn day(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .unwrap()
}

#[test]
fn three_constructor_shapes() -> anyhow::Result<()> {
    let clock = FixedClock(day(2024, 6, 1));

    let explicit = Membership::new(201, day(2024, 1, 15), 12)?;
    let member_only = Membership::for_member(202, &clock)?;
    let defaulted = Membership::with_defaults(&clock)?;

    assert_eq!(explicit.end_date(), day(2025, 1, 15));

    let default_end = clock.now() + Months::new(DEFAULT_DURATION_MONTHS as u32);
    for m in [&member_only, &defaulted] {
        assert_eq!(m.start_date(), clock.now());
        assert_eq!(m.end_date(), default_end);
        assert!(!m.is_active());
    }
    assert_eq!(member_only.member_id(), 202);
    assert_eq!(defaulted.member_id(), 0);
    Ok(())
}

#[test]
fn program_walkthrough() -> anyhow::Result<()> {
    let clock = FixedClock(day(2024, 6, 1));

    let mut extended = Membership::for_member(202, &clock)?;
    extended.extend_membership(6)?;
    assert_eq!(extended.end_date(), day(2025, 12, 1));

    let mut adjusted = Membership::with_defaults(&clock)?;
    adjusted.set_member_id(203);
    adjusted.set_end_date(day(2024, 7, 1));
    adjusted.set_active(true);

    assert_eq!(adjusted.remaining_days(&clock), 30.0);
    let status = adjusted.status(&clock);
    assert!(status.contains("203"));
    assert!(status.contains("2024-06-01"));
    assert!(status.contains("2024-07-01"));
    assert!(status.contains("Active: true"));
    assert!(status.contains("Remaining days: 30"));
    Ok(())
}

#[test]
fn extension_is_additive_away_from_month_end() -> anyhow::Result<()> {
    for (k1, k2) in [(1, 1), (2, 11), (5, 0), (7, -3), (-4, 9)] {
        let mut twice = Membership::new(1, day(2023, 3, 28), 2)?;
        let mut once = twice.clone();
        let before = twice.end_date();

        twice.extend_membership(k1)?;
        twice.extend_membership(k2)?;
        once.extend_membership(k1 + k2)?;

        assert_eq!(twice.end_date(), once.end_date(), "k1={k1} k2={k2}");
        if k1 > 0 {
            let mut single = Membership::new(1, day(2023, 3, 28), 2)?;
            single.extend_membership(k1)?;
            assert!(single.end_date() > before);
        }
    }
    Ok(())
}

#[test]
fn remaining_days_negative_iff_past_end() -> anyhow::Result<()> {
    let m = Membership::new(9, day(2024, 1, 1), 1)?;
    let end = m.end_date();

    for offset_ms in [-259_200_000_i64, -3_600_000, -999, -1, 0, 1, 500, 999, 3_600_000] {
        let now = end + chrono::Duration::milliseconds(offset_ms);
        let remaining = m.remaining_days(&FixedClock(now));
        assert_eq!(remaining < 0.0, now > end, "offset {offset_ms}ms gave {remaining}");
    }
    Ok(())
}

#[test]
fn quirks_are_preserved() -> anyhow::Result<()> {
    let clock = FixedClock(day(2024, 6, 1));
    let mut m = Membership::for_member(5, &clock)?;

    m.set_end_date(day(2000, 1, 1));
    m.set_active(true);
    assert!(m.end_date() < m.start_date());
    assert!(m.is_active());
    assert!(m.remaining_days(&clock) < 0.0);

    m.extend_membership(-12)?;
    assert_eq!(m.end_date(), day(1999, 1, 1));
    Ok(())
}
