// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Driver, DriverKey, Gender, Roster};

#[test]
fn test_builtin_roster_has_five_drivers() {
    let roster: Roster = Roster::builtin();
    assert_eq!(roster.len(), 5);
    assert!(!roster.is_empty());
    assert_eq!(roster.drivers()[0].name_cn, "平板測試");
}

#[test]
fn test_find_by_key() {
    let roster: Roster = Roster::builtin();
    let driver: &Driver = roster.find(&DriverKey::new("123456")).unwrap();
    assert_eq!(driver.name_cn, "婷姐宜");
    assert_eq!(driver.gender, Gender::Female);
    assert!(roster.find(&DriverKey::new("000000")).is_none());
}

#[test]
fn test_matches_search_on_name_or_id() {
    let roster: Roster = Roster::builtin();
    let driver: &Driver = roster.find(&DriverKey::new("556612")).unwrap();

    assert!(driver.matches_search(""));
    assert!(driver.matches_search("租的"));
    assert!(driver.matches_search("5566"));
    assert!(!driver.matches_search("ZU DI"));
    assert!(!driver.matches_search("9999"));
}

#[test]
fn test_matches_search_ignores_ascii_case() {
    let roster: Roster = Roster::builtin();
    let mut driver: Driver = roster.drivers()[0].clone();
    driver.id = String::from("AB1234");

    assert!(driver.matches_search("ab12"));
}

#[test]
fn test_matches_search_ignores_surrounding_whitespace() {
    let roster: Roster = Roster::builtin();
    let driver: &Driver = roster.find(&DriverKey::new("556612")).unwrap();

    assert!(driver.matches_search(" 租的正 "));
    assert!(driver.matches_search("   "));
    assert!(!driver.matches_search("租 的"));
}

#[test]
fn test_driver_ref_uses_chinese_name() {
    let roster: Roster = Roster::builtin();
    let driver: &Driver = &roster.drivers()[1];

    assert_eq!(driver.key(), DriverKey::new("556612"));
    assert_eq!(driver.to_ref().display_name, "租的正");
}

#[test]
fn test_driver_deserializes_with_defaults() {
    let json: &str = r#"{
        "id": "777",
        "name_cn": "陳大文",
        "name_en": "CHAN TAI MAN",
        "gender": "Male"
    }"#;
    let driver: Driver = serde_json::from_str(json).unwrap();

    assert_eq!(driver.id, "777");
    assert_eq!(driver.phone, "");
    assert_eq!(driver.risk_score, 0);
}
