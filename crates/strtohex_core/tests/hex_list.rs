use pretty_assertions::assert_eq;
use strtohex_core::{hex_entries, HexEntry, HexList};

#[test]
fn word_emits_second_half_first() {
    let entries = hex_entries("abcd");
    let texts: Vec<&str> = entries.iter().map(HexEntry::as_str).collect();
    assert_eq!(texts, vec!["0xcd", "0xab"]);
}

#[test]
fn non_ascii_word_is_split_by_character() {
    let entries = hex_entries("é5a4");
    let texts: Vec<&str> = entries.iter().map(HexEntry::as_str).collect();
    assert_eq!(texts, vec!["0xa4", "0xé5"]);
}

#[test]
fn list_display_joins_with_comma_space() {
    let mut list = HexList::new();
    assert_eq!(list.to_string(), "[]");

    list.extend([HexEntry::new("01")]);
    assert_eq!(list.to_string(), "[0x01]");

    list.extend(hex_entries("0203"));
    assert_eq!(list.len(), 3);
    assert_eq!(
        list.entries(),
        &[HexEntry::new("01"), HexEntry::new("03"), HexEntry::new("02")]
    );
    assert_eq!(list.to_string(), "[0x01, 0x03, 0x02]");
}
