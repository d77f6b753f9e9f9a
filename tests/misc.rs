use condict_uca::compare_tiebreak;

#[test]
fn capitalization_does_not_override_letter_order() {
    let a = "Američane";
    let b = "ameriške";
    assert!(compare_tiebreak(a.as_bytes(), b.as_bytes()) < 0);
}

#[test]
fn empty_string_is_the_smallest_input() {
    assert_eq!(compare_tiebreak(b"", b""), 0);
    assert!(compare_tiebreak(b"", b"a") < 0);
}
