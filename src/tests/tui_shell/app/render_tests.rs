use super::*;

#[test]
fn transcript_offset_follows_the_tail() {
    assert_eq!(transcript_offset(5, 10, 0), 0);
    assert_eq!(transcript_offset(30, 10, 0), 20);
    assert_eq!(transcript_offset(30, 10, 4), 16);
    assert_eq!(transcript_offset(30, 10, 100), 0);
}

#[test]
fn transcript_offset_handles_long_sessions() {
    let total = 200_000;
    let offset = transcript_offset(total, 40, 0);
    assert_eq!(offset, total - 40);
    assert!(offset > u16::MAX as usize);
}
