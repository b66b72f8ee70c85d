use crate::column::raw_to_render_column;

#[test]
fn test_zero_maps_to_zero() {
    assert_eq!(raw_to_render_column("", 0), 0);
    assert_eq!(raw_to_render_column("abc", 0), 0);
    assert_eq!(raw_to_render_column("\t\t", 0), 0);
}

#[test]
fn test_ascii_is_identity() {
    let line = "fn main() {}";
    for cx in 0..=line.len() {
        assert_eq!(raw_to_render_column(line, cx), cx);
    }
}

#[test]
fn test_tab_expansion() {
    // "\ta\t": tab to 8, 'a' to 9, tab to 16
    let line = "\ta\t";
    assert_eq!(raw_to_render_column(line, 0), 0);
    assert_eq!(raw_to_render_column(line, 1), 8);
    assert_eq!(raw_to_render_column(line, 2), 9);
    assert_eq!(raw_to_render_column(line, 3), 16);
}

#[test]
fn test_tab_mid_line() {
    // "ab\tc": tab at render column 2 jumps to 8
    let line = "ab\tc";
    assert_eq!(raw_to_render_column(line, 2), 2);
    assert_eq!(raw_to_render_column(line, 3), 8);
    assert_eq!(raw_to_render_column(line, 4), 9);
}

#[test]
fn test_non_ascii_even_boundary() {
    // Five katakana code points, each aligned to an even column
    let line = "ギットハブ";
    assert_eq!(raw_to_render_column(line, 0), 0);
    assert_eq!(raw_to_render_column(line, 1), 2);
    assert_eq!(raw_to_render_column(line, 2), 4);
    assert_eq!(raw_to_render_column(line, 5), 10);
}

#[test]
fn test_non_ascii_after_ascii() {
    // 'a' lands at 1, the following wide code point rounds up to 2
    let line = "aé";
    assert_eq!(raw_to_render_column(line, 1), 1);
    assert_eq!(raw_to_render_column(line, 2), 2);
}

#[test]
fn test_monotonic_in_cx() {
    let lines = ["", "plain", "\tmixed\ttabs", "ギットハブ", "a\té b"];
    for line in lines {
        let n = line.chars().count();
        let mut prev = raw_to_render_column(line, 0);
        assert_eq!(prev, 0);
        for cx in 1..=n {
            let rx = raw_to_render_column(line, cx);
            assert!(rx >= prev, "rx regressed at cx={} in {:?}", cx, line);
            prev = rx;
        }
    }
}

#[test]
fn test_cx_past_line_end_saturates() {
    // Iteration stops at the last code point
    assert_eq!(raw_to_render_column("ab", 10), 2);
}
