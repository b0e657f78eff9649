use testkit::{write_loading_bar, LoadingBar};

fn render(bar: &LoadingBar) -> String {
    let mut out = Vec::new();
    write_loading_bar(&mut out, bar).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_percent_only() {
    assert_eq!(render(&LoadingBar::new(0.5)), "\r 50.0%");
}

#[test]
fn test_full_bar() {
    let bar = LoadingBar::new(0.5)
        .with_title("Loading")
        .with_bar_width(12)
        .with_counts(5, 10);
    assert_eq!(render(&bar), "\rLoading: [=====>    ]  50.0% (5/10)");
}

#[test]
fn test_bar_edges() {
    let empty = LoadingBar::new(0.0).with_bar_width(6);
    assert_eq!(render(&empty), "\r[>   ]   0.0%");

    let done = LoadingBar::new(1.0).with_bar_width(6);
    assert_eq!(render(&done), "\r[====] 100.0%");
}

#[test]
fn test_narrow_bar_is_skipped() {
    let bar = LoadingBar::new(0.25).with_bar_width(2);
    assert_eq!(render(&bar), "\r 25.0%");
}

#[test]
fn test_out_of_range_percent_is_clamped() {
    assert_eq!(render(&LoadingBar::new(1.7)), "\r100.0%");
    assert_eq!(render(&LoadingBar::new(-0.3)), "\r  0.0%");
    assert_eq!(render(&LoadingBar::new(f32::NAN)), "\r  0.0%");
}
