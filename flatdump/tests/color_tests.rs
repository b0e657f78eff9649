use flatdump::{heatmap, hsv_to_rgb, random_color, rgb_to_hsv, Color, ColorAlpha, ColorHsv};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_primary_colors_to_hsv() {
    assert_eq!(rgb_to_hsv(Color::new(255, 0, 0)), ColorHsv::new(0, 255, 255));
    assert_eq!(rgb_to_hsv(Color::new(0, 255, 0)), ColorHsv::new(85, 255, 255));
    assert_eq!(rgb_to_hsv(Color::new(0, 0, 255)), ColorHsv::new(171, 255, 255));
}

#[test]
fn test_grays_have_no_saturation() {
    assert_eq!(rgb_to_hsv(Color::new(0, 0, 0)), ColorHsv::new(0, 0, 0));
    assert_eq!(rgb_to_hsv(Color::new(100, 100, 100)), ColorHsv::new(0, 0, 100));
    assert_eq!(hsv_to_rgb(ColorHsv::new(200, 0, 77)), Color::new(77, 77, 77));
}

#[test]
fn test_hsv_to_rgb_is_approximate() {
    assert_eq!(hsv_to_rgb(ColorHsv::new(0, 255, 255)), Color::new(255, 0, 0));
    assert_eq!(hsv_to_rgb(ColorHsv::new(85, 255, 255)), Color::new(3, 255, 0));
    assert_eq!(hsv_to_rgb(ColorHsv::new(171, 255, 255)), Color::new(0, 3, 255));
}

#[test]
fn test_round_trip_stays_close() {
    for &(r, g, b) in &[(200, 40, 10), (10, 180, 90), (60, 60, 220), (255, 255, 0)] {
        let color = Color::new(r, g, b);
        let back = hsv_to_rgb(rgb_to_hsv(color));
        for (original, converted) in [(color.r, back.r), (color.g, back.g), (color.b, back.b)] {
            assert!(
                original.abs_diff(converted) <= 12,
                "{color} came back as {back}"
            );
        }
    }
}

#[test]
fn test_heatmap_stops() {
    assert_eq!(heatmap(-0.5), Color::new(0, 0, 0));
    assert_eq!(heatmap(0.0), Color::new(0, 0, 0));
    assert_eq!(heatmap(0.5), Color::new(0, 255, 0));
    assert_eq!(heatmap(1.0), Color::new(255, 255, 255));
    assert_eq!(heatmap(3.0), Color::new(255, 255, 255));
    assert_eq!(heatmap(f32::NAN), Color::new(0, 0, 0));
}

#[test]
fn test_heatmap_interpolates() {
    assert_eq!(heatmap(0.25), Color::new(0, 127, 255));
}

#[test]
fn test_lerp_alpha() {
    let from = ColorAlpha::new(0, 0, 0, 0);
    let to = ColorAlpha::new(255, 255, 255, 255);
    assert_eq!(from.lerp(to, 0.5), ColorAlpha::new(127, 127, 127, 127));
}

#[test]
fn test_float_packing_round_trip() {
    let color = ColorAlpha::new(12, 34, 56, 78);
    let packed = color.to_f32();
    assert_eq!(packed.to_bits().to_ne_bytes(), [12, 34, 56, 78]);
    assert_eq!(ColorAlpha::from_f32(packed), color);
}

#[test]
fn test_display() {
    assert_eq!(Color::new(1, 2, 3).to_string(), "(1, 2, 3)");
    assert_eq!(ColorAlpha::new(1, 2, 3, 4).to_string(), "(1, 2, 3, 4)");
    assert_eq!(ColorHsv::new(9, 8, 7).to_string(), "(9, 8, 7)");
    assert_eq!(Color::from(ColorAlpha::new(5, 6, 7, 8)), Color::new(5, 6, 7));
}

#[test]
fn test_random_color_stays_on_the_line() {
    let from = Color::new(0, 50, 200);
    let to = Color::new(200, 50, 0);
    for _ in 0..200 {
        let c = random_color(from, to);
        assert_eq!(c.g, 50);
        // The channels move by the same fraction in opposite directions
        assert!(u16::from(c.r) + u16::from(c.b) >= 199);
        assert!(u16::from(c.r) + u16::from(c.b) <= 200);
    }
}

#[test]
fn test_random_between_is_reproducible() {
    let from = ColorAlpha::new(0, 0, 0, 0);
    let to = ColorAlpha::WHITE;
    let mut a = StdRng::seed_from_u64(11);
    let mut b = StdRng::seed_from_u64(11);
    let first: Vec<_> = (0..16).map(|_| from.random_between(to, &mut a)).collect();
    let second: Vec<_> = (0..16).map(|_| from.random_between(to, &mut b)).collect();
    assert_eq!(first, second);
    assert!(first.iter().all(|c| c.r == c.g && c.g == c.b && c.b == c.a));
    assert!(first.iter().any(|c| c.r != first[0].r));
}

#[test]
fn test_random_between_same_color() {
    let teal = Color::new(0, 128, 128);
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(teal.random_between(teal, &mut rng), teal);
}
