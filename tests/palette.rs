use connectors::scene::{
    AccentCycle, GLOSSY, MATTE, PALETTE_SIZE, Palette, PaletteLayout, accent_color, shuffle,
};
use connectors::utils::Color;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn full_layout_order() {
    let specs = shuffle(0, PaletteLayout::Full);
    let dark = Color::from_hex("#444").unwrap();

    assert_eq!(specs.len(), 9);
    assert!(specs[..3].iter().all(|s| s.color == dark && !s.accent));
    assert!(specs[3..6].iter().all(|s| s.color == Color::from_hex("#ffffff").unwrap() && !s.accent));
    assert!(specs[6..].iter().all(|s| s.color == accent_color(0) && s.accent));

    let roughness: Vec<f32> = specs.iter().map(|s| s.roughness).collect();
    assert_eq!(
        roughness,
        [GLOSSY, MATTE, MATTE, GLOSSY, MATTE, GLOSSY, GLOSSY, MATTE, GLOSSY]
    );
}

#[test]
fn dark_only_layout() {
    let specs = shuffle(2, PaletteLayout::DarkOnly);
    assert_eq!(specs.len(), 3);
    assert!(specs.iter().all(|s| !s.accent));
}

#[test]
fn accent_index_wraps() {
    assert_eq!(accent_color(5), accent_color(1));
    assert_eq!(shuffle(4, PaletteLayout::Full), shuffle(0, PaletteLayout::Full));
    assert_eq!(AccentCycle::new(7).index(), 3);
}

#[test]
fn accent_colors() {
    let expected = ["#4060ff", "#20ffa0", "#ff4060", "#ffcc00"];
    for (i, hex) in expected.iter().enumerate() {
        assert_eq!(accent_color(i), Color::from_hex(hex).unwrap());
    }
}

#[test]
fn click_cycles_accent() {
    let mut cycle = AccentCycle::new(3);
    assert_eq!(cycle.advance(), 0);
    assert_eq!(cycle.color(), accent_color(0));

    for i in 1..=PALETTE_SIZE {
        assert_eq!(cycle.advance(), i % PALETTE_SIZE);
    }
}

#[test]
fn accent_only_changes_accent_slots() {
    let before = shuffle(0, PaletteLayout::Full);
    let after = shuffle(1, PaletteLayout::Full);

    for (a, b) in before.iter().zip(&after) {
        assert_eq!(a.roughness, b.roughness);
        assert_eq!(a.accent, b.accent);
        if !a.accent {
            assert_eq!(a.color, b.color);
        }
    }
}

#[test]
fn permutation_is_stable_across_accents() {
    let mut rng = StdRng::seed_from_u64(42);
    let palette = Palette::permuted(PaletteLayout::Full, &mut rng);

    let mut order = palette.order().to_vec();
    order.sort_unstable();
    assert_eq!(order, (0..9).collect::<Vec<_>>());

    let first = palette.derive(0);
    let second = palette.derive(1);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.roughness, b.roughness);
        assert_eq!(a.accent, b.accent);
    }
}

#[test]
fn unpermuted_palette_matches_shuffle() {
    let palette = Palette::new(PaletteLayout::Full);
    assert_eq!(palette.derive(2), shuffle(2, PaletteLayout::Full));
}

#[test]
fn full_cycle_returns_to_start() {
    let mut cycle = AccentCycle::new(2);
    for _ in 0..PALETTE_SIZE {
        cycle.advance();
    }
    assert_eq!(cycle.index(), 2);
}
