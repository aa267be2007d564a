use lume_theme::{
    Brightness, ColorToken, FontWeight, StyleTable, ThemeMode, ThemeState, TypographyToken,
};

const APPEARANCES: [(Brightness, bool); 4] = [
    (Brightness::Light, false),
    (Brightness::Dark, false),
    (Brightness::Light, true),
    (Brightness::Dark, true),
];

#[test]
fn sheets_match_their_key() {
    let table = StyleTable::builtin();
    for (brightness, high_contrast) in APPEARANCES {
        let sheet = table.sheet(brightness, high_contrast);
        assert_eq!(sheet.brightness, brightness);
        assert_eq!(sheet.high_contrast, high_contrast);
    }
}

#[test]
fn body_text_is_readable_everywhere() {
    let table = StyleTable::builtin();
    for (brightness, high_contrast) in APPEARANCES {
        let sheet = table.sheet(brightness, high_contrast);
        let ratio = sheet
            .color(ColorToken::TextPrimary)
            .contrast_ratio(&sheet.color(ColorToken::Background));
        assert!(
            ratio >= 4.5,
            "brightness={brightness:?} high_contrast={high_contrast} ratio={ratio}"
        );
    }
}

#[test]
fn high_contrast_sheets_reach_aaa() {
    let table = StyleTable::builtin();
    for brightness in [Brightness::Light, Brightness::Dark] {
        let sheet = table.sheet(brightness, true);
        for (fg, bg) in [
            (ColorToken::TextPrimary, ColorToken::Background),
            (ColorToken::TextPrimary, ColorToken::Surface),
            (ColorToken::OnPrimary, ColorToken::Primary),
            (ColorToken::Border, ColorToken::Background),
        ] {
            let ratio = sheet.color(fg).contrast_ratio(&sheet.color(bg));
            assert!(ratio >= 7.0, "{brightness:?} {fg:?} on {bg:?}: {ratio}");
        }
    }
}

#[test]
fn high_contrast_uses_heavier_text_and_borders() {
    let table = StyleTable::builtin();
    let normal = table.sheet(Brightness::Dark, false);
    let strong = table.sheet(Brightness::Dark, true);

    assert!(strong.border_width > normal.border_width);
    assert_eq!(normal.text(TypographyToken::Body).weight, FontWeight::Regular);
    assert_eq!(strong.text(TypographyToken::Body).weight, FontWeight::Medium);
}

#[test]
fn light_and_dark_differ() {
    let table = StyleTable::builtin();
    assert_ne!(
        table.sheet(Brightness::Light, false).color(ColorToken::Background),
        table.sheet(Brightness::Dark, false).color(ColorToken::Background),
    );
}

#[test]
fn resolve_leaves_the_table_untouched() {
    let table = StyleTable::new();
    let before = table.clone();

    let state = ThemeState::default()
        .with_mode(ThemeMode::Dark)
        .with_high_contrast(true)
        .with_font_scale(1.2)
        .with_reduce_motion(true);
    let sheet = table.resolve(&state, Brightness::Light);

    assert!(sheet.high_contrast);
    assert_eq!(sheet.brightness, Brightness::Dark);
    assert_eq!(table, before);
}
