use lume_animation::{AnimationController, Easing, Tween};
use lume_core::Color;
use lume_theme::{
    AccessibilitySignals, Brightness, ColorToken, StyleTable, ThemeManager, ThemeMode, ThemeState,
};
use lume_widgets::{AnimatedBuilder, BrandLogo, LogoSize, LogoVariant, Widget};
use std::time::Duration;

#[test]
fn logo_uses_brand_colors_in_normal_sheets() {
    let table = StyleTable::builtin();
    let sheet = table.sheet(Brightness::Light, false);
    let layout = BrandLogo::new().build(sheet);

    assert_eq!(layout.variant, LogoVariant::FullColor);
    assert_eq!(layout.mark_color, sheet.color(ColorToken::Primary));
    assert_eq!(layout.glyph_color, sheet.color(ColorToken::OnPrimary));
    assert_eq!(layout.mark_size, 48.0);
    assert_eq!(layout.corner_radius, sheet.radii.lg);
}

#[test]
fn high_contrast_forces_monochrome_logo() {
    let table = StyleTable::builtin();
    let sheet = table.sheet(Brightness::Dark, true);
    let layout = BrandLogo::new()
        .variant(LogoVariant::FullColor)
        .size(LogoSize::Large)
        .resolve(sheet);

    assert_eq!(layout.variant, LogoVariant::Monochrome);
    assert_eq!(layout.mark_color, Color::WHITE);
    assert_eq!(layout.glyph_color, Color::BLACK);
    assert_eq!(layout.corner_radius, sheet.radii.lg * 2.0);
}

#[test]
fn wordmark_scales_with_the_mark() {
    let table = StyleTable::builtin();
    let sheet = table.sheet(Brightness::Light, false);

    let small = BrandLogo::new().size(LogoSize::Small).resolve(sheet);
    let large = BrandLogo::new().size(LogoSize::Large).resolve(sheet);
    let (small_word, large_word) = (small.wordmark.clone().unwrap(), large.wordmark.clone().unwrap());

    assert_eq!(small_word.text, "Lume");
    assert!(large_word.style.size > small_word.style.size);
    assert!(large.estimated_width() > small.estimated_width());

    let mark = BrandLogo::new().mark_only().resolve(sheet);
    assert!(mark.wordmark.is_none());
    assert_eq!(mark.estimated_width(), mark.mark_size);
}

#[test]
fn logo_follows_accessibility_updates() {
    let mut manager = ThemeManager::new(ThemeState::default().with_mode(ThemeMode::Light));
    let logo = BrandLogo::new().wordmark("Acme");

    assert_eq!(logo.build(&manager.style_sheet()).variant, LogoVariant::FullColor);

    manager.update_from_system(&AccessibilitySignals {
        high_contrast: true,
        ..Default::default()
    });
    let layout = logo.build(&manager.style_sheet());
    assert_eq!(layout.variant, LogoVariant::Monochrome);
    assert_eq!(layout.wordmark.unwrap().text, "Acme");
}

#[test]
fn animated_builder_tracks_a_color_transition() {
    let light = StyleTable::builtin().sheet(Brightness::Light, false).clone();
    let dark = StyleTable::builtin().sheet(Brightness::Dark, false).clone();

    let mut controller = AnimationController::new(Duration::from_millis(200));
    let background = Tween::new(
        light.color(ColorToken::Background),
        dark.color(ColorToken::Background),
    )
    .easing(Easing::EaseInOut);
    let mut builder = AnimatedBuilder::new(move |c: &AnimationController| background.evaluate(c));

    assert_eq!(*builder.build(&controller), light.color(ColorToken::Background));

    controller.forward();
    while controller.tick(Duration::from_millis(16)) {
        builder.build(&controller);
    }
    assert_eq!(
        builder.build(&controller).to_rgba8(),
        dark.color(ColorToken::Background).to_rgba8()
    );
    assert!(builder.build_count() > 2);
}

#[test]
fn reduced_motion_transition_builds_once() {
    let mut controller = AnimationController::new(Duration::from_millis(200));
    let mut builder = AnimatedBuilder::new(|c: &AnimationController| c.value());
    builder.build(&controller);

    controller.set_reduce_motion(true);
    controller.forward();
    assert_eq!(*builder.build(&controller), 1.0);
    assert_eq!(builder.build_count(), 2);
}

#[test]
fn animated_builder_rebuilds_for_another_controller() {
    let mut a = AnimationController::new(Duration::from_millis(200));
    let mut b = AnimationController::new(Duration::from_millis(200));
    a.set_value(1.0);
    b.set_value(0.5);
    assert_eq!(a.revision(), b.revision());

    let mut builder = AnimatedBuilder::new(|c: &AnimationController| c.value());
    assert_eq!(*builder.build(&a), 1.0);
    assert_eq!(*builder.build(&b), 0.5);
    assert_eq!(*builder.build(&b), 0.5);
    assert_eq!(builder.build_count(), 2);
}
