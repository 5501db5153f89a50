use super::Config;
use crate::error::WatchError;
use crate::resolve::{Resolution, DEFAULT_FOCUS_RATIO};
use crate::watcher::Options;

fn defaults() -> Config {
    facet_toml::from_str::<Config>("").unwrap()
}

#[test]
fn test_defaults_cover_every_option() {
    let cfg = defaults();

    assert!(cfg.throttle);
    assert_eq!(cfg.resolution, "height");
    assert_eq!(cfg.top_down_weight, 0);
    assert_eq!(cfg.view_margin_top, 0);
    assert_eq!(cfg.view_margin_bottom, 0);
    assert_eq!(cfg.sticky_offset_top, 5);
    assert_eq!(cfg.sticky_offset_bottom, 5);
    assert!(!cfg.clamp);
    assert!((cfg.focus_ratio - DEFAULT_FOCUS_RATIO).abs() < 1e-12);
    assert!((cfg.focus_offset - 0.0).abs() < 1e-12);
    assert_eq!(cfg.menu_width, 32);
}

#[test]
fn test_toml_overrides_defaults() {
    let cfg = facet_toml::from_str::<Config>(
        "throttle = false\nresolution = \"focus-line\"\nsticky_offset_top = 9\n",
    )
    .unwrap();

    assert!(!cfg.throttle);
    assert_eq!(cfg.resolution, "focus-line");
    assert_eq!(cfg.sticky_offset_top, 9);
    assert_eq!(cfg.sticky_offset_bottom, 5, "unrelated defaults survive");
}

#[test]
fn test_options_carry_the_parsed_resolution_mode() {
    let mut cfg = defaults();
    cfg.resolution = "none".to_string();
    cfg.clamp = true;
    cfg.view_margin_top = 12;

    let options: Options<usize> = cfg.options().unwrap();

    assert!(matches!(options.resolution, Resolution::Passthrough));
    assert!(options.clamp);
    assert_eq!(options.view_margin_top, 12);
    assert!(options.scroller.is_none(), "the scroller stays auto-guessed");
}

#[test]
fn test_unknown_resolution_mode_surfaces_at_conversion() {
    let mut cfg = defaults();
    cfg.resolution = "sideways".to_string();

    let result = cfg.options::<usize>();
    assert!(matches!(result, Err(WatchError::UnknownResolution(_))));
}
