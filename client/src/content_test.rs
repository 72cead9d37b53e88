use super::*;

#[test]
fn scene_url_requires_https() {
    assert_eq!(resolve_scene_url(Some("https://scene.example/abc")), Some("https://scene.example/abc"));
    assert_eq!(resolve_scene_url(Some("  https://scene.example/abc  ")), Some("https://scene.example/abc"));
    assert_eq!(resolve_scene_url(Some("http://scene.example/abc")), None);
    assert_eq!(resolve_scene_url(Some("javascript:alert(1)")), None);
    assert_eq!(resolve_scene_url(Some("https://")), None);
    assert_eq!(resolve_scene_url(Some("")), None);
    assert_eq!(resolve_scene_url(None), None);
}

#[test]
fn year_parses_configured_value() {
    assert_eq!(resolve_year(Some("2031")), 2031);
    assert_eq!(resolve_year(Some(" 2027 ")), 2027);
}

#[test]
fn year_falls_back_to_default() {
    assert_eq!(resolve_year(None), DEFAULT_COPYRIGHT_YEAR);
    assert_eq!(resolve_year(Some("")), DEFAULT_COPYRIGHT_YEAR);
    assert_eq!(resolve_year(Some("next year")), DEFAULT_COPYRIGHT_YEAR);
    assert_eq!(resolve_year(Some("99")), DEFAULT_COPYRIGHT_YEAR);
}
