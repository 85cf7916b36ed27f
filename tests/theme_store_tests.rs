use theme_toggle::config::ThemeConfig;
use theme_toggle::platform::memory::{MemoryColorScheme, MemoryMarker, MemoryPlatform, MemoryStorage};
use theme_toggle::platform::Platform;
use theme_toggle::theme::{ResolvedTheme, ThemePreference, ThemeState, ThemeStore};

fn store_with(env: &MemoryPlatform, key: &str) -> ThemeStore {
    ThemeStore::initialize(ThemeConfig::new(ThemePreference::System, key), env.platform())
}

#[test]
fn test_initialize_system_default_with_light_os() {
    let env = MemoryPlatform::new(false);
    let store = store_with(&env, "theme");

    assert_eq!(
        store.state(),
        ThemeState {
            theme: ThemePreference::System,
            resolved_theme: ResolvedTheme::Light,
        }
    );
    assert_eq!(env.marker.current(), Some(ResolvedTheme::Light));
}

#[test]
fn test_set_dark_persists_and_marks() {
    let env = MemoryPlatform::new(false);
    let store = store_with(&env, "theme");

    store.set_theme(ThemePreference::Dark);

    assert_eq!(
        store.state(),
        ThemeState {
            theme: ThemePreference::Dark,
            resolved_theme: ResolvedTheme::Dark,
        }
    );
    assert_eq!(env.storage.get("theme"), Some("dark".to_string()));
    assert_eq!(env.marker.current(), Some(ResolvedTheme::Dark));
}

#[test]
fn test_set_theme_reports_each_preference() {
    for prefers_dark in [false, true] {
        let env = MemoryPlatform::new(prefers_dark);
        let store = store_with(&env, "theme");
        for preference in ThemePreference::ALL {
            store.set_theme(preference);
            assert_eq!(store.theme(), preference);
            assert_eq!(env.marker.current(), Some(store.resolved_theme()));
        }
    }
}

#[test]
fn test_system_resolves_from_os_query() {
    let env = MemoryPlatform::new(true);
    let store = store_with(&env, "theme");
    assert_eq!(store.resolved_theme(), ResolvedTheme::Dark);

    store.set_theme(ThemePreference::Light);
    env.color_scheme.set_prefers_dark(false);
    env.color_scheme.set_prefers_dark(true);
    store.set_theme(ThemePreference::System);
    assert_eq!(store.resolved_theme(), ResolvedTheme::Dark);
}

#[test]
fn test_set_theme_is_idempotent() {
    let env = MemoryPlatform::new(true);
    let store = store_with(&env, "theme");

    for preference in ThemePreference::ALL {
        store.set_theme(preference);
        let once = store.state();
        let stored_once = env.storage.get("theme");
        store.set_theme(preference);
        assert_eq!(store.state(), once);
        assert_eq!(env.storage.get("theme"), stored_once);
        assert_eq!(env.marker.current(), Some(once.resolved_theme));
    }
}

#[test]
fn test_persisted_preference_survives_reinitialize() {
    for preference in ThemePreference::ALL {
        let env = MemoryPlatform::new(false);
        let first = store_with(&env, "nextjs-theme");
        first.set_theme(preference);
        drop(first);

        let second = store_with(&env, "nextjs-theme");
        assert_eq!(second.theme(), preference);
    }
}

#[test]
fn test_storage_key_isolates_preferences() {
    let env = MemoryPlatform::new(false);
    store_with(&env, "first").set_theme(ThemePreference::Dark);

    let other = store_with(&env, "second");
    assert_eq!(other.theme(), ThemePreference::System);
    assert_eq!(env.storage.get("second"), None);
}

#[test]
fn test_invalid_stored_value_falls_back_to_default() {
    let env = MemoryPlatform::new(false);
    env.storage.insert("theme", "purple");

    let config = ThemeConfig::new(ThemePreference::Dark, "theme");
    let store = ThemeStore::initialize(config, env.platform());
    assert_eq!(store.theme(), ThemePreference::Dark);
    assert_eq!(store.resolved_theme(), ResolvedTheme::Dark);
    // The bad value is left alone until the user picks a theme.
    assert_eq!(env.storage.get("theme"), Some("purple".to_string()));
}

#[test]
fn test_unavailable_storage_falls_back_and_still_switches() {
    let env = MemoryPlatform {
        storage: MemoryStorage::unavailable(),
        color_scheme: MemoryColorScheme::new(true),
        marker: MemoryMarker::new(),
    };
    let config = ThemeConfig::new(ThemePreference::Light, "theme");
    let store = ThemeStore::initialize(config, env.platform());
    assert_eq!(store.theme(), ThemePreference::Light);

    store.set_theme(ThemePreference::System);
    assert_eq!(store.theme(), ThemePreference::System);
    assert_eq!(store.resolved_theme(), ResolvedTheme::Dark);
    assert_eq!(env.marker.current(), Some(ResolvedTheme::Dark));
}

#[test]
fn test_os_change_updates_resolved_without_persisting() {
    let env = MemoryPlatform::new(false);
    let store = store_with(&env, "theme");
    store.set_theme(ThemePreference::System);
    let writes = env.storage.write_count();

    env.color_scheme.set_prefers_dark(true);

    assert_eq!(
        store.state(),
        ThemeState {
            theme: ThemePreference::System,
            resolved_theme: ResolvedTheme::Dark,
        }
    );
    assert_eq!(env.marker.current(), Some(ResolvedTheme::Dark));
    assert_eq!(env.storage.write_count(), writes);
    assert_eq!(env.storage.get("theme"), Some("system".to_string()));
}

#[test]
fn test_os_change_after_switching_back_to_system() {
    let env = MemoryPlatform::new(false);
    let store = store_with(&env, "theme");

    store.set_theme(ThemePreference::Dark);
    env.color_scheme.set_prefers_dark(true);
    assert_eq!(store.resolved_theme(), ResolvedTheme::Dark);

    store.set_theme(ThemePreference::System);
    env.color_scheme.set_prefers_dark(false);
    assert_eq!(store.resolved_theme(), ResolvedTheme::Light);
    assert_eq!(env.marker.current(), Some(ResolvedTheme::Light));
}

#[test]
fn test_resolved_theme_never_system_across_sequences() {
    let env = MemoryPlatform::new(false);
    let store = store_with(&env, "theme");
    let sequence = [
        ThemePreference::System,
        ThemePreference::Dark,
        ThemePreference::System,
        ThemePreference::Light,
        ThemePreference::Light,
        ThemePreference::System,
    ];

    for (i, preference) in sequence.into_iter().enumerate() {
        store.set_theme(preference);
        env.color_scheme.set_prefers_dark(i % 2 == 0);
        let state = store.state();
        // Every state carries a concrete theme and the marker agrees with it.
        assert!(matches!(
            state.resolved_theme,
            ResolvedTheme::Light | ResolvedTheme::Dark
        ));
        assert_eq!(env.marker.current(), Some(state.resolved_theme));
        if state.theme != ThemePreference::System {
            assert_eq!(ThemePreference::from(state.resolved_theme), state.theme);
        }
    }
}

#[test]
fn test_unsupported_os_signal_treated_as_light() {
    let platform = Platform::new(
        MemoryStorage::new(),
        MemoryColorScheme::unsupported(),
        MemoryMarker::new(),
    );
    let store = ThemeStore::initialize(ThemeConfig::default(), platform);
    assert_eq!(store.resolved_theme(), ResolvedTheme::Light);
    assert!(!store.is_tracking_system());
}

#[test]
fn test_dispose_stops_following_os() {
    let env = MemoryPlatform::new(false);
    let store = store_with(&env, "theme");
    store.dispose();

    env.color_scheme.set_prefers_dark(true);
    assert_eq!(store.resolved_theme(), ResolvedTheme::Light);
    assert_eq!(env.color_scheme.listener_count(), 0);

    // Explicit changes still work after teardown.
    store.set_theme(ThemePreference::Dark);
    assert_eq!(store.resolved_theme(), ResolvedTheme::Dark);
}
