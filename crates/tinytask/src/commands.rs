use std::io::Write;

use anyhow::{Context, Result};
use tinytask_app::{Appearance, AppearanceService, SettingsStore};

use crate::ThemeAction;

/// Apply a `theme` subcommand and report the resulting appearance.
pub fn run_theme<S: SettingsStore>(
    service: &mut AppearanceService<S>,
    action: ThemeAction,
    out: &mut impl Write,
) -> Result<()> {
    let appearance = match action {
        ThemeAction::Show => {
            writeln!(out, "{}", service.current())?;
            return Ok(());
        }
        ThemeAction::Light => service.set(Appearance::Light),
        ThemeAction::Dark => service.set(Appearance::Dark),
        ThemeAction::Toggle => service.toggle(),
    }
    .context("Failed to save appearance")?;

    writeln!(out, "✓ Appearance set to {appearance}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinytask_app::{DARK_MODE_KEY, MemorySettingsStore};

    fn service(dark: bool) -> AppearanceService<MemorySettingsStore> {
        let store = MemorySettingsStore::new().with_bool(DARK_MODE_KEY, dark);
        match AppearanceService::new(store) {
            Ok(service) => service,
            Err(err) => panic!("memory settings should load: {err}"),
        }
    }

    fn run(service: &mut AppearanceService<MemorySettingsStore>, action: ThemeAction) -> String {
        let mut out = Vec::new();
        if let Err(err) = run_theme(service, action, &mut out) {
            panic!("theme command failed: {err:#}");
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    #[test]
    fn show_prints_current_appearance() {
        let mut service = service(true);
        assert_eq!(run(&mut service, ThemeAction::Show), "dark\n");
    }

    #[test]
    fn explicit_choice_is_persisted() -> Result<()> {
        let mut service = service(false);
        assert_eq!(run(&mut service, ThemeAction::Dark), "✓ Appearance set to dark\n");
        assert_eq!(service.settings().get_bool(DARK_MODE_KEY)?, Some(true));

        run(&mut service, ThemeAction::Light);
        assert_eq!(service.settings().get_bool(DARK_MODE_KEY)?, Some(false));
        Ok(())
    }

    #[test]
    fn toggle_flips_stored_value() {
        let mut service = service(true);
        run(&mut service, ThemeAction::Toggle);
        assert_eq!(service.current(), Appearance::Light);
    }
}
