use anyhow::Result;
use tempfile::tempdir;
use tinytask_app::{Appearance, AppearanceService, FileSettingsStore, SettingsStore, DARK_MODE_KEY};

#[test]
fn dark_mode_survives_reopening_the_settings_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("tinytask").join("settings.toml");

    let mut first = AppearanceService::new(FileSettingsStore::open(&path)?)?;
    assert_eq!(first.current(), Appearance::Light);
    first.toggle()?;
    drop(first);

    let second = AppearanceService::new(FileSettingsStore::open(&path)?)?;
    assert_eq!(second.current(), Appearance::Dark);
    assert_eq!(second.settings().get_bool(DARK_MODE_KEY)?, Some(true));
    assert_eq!(second.settings().path(), path.as_path());
    Ok(())
}

#[test]
fn explicit_set_is_idempotent_on_disk() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("settings.toml");

    let mut service = AppearanceService::new(FileSettingsStore::open(&path)?)?;
    service.set(Appearance::Light)?;
    service.set(Appearance::Light)?;

    let reopened = FileSettingsStore::open(&path)?;
    assert_eq!(reopened.get_bool(DARK_MODE_KEY)?, Some(false));
    Ok(())
}
