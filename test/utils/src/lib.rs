use std::env;
use std::path::PathBuf;

/// Returns a unique directory path under the system temp dir. Callers own
/// creation and cleanup.
pub fn temp_dir(prefix: &str) -> PathBuf {
    return env::temp_dir().join(format!(
        "intelliprep-test-{prefix}-{}",
        uuid::Uuid::new_v4()
    ));
}
