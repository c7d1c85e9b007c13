use tauri::{command, AppHandle, Runtime};

use crate::models::SharedFilesEvent;
use crate::verbosity;
use crate::OpenWithExt;
use crate::Result;

/// Process any share intent the native side captured before the webview was
/// ready.
///
/// A share that launches the app arrives before the frontend can listen for
/// `receivedFiles`; the frontend calls this once after initialization to
/// drain it.
#[command]
pub(crate) async fn initialize<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    app.openwith().drain_native_intent(&app)
}

/// Set the diagnostic verbosity level (0 = quiet, >0 = verbose).
#[command]
pub(crate) async fn set_verbosity(level: i32) -> Result<()> {
    verbosity::set_level(level);
    Ok(())
}

#[command]
pub(crate) async fn get_verbosity() -> Result<i32> {
    Ok(verbosity::level())
}

/// Most recent payload, kept for listeners that registered after emission.
/// Does not consume it.
#[command]
pub(crate) async fn get_pending_payload<R: Runtime>(
    app: AppHandle<R>,
) -> Result<Option<SharedFilesEvent>> {
    Ok(app.openwith().pending_payload())
}

/// Drop the stored payload once the frontend has handled it.
#[command]
pub(crate) async fn clear_pending_payload<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    app.openwith().clear_pending_payload();
    Ok(())
}
