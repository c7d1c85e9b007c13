use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Runtime};

use crate::intent::IntentMessage;
use crate::models::SharedFilesEvent;
use crate::Result;

/// Initialize the desktop stub (share intents are mobile-only).
pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
) -> crate::Result<OpenWith<R>> {
    Ok(OpenWith(app.clone()))
}

/// Desktop stub: no share sheet exists here, so nothing ever pends. The
/// plugin still loads so cross-platform frontends can call it
/// unconditionally.
pub struct OpenWith<R: Runtime>(AppHandle<R>);

impl<R: Runtime> OpenWith<R> {
    pub fn drain_native_intent(&self, _app: &AppHandle<R>) -> Result<()> {
        Ok(())
    }

    pub fn handle_intent(&self, _app: &AppHandle<R>, _intent: &IntentMessage) -> Result<()> {
        Ok(())
    }

    pub fn pending_payload(&self) -> Option<SharedFilesEvent> {
        None
    }

    pub fn clear_pending_payload(&self) {}
}
