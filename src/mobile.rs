use std::sync::Mutex;

use serde::de::DeserializeOwned;
use tauri::{
    plugin::{PluginApi, PluginHandle},
    AppHandle, Emitter, Runtime,
};

use crate::intent::IntentMessage;
use crate::models::SharedFilesEvent;
use crate::normalize::{is_share_intent, process_intent};
use crate::source::{ApplicationInfo, SourceLookup};
use crate::{Result, EVENT_RECEIVED_FILES};

#[cfg(target_os = "ios")]
tauri::ios_plugin_binding!(init_plugin_openwith);

/// Initialize the mobile plugin by registering with the native layer.
pub fn init<R: Runtime, C: DeserializeOwned>(
    _app: &AppHandle<R>,
    api: PluginApi<R, C>,
) -> crate::Result<OpenWith<R>> {
    #[cfg(target_os = "android")]
    let handle = api.register_android_plugin("com.plugin.openwith", "OpenWithPlugin")?;
    #[cfg(target_os = "ios")]
    let handle = api.register_ios_plugin(init_plugin_openwith)?;
    Ok(OpenWith {
        handle,
        pending: Mutex::new(None),
    })
}

/// Access to the share-intent APIs on mobile.
pub struct OpenWith<R: Runtime> {
    handle: PluginHandle<R>,
    /// Last emitted payload, kept for listeners registered after emission.
    pending: Mutex<Option<SharedFilesEvent>>,
}

#[derive(serde::Deserialize)]
struct PendingIntentResponse {
    intent: Option<IntentMessage>,
}

#[derive(serde::Serialize)]
struct ApplicationInfoArgs<'a> {
    package: &'a str,
}

#[derive(serde::Deserialize)]
struct ApplicationInfoResponse {
    label: Option<String>,
    icon: Option<String>,
}

#[derive(serde::Deserialize)]
struct CallingPackagesResponse {
    packages: Vec<String>,
}

impl<R: Runtime> OpenWith<R> {
    /// Pull the share intent the native activity captured, if any, and relay
    /// it to the web layer. Called after frontend initialization and again
    /// on every resume.
    pub fn drain_native_intent(&self, app: &AppHandle<R>) -> Result<()> {
        let Some(intent) = self.take_pending_intent()? else {
            return Ok(());
        };
        self.handle_intent(app, &intent)
    }

    /// Normalize one intent, emit `receivedFiles`, and keep the payload for
    /// late listeners. Intents that fail the classifier are dropped.
    pub fn handle_intent(&self, app: &AppHandle<R>, intent: &IntentMessage) -> Result<()> {
        if !is_share_intent(Some(intent)) {
            log::debug!("openwith: ignoring intent with action {:?}", intent.action);
            return Ok(());
        }

        let event = process_intent(intent, self);
        app.emit(EVENT_RECEIVED_FILES, &event)?;
        *self.pending.lock().unwrap() = Some(event);
        Ok(())
    }

    pub fn pending_payload(&self) -> Option<SharedFilesEvent> {
        self.pending.lock().unwrap().clone()
    }

    pub fn clear_pending_payload(&self) {
        self.pending.lock().unwrap().take();
    }

    fn take_pending_intent(&self) -> Result<Option<IntentMessage>> {
        let response: PendingIntentResponse =
            self.handle.run_mobile_plugin("getPendingIntent", ())?;
        Ok(response.intent)
    }
}

impl<R: Runtime> SourceLookup for OpenWith<R> {
    fn calling_packages(&self) -> Vec<String> {
        match self
            .handle
            .run_mobile_plugin::<CallingPackagesResponse>("getCallingPackages", ())
        {
            Ok(response) => response.packages,
            Err(e) => {
                log::debug!("openwith: calling-package lookup failed: {e}");
                Vec::new()
            }
        }
    }

    fn application_info(&self, package: &str) -> Option<ApplicationInfo> {
        let response = self
            .handle
            .run_mobile_plugin::<ApplicationInfoResponse>(
                "getApplicationInfo",
                ApplicationInfoArgs { package },
            )
            .ok()?;
        Some(ApplicationInfo {
            label: response.label?,
            icon: response.icon?,
        })
    }
}
