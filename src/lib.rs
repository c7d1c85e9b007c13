use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

pub use models::*;

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;

mod commands;
mod error;
mod intent;
mod models;
mod normalize;
mod source;
mod verbosity;

pub use error::{Error, Result};
pub use intent::{ClipEntry, ExtrasBag, ExtrasValue, IntentMessage};
pub use normalize::{is_share_intent, process_intent, ACTION_SEND, ACTION_SEND_MULTIPLE};
pub use source::{ApplicationInfo, SourceLookup};

#[cfg(desktop)]
use desktop::OpenWith;
#[cfg(mobile)]
use mobile::OpenWith;

/// Event name under which normalized share payloads reach the web layer.
/// Delivery goes to every registered listener, foregrounded or not.
pub const EVENT_RECEIVED_FILES: &str = "receivedFiles";

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the openwith APIs.
pub trait OpenWithExt<R: Runtime> {
    fn openwith(&self) -> &OpenWith<R>;
}

impl<R: Runtime, T: Manager<R>> crate::OpenWithExt<R> for T {
    fn openwith(&self) -> &OpenWith<R> {
        self.state::<OpenWith<R>>().inner()
    }
}

/// Initializes the openwith plugin.
///
/// The plugin receives share intents forwarded by the native layer and
/// relays them to the web layer as `receivedFiles` events:
/// - the classifier gates on the two share actions
/// - extras are converted variant by variant, then the well-known fields
///   are overlaid under their web-facing names
/// - multi-item clips and source attribution ride along when present
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("openwith")
        .invoke_handler(tauri::generate_handler![
            commands::initialize,
            commands::set_verbosity,
            commands::get_verbosity,
            commands::get_pending_payload,
            commands::clear_pending_payload,
        ])
        .setup(|app, api| {
            #[cfg(mobile)]
            let openwith = mobile::init(app, api)?;
            #[cfg(desktop)]
            let openwith = desktop::init(app, api)?;
            app.manage(openwith);
            Ok(())
        })
        .on_event(|app, event| {
            match event {
                // A share delivered to a running app re-enters through
                // resume.
                tauri::RunEvent::Resumed => {
                    if let Err(e) = app.openwith().drain_native_intent(app) {
                        log::error!("openwith: failed to drain share intent on resume: {e}");
                    }
                }
                _ => {}
            }
        })
        .build()
}
