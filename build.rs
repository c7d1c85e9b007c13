const COMMANDS: &[&str] = &[
    "initialize",
    "set_verbosity",
    "get_verbosity",
    "get_pending_payload",
    "clear_pending_payload",
];

fn main() {
    tauri_plugin::Builder::new(COMMANDS)
        // Note: the Android half of the bridge ships separately; iOS uses
        // Swift Package Manager, which Xcode picks up without .ios_path().
        .build();
}
