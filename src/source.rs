//! Attribution of the application that originated a share intent.
//!
//! The sending app can be uninstalled between delivery and lookup, so every
//! step here is best-effort: a miss anywhere omits `source` from the
//! payload and is never surfaced as an error.

use crate::models::SourceApp;
use crate::verbosity;

/// Referrer scheme the OS uses for application identities.
const APP_REFERRER_SCHEME: &str = "android-app";

/// Display name and icon handle of an installed package.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationInfo {
    pub label: String,
    pub icon: String,
}

/// OS identity and package-registry lookups backing attribution.
///
/// The mobile side routes these through the native bridge; the desktop stub
/// resolves nothing; tests substitute an in-memory fake.
pub trait SourceLookup {
    /// Packages associated with the calling identity. Used as the fallback
    /// when the intent carries no referrer.
    fn calling_packages(&self) -> Vec<String>;

    /// Registry lookup for a package's display name and icon handle. `None`
    /// when the package is not installed or the registry call fails.
    fn application_info(&self, package: &str) -> Option<ApplicationInfo>;
}

/// Extract the application identifier from a referrer URI. Only referrers
/// with the application-identity scheme qualify; the host component is the
/// package name.
fn package_from_referrer(referrer: &str) -> Option<&str> {
    let rest = referrer
        .strip_prefix(APP_REFERRER_SCHEME)?
        .strip_prefix("://")?;
    let host = rest.split('/').next().unwrap_or(rest);
    (!host.is_empty()).then_some(host)
}

/// Resolve the sending application: referrer first, calling identity as the
/// fallback, then the registry for display details.
pub fn resolve_source<L: SourceLookup>(referrer: Option<&str>, lookup: &L) -> Option<SourceApp> {
    let package = match referrer.and_then(package_from_referrer) {
        Some(package) => {
            if verbosity::verbose() {
                log::debug!("openwith: source package from referrer: {package}");
            }
            Some(package.to_owned())
        }
        None => {
            let package = lookup.calling_packages().into_iter().next();
            if verbosity::verbose() {
                if let Some(ref package) = package {
                    log::debug!("openwith: source package from calling identity: {package}");
                }
            }
            package
        }
    };

    let Some(package) = package else {
        if verbosity::verbose() {
            log::debug!("openwith: could not determine source package");
        }
        return None;
    };

    let info = lookup.application_info(&package)?;
    Some(SourceApp {
        package_name: package,
        application_name: info.label,
        application_icon: info.icon,
    })
}


#[cfg(test)]
mod tests {
    use super::testing::FakeLookup;
    use super::*;

    #[test]
    fn test_referrer_host_is_the_package() {
        assert_eq!(
            package_from_referrer("android-app://com.example.sender"),
            Some("com.example.sender")
        );
        assert_eq!(
            package_from_referrer("android-app://com.example.sender/extra/path"),
            Some("com.example.sender")
        );
    }

    #[test]
    fn test_non_app_referrers_are_ignored() {
        assert_eq!(package_from_referrer("https://com.example.sender"), None);
        assert_eq!(package_from_referrer("android-app://"), None);
        assert_eq!(package_from_referrer("android-app"), None);
    }

    #[test]
    fn test_resolves_via_referrer() {
        let lookup = FakeLookup::with_installed("com.example.sender", "Sender", "42");
        let source =
            resolve_source(Some("android-app://com.example.sender"), &lookup).unwrap();
        assert_eq!(source.package_name, "com.example.sender");
        assert_eq!(source.application_name, "Sender");
        assert_eq!(source.application_icon, "42");
    }

    #[test]
    fn test_falls_back_to_calling_identity() {
        let mut lookup = FakeLookup::with_installed("com.example.caller", "Caller", "7");
        lookup.calling = vec!["com.example.caller".into(), "com.example.other".into()];
        let source = resolve_source(None, &lookup).unwrap();
        assert_eq!(source.package_name, "com.example.caller");
    }

    #[test]
    fn test_bad_referrer_scheme_falls_back() {
        let mut lookup = FakeLookup::with_installed("com.example.caller", "Caller", "7");
        lookup.calling = vec!["com.example.caller".into()];
        let source = resolve_source(Some("https://example.com"), &lookup).unwrap();
        assert_eq!(source.package_name, "com.example.caller");
    }

    #[test]
    fn test_uninstalled_package_resolves_to_nothing() {
        let lookup = FakeLookup::default();
        assert_eq!(
            resolve_source(Some("android-app://com.example.gone"), &lookup),
            None
        );
    }

    #[test]
    fn test_no_referrer_and_no_caller_resolves_to_nothing() {
        assert_eq!(resolve_source(None, &FakeLookup::default()), None);
    }
}
