/// Application identity reported by the health endpoint.
///
/// Build one with the [`app_info!`](crate::app_info) macro so the name and
/// version come from the binary's own Cargo metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl AppInfo {
    pub fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }
}

/// Capture the calling crate's package name and version as an [`AppInfo`].
///
/// Must be invoked from the binary crate, not from a library, so the
/// embedded metadata is the application's.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    };
}
