//! Host platform and OS version gating.
//!
//! The engine only runs against Apple's frameworks, so the host must be
//! macOS, and the LiveText level additionally needs macOS Sonoma (14.0) or
//! later. Ambient facts are read through [`PlatformProbe`] so tests can
//! substitute them without touching process-global state.

use crate::error::{OcrmacError, Result};
use crate::params::RecognitionLevel;

/// Minimum macOS major version required by the LiveText framework.
pub const LIVETEXT_MIN_MAJOR_VERSION: u32 = 14;

/// Ambient platform facts.
pub trait PlatformProbe: Send + Sync {
    /// Lowercase OS identifier, e.g. `macos`, `linux`, `windows`.
    fn os(&self) -> String;

    /// OS product version string, empty when it cannot be determined.
    fn os_version(&self) -> String;
}

/// Probe backed by the real host environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl PlatformProbe for SystemProbe {
    fn os(&self) -> String {
        std::env::consts::OS.to_string()
    }

    #[cfg(target_os = "macos")]
    fn os_version(&self) -> String {
        std::process::Command::new("sw_vers")
            .arg("-productVersion")
            .output()
            .ok()
            .and_then(|output| String::from_utf8(output.stdout).ok())
            .map(|version| version.trim().to_string())
            .unwrap_or_default()
    }

    #[cfg(not(target_os = "macos"))]
    fn os_version(&self) -> String {
        String::new()
    }
}

/// Fail fast unless the host is macOS, naming the platform that was detected.
pub fn validate_platform(probe: &dyn PlatformProbe) -> Result<()> {
    let os = probe.os();
    if os != "macos" {
        return Err(OcrmacError::UnsupportedPlatform(os));
    }
    Ok(())
}

/// Enforce the LiveText version floor.
///
/// Levels other than `LiveText` skip the check entirely, whatever the probe
/// reports.
pub fn validate_livetext_requirement(probe: &dyn PlatformProbe, level: RecognitionLevel) -> Result<()> {
    if level != RecognitionLevel::LiveText {
        return Ok(());
    }

    let version = probe.os_version();
    if version.is_empty() {
        return Err(OcrmacError::UnsupportedOsVersion(
            "Unable to determine macOS version. LiveText requires macOS Sonoma (14.0) or later.".to_string(),
        ));
    }

    match version.split('.').next().and_then(|major| major.parse::<u32>().ok()) {
        Some(major) if major >= LIVETEXT_MIN_MAJOR_VERSION => Ok(()),
        Some(_) => Err(OcrmacError::UnsupportedOsVersion(format!(
            "LiveText requires macOS Sonoma (14.0) or later. Current version: {}",
            version
        ))),
        None => Err(OcrmacError::UnsupportedOsVersion(format!(
            "Invalid macOS version format: {}",
            version
        ))),
    }
}
