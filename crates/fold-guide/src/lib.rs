//! Device-setup guide resolution for the Fold for Covid onboarding page.
//!
//! Maps a device context (API client handle, optional application, optional
//! device type, optional architecture) to the ordered instructional document
//! shown on the getting-started page. Device-specific guides take precedence
//! over architecture fallbacks; incomplete context degrades to an empty
//! document. Documents are plain data values; rendering lives in
//! `fold-guide-ui`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod document;
pub mod resolver;
pub mod steps;

pub use document::{GuideBlock, GuideDocument, GuideStep, ImageAsset, Inline};
pub use resolver::resolve_guide;

/// Outbound reference targets used by the step content.
pub const ETCHER_URL: &str = "https://balena.io/etcher";
pub const HOW_IT_WORKS_PATH: &str = "/how-does-it-work";
pub const LOCAL_HOSTNAME: &str = "foldforcovid.local";
pub const LOCAL_HOSTNAME_URL: &str = "http://foldforcovid.local";

/// Opaque handle to the fleet API, threaded through untouched to the
/// OS-image download widget so it can build download links. Performs no I/O
/// during guide resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiClient {
    api_endpoint: String,
}

impl ApiClient {
    pub fn new(api_endpoint: impl Into<String>) -> Self {
        Self {
            api_endpoint: api_endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.api_endpoint
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Fleet application the downloaded OS image is preconfigured to join.
pub struct Application {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Hardware class identified by a stable slug and a display name.
pub struct DeviceType {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
/// Device identifiers with a device-specific guide entry.
pub enum DeviceSlug {
    #[serde(rename = "raspberrypi4-64")]
    RaspberryPi4_64,
}

impl DeviceSlug {
    pub fn from_slug(value: &str) -> Option<Self> {
        match value {
            "raspberrypi4-64" => Some(Self::RaspberryPi4_64),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RaspberryPi4_64 => "raspberrypi4-64",
        }
    }
}

impl std::fmt::Display for DeviceSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an architecture string is outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown architecture '{value}'; expected aarch64|amd64")]
pub struct ArchitectureParseError {
    pub value: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Processor instruction-set families with a generic fallback guide.
pub enum Architecture {
    Aarch64,
    Amd64,
}

impl Architecture {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aarch64 => "aarch64",
            Self::Amd64 => "amd64",
        }
    }

    /// Non-failing lookup used during resolution; an unknown architecture is
    /// incomplete context, not an error.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        match value {
            "aarch64" => Some(Self::Aarch64),
            "amd64" => Some(Self::Amd64),
            _ => None,
        }
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Architecture {
    type Err = ArchitectureParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(value).ok_or_else(|| ArchitectureParseError {
            value: value.to_string(),
        })
    }
}

/// Borrowed device context handed to guide and step builders; immutable for
/// the duration of one resolution.
#[derive(Debug, Clone, Copy)]
pub struct GuideContext<'a> {
    pub client: &'a ApiClient,
    pub application: Option<&'a Application>,
    pub device_type: Option<&'a DeviceType>,
}

impl<'a> GuideContext<'a> {
    pub fn new(
        client: &'a ApiClient,
        application: Option<&'a Application>,
        device_type: Option<&'a DeviceType>,
    ) -> Self {
        Self {
            client,
            application,
            device_type,
        }
    }

    pub fn device_name(&self) -> Option<&'a str> {
        self.device_type.map(|device_type| device_type.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn device_slug_round_trips_known_value() {
        let slug = DeviceSlug::from_slug("raspberrypi4-64").expect("known slug");
        assert_eq!(slug, DeviceSlug::RaspberryPi4_64);
        assert_eq!(slug.as_str(), "raspberrypi4-64");
        assert_eq!(slug.to_string(), "raspberrypi4-64");
    }

    #[test]
    fn device_slug_rejects_unknown_value() {
        assert_eq!(DeviceSlug::from_slug("beaglebone-black"), None);
    }

    #[test]
    fn architecture_parses_supported_values() {
        assert_eq!(Architecture::from_str("aarch64"), Ok(Architecture::Aarch64));
        assert_eq!(Architecture::from_str("amd64"), Ok(Architecture::Amd64));
        assert_eq!(Architecture::parse_lenient("aarch64"), Some(Architecture::Aarch64));
    }

    #[test]
    fn architecture_reports_unknown_value() {
        let error = Architecture::from_str("mips").expect_err("unknown architecture");
        assert_eq!(error.value, "mips");
        assert_eq!(
            error.to_string(),
            "unknown architecture 'mips'; expected aarch64|amd64"
        );
        assert_eq!(Architecture::parse_lenient("mips"), None);
    }

    #[test]
    fn guide_context_exposes_device_name() {
        let client = ApiClient::new("https://api.balena-cloud.com");
        let device_type = DeviceType {
            slug: "raspberrypi4-64".to_string(),
            name: "Raspberry Pi 4".to_string(),
        };
        let context = GuideContext::new(&client, None, Some(&device_type));
        assert_eq!(context.device_name(), Some("Raspberry Pi 4"));

        let without_device = GuideContext::new(&client, None, None);
        assert_eq!(without_device.device_name(), None);
    }
}
