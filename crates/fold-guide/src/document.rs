//! Plain-data document model consumed by the rendering layer.
//!
//! A resolved guide is an intro plus an ordered step sequence. All content is
//! fully substituted at construction time; nothing is left for the renderer
//! to evaluate lazily.

use serde::{Deserialize, Serialize};

use crate::{ApiClient, Application, DeviceType};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Inline run inside a paragraph or alert.
pub enum Inline {
    Text(String),
    Bold(String),
    Link { href: String, label: String },
}

impl Inline {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn bold(value: impl Into<String>) -> Self {
        Self::Bold(value.into())
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Link {
            href: href.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Instructional image assets shipped with the getting-started page.
pub enum ImageAsset {
    InsertSdCard,
    FlashCard,
    DeviceTasks,
}

impl ImageAsset {
    pub fn source(self) -> &'static str {
        match self {
            Self::InsertSdCard => "img/insert-sd.gif",
            Self::FlashCard => "img/etcher.gif",
            Self::DeviceTasks => "img/tasks.png",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Block-level content inside an intro or a step body.
pub enum GuideBlock {
    Paragraph(Vec<Inline>),
    DangerAlert(Vec<Inline>),
    Image {
        asset: ImageAsset,
        alt: String,
    },
    /// OS-image download widget descriptor. Carries the client handle and
    /// selection so the widget can build download links; the widget owns its
    /// own network and progress lifecycle.
    OsDownloadWidget {
        client: ApiClient,
        application: Option<Application>,
        device_type: Option<DeviceType>,
    },
    /// Flashing-tool download widget descriptor.
    ToolDownloadWidget,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// One titled step in the instructional sequence.
pub struct GuideStep {
    pub title: String,
    pub blocks: Vec<GuideBlock>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
/// The intro plus ordered step sequence shown to a user for a given device.
pub struct GuideDocument {
    pub intro: Vec<GuideBlock>,
    pub steps: Vec<GuideStep>,
}

impl GuideDocument {
    /// The defined degenerate result for incomplete or unmatched context.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.intro.is_empty() && self.steps.is_empty()
    }
}
