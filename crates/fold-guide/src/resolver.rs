//! Two-level guide dispatch: device-specific entry first, architecture
//! fallback second, empty document for everything else.

use crate::document::{GuideDocument, GuideStep};
use crate::steps::{
    boot_device_step, broadcast_success_step, download_flash_tool_step, download_os_step,
    flash_media_step, generic_intro, raspberry_pi4_memory_warning, spare_pc_intro,
};
use crate::{ApiClient, Application, Architecture, DeviceSlug, DeviceType, GuideContext};

type GuideBuilder = fn(&GuideContext<'_>) -> GuideDocument;

fn device_guide_builder(slug: DeviceSlug) -> GuideBuilder {
    match slug {
        DeviceSlug::RaspberryPi4_64 => raspberry_pi4_guide,
    }
}

fn architecture_guide_builder(architecture: Architecture) -> GuideBuilder {
    match architecture {
        Architecture::Aarch64 => generic_board_guide,
        Architecture::Amd64 => spare_pc_guide,
    }
}

fn standard_steps(context: &GuideContext<'_>) -> Vec<GuideStep> {
    let device_name = context.device_name();
    vec![
        download_os_step(context),
        download_flash_tool_step(),
        flash_media_step(device_name),
        boot_device_step(device_name),
        broadcast_success_step(),
    ]
}

fn raspberry_pi4_guide(context: &GuideContext<'_>) -> GuideDocument {
    GuideDocument {
        intro: vec![
            generic_intro(context.device_name()),
            raspberry_pi4_memory_warning(),
        ],
        steps: standard_steps(context),
    }
}

fn generic_board_guide(context: &GuideContext<'_>) -> GuideDocument {
    GuideDocument {
        intro: vec![generic_intro(context.device_name())],
        steps: standard_steps(context),
    }
}

fn spare_pc_guide(context: &GuideContext<'_>) -> GuideDocument {
    GuideDocument {
        intro: spare_pc_intro(),
        steps: standard_steps(context),
    }
}

/// Resolve the guide document for a device context.
///
/// A device-specific entry for the device type's slug strictly dominates the
/// architecture fallback. Missing device type, missing architecture, and an
/// architecture outside the fallback table all yield the empty document;
/// resolution never fails. Pure function of its inputs, safe to call from
/// concurrent render passes.
pub fn resolve_guide(
    client: &ApiClient,
    application: Option<&Application>,
    device_type: Option<&DeviceType>,
    architecture: Option<&str>,
) -> GuideDocument {
    let (Some(device_type), Some(architecture)) = (device_type, architecture) else {
        tracing::debug!(
            has_device_type = device_type.is_some(),
            has_architecture = architecture.is_some(),
            "guide resolution skipped: incomplete device context"
        );
        return GuideDocument::empty();
    };

    let context = GuideContext::new(client, application, Some(device_type));

    if let Some(slug) = DeviceSlug::from_slug(&device_type.slug) {
        tracing::debug!(slug = %slug, "resolved device-specific guide");
        return device_guide_builder(slug)(&context);
    }

    match Architecture::parse_lenient(architecture) {
        Some(parsed) => {
            tracing::debug!(architecture = %parsed, "resolved architecture fallback guide");
            architecture_guide_builder(parsed)(&context)
        }
        None => {
            tracing::debug!(
                architecture,
                "architecture outside fallback table; returning empty guide"
            );
            GuideDocument::empty()
        }
    }
}
