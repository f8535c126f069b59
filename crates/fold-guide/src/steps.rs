//! Fixed library of intro and step content builders.
//!
//! Each builder substitutes the device display name into the production
//! copy and returns plain document values. The five-step sequence assembled
//! by the resolver is: download OS, download flash tool, flash media, boot
//! device, broadcast success. The view-activity snippet is part of the
//! library but not a member of the step sequence; the boot step already
//! folds that content in.

use crate::document::{GuideBlock, GuideStep, ImageAsset, Inline};
use crate::{GuideContext, ETCHER_URL, HOW_IT_WORKS_PATH, LOCAL_HOSTNAME, LOCAL_HOSTNAME_URL};

// Shown when a builder is invoked without a device type; the resolver only
// dispatches with a device type present, so this is a belt for direct calls.
const FALLBACK_DEVICE_NAME: &str = "device";

fn device_name_or_fallback(device_name: Option<&str>) -> &str {
    device_name.unwrap_or(FALLBACK_DEVICE_NAME)
}

/// "Getting started on a <device> is simple!" opening paragraph.
pub fn generic_intro(device_name: Option<&str>) -> GuideBlock {
    let device_name = device_name_or_fallback(device_name);
    GuideBlock::Paragraph(vec![
        Inline::text("Getting started on a "),
        Inline::bold(device_name),
        Inline::text(
            " is simple! Follow these steps to download our ready-made operating \
             system, flash it to an SD Card, and begin crunching data to help \
             scientists!",
        ),
    ])
}

/// Memory-requirement warning appended to the Raspberry Pi 4 intro.
pub fn raspberry_pi4_memory_warning() -> GuideBlock {
    GuideBlock::Paragraph(vec![
        Inline::bold(
            "Please Note: This project requires a Raspberry Pi 4 with 2GB or 4GB \
             of memory",
        ),
        Inline::text(
            ". These simulations are large and the 1GB version of the Raspberry \
             Pi 4 doesn't have enough memory to run the work units Rosetta@Home \
             provides.",
        ),
    ])
}

/// Spare-PC intro used by the amd64 fallback guide, including the
/// destructive-overwrite alert.
pub fn spare_pc_intro() -> Vec<GuideBlock> {
    vec![
        GuideBlock::Paragraph(vec![Inline::text(
            "Getting started on an unused laptop or desktop PC is easy! Follow \
             these steps to download our ready-made operating system, flash it \
             to a USB stick, and begin crunching data to help scientists!",
        )]),
        GuideBlock::DangerAlert(vec![Inline::text(
            "This project is intended to be used on a spare, unused computer. \
             It will overwrite your existing hard drive contents, causing loss \
             of ALL data on the computer. Only run this on a device that you \
             don't plan on using.",
        )]),
    ]
}

/// Step 1: download the preconfigured OS image.
pub fn download_os_step(context: &GuideContext<'_>) -> GuideStep {
    let device_name = device_name_or_fallback(context.device_name());
    GuideStep {
        title: "Download the Fold for Covid project software".to_string(),
        blocks: vec![
            GuideBlock::Paragraph(vec![
                Inline::text(format!(
                    "BalenaOS is the operating system (OS) for your {device_name} \
                     and is preconfigured to run Rosetta software. If your device \
                     is connecting via WiFi you'll need to input the credentials \
                     here. We don't save any details. "
                )),
                Inline::link(HOW_IT_WORKS_PATH, "Read more"),
            ]),
            GuideBlock::OsDownloadWidget {
                client: context.client.clone(),
                application: context.application.cloned(),
                device_type: context.device_type.cloned(),
            },
        ],
    }
}

/// Step 2: download the flashing tool.
pub fn download_flash_tool_step() -> GuideStep {
    GuideStep {
        title: "Download and install balenaEtcher".to_string(),
        blocks: vec![
            GuideBlock::Paragraph(vec![
                Inline::link(ETCHER_URL, "balenaEtcher"),
                Inline::text(
                    " is used to write the OS image you downloaded in Step 1 to \
                     your SD card.",
                ),
            ]),
            GuideBlock::ToolDownloadWidget,
        ],
    }
}

/// Step 3: flash the downloaded image onto the media.
pub fn flash_media_step(device_name: Option<&str>) -> GuideStep {
    let device_name = device_name_or_fallback(device_name);
    GuideStep {
        title: "Launch balenaEtcher and flash your SD card".to_string(),
        blocks: vec![
            GuideBlock::Paragraph(vec![Inline::text(format!(
                "Launch balenaEtcher, choose the file you downloaded in Step 1, \
                 select your SD card and click \"Flash\". This will wipe all data \
                 on the card and prepare it for your {device_name}."
            ))]),
            GuideBlock::Image {
                asset: ImageAsset::FlashCard,
                alt: "Flash card with Etcher".to_string(),
            },
        ],
    }
}

/// Step 4: boot the device and watch it join the fleet.
pub fn boot_device_step(device_name: Option<&str>) -> GuideStep {
    let device_name = device_name_or_fallback(device_name);
    GuideStep {
        title: "Boot up your device and begin folding!".to_string(),
        blocks: vec![
            GuideBlock::Paragraph(vec![Inline::text(
                "Once the flashing process is complete, place the SD Card in \
                 your device, and power it on.",
            )]),
            GuideBlock::Image {
                asset: ImageAsset::InsertSdCard,
                alt: "Insert card in device".to_string(),
            },
            GuideBlock::Paragraph(vec![
                Inline::text(format!(
                    "Your {device_name} will automatically join the global fight, \
                     and begin crunching data! "
                )),
                Inline::link(HOW_IT_WORKS_PATH, "Read more about how this helps"),
            ]),
            GuideBlock::Paragraph(vec![
                Inline::text(format!(
                    "To view your {device_name}'s current activity, visit your \
                     {device_name}'s new hostname, {LOCAL_HOSTNAME}, in a web \
                     browser like this: "
                )),
                Inline::link(LOCAL_HOSTNAME_URL, LOCAL_HOSTNAME),
            ]),
            GuideBlock::Image {
                asset: ImageAsset::DeviceTasks,
                alt: "Rosetta tasks on your device".to_string(),
            },
            GuideBlock::Paragraph(vec![Inline::text(format!(
                "If you have a display connected to your {device_name}, the \
                 statistics and current information will be shown there too."
            ))]),
        ],
    }
}

/// Step 5: scale out to more devices.
pub fn broadcast_success_step() -> GuideStep {
    GuideStep {
        title: "Add as many devices as you can, and tell everyone you know!".to_string(),
        blocks: vec![GuideBlock::Paragraph(vec![Inline::text(
            "To add more devices simply flash the same OS image you downloaded \
             in Step 1 to more SD cards and boot up more devices.",
        )])],
    }
}

/// Standalone view-activity snippet for page-level composition.
pub fn view_activity_blocks(device_name: Option<&str>) -> Vec<GuideBlock> {
    let device_name = device_name_or_fallback(device_name);
    vec![
        GuideBlock::Paragraph(vec![
            Inline::text(format!(
                "To view your {device_name}'s current activity, visit your \
                 {device_name}'s new hostname, {LOCAL_HOSTNAME}, in a web \
                 browser like this: "
            )),
            Inline::link(LOCAL_HOSTNAME_URL, LOCAL_HOSTNAME),
            Inline::text("."),
        ]),
        GuideBlock::Image {
            asset: ImageAsset::DeviceTasks,
            alt: "Rosetta tasks on your device".to_string(),
        },
    ]
}
