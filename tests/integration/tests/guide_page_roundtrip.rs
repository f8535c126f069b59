//! End-to-end checks: resolve a guide for a device context, render it to
//! HTML, and verify the page-facing contract survives the whole pipeline.

use fold_guide::{resolve_guide, ApiClient, Application, DeviceType, GuideDocument};
use fold_guide_ui::render_guide_document;

fn client() -> ApiClient {
    ApiClient::new("https://api.balena-cloud.com")
}

fn application() -> Application {
    Application {
        slug: "foldforcovid".to_string(),
        name: "Fold for Covid".to_string(),
    }
}

fn device_type(slug: &str, name: &str) -> DeviceType {
    DeviceType {
        slug: slug.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn raspberry_pi_page_renders_device_specific_guide() {
    let client = client();
    let application = application();
    let pi = device_type("raspberrypi4-64", "Raspberry Pi 4");

    let document = resolve_guide(&client, Some(&application), Some(&pi), Some("aarch64"));
    assert_eq!(document.steps.len(), 5);

    let html = render_guide_document(&document);
    assert!(html.contains("data-step-count=\"5\""));
    assert!(html.contains("2GB or 4GB of memory"));
    assert!(html.contains("Download the Fold for Covid project software"));
    assert!(html.contains("Boot up your device and begin folding!"));
    assert!(html.contains("data-device-type-slug=\"raspberrypi4-64\""));
}

#[test]
fn spare_pc_page_renders_generic_amd64_guide_with_overwrite_warning() {
    let client = client();
    let pc = device_type("intel-nuc", "Intel NUC");

    let document = resolve_guide(&client, None, Some(&pc), Some("amd64"));
    let html = render_guide_document(&document);

    assert!(html.contains("data-block=\"danger-alert\""));
    assert!(html.contains("overwrite your existing hard drive contents"));
    assert!(html.contains("Intel NUC"));
}

#[test]
fn unknown_board_page_renders_generic_aarch64_guide_without_overwrite_warning() {
    let client = client();
    let board = device_type("jetson-nano", "Nvidia Jetson Nano");

    let document = resolve_guide(&client, None, Some(&board), Some("aarch64"));
    let html = render_guide_document(&document);

    assert!(html.contains("Nvidia Jetson Nano"));
    assert!(!html.contains("overwrite your existing hard drive contents"));
    assert!(html.contains("data-step-count=\"5\""));
}

#[test]
fn incomplete_context_renders_empty_guide_shell() {
    let client = client();

    for (device, architecture) in [
        (None, Some("aarch64")),
        (
            Some(device_type("raspberrypi4-64", "Raspberry Pi 4")),
            None,
        ),
        (Some(device_type("ci20", "MIPS Creator CI20")), Some("mips")),
    ] {
        let document = resolve_guide(&client, None, device.as_ref(), architecture);
        assert_eq!(document, GuideDocument::empty());

        let html = render_guide_document(&document);
        assert!(html.contains("data-step-count=\"0\""));
        assert!(!html.contains("id=\"fold-guide-intro\""));
    }
}

#[test]
fn resolved_document_survives_json_round_trip() {
    let client = client();
    let application = application();
    let pi = device_type("raspberrypi4-64", "Raspberry Pi 4");

    let document = resolve_guide(&client, Some(&application), Some(&pi), Some("aarch64"));
    let raw = serde_json::to_string(&document).expect("serialize document");
    let decoded: GuideDocument = serde_json::from_str(&raw).expect("deserialize document");

    assert_eq!(decoded, document);
    assert_eq!(
        render_guide_document(&decoded),
        render_guide_document(&document)
    );
}
