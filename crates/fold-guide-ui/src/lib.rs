//! Leptos SSR rendering for resolved guide documents.
//!
//! Turns the plain-data document from `fold-guide` into an HTML string with
//! stable `id`/`data-*` contract markers. The interactive widgets (OS-image
//! download, flashing-tool download) render as marker sections; their
//! network and progress lifecycles belong to the client-side components
//! that hydrate them.

use leptos::prelude::*;

use fold_guide::document::{GuideBlock, GuideDocument, ImageAsset, Inline};
use fold_guide::{ApiClient, Application, DeviceType, ETCHER_URL};

/// Anchor for an outbound reference; always opens in a new tab.
pub fn render_external_link(href: &str, label: &str) -> AnyView {
    view! {
        <a
            data-component="ExternalLink"
            href=href.to_string()
            target="_blank"
            rel="noreferrer noopener"
        >
            {label.to_string()}
        </a>
    }
    .into_any()
}

/// Deferred-loading image for the instructional assets.
pub fn render_lazy_image(asset: ImageAsset, alt: &str) -> AnyView {
    view! {
        <img
            data-component="LazyImage"
            loading="lazy"
            src=asset.source()
            alt=alt.to_string()
        />
    }
    .into_any()
}

/// OS-image download widget shell. Surfaces the API endpoint and the
/// selected application/device type so the hydrating component can build
/// download links.
pub fn render_os_download_widget(
    client: &ApiClient,
    application: Option<&Application>,
    device_type: Option<&DeviceType>,
) -> AnyView {
    let app_slug = application
        .map(|application| application.slug.clone())
        .unwrap_or_else(|| "none".to_string());
    let device_type_slug = device_type
        .map(|device_type| device_type.slug.clone())
        .unwrap_or_else(|| "none".to_string());
    view! {
        <section
            data-component="DownloadImage"
            data-api-endpoint=client.endpoint().to_string()
            data-app-slug=app_slug
            data-device-type-slug=device_type_slug
        >
            <button type="button" data-action="download-os">
                Download balenaOS
            </button>
        </section>
    }
    .into_any()
}

/// Flashing-tool download widget shell.
pub fn render_tool_download_widget() -> AnyView {
    view! {
        <section data-component="DownloadEtcher">
            <a href=ETCHER_URL target="_blank" rel="noreferrer noopener">
                Download balenaEtcher
            </a>
        </section>
    }
    .into_any()
}

fn inline_view(inline: &Inline) -> AnyView {
    match inline {
        Inline::Text(text) => text.clone().into_any(),
        Inline::Bold(text) => view! { <strong>{text.clone()}</strong> }.into_any(),
        Inline::Link { href, label } => render_external_link(href, label).into_any(),
    }
}

fn block_view(block: &GuideBlock) -> AnyView {
    match block {
        GuideBlock::Paragraph(inlines) => {
            let content = inlines.iter().map(inline_view).collect_view();
            view! { <p data-block="paragraph">{content}</p> }.into_any()
        }
        GuideBlock::DangerAlert(inlines) => {
            let content = inlines.iter().map(inline_view).collect_view();
            view! {
                <p data-block="danger-alert" role="alert">
                    {content}
                </p>
            }
            .into_any()
        }
        GuideBlock::Image { asset, alt } => render_lazy_image(*asset, alt),
        GuideBlock::OsDownloadWidget {
            client,
            application,
            device_type,
        } => render_os_download_widget(client, application.as_ref(), device_type.as_ref()),
        GuideBlock::ToolDownloadWidget => render_tool_download_widget(),
    }
}

/// Render a resolved guide document to HTML. The empty document renders an
/// empty guide shell with `data-step-count="0"`.
pub fn render_guide_document(document: &GuideDocument) -> String {
    let step_count = document.steps.len().to_string();
    let intro = (!document.intro.is_empty()).then(|| {
        let content = document.intro.iter().map(block_view).collect_view();
        view! { <section id="fold-guide-intro">{content}</section> }
    });
    let steps = document
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let step_id = format!("fold-guide-step-{}", index + 1);
            let step_index = (index + 1).to_string();
            let blocks = step.blocks.iter().map(block_view).collect_view();
            view! {
                <section id=step_id data-step-index=step_index>
                    <h3>{step.title.clone()}</h3>
                    {blocks}
                </section>
            }
        })
        .collect_view();

    let guide = view! {
        <article id="fold-guide" data-step-count=step_count>
            {intro}
            {steps}
        </article>
    };
    guide.to_html()
}
