use std::rc::Rc;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::{debug, trace};

use crate::config::{DashboardConfig, TooltipConfig};
use crate::domain::entities::overlay::{
    DelayTicket, OverlayPlacement, Rect, ShowDelay, Side, Viewport,
};
use crate::usecase::services::overlay_service::OverlayPositioner;

const ARROW_SIZE: f64 = 6.0;
const TOOLTIP_BACKGROUND: &str = "#333";

const VIEWPORT_SIZE_JS: &str = "return [window.innerWidth, window.innerHeight];";

// Reports the viewport size on every scroll/resize until Rust sends a value
// back, then detaches.
const TRACK_VIEWPORT_JS: &str = r#"
const report = () => dioxus.send([window.innerWidth, window.innerHeight]);
window.addEventListener("scroll", report, true);
window.addEventListener("resize", report);
await dioxus.recv();
window.removeEventListener("scroll", report, true);
window.removeEventListener("resize", report);
"#;

pub fn content_style(placement: Option<&OverlayPlacement>) -> String {
    let (left, top, visibility) = match placement {
        Some(placement) => (placement.coords.x, placement.coords.y, "visible"),
        None => (0.0, 0.0, "hidden"),
    };
    format!(
        "position: fixed; left: {left}px; top: {top}px; visibility: {visibility}; max-width: 280px; padding: 6px 10px; border-radius: 6px; background: {TOOLTIP_BACKGROUND}; color: #fff; font-size: 12px; line-height: 1.4; z-index: 1300; pointer-events: none;"
    )
}

/// CSS triangle sitting on `edge` of the overlay and pointing outwards.
pub fn arrow_style(edge: Side) -> String {
    let size = ARROW_SIZE;
    let base = "position: absolute; width: 0; height: 0;";
    match edge {
        Side::Bottom => format!(
            "{base} bottom: -{size}px; left: 50%; transform: translateX(-50%); border-left: {size}px solid transparent; border-right: {size}px solid transparent; border-top: {size}px solid {TOOLTIP_BACKGROUND};"
        ),
        Side::Top => format!(
            "{base} top: -{size}px; left: 50%; transform: translateX(-50%); border-left: {size}px solid transparent; border-right: {size}px solid transparent; border-bottom: {size}px solid {TOOLTIP_BACKGROUND};"
        ),
        Side::Right => format!(
            "{base} right: -{size}px; top: 50%; transform: translateY(-50%); border-top: {size}px solid transparent; border-bottom: {size}px solid transparent; border-left: {size}px solid {TOOLTIP_BACKGROUND};"
        ),
        Side::Left => format!(
            "{base} left: -{size}px; top: 50%; transform: translateY(-50%); border-top: {size}px solid transparent; border-bottom: {size}px solid transparent; border-right: {size}px solid {TOOLTIP_BACKGROUND};"
        ),
    }
}

/// Timer script for targets without a tokio time driver.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn delay_script(delay: Duration) -> String {
    format!(
        "await new Promise((done) => setTimeout(done, {})); return true;",
        delay.as_millis()
    )
}

#[cfg(not(target_arch = "wasm32"))]
async fn wait(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(target_arch = "wasm32")]
async fn wait(delay: Duration) {
    if let Err(err) = document::eval(&delay_script(delay)).join::<bool>().await {
        debug!("tooltip delay timer failed: {err:?}");
    }
}

async fn client_rect(node: &MountedData) -> Option<Rect> {
    let rect = node.get_client_rect().await.ok()?;
    Some(Rect::new(
        rect.origin.x,
        rect.origin.y,
        rect.size.width,
        rect.size.height,
    ))
}

async fn viewport_size() -> Option<Viewport> {
    let size = document::eval(VIEWPORT_SIZE_JS)
        .join::<Vec<f64>>()
        .await
        .ok()?;
    viewport_from(&size)
}

fn viewport_from(size: &[f64]) -> Option<Viewport> {
    match size {
        [width, height] => Some(Viewport {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

async fn measure(
    trigger: Option<Rc<MountedData>>,
    content: Option<Rc<MountedData>>,
    side: Side,
    config: &TooltipConfig,
    viewport: Option<Viewport>,
) -> Option<OverlayPlacement> {
    let trigger = client_rect(trigger?.as_ref()).await?;
    let content = client_rect(content?.as_ref()).await?;
    let viewport = match viewport {
        Some(viewport) => viewport,
        None => viewport_size().await?,
    };
    Some(OverlayPositioner::new(config).position(&trigger, &content, side, &viewport))
}

fn begin_show(
    mut delay: Signal<ShowDelay>,
    mut pending: Signal<Option<Task>>,
    config: TooltipConfig,
) {
    if let Some(task) = pending.write().take() {
        task.cancel();
    }
    if delay.peek().is_pending() {
        trace!("restarting tooltip delay");
    }
    let ticket = delay.write().begin();
    let task = spawn(async move {
        wait(config.show_delay).await;
        if delay.write().fire(ticket) {
            trace!("tooltip shown after {:?}", config.show_delay);
        }
        pending.set(None);
    });
    pending.set(Some(task));
}

fn end_show(
    mut delay: Signal<ShowDelay>,
    mut pending: Signal<Option<Task>>,
    mut content_node: Signal<Option<Rc<MountedData>>>,
    mut placement: Signal<Option<OverlayPlacement>>,
) {
    if let Some(task) = pending.write().take() {
        task.cancel();
    }
    delay.write().end();
    content_node.set(None);
    placement.set(None);
}

async fn track_viewport(
    ticket: DelayTicket,
    delay: Signal<ShowDelay>,
    trigger_node: Signal<Option<Rc<MountedData>>>,
    content_node: Signal<Option<Rc<MountedData>>>,
    mut placement: Signal<Option<OverlayPlacement>>,
    side: Side,
    config: TooltipConfig,
) {
    let mut listener = document::eval(TRACK_VIEWPORT_JS);
    while let Ok(size) = listener.recv::<Vec<f64>>().await {
        if !delay.peek().is_showing(ticket) {
            break;
        }
        let next = measure(
            trigger_node.peek().clone(),
            content_node.peek().clone(),
            side,
            &config,
            viewport_from(&size),
        )
        .await;
        if next.is_some() {
            placement.set(next);
        }
    }
    let _ = listener.send(true);
    debug!("tooltip stopped tracking viewport");
}

#[component]
pub fn Tooltip(text: String, #[props(default)] side: Side, children: Element) -> Element {
    let config = use_context::<DashboardConfig>().tooltip;
    let delay = use_signal(ShowDelay::default);
    let pending = use_signal(|| None::<Task>);
    let mut trigger_node = use_signal(|| None::<Rc<MountedData>>);
    let mut content_node = use_signal(|| None::<Rc<MountedData>>);
    let mut placement = use_signal(|| None::<OverlayPlacement>);
    let mut tracked = use_signal(|| None::<DelayTicket>);

    use_effect(move || {
        let showing = delay.read().is_visible();
        let content = content_node.read().clone();
        if !showing || content.is_none() {
            return;
        }
        let trigger = trigger_node.peek().clone();
        spawn(async move {
            if let Some(next) = measure(trigger, content, side, &config, None).await {
                placement.set(Some(next));
            }
        });

        let current = delay.peek().clone();
        let last_tracked = *tracked.peek();
        if let Some(ticket) = current_ticket(&current, last_tracked) {
            tracked.set(Some(ticket));
            spawn(track_viewport(
                ticket,
                delay,
                trigger_node,
                content_node,
                placement,
                side,
                config,
            ));
        }
    });

    let visible = delay.read().is_visible();
    let current_placement = placement();
    let arrow = current_placement
        .map(|p| p.arrow)
        .unwrap_or_else(|| side.opposite());

    rsx! {
        span {
            style: "position: relative; display: inline-flex; align-items: center;",
            tabindex: "0",
            onmounted: move |event| trigger_node.set(Some(event.data())),
            onmouseenter: move |_| begin_show(delay, pending, config),
            onfocus: move |_| begin_show(delay, pending, config),
            onmouseleave: move |_| end_show(delay, pending, content_node, placement),
            onblur: move |_| end_show(delay, pending, content_node, placement),
            {children}
        }
        if visible {
            div {
                role: "tooltip",
                style: "{content_style(current_placement.as_ref())}",
                onmounted: move |event| content_node.set(Some(event.data())),
                "{text}"
                div { style: "{arrow_style(arrow)}" }
            }
        }
    }
}

/// The ticket of the show cycle on screen, unless a tracker already
/// follows it.
fn current_ticket(delay: &ShowDelay, tracked: Option<DelayTicket>) -> Option<DelayTicket> {
    let ticket = delay.shown_ticket()?;
    if tracked == Some(ticket) {
        None
    } else {
        Some(ticket)
    }
}
