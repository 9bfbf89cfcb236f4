use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Element, PointerEvent};
use yew::prelude::*;

use crate::scroll_runtime::use_scroll_metrics;
use crate::viewport::{use_motion_enabled, use_reveal};
use folio_core::motion::{
    css_time, fade_pose, magnetic_offset, magnetic_pose, skeleton_width, stagger_child_pose,
    stagger_offset, transition_css, Direction, FLOAT_INTENSITY, FLOAT_KEYFRAMES, FLOAT_PERIOD,
    MAGNETIC_LIMIT, MAGNETIC_STRENGTH, PARALLAX_SPEED, REVEAL_DURATION, REVEAL_EASING,
    SKELETON_KEYFRAMES, SKELETON_LINE_DELAY, SKELETON_PULSE, STAGGER_CHILD_DURATION, STAGGER_STEP,
};
use folio_core::scroll::parallax_offset;
use folio_core::RevealState;

#[derive(Properties, PartialEq)]
pub(crate) struct FadeRevealProps {
    #[prop_or_default]
    pub(crate) children: Children,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) direction: Direction,
    #[prop_or(Duration::ZERO)]
    pub(crate) delay: Duration,
    #[prop_or(REVEAL_DURATION)]
    pub(crate) duration: Duration,
}

#[function_component(FadeReveal)]
pub(crate) fn fade_reveal(props: &FadeRevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone());
    let pose = fade_pose(props.direction, state);
    let style = format!(
        "{} transition: {}; will-change: opacity, transform;",
        pose.style(),
        transition_css(props.duration, props.delay, REVEAL_EASING)
    );
    html! {
        <div ref={node} class={classes!("motion", "fade-reveal", props.class.clone())} {style}>
            { props.children.clone() }
        </div>
    }
}

/// Timing a [`StaggerGroup`] hands down to its children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct StaggerCue {
    pub(crate) state: RevealState,
    pub(crate) step: Duration,
}

#[derive(Properties, PartialEq)]
pub(crate) struct StaggerGroupProps {
    #[prop_or_default]
    pub(crate) children: ChildrenWithProps<StaggerChild>,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or(STAGGER_STEP)]
    pub(crate) stagger: Duration,
}

#[function_component(StaggerGroup)]
pub(crate) fn stagger_group(props: &StaggerGroupProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone());
    let cue = StaggerCue {
        state,
        step: props.stagger,
    };
    let children = props.children.iter().enumerate().map(|(order, mut child)| {
        Rc::make_mut(&mut child.props).order = order;
        child
    });
    html! {
        <div ref={node} class={classes!("stagger-group", props.class.clone())}>
            <ContextProvider<StaggerCue> context={cue}>
                { for children }
            </ContextProvider<StaggerCue>>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub(crate) struct StaggerChildProps {
    #[prop_or_default]
    pub(crate) children: Children,
    #[prop_or_default]
    pub(crate) class: Classes,
    /// Position inside the group; assigned by [`StaggerGroup`].
    #[prop_or_default]
    pub(crate) order: usize,
}

#[function_component(StaggerChild)]
pub(crate) fn stagger_child(props: &StaggerChildProps) -> Html {
    // Outside a group there is nothing to wait for.
    let cue = use_context::<StaggerCue>().unwrap_or(StaggerCue {
        state: RevealState::Revealed,
        step: Duration::ZERO,
    });
    let pose = stagger_child_pose(cue.state);
    let delay = stagger_offset(props.order, cue.step);
    let style = format!(
        "{} transition: {};",
        pose.style(),
        transition_css(STAGGER_CHILD_DURATION, delay, REVEAL_EASING)
    );
    html! {
        <div class={classes!("motion", "stagger-child", props.class.clone())} {style}>
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct FloatingIdleProps {
    #[prop_or_default]
    pub(crate) children: Children,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or(FLOAT_PERIOD)]
    pub(crate) duration: Duration,
    #[prop_or(FLOAT_INTENSITY)]
    pub(crate) intensity: f64,
}

#[function_component(FloatingIdle)]
pub(crate) fn floating_idle(props: &FloatingIdleProps) -> Html {
    let enabled = use_motion_enabled();
    let style = if enabled {
        format!(
            "--folio-float-intensity: {}px; animation: {FLOAT_KEYFRAMES} {} linear infinite;",
            props.intensity,
            css_time(props.duration)
        )
    } else {
        String::new()
    };
    html! {
        <div class={classes!("motion", "floating-idle", props.class.clone())} {style}>
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ParallaxOffsetProps {
    #[prop_or_default]
    pub(crate) children: Children,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or(PARALLAX_SPEED)]
    pub(crate) speed: f64,
}

#[function_component(ParallaxOffset)]
pub(crate) fn parallax(props: &ParallaxOffsetProps) -> Html {
    let enabled = use_motion_enabled();
    let metrics = use_scroll_metrics();
    let offset = if enabled {
        parallax_offset(metrics.offset, props.speed)
    } else {
        0.0
    };
    let style = format!("transform: translate3d(0, {offset}px, 0); will-change: transform;");
    html! {
        <div class={classes!("motion", "parallax-offset", props.class.clone())} {style}>
            { props.children.clone() }
        </div>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct MagnetState {
    offset: (f64, f64),
    hovered: bool,
    pressed: bool,
}

#[derive(Properties, PartialEq)]
pub(crate) struct MagneticHoverProps {
    #[prop_or_default]
    pub(crate) children: Children,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or(MAGNETIC_STRENGTH)]
    pub(crate) strength: f64,
}

/// Pointer-following hover response. Handlers only observe events; clicks reach the wrapped
/// element untouched.
#[function_component(MagneticHover)]
pub(crate) fn magnetic_hover(props: &MagneticHoverProps) -> Html {
    let enabled = use_motion_enabled();
    let magnet = use_state_eq(MagnetState::default);
    if !enabled {
        return html! {
            <div class={classes!("magnetic-hover", props.class.clone())}>
                { props.children.clone() }
            </div>
        };
    }
    let onpointermove = {
        let magnet = magnet.clone();
        let strength = props.strength;
        Callback::from(move |event: PointerEvent| {
            let Some(target) = event.current_target() else {
                return;
            };
            let Ok(element) = target.dyn_into::<Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let center = (rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0);
            let pointer = (event.client_x() as f64, event.client_y() as f64);
            magnet.set(MagnetState {
                offset: magnetic_offset(pointer, center, strength, MAGNETIC_LIMIT),
                hovered: true,
                ..*magnet
            });
        })
    };
    let onpointerleave = {
        let magnet = magnet.clone();
        Callback::from(move |_: PointerEvent| magnet.set(MagnetState::default()))
    };
    let onpointerdown = {
        let magnet = magnet.clone();
        Callback::from(move |_: PointerEvent| {
            magnet.set(MagnetState {
                pressed: true,
                ..*magnet
            })
        })
    };
    let onpointerup = {
        let magnet = magnet.clone();
        Callback::from(move |_: PointerEvent| {
            magnet.set(MagnetState {
                pressed: false,
                ..*magnet
            })
        })
    };
    let pose = magnetic_pose(magnet.offset, magnet.hovered, magnet.pressed);
    let style = format!(
        "display: inline-block; transform: {}; transition: transform 150ms ease-out;",
        pose.transform_css()
    );
    html! {
        <div
            class={classes!("motion", "magnetic-hover", props.class.clone())}
            {style}
            {onpointermove}
            {onpointerleave}
            {onpointerdown}
            {onpointerup}
        >
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ScrollProgressBarProps {
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(ScrollProgressBar)]
pub(crate) fn scroll_progress_bar(props: &ScrollProgressBarProps) -> Html {
    let progress = use_scroll_metrics().progress();
    let style = format!(
        "position: fixed; top: 0; left: 0; right: 0; height: 3px; z-index: 60; pointer-events: none; transform-origin: 0 50%; transform: scaleX({progress});"
    );
    let percent = (progress * 100.0).round().to_string();
    html! {
        <div
            class={classes!("scroll-progress", props.class.clone())}
            role="progressbar"
            aria-label="Page scroll progress"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={percent}
            {style}
        />
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct LoadingSkeletonProps {
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or(3)]
    pub(crate) lines: usize,
}

#[function_component(LoadingSkeleton)]
pub(crate) fn loading_skeleton(props: &LoadingSkeletonProps) -> Html {
    let enabled = use_motion_enabled();
    let lines = (0..props.lines).map(|index| {
        let mut style = format!("width: {}%;", skeleton_width(index));
        if enabled {
            style.push_str(&format!(
                " animation: {SKELETON_KEYFRAMES} {} ease-in-out {} infinite;",
                css_time(SKELETON_PULSE),
                css_time(stagger_offset(index, SKELETON_LINE_DELAY))
            ));
        }
        html! { <div key={index} class="motion skeleton-line" {style}></div> }
    });
    html! {
        <div class={classes!("loading-skeleton", props.class.clone())} aria-busy="true">
            { for lines }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(StaggerFixture)]
    fn stagger_fixture() -> Html {
        html! {
            <>
                <StaggerGroup stagger={Duration::from_millis(250)}>
                    <StaggerChild><span class="probe">{"first"}</span></StaggerChild>
                    <StaggerChild><span class="probe">{"second"}</span></StaggerChild>
                    <StaggerChild><span class="probe">{"third"}</span></StaggerChild>
                </StaggerGroup>
                <FadeReveal direction={Direction::Left}>
                    <span class="probe">{"fade"}</span>
                </FadeReveal>
                <FloatingIdle><span class="probe">{"float"}</span></FloatingIdle>
                <ParallaxOffset><span class="probe">{"parallax"}</span></ParallaxOffset>
                <MagneticHover><button class="probe">{"magnet"}</button></MagneticHover>
                <ScrollProgressBar />
            </>
        }
    }

    fn mount_root(id: &str) -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        root.set_id(id);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        root
    }

    #[wasm_bindgen_test(async)]
    async fn wrappers_always_render_children() {
        set_panic_hook();
        let root = mount_root("motion-test-root");
        let _app_handle = yew::Renderer::<StaggerFixture>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;
        let probes = root.query_selector_all(".probe").expect("query probes");
        assert_eq!(probes.length(), 7);
    }

    #[function_component(FloatingFixture)]
    fn floating_fixture() -> Html {
        html! {
            <FloatingIdle>
                <button type="button" class="floating-action">{"Contact"}</button>
            </FloatingIdle>
        }
    }

    #[wasm_bindgen_test(async)]
    async fn floating_wrapper_keeps_children_accessible() {
        set_panic_hook();
        let root = mount_root("floating-test-root");
        let _app_handle = yew::Renderer::<FloatingFixture>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;
        let wrapper = root
            .query_selector(".floating-idle")
            .expect("query wrapper")
            .expect("wrapper rendered");
        assert!(!wrapper.has_attribute("aria-hidden"));
        assert!(wrapper
            .query_selector(".floating-action")
            .expect("query child")
            .is_some());
    }

    #[wasm_bindgen_test(async)]
    async fn stagger_children_receive_increasing_delays() {
        set_panic_hook();
        let root = mount_root("stagger-test-root");
        let _app_handle = yew::Renderer::<StaggerFixture>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;
        let children = root.query_selector_all(".stagger-child").expect("query children");
        assert_eq!(children.length(), 3);
        let styles: Vec<String> = (0..children.length())
            .filter_map(|index| children.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|element| element.get_attribute("style"))
            .collect();
        assert!(styles[0].contains("cubic-bezier(0.25, 0.25, 0, 1) 0ms"));
        assert!(styles[1].contains("cubic-bezier(0.25, 0.25, 0, 1) 250ms"));
        assert!(styles[2].contains("cubic-bezier(0.25, 0.25, 0, 1) 500ms"));
    }
}
