use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlAnchorElement;
use yew::prelude::*;

use crate::analytics::{self, AnalyticsEvent};
use crate::browser::js_err;
use crate::site_config::{site_config, SiteConfig};

const PREPARE_MS: u32 = 1000;

fn trigger_download(config: &SiteConfig) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("document unavailable")?;
    let body = document.body().ok_or("body unavailable")?;
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "anchor cast failed".to_string())?;
    anchor.set_href(&config.cv_url);
    anchor.set_download(&config.cv_file_name);
    body.append_child(&anchor).map_err(js_err)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_err)?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub(crate) struct CvDownloadProps {
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(CvDownload)]
pub(crate) fn cv_download(props: &CvDownloadProps) -> Html {
    let downloading = use_state(|| false);
    let onclick = {
        let downloading = downloading.clone();
        Callback::from(move |_: MouseEvent| {
            if *downloading {
                return;
            }
            downloading.set(true);
            let downloading = downloading.clone();
            spawn_local(async move {
                TimeoutFuture::new(PREPARE_MS).await;
                let config = site_config();
                match trigger_download(&config) {
                    Ok(()) => {
                        gloo::console::log!("cv: download started", config.cv_file_name.clone());
                        analytics::track(&AnalyticsEvent::cv_download(&config.analytics_label));
                    }
                    Err(err) => {
                        gloo::console::error!("cv: download failed", err);
                    }
                }
                downloading.set(false);
            });
        })
    };
    html! {
        <div class={props.class.clone()}>
            <button type="button" class="button button--primary" disabled={*downloading} {onclick}>
                if *downloading {
                    <span class="spinner" aria-hidden="true"></span>
                    { "Downloading..." }
                } else {
                    { "Download CV" }
                }
            </button>
        </div>
    }
}
