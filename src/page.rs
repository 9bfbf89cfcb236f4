use std::time::Duration;

use yew::html_nested;
use yew::prelude::*;

use crate::content::{
    section_ids, ABOUT, CONTACT_EMAIL, CONTACT_LINKS, EXPERIENCE, OWNER, PROJECTS, ROLE,
    SECTIONS, SKILL_GROUPS, TAGLINE, TESTIMONIALS,
};
use crate::cv_download::CvDownload;
use crate::motion::{
    FadeReveal, FloatingIdle, LoadingSkeleton, MagneticHover, ParallaxOffset, ScrollProgressBar,
    StaggerChild, StaggerGroup,
};
use crate::motion_styles::install_motion_styles;
use crate::scroll_runtime::{scroll_to_section, section_bounds, use_scroll_metrics};
use crate::theme::{use_display_mode, DisplayModeHandle, ThemeToggle};
use crate::viewport::use_motion_enabled;
use folio_core::motion::Direction;
use folio_core::scroll::{HERO_DRIFT, HERO_FADE, SECTION_PROBE};
use folio_core::{active_section, DisplayMode};

#[derive(Properties, PartialEq)]
struct HeaderProps {
    menu_open: bool,
    on_navigate: Callback<&'static str>,
    on_menu: Callback<()>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let metrics = use_scroll_metrics();
    let active = use_state_eq(|| None::<String>);
    {
        let active = active.clone();
        // Bounds are read after the frame's writes have been committed.
        use_effect_with(metrics, move |_| {
            let bounds = section_bounds(&section_ids());
            active.set(active_section(&bounds, SECTION_PROBE).map(str::to_string));
            || ()
        });
    }
    let links = SECTIONS.iter().map(|section| {
        let id = section.id;
        let onclick = props.on_navigate.reform(move |_: MouseEvent| id);
        let is_active = active.as_deref() == Some(id);
        html! {
            <li key={id}>
                <button
                    type="button"
                    class={classes!("nav__link", is_active.then_some("nav__link--active"))}
                    aria-current={is_active.then_some("true")}
                    {onclick}
                >
                    {section.label}
                </button>
            </li>
        }
    });
    let on_menu = props.on_menu.reform(|_: MouseEvent| ());
    html! {
        <header class="site-header">
            <nav class="nav" aria-label="Primary">
                <span class="nav__brand">{OWNER}</span>
                <ul class={classes!("nav__links", props.menu_open.then_some("nav__links--open"))}>
                    { for links }
                </ul>
                <div class="nav__actions">
                    <ThemeToggle />
                    <button
                        type="button"
                        class="nav__menu"
                        aria-label="Toggle menu"
                        aria-expanded={props.menu_open.to_string()}
                        onclick={on_menu}
                    >
                        {"\u{2630}"}
                    </button>
                </div>
            </nav>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    on_navigate: Callback<&'static str>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let motion = use_motion_enabled();
    let scroll_offset = use_scroll_metrics().offset;
    let style = if motion {
        format!(
            "transform: translate3d(0, {}px, 0); opacity: {};",
            HERO_DRIFT.apply(scroll_offset),
            HERO_FADE.apply(scroll_offset)
        )
    } else {
        String::new()
    };
    let to_projects = props.on_navigate.reform(|_: MouseEvent| "projects");
    let to_contact = props.on_navigate.reform(|_: MouseEvent| "contact");
    html! {
        <section id="home" class="hero">
            <div class="hero__backdrop" aria-hidden="true">
                <ParallaxOffset class="hero__parallax" speed={0.2}>
                    <FloatingIdle class="hero__orb hero__orb--one" />
                    <FloatingIdle
                        class="hero__orb hero__orb--two"
                        duration={Duration::from_secs(4)}
                        intensity={16.0}
                    />
                </ParallaxOffset>
            </div>
            <div class="hero__content" {style}>
                <FadeReveal>
                    <p class="hero__eyebrow">{ROLE}</p>
                    <h1 class="hero__title">{OWNER}</h1>
                </FadeReveal>
                <FadeReveal delay={Duration::from_millis(200)}>
                    <p class="hero__tagline">{TAGLINE}</p>
                </FadeReveal>
                <FadeReveal delay={Duration::from_millis(400)} class="hero__actions">
                    <MagneticHover>
                        <button type="button" class="button button--primary" onclick={to_projects}>
                            {"View my work"}
                        </button>
                    </MagneticHover>
                    <MagneticHover>
                        <button type="button" class="button" onclick={to_contact}>
                            {"Get in touch"}
                        </button>
                    </MagneticHover>
                </FadeReveal>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="section">
            <FadeReveal>
                <h2 class="section__title">{"About"}</h2>
            </FadeReveal>
            <div class="about">
                <FadeReveal direction={Direction::Left} class="about__text">
                    { for ABOUT.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                </FadeReveal>
                <FadeReveal direction={Direction::Right} delay={Duration::from_millis(200)}>
                    <MagneticHover>
                        <CvDownload />
                    </MagneticHover>
                </FadeReveal>
            </div>
        </section>
    }
}

#[function_component(Experience)]
fn experience() -> Html {
    let items = EXPERIENCE.iter().map(|entry| {
        html_nested! {
            <StaggerChild class="timeline__item">
                <h3>{entry.title}</h3>
                <p class="timeline__meta">{format!("{} · {}", entry.company, entry.period)}</p>
                <p>{entry.summary}</p>
            </StaggerChild>
        }
    });
    html! {
        <section id="experience" class="section">
            <FadeReveal>
                <h2 class="section__title">{"Experience"}</h2>
            </FadeReveal>
            <StaggerGroup class="timeline" stagger={Duration::from_millis(200)}>
                { for items }
            </StaggerGroup>
        </section>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    let cards = PROJECTS.iter().map(|project| {
        html_nested! {
            <StaggerChild class="card">
                <h3>{project.name}</h3>
                <p>{project.description}</p>
                <ul class="tags">
                    { for project.tags.iter().map(|tag| html! { <li>{*tag}</li> }) }
                </ul>
                <a href={project.link} target="_blank" rel="noopener noreferrer">{"Source"}</a>
            </StaggerChild>
        }
    });
    html! {
        <section id="projects" class="section">
            <ParallaxOffset speed={0.3}>
                <FadeReveal>
                    <h2 class="section__title">{"Projects"}</h2>
                </FadeReveal>
            </ParallaxOffset>
            <StaggerGroup class="cards" stagger={Duration::from_millis(150)}>
                { for cards }
            </StaggerGroup>
        </section>
    }
}

#[function_component(Skills)]
fn skills() -> Html {
    let groups = SKILL_GROUPS.iter().map(|group| {
        let bars = group.skills.iter().map(|skill| {
            let style = format!("width: {}%;", skill.level);
            html! {
                <li class="skill">
                    <span class="skill__name">{skill.name}</span>
                    <span
                        class="skill__track"
                        role="meter"
                        aria-label={skill.name}
                        aria-valuemin="0"
                        aria-valuemax="100"
                        aria-valuenow={skill.level.to_string()}
                    >
                        <span class="skill__bar" {style}></span>
                    </span>
                </li>
            }
        });
        html_nested! {
            <StaggerChild class="card">
                <h3>{group.title}</h3>
                <ul class="skills">{ for bars }</ul>
            </StaggerChild>
        }
    });
    html! {
        <section id="skills" class="section">
            <FadeReveal>
                <h2 class="section__title">{"Skills"}</h2>
            </FadeReveal>
            <StaggerGroup class="cards">
                { for groups }
            </StaggerGroup>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let quotes = TESTIMONIALS.iter().map(|entry| {
        html_nested! {
            <StaggerChild class="card">
                <blockquote>{entry.quote}</blockquote>
                <p class="testimonial__author">{entry.author}</p>
                <p class="testimonial__role">{entry.role}</p>
            </StaggerChild>
        }
    });
    html! {
        <section id="testimonials" class="section">
            <FadeReveal>
                <h2 class="section__title">{"Testimonials"}</h2>
            </FadeReveal>
            <StaggerGroup class="cards" stagger={Duration::from_millis(300)}>
                { for quotes }
            </StaggerGroup>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let links = CONTACT_LINKS.iter().map(|(label, href)| {
        html_nested! {
            <StaggerChild>
                <MagneticHover>
                    <a class="button" href={*href} target="_blank" rel="noopener noreferrer">{*label}</a>
                </MagneticHover>
            </StaggerChild>
        }
    });
    html! {
        <section id="contact" class="section">
            <FadeReveal direction={Direction::Down}>
                <h2 class="section__title">{"Contact"}</h2>
                <p>
                    {"Have a project in mind? Write to "}
                    <a href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a>
                </p>
            </FadeReveal>
            <StaggerGroup class="contact__links">
                <StaggerChild>
                    <MagneticHover>
                        <a class="button button--primary" href={format!("mailto:{CONTACT_EMAIL}")}>
                            {"Say hello"}
                        </a>
                    </MagneticHover>
                </StaggerChild>
                { for links }
            </StaggerGroup>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let handle = use_context::<DisplayModeHandle>();
    let choose = |mode: DisplayMode| {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(handle) = handle.as_ref() {
                handle.set_mode(mode);
            }
        })
    };
    let match_system = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(handle) = handle.as_ref() {
                handle.follow_system();
            }
        })
    };
    let current = handle.as_ref().and_then(DisplayModeHandle::mode);
    html! {
        <footer class="site-footer">
            <p>{format!("\u{00A9} {OWNER}")}</p>
            <div class="site-footer__theme" role="group" aria-label="Theme">
                <button
                    type="button"
                    aria-pressed={(current == Some(DisplayMode::Light)).to_string()}
                    onclick={choose(DisplayMode::Light)}
                >
                    {"Light"}
                </button>
                <button
                    type="button"
                    aria-pressed={(current == Some(DisplayMode::Dark)).to_string()}
                    onclick={choose(DisplayMode::Dark)}
                >
                    {"Dark"}
                </button>
                <button type="button" onclick={match_system}>{"Match system theme"}</button>
            </div>
        </footer>
    }
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let display = use_display_mode();
    let menu_open = use_state_eq(|| false);

    let on_navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |id: &'static str| {
            scroll_to_section(id);
            menu_open.set(false);
        })
    };
    let on_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |()| menu_open.set(!*menu_open))
    };

    if !display.is_ready() {
        return html! {
            <div class="boot" aria-busy="true">
                <div class="spinner" role="status" aria-label="Loading"></div>
                <LoadingSkeleton class="boot__skeleton" />
            </div>
        };
    }

    let dark = display.is_dark();

    html! {
        <ContextProvider<DisplayModeHandle> context={display}>
            <div class={classes!("page", dark.then_some("page--dark"))}>
                <ScrollProgressBar />
                <Header
                    menu_open={*menu_open}
                    on_navigate={on_navigate.clone()}
                    {on_menu}
                />
                <main>
                    <Hero {on_navigate} />
                    <About />
                    <Experience />
                    <Projects />
                    <Skills />
                    <Testimonials />
                    <Contact />
                </main>
                <Footer />
            </div>
        </ContextProvider<DisplayModeHandle>>
    }
}

pub(crate) fn run() {
    install_motion_styles();
    yew::Renderer::<App>::new().render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test(async)]
    async fn app_mounts_every_section() {
        set_panic_hook();
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        root.set_id("page-test-root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        let _app_handle = yew::Renderer::<App>::with_root(root.clone()).render();
        TimeoutFuture::new(100).await;
        for id in section_ids() {
            assert!(
                document.get_element_by_id(id).is_some(),
                "section {id} missing"
            );
        }
        let toggle = root
            .query_selector(".theme-toggle")
            .expect("query toggle")
            .expect("toggle rendered");
        let label = toggle.get_attribute("aria-label").unwrap_or_default();
        assert!(label.starts_with("Switch to "), "unexpected label {label}");

        // Scroll spy: put the about section just under the probe line.
        let window = web_sys::window().expect("window");
        let spacer = document.create_element("div").expect("create spacer");
        spacer
            .set_attribute("style", "height: 4000px;")
            .expect("size spacer");
        document
            .body()
            .expect("body available")
            .append_child(&spacer)
            .expect("append spacer");
        let about = document.get_element_by_id("about").expect("about section");
        let about_top = about.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0);
        window.scroll_to_with_x_and_y(0.0, about_top - 50.0);
        TimeoutFuture::new(200).await;
        let active = root
            .query_selector(".nav__link--active")
            .expect("query active link")
            .expect("active link rendered");
        assert_eq!(active.text_content().as_deref(), Some("About"));
    }
}
