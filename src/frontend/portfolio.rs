use super::dom::{apply_preload_commands, create_ripple, now_ms, set_body_scroll_locked};
use super::driver::Driver;
use super::icons;
use super::player::MediaItem;
use super::widgets::{Animated, Reveal, Section, TypewriterTitle};
use crate::carousel::{CarouselEngine, Direction};
use crate::catalog::{Catalog, PortfolioCategory, PortfolioItem};
use crate::modal::ModalKey;
use crate::progress::IndicatorDot;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, KeyboardEvent, MouseEvent};
use yew::prelude::*;

type Carousel = Driver<CarouselEngine>;

#[derive(Properties, PartialEq)]
struct ProgressDotsProps {
    dots: Vec<IndicatorDot>,
    on_select: Callback<usize>,
}

#[function_component(ProgressDots)]
fn progress_dots(props: &ProgressDotsProps) -> Html {
    html! {
        <div class="flex justify-center items-center flex-wrap gap-3 mt-8">
            { for props.dots.iter().map(|dot| {
                let onclick = {
                    let index = dot.index;
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(index))
                };
                html! {
                    <button key={dot.index} aria-label={dot.label.clone()} onclick={onclick} class={classes!("portfolio-nav-dot", dot.active.then_some("active"))}>
                        <svg class="progress-ring" width="24" height="24" viewBox="0 0 24 24">
                            <circle class="progress-ring__circle-bg" cx="12" cy="12" r="10" />
                            <circle
                                class={classes!("progress-ring__circle", dot.duration_class)}
                                cx="12"
                                cy="12"
                                r="10"
                                style={format!("animation-play-state: {}", dot.play_state())}
                            />
                        </svg>
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PortfolioModalProps {
    item: PortfolioItem,
    on_key: Callback<ModalKey>,
}

#[function_component(PortfolioModal)]
fn portfolio_modal(props: &PortfolioModalProps) -> Html {
    use_effect_with(props.on_key.clone(), |on_key| {
        let on_key = on_key.clone();
        let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if let Some(key) = ModalKey::from_key(&event.key()) {
                on_key.emit(key);
            }
        });

        set_body_scroll_locked(true);
        let win = window();
        if let Some(win) = win.as_ref() {
            let _ = win.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
        }

        move || {
            set_body_scroll_locked(false);
            if let Some(win) = win {
                let _ = win.remove_event_listener_with_callback(
                    "keydown",
                    listener.as_ref().unchecked_ref(),
                );
            }
        }
    });

    let emit = |key: ModalKey| {
        let on_key = props.on_key.clone();
        Callback::from(move |_: MouseEvent| on_key.emit(key))
    };
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={emit(ModalKey::Close)} role="dialog" aria-modal="true" aria-labelledby="modal-title">
            <div class="modal-container" onclick={keep_open}>
                <div class="modal-media-content">
                    <MediaItem item={props.item.clone()} is_current={true} />
                </div>
                <div class="modal-title-overlay">
                    <h2 id="modal-title" class="text-2xl md:text-3xl font-playfair font-bold text-gold text-shadow-lg">{props.item.title.clone()}</h2>
                </div>
                <button aria-label="Close" onclick={emit(ModalKey::Close)} class="modal-close-btn">
                    {icons::close("w-6 h-6")}
                </button>
                <button aria-label="Previous Item" onclick={emit(ModalKey::Step(Direction::Prev))} class="modal-nav-btn left-4">
                    {icons::chevron_left("w-8 h-8")}
                </button>
                <button aria-label="Next Item" onclick={emit(ModalKey::Step(Direction::Next))} class="modal-nav-btn right-4">
                    {icons::chevron_right("w-8 h-8")}
                </button>
            </div>
        </div>
    }
}

fn category_filters(carousel: &Rc<Carousel>, active: PortfolioCategory) -> Html {
    html! {
        <Animated stagger={true} animation={Reveal::SlideInBottom} class="flex justify-center flex-wrap gap-2 md:gap-4 mb-12">
            { for PortfolioCategory::VARIANTS.iter().map(|category| {
                let category = *category;
                let onclick = {
                    let carousel = carousel.clone();
                    Callback::from(move |event: MouseEvent| {
                        create_ripple(&event);
                        carousel.update(|engine, now| engine.set_category(category, now));
                    })
                };
                html! {
                    <button key={category.label()} onclick={onclick} class={classes!("btn-filter", "ripple-btn", (category == active).then_some("active"))}>
                        {category.label()}
                    </button>
                }
            }) }
        </Animated>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioSectionProps {
    pub catalog: Rc<Catalog>,
}

#[function_component(PortfolioSection)]
pub fn portfolio_section(props: &PortfolioSectionProps) -> Html {
    let rerender = use_force_update();
    let carousel = {
        let catalog = props.catalog.clone();
        use_memo((), move |_| {
            let engine = CarouselEngine::new(catalog, now_ms());
            Carousel::with_flush(
                engine,
                Callback::from(move |_| rerender.force_update()),
                |engine| apply_preload_commands(engine.drain_preload_commands()),
            )
        })
    };

    {
        let carousel = carousel.clone();
        use_effect_with((), move |_| {
            carousel.sync();
            move || carousel.stop(CarouselEngine::teardown)
        });
    }

    let on_modal_key = {
        let carousel = carousel.clone();
        use_callback((), move |key: ModalKey, _| {
            carousel.update(|engine, now| engine.handle_modal_key(key, now));
        })
    };

    let engine = carousel.state();
    let title = html! {
        <div class="text-center mb-12">
            <TypewriterTitle text="Our Portfolio" class="text-4xl md:text-5xl font-playfair font-bold text-gold" />
        </div>
    };
    let filters = category_filters(&carousel, engine.category());

    let Some(current) = engine.current_item().cloned() else {
        return html! {
            <Section id="portfolio" class="bg-black">
                {title}
                {filters}
                <p class="text-center text-gray-400 mt-8">{"No portfolio items to display for this category."}</p>
            </Section>
        };
    };

    let hover = |hovered: bool| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.update(|engine, now| engine.set_hovered(hovered, now)))
    };
    let step = |direction: Direction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.update(|engine, now| engine.navigate(direction, now));
        })
    };
    let open_modal = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.update(|engine, now| engine.open_modal(now));
        })
    };
    let on_dot = {
        let carousel = carousel.clone();
        Callback::from(move |index: usize| {
            carousel.update(|engine, now| engine.go_to(index, now));
        })
    };

    let outgoing = engine.outgoing_item().cloned().map(|item| {
        html! {
            <div class="absolute inset-0 w-full h-full animate-cinematic-crossfade-out" key={format!("outgoing-{}", item.id)}>
                <MediaItem item={item} is_current={false} />
            </div>
        }
    });
    let selected = engine.selected_item().cloned();
    let current_key = current.id.to_string();
    let current_title = current.title.clone();

    html! {
        <Section id="portfolio" class="bg-black">
            {title}
            {filters}
            <Animated animation={Reveal::ZoomIn} style={AttrValue::Static("animation-delay: 200ms")} class="max-w-5xl mx-auto">
                <div class="relative aspect-video overflow-hidden rounded-lg shadow-lg shadow-gold/10 group" onmouseenter={hover(true)} onmouseleave={hover(false)}>
                    {outgoing}
                    <div class="absolute inset-0 w-full h-full animate-cinematic-crossfade-in" key={current_key}>
                        <MediaItem item={current} is_current={engine.main_video_active()} />
                    </div>
                    <div class="absolute inset-0 z-10 rounded-lg pointer-events-none ring-2 ring-transparent transition-all duration-500 ease-cinematic group-hover:ring-gold group-hover:shadow-[0_0_25px_rgba(191,166,105,0.7)]"></div>
                    <button onclick={open_modal} class="absolute inset-0 bg-transparent z-20 focus:outline-none focus-visible-ring" aria-label={format!("View details for {current_title}")}>
                        <div class="absolute inset-0 flex items-end justify-center p-6 pb-12 text-white bg-gradient-to-t from-black/80 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500 ease-cinematic pointer-events-none">
                            <h3 class="text-2xl md:text-3xl font-playfair font-bold text-shadow-lg text-center text-gold">{current_title.clone()}</h3>
                        </div>
                    </button>
                    <button aria-label="Previous Item" onclick={step(Direction::Prev)} class="portfolio-nav-arrow left-4">
                        {icons::chevron_left("w-6 h-6")}
                    </button>
                    <button aria-label="Next Item" onclick={step(Direction::Next)} class="portfolio-nav-arrow right-4">
                        {icons::chevron_right("w-6 h-6")}
                    </button>
                </div>
            </Animated>
            <Animated animation={Reveal::SlideInBottom} style={AttrValue::Static("animation-delay: 400ms")}>
                <ProgressDots dots={engine.indicator()} on_select={on_dot} />
            </Animated>
            { for selected.map(|item| html! { <PortfolioModal item={item} on_key={on_modal_key.clone()} /> }) }
        </Section>
    }
}
