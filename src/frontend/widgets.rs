use super::hooks::{use_in_view, use_typewriter};
use crate::motion::WordCascade;
use js_sys::Math;
use yew::prelude::*;

const STAGGER_STEP_MS: usize = 150;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class={classes!("py-20", "md:py-32", "overflow-hidden", props.class.clone())}>
            <div class="container mx-auto px-6">{props.children.clone()}</div>
        </section>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    FadeIn,
    SlideInLeft,
    SlideInFromRight,
    SlideInBottom,
    ZoomIn,
    SettleIn,
}

impl Reveal {
    fn class(self) -> &'static str {
        match self {
            Self::SlideInLeft => "animate-slide-in-left",
            Self::SlideInFromRight => "animate-slide-in-from-right",
            Self::SlideInBottom => "animate-slide-in-bottom",
            Self::SettleIn => "animate-settle-in",
            Self::FadeIn | Self::ZoomIn => "animate-zoom-in-fade",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(Reveal::FadeIn)]
    pub animation: Reveal,
    /// Reveals children one after another instead of as a block.
    #[prop_or_default]
    pub stagger: bool,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or(0.2)]
    pub threshold: f64,
}

/// Holds its content invisible until it scrolls into view, then plays `animation`.
#[function_component(Animated)]
pub fn animated(props: &AnimatedProps) -> Html {
    let (node, in_view) = use_in_view(props.threshold, true);
    let reveal = if in_view { props.animation.class() } else { "opacity-0" };

    if props.stagger {
        let children = props
            .children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                let delay = if in_view { index * STAGGER_STEP_MS } else { 0 };
                html! {
                    <div class={classes!("transition-all", "duration-500", reveal)} style={format!("animation-delay: {delay}ms")}>
                        {child}
                    </div>
                }
            })
            .collect::<Html>();

        return html! {
            <div ref={node} class={props.class.clone()} style={props.style.clone()}>{children}</div>
        };
    }

    html! {
        <div ref={node} class={classes!(props.class.clone(), "transition-opacity", "duration-700", reveal)} style={props.style.clone()}>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterTitleProps {
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("h2"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypewriterTitle)]
pub fn typewriter_title(props: &TypewriterTitleProps) -> Html {
    let (node, in_view) = use_in_view(0.5, true);
    let shown = use_typewriter(props.text.clone(), in_view);
    let class = classes!(
        props.class.clone(),
        "transition-all",
        "duration-1000",
        if in_view { "animate-dramatic-settle-in" } else { "opacity-0" }
    );

    html! {
        <div ref={node} class="min-h-[1.5em] md:min-h-[1.5em]">
            <@{props.tag.to_string()} class={class} spellcheck="false" aria-label={props.text.clone()}>
                {shown}
            </@>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedWordsProps {
    pub text: AttrValue,
    pub cascade: WordCascade,
    #[prop_or(AttrValue::Static("floatIn"))]
    pub animation_name: AttrValue,
}

/// One inline span per word, each entering on its own delay.
#[function_component(AnimatedWords)]
pub fn animated_words(props: &AnimatedWordsProps) -> Html {
    props
        .text
        .split_whitespace()
        .enumerate()
        .map(|(index, word)| {
            html! {
                <span key={index} class="inline-block" style={props.cascade.animation_css(&props.animation_name, index)}>
                    {word}{"\u{a0}"}
                </span>
            }
        })
        .collect::<Html>()
}

#[derive(Properties, PartialEq)]
pub struct ParticleProps {
    #[prop_or(15)]
    pub count: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(10.0)]
    pub min_speed: f64,
    #[prop_or(25.0)]
    pub max_speed: f64,
    #[prop_or(1.0)]
    pub min_size: f64,
    #[prop_or(4.0)]
    pub max_size: f64,
}

fn between(min: f64, max: f64) -> f64 {
    Math::random() * (max - min) + min
}

fn particle_style(props: &ParticleProps) -> String {
    let size = between(props.min_size, props.max_size);
    format!(
        "left: {:.2}%; top: {:.2}%; width: {size:.2}px; height: {size:.2}px; animation-delay: {:.2}s; animation-duration: {:.2}s; --end-x: {:.1}px; --end-y: {:.1}px;",
        Math::random() * 100.0,
        Math::random() * 100.0,
        Math::random() * 5.0,
        between(props.min_speed, props.max_speed),
        between(-100.0, 100.0),
        between(-100.0, 100.0),
    )
}

#[function_component(ParticleBackground)]
pub fn particle_background(props: &ParticleProps) -> Html {
    // Rolled once per mount so particles keep their paths across re-renders.
    let styles = use_state(|| (0..props.count).map(|_| particle_style(props)).collect::<Vec<_>>());

    html! {
        <div class={classes!("absolute", "top-0", "left-0", "w-full", "h-full", "overflow-hidden", "pointer-events-none", "z-0", props.class.clone())}>
            { for styles.iter().enumerate().map(|(index, style)| html! {
                <div key={index} class="particle" style={style.clone()}></div>
            }) }
        </div>
    }
}
