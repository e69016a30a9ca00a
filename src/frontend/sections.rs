use super::dom::{create_ripple, handle_anchor_click};
use super::hooks::{use_in_view, use_parallax, use_scroll_y};
use super::icons;
use super::player::{pause, play};
use super::widgets::{Animated, AnimatedWords, ParticleBackground, Reveal, Section, TypewriterTitle};
use crate::content::{
    Service, ABOUT_COPY, ABOUT_IMAGES, ABOUT_KEY_POINTS, FOOTER_LINKS, HEADER_LINKS, HERO_SUBTITLE,
    HERO_TITLE, HERO_VIDEO, PROCESS_STEPS, REASONS, SERVICES, SOCIAL_LINKS,
};
use crate::motion::{header_is_scrolled, hero_glow_delay_ms, hero_subtitle_cascade, hero_title_cascade};
use gloo_timers::callback::Timeout;
use web_sys::{HtmlVideoElement, MouseEvent};
use yew::prelude::*;

const SECTION_TITLE_CLASS: &str = "text-4xl md:text-5xl font-playfair font-bold text-gold";
const CTA_FOLLOW_UP_DELAY_S: f64 = 0.2;

fn anchor_onclick(ripple: bool) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        if ripple {
            create_ripple(&event);
        }
        handle_anchor_click(&event);
    })
}

#[function_component(Header)]
pub fn header() -> Html {
    let scrolled = header_is_scrolled(use_scroll_y());
    let backdrop = if scrolled {
        "bg-black/80 backdrop-blur-sm shadow-lg shadow-gold/10"
    } else {
        "bg-transparent"
    };

    html! {
        <header id="main-header" class={classes!("fixed", "top-0", "left-0", "right-0", "z-50", "transition-all", "duration-300", backdrop)}>
            <div class="container mx-auto px-6 py-4 flex justify-between items-center">
                <a href="#home" onclick={anchor_onclick(false)} class="focus-visible-ring" aria-label="LuxAiCreations Home">
                    <img src="/assets/images/logo1.png" alt="LuxAiCreations Logo" class="h-32 w-auto" />
                </a>
                <nav class="hidden md:flex items-center space-x-8">
                    { for HEADER_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href} onclick={anchor_onclick(false)} class="text-white hover:text-gold transition-colors duration-300 focus-visible-ring nav-link-hover-effect">
                            {link.label}
                        </a>
                    }) }
                </nav>
            </div>
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-black border-t border-gray-800 py-12">
            <div class="container mx-auto px-6 text-center text-gray-400">
                <div class="flex justify-center space-x-6 mb-6">
                    { for SOCIAL_LINKS.iter().enumerate().map(|(index, link)| {
                        let delay = index as f64 * 0.1;
                        let style = format!(
                            "animation: draw-in 1.5s ease-out forwards {delay:.1}s, float-up-down 4s ease-in-out infinite {:.1}s; stroke-dasharray: 100; stroke-dashoffset: 100;",
                            1.5 + delay
                        );
                        html! {
                            <a key={link.label} href={link.href} target="_blank" rel="noopener noreferrer" aria-label={link.label} class="hover:text-gold transition-colors duration-300 group focus-visible-ring rounded-full">
                                {icons::social_icon(link.icon, "w-6 h-6 transition-all duration-300 ease-cinematic neon-glow-on-hover", style)}
                            </a>
                        }
                    }) }
                </div>
                <div class="flex justify-center flex-wrap gap-x-6 gap-y-2 mb-6">
                    { for FOOTER_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href} onclick={anchor_onclick(false)} class="hover:text-gold focus-visible-ring nav-link-hover-effect">{link.label}</a>
                    }) }
                </div>
                <div class="mt-4 text-sm text-gray-500">
                    <span class="shimmer-text" spellcheck="false">{"© 2025 LuxAiCreations."}</span>
                    <a href="privacy.html" class="ml-4 hover:text-gold transition-colors duration-300 focus-visible-ring" target="_blank" rel="noopener noreferrer">{"Privacy Policy"}</a>
                </div>
            </div>
        </footer>
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let parallax = use_parallax(-0.15);
    let glowing = use_state(|| false);
    let title = hero_title_cascade(HERO_TITLE);
    let subtitle = hero_subtitle_cascade(HERO_SUBTITLE);

    {
        let setter = glowing.setter();
        let delay = hero_glow_delay_ms(&title);
        use_effect_with((), move |_| {
            let timer = Timeout::new(delay, move || setter.set(true));
            move || drop(timer)
        });
    }

    let title_class = if *glowing {
        "text-gold animate-title-glow"
    } else {
        "text-shadow-lg"
    };
    let cta_delay = subtitle.end_time();

    html! {
        <section id="home" class="h-screen w-full relative flex items-center justify-center text-center text-white overflow-hidden">
            <div class="absolute top-0 left-0 w-full h-full" style={format!("transform: {parallax}")}>
                <video preload="metadata" autoplay={true} loop={true} muted={true} playsinline={true} class="absolute top-0 left-0 w-full h-full object-cover z-0" src={HERO_VIDEO}></video>
            </div>
            <ParticleBackground count={50} />
            <div class="absolute inset-0 bg-gradient-to-t from-black via-black/60 to-transparent z-10"></div>
            <div class="relative z-20 p-4">
                <h1 class={classes!("text-4xl", "md:text-6xl", "font-playfair", "font-extrabold", "mb-4", "transition-colors", "duration-1000", title_class)} spellcheck="false">
                    <AnimatedWords text={HERO_TITLE} cascade={title} />
                </h1>
                <p class="text-lg md:text-2xl mb-8 max-w-3xl mx-auto font-light">
                    <AnimatedWords text={HERO_SUBTITLE} cascade={subtitle} animation_name="subtleFloatIn" />
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Animated animation={Reveal::SlideInBottom} style={AttrValue::from(format!("animation-delay: {cta_delay}s"))}>
                        <a href="#portfolio" onclick={anchor_onclick(true)} class="btn-primary ripple-btn animate-pulse-glow font-bold py-3 px-8 rounded-full text-lg focus-visible-ring">
                            {"View Portfolio"}
                        </a>
                    </Animated>
                    <Animated animation={Reveal::SlideInBottom} style={AttrValue::from(format!("animation-delay: {}s", cta_delay + CTA_FOLLOW_UP_DELAY_S))}>
                        <a href="#contact" onclick={anchor_onclick(true)} class="btn-secondary ripple-btn text-white font-bold py-3 px-8 rounded-full text-lg focus-visible-ring">
                            {"Contact Us"}
                        </a>
                    </Animated>
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let [fast, slow] = ABOUT_IMAGES;
    let fast_parallax = use_parallax(fast.parallax_speed);
    let slow_parallax = use_parallax(slow.parallax_speed);

    html! {
        <Section id="about" class="bg-black relative perspective">
            <ParticleBackground count={10} min_speed={40.0} max_speed={80.0} min_size={0.5} max_size={2.0} class="opacity-50" />
            <div class="relative z-10">
                <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-12 items-center">
                    <div class="text-center md:text-left">
                        <div class="mb-6">
                            <TypewriterTitle text="About LuxAiCreations" class={SECTION_TITLE_CLASS} />
                        </div>
                        <Animated animation={Reveal::SettleIn}>
                            <p class="text-lg md:text-xl text-gray-300 leading-relaxed mb-6">{ABOUT_COPY}</p>
                        </Animated>
                        <Animated stagger={true} animation={Reveal::SettleIn}>
                            { for ABOUT_KEY_POINTS.iter().map(|point| html! {
                                <div key={*point} class="flex items-center gap-3 group mb-2">
                                    {icons::check("w-5 h-5 text-gold flex-shrink-0 transition-all duration-300 ease-cinematic neon-glow-on-hover")}
                                    <span class="transition-colors group-hover:text-white">{*point}</span>
                                </div>
                            }) }
                        </Animated>
                    </div>
                    <div class="grid grid-cols-2 gap-4 h-full">
                        <Animated animation={Reveal::SlideInLeft} threshold={0.3}>
                            <div class="rounded-lg shadow-xl" style={format!("transform: {fast_parallax} rotateY(-5deg)")}>
                                <img loading="lazy" src={fast.src} alt={fast.alt} class="w-full h-full object-cover" />
                            </div>
                        </Animated>
                        <Animated animation={Reveal::SlideInFromRight} threshold={0.3} style={AttrValue::Static("animation-delay: 200ms")}>
                            <div class="rounded-lg shadow-xl mt-8" style={format!("transform: {slow_parallax} rotateY(5deg)")}>
                                <img loading="lazy" src={slow.src} alt={slow.alt} class="w-full h-full object-cover" />
                            </div>
                        </Animated>
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
    on_select: Callback<AttrValue>,
}

/// Service tile whose background video only plays while the card is on screen.
#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let (card, in_view) = use_in_view(0.4, false);
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_effect_with(in_view, move |in_view| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                if *in_view {
                    play(&video);
                } else {
                    pause(&video);
                }
            }
            || ()
        });
    }

    let onclick = {
        let title = props.service.title;
        let on_select = props.on_select.clone();
        Callback::from(move |event: MouseEvent| {
            create_ripple(&event);
            on_select.emit(AttrValue::Static(title));
        })
    };
    let service = props.service;

    html! {
        <button ref={card} onclick={onclick} class="group focus-visible-ring rounded-xl cursor-pointer text-left w-full ripple-btn">
            <div class="relative overflow-hidden rounded-xl min-h-[450px] shadow-lg shadow-black/50 flex flex-col justify-end transition-all duration-500 ease-cinematic group-hover:-translate-y-4 group-hover:scale-[1.02] group-hover:shadow-[0_10px_40px_-10px_rgba(191,166,105,0.4)]">
                <div class="service-card-visual-wrapper">
                    <div class="service-card-border-completer"></div>
                </div>
                <video ref={video_ref} key={service.video_src} loop={true} muted={true} playsinline={true} preload="metadata" class="absolute top-0 left-0 w-full h-full object-cover -z-10 transition-all duration-500 ease-cinematic group-hover:scale-110" src={service.video_src}></video>
                <div class="absolute inset-0 bg-gradient-to-t from-black via-black/80 to-transparent transition-all duration-500 group-hover:bg-black/60"></div>
                <div class="relative z-10 text-center p-8">
                    <div class="flex justify-center items-center h-24 w-24 mb-6 mx-auto transition-transform duration-500 ease-cinematic group-hover:scale-110">
                        {icons::service_icon(service.icon)}
                    </div>
                    <h3 class="text-xl font-playfair font-bold mb-4" spellcheck="false">{service.title}</h3>
                    <p class="text-gray-400 mb-6 text-sm">{service.description}</p>
                    <span class="font-bold text-gold text-sm cta-shimmer-text">{"Inquire Now →"}</span>
                </div>
            </div>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct InquiryProps {
    pub on_inquiry: Callback<AttrValue>,
}

#[function_component(ServicesSection)]
pub fn services_section(props: &InquiryProps) -> Html {
    html! {
        <Section id="services" class="bg-gradient-to-br from-black via-gray-900 to-black relative">
            <ParticleBackground count={20} />
            <div class="text-center mb-20 relative z-10">
                <TypewriterTitle text="Our Services" class={SECTION_TITLE_CLASS} />
            </div>
            <div class="max-w-7xl mx-auto relative z-10">
                <Animated stagger={true} animation={Reveal::SettleIn} class="grid md:grid-cols-2 lg:grid-cols-4 gap-10">
                    { for SERVICES.iter().map(|service| html! {
                        <ServiceCard key={service.title} service={*service} on_select={props.on_inquiry.clone()} />
                    }) }
                </Animated>
            </div>
        </Section>
    }
}

#[function_component(WhyChooseUsSection)]
pub fn why_choose_us_section(props: &InquiryProps) -> Html {
    html! {
        <Section id="why-us" class="bg-black">
            <div class="text-center mb-20">
                <TypewriterTitle text="Why Choose Us" class={SECTION_TITLE_CLASS} />
            </div>
            <Animated stagger={true} animation={Reveal::SettleIn} class="max-w-6xl mx-auto grid md:grid-cols-3 gap-12 text-center">
                { for REASONS.iter().map(|reason| {
                    let onclick = {
                        let title = reason.title;
                        let on_inquiry = props.on_inquiry.clone();
                        Callback::from(move |event: MouseEvent| {
                            create_ripple(&event);
                            on_inquiry.emit(AttrValue::Static(title));
                        })
                    };
                    html! {
                        <button key={reason.title} onclick={onclick} class="group focus-visible-ring rounded-xl ripple-btn">
                            <div class="flex justify-center items-center h-24 w-24 mb-6 mx-auto transition-transform duration-500 ease-cinematic group-hover:scale-110">
                                {icons::reason_icon(reason.icon)}
                            </div>
                            <h3 class="text-2xl font-playfair font-bold mb-4" spellcheck="false">{reason.title}</h3>
                            <p class="text-gray-400 leading-relaxed">{reason.description}</p>
                        </button>
                    }
                }) }
            </Animated>
        </Section>
    }
}

#[function_component(CreativeProcessSection)]
pub fn creative_process_section() -> Html {
    html! {
        <Section id="process" class="bg-gradient-to-bl from-black via-gray-900 to-black relative">
            <ParticleBackground count={15} class="opacity-50" />
            <div class="text-center mb-20 relative z-10">
                <TypewriterTitle text="Our Creative Process" class={SECTION_TITLE_CLASS} />
            </div>
            <Animated stagger={true} animation={Reveal::SettleIn} class="max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 relative z-10">
                { for PROCESS_STEPS.iter().map(|step| html! {
                    <div key={step.title} class="group">
                        <div class="h-full bg-black/30 backdrop-blur-sm p-8 rounded-2xl border border-gold/10 transition-all duration-500 ease-cinematic process-card-hover">
                            <div class="flex justify-center items-center h-24 w-24 mb-6 mx-auto transition-transform duration-500 ease-cinematic group-hover:scale-110">
                                {icons::step_icon(step.icon)}
                            </div>
                            <h3 class="text-xl font-playfair font-bold mb-4 text-center" spellcheck="false">{step.title}</h3>
                            <p class="text-gray-400 leading-relaxed text-center text-sm">{step.description}</p>
                        </div>
                    </div>
                }) }
            </Animated>
        </Section>
    }
}
