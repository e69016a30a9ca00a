use crate::content::{ReasonIcon, ServiceIcon, SocialIcon, StepIcon};
use std::f64::consts::PI;
use yew::prelude::*;

fn ring_point(radius: f64, index: usize, count: usize) -> (f64, f64) {
    let angle = 2.0 * PI * index as f64 / count as f64;
    (50.0 + radius * angle.cos(), 50.0 + radius * angle.sin())
}

pub fn social_icon(icon: SocialIcon, class: &'static str, style: String) -> Html {
    let body = match icon {
        SocialIcon::Instagram => html! {
            <>
                <rect x="2" y="2" width="20" height="20" rx="5" ry="5"></rect>
                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path>
                <line x1="17.5" y1="6.5" x2="17.51" y2="6.5"></line>
            </>
        },
        SocialIcon::Twitter => html! {
            <path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"></path>
        },
        SocialIcon::Facebook => html! {
            <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"></path>
        },
        SocialIcon::LinkedIn => html! {
            <>
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path>
                <rect x="2" y="9" width="4" height="12"></rect>
                <circle cx="4" cy="4" r="2"></circle>
            </>
        },
        SocialIcon::Email => html! {
            <>
                <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path>
                <polyline points="22,6 12,13 2,6"></polyline>
            </>
        },
    };

    html! {
        <svg class={class} style={style} xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
            {body}
        </svg>
    }
}

fn chevron(path: &'static str, class: &'static str) -> Html {
    html! {
        <svg class={class} xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={path} />
        </svg>
    }
}

pub fn chevron_left(class: &'static str) -> Html {
    chevron("M15 19l-7-7 7-7", class)
}

pub fn chevron_right(class: &'static str) -> Html {
    chevron("M9 5l7 7-7 7", class)
}

pub fn close(class: &'static str) -> Html {
    chevron("M6 18L18 6M6 6l12 12", class)
}

pub fn check(class: &'static str) -> Html {
    chevron("M5 13l4 4L19 7", class)
}

fn diamond() -> Html {
    html! {
        <div class="relative w-20 h-20 diamond-shimmer">
            <svg class="w-full h-full" viewBox="0 0 100 100" style="animation: slow-rotate 30s linear infinite">
                <defs>
                    <linearGradient id="diamond-grad-1" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" stop-color="#fff" stop-opacity="0.8" />
                        <stop offset="100%" stop-color="#d1f0f9" stop-opacity="0.6" />
                    </linearGradient>
                    <linearGradient id="diamond-grad-2" x1="0%" y1="100%" x2="100%" y2="0%">
                        <stop offset="0%" stop-color="#a8d5e2" stop-opacity="0.7" />
                        <stop offset="100%" stop-color="#7ac5d8" stop-opacity="0.5" />
                    </linearGradient>
                    <filter id="diamond-glow"><feGaussianBlur stdDeviation="1" /></filter>
                </defs>
                <path d="M 50 95 L 10 50 L 90 50 Z" fill="#7AC5D8" />
                <path d="M 10 50 L 30 50 L 50 20 Z" fill="url(#diamond-grad-2)" />
                <path d="M 90 50 L 70 50 L 50 20 Z" fill="url(#diamond-grad-2)" opacity="0.7" />
                <path d="M 50 95 L 30 50 L 70 50 Z" fill="#98d0df" />
                <path d="M 50 5 L 10 50 L 50 20 Z" fill="#e1f4f9" />
                <path d="M 50 5 L 90 50 L 50 20 Z" fill="#fff" />
                <path d="M 30 50 L 70 50 L 50 20 Z" fill="url(#diamond-grad-1)" />
                <line x1="10" y1="50" x2="90" y2="50" stroke="#FFFFFF" stroke-width="0.5" opacity="0.5" />
                <path d="M 50 5 L 40 28 L 50 20 Z" fill="white" opacity="0" filter="url(#diamond-glow)" class="diamond-glint" />
            </svg>
        </div>
    }
}

pub fn service_icon(icon: ServiceIcon) -> Html {
    match icon {
        ServiceIcon::Video => html! {
            <div class="relative w-20 h-20">
                <svg class="w-full h-full text-gold" viewBox="0 0 64 64" fill="none" stroke="currentColor" stroke-width="1">
                    <rect x="6" y="18" width="36" height="28" rx="2" />
                    <rect x="42" y="24" width="16" height="16" rx="1" />
                    <circle cx="50" cy="32" r="5" fill="currentColor" fill-opacity="0.2" />
                    <circle cx="50" cy="32" r="7" style="animation: lens-pulse 2.5s ease-in-out infinite" />
                    <path d="M12 18 V 14 H 20" />
                    <path d="M22 14 L 28 8 L 36 8" />
                    <circle cx="36" cy="22" r="1.5" fill="#ff4d4d" stroke="none" class="recording-blink" />
                </svg>
            </div>
        },
        ServiceIcon::Image => {
            let pixels = (0..100)
                .map(|i| {
                    let style = format!(
                        "animation: render-pixel 5s ease-in-out infinite {:.2}s",
                        js_sys::Math::random() * 5.0
                    );
                    html! {
                        <rect key={i} x={((i % 10) * 4 + 12).to_string()} y={((i / 10) * 4 + 12).to_string()} width="3" height="3" fill="currentColor" opacity="0" style={style} />
                    }
                })
                .collect::<Html>();

            html! {
                <div class="relative w-20 h-20">
                    <svg class="w-full h-full text-gold" viewBox="0 0 64 64" fill="none" stroke="currentColor" stroke-width="1.5">
                        <path d="M20 8 L 44 8 M 8 20 L 8 44 M 20 56 L 44 56 M 56 20 L 56 44" stroke-width="1" opacity="0.5" />
                        <rect x="12" y="12" width="40" height="40" rx="1" stroke-width="1" />
                        <g>{pixels}</g>
                    </svg>
                </div>
            }
        }
        ServiceIcon::Visuals => diamond(),
        ServiceIcon::Cgi => {
            let outer = (0..7)
                .map(|i| {
                    let (cx, cy) = ring_point(48.0, i, 7);
                    let style = format!(
                        "animation: soft-pulse-shimmer 3s ease-in-out infinite {:.1}s",
                        i as f64 * 0.3
                    );
                    html! { <circle key={format!("o-{i}")} cx={cx.to_string()} cy={cy.to_string()} r="3" fill="currentColor" style={style} /> }
                })
                .collect::<Html>();
            let paths = (0..7)
                .map(|i| {
                    let (x, y) = ring_point(48.0, i, 7);
                    let style = format!(
                        "animation: sequential-glow-path 2s ease-out forwards {:.1}s",
                        i as f64 * 0.2
                    );
                    html! { <path key={format!("p-{i}")} d={format!("M50 50 L {x} {y}")} stroke-dasharray="100" stroke-dashoffset="100" style={style} /> }
                })
                .collect::<Html>();

            html! {
                <div class="relative w-20 h-20">
                    <svg class="w-full h-full text-gold" style="animation: slow-rotate 25s linear infinite" viewBox="0 0 100 100" fill="none" stroke="currentColor" stroke-width="0.5">
                        {outer}
                        {paths}
                        <circle cx="50" cy="50" r="10" fill="currentColor" fill-opacity="0.2" style="animation: soft-pulse-shimmer 2s ease-in-out infinite reverse" />
                        <circle cx="50" cy="50" r="5" fill="currentColor" />
                    </svg>
                </div>
            }
        }
    }
}

pub fn reason_icon(icon: ReasonIcon) -> Html {
    match icon {
        ReasonIcon::Quality => html! {
            <div class="relative w-20 h-20">
                <svg class="w-full h-full text-gold" viewBox="0 0 64 64" fill="none" stroke="currentColor" stroke-width="1.5">
                    <g style="animation: float-up-down 6s ease-in-out infinite">
                        <circle cx="28" cy="28" r="14" stroke-width="2" />
                        <line x1="39" y1="39" x2="52" y2="52" stroke-width="3" stroke-linecap="round" />
                        <g transform="translate(28, 28) scale(0.6)">
                            <g style="animation: slow-rotate 15s linear infinite">
                                <path d="M0 -18 L 17.1 -9 L 17.1 9 L 0 18 L -17.1 9 L -17.1 -9 Z" stroke-width="2" />
                                <path d="M0 -18 L 0 18 M -17.1 9 L 17.1 -9 M -17.1 -9 L 17.1 9" stroke-width="1.5" opacity="0.7" />
                            </g>
                        </g>
                    </g>
                </svg>
            </div>
        },
        ReasonIcon::Creativity => html! {
            <div class="relative w-20 h-20">
                <svg class="w-full h-full text-gold" viewBox="0 0 64 64" fill="none" stroke="currentColor" stroke-width="0.5">
                    <path d="M48 52 C 54 44, 52 30, 42 22 C 32 14, 20 18, 14 28 C 8 38, 12 52, 22 56" stroke-width="1" opacity="0.3" />
                    <path d="M20 30 C 25 22, 35 25, 40 32" stroke-dasharray="50" stroke-dashoffset="50" style="animation: sequential-glow-path 4s ease-in-out infinite 0s" />
                    <path d="M40 32 C 45 38, 42 45, 36 50" stroke-dasharray="50" stroke-dashoffset="50" style="animation: sequential-glow-path 4s ease-in-out infinite 1s" />
                    <path d="M36 50 C 30 55, 22 52, 22 45" stroke-dasharray="50" stroke-dashoffset="50" style="animation: sequential-glow-path 4s ease-in-out infinite 2s" />
                    <path d="M22 45 C 18 40, 18 35, 20 30" stroke-dasharray="50" stroke-dashoffset="50" style="animation: sequential-glow-path 4s ease-in-out infinite 3s" />
                    <circle cx="32" cy="38" r="5" fill="currentColor" style="animation: soft-pulse-shimmer 4s ease-in-out infinite" />
                </svg>
            </div>
        },
        ReasonIcon::Partnership => {
            let spokes = |count: usize, radius: f64| {
                (0..count)
                    .map(|i| {
                        let (x, y) = ring_point(radius, i, count);
                        html! { <path key={i} d={format!("M50 50 L {x} {y}")} /> }
                    })
                    .collect::<Html>()
            };

            html! {
                <div class="relative w-20 h-20">
                    <svg class="absolute w-16 h-16 top-0 left-0 text-gold" style="animation: slow-rotate 10s cubic-bezier(0.455, 0.03, 0.515, 0.955) infinite" viewBox="0 0 100 100" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M50 20 A 30 30 0 0 1 50 80 A 30 30 0 0 1 50 20 Z" />
                        <circle cx="50" cy="50" r="10" />
                        {spokes(8, 40.0)}
                    </svg>
                    <svg class="absolute w-12 h-12 bottom-0 right-0 text-gold" style="animation: slow-rotate 10s cubic-bezier(0.455, 0.03, 0.515, 0.955) infinite reverse" viewBox="0 0 100 100" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M50 25 A 25 25 0 0 1 50 75 A 25 25 0 0 1 50 25 Z" />
                        <circle cx="50" cy="50" r="8" />
                        {spokes(6, 32.0)}
                    </svg>
                    <div class="absolute top-[28px] left-[28px] w-6 h-6 bg-gold rounded-full" style="animation: soft-pulse-shimmer 2s ease-in-out infinite; filter: blur(5px)"></div>
                </div>
            }
        }
    }
}

pub fn step_icon(icon: StepIcon) -> Html {
    match icon {
        StepIcon::Discovery => html! {
            <div class="relative w-20 h-20">
                <svg class="w-full h-full text-gold" viewBox="0 0 64 64" fill="none" stroke="currentColor" stroke-width="1">
                    <g class="transition-transform duration-500 ease-cinematic group-hover:rotate-[-15deg]">
                        <circle cx="28" cy="28" r="14" stroke-width="1.5" />
                        <line x1="38" y1="38" x2="50" y2="50" stroke-width="2.5" stroke-linecap="round" />
                    </g>
                    <g transform="translate(28, 28) scale(0.5)">
                        <path d="M0 -14 L 12 -7 L 12 7 L 0 14 L -12 7 L -12 -7 Z" stroke-width="1.5" />
                        <path d="M0 -14 L 0 14 M -12 7 L 12 -7 M -12 -7 L 12 7" stroke-width="1" opacity="0.6" />
                    </g>
                </svg>
            </div>
        },
        StepIcon::Ideation => html! {
            <div class="relative w-20 h-20">
                <svg class="w-full h-full text-gold" viewBox="0 0 64 64" fill="none" stroke="currentColor" stroke-width="0.8">
                    <path d="M32,8 C18,8 12,24, 18,36 C24,48 40,48 46,36 C52,24 46,8 32,8 Z" stroke-width="1" />
                    <defs><filter id="ideation-glow"><feGaussianBlur stdDeviation="2" /></filter></defs>
                    <circle cx="32" cy="26" r="4" fill="currentColor" filter="url(#ideation-glow)" style="animation: soft-pulse-shimmer 3s ease-in-out infinite" />
                    <g class="opacity-60">
                        <path d="M32 26 C 26 28, 24 34, 26 38" stroke-dasharray="2 3" />
                        <path d="M32 26 C 38 28, 40 34, 38 38" stroke-dasharray="2 3" />
                        <path d="M32 26 C 28 22, 22 20, 20 24" stroke-dasharray="2 3" />
                        <path d="M32 26 C 36 22, 42 20, 44 24" stroke-dasharray="2 3" />
                    </g>
                </svg>
            </div>
        },
        StepIcon::Production => html! {
            <div class="relative w-20 h-20">
                <svg class="w-full h-full text-gold" viewBox="0 0 64 64" fill="none" stroke="currentColor" stroke-width="1">
                    <g class="origin-center" style="animation: slow-rotate 20s linear infinite">
                        <circle cx="32" cy="32" r="28" stroke-dasharray="4 8" opacity="0.5" />
                    </g>
                    <g class="origin-center" style="animation: slow-rotate 15s linear infinite reverse">
                        <ellipse cx="32" cy="32" rx="20" ry="28" stroke-dasharray="4 4" opacity="0.7" />
                    </g>
                    <g class="origin-center" style="animation: slow-rotate 10s linear infinite">
                        <ellipse cx="32" cy="32" rx="28" ry="12" />
                    </g>
                    <circle cx="32" cy="32" r="4" fill="currentColor" style="animation: soft-pulse-shimmer 2s ease-in-out infinite; filter: drop-shadow(0 0 8px currentColor)" />
                </svg>
            </div>
        },
        StepIcon::Delivery => html! {
            <div class="relative w-20 h-20">
                <svg class="w-full h-full text-gold" viewBox="0 0 64 64" fill="none" stroke="currentColor" stroke-width="1.5">
                    <path d="M12 32 L 32 42 L 52 32 L 32 22 Z" fill="currentColor" fill-opacity="0.1" />
                    <path d="M12 32 V 48 L 32 58 V 42 Z" fill="currentColor" fill-opacity="0.2" />
                    <path d="M52 32 V 48 L 32 58 V 42 Z" fill="currentColor" fill-opacity="0.3" />
                    <g class="origin-bottom transition-transform duration-500 ease-cinematic group-hover:translate-y-[-8px] group-hover:rotate-[-5deg]">
                        <path d="M10 31 L 32 21 L 54 31 L 32 41 Z" />
                    </g>
                    <defs>
                        <radialGradient id="delivery-glow-gradient" cx="50%" cy="50%" r="50%">
                            <stop offset="0%" stop-color="#bfa669" stop-opacity="1" />
                            <stop offset="100%" stop-color="#bfa669" stop-opacity="0" />
                        </radialGradient>
                    </defs>
                    <circle cx="32" cy="32" r="10" fill="url(#delivery-glow-gradient)" stroke="none" class="opacity-70" style="filter: blur(5px)" />
                </svg>
            </div>
        },
    }
}
