use super::dom::error_property;
use crate::catalog::{MediaKind, PortfolioItem};
use crate::media::{PlaybackCommand, PlaybackFailure};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

const MEDIA_CLASS: &str =
    "w-full h-full object-contain transition-transform duration-500 ease-cinematic group-hover:scale-105";

fn report_play_error(error: &JsValue) {
    let failure =
        PlaybackFailure::classify(&error_property(error, "name"), &error_property(error, "message"));
    if failure.should_report() {
        log::error!("{failure}");
    }
}

/// Starts playback and swallows the rejection a superseding `pause()` produces.
pub fn play(video: &HtmlVideoElement) {
    // The `muted` attribute alone does not satisfy autoplay policies once the element exists.
    video.set_muted(true);
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(error) = JsFuture::from(promise).await {
                report_play_error(&error);
            }
        }),
        Err(error) => report_play_error(&error),
    }
}

pub fn pause(video: &HtmlVideoElement) {
    if !video.paused() {
        let _ = video.pause();
    }
}

#[derive(Properties, PartialEq)]
pub struct MediaItemProps {
    pub item: PortfolioItem,
    #[prop_or_default]
    pub is_current: bool,
}

#[function_component(VideoItem)]
pub fn video_item(props: &MediaItemProps) -> Html {
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_effect_with(
            (props.is_current, props.item.id, props.item.src.clone()),
            move |(is_current, _, _)| {
                let video = video_ref.cast::<HtmlVideoElement>();
                if let Some(video) = video.as_ref() {
                    match PlaybackCommand::for_current(*is_current) {
                        PlaybackCommand::Restart => {
                            video.set_current_time(0.0);
                            play(video);
                        }
                        PlaybackCommand::Pause => {
                            let _ = video.pause();
                        }
                    }
                }

                move || {
                    if let Some(video) = video {
                        pause(&video);
                    }
                }
            },
        );
    }

    html! {
        <video
            ref={video_ref}
            key={props.item.src.clone()}
            loop={true}
            muted={true}
            playsinline={true}
            preload="metadata"
            class={MEDIA_CLASS}
            src={props.item.src.clone()}
        >
            {"Your browser does not support the video tag."}
        </video>
    }
}

#[function_component(ImageItem)]
pub fn image_item(props: &MediaItemProps) -> Html {
    html! {
        <img loading="lazy" src={props.item.src.clone()} alt={props.item.title.clone()} class={MEDIA_CLASS} />
    }
}

#[function_component(MediaItem)]
pub fn media_item(props: &MediaItemProps) -> Html {
    match props.item.kind {
        MediaKind::Video => html! { <VideoItem item={props.item.clone()} is_current={props.is_current} /> },
        MediaKind::Image => html! { <ImageItem item={props.item.clone()} /> },
    }
}
