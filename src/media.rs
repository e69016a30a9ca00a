use crate::catalog::MediaKind;
use crate::Millis;

pub const VIDEO_DWELL_MS: Millis = 8_000;
pub const IMAGE_DWELL_MS: Millis = 5_000;

/// DOMException name the browser reports when a newer load or pause interrupts `play()`.
const SUPERSEDED_PLAY_ERROR: &str = "AbortError";

/// How long an item stays on screen before autoplay moves on.
pub fn dwell(kind: MediaKind) -> Millis {
    match kind {
        MediaKind::Video => VIDEO_DWELL_MS,
        MediaKind::Image => IMAGE_DWELL_MS,
    }
}

/// CSS class carrying the progress fill duration for `kind`.
pub fn dwell_class(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Video => "duration-video",
        MediaKind::Image => "duration-image",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Seek to the start, then play.
    Restart,
    Pause,
}

impl PlaybackCommand {
    pub fn for_current(is_current: bool) -> Self {
        if is_current {
            Self::Restart
        } else {
            Self::Pause
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackFailure {
    Superseded,
    Unexpected { name: String, message: String },
}

impl PlaybackFailure {
    pub fn classify(name: &str, message: &str) -> Self {
        if name == SUPERSEDED_PLAY_ERROR {
            Self::Superseded
        } else {
            Self::Unexpected {
                name: name.to_string(),
                message: message.to_string(),
            }
        }
    }

    pub fn should_report(&self) -> bool {
        matches!(self, Self::Unexpected { .. })
    }
}

impl std::fmt::Display for PlaybackFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Superseded => f.write_str("playback superseded by a newer request"),
            Self::Unexpected { name, message } if name.is_empty() => {
                write!(f, "video play failed: {message}")
            }
            Self::Unexpected { name, message } => write!(f, "video play failed: {name}: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_dwells_longer_than_image() {
        assert_eq!(dwell(MediaKind::Video), 8_000);
        assert_eq!(dwell(MediaKind::Image), 5_000);
        assert_eq!(dwell_class(MediaKind::Video), "duration-video");
    }

    #[test]
    fn abort_error_is_silent() {
        let failure = PlaybackFailure::classify("AbortError", "The play() request was interrupted");
        assert_eq!(failure, PlaybackFailure::Superseded);
        assert!(!failure.should_report());
    }

    #[test]
    fn other_failures_are_reported() {
        let failure = PlaybackFailure::classify("NotAllowedError", "autoplay blocked");
        assert!(failure.should_report());
        assert_eq!(failure.to_string(), "video play failed: NotAllowedError: autoplay blocked");
    }

    #[test]
    fn current_flag_selects_command() {
        assert_eq!(PlaybackCommand::for_current(true), PlaybackCommand::Restart);
        assert_eq!(PlaybackCommand::for_current(false), PlaybackCommand::Pause);
    }
}
