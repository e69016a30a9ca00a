pub const TYPEWRITER_STEP_MS: u32 = 100;
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
/// Extra wait after the hero title lands before the glow kicks in.
const HERO_GLOW_BUFFER_MS: f64 = 100.0;

/// The part of `text` visible after `steps` typewriter ticks.
pub fn typewriter_prefix(text: &str, steps: usize) -> &str {
    match text.char_indices().nth(steps) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

pub fn typewriter_done(text: &str, steps: usize) -> bool {
    steps >= text.chars().count()
}

/// Word-by-word entrance animation timing, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WordCascade {
    pub words: usize,
    pub duration: f64,
    pub stagger: f64,
    pub delay: f64,
}

impl WordCascade {
    pub fn for_text(text: &str, duration: f64, stagger: f64, delay: f64) -> Self {
        Self {
            words: text.split_whitespace().count(),
            duration,
            stagger,
            delay,
        }
    }

    pub fn word_delay(&self, index: usize) -> f64 {
        self.delay + index as f64 * self.stagger
    }

    pub fn end_time(&self) -> f64 {
        if self.words == 0 {
            return self.delay;
        }
        self.word_delay(self.words - 1) + self.duration
    }

    pub fn animation_css(&self, name: &str, index: usize) -> String {
        format!(
            "animation: {name} {}s cubic-bezier(0.25, 0.46, 0.45, 0.94) {}s forwards; opacity: 0; transform-origin: bottom;",
            self.duration,
            self.word_delay(index)
        )
    }
}

pub fn hero_title_cascade(title: &str) -> WordCascade {
    WordCascade::for_text(title, 1.5, 0.4, 0.0)
}

pub fn hero_subtitle_cascade(subtitle: &str) -> WordCascade {
    WordCascade::for_text(subtitle, 1.0, 0.08, 1.8)
}

pub fn hero_glow_delay_ms(title: &WordCascade) -> u32 {
    (title.end_time() * 1000.0 + HERO_GLOW_BUFFER_MS).round() as u32
}

pub fn parallax_transform(offset_y: f64, speed: f64) -> String {
    format!("translateY({}px)", offset_y * speed)
}

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{HERO_SUBTITLE, HERO_TITLE};

    #[test]
    fn typewriter_reveals_one_char_per_step() {
        assert_eq!(typewriter_prefix("Our Services", 0), "");
        assert_eq!(typewriter_prefix("Our Services", 3), "Our");
        assert_eq!(typewriter_prefix("Our Services", 40), "Our Services");
        assert!(typewriter_done("Our", 3));
        assert!(!typewriter_done("Our", 2));
    }

    #[test]
    fn typewriter_respects_char_boundaries() {
        assert_eq!(typewriter_prefix("Café Noir", 4), "Café");
    }

    #[test]
    fn hero_title_glows_after_last_word_lands() {
        let title = hero_title_cascade(HERO_TITLE);

        assert_eq!(title.words, 4);
        assert!((title.end_time() - 2.7).abs() < 1e-9);
        assert_eq!(hero_glow_delay_ms(&title), 2_800);
    }

    #[test]
    fn subtitle_end_time_accounts_for_delay() {
        let subtitle = hero_subtitle_cascade(HERO_SUBTITLE);

        assert_eq!(subtitle.words, 11);
        assert!((subtitle.end_time() - 3.6).abs() < 1e-9);
    }

    #[test]
    fn header_switches_past_threshold() {
        assert!(!header_is_scrolled(50.0));
        assert!(header_is_scrolled(50.5));
        assert_eq!(parallax_transform(200.0, -0.5), "translateY(-100px)");
    }
}
