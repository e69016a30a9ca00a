use crate::catalog::MediaKind;
use crate::media::dwell_class;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorDot {
    pub index: usize,
    pub active: bool,
    /// Whether the fill animation is playing; only the active dot ever runs.
    pub running: bool,
    pub duration_class: &'static str,
    pub label: String,
}

impl IndicatorDot {
    pub fn play_state(&self) -> &'static str {
        if self.running {
            "running"
        } else {
            "paused"
        }
    }
}

pub fn indicator_dots(
    count: usize,
    current_index: usize,
    paused: bool,
    current_kind: Option<MediaKind>,
) -> Vec<IndicatorDot> {
    let duration_class = dwell_class(current_kind.unwrap_or(MediaKind::Image));

    (0..count)
        .map(|index| {
            let active = index == current_index;
            IndicatorDot {
                index,
                active,
                running: active && !paused,
                duration_class,
                label: format!("Go to item {}", index + 1),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_current_dot_runs() {
        let dots = indicator_dots(3, 1, false, Some(MediaKind::Video));

        assert_eq!(dots.len(), 3);
        assert_eq!(
            dots.iter().map(|dot| dot.running).collect::<Vec<_>>(),
            vec![false, true, false]
        );
        assert!(dots.iter().all(|dot| dot.duration_class == "duration-video"));
        assert_eq!(dots[2].label, "Go to item 3");
    }

    #[test]
    fn paused_engine_pauses_fill() {
        let dots = indicator_dots(2, 0, true, Some(MediaKind::Image));

        assert!(dots[0].active);
        assert_eq!(dots[0].play_state(), "paused");
        assert_eq!(dots[0].duration_class, "duration-image");
    }

    #[test]
    fn empty_view_has_no_dots() {
        assert!(indicator_dots(0, 0, false, None).is_empty());
    }
}
