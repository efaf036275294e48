use log::error;
use serde_json::Value;

use crate::domain::AdRow;
use crate::sheets::SheetError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScrollMode {
    Running,
    Paused,
}

/// Seconds for the text to travel from the right edge to past the left edge.
pub const TICKER_PASS_SECONDS: f64 = 30.0;
const TICKER_MAX_FRAME_DELTA: f64 = 0.25;

/// Joins the non-empty `Ads` cells. `None` means there is nothing to show.
pub fn ticker_text(rows: &[AdRow], separator: &str) -> Option<String> {
    let text = rows
        .iter()
        .filter_map(|row| row.ads.as_deref())
        .filter(|ad| !ad.is_empty())
        .collect::<Vec<_>>()
        .join(separator);

    (!text.is_empty()).then_some(text)
}

/// Moves the scroll progress forward by the time since `last_tick`.
///
/// Progress is the fraction of one pass in `[0, 1)`.
pub fn advance_scroll(
    progress: f64,
    last_tick: Option<f64>,
    now_seconds: f64,
    mode: ScrollMode,
) -> (f64, Option<f64>) {
    let delta = last_tick
        .map(|last| (now_seconds - last).clamp(0.0, TICKER_MAX_FRAME_DELTA))
        .unwrap_or(0.0);

    let next_progress = match mode {
        ScrollMode::Running => (progress + delta / TICKER_PASS_SECONDS).rem_euclid(1.0),
        ScrollMode::Paused => progress.rem_euclid(1.0),
    };

    (next_progress, Some(now_seconds))
}

/// The `width` columns visible at `progress`.
///
/// The strip is `width` blanks followed by the text, so a pass starts with
/// an empty bar and ends once the last character has left on the left.
pub fn marquee_window(text: &str, width: usize, progress: f64) -> String {
    if width == 0 {
        return String::new();
    }

    let text: Vec<char> = text.chars().collect();
    let cycle = width + text.len();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let offset = ((progress.rem_euclid(1.0) * cycle as f64).floor() as usize).min(cycle - 1);

    (offset..offset + width)
        .map(|column| {
            column
                .checked_sub(width)
                .and_then(|index| text.get(index))
                .copied()
                .unwrap_or(' ')
        })
        .collect()
}

/// Ads bar state. Loaded once, then only the scroll position moves.
#[derive(Debug, Clone)]
pub struct Ticker {
    text: Option<String>,
    progress: f64,
    last_tick: Option<f64>,
    mode: ScrollMode,
}

impl Default for Ticker {
    fn default() -> Self {
        Self {
            text: None,
            progress: 0.0,
            last_tick: None,
            mode: ScrollMode::Running,
        }
    }
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the `Ads` sheet result. Failures are logged and leave the bar empty.
    pub fn load(&mut self, result: Result<Value, SheetError>, separator: &str) {
        self.text = match result {
            Ok(value @ Value::Array(_)) => match serde_json::from_value::<Vec<AdRow>>(value) {
                Ok(rows) => ticker_text(&rows, separator),
                Err(err) => {
                    error!("Error fetching ads: {err}");
                    None
                }
            },
            Ok(_) => {
                error!("Error fetching ads: sheet did not return an array");
                None
            }
            Err(err) => {
                error!("Error fetching ads: {err}");
                None
            }
        };
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn tick(&mut self, now_seconds: f64) {
        (self.progress, self.last_tick) =
            advance_scroll(self.progress, self.last_tick, now_seconds, self.mode);
    }

    pub fn toggle_pause(&mut self) {
        self.mode = match self.mode {
            ScrollMode::Running => ScrollMode::Paused,
            ScrollMode::Paused => ScrollMode::Running,
        };
    }

    pub fn window(&self, width: usize) -> Option<String> {
        self.text
            .as_deref()
            .map(|text| marquee_window(text, width, self.progress))
    }
}
