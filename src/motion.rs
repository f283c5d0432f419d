use thiserror::Error;

pub fn ease_out_cubic(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - progress).powi(3)
}

pub fn stagger_delay(position: usize, stride_ms: u32) -> u32 {
    u32::try_from(position)
        .unwrap_or(u32::MAX)
        .saturating_mul(stride_ms)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub finished: bool,
}

/// Eased scroll from a start offset to a destination. The clock starts at the first
/// sampled frame timestamp.
#[derive(Clone, Debug)]
pub struct ScrollTween {
    from: f64,
    distance: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            distance: to - from,
            duration_ms,
            started_at: None,
        }
    }

    pub fn sample(&mut self, timestamp: f64) -> ScrollSample {
        let started_at = *self.started_at.get_or_insert(timestamp);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((timestamp - started_at) / self.duration_ms).clamp(0.0, 1.0)
        };

        ScrollSample {
            offset: self.from + self.distance * ease_out_cubic(progress),
            finished: progress >= 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: u32,
    steps: u32,
    step: u32,
}

impl CounterAnimation {
    pub fn new(target: u32, steps: u32) -> Self {
        Self {
            target,
            steps: steps.max(1),
            step: 0,
        }
    }

    pub fn value(&self) -> u32 {
        if self.is_finished() {
            return self.target;
        }

        let scaled = u64::from(self.target) * u64::from(self.step) / u64::from(self.steps);
        u32::try_from(scaled).unwrap_or(self.target)
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps || (self.target == 0 && self.step > 0)
    }

    pub fn advance(&mut self) -> String {
        if !self.is_finished() {
            self.step += 1;
        }
        self.label()
    }

    pub fn label(&self) -> String {
        format!("{}+", self.value())
    }
}

#[derive(Clone, Debug)]
pub struct TypingEffect {
    chars: Vec<char>,
    typed: String,
    revealed: usize,
}

impl TypingEffect {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: String::with_capacity(text.len()),
            revealed: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn advance(&mut self) -> Option<&str> {
        let next = *self.chars.get(self.revealed)?;
        self.typed.push(next);
        self.revealed += 1;
        Some(&self.typed)
    }
}

/// Sign and digit run at the start of `text`, read the way `parseInt(text, 10)`
/// reads it: optional whitespace, an optional sign, then the digits.
fn leading_digits(text: &str) -> (bool, &str) {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    (negative, &rest[..digits_end])
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CounterTextError {
    #[error("text does not start with a number")]
    NotNumeric,
    #[error("negative values cannot be counted up to")]
    Negative,
    #[error("value is out of range")]
    OutOfRange,
}

pub fn parse_counter_target(text: &str) -> Result<u32, CounterTextError> {
    let (negative, digits) = leading_digits(text);
    if digits.is_empty() {
        return Err(CounterTextError::NotNumeric);
    }
    if negative && digits.bytes().any(|digit| digit != b'0') {
        return Err(CounterTextError::Negative);
    }
    digits
        .parse::<u32>()
        .map_err(|_| CounterTextError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_both_ends_and_decelerates() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert_eq!(ease_out_cubic(3.0), 1.0);
    }

    #[test]
    fn stagger_grows_with_batch_position() {
        assert_eq!(stagger_delay(0, 100), 0);
        assert_eq!(stagger_delay(3, 100), 300);
        assert_eq!(stagger_delay(usize::MAX, 100), u32::MAX);
    }

    #[test]
    fn scroll_tween_starts_at_first_frame_and_lands_on_destination() {
        let mut tween = ScrollTween::new(100.0, 900.0, 800.0);

        let first = tween.sample(5_000.0);
        assert_eq!(first.offset, 100.0);
        assert!(!first.finished);

        let halfway = tween.sample(5_400.0);
        assert!((halfway.offset - (100.0 + 800.0 * 0.875)).abs() < 1e-9);
        assert!(!halfway.finished);

        let last = tween.sample(5_900.0);
        assert_eq!(last.offset, 900.0);
        assert!(last.finished);
    }

    #[test]
    fn zero_duration_tween_jumps_in_one_frame() {
        let mut tween = ScrollTween::new(0.0, -40.0, 0.0);
        let sample = tween.sample(12.0);

        assert_eq!(sample.offset, -40.0);
        assert!(sample.finished);
    }

    #[test]
    fn counter_climbs_monotonically_and_stops_exactly_on_target() {
        let mut counter = CounterAnimation::new(7, 50);
        let mut previous = 0;
        let mut ticks = 0;

        while !counter.is_finished() {
            counter.advance();
            ticks += 1;
            assert!(counter.value() >= previous);
            assert!(counter.value() <= 7);
            previous = counter.value();
        }

        assert_eq!(ticks, 50);
        assert_eq!(counter.label(), "7+");
        assert_eq!(counter.advance(), "7+");
    }

    #[test]
    fn counter_of_zero_finishes_after_one_tick() {
        let mut counter = CounterAnimation::new(0, 50);

        assert!(!counter.is_finished());
        assert_eq!(counter.advance(), "0+");
        assert!(counter.is_finished());
    }

    #[test]
    fn counter_intermediate_values_are_floored() {
        let mut counter = CounterAnimation::new(3, 50);
        counter.advance();
        assert_eq!(counter.value(), 0);

        for _ in 0..16 {
            counter.advance();
        }
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn typing_reproduces_the_input_exactly() {
        let text = "Desarrolladora · Rust 🦀";
        let mut typing = TypingEffect::new(text);
        let mut reveals = 0;

        while let Some(prefix) = typing.advance() {
            reveals += 1;
            assert!(text.starts_with(prefix));
        }

        assert_eq!(reveals, typing.len());
        assert_eq!(reveals, text.chars().count());
        assert_eq!(typing.typed(), text);
        assert!(typing.is_complete());
    }

    #[test]
    fn empty_typing_is_already_complete() {
        let mut typing = TypingEffect::new("");

        assert!(typing.is_complete());
        assert_eq!(typing.advance(), None);
    }

    #[test]
    fn leading_int_parsing_matches_parse_int() {
        assert_eq!(parse_counter_target("5+"), Ok(5));
        assert_eq!(parse_counter_target("  12 years"), Ok(12));
        assert_eq!(parse_counter_target("+8"), Ok(8));
        assert_eq!(parse_counter_target("years"), Err(CounterTextError::NotNumeric));
        assert_eq!(parse_counter_target(""), Err(CounterTextError::NotNumeric));
        assert_eq!(parse_counter_target("-"), Err(CounterTextError::NotNumeric));
    }

    #[test]
    fn counter_targets_report_why_they_were_rejected() {
        assert_eq!(parse_counter_target("12+"), Ok(12));
        assert_eq!(parse_counter_target("-0"), Ok(0));
        assert_eq!(
            parse_counter_target("12345678901+"),
            Err(CounterTextError::OutOfRange)
        );
        assert_eq!(
            parse_counter_target("99999999999999999999"),
            Err(CounterTextError::OutOfRange)
        );
        assert_eq!(parse_counter_target("-4"), Err(CounterTextError::Negative));
        assert_eq!(parse_counter_target("many"), Err(CounterTextError::NotNumeric));
    }
}
