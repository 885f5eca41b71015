//! Presentation timing helpers.
//!
//! Nothing here affects reveal correctness; randomness is injected so
//! callers can seed it.

use rand::Rng;
use std::time::Duration;

/// Delay between consecutive timeline entries.
pub const TIMELINE_STAGGER: Duration = Duration::from_millis(200);

/// Delay for the `index`-th item of a staggered list.
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// Default per-character delay of [`Typewriter`].
pub const DEFAULT_TYPEWRITER_SPEED: Duration = Duration::from_millis(100);

/// Text revealed one character per `speed` tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    speed: Duration,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, speed: Duration) -> Self {
        Self {
            text: text.into(),
            speed,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Prefix shown `elapsed` after start; the first character lands after one tick.
    ///
    /// A zero `speed` shows the whole text at once.
    pub fn visible_at(&self, elapsed: Duration) -> &str {
        if self.speed.is_zero() {
            return &self.text;
        }
        let shown = elapsed.as_nanos() / self.speed.as_nanos();
        let shown = usize::try_from(shown).unwrap_or(usize::MAX);
        match self.text.char_indices().nth(shown) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    /// Time until the full text is shown.
    pub fn duration(&self) -> Duration {
        let chars = self.text.chars().count();
        stagger_delay(chars, self.speed)
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }
}

/// Floating background particle, positions in viewport percent.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay: Duration,
    pub duration: Duration,
}

/// Generates `count` particles from `rng`.
///
/// - `left_pct`, `top_pct` in `0..100`
/// - `delay` in `0..3` seconds
/// - `duration` in `2..5` seconds
pub fn particle_field<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|id| Particle {
            id,
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            delay: Duration::from_secs_f64(rng.gen_range(0.0..3.0)),
            duration: Duration::from_secs_f64(rng.gen_range(2.0..5.0)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        particle_field, stagger_delay, Typewriter, DEFAULT_TYPEWRITER_SPEED, TIMELINE_STAGGER,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    #[test]
    fn stagger_is_linear_in_index() {
        assert_eq!(stagger_delay(0, TIMELINE_STAGGER), Duration::ZERO);
        assert_eq!(
            stagger_delay(3, TIMELINE_STAGGER),
            Duration::from_millis(600)
        );
    }

    #[test]
    fn typewriter_reveals_one_character_per_tick() {
        let typewriter = Typewriter::new("Engineer", DEFAULT_TYPEWRITER_SPEED);
        assert_eq!(typewriter.visible_at(Duration::ZERO), "");
        assert_eq!(typewriter.visible_at(Duration::from_millis(99)), "");
        assert_eq!(typewriter.visible_at(Duration::from_millis(350)), "Eng");
        assert_eq!(typewriter.visible_at(Duration::from_secs(60)), "Engineer");
        assert_eq!(typewriter.duration(), Duration::from_millis(800));
        assert!(!typewriter.is_complete(Duration::from_millis(799)));
        assert!(typewriter.is_complete(Duration::from_millis(800)));
    }

    #[test]
    fn typewriter_never_splits_multibyte_characters() {
        let typewriter = Typewriter::new("héllo 🚀", Duration::from_millis(80));
        assert_eq!(typewriter.visible_at(Duration::from_millis(160)), "hé");
        assert_eq!(typewriter.visible_at(Duration::from_millis(560)), "héllo 🚀");
        assert_eq!(typewriter.visible_at(Duration::from_millis(480)), "héllo ");
        assert_eq!(
            Typewriter::new("ok", Duration::ZERO).visible_at(Duration::ZERO),
            "ok"
        );
    }

    #[test]
    fn seeded_field_is_reproducible_and_in_range() {
        let first = particle_field(&mut StdRng::seed_from_u64(7), 50);
        let second = particle_field(&mut StdRng::seed_from_u64(7), 50);
        assert_eq!(first, second);
        assert_eq!(first.len(), 50);
        for particle in &first {
            assert!((0.0..100.0).contains(&particle.left_pct));
            assert!((0.0..100.0).contains(&particle.top_pct));
            assert!(particle.delay < Duration::from_secs(3));
            assert!(particle.duration >= Duration::from_secs(2));
            assert!(particle.duration < Duration::from_secs(5));
        }
    }
}
