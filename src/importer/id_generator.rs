// ==========================================
// Medicine Import - mid generator
// ==========================================
// Responsibility: 6-digit `mid` per accepted record
// - RandomMidGenerator:     uniform draw, no memory of issued values
// - SequentialMidGenerator: counter after the store's current maximum
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::product_importer_trait::IdentifierGenerator;
use rand::Rng;
use std::sync::atomic::{AtomicI64, Ordering};

pub const MID_MIN: i64 = 100_000;
pub const MID_MAX: i64 = 999_999;

// ==========================================
// RandomMidGenerator
// ==========================================
// Collisions inside one run or across runs are possible; the pipeline
// reports repeated values instead of silently re-drawing.
pub struct RandomMidGenerator;

impl IdentifierGenerator for RandomMidGenerator {
    fn generate(&self) -> ImportResult<i64> {
        Ok(rand::thread_rng().gen_range(MID_MIN..=MID_MAX))
    }
}

// ==========================================
// SequentialMidGenerator
// ==========================================
pub struct SequentialMidGenerator {
    next: AtomicI64,
}

impl SequentialMidGenerator {
    /// Start right after `current_max`, or at the bottom of the range
    pub fn seeded_from(current_max: Option<i64>) -> Self {
        let start = match current_max {
            Some(max) if max >= MID_MIN => max.saturating_add(1),
            _ => MID_MIN,
        };
        Self {
            next: AtomicI64::new(start),
        }
    }
}

impl IdentifierGenerator for SequentialMidGenerator {
    fn generate(&self) -> ImportResult<i64> {
        let value = self.next.fetch_add(1, Ordering::SeqCst);
        if value > MID_MAX {
            return Err(ImportError::IdentifierExhausted(value));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_mid_in_range() {
        let generator = RandomMidGenerator;
        for _ in 0..10_000 {
            let mid = generator.generate().unwrap();
            assert!((MID_MIN..=MID_MAX).contains(&mid), "mid out of range: {}", mid);
        }
    }

    #[test]
    fn test_sequential_seeded_from_store_max() {
        let generator = SequentialMidGenerator::seeded_from(Some(500_123));
        assert_eq!(generator.generate().unwrap(), 500_124);
        assert_eq!(generator.generate().unwrap(), 500_125);
    }

    #[test]
    fn test_sequential_empty_store_starts_at_min() {
        let generator = SequentialMidGenerator::seeded_from(None);
        assert_eq!(generator.generate().unwrap(), MID_MIN);

        // values below the range (legacy rows) do not drag the counter down
        let generator = SequentialMidGenerator::seeded_from(Some(42));
        assert_eq!(generator.generate().unwrap(), MID_MIN);
    }

    #[test]
    fn test_sequential_exhausted() {
        let generator = SequentialMidGenerator::seeded_from(Some(MID_MAX - 1));
        assert_eq!(generator.generate().unwrap(), MID_MAX);
        assert!(matches!(
            generator.generate(),
            Err(ImportError::IdentifierExhausted(_))
        ));
    }
}
