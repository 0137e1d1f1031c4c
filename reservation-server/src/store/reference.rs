//! Booking reference generation.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::BookingReference;

/// First reference handed out when no seed is configured.
pub const DEFAULT_REFERENCE_SEED: u64 = 0x075b_cd15;

/// Hands out unique booking references.
///
/// References are a monotonically increasing counter rendered as lowercase
/// hex, so they are never empty and never repeat within a process.
#[derive(Debug)]
pub struct BookingReferenceGenerator {
    next: AtomicU64,
}

impl BookingReferenceGenerator {
    /// Start counting at `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            next: AtomicU64::new(seed),
        }
    }

    /// The next unused reference.
    pub fn next_reference(&self) -> BookingReference {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        BookingReference::new(format!("{n:x}"))
    }
}

impl Default for BookingReferenceGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn starts_at_seed() {
        let generator = BookingReferenceGenerator::default();
        assert_eq!(generator.next_reference().as_str(), "75bcd15");
        assert_eq!(generator.next_reference().as_str(), "75bcd16");
    }

    #[test]
    fn custom_seed() {
        let generator = BookingReferenceGenerator::new(255);
        assert_eq!(generator.next_reference().as_str(), "ff");
    }

    #[test]
    fn unique_across_threads() {
        let generator = BookingReferenceGenerator::new(0);

        let refs: Vec<BookingReference> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        (0..250)
                            .map(|_| generator.next_reference())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        assert_eq!(refs.len(), 1000);
        assert!(refs.iter().all(|r| !r.is_empty()));
        let unique: HashSet<&str> = refs.iter().map(|r| r.as_str()).collect();
        assert_eq!(unique.len(), 1000);
    }
}
