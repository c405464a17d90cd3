use std::sync::atomic::{AtomicU64, Ordering};

/// Drawable size in physical pixels, shared between the resize path and the draw path.
///
/// Both halves live in a single `AtomicU64` so a reader never sees a width from one
/// resize paired with a height from another.
#[derive(Debug, Default)]
pub struct ViewportSize {
    packed: AtomicU64,
}

impl ViewportSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            packed: AtomicU64::new(pack(width, height)),
        }
    }

    /// Overwrites the stored pair.
    #[inline]
    pub fn store(&self, width: u32, height: u32) {
        self.packed.store(pack(width, height), Ordering::Release);
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn load(&self) -> (u32, u32) {
        unpack(self.packed.load(Ordering::Acquire))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        let (w, h) = self.load();
        w == 0 || h == 0
    }
}

#[inline]
const fn pack(width: u32, height: u32) -> u64 {
    ((width as u64) << 32) | height as u64
}

#[inline]
const fn unpack(v: u64) -> (u32, u32) {
    ((v >> 32) as u32, v as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    #[test]
    fn starts_at_zero() {
        let v = ViewportSize::default();
        assert_eq!(v.load(), (0, 0));
        assert!(v.is_empty());
    }

    #[test]
    fn store_then_load_is_exact() {
        let v = ViewportSize::default();
        for (w, h) in [(800, 600), (1, 0), (0, 1), (3840, 2160), (u32::MAX, 7), (7, u32::MAX)] {
            v.store(w, h);
            assert_eq!(v.load(), (w, h));
        }
    }

    #[test]
    fn extremes_do_not_bleed_between_halves() {
        let v = ViewportSize::new(u32::MAX, 0);
        assert_eq!(v.load(), (u32::MAX, 0));

        v.store(0, u32::MAX);
        assert_eq!(v.load(), (0, u32::MAX));
    }

    #[test]
    fn writer_thread_is_observed_by_reader() {
        let shared = Arc::new(ViewportSize::new(10, 20));

        let writer = Arc::clone(&shared);
        std::thread::spawn(move || writer.store(1280, 720))
            .join()
            .unwrap();

        assert_eq!(shared.load(), (1280, 720));
    }

    #[test]
    fn never_observes_a_torn_pair() {
        let shared = Arc::new(ViewportSize::new(1, 1));

        let writer = Arc::clone(&shared);
        let handle = std::thread::spawn(move || {
            for i in 1..=10_000u32 {
                writer.store(i, i);
            }
        });

        for _ in 0..10_000 {
            let (w, h) = shared.load();
            assert_eq!(w, h);
        }

        handle.join().unwrap();
        assert_eq!(shared.load(), (10_000, 10_000));
    }
}
