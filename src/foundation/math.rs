#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Smallest nonzero magnitude [`fmt_num`] keeps; anything below prints as `0`.
pub(crate) const MARKUP_RESOLUTION: f64 = 0.001;

/// Format a float for markup: integral values lose the fractional part, others keep at most
/// three decimals with trailing zeros removed.
pub(crate) fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let scaled = v * 1000.0;
    let rounded = if scaled.is_finite() {
        scaled.round() / 1000.0
    } else {
        v
    };
    if rounded == 0.0 {
        // also catches -0.0
        return "0".to_string();
    }
    if rounded == rounded.trunc() {
        return format!("{rounded:.0}");
    }
    let s = format!("{rounded:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
