// File: crates/scatter-core/src/scale.rs
// Summary: Linear (year), time (climb time) and categorical (doping) scales with tick generation.

use crate::transform::TimeOfDay;

/// Continuous mapping from a data domain to a pixel range.
pub trait Scale {
    type Value;
    fn map(&self, v: Self::Value) -> f64;
    fn invert(&self, px: f64) -> Self::Value;
    fn domain(&self) -> (Self::Value, Self::Value);
    fn range(&self) -> (f64, f64);
    fn ticks(&self, count: usize) -> Vec<Self::Value>;
}

/// Normalized position of `v` in `[d0, d1]`; a degenerate domain maps to the middle.
#[inline]
fn normalize(v: f64, d0: f64, d1: f64) -> f64 {
    let span = d1 - d0;
    if span.abs() < 1e-12 { 0.5 } else { (v - d0) / span }
}

#[inline]
fn interpolate(t: f64, r0: f64, r1: f64) -> f64 {
    r0 + t * (r1 - r0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }
}

impl Scale for LinearScale {
    type Value = f64;

    #[inline]
    fn map(&self, v: f64) -> f64 {
        interpolate(normalize(v, self.d0, self.d1), self.r0, self.r1)
    }

    #[inline]
    fn invert(&self, px: f64) -> f64 {
        interpolate(normalize(px, self.r0, self.r1), self.d0, self.d1)
    }

    fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.d0, self.d1, count)
    }
}

/// Increment for roughly `count` ticks over `[start, stop]`, snapped to 1, 2 or 5 x 10^k.
/// A negative result `-n` means a fractional step of `1 / n`.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power) / factor)
    }
}

/// Evenly spaced "nice" values inside `[start, stop]` (inclusive).
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if (stop - start).abs() < 1e-12 {
        return vec![start];
    }
    let (lo, hi, reverse) = if stop < start { (stop, start, true) } else { (start, stop, false) };
    let inc = tick_increment(lo, hi, count);
    if inc == 0.0 || !inc.is_finite() {
        return Vec::new();
    }
    let mut out = Vec::new();
    if inc > 0.0 {
        let i0 = (lo / inc).ceil() as i64;
        let i1 = (hi / inc).floor() as i64;
        for i in i0..=i1 {
            out.push(i as f64 * inc);
        }
    } else {
        let inv = -inc;
        let i0 = (lo * inv).ceil() as i64;
        let i1 = (hi * inv).floor() as i64;
        for i in i0..=i1 {
            out.push(i as f64 / inv);
        }
    }
    if reverse {
        out.reverse();
    }
    out
}

/// Time scale over climb times; positions are linear in elapsed milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub d0: TimeOfDay,
    pub d1: TimeOfDay,
    pub r0: f64,
    pub r1: f64,
}

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Candidate tick spacings, in milliseconds.
const TICK_INTERVALS: [i64; 14] = [
    SECOND,
    5 * SECOND,
    15 * SECOND,
    30 * SECOND,
    MINUTE,
    5 * MINUTE,
    15 * MINUTE,
    30 * MINUTE,
    HOUR,
    3 * HOUR,
    6 * HOUR,
    12 * HOUR,
    DAY,
    2 * DAY,
];

impl TimeScale {
    pub fn new(domain: (TimeOfDay, TimeOfDay), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    /// Interval (ms) whose tick count lands closest to `count`.
    pub fn tick_interval(&self, count: usize) -> i64 {
        let span = (self.d1.as_millis() - self.d0.as_millis()).abs() as f64;
        let target = span / count.max(1) as f64;
        let i = TICK_INTERVALS.partition_point(|&step| step as f64 <= target);
        if i == 0 {
            return TICK_INTERVALS[0];
        }
        if i == TICK_INTERVALS.len() {
            // Beyond two days: whole days on the linear rule.
            let days = tick_increment(0.0, span / DAY as f64, count).max(1.0);
            return days as i64 * DAY;
        }
        let below = TICK_INTERVALS[i - 1] as f64;
        let above = TICK_INTERVALS[i] as f64;
        if target / below < above / target { TICK_INTERVALS[i - 1] } else { TICK_INTERVALS[i] }
    }
}

impl Scale for TimeScale {
    type Value = TimeOfDay;

    #[inline]
    fn map(&self, v: TimeOfDay) -> f64 {
        let t = normalize(v.as_millis() as f64, self.d0.as_millis() as f64, self.d1.as_millis() as f64);
        interpolate(t, self.r0, self.r1)
    }

    fn invert(&self, px: f64) -> TimeOfDay {
        let t = normalize(px, self.r0, self.r1);
        let ms = interpolate(t, self.d0.as_millis() as f64, self.d1.as_millis() as f64);
        TimeOfDay::from_millis(ms.round() as i64)
    }

    fn domain(&self) -> (TimeOfDay, TimeOfDay) { (self.d0, self.d1) }
    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    fn ticks(&self, count: usize) -> Vec<TimeOfDay> {
        let (lo, hi) = if self.d0 <= self.d1 { (self.d0, self.d1) } else { (self.d1, self.d0) };
        let (lo, hi) = (lo.as_millis(), hi.as_millis());
        if lo == hi {
            return vec![TimeOfDay::from_millis(lo)];
        }
        let step = self.tick_interval(count);
        let first = lo.div_euclid(step) * step + if lo.rem_euclid(step) == 0 { 0 } else { step };
        let mut out: Vec<TimeOfDay> = (0..)
            .map(|k| first + k * step)
            .take_while(|&ms| ms <= hi)
            .map(TimeOfDay::from_millis)
            .collect();
        if self.d0 > self.d1 {
            out.reverse();
        }
        out
    }
}

/// Ordinal mapping from category keys to a fixed palette.
///
/// Keys keep first-seen order; a key not in the domain is appended on lookup,
/// and the palette wraps when the domain outgrows it.
#[derive(Clone, Debug)]
pub struct CategoryScale<K, V> {
    domain: Vec<K>,
    palette: Vec<V>,
}

impl<K: PartialEq + Clone, V: Clone> CategoryScale<K, V> {
    pub fn new(domain: impl IntoIterator<Item = K>, palette: impl IntoIterator<Item = V>) -> Self {
        let mut s = Self { domain: Vec::new(), palette: palette.into_iter().collect() };
        for k in domain {
            s.index_of(&k);
        }
        s
    }

    fn index_of(&mut self, key: &K) -> usize {
        match self.domain.iter().position(|k| k == key) {
            Some(i) => i,
            None => {
                self.domain.push(key.clone());
                self.domain.len() - 1
            }
        }
    }

    /// Palette entry for `key`, extending the domain when it is new.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let i = self.index_of(key);
        if self.palette.is_empty() {
            return None;
        }
        self.palette.get(i % self.palette.len()).cloned()
    }

    /// Lookup without extending the domain.
    pub fn peek(&self, key: &K) -> Option<V> {
        let i = self.domain.iter().position(|k| k == key)?;
        if self.palette.is_empty() {
            return None;
        }
        self.palette.get(i % self.palette.len()).cloned()
    }

    pub fn domain(&self) -> &[K] { &self.domain }
    pub fn palette(&self) -> &[V] { &self.palette }
}
