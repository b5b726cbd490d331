//! Shared utilities for the tests in `tests/`. Results are checked against
//! exact `i128` arithmetic, which can represent every operand and every sum,
//! difference, and quotient of the supported widths.

use core::fmt::Debug;

use overflow::OverflowArith;
use rand_xoshiro::{rand_core::RngCore, Xoshiro128StarStar};

/// Number of fuzzing iterations per test
pub const N: u32 = if cfg!(miri) {
    32
} else if cfg!(debug_assertions) {
    100_000
} else {
    10_000_000
};

/// A primitive integer that can be compared against exact `i128` arithmetic
pub trait Exact: OverflowArith + Debug + PartialEq {
    /// Truncates a bit pattern to `Self`
    fn from_bits(x: u64) -> Self;

    fn widen(self) -> i128;

    /// Returns `None` if `x` is not representable
    fn narrow(x: i128) -> Option<Self>;

    fn zero() -> Self {
        Self::from_bits(0)
    }
}

macro_rules! impl_exact {
    ($($t:ident)*) => {
        $(
            impl Exact for $t {
                fn from_bits(x: u64) -> Self {
                    x as $t
                }

                fn widen(self) -> i128 {
                    self as i128
                }

                fn narrow(x: i128) -> Option<Self> {
                    $t::try_from(x).ok()
                }
            }
        )*
    };
}

impl_exact!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize);

/// Returns a random bit pattern. Most of the time this is a pattern that
/// truncates to a boundary value such as the minimum, maximum, zero, or
/// negative one of some width, or a value close to one of those.
pub fn edge_biased(rng: &mut Xoshiro128StarStar) -> u64 {
    let s = rng.next_u32() % 64;
    let small = (rng.next_u32() % 8) as u64;
    match rng.next_u32() % 8 {
        0 => 1u64 << s,
        1 => (1u64 << s).wrapping_sub(1),
        2 => !((1u64 << s).wrapping_sub(1)),
        3 => small,
        4 => small.wrapping_neg(),
        5 => (1u64 << s).wrapping_add(small),
        6 => rng.next_u64() >> s,
        _ => rng.next_u64(),
    }
}

#[track_caller]
fn expect<T: Exact>(a: T, b: T, op: &str, res: (T, bool), exact: Option<i128>) {
    match exact.and_then(T::narrow) {
        Some(v) => assert_eq!(res, (v, true), "{a:?} {op} {b:?}"),
        None => assert_eq!(res, (T::zero(), false), "{a:?} {op} {b:?}"),
    }
}

/// Checks every operation on `a` and `b` against exact arithmetic, and checks
/// that valid results invert
#[track_caller]
pub fn check_pair<T: Exact>(a: T, b: T) {
    let (x, y) = (a.widen(), b.widen());

    // `checked_mul` only fails for two large unsigned 64 bit operands, whose
    // product cannot fit anyway
    expect(a, b, "+", a.overflow_add(b), x.checked_add(y));
    expect(a, b, "-", a.overflow_sub(b), x.checked_sub(y));
    expect(a, b, "*", a.overflow_mul(b), x.checked_mul(y));
    expect(a, b, "/", a.overflow_div(b), x.checked_div(y));

    let res = a.overflow_quotient(b);
    match x.checked_div(y).and_then(T::narrow) {
        // the remainder is always smaller in magnitude than `b`
        Some(quo) => assert_eq!(
            res,
            (quo, T::narrow(x % y).unwrap(), true),
            "{a:?} quotient {b:?}"
        ),
        None => assert_eq!(res, (T::zero(), T::zero(), false), "{a:?} quotient {b:?}"),
    }
    assert_eq!((res.0, res.2), a.overflow_div(b));

    if let (r, true) = a.overflow_add(b) {
        assert_eq!(r.overflow_sub(b), (a, true));
    }
    if let (r, true) = a.overflow_sub(b) {
        assert_eq!(r.overflow_add(b), (a, true));
    }
    if let (r, true) = a.overflow_mul(b) {
        if b != T::zero() {
            assert_eq!(r.overflow_div(b), (a, true));
        }
    }
    if let (quo, rem, true) = res {
        let (tmp, ok) = quo.overflow_mul(b);
        assert!(ok);
        assert_eq!(tmp.overflow_add(rem), (a, true));
    }
}

/// Runs `n` iterations of [check_pair] on edge biased operands
pub fn fuzz<T: Exact>(seed: u64, n: u32) {
    use rand_xoshiro::rand_core::SeedableRng;

    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..n {
        let a = T::from_bits(edge_biased(&mut rng));
        let b = T::from_bits(edge_biased(&mut rng));
        check_pair(a, b);
    }
}
