// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact symbolic arithmetic over the ring `Z[i, sqrt(3)][1/d]`.
//!
//! Every value the engine needs to sum exactly — Gaussian-sum terms
//! `c * (i/sqrt(3))^rank` and character values `chi(x) = exp(2*pi*i*x/3)` —
//! lives in the four-dimensional Q-vector space spanned by `{1, i, sqrt(3),
//! i*sqrt(3)}`. Rather than pull in a general computer-algebra dependency,
//! [`Symbolic`] represents a value as four big-integer numerators over a
//! shared big-integer denominator and implements the ring operations this
//! crate actually needs: addition (to sum a sweep) and multiplication (the
//! bordered-determinant character term in the fixed-spin enumerator).

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// Multiplication table for the basis `{1, i, sqrt3, i*sqrt3}`.
///
/// `BASIS_MUL[p][q] = (coefficient, result_basis_index)` such that
/// `e_p * e_q = coefficient * e_{result_basis_index}`, using `i^2 = -1` and
/// `sqrt3^2 = 3`.
const BASIS_MUL: [[(i64, usize); 4]; 4] = [
    [(1, 0), (1, 1), (1, 2), (1, 3)],
    [(1, 1), (-1, 0), (1, 3), (-1, 2)],
    [(1, 2), (1, 3), (3, 0), (3, 1)],
    [(1, 3), (-1, 2), (3, 1), (-3, 0)],
];

/// An exact value `(n0 + n1*i + n2*sqrt3 + n3*i*sqrt3) / d`, `d > 0`,
/// always kept in lowest terms.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbolic {
    n: [BigInt; 4],
    d: BigInt,
}

fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let (mut a, mut b) = (a.abs(), b.abs());
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

impl Symbolic {
    /// The additive identity.
    pub fn zero() -> Self {
        Self {
            n: [BigInt::zero(), BigInt::zero(), BigInt::zero(), BigInt::zero()],
            d: BigInt::one(),
        }
    }

    /// The rational integer `value`.
    pub fn from_integer(value: i64) -> Self {
        Self {
            n: [BigInt::from(value), BigInt::zero(), BigInt::zero(), BigInt::zero()],
            d: BigInt::one(),
        }
    }

    /// `c * (i / sqrt(3))^rank`, the normalized Gaussian-sum value for a
    /// `det'` of `c` and a rank of `rank` (see the F3 linear algebra
    /// module). `rank = 0` is the degenerate convention `Gau'(0) = 1`, so
    /// callers pass `c = 1` in that case.
    pub fn from_gauss_term(c: i8, rank: usize) -> Self {
        if rank == 0 {
            return Self::from_integer(c as i64);
        }
        let a = rank % 4;
        // i^a is +-1 (a even, real) or +-i (a odd, imaginary).
        let sign: i64 = if a == 0 || a == 1 { 1 } else { -1 };
        let coeff = BigInt::from(c as i64 * sign);
        if rank % 2 == 0 {
            // 1/sqrt(3)^rank = 1/3^(rank/2), purely rational (or imaginary
            // rational, if a is odd - impossible here since rank even
            // forces a in {0, 2}, both "real" phases).
            let k = rank / 2;
            Self {
                n: [coeff, BigInt::zero(), BigInt::zero(), BigInt::zero()],
                d: BigInt::from(3).pow(k as u32),
            }
            .reduced()
        } else {
            // rank odd forces a in {1, 3}, both imaginary phases, and
            // 1/sqrt(3)^rank = sqrt(3)/3^((rank+1)/2): the i*sqrt3 basis
            // element.
            let k = (rank + 1) / 2;
            Self {
                n: [BigInt::zero(), BigInt::zero(), BigInt::zero(), coeff],
                d: BigInt::from(3).pow(k as u32),
            }
            .reduced()
        }
    }

    /// `chi(x) = exp(2*pi*i*x/3)` for `x` in F3 `{-1, 0, 1}`.
    pub fn chi(x: i8) -> Self {
        let x = ((x % 3) + 3) % 3;
        match x {
            0 => Self::from_integer(1),
            1 => Self {
                n: [BigInt::from(-1), BigInt::zero(), BigInt::zero(), BigInt::from(1)],
                d: BigInt::from(2),
            },
            _ => Self {
                n: [BigInt::from(-1), BigInt::zero(), BigInt::zero(), BigInt::from(-1)],
                d: BigInt::from(2),
            },
        }
    }

    fn reduced(mut self) -> Self {
        let mut g = self.d.clone();
        for ni in &self.n {
            g = gcd(&g, ni);
        }
        if g > BigInt::one() {
            for ni in &mut self.n {
                *ni /= &g;
            }
            self.d /= &g;
        }
        if self.n.iter().all(|x| x.is_zero()) {
            self.d = BigInt::one();
        }
        self
    }

    pub fn add(&self, other: &Self) -> Self {
        let g = gcd(&self.d, &other.d);
        let lcm = &self.d / &g * &other.d;
        let scale_self = &lcm / &self.d;
        let scale_other = &lcm / &other.d;
        let mut n = [BigInt::zero(), BigInt::zero(), BigInt::zero(), BigInt::zero()];
        for i in 0..4 {
            n[i] = &self.n[i] * &scale_self + &other.n[i] * &scale_other;
        }
        Self { n, d: lcm }.reduced()
    }

    pub fn mul(&self, other: &Self) -> Self {
        let mut n = [BigInt::zero(), BigInt::zero(), BigInt::zero(), BigInt::zero()];
        for p in 0..4 {
            for q in 0..4 {
                let (coeff, idx) = BASIS_MUL[p][q];
                n[idx] += &self.n[p] * &other.n[q] * coeff;
            }
        }
        let d = &self.d * &other.d;
        Self { n, d }.reduced()
    }

    /// Sum an iterator of values into one, exactly.
    pub fn sum<I: IntoIterator<Item = Symbolic>>(iter: I) -> Self {
        iter.into_iter().fold(Self::zero(), |acc, x| acc.add(&x))
    }

    /// Collapse to a rational integer, or `None` if an imaginary or
    /// irrational (`sqrt(3)`-carrying) component survives, or the rational
    /// part isn't an exact multiple of the denominator.
    pub fn to_integer(&self) -> Option<i64> {
        if !self.n[1].is_zero() || !self.n[2].is_zero() || !self.n[3].is_zero() {
            return None;
        }
        if (&self.n[0] % &self.d) != BigInt::zero() {
            return None;
        }
        let q = &self.n[0] / &self.d;
        // The sweeps this value comes from involve at most a few hundred
        // thousand unit-magnitude terms, so the quotient always fits i64.
        let digits = q.to_string();
        digits.parse::<i64>().ok()
    }
}

impl fmt::Display for Symbolic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.n.iter().all(|x| x.is_zero()) {
            return write!(f, "0");
        }
        let labels = ["1", "I", "sqrt(3)", "sqrt(3)*I"];
        let mut parts = Vec::new();
        for (coeff, label) in self.n.iter().zip(labels.iter()) {
            if coeff.is_zero() {
                continue;
            }
            let term = if *label == "1" {
                format!("{}", coeff)
            } else {
                format!("{}*{}", coeff, label)
            };
            parts.push(term);
        }
        let body = parts.join(" + ");
        if self.d == BigInt::one() {
            write!(f, "{}", body)
        } else {
            write!(f, "({})/{}", body, self.d)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rank_is_one() {
        let g = Symbolic::from_gauss_term(1, 0);
        assert_eq!(g.to_integer(), Some(1));
    }

    #[test]
    fn gauss_term_even_rank_is_rational() {
        // rank=2: c * (i/sqrt3)^2 = c * (-1/3)
        let g = Symbolic::from_gauss_term(1, 2);
        let expect = Symbolic {
            n: [BigInt::from(-1), BigInt::zero(), BigInt::zero(), BigInt::zero()],
            d: BigInt::from(3),
        };
        assert_eq!(g, expect);
    }

    #[test]
    fn chi_values_sum_to_zero() {
        let s = Symbolic::sum([Symbolic::chi(-1), Symbolic::chi(0), Symbolic::chi(1)]);
        assert_eq!(s.to_integer(), Some(0));
    }

    #[test]
    fn chi_self_product_is_unit_modulus() {
        // chi(1) * chi(-1) = chi(0) = 1
        let prod = Symbolic::chi(1).mul(&Symbolic::chi(-1));
        assert_eq!(prod.to_integer(), Some(1));
    }

    #[test]
    fn non_integer_detected() {
        let half = Symbolic {
            n: [BigInt::from(1), BigInt::zero(), BigInt::zero(), BigInt::zero()],
            d: BigInt::from(2),
        };
        assert_eq!(half.to_integer(), None);
    }

    #[test]
    fn addition_aligns_denominators() {
        let a = Symbolic::from_gauss_term(1, 1); // i/sqrt3
        let b = Symbolic::from_gauss_term(-1, 1); // -i/sqrt3
        let sum = a.add(&b);
        assert_eq!(sum.to_integer(), Some(0));
    }
}
