//! BN254 base-field arithmetic

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;
use std::sync::LazyLock;

use num_bigint::{BigInt, BigUint, ParseBigIntError, Sign};
use num_traits::{One, Zero};
use serde::{Serialize, Serializer};

/// Decimal form of the BN254 (alt_bn128) base-field prime.
const MODULUS_DECIMAL: &str =
    "21888242871839275222246405745257275088696311157297823662689037894645226208583";

static MODULUS: LazyLock<BigUint> = LazyLock::new(|| {
    BigUint::parse_bytes(MODULUS_DECIMAL.as_bytes(), 10).expect("modulus constant parses")
});

/// The field modulus.
pub fn modulus() -> &'static BigUint {
    &MODULUS
}

/// An element of the BN254 base field.
///
/// The wrapped integer is always reduced into `[0, modulus)`; every
/// constructor and operator maintains that invariant. The language supports
/// addition, subtraction, multiplication, and negation only — there is no
/// division, so no inverse is ever computed and no operation can fail.
///
/// # Example
///
/// ```
/// use autowit::Fq;
///
/// let a: Fq = "10".parse().unwrap();
/// let b: Fq = "5".parse().unwrap();
/// assert_eq!((a + b).to_string(), "15");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fq(BigUint);

impl Fq {
    /// Create a field element from an unsigned integer, reducing it.
    pub fn new(n: BigUint) -> Self {
        Self(n % &*MODULUS)
    }

    /// Create a field element from a signed integer, reducing it into
    /// `[0, modulus)`. Negative inputs wrap around the modulus.
    pub fn from_bigint(n: BigInt) -> Self {
        let modulus = BigInt::from_biguint(Sign::Plus, MODULUS.clone());
        let mut r = n % &modulus;
        if r.sign() == Sign::Minus {
            r += &modulus;
        }
        let (_, magnitude) = r.into_parts();
        Self(magnitude)
    }

    /// The reduced integer representative of this element.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl Zero for Fq {
    fn zero() -> Self {
        Self(BigUint::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Fq {
    fn one() -> Self {
        Self(BigUint::one())
    }
}

impl From<u64> for Fq {
    fn from(n: u64) -> Self {
        // u64 values are far below the 254-bit modulus, no reduction needed.
        Self(BigUint::from(n))
    }
}

impl FromStr for Fq {
    type Err = ParseBigIntError;

    /// Parse a decimal literal, with an optional sign. A failure here is the
    /// parser's cue to treat the token as a variable name instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = BigInt::from_str(s)?;
        Ok(Self::from_bigint(n))
    }
}

impl Add for &Fq {
    type Output = Fq;

    fn add(self, rhs: &Fq) -> Fq {
        Fq::new(&self.0 + &rhs.0)
    }
}

impl Sub for &Fq {
    type Output = Fq;

    fn sub(self, rhs: &Fq) -> Fq {
        // Both operands are reduced, so lifting the left one by the modulus
        // keeps the difference non-negative.
        Fq::new(&self.0 + &*MODULUS - &rhs.0)
    }
}

impl Mul for &Fq {
    type Output = Fq;

    fn mul(self, rhs: &Fq) -> Fq {
        Fq::new(&self.0 * &rhs.0)
    }
}

impl Neg for &Fq {
    type Output = Fq;

    fn neg(self) -> Fq {
        if self.0.is_zero() {
            Fq::zero()
        } else {
            Fq(&*MODULUS - &self.0)
        }
    }
}

impl Add for Fq {
    type Output = Fq;

    fn add(self, rhs: Fq) -> Fq {
        &self + &rhs
    }
}

impl Sub for Fq {
    type Output = Fq;

    fn sub(self, rhs: Fq) -> Fq {
        &self - &rhs
    }
}

impl Mul for Fq {
    type Output = Fq;

    fn mul(self, rhs: Fq) -> Fq {
        &self * &rhs
    }
}

impl Neg for Fq {
    type Output = Fq;

    fn neg(self) -> Fq {
        -&self
    }
}

impl fmt::Display for Fq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Fq {
    /// Witness reports carry field elements as decimal strings.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}
