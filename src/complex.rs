use std::fmt;
use std::num::ParseFloatError;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Div;
use std::ops::DivAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Sub;
use std::ops::SubAssign;
use std::str::FromStr;
use thiserror::Error;

/// A complex number with double-precision real and imaginary components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub fn new(real: f64, imag: f64) -> Complex {
        Complex { real: real, imag: imag }
    }

    /// Overwrites both components in place.
    pub fn set(&mut self, real: f64, imag: f64) {
        self.real = real;
        self.imag = imag;
    }

    /// Returns the magnitude `sqrt(real² + imag²)`.
    ///
    /// Never fails: overflow gives infinity and a NaN component gives NaN.
    pub fn abs(self) -> f64 {
        (self.real * self.real + self.imag * self.imag).sqrt()
    }
}

/// Narrowing conversion from a scalar: the imaginary component becomes zero.
impl From<f64> for Complex {
    fn from(value: f64) -> Complex {
        Complex::new(value, 0.0)
    }
}

/// Conversion to the magnitude. Call sites must convert explicitly; the
/// imaginary component is discarded.
impl From<Complex> for f64 {
    fn from(value: Complex) -> f64 {
        value.abs()
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex::new(self.real + other.real, self.imag + other.imag)
    }
}

impl Add<f64> for Complex {
    type Output = Complex;

    fn add(self, value: f64) -> Complex {
        Complex::new(self.real + value, self.imag)
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex::new(self + other.real, other.imag)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        Complex::new(self.real - other.real, self.imag - other.imag)
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;

    fn sub(self, value: f64) -> Complex {
        Complex::new(self.real - value, self.imag)
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    // subtracting from a scalar negates the imaginary component
    fn sub(self, other: Complex) -> Complex {
        Complex::new(self - other.real, -other.imag)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex::new(self.real * other.real - self.imag * other.imag, self.real * other.imag + self.imag * other.real)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, value: f64) -> Complex {
        Complex::new(self.real * value, self.imag * value)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex::new(self * other.real, self * other.imag)
    }
}

// Division is only defined with a scalar divisor. Division by zero is not
// checked; the components follow IEEE-754 division.
impl Div<f64> for Complex {
    type Output = Complex;

    fn div(self, value: f64) -> Complex {
        Complex::new(self.real / value, self.imag / value)
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, other: Complex) {
        self.real += other.real;
        self.imag += other.imag;
    }
}

impl AddAssign<f64> for Complex {
    fn add_assign(&mut self, value: f64) {
        self.real += value;
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, other: Complex) {
        self.real -= other.real;
        self.imag -= other.imag;
    }
}

impl SubAssign<f64> for Complex {
    fn sub_assign(&mut self, value: f64) {
        self.real -= value;
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, other: Complex) {
        // both components read the old real part
        let real = self.real;
        self.real = real * other.real - self.imag * other.imag;
        self.imag = self.imag * other.real + real * other.imag;
    }
}

impl MulAssign<f64> for Complex {
    fn mul_assign(&mut self, value: f64) {
        self.real *= value;
        self.imag *= value;
    }
}

impl DivAssign<f64> for Complex {
    fn div_assign(&mut self, value: f64) {
        self.real /= value;
        self.imag /= value;
    }
}

/// Renders the value as `<real><sign><imag>i`, e.g. `3+2i` or `3-2i`.
///
/// A negative imaginary component carries its own minus sign; anything
/// else, NaN included, gets an explicit `+`.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.real)?;
        if !(self.imag < 0.0) {
            write!(f, "+")?;
        }
        write!(f, "{}i", self.imag)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseComplexError {
    #[error("expected two numeric components")]
    MissingComponent,
    #[error("invalid numeric component: {0}")]
    InvalidComponent(#[from] ParseFloatError),
}

/// Parses two whitespace-separated numbers as `real imag`, e.g. `3 -2`.
///
/// Tokens past the second are ignored. This is not the inverse of the
/// `Display` format, which fuses the sign into the imaginary component
/// and appends an `i` suffix.
impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Complex, ParseComplexError> {
        let mut tokens = s.split_whitespace();
        let real = tokens.next().ok_or(ParseComplexError::MissingComponent)?.parse()?;
        let imag = tokens.next().ok_or(ParseComplexError::MissingComponent)?.parse()?;
        Ok(Complex::new(real, imag))
    }
}

//--------------------------------------------------------------------------------------------------
