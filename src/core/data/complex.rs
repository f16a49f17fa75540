use std::ops::{Add, Mul};

// hand-rolled instead of num-complex: the escape loop only needs these three ops
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex {
            real: 3.0,
            imag: -4.0,
        };
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_zero_has_zero_magnitude() {
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_add() {
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: -3.0,
            imag: 4.0,
        };
        assert_eq!(
            a + b,
            Complex {
                real: -2.0,
                imag: 6.0
            }
        );
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i + 9i² = -5 + 12i
        let c = Complex {
            real: 2.0,
            imag: 3.0,
        };
        assert_eq!(
            c * c,
            Complex {
                real: -5.0,
                imag: 12.0
            }
        );
    }

    #[test]
    fn test_recurrence_step_from_origin() {
        // first Mandelbrot step: z = 0² + c = c
        let c = Complex {
            real: 0.25,
            imag: -0.5,
        };
        assert_eq!(Complex::ZERO * Complex::ZERO + c, c);
    }
}
