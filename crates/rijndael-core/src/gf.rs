//! Arithmetic in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reduction polynomial 0x11B.
const REDUCTION: u8 = 0x1b;

/// Multiplies by `x` (i.e. 2) with reduction.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Carry-less product of `a` and `b` reduced modulo 0x11B.
pub const fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Multiplicative inverse, computed as `x^254`. Maps 0 to 0.
pub const fn inv(x: u8) -> u8 {
    // 254 = 0b1111_1110
    let mut result = 1u8;
    let mut base = x;
    let mut exp = 254u8;
    while exp != 0 {
        if exp & 1 != 0 {
            result = mul(result, base);
        }
        base = mul(base, base);
        exp >>= 1;
    }
    if x == 0 {
        0
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_products() {
        // FIPS-197 section 4.2 examples.
        assert_eq!(mul(0x57, 0x83), 0xc1);
        assert_eq!(mul(0x57, 0x13), 0xfe);
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0x8e), 0x07);
    }

    #[test]
    fn multiplication_is_commutative_with_identity() {
        for a in 0..=255u8 {
            assert_eq!(mul(a, 1), a);
            assert_eq!(mul(a, 0), 0);
            for b in (0..=255u8).step_by(7) {
                assert_eq!(mul(a, b), mul(b, a));
            }
        }
    }

    #[test]
    fn every_nonzero_element_has_an_inverse() {
        assert_eq!(inv(0), 0);
        for x in 1..=255u8 {
            assert_eq!(mul(x, inv(x)), 1, "x = {x:#04x}");
        }
    }
}
