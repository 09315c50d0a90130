//! Concrete end-to-end decimal scenarios and boundary cases.

use bigints::BigInt;

fn bi(s: &str) -> BigInt {
    BigInt::parse(s)
}

#[test]
fn scenario_1_add_carries_through_every_limb() {
    let a = bi("99999999999999999999");
    let b = bi("1");
    assert_eq!((&a + &b).to_string(), "100000000000000000000");
}

#[test]
fn scenario_2_subtract_borrows_through_every_limb() {
    let a = bi("1000000000000000000000000000000");
    let b = bi("1");
    assert_eq!((&a - &b).to_string(), "999999999999999999999999999999");
}

#[test]
fn scenario_3_large_operand_multiplication() {
    let a = bi("12345678901234567890");
    let b = bi("98765432109876543210");
    assert_eq!(
        (&a * &b).to_string(),
        "1219326311370217952237463801111263526900"
    );
}

#[test]
fn scenario_4_large_operand_division() {
    let a = bi("100000000000000000000000000000000000000");
    let b = bi("123456789");
    let (q, _) = a.div_rem(&b).unwrap();
    assert_eq!(q.to_string(), "810000007371000067076100610792915255737");
}

#[test]
fn scenario_5_large_operand_modulo() {
    let a = bi("100000000000000000000000000000000000000");
    let b = bi("123456789");
    let (_, r) = a.div_rem(&b).unwrap();
    assert_eq!(r.to_string(), "52859707");
}

#[test]
fn scenario_6_truncated_division_rounding_convention() {
    let a = bi("-7");
    let b = bi("2");
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q.to_string(), "-3");
    assert_eq!(r.to_string(), "-1");
}

#[test]
fn scenario_7_factorial_fifty_via_repeated_multiply() {
    let mut product = bi("1");
    for i in 1..=50 {
        product = &product * &BigInt::from_i64(i);
    }
    assert_eq!(
        product.to_string(),
        "30414093201713378043612608166064768844377641568960512000000000000"
    );
}

#[test]
fn boundary_division_of_a_number_by_itself() {
    let v = bi("123456789012345678901234567890");
    let (q, r) = v.div_rem(&v).unwrap();
    assert_eq!(q, bi("1"));
    assert!(r.is_zero());
}

#[test]
fn boundary_empty_input_parses_to_zero() {
    assert_eq!(bi(""), bi("0"));
}

#[test]
fn boundary_negative_zero_parses_positive() {
    let v = bi("-0");
    assert!(v.is_zero());
    assert!(!v.is_negative());
}

#[test]
fn cross_algorithm_agreement_across_every_threshold() {
    // Spans classical, Karatsuba, Toom-3, and FFT paths as operand
    // sizes grow (see dispatch::{KARATSUBA,TOOM3,FFT}_THRESHOLD) and
    // checks the public-API product against a schoolbook decimal
    // reference computed independently of every kernel in this crate.
    let sizes = [1usize, 10, 40, 80, 200, 400, 900];
    for &len_a in &sizes {
        for &len_b in &sizes {
            let a = repeated_digit_number(len_a);
            let b = repeated_digit_number(len_b);
            let expected = decimal_mul_reference(&a, &b);
            let product = (&BigInt::parse(&a) * &BigInt::parse(&b)).to_string();
            assert_eq!(
                product, expected,
                "mismatch multiplying a {len_a}-digit by a {len_b}-digit operand"
            );
        }
    }
}

fn repeated_digit_number(decimal_digits: usize) -> String {
    if decimal_digits == 0 {
        return "0".to_string();
    }
    "7".repeat(decimal_digits)
}

/// Schoolbook decimal-string multiplication, written independently of
/// every multiplication kernel in this crate, to serve as a ground
/// truth for `cross_algorithm_agreement_across_every_threshold`.
/// Non-negative operands only — sufficient for the repeated-digit
/// inputs this test exercises.
fn decimal_mul_reference(a: &str, b: &str) -> String {
    if a == "0" || b == "0" {
        return "0".to_string();
    }
    let da: Vec<u32> = a.bytes().rev().map(|c| (c - b'0') as u32).collect();
    let db: Vec<u32> = b.bytes().rev().map(|c| (c - b'0') as u32).collect();
    let mut acc = vec![0u32; da.len() + db.len()];
    for (i, &x) in da.iter().enumerate() {
        let mut carry = 0u32;
        for (j, &y) in db.iter().enumerate() {
            let sum = acc[i + j] + x * y + carry;
            acc[i + j] = sum % 10;
            carry = sum / 10;
        }
        let mut k = i + db.len();
        while carry > 0 {
            let sum = acc[k] + carry;
            acc[k] = sum % 10;
            carry = sum / 10;
            k += 1;
        }
    }
    while acc.len() > 1 && *acc.last().unwrap() == 0 {
        acc.pop();
    }
    acc.iter()
        .rev()
        .map(|d| std::char::from_digit(*d, 10).unwrap())
        .collect()
}
