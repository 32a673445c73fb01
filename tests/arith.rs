use bigunsigned::{BigUnsigned, Limb};

const ZERO_MIDDLE: &str = "26068034834506726580338427";
const ZERO_END: &str = "453907968712728283077682545561698304";
const ZERO_MIDDLE_MULTIPLE: &str =
    "83486096457596424475837168416422833316731280789991957049663134837133759163975347";
const NINE_NINE: &str = "340282366659884258995919063107230991601683319295";
const NINE_DIGITS: &str = "1032589967263367277216600145372538202202426932138083224628049008519386424572149042885";
const NORMAL_1: &str = "728228107535740352153541163931469376797745899525714533927";
const NORMAL_2: &str = "98274890100012835608621800200000296356829";
const NORMAL_3: &str = "4682732413442";

fn parse(s: &str) -> BigUnsigned {
    s.parse().unwrap()
}

#[test]
fn add_normal_numbers() {
    let sum = parse(NORMAL_1) + parse(NORMAL_2);

    assert_eq!(
        sum.limbs(),
        &[498273891, 1759, 3472793879, 2947234052, 3959431429, 573532676]
    );
}

#[test]
fn add_maxed_out_limbs() {
    let sum = parse(NINE_NINE) + parse(NINE_NINE);
    assert_eq!(sum.limbs(), &[1_999_999_998; 5]);
}

#[test]
fn add_with_zero_limbs() {
    let sum = parse(ZERO_MIDDLE_MULTIPLE) + parse(ZERO_END);
    assert_eq!(
        sum.limbs(),
        &[721, 4358, 0, 0, 15552, 5729124, 74612415, 0, 2934451]
    );

    let sum = parse(NORMAL_3) + parse(ZERO_MIDDLE);
    assert_eq!(sum.limbs(), &[1413151, 1090, 1222697213]);
}

#[test]
fn add_commutative_and_associative() {
    let (a, b, c) = (parse(NORMAL_1), parse(NORMAL_2), parse(NORMAL_3));
    let expected = [498273891, 1759, 3472793879, 2947234052, 3959432519, 1791593478];

    assert_eq!(((&a + &b) + &c).limbs(), &expected);
    assert_eq!((&a + (&b + &c)).limbs(), &expected);
    assert_eq!(((&b + &a) + &c).limbs(), &expected);
    assert_eq!(((&c + &a) + &b).limbs(), &expected);
}

#[test]
fn add_zero_is_identity() {
    let a = parse(NORMAL_3);

    assert_eq!(&a + BigUnsigned::ZERO, a);
    assert_eq!(BigUnsigned::ZERO + &a, a);
    assert_eq!(BigUnsigned::ZERO + BigUnsigned::ZERO, BigUnsigned::ZERO);
}

#[test]
fn add_repeated() {
    let n = parse("999999999");
    let mut total = BigUnsigned::ZERO;

    for _ in 0..12 {
        total += &n;
    }

    assert_eq!(total.limbs(), &[2, 3410065396]);
}

#[test]
fn add_carry_grows_a_limb() {
    let a = BigUnsigned::from_limbs([Limb::MAX; 3]);
    assert_eq!((a + BigUnsigned::one()).limbs(), &[1, 0, 0, 0]);
}

#[test]
fn sub_normal_numbers() {
    let diff = parse(NORMAL_1) - parse(NORMAL_2);

    assert_eq!(
        diff.limbs(),
        &[498273891, 1182, 861923198, 1527916071, 499390863, 1261064778]
    );
}

#[test]
fn sub_self_is_canonical_zero() {
    let diff = parse(NINE_NINE) - parse(NINE_NINE);

    assert_eq!(diff, BigUnsigned::ZERO);
    assert!(diff.limbs().is_empty());
}

#[test]
fn sub_with_borrow_through_zero_limbs() {
    assert_eq!(
        (parse(ZERO_END) - parse(ZERO_MIDDLE)).limbs(),
        &[5729124, 73199263, 4294967295, 4290330885]
    );
    assert_eq!(
        (parse(ZERO_MIDDLE_MULTIPLE) - parse(NINE_NINE)).limbs(),
        &[
            721, 4357, 4294967295, 4294967295, 3294982848, 3294967296, 3294967296, 3294967296,
            3297901748
        ]
    );
    assert_eq!(
        (parse(NINE_DIGITS) - parse(ZERO_MIDDLE_MULTIPLE)).limbs(),
        &[
            8916900, 23986876, 23598235, 23432552, 0, 9891402, 98174899, 146899004, 486295570
        ]
    );
}

#[test]
fn sub_is_magnitude_difference() {
    let (a, b) = (parse(NORMAL_1), parse(NORMAL_2));

    assert_eq!(&a - &b, &b - &a);
    assert_eq!(a.abs_diff(&b), &a - &b);
}

#[test]
fn checked_sub_detects_underflow() {
    let (a, b) = (parse(NORMAL_1), parse(NORMAL_2));

    assert_eq!(b.checked_sub(&a), None);
    assert_eq!(a.checked_sub(&b), Some(&a - &b));
    assert_eq!(a.checked_sub(&a), Some(BigUnsigned::ZERO));
}

#[test]
fn sub_then_add_restores() {
    let (a, b) = (parse(NINE_DIGITS), parse(ZERO_MIDDLE_MULTIPLE));
    assert_eq!((&a - &b) + &b, a);
}

#[test]
fn sub_assign() {
    let mut a = parse(NORMAL_1);
    a -= parse(NORMAL_2);
    assert_eq!(a, parse(NORMAL_1) - parse(NORMAL_2));
}

#[test]
fn mul_normal_numbers() {
    assert_eq!(
        (parse(NORMAL_1) * parse(NORMAL_2)).limbs(),
        &[
            33, 2169544818, 11554571, 2759726770, 2691999543, 3775539610, 3781763666,
            3557598463, 1613100007, 4139836877, 2896753835
        ]
    );
    assert_eq!(
        (parse(NORMAL_1) * parse(NORMAL_3)).limbs(),
        &[
            126, 2093973306, 2197142442, 960508599, 1429993573, 980322833, 1538751069,
            4266715726
        ]
    );
}

#[test]
fn mul_with_zero_limbs() {
    let zmm = parse(ZERO_MIDDLE_MULTIPLE);

    assert_eq!(
        (&zmm * &zmm).limbs(),
        &[
            519841, 6284236, 18992164, 0, 22425984, 135551232, 0, 1, 178375755, 4101838436, 0,
            21, 1078850688, 0, 0, 2004, 3888210217
        ]
    );
    assert_eq!(
        (parse(ZERO_END) * parse(ZERO_MIDDLE)).limbs(),
        &[1885, 103981313, 1456726345, 2495856043, 4270720837, 0, 0]
    );
}

#[test]
fn mul_by_zero_and_one() {
    let a = parse(NORMAL_1);

    assert_eq!(&a * BigUnsigned::ZERO, BigUnsigned::ZERO);
    assert_eq!(BigUnsigned::ZERO * &a, BigUnsigned::ZERO);
    assert_eq!(&a * BigUnsigned::one(), a);
}

#[test]
fn mul_distributes_over_add() {
    let (a, b, c) = (parse(NORMAL_1), parse(NORMAL_2), parse(NINE_DIGITS));
    assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
}

#[test]
fn mul_assign() {
    let mut a = parse(NORMAL_3);
    let b = a.clone();
    a *= &b;
    assert_eq!(a, parse(NORMAL_3) * parse(NORMAL_3));
}

#[test]
fn ordering_is_total() {
    let values: Vec<BigUnsigned> = [
        "0",
        "1",
        "4294967296",
        NORMAL_3,
        ZERO_MIDDLE,
        ZERO_END,
        NORMAL_2,
        NINE_NINE,
        NORMAL_1,
        ZERO_MIDDLE_MULTIPLE,
        NINE_DIGITS,
    ]
    .into_iter()
    .map(parse)
    .collect();

    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j));
            assert_eq!(a <= b, a < b || a == b);
            assert_eq!(a >= b, a > b || a == b);
        }
    }
}

#[test]
fn ordering_same_length_decided_by_first_mismatch() {
    let a = BigUnsigned::from_limbs([5, 0, 9]);
    let b = BigUnsigned::from_limbs([5, 1, 0]);

    assert!(a < b);
    assert!(b > a);
    assert!(a == BigUnsigned::from_limbs([0, 5, 0, 9]));
}
