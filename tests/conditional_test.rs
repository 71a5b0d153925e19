//! The compile-time, type-selected, gated and run-time forms must agree.

use twofold::conditional::*;
use twofold::primitives::Flag;

// Const-evaluated at compile time
const _: () = {
    assert!(times_two_and_or::<true, 10>() == 20);
    assert!(times_two_and_or::<false, 3>() == 3);
};

macro_rules! assert_forms_agree {
    ($($flag:literal, $x:literal => $expected:expr);+ $(;)?) => {
        $(
            assert_eq!(times_two_and_or::<$flag, $x>(), $expected);
            assert_eq!(times_two_and_or_selected::<$flag, $x>(), $expected);
            assert_eq!(times_two_and_or_gated::<$flag, $x>(), $expected);
            assert_eq!(times_two_and_or_runtime($flag, $x), $expected);
        )+
    };
}

#[test]
fn test_all_forms_agree() {
    assert_forms_agree! {
        true, 10 => 20;
        false, 3 => 3;
        true, 0 => 0;
        false, 0 => 0;
        true, 1000 => 2000;
        false, 1000 => 1000;
    }
}

#[test]
fn test_gated_impl_per_flag() {
    assert_eq!(<Flag<true> as Gated<10>>::value(), 20);
    assert_eq!(<Flag<false> as Gated<3>>::value(), 3);
}

#[test]
fn test_generic_caller_with_bound() {
    fn forward<const B: bool>() -> i32
    where
        Flag<B>: Gated<5>,
    {
        times_two_and_or_gated::<B, 5>()
    }

    assert_eq!(forward::<true>(), 10);
    assert_eq!(forward::<false>(), 5);
}

#[test]
fn test_printed_lines() {
    let mut compile_time = String::new();
    print_times_two_and_or::<true, 10, _>(&mut compile_time).unwrap();
    print_times_two_and_or::<false, 3, _>(&mut compile_time).unwrap();

    let mut run_time = String::new();
    print_times_two_and_or_runtime(&mut run_time, true, 10).unwrap();
    print_times_two_and_or_runtime(&mut run_time, false, 3).unwrap();

    let mut gated = String::new();
    print_times_two_and_or_gated::<true, 10, _>(&mut gated).unwrap();
    print_times_two_and_or_gated::<false, 3, _>(&mut gated).unwrap();

    assert_eq!(compile_time, "20\n3\n");
    assert_eq!(compile_time, run_time);
    assert_eq!(compile_time, gated);
}
