// tests/property_tests.rs
use bitconv_rs::array;
use bitconv_rs::*;
use proptest::prelude::*;

const ORDERS: [Endianness; 2] = [Endianness::Little, Endianness::Big];

fn roundtrips<T>(value: T) -> bool
where
    T: ByteCodec + PartialEq + Copy,
{
    ORDERS.iter().all(|&order| {
        let converter = BitConverter::new(order);
        converter.to_value::<T>(&converter.get_bytes(value)) == value
    })
}

proptest! {
    #[test]
    fn prop_integer_codec_roundtrip(
        a in any::<i16>(),
        b in any::<u16>(),
        c in any::<i32>(),
        d in any::<u32>(),
        e in any::<i64>(),
        f in any::<u64>(),
    ) {
        prop_assert!(roundtrips(a));
        prop_assert!(roundtrips(b));
        prop_assert!(roundtrips(c));
        prop_assert!(roundtrips(d));
        prop_assert!(roundtrips(e));
        prop_assert!(roundtrips(f));
    }

    #[test]
    fn prop_float_codec_is_bit_exact(single_bits in any::<u32>(), double_bits in any::<u64>()) {
        for order in ORDERS {
            let converter = BitConverter::new(order);

            let single = f32::from_bits(single_bits);
            let decoded: f32 = converter.to_value(&converter.get_bytes(single));
            prop_assert_eq!(decoded.to_bits(), single_bits);

            let double = f64::from_bits(double_bits);
            let decoded: f64 = converter.to_value(&converter.get_bytes(double));
            prop_assert_eq!(decoded.to_bits(), double_bits);
        }
    }

    #[test]
    fn prop_little_is_reversed_big(value in any::<u64>(), narrow in any::<i32>()) {
        let little = BitConverter::little_endian();
        let big = BitConverter::big_endian();

        let mut bytes = big.get_bytes(value);
        bytes.reverse();
        prop_assert_eq!(little.get_bytes(value), bytes);

        let mut bytes = big.get_bytes(narrow);
        bytes.reverse();
        prop_assert_eq!(little.get_bytes(narrow), bytes);
    }

    #[test]
    fn prop_transcode_matches_reverse(value in any::<u32>()) {
        let little = BitConverter::little_endian();
        let big = BitConverter::big_endian();
        let bytes = little.get_bytes(value);
        prop_assert_eq!(big.to_value::<u32>(&bytes), reverse(value));
    }

    #[test]
    fn prop_reverse_is_involution(a in any::<u16>(), b in any::<i32>(), c in any::<u64>(), bits in any::<u64>()) {
        prop_assert_eq!(reverse(reverse(a)), a);
        prop_assert_eq!(reverse(reverse(b)), b);
        prop_assert_eq!(reverse(reverse(c)), c);

        let double = f64::from_bits(bits);
        prop_assert_eq!(reverse(reverse(double)).to_bits(), bits);
    }

    #[test]
    fn prop_reverse_bytes_matches_swap_bytes(value in any::<u64>()) {
        let mut bytes = value.to_ne_bytes();
        reverse_bytes(&mut bytes);
        prop_assert_eq!(u64::from_ne_bytes(bytes), value.swap_bytes());
        prop_assert_eq!(reverse(value), value.swap_bytes());
    }

    #[test]
    fn prop_split_join_roundtrip(a in any::<u16>(), b in any::<i32>(), c in any::<u64>(), d in any::<i64>()) {
        let (high, low) = split(a);
        prop_assert_eq!(join::<u16>(high, low), a);
        let (high, low) = split(b);
        prop_assert_eq!(join::<i32>(high, low), b);
        let (high, low) = split(c);
        prop_assert_eq!(join::<u64>(high, low), c);
        let (high, low) = split(d);
        prop_assert_eq!(join::<i64>(high, low), d);
    }

    #[test]
    fn prop_quick_sort_matches_std(mut data in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut expected = data.clone();
        expected.sort_unstable();

        array::sort(&mut data);
        prop_assert_eq!(&data, &expected);

        array::sort(&mut data);
        prop_assert_eq!(data, expected);
    }

    #[test]
    fn prop_quick_sort_floats_non_decreasing(mut data in prop::collection::vec(-1e6f64..1e6, 0..200)) {
        let mut expected = data.clone();
        expected.sort_by(f64::total_cmp);

        array::sort(&mut data);
        prop_assert!(array::is_sorted(&data));
        prop_assert_eq!(data, expected);
    }

    #[test]
    fn prop_merge_sort_agrees_with_quick_sort(data in prop::collection::vec(0u8..16, 0..200)) {
        let mut quick = data.clone();
        array::sort(&mut quick);

        let mut merged = data;
        array::merge_sort_all(&mut merged);
        prop_assert_eq!(merged, quick);
    }

    #[test]
    fn prop_unit_impulse_is_identity(x in prop::collection::vec(any::<i64>(), 1..64)) {
        let y = array::convolve_to_vec(&x, &[1]);
        prop_assert_eq!(y, x);
    }

    #[test]
    fn prop_convolution_length(x_len in 1usize..40, h_len in 1usize..40) {
        let x = vec![1u32; x_len];
        let h = vec![1u32; h_len];
        let y = array::convolve_to_vec(&x, &h);
        prop_assert_eq!(y.len(), x_len + h_len - 1);
        prop_assert_eq!(y.iter().map(|&v| v as usize).sum::<usize>(), x_len * h_len);
    }

    #[test]
    fn prop_average_within_bounds(data in prop::collection::vec(any::<i16>(), 1..100)) {
        let mean = array::average(&data);
        let min = *data.iter().min().unwrap() as f64;
        let max = *data.iter().max().unwrap() as f64;
        prop_assert!(mean >= min && mean <= max);
    }
}
