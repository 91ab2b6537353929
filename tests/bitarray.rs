//! End-to-end tests against the public API surface.

use bitarray::{default_endian, set_default_endian, BitArray, Endian, EndianArg};

#[test]
fn construction_big_endian_matches_expected_bytes() {
    let a = BitArray::from_str01("1101", EndianArg::Exact(Endian::Big)).unwrap();
    assert_eq!(a.tolist(), vec![true, true, false, true]);
    assert_eq!(a.tobytes().as_slice(), &[0xD0]);
}

#[test]
fn construction_little_endian_matches_expected_bytes() {
    let a = BitArray::from_str01("1101", EndianArg::Exact(Endian::Little)).unwrap();
    assert_eq!(a.tobytes().as_slice(), &[0x0B]);
}

#[test]
fn repetition_matches_python_semantics() {
    let a = BitArray::from_str01("1001", EndianArg::Exact(Endian::Big)).unwrap();
    let b = a * 3;
    assert_eq!(b.to01(), "100110011001");
}

#[test]
fn default_endian_is_process_wide_and_mutable() {
    set_default_endian(Endian::Big);
    assert_eq!(default_endian(), Endian::Big);
    let a = BitArray::empty(EndianArg::Default);
    assert_eq!(a.endian(), Endian::Big);

    set_default_endian(Endian::Little);
    let b = BitArray::empty(EndianArg::Default);
    assert_eq!(b.endian(), Endian::Little);

    // existing instances are unaffected by later changes to the default
    assert_eq!(a.endian(), Endian::Big);

    set_default_endian(Endian::Big);
}

#[test]
fn insert_delete_and_slice_roundtrip() {
    let mut a = BitArray::from_str01("11110000", EndianArg::Exact(Endian::Big)).unwrap();
    a.insert(4, true).unwrap();
    assert_eq!(a.to01(), "111110000");
    a.delete_slice(4, 5, 1).unwrap();
    assert_eq!(a.to01(), "11110000");

    let middle = a.slice(2, 6, 1).unwrap();
    assert_eq!(middle.to01(), "1100");
}

#[test]
fn search_and_count_across_a_large_array() {
    let mut a = BitArray::zeros(1000, EndianArg::Exact(Endian::Big));
    a.set(137, true);
    a.set(512, true);
    a.set(999, true);
    assert_eq!(a.count(true, 0, a.len() as isize, 1).unwrap(), 3);
    assert_eq!(a.index_bit(true, 0, a.len()).unwrap(), 137);
    assert_eq!(a.index_bit(true, 138, a.len()).unwrap(), 512);
}

#[test]
fn count_and_delete_slice_accept_negative_indices_and_step() {
    let a = BitArray::from_str01("11110000", EndianArg::Exact(Endian::Big)).unwrap();
    // last four bits, walked backwards
    assert_eq!(a.count(false, -1, isize::MIN, -1).unwrap(), 4);

    let mut b = a.clone();
    b.delete_slice(-4, isize::MAX, 1).unwrap();
    assert_eq!(b.to01(), "1111");
}

#[test]
fn pattern_search_across_byte_boundaries() {
    let haystack = BitArray::from_str01(
        "000000001101100000000000",
        EndianArg::Exact(Endian::Big),
    )
    .unwrap();
    let needle = BitArray::from_str01("1101", EndianArg::Exact(Endian::Big)).unwrap();
    assert_eq!(haystack.index_pattern(&needle, 0, haystack.len()).unwrap(), 8);
}

#[test]
fn bitwise_operators_match_bytewise_semantics() {
    let a = BitArray::from_str01("11001100", EndianArg::Exact(Endian::Big)).unwrap();
    let b = BitArray::from_str01("10101010", EndianArg::Exact(Endian::Big)).unwrap();
    assert_eq!((&a & &b).to01(), "10001000");
    assert_eq!((&a | &b).to01(), "11101110");
    assert_eq!((!&a).to01(), "00110011");
}

#[test]
fn frombytes_and_pack_interop_with_raw_bytes() {
    let mut a = BitArray::empty(EndianArg::Exact(Endian::Big));
    a.frombytes(&[0xFF, 0x00]);
    assert_eq!(a.to01(), "1111111100000000");

    let mut b = BitArray::empty(EndianArg::Exact(Endian::Big));
    b.pack(&[1, 0, 1, 1]);
    assert_eq!(b.unpack(0, 255), vec![255, 0, 255, 255]);
}

#[test]
fn ordering_and_equality_are_logical_not_physical() {
    let a = BitArray::from_str01("1101", EndianArg::Exact(Endian::Big)).unwrap();
    let b = BitArray::from_str01("1101", EndianArg::Exact(Endian::Little)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a.tobytes(), b.tobytes());
    assert!(BitArray::from_str01("0", EndianArg::Exact(Endian::Big)).unwrap() < a);
}
